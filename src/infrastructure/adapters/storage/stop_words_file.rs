//! Stop Words File - 从文本文件加载停用词表
//!
//! UTF-8 编码，每行一个词

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::StopWordSet;

/// 默认停用词文件（相对于工作目录）
pub const DEFAULT_STOP_WORDS_PATH: &str = "stop_words.txt";

/// 停用词加载错误
#[derive(Debug, Error)]
pub enum StopWordsError {
    #[error("停用词文件不存在: {0}")]
    NotFound(PathBuf),

    #[error("读取停用词文件失败 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 加载停用词表
pub async fn load_stop_words(path: impl AsRef<Path>) -> Result<StopWordSet, StopWordsError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StopWordsError::NotFound(path.to_path_buf()),
        _ => StopWordsError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let stop_words = StopWordSet::parse(&content);

    tracing::info!(
        path = %path.display(),
        count = stop_words.len(),
        "Stop words loaded"
    );

    Ok(stop_words)
}
