//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AnalysisConfig, AppConfig, ChartConfig, FetchConfig, LogConfig, ServerConfig};
use crate::application::MIN_FREQ_RANGE;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 环境变量前缀 `CIPIN_`，层级分隔符 `__`，例如：
/// - `CIPIN_SERVER__PORT=8080`
/// - `CIPIN_FETCH__TIMEOUT_SECS=10`
/// - `CIPIN_ANALYSIS__STOP_WORDS_PATH=/etc/cipin/stop_words.txt`
/// - `CIPIN_CHART__FONT_FAMILY="Noto Sans CJK SC"`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索工作目录下的 config.toml / config.local.toml
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let server = ServerConfig::default();
    let fetch = FetchConfig::default();
    let analysis = AnalysisConfig::default();
    let chart = ChartConfig::default();
    let log = LogConfig::default();

    // 1. 默认值
    let mut builder = Config::builder()
        .set_default("server.host", server.host)?
        .set_default("server.port", server.port)?
        .set_default("fetch.user_agent", fetch.user_agent)?
        .set_default("fetch.timeout_secs", fetch.timeout_secs)?
        .set_default(
            "analysis.stop_words_path",
            analysis.stop_words_path.to_string_lossy().into_owned(),
        )?
        .set_default("analysis.default_min_freq", analysis.default_min_freq)?
        .set_default("analysis.hmm", analysis.hmm)?
        .set_default("chart.font_family", chart.font_family)?
        .set_default("chart.width", chart.width)?
        .set_default("chart.height", chart.height)?
        .set_default("chart.echarts_js", chart.echarts_js)?
        .set_default("chart.echarts_wordcloud_js", chart.echarts_wordcloud_js)?
        .set_default("chart.plotly_js", chart.plotly_js)?
        .set_default("log.level", log.level)?
        .set_default("log.json", log.json)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    builder = builder.add_source(
        Environment::with_prefix("CIPIN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let app_config: AppConfig = builder.build()?.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let fail = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));

    if config.server.port == 0 {
        return fail("Server port cannot be 0");
    }
    if config.fetch.user_agent.trim().is_empty() {
        return fail("Fetch user agent cannot be empty");
    }
    if config.fetch.timeout_secs == 0 {
        return fail("Fetch timeout cannot be 0");
    }
    if !MIN_FREQ_RANGE.contains(&config.analysis.default_min_freq) {
        return Err(ConfigError::ValidationError(format!(
            "Default min frequency must be between {} and {}",
            MIN_FREQ_RANGE.start(),
            MIN_FREQ_RANGE.end()
        )));
    }
    if config.analysis.stop_words_path.as_os_str().is_empty() {
        return fail("Stop words path cannot be empty");
    }
    if config.chart.width == 0 || config.chart.height == 0 {
        return fail("Chart size cannot be 0");
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Fetch Timeout: {}s", config.fetch.timeout_secs);
    tracing::info!("Fetch User-Agent: {}", config.fetch.user_agent);
    tracing::info!("Stop Words: {:?}", config.analysis.stop_words_path);
    tracing::info!("Default Min Frequency: {}", config.analysis.default_min_freq);
    tracing::info!("Jieba HMM: {}", config.analysis.hmm);
    tracing::info!("Chart Font: {}", config.chart.font_family);
    tracing::info!("Chart Size: {}x{}", config.chart.width, config.chart.height);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_default_config() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let cases: [fn(&mut AppConfig); 7] = [
            |c| c.server.port = 0,
            |c| c.fetch.user_agent = " ".to_string(),
            |c| c.fetch.timeout_secs = 0,
            |c| c.analysis.default_min_freq = 0,
            |c| c.analysis.default_min_freq = 11,
            |c| c.analysis.stop_words_path = Default::default(),
            |c| c.chart.width = 0,
        ];

        for mutate in cases {
            let mut config = AppConfig::default();
            mutate(&mut config);
            assert!(matches!(
                validate_config(&config),
                Err(ConfigError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[fetch]\ntimeout_secs = 5\n\n[chart]\nfont_family = \"Noto Sans CJK SC\""
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.chart.font_family, "Noto Sans CJK SC");
        assert_eq!(config.chart.width, 1200);
        assert_eq!(config.analysis.default_min_freq, 2);
    }

    #[test]
    fn test_empty_file_loads_struct_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let loaded = load_config_from_path(Some(&path)).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(loaded.server.addr(), defaults.server.addr());
        assert_eq!(loaded.fetch.user_agent, defaults.fetch.user_agent);
        assert_eq!(loaded.analysis.stop_words_path, defaults.analysis.stop_words_path);
        assert_eq!(loaded.analysis.default_min_freq, defaults.analysis.default_min_freq);
        assert_eq!(loaded.chart.echarts_js, defaults.chart.echarts_js);
        assert_eq!(loaded.chart.plotly_js, defaults.chart.plotly_js);
        assert_eq!(loaded.chart.font_family, defaults.chart.font_family);
        assert_eq!(loaded.log.level, defaults.log.level);
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ndefault_min_freq = 42\n").unwrap();

        assert!(matches!(
            load_config_from_path(Some(&path)),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            load_config_from_path(Some(&path)),
            Err(ConfigError::LoadError(_))
        ));
    }
}
