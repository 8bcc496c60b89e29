//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::DEFAULT_MIN_FREQ;
use crate::infrastructure::adapters::{
    DEFAULT_FIGURE_SIZE, DEFAULT_FONT_FAMILY, DEFAULT_STOP_WORDS_PATH, DEFAULT_USER_AGENT,
    ECHARTS_SCRIPT_URL, ECHARTS_WORDCLOUD_SCRIPT_URL, PLOTLY_SCRIPT_URL,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 网页抓取配置
    #[serde(default)]
    pub fetch: FetchConfig,

    /// 分词统计配置
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// 图表配置
    #[serde(default)]
    pub chart: ChartConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 网页抓取配置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// 请求头 User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

/// 分词统计配置
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// 停用词文件，UTF-8，每行一个词
    #[serde(default = "default_stop_words_path")]
    pub stop_words_path: PathBuf,

    /// 页面滑块的初始最小词频
    #[serde(default = "default_min_freq")]
    pub default_min_freq: u32,

    /// jieba 是否启用 HMM 新词识别
    #[serde(default = "default_hmm")]
    pub hmm: bool,
}

fn default_stop_words_path() -> PathBuf {
    PathBuf::from(DEFAULT_STOP_WORDS_PATH)
}

fn default_min_freq() -> u32 {
    DEFAULT_MIN_FREQ
}

fn default_hmm() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words_path: default_stop_words_path(),
            default_min_freq: default_min_freq(),
            hmm: default_hmm(),
        }
    }
}

/// 图表配置
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// 服务端绘图使用的字体族
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// 服务端绘图宽度（像素）
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// 服务端绘图高度（像素）
    #[serde(default = "default_chart_height")]
    pub height: u32,

    #[serde(default = "default_echarts_js")]
    pub echarts_js: String,

    #[serde(default = "default_echarts_wordcloud_js")]
    pub echarts_wordcloud_js: String,

    #[serde(default = "default_plotly_js")]
    pub plotly_js: String,
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_chart_width() -> u32 {
    DEFAULT_FIGURE_SIZE.0
}

fn default_chart_height() -> u32 {
    DEFAULT_FIGURE_SIZE.1
}

fn default_echarts_js() -> String {
    ECHARTS_SCRIPT_URL.to_string()
}

fn default_echarts_wordcloud_js() -> String {
    ECHARTS_WORDCLOUD_SCRIPT_URL.to_string()
}

fn default_plotly_js() -> String {
    PLOTLY_SCRIPT_URL.to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            width: default_chart_width(),
            height: default_chart_height(),
            echarts_js: default_echarts_js(),
            echarts_wordcloud_js: default_echarts_wordcloud_js(),
            plotly_js: default_plotly_js(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8501");
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.analysis.stop_words_path, PathBuf::from("stop_words.txt"));
        assert_eq!(config.analysis.default_min_freq, 2);
        assert_eq!((config.chart.width, config.chart.height), (1200, 600));
        assert_eq!(config.log.level, "info");
    }
}
