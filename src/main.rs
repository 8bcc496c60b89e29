//! Cipin - 网页中文词频可视化
//!
//! 启动流程：加载配置 → 初始化日志 → 加载停用词和分词词典 → 注册图表后端 → 启动 HTTP 服务

use std::sync::Arc;

use anyhow::Context;
use cipin::application::ChartBackends;
use cipin::config::{load_config, print_config, LogConfig};
use cipin::infrastructure::adapters::{
    load_stop_words, EchartsBackend, EchartsConfig, HttpPageFetcher, HttpPageFetcherConfig,
    JiebaSegmenter, PlotlyBackend, PlotlyConfig, PlottersBackend, PlottersConfig,
};
use cipin::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},cipin={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().context("Failed to load config")?;

    init_tracing(&config.log);

    tracing::info!("Cipin - 网页中文词频可视化");
    print_config(&config);

    // 停用词缺失时拒绝启动
    let stop_words = load_stop_words(&config.analysis.stop_words_path)
        .await
        .context("Failed to load stop words")?;

    let segmenter = Arc::new(JiebaSegmenter::new(config.analysis.hmm));

    let fetcher = Arc::new(
        HttpPageFetcher::new(HttpPageFetcherConfig {
            user_agent: config.fetch.user_agent.clone(),
            timeout_secs: config.fetch.timeout_secs,
        })
        .context("Failed to build HTTP client")?,
    );

    // 注册顺序即页面下拉框顺序，第一个为默认库
    let backends = ChartBackends::new()
        .with(Arc::new(EchartsBackend::new(EchartsConfig {
            script_url: config.chart.echarts_js.clone(),
            wordcloud_script_url: config.chart.echarts_wordcloud_js.clone(),
            ..EchartsConfig::default()
        })))
        .with(Arc::new(PlotlyBackend::new(PlotlyConfig {
            script_url: config.chart.plotly_js.clone(),
            ..PlotlyConfig::default()
        })))
        .with(Arc::new(PlottersBackend::new(PlottersConfig {
            width: config.chart.width,
            height: config.chart.height,
            font_family: config.chart.font_family.clone(),
        })));

    let state = AppState::new(fetcher, segmenter, Arc::new(stop_words), backends)
        .with_default_min_freq(config.analysis.default_min_freq);

    let server = HttpServer::new(
        ServerConfig::new(&config.server.host, config.server.port),
        state,
    );

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
