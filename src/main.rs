//! Sage - Rust 科研助手智能体
//!
//! 入口：初始化日志、检查启动凭证、创建 Agent 并运行控制台循环。

use anyhow::bail;
use sage::config::{load_config, AppConfig};
use sage::llm::create_llm_from_config;
use sage::{console, ResearchAgent};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志：默认 info，可通过 RUST_LOG 覆盖
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with(fmt::layer())
        .init();

    let cfg = load_config(None).unwrap_or_else(|e| {
        tracing::warn!("配置加载失败，使用默认值: {e}");
        AppConfig::default()
    });

    // 启动前检查凭证：缺失是唯一的进程级致命错误
    match cfg.llm.provider.as_str() {
        "openai" => {
            if std::env::var("OPENAI_API_KEY").is_err() {
                bail!("未设置环境变量 'OPENAI_API_KEY'。请先 export OPENAI_API_KEY='您的密钥'");
            }
        }
        "mock" => {}
        _ => {
            if std::env::var("DEEPSEEK_API_KEY").is_err() {
                bail!(
                    "未设置环境变量 'DEEPSEEK_API_KEY'。\n\
                     Linux/Mac: export DEEPSEEK_API_KEY='您的密钥'\n\
                     Windows: set DEEPSEEK_API_KEY=您的密钥"
                );
            }
        }
    }

    tracing::info!("启动 Sage 科研助手...");
    let llm = create_llm_from_config(&cfg);
    let mut agent = ResearchAgent::new(llm, &cfg);

    console::run(&mut agent).await
}
