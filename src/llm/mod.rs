//! LLM 层：客户端抽象与实现（OpenAI 兼容 / DeepSeek / Mock）

pub mod deepseek;
pub mod mock;
pub mod openai;
pub mod traits;

use std::sync::Arc;

pub use deepseek::{create_deepseek_client, DEEPSEEK_CHAT, DEEPSEEK_REASONER};
pub use mock::MockLlmClient;
pub use openai::{OpenAiClient, TokenUsage};
pub use traits::LlmClient;

use crate::config::AppConfig;

/// 根据配置创建 LLM 客户端：provider 取 deepseek / openai / mock
pub fn create_llm_from_config(cfg: &AppConfig) -> Arc<dyn LlmClient> {
    match cfg.llm.provider.as_str() {
        "openai" => Arc::new(OpenAiClient::new(
            cfg.llm.base_url.as_deref(),
            &cfg.llm.model,
            None,
        )),
        "mock" => Arc::new(MockLlmClient::new()),
        // 默认 deepseek；base_url 配置可覆盖官方端点
        _ => match cfg.llm.base_url.as_deref() {
            Some(url) => Arc::new(OpenAiClient::new(
                Some(url),
                &cfg.llm.model,
                std::env::var("DEEPSEEK_API_KEY").ok().as_deref(),
            )),
            None => Arc::new(create_deepseek_client(Some(&cfg.llm.model))),
        },
    }
}
