//! DeepSeek API 客户端（OpenAI 兼容格式）
//!
//! DeepSeek 的 API 与 OpenAI 完全兼容，直接复用 OpenAiClient，仅固定端点与密钥来源。

use crate::llm::OpenAiClient;

/// DeepSeek API 常量
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEEPSEEK_CHAT: &str = "deepseek-chat";
pub const DEEPSEEK_REASONER: &str = "deepseek-reasoner";

/// 创建 DeepSeek 客户端
///
/// 密钥取环境变量 `DEEPSEEK_API_KEY`（启动时已由 main 校验存在）；
/// 模型按 `model` 参数 → `DEEPSEEK_MODEL` 环境变量 → deepseek-chat 的顺序确定。
pub fn create_deepseek_client(model: Option<&str>) -> OpenAiClient {
    let api_key = std::env::var("DEEPSEEK_API_KEY").ok();

    let model = model
        .map(String::from)
        .or_else(|| std::env::var("DEEPSEEK_MODEL").ok())
        .unwrap_or_else(|| DEEPSEEK_CHAT.to_string());

    OpenAiClient::new(Some(DEEPSEEK_BASE_URL), &model, api_key.as_deref())
}
