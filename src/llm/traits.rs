//! LLM 客户端抽象
//!
//! 所有后端（OpenAI 兼容 / DeepSeek / Mock）实现 LlmClient：complete（单 Prompt 非流式）。

use async_trait::async_trait;

/// LLM 客户端 trait：单 Prompt 非流式完成
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 以单条用户消息发起一次完成调用，返回回复文本
    async fn complete(&self, prompt: &str) -> Result<String, String>;

    /// 获取累计 token 使用统计：(prompt_tokens, completion_tokens, total_tokens)
    /// 默认返回 (0, 0, 0)，具体实现可覆盖
    fn token_usage(&self) -> (u64, u64, u64) {
        (0, 0, 0)
    }
}
