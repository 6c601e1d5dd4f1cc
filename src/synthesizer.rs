//! 回答合成
//!
//! 把原始查询与工具结果集拼成一条合成 Prompt，发起最终一次 LLM 调用。
//! 结果集为空时 Prompt 就是原始查询本身。合成失败对本轮是终态（不重试），
//! 由调用方替换为提示文本，不影响进程存活。

use std::sync::Arc;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::tools::ToolResultSet;

pub struct ResponseSynthesizer {
    llm: Arc<dyn LlmClient>,
}

impl ResponseSynthesizer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// 构造合成 Prompt（纯函数，测试可直接检查）
    pub fn build_prompt(query: &str, results: &ToolResultSet) -> String {
        if results.is_empty() {
            query.to_string()
        } else {
            format!(
                "用户问：{query}\n\n工具分析结果：{}\n请整合以上信息，给出专业回答。",
                results.to_json()
            )
        }
    }

    /// 执行最终合成调用，返回面向用户的回答文本
    pub async fn synthesize(
        &self,
        query: &str,
        results: &ToolResultSet,
    ) -> Result<String, AgentError> {
        let prompt = Self::build_prompt(query, results);
        self.llm.complete(&prompt).await.map_err(AgentError::Llm)
    }
}
