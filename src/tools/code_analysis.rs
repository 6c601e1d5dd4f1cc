//! 代码分析工具
//!
//! 指令构造时把代码片段截断到前 500 个字符，约束 Prompt 体积。

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::intent::truncate_chars;
use crate::llm::LlmClient;
use crate::tools::{ResearchTool, ToolKind, ToolResult};

/// 嵌入 Prompt 的代码片段上限（字符数）
const SNIPPET_MAX_CHARS: usize = 500;

pub struct CodeAnalysisTool {
    llm: Arc<dyn LlmClient>,
}

impl CodeAnalysisTool {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResearchTool for CodeAnalysisTool {
    fn kind(&self) -> ToolKind {
        ToolKind::CodeAnalysis
    }

    fn prompt(&self, code: &str) -> String {
        format!(
            "请分析以下代码，指出潜在问题、优化建议，并评估其质量：\n```\n{}\n```",
            truncate_chars(code, SNIPPET_MAX_CHARS)
        )
    }

    async fn invoke(&self, code: &str) -> Result<ToolResult, AgentError> {
        tracing::info!("[工具] 代码分析");
        Ok(match self.llm.complete(&self.prompt(code)).await {
            Ok(content) => ToolResult::success([("analysis", content)]),
            Err(e) => ToolResult::error(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    #[tokio::test]
    async fn test_prompt_truncates_snippet_to_500_chars() {
        let llm = Arc::new(MockLlmClient::new());
        let tool = CodeAnalysisTool::new(llm.clone());
        let snippet = "x".repeat(600);

        tool.invoke(&snippet).await.unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(&"x".repeat(500)));
        assert!(!prompts[0].contains(&"x".repeat(501)));
    }

    #[test]
    fn test_short_snippet_embedded_in_full() {
        let tool = CodeAnalysisTool::new(Arc::new(MockLlmClient::new()));
        let prompt = tool.prompt("fn main() {}");
        assert!(prompt.contains("fn main() {}"));
    }
}
