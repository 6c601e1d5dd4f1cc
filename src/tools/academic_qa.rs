//! 学术问答工具：解释学术概念、术语或技术

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::tools::{ResearchTool, ToolKind, ToolResult};

pub struct AcademicQaTool {
    llm: Arc<dyn LlmClient>,
}

impl AcademicQaTool {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResearchTool for AcademicQaTool {
    fn kind(&self) -> ToolKind {
        ToolKind::AcademicQa
    }

    fn prompt(&self, concept: &str) -> String {
        format!(
            "请对以下学术概念或技术进行清晰、准确、全面的解释：\n\
             概念：“{concept}”\n\
             请按以下结构组织内容：\n\
             1. **基本定义**：用一句话精炼概括。\n\
             2. **核心原理**：阐述其工作原理或核心思想。\n\
             3. **主要应用**：列举2-3个典型应用场景。\n\
             4. **意义与挑战**：简要说明其重要性及当前面临的挑战或未来方向。\n\
             请确保解释专业且易于理解。"
        )
    }

    async fn invoke(&self, concept: &str) -> Result<ToolResult, AgentError> {
        tracing::info!("[工具] 学术问答: {concept}");
        Ok(match self.llm.complete(&self.prompt(concept)).await {
            Ok(content) => {
                ToolResult::success([("concept", concept.to_string()), ("content", content)])
            }
            Err(e) => ToolResult::error(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    #[tokio::test]
    async fn test_success_carries_concept_and_content() {
        let llm = Arc::new(MockLlmClient::with_replies(vec![Ok("解释文本".to_string())]));
        let tool = AcademicQaTool::new(llm);

        let result = tool.invoke("卷积神经网络").await.unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""status":"success""#));
        assert!(json.contains(r#""concept":"卷积神经网络""#));
        assert!(json.contains(r#""content":"解释文本""#));
    }
}
