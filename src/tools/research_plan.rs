//! 研究计划工具：为研究项目制定目标、技术路线、时间表与预期成果

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::tools::{ResearchTool, ToolKind, ToolResult};

pub struct ResearchPlanTool {
    llm: Arc<dyn LlmClient>,
}

impl ResearchPlanTool {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResearchTool for ResearchPlanTool {
    fn kind(&self) -> ToolKind {
        ToolKind::ResearchPlan
    }

    fn prompt(&self, project: &str) -> String {
        format!("请为研究项目'{project}'制定一份详细计划，包含目标、技术路线、时间表和预期成果。")
    }

    async fn invoke(&self, project: &str) -> Result<ToolResult, AgentError> {
        tracing::info!("[工具] 研究计划: {project}");
        Ok(match self.llm.complete(&self.prompt(project)).await {
            Ok(content) => {
                ToolResult::success([("project", project.to_string()), ("plan", content)])
            }
            Err(e) => ToolResult::error(e),
        })
    }
}
