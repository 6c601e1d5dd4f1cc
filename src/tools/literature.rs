//! 文献综述工具
//!
//! 四个工具中唯一持有跨轮共享状态的：调用前先查重复抑制守卫，
//! 相同主题前缀在本进程内只执行一次远程调用。

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::tools::{ExecutionGuard, ResearchTool, ToolKind, ToolResult};

pub struct LiteratureReviewTool {
    llm: Arc<dyn LlmClient>,
    guard: Arc<ExecutionGuard>,
}

impl LiteratureReviewTool {
    pub fn new(llm: Arc<dyn LlmClient>, guard: Arc<ExecutionGuard>) -> Self {
        Self { llm, guard }
    }
}

#[async_trait]
impl ResearchTool for LiteratureReviewTool {
    fn kind(&self) -> ToolKind {
        ToolKind::LiteratureReview
    }

    fn prompt(&self, topic: &str) -> String {
        format!("请为研究主题'{topic}'撰写一篇结构完整的文献综述，包含背景、方法、近期进展和未来挑战。")
    }

    async fn invoke(&self, topic: &str) -> Result<ToolResult, AgentError> {
        let key = ExecutionGuard::key_for(self.kind(), topic);
        if !self.guard.try_mark(&key)? {
            tracing::debug!("检测到 literature_review 重复调用，已跳过");
            return Ok(ToolResult::skipped("重复调用已跳过"));
        }

        tracing::info!("[工具] 文献综述: {topic}");
        Ok(match self.llm.complete(&self.prompt(topic)).await {
            Ok(content) => {
                ToolResult::success([("topic", topic.to_string()), ("content", content)])
            }
            Err(e) => ToolResult::error(e),
        })
    }
}
