//! 工具编排
//!
//! 按分类器给出的顺序逐个调用工具，严格串行。每次调用单独隔离：
//! 工具层未收敛的意外错误在本层转为 Error 条目，继续执行后续请求，
//! 单个工具失败不会中止整轮。每次调用输出结构化审计日志（JSON）。

use std::sync::Arc;
use std::time::Instant;

use crate::error::AgentError;
use crate::intent::{truncate_chars, ToolRequest};
use crate::llm::LlmClient;
use crate::tools::{
    AcademicQaTool, CodeAnalysisTool, ExecutionGuard, LiteratureReviewTool, ResearchPlanTool,
    ResearchTool, ToolKind, ToolResult, ToolResultSet,
};

/// 审计日志中参数预览的上限（字符数）
const ARG_PREVIEW_CHARS: usize = 60;

/// 工具编排器：持有固定的工具集合，按请求顺序逐个调用并聚合结果
pub struct ToolOrchestrator {
    tools: Vec<Arc<dyn ResearchTool>>,
}

impl ToolOrchestrator {
    pub fn new(tools: Vec<Arc<dyn ResearchTool>>) -> Self {
        Self { tools }
    }

    /// 注册全部四个科研工具；守卫注入文献综述工具（进程生命周期共享）
    pub fn with_default_tools(llm: Arc<dyn LlmClient>, guard: Arc<ExecutionGuard>) -> Self {
        Self::new(vec![
            Arc::new(LiteratureReviewTool::new(llm.clone(), guard)),
            Arc::new(AcademicQaTool::new(llm.clone())),
            Arc::new(CodeAnalysisTool::new(llm.clone())),
            Arc::new(ResearchPlanTool::new(llm)),
        ])
    }

    fn find(&self, kind: ToolKind) -> Option<&Arc<dyn ResearchTool>> {
        self.tools.iter().find(|t| t.kind() == kind)
    }

    /// 按请求顺序执行全部工具调用，返回聚合结果集。
    /// 无论多少次调用失败，结果集始终完整覆盖全部请求。
    pub async fn run(&self, requests: &[ToolRequest]) -> ToolResultSet {
        let mut results = ToolResultSet::new();
        for request in requests {
            let start = Instant::now();

            let result = match self.find(request.kind) {
                Some(tool) => match tool.invoke(&request.argument).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!("调用工具 {} 时出错: {e}", request.kind);
                        ToolResult::error(e.to_string())
                    }
                },
                None => {
                    ToolResult::error(AgentError::UnknownTool(request.kind.to_string()).to_string())
                }
            };

            let audit = serde_json::json!({
                "event": "tool_audit",
                "tool": request.kind.as_str(),
                "outcome": result.outcome(),
                "duration_ms": start.elapsed().as_millis() as u64,
                "arg_preview": truncate_chars(&request.argument, ARG_PREVIEW_CHARS),
            });
            tracing::info!(audit = %audit.to_string(), "tool");

            results.insert(request.kind, result);
        }
        results
    }
}
