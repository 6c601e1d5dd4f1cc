//! 科研工具箱
//!
//! 每个工具实现 ResearchTool trait（kind / prompt / invoke）：以固定模板构造指令文本，
//! 发起一次 LLM 调用，并把调用结果统一收敛为 ToolResult（成功 / 失败 / 跳过）。

pub mod academic_qa;
pub mod code_analysis;
pub mod guard;
pub mod literature;
pub mod research_plan;
pub mod result;

use std::fmt;

use async_trait::async_trait;

use crate::error::AgentError;

pub use academic_qa::AcademicQaTool;
pub use code_analysis::CodeAnalysisTool;
pub use guard::ExecutionGuard;
pub use literature::LiteratureReviewTool;
pub use research_plan::ResearchPlanTool;
pub use result::{ToolResult, ToolResultSet};

/// 工具类别：四个科研工具的固定集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    LiteratureReview,
    AcademicQa,
    CodeAnalysis,
    ResearchPlan,
}

impl ToolKind {
    /// 稳定的线格式名称（用于结果 JSON 的键与日志）
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::LiteratureReview => "literature_review",
            ToolKind::AcademicQa => "academic_qa",
            ToolKind::CodeAnalysis => "code_analysis",
            ToolKind::ResearchPlan => "research_plan",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 科研工具 trait：类别、指令构造（纯函数，测试可直接检查）、单次调用执行。
/// invoke 内部把 LLM 调用失败转为 ToolResult::Error；Err 仅用于意外故障
/// （如守卫锁中毒），由编排层兜底转为 Error 条目。
#[async_trait]
pub trait ResearchTool: Send + Sync {
    /// 工具类别
    fn kind(&self) -> ToolKind;

    /// 构造发送给 LLM 的指令文本
    fn prompt(&self, argument: &str) -> String;

    /// 执行一次工具调用
    async fn invoke(&self, argument: &str) -> Result<ToolResult, AgentError>;
}
