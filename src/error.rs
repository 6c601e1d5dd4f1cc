//! Agent 错误类型
//!
//! 轮内错误的载体：合成调用失败（在 agent 层替换为提示文本）、未注册工具、
//! 内部状态异常（在编排层转为 Error 结果条目）。所有变体均为轮内可恢复错误，
//! 不会终止会话；进程级致命错误只存在于启动阶段（凭证缺失），由 main 处理。

use thiserror::Error;

/// Agent 运行过程中可能出现的错误
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// 内部状态异常（如守卫锁中毒）
    #[error("Internal error: {0}")]
    Internal(String),
}
