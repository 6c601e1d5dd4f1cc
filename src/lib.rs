//! Sage - Rust 科研助手智能体
//!
//! 模块划分：
//! - **agent**: 单轮处理流水线（意图分类 → 工具编排 → 回答合成 → 历史记录）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **console**: 控制台交互循环（exit / quit / status）
//! - **history**: 会话历史（逐轮追加的处理记录）
//! - **intent**: 关键词意图分类（规则表驱动）
//! - **llm**: LLM 客户端抽象与实现（OpenAI 兼容 / DeepSeek / Mock）
//! - **orchestrator**: 工具顺序编排与单点失败隔离
//! - **synthesizer**: 最终回答合成（整合工具结果的二次调用）
//! - **tools**: 科研工具箱（文献综述、学术问答、代码分析、研究计划）

pub mod agent;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod intent;
pub mod llm;
pub mod orchestrator;
pub mod synthesizer;
pub mod tools;

pub use agent::{ResearchAgent, TurnOutcome};
pub use error::AgentError;
