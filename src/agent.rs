//! 科研助手 Agent：单轮处理流水线
//!
//! process 对一条查询完成一整轮：意图分类 → 工具编排（无命中时跳过）→
//! 回答合成 → 历史记录。三类轮内失败各有归宿：工具调用失败在工具层收敛为
//! Error 结果；合成失败替换为提示文本；其余意外错误在轮边界兜底——
//! 任何一轮的错误都不会传播到交互循环。

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;

use crate::config::AppConfig;
use crate::error::AgentError;
use crate::history::{SessionHistory, TurnRecord};
use crate::intent::{classify, truncate_chars};
use crate::llm::LlmClient;
use crate::orchestrator::ToolOrchestrator;
use crate::synthesizer::ResponseSynthesizer;
use crate::tools::{ExecutionGuard, ToolResultSet};

/// 单轮处理结果（面向调用方的结构化返回，无论成败都有）
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub success: bool,
    pub query: String,
    pub response: String,
    /// 本轮调用过的工具名称（按调用顺序）
    pub tools_used: Vec<&'static str>,
    /// 耗时（秒，保留两位小数）
    pub time_cost: f64,
}

/// 科研助手 Agent：持有编排器、合成器与会话历史，存活于一次运行
pub struct ResearchAgent {
    orchestrator: ToolOrchestrator,
    synthesizer: ResponseSynthesizer,
    history: SessionHistory,
    llm: Arc<dyn LlmClient>,
}

impl ResearchAgent {
    pub fn new(llm: Arc<dyn LlmClient>, cfg: &AppConfig) -> Self {
        // 守卫为进程生命周期，跨轮共享
        let guard = Arc::new(ExecutionGuard::new());
        Self {
            orchestrator: ToolOrchestrator::with_default_tools(llm.clone(), guard),
            synthesizer: ResponseSynthesizer::new(llm.clone()),
            history: SessionHistory::with_cap(cfg.app.max_history),
            llm,
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// 累计 token 使用统计：(prompt, completion, total)
    pub fn token_usage(&self) -> (u64, u64, u64) {
        self.llm.token_usage()
    }

    /// 处理一条用户查询，完成一整轮并追加历史记录
    pub async fn process(&mut self, query: &str) -> TurnOutcome {
        let start = Instant::now();
        let started_at = Local::now();
        tracing::info!("处理: {}...", truncate_chars(query, 50));

        let requests = classify(query);
        let results = if requests.is_empty() {
            ToolResultSet::new()
        } else {
            self.orchestrator.run(&requests).await
        };
        let tools_used = results.tools_used();

        let (response, success) = match self.synthesizer.synthesize(query, &results).await {
            Ok(text) => (text, true),
            Err(AgentError::Llm(e)) => {
                tracing::warn!("调用AI模型失败: {e}");
                (format!("生成回答时出错：{e}"), false)
            }
            // 轮边界兜底：未预料到的错误也要产出结构化结果
            Err(e) => {
                tracing::error!("处理查询时发生意外错误: {e}");
                (format!("处理请求时发生系统错误：{e}"), false)
            }
        };

        let elapsed = start.elapsed().as_secs_f64();
        self.history
            .append(TurnRecord::new(query, &response, elapsed, started_at));

        TurnOutcome {
            success,
            query: query.to_string(),
            response,
            tools_used,
            time_cost: (elapsed * 100.0).round() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    fn agent_with(llm: Arc<MockLlmClient>) -> ResearchAgent {
        ResearchAgent::new(llm, &AppConfig::default())
    }

    #[tokio::test]
    async fn test_no_keyword_query_goes_straight_to_synthesis() {
        let llm = Arc::new(MockLlmClient::with_replies(vec![Ok("直接回答".to_string())]));
        let mut agent = agent_with(llm.clone());

        let outcome = agent.process("今天心情不错").await;
        assert!(outcome.success);
        assert!(outcome.tools_used.is_empty());
        assert_eq!(outcome.response, "直接回答");
        // 仅一次调用，且 Prompt 就是原始查询
        assert_eq!(llm.prompts(), vec!["今天心情不错".to_string()]);
    }

    #[tokio::test]
    async fn test_synthesis_failure_yields_recorded_turn() {
        let llm = Arc::new(MockLlmClient::with_replies(vec![Err("服务不可用".to_string())]));
        let mut agent = agent_with(llm);

        let outcome = agent.process("你好").await;
        assert!(!outcome.success);
        assert!(outcome.response.contains("生成回答时出错"));
        assert_eq!(agent.history().len(), 1);
    }

    #[tokio::test]
    async fn test_each_turn_appends_exactly_one_record() {
        let llm = Arc::new(MockLlmClient::new());
        let mut agent = agent_with(llm);

        agent.process("什么是图神经网络").await;
        agent.process("随便聊聊").await;
        assert_eq!(agent.history().len(), 2);
    }
}
