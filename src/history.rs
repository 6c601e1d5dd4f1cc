//! 会话历史
//!
//! 逐轮追加的处理记录，仅存活于进程内存。默认不设上限（与参考行为一致，
//! 长时间运行会持续增长——已知设计缺口，按原样保留）；可通过配置
//! `[app] max_history` 启用上限，超出时丢弃最旧记录。

use chrono::{DateTime, Local};

use crate::intent::truncate_chars;

/// 回答预览保留的字符数
const RESPONSE_PREVIEW_CHARS: usize = 100;

/// 单轮处理记录：完整查询、回答前 100 字符、耗时与开始时间
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub query: String,
    pub response_preview: String,
    pub elapsed_secs: f64,
    pub started_at: DateTime<Local>,
}

impl TurnRecord {
    pub fn new(query: &str, response: &str, elapsed_secs: f64, started_at: DateTime<Local>) -> Self {
        Self {
            query: query.to_string(),
            response_preview: truncate_chars(response, RESPONSE_PREVIEW_CHARS),
            elapsed_secs,
            started_at,
        }
    }
}

/// 会话历史：只追加，不修改已有记录
#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<TurnRecord>,
    max_records: Option<usize>,
}

impl SessionHistory {
    /// 默认无上限
    pub fn new() -> Self {
        Self::default()
    }

    /// 可选上限：Some(n) 时最多保留最近 n 条
    pub fn with_cap(max_records: Option<usize>) -> Self {
        Self {
            records: Vec::new(),
            max_records,
        }
    }

    pub fn append(&mut self, record: TurnRecord) {
        self.records.push(record);
        if let Some(cap) = self.max_records {
            if self.records.len() > cap {
                let drop = self.records.len() - cap;
                self.records.drain(..drop);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(query: &str, response: &str) -> TurnRecord {
        TurnRecord::new(query, response, 0.5, Local::now())
    }

    #[test]
    fn test_append_and_len() {
        let mut history = SessionHistory::new();
        history.append(record("问题一", "回答一"));
        history.append(record("问题二", "回答二"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].query, "问题一");
    }

    #[test]
    fn test_response_preview_truncated_to_100_chars() {
        let long_response = "答".repeat(150);
        let history_record = record("问题", &long_response);
        assert_eq!(history_record.response_preview.chars().count(), 100);
        // 查询本身完整保留
        assert_eq!(history_record.query, "问题");
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut history = SessionHistory::new();
        for i in 0..1000 {
            history.append(record(&format!("问题{i}"), "回答"));
        }
        assert_eq!(history.len(), 1000);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = SessionHistory::with_cap(Some(2));
        history.append(record("一", "回答"));
        history.append(record("二", "回答"));
        history.append(record("三", "回答"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].query, "二");
    }
}
