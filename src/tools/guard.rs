//! 重复调用抑制守卫
//!
//! 进程生命周期内的键存在表：同一逻辑调用（工具名 + 主题前 20 字符）只允许执行一次，
//! 再次出现时调用方应短路为 Skipped。源行为仅文献综述工具使用此守卫，且运行期间
//! 从不清除（是限流还是调试残留意图不明，按原样保留，勿推广到其他工具）。
//! 内部用 Mutex 保护，若将来并行化调用也不会出现双重放行。

use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::AgentError;
use crate::intent::truncate_chars;
use crate::tools::ToolKind;

/// 守卫键的主题前缀长度
const KEY_PREFIX_CHARS: usize = 20;

/// 键存在表：一经标记永久保留（进程生命周期）
#[derive(Debug, Default)]
pub struct ExecutionGuard {
    seen: Mutex<HashSet<String>>,
}

impl ExecutionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由工具类别与主题派生守卫键
    pub fn key_for(kind: ToolKind, topic: &str) -> String {
        format!("{}_{}", kind.as_str(), truncate_chars(topic, KEY_PREFIX_CHARS))
    }

    /// 标记一个键。返回 true 表示首次出现（可以执行），false 表示重复（应跳过）
    pub fn try_mark(&self, key: &str) -> Result<bool, AgentError> {
        let mut seen = self
            .seen
            .lock()
            .map_err(|e| AgentError::Internal(format!("guard lock poisoned: {e}")))?;
        Ok(seen.insert(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mark_passes_second_blocks() {
        let guard = ExecutionGuard::new();
        assert!(guard.try_mark("literature_review_图神经网络").unwrap());
        assert!(!guard.try_mark("literature_review_图神经网络").unwrap());
    }

    #[test]
    fn test_key_uses_first_20_chars_of_topic() {
        let long_topic = "多".repeat(25);
        let key = ExecutionGuard::key_for(ToolKind::LiteratureReview, &long_topic);
        assert_eq!(key, format!("literature_review_{}", "多".repeat(20)));
    }

    #[test]
    fn test_distinct_prefixes_are_independent() {
        let guard = ExecutionGuard::new();
        assert!(guard.try_mark("literature_review_主题甲").unwrap());
        assert!(guard.try_mark("literature_review_主题乙").unwrap());
    }
}
