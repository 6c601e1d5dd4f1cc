//! 工具结果类型
//!
//! ToolResult 以显式标签区分成功 / 失败 / 跳过，替代跨层异常传播；
//! ToolResultSet 按调用顺序聚合各工具结果，序列化供合成 Prompt 使用。

use serde::Serialize;
use serde_json::{Map, Value};

use crate::tools::ToolKind;

/// 单次工具调用的结果。序列化带 "status" 标签，成功时平铺工具自定义字段
/// （如文献综述的 topic / content），字段顺序为插入序。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    Success {
        #[serde(flatten)]
        fields: Map<String, Value>,
    },
    Error {
        error: String,
    },
    Skipped {
        note: String,
    },
}

impl ToolResult {
    /// 成功结果：按给定顺序收纳命名字段
    pub fn success<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut map = Map::new();
        for (name, value) in fields {
            map.insert(name.to_string(), Value::String(value));
        }
        ToolResult::Success { fields: map }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolResult::Error {
            error: message.into(),
        }
    }

    pub fn skipped(note: impl Into<String>) -> Self {
        ToolResult::Skipped { note: note.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolResult::Error { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ToolResult::Skipped { .. })
    }

    /// 审计日志用的结果标签
    pub fn outcome(&self) -> &'static str {
        match self {
            ToolResult::Success { .. } => "ok",
            ToolResult::Error { .. } => "error",
            ToolResult::Skipped { .. } => "skipped",
        }
    }
}

/// 一轮内的工具结果集合：键为工具类别（每轮唯一），保持调用顺序
#[derive(Debug, Clone, Default)]
pub struct ToolResultSet {
    entries: Vec<(ToolKind, ToolResult)>,
}

impl ToolResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个工具的结果。每轮每个类别至多出现一次（分类器保证）
    pub fn insert(&mut self, kind: ToolKind, result: ToolResult) {
        debug_assert!(
            !self.entries.iter().any(|(k, _)| *k == kind),
            "duplicate tool kind in one turn: {kind}"
        );
        self.entries.push((kind, result));
    }

    pub fn get(&self, kind: ToolKind) -> Option<&ToolResult> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| r)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ToolKind, ToolResult)> {
        self.entries.iter()
    }

    /// 本轮调用过的工具名称（按调用顺序）
    pub fn tools_used(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// 序列化为 JSON 对象文本：键与字段均为插入序，非 ASCII 文本不转义
    pub fn to_json(&self) -> String {
        let mut map = Map::new();
        for (kind, result) in &self.entries {
            map.insert(
                kind.as_str().to_string(),
                serde_json::to_value(result).unwrap_or(Value::Null),
            );
        }
        Value::Object(map).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_with_status_and_field_order() {
        let result = ToolResult::success([
            ("topic", "图神经网络".to_string()),
            ("content", "综述正文".to_string()),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"status":"success","topic":"图神经网络","content":"综述正文"}"#
        );
    }

    #[test]
    fn test_error_and_skipped_tags() {
        assert_eq!(
            serde_json::to_string(&ToolResult::error("超时")).unwrap(),
            r#"{"status":"error","error":"超时"}"#
        );
        assert_eq!(
            serde_json::to_string(&ToolResult::skipped("重复调用已跳过")).unwrap(),
            r#"{"status":"skipped","note":"重复调用已跳过"}"#
        );
    }

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut set = ToolResultSet::new();
        set.insert(
            ToolKind::AcademicQa,
            ToolResult::success([("concept", "注意力机制".to_string())]),
        );
        set.insert(ToolKind::CodeAnalysis, ToolResult::error("失败"));
        assert_eq!(set.tools_used(), vec!["academic_qa", "code_analysis"]);

        let json = set.to_json();
        let qa_pos = json.find("academic_qa").unwrap();
        let code_pos = json.find("code_analysis").unwrap();
        assert!(qa_pos < code_pos);
    }

    #[test]
    fn test_json_keeps_non_ascii_unescaped() {
        let mut set = ToolResultSet::new();
        set.insert(
            ToolKind::AcademicQa,
            ToolResult::success([("concept", "卷积神经网络".to_string())]),
        );
        assert!(set.to_json().contains("卷积神经网络"));
    }
}
