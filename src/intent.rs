//! 意图分类：关键词规则表
//!
//! 对用户查询做四组独立的关键词包含检测，按固定优先级产出工具请求序列。
//! 纯函数、无 I/O、永不失败；规则表是数据而非分支，便于单独测试与调整。

use crate::tools::ToolKind;

/// 一次工具调用请求：工具类别 + 提取出的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    pub kind: ToolKind,
    pub argument: String,
}

/// 分类规则表：按优先级排列（文献综述 → 学术问答 → 代码分析 → 研究计划）。
/// 同一查询可命中多条规则（类别非互斥），但每个类别至多产出一条请求。
const RULES: &[(ToolKind, &[&str])] = &[
    (ToolKind::LiteratureReview, &["文献", "综述", "调研"]),
    (
        ToolKind::AcademicQa,
        &[
            "什么是", "解释", "定义", "简述", "介绍", "含义", "什么意思", "为何", "为什么",
        ],
    ),
    (ToolKind::CodeAnalysis, &["代码", "程序", "编程", "bug", "错误"]),
    (ToolKind::ResearchPlan, &["计划", "方案", "项目", "规划"]),
];

/// 文献综述 / 研究计划的参数取查询前 30 个字符（主题/项目名通常在句首）
const SHORT_ARG_CHARS: usize = 30;

/// 按字符数截断（而非字节数，查询多为中文）
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// 对查询分类，返回按优先级排列的工具请求序列。
/// 未命中任何关键词时返回空序列，调用方应跳过编排、直接合成。
pub fn classify(query: &str) -> Vec<ToolRequest> {
    let mut requests = Vec::new();
    for (kind, keywords) in RULES {
        if keywords.iter().any(|k| query.contains(k)) {
            requests.push(ToolRequest {
                kind: *kind,
                argument: extract_argument(*kind, query),
            });
        }
    }
    requests
}

/// 按工具类别提取参数：综述与计划取前 30 字符，问答与代码分析取全文
/// （代码分析在构造 Prompt 时再截断到 500 字符）
fn extract_argument(kind: ToolKind, query: &str) -> String {
    match kind {
        ToolKind::LiteratureReview | ToolKind::ResearchPlan => {
            truncate_chars(query, SHORT_ARG_CHARS)
        }
        ToolKind::AcademicQa | ToolKind::CodeAnalysis => query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_keyword_only() {
        let requests = classify("帮我写一篇关于强化学习的综述");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, ToolKind::LiteratureReview);
    }

    #[test]
    fn test_multi_category_priority_order() {
        // 同时命中学术问答（为什么）与代码分析（代码/错误）
        let requests = classify("为什么这段代码报错");
        let kinds: Vec<ToolKind> = requests.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ToolKind::AcademicQa, ToolKind::CodeAnalysis]);
    }

    #[test]
    fn test_all_four_categories() {
        let requests = classify("请解释这份文献调研项目计划中的代码错误");
        let kinds: Vec<ToolKind> = requests.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToolKind::LiteratureReview,
                ToolKind::AcademicQa,
                ToolKind::CodeAnalysis,
                ToolKind::ResearchPlan,
            ]
        );
    }

    #[test]
    fn test_no_keyword_returns_empty() {
        assert!(classify("今天天气怎么样").is_empty());
    }

    #[test]
    fn test_no_duplicate_kinds() {
        // 同类多个关键词只产出一条请求
        let requests = classify("文献综述调研");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, ToolKind::LiteratureReview);
    }

    #[test]
    fn test_short_argument_truncated_to_30_chars() {
        let query: String = "综述".chars().chain("很".repeat(40).chars()).collect();
        let requests = classify(&query);
        assert_eq!(requests[0].kind, ToolKind::LiteratureReview);
        assert_eq!(requests[0].argument.chars().count(), 30);
    }

    #[test]
    fn test_qa_argument_is_full_query() {
        let requests = classify("什么是卷积神经网络");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, ToolKind::AcademicQa);
        assert_eq!(requests[0].argument, "什么是卷积神经网络");
    }

    #[test]
    fn test_truncate_chars_is_utf8_safe() {
        assert_eq!(truncate_chars("卷积神经网络", 2), "卷积");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
