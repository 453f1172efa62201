use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// 专利记录
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PatentRecord {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// 公开日期，格式为 YYYY-MM-DD
    pub publication_date: String,
    pub patent_id: String,
    /// 相关度评分，生成时位于[0, 100]，迭代优化后可能超出
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_field: Option<String>,
}

impl PatentRecord {
    /// 摘要预览，按字符截断
    pub fn abstract_preview(&self, max_chars: usize) -> String {
        self.abstract_text.chars().take(max_chars).collect()
    }
}

/// 检索方式，仅影响输出中的标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    Keyword,
    Semantic,
    #[default]
    Hybrid,
}

impl SearchMode {
    /// 解析菜单输入，空白或未知输入回退为Hybrid
    pub fn from_choice(input: &str) -> Self {
        match input.trim() {
            "1" => SearchMode::Keyword,
            "2" => SearchMode::Semantic,
            _ => SearchMode::Hybrid,
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Keyword => write!(f, "Keyword"),
            SearchMode::Semantic => write!(f, "Semantic"),
            SearchMode::Hybrid => write!(f, "Hybrid"),
        }
    }
}
