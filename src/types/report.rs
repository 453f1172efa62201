use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 分析报告，生成后不再修改
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisReport {
    pub research_area: String,
    pub generated_at: DateTime<Local>,
    pub model_used: String,
    /// Agent团队返回的正文
    pub body: String,
}

impl AnalysisReport {
    pub fn new(
        research_area: impl Into<String>,
        model_used: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            research_area: research_area.into(),
            generated_at: Local::now(),
            model_used: model_used.into(),
            body: body.into(),
        }
    }

    /// 报告文件名 patent_analysis_<YYYYMMDD_HHMMSS>.txt
    pub fn file_name(&self) -> String {
        format!(
            "patent_analysis_{}.txt",
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// 报告开头的预览
    pub fn summary(&self, max_chars: usize) -> String {
        self.to_string().chars().take(max_chars).collect()
    }
}

impl Display for AnalysisReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "# {} Patent Trend Analysis Report", self.research_area)?;
        writeln!(
            f,
            "Generated on: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Model used: {}", self.model_used)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(
            f,
            "Note: This analysis is based on mock patent data (no real patent search backend)."
        )?;
        writeln!(
            f,
            "For production use, integrate with a real patent database."
        )
    }
}
