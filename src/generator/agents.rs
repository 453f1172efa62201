//! 专利分析团队的三个Agent与三个顺序任务

use crate::generator::crew::{AgentProfile, AgentRole, AgentTool, AnalysisTask};

/// 专利研究员，绑定专利检索工具
pub fn patent_researcher(research_area: &str) -> AgentProfile {
    AgentProfile {
        role: AgentRole::Researcher,
        title: "Senior Patent Researcher".to_string(),
        goal: format!(
            "Collect and analyze the latest {} patent data",
            research_area
        ),
        backstory: "Expert in patent analysis with 10+ years of experience in battery technology. Specializes in identifying technical trends and innovation opportunities.".to_string(),
        tools: vec![AgentTool::PatentSearch],
    }
}

pub fn trend_analyst(research_area: &str) -> AgentProfile {
    AgentProfile {
        role: AgentRole::Analyst,
        title: "Technology Trend Analyst".to_string(),
        goal: format!(
            "Identify key trends and forecasting in {} patents",
            research_area
        ),
        backstory: "Data scientist specializing in emerging technology trends. Expert in predicting market adoption and technical breakthroughs.".to_string(),
        tools: vec![],
    }
}

pub fn report_writer(research_area: &str) -> AgentProfile {
    AgentProfile {
        role: AgentRole::Writer,
        title: "Technical Report Writer".to_string(),
        goal: format!(
            "Compile a comprehensive analysis report for {} patents",
            research_area
        ),
        backstory: "Professional technical writer with experience in battery technology reports. Skilled at translating complex data into clear insights.".to_string(),
        tools: vec![],
    }
}

pub fn analysis_agents(research_area: &str) -> Vec<AgentProfile> {
    vec![
        patent_researcher(research_area),
        trend_analyst(research_area),
        report_writer(research_area),
    ]
}

/// 任务顺序：收集专利 -> 趋势分析 -> 撰写报告
pub fn analysis_tasks(research_area: &str) -> Vec<AnalysisTask> {
    vec![
        AnalysisTask {
            description: format!(
                "Search for the latest {} patents (2023-2024) and extract key information: title, abstract, technical field, publication date, innovation points.",
                research_area
            ),
            assigned_role: AgentRole::Researcher,
            expected_output: "List of 4+ patents with detailed technical information and innovation highlights.".to_string(),
        },
        AnalysisTask {
            description: format!(
                "Analyze the patent data to identify key technical trends in {} field: emerging technologies, top innovators, performance improvements, market opportunities.",
                research_area
            ),
            assigned_role: AgentRole::Analyst,
            expected_output: "Detailed trend analysis with data-backed insights and 3-5 key findings.".to_string(),
        },
        AnalysisTask {
            description: format!(
                "Compile a comprehensive patent analysis report for {} technology, including executive summary, technical trends, innovation opportunities, and future forecasting (next 3-5 years).",
                research_area
            ),
            assigned_role: AgentRole::Writer,
            expected_output: "Full analysis report in natural language, professional and easy to understand, 800-1000 words.".to_string(),
        },
    ]
}
