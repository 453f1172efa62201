//! 专利检索工具（模拟数据）

use rig::tool::Tool;
use serde::{Deserialize, Serialize};

use crate::patents::analysis_dataset;
use crate::types::PatentRecord;

/// 专利检索工具，供研究员Agent调用
#[derive(Debug, Clone, Default)]
pub struct AgentToolPatentSearch;

/// 专利检索参数
#[derive(Debug, Deserialize)]
pub struct PatentSearchArgs {
    pub research_area: String,
}

/// 专利检索结果
#[derive(Debug, Serialize)]
pub struct PatentSearchResult {
    pub research_area: String,
    pub total_count: usize,
    pub patents: Vec<PatentRecord>,
}

#[derive(Debug, thiserror::Error)]
#[error("patent search tool error")]
pub struct PatentSearchToolError;

impl AgentToolPatentSearch {
    pub fn new() -> Self {
        Self
    }

    fn search(&self, args: &PatentSearchArgs) -> PatentSearchResult {
        let mut rng = rand::rng();
        let patents = analysis_dataset(&args.research_area, &mut rng);
        PatentSearchResult {
            research_area: args.research_area.clone(),
            total_count: patents.len(),
            patents,
        }
    }
}

impl Tool for AgentToolPatentSearch {
    const NAME: &'static str = "patent_search";

    type Error = PatentSearchToolError;
    type Args = PatentSearchArgs;
    type Output = PatentSearchResult;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Searches for patent data related to the research area. Returns title, abstract, publication date, patent id, inventor, assignee and technical field for each patent.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "research_area": {
                        "type": "string",
                        "description": "研究领域，例如 'Lithium Battery'"
                    }
                },
                "required": ["research_area"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        println!("   🔧 tool called...patent_search@{:?}", args);

        if args.research_area.trim().is_empty() {
            tracing::warn!("patent_search called without a research area");
            return Err(PatentSearchToolError);
        }

        let result = self.search(&args);
        tracing::debug!(
            research_area = %result.research_area,
            count = result.total_count,
            "patent_search returned mock records"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_definition_declares_research_area() {
        let tool = AgentToolPatentSearch::new();
        let definition = tool.definition(String::new()).await;

        assert_eq!(definition.name, "patent_search");
        assert_eq!(definition.parameters["required"][0], "research_area");
    }

    #[tokio::test]
    async fn test_call_returns_analysis_records() {
        let tool = AgentToolPatentSearch::new();
        let result = tool
            .call(PatentSearchArgs {
                research_area: "Lithium Battery".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.total_count, 4);
        assert!(
            result
                .patents
                .iter()
                .all(|p| p.title.contains("Lithium Battery"))
        );
    }

    #[tokio::test]
    async fn test_call_rejects_blank_area() {
        let tool = AgentToolPatentSearch::new();
        let result = tool
            .call(PatentSearchArgs {
                research_area: "  ".to_string(),
            })
            .await;

        assert!(result.is_err());
    }
}
