use std::collections::BTreeMap;

use anyhow::Result;

use crate::config::Config;
use crate::error::PredictorError;
use crate::generator::agents::{analysis_agents, analysis_tasks};
use crate::generator::crew::{Crew, CrewRequest};
use crate::types::AnalysisReport;

/// 专利分析流水线：配置Agent团队、委托执行并格式化报告
pub struct AgentPipelineRunner<'a> {
    config: &'a Config,
    crew: &'a dyn Crew,
}

impl<'a> AgentPipelineRunner<'a> {
    pub fn new(config: &'a Config, crew: &'a dyn Crew) -> Self {
        Self { config, crew }
    }

    /// 组装一次运行的请求
    pub fn build_request(&self, research_area: &str, model_name: &str) -> CrewRequest {
        let research_area = self.config.resolve_research_area(research_area);
        CrewRequest {
            model: model_name.to_string(),
            agents: analysis_agents(&research_area),
            tasks: analysis_tasks(&research_area),
            inputs: BTreeMap::from([("research_area".to_string(), research_area)]),
        }
    }

    /// 执行分析，任何失败都整体返回给调用方，不做重试
    pub async fn run(&self, research_area: &str, model_name: &str) -> Result<AnalysisReport> {
        let research_area = self.config.resolve_research_area(research_area);
        let request = self.build_request(&research_area, model_name);

        println!(
            "\nStarting {} patent analysis with {} model...",
            research_area, model_name
        );
        tracing::info!(%research_area, model = model_name, "kicking off analysis crew");

        let output = self.crew.kickoff(&request).await?;
        if output.tasks_output.len() != request.tasks.len() {
            return Err(PredictorError::DelegateFailure(format!(
                "crew returned {} of {} task outputs",
                output.tasks_output.len(),
                request.tasks.len()
            ))
            .into());
        }
        for task in &output.tasks_output {
            tracing::debug!(role = %task.role, chars = task.raw.len(), "task output received");
        }
        let body = output.to_string();

        Ok(AnalysisReport::new(research_area, model_name, body))
    }
}
