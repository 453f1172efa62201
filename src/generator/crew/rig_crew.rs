use anyhow::Result;
use async_trait::async_trait;

use super::{AgentTool, Crew, CrewOutput, CrewRequest, TaskOutput};
use crate::config::LLMConfig;
use crate::error::PredictorError;
use crate::llm::client::LLMClient;

/// 基于rig的Agent团队，所有Agent共享同一个LLM客户端
pub struct RigCrew {
    llm: LLMConfig,
}

impl RigCrew {
    pub fn new(llm: LLMConfig) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Crew for RigCrew {
    async fn kickoff(&self, request: &CrewRequest) -> Result<CrewOutput> {
        let client = LLMClient::new(&self.llm, &request.model)?;
        let total = request.tasks.len();
        let mut context: Option<String> = None;
        let mut tasks_output = Vec::with_capacity(total);

        for (index, task) in request.tasks.iter().enumerate() {
            let agent = request.agent_for(task.assigned_role).ok_or_else(|| {
                PredictorError::DelegateFailure(format!(
                    "no agent registered for role {}",
                    task.assigned_role
                ))
            })?;

            println!("🤖 [{}/{}] {} is working...", index + 1, total, agent.title);
            tracing::info!(role = %agent.role, model = %client.model(), "starting task");

            let system_prompt = agent.system_prompt();
            let user_prompt = task.render_prompt(context.as_deref(), &request.inputs);
            let raw = if agent.has_tool(AgentTool::PatentSearch) {
                client
                    .prompt_with_patent_search(&system_prompt, &user_prompt)
                    .await?
            } else {
                client.prompt(&system_prompt, &user_prompt).await?
            };

            println!("✓ {} finished", agent.title);
            tracing::debug!(role = %agent.role, chars = raw.len(), "task completed");

            tasks_output.push(TaskOutput {
                role: task.assigned_role,
                description: task.description.clone(),
                raw: raw.clone(),
            });
            context = Some(raw);
        }

        Ok(CrewOutput {
            raw: context.unwrap_or_default(),
            tasks_output,
        })
    }
}
