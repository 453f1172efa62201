//! Agent团队编排边界
//!
//! 本模块只定义Agent、任务与一次运行的数据形态；任务的顺序执行与上下文传递由实现了
//! [`Crew`] 的协作方负责。

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod rig_crew;

pub use rig_crew::RigCrew;

/// Agent角色
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    Researcher,
    Analyst,
    Writer,
}

impl Display for AgentRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRole::Researcher => write!(f, "researcher"),
            AgentRole::Analyst => write!(f, "analyst"),
            AgentRole::Writer => write!(f, "writer"),
        }
    }
}

/// Agent可使用的工具
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AgentTool {
    PatentSearch,
}

/// Agent定义
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AgentProfile {
    pub role: AgentRole,
    /// 展示给模型的角色名称
    pub title: String,
    pub goal: String,
    pub backstory: String,
    pub tools: Vec<AgentTool>,
}

impl AgentProfile {
    pub fn has_tool(&self, tool: AgentTool) -> bool {
        self.tools.contains(&tool)
    }

    /// 构造Agent的系统提示词
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}. {}\nYour personal goal is: {}",
            self.title, self.backstory, self.goal
        )
    }
}

/// 分析任务，每次运行按顺序各消费一次
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisTask {
    pub description: String,
    pub assigned_role: AgentRole,
    pub expected_output: String,
}

impl AnalysisTask {
    /// 构造任务提示词，附带上一个任务的输出作为上下文
    pub fn render_prompt(&self, context: Option<&str>, inputs: &BTreeMap<String, String>) -> String {
        let mut prompt = String::new();
        prompt.push_str("Current Task: ");
        prompt.push_str(&self.description);
        prompt.push_str("\n\nThis is the expected criteria for your final answer: ");
        prompt.push_str(&self.expected_output);
        prompt.push('\n');

        if !inputs.is_empty() {
            prompt.push_str("\nInputs:\n");
            for (key, value) in inputs {
                prompt.push_str(&format!("- {}: {}\n", key, value));
            }
        }

        if let Some(context) = context {
            prompt.push_str("\nThis is the context you're working with:\n");
            prompt.push_str(context);
            prompt.push('\n');
        }

        prompt.push_str("\nBegin! Return the complete final answer, not a summary.");
        prompt
    }
}

/// 一次团队运行的输入
#[derive(Debug, Clone)]
pub struct CrewRequest {
    pub model: String,
    pub agents: Vec<AgentProfile>,
    /// 严格按顺序执行
    pub tasks: Vec<AnalysisTask>,
    pub inputs: BTreeMap<String, String>,
}

impl CrewRequest {
    pub fn agent_for(&self, role: AgentRole) -> Option<&AgentProfile> {
        self.agents.iter().find(|agent| agent.role == role)
    }
}

/// 单个任务的输出
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaskOutput {
    pub role: AgentRole,
    pub description: String,
    pub raw: String,
}

/// 团队运行结果
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CrewOutput {
    /// 最后一个任务的输出
    pub raw: String,
    pub tasks_output: Vec<TaskOutput>,
}

impl Display for CrewOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Agent编排协作方
#[async_trait]
pub trait Crew: Send + Sync {
    /// 按顺序执行全部任务，后一个任务接收前一个任务的输出
    async fn kickoff(&self, request: &CrewRequest) -> Result<CrewOutput>;
}
