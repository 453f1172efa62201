//! LLM客户端 - 基于rig的DeepSeek provider提供Agent对话能力

use anyhow::Result;
use rig::{
    agent::Agent,
    client::CompletionClient,
    completion::{CompletionError, Prompt, PromptError},
    providers::deepseek,
};

use crate::config::LLMConfig;
use crate::error::PredictorError;
use crate::llm::tools::patent_search::AgentToolPatentSearch;

/// LLM客户端，一次分析运行中由所有Agent共享
#[derive(Clone)]
pub struct LLMClient {
    client: deepseek::Client,
    model: String,
    config: LLMConfig,
}

impl LLMClient {
    /// 创建新的LLM客户端，凭证缺失时直接失败，不发起任何远程调用
    pub fn new(config: &LLMConfig, model: &str) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PredictorError::missing_credential().into());
        }

        let client = deepseek::Client::builder(&config.api_key)
            .base_url(&config.api_base_url)
            .build();

        Ok(Self {
            client,
            model: model.to_string(),
            config: config.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_agent(&self, system_prompt: &str) -> Agent<deepseek::CompletionModel> {
        self.client
            .agent(&self.model)
            .preamble(system_prompt)
            .max_tokens(self.config.max_tokens.into())
            .temperature(self.config.temperature)
            .build()
    }

    fn build_agent_with_patent_search(
        &self,
        system_prompt: &str,
    ) -> Agent<deepseek::CompletionModel> {
        self.client
            .agent(&self.model)
            .preamble(system_prompt)
            .max_tokens(self.config.max_tokens.into())
            .temperature(self.config.temperature)
            .tool(AgentToolPatentSearch::new())
            .build()
    }

    /// 单轮对话（不使用工具）
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self.build_agent(system_prompt);
        agent
            .prompt(user_prompt)
            .await
            .map_err(|e| self.classify(e))
    }

    /// 多轮对话，Agent可以调用专利检索工具
    pub async fn prompt_with_patent_search(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String> {
        let agent = self.build_agent_with_patent_search(system_prompt);
        agent
            .prompt(user_prompt)
            .multi_turn(self.config.max_tool_turns)
            .await
            .map_err(|e| self.classify(e))
    }

    /// 传输层错误归为连接失败，其余归为Agent执行失败
    fn classify(&self, err: PromptError) -> anyhow::Error {
        tracing::warn!(model = %self.model, "model call failed: {}", err);
        match err {
            PromptError::CompletionError(CompletionError::HttpError(e)) => {
                PredictorError::Connectivity {
                    endpoint: self.config.api_base_url.clone(),
                    reason: e.to_string(),
                }
                .into()
            }
            other => PredictorError::DelegateFailure(other.to_string()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_credential_fails() {
        let config = LLMConfig::default();
        let err = LLMClient::new(&config, "deepseek-chat").err().unwrap();

        assert!(matches!(
            err.downcast_ref::<PredictorError>(),
            Some(PredictorError::ConfigurationMissing(_))
        ));
    }

    #[test]
    fn test_new_with_credential() {
        let config = LLMConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        };
        let client = LLMClient::new(&config, "deepseek-chat").unwrap();
        assert_eq!(client.model(), "deepseek-chat");
    }
}
