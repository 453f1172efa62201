//! 系统状态检查：凭证、远程模型连通性、embedding能力
//!
//! 三项检查互相独立，任何一项失败都不会中断其余检查，[`StatusChecker::check`] 本身不会失败。

use std::time::Duration;

use crate::config::{API_KEY_ENV, Config};
use crate::llm::embedding::EmbeddingProvider;

/// 状态快照，每次检查重新计算
#[derive(Debug, Clone, PartialEq)]
pub struct SystemStatus {
    pub credential_present: bool,
    pub endpoint_reachable: bool,
    /// embedding可用时的向量维度
    pub embedding_dim: Option<usize>,
    /// 连通性检查失败原因
    pub connectivity_error: Option<String>,
    /// embedding检查跳过原因
    pub embedding_skip_reason: Option<String>,
}

impl SystemStatus {
    /// 生成控制台报告
    pub fn render(&self) -> String {
        let mut report = String::new();

        if self.credential_present {
            report.push_str("✅ DeepSeek API Key: Loaded from .env file.\n");
        } else {
            report.push_str(&format!(
                "❌ DeepSeek API Key: Not found ({} is not set). Please check your .env file.\n",
                API_KEY_ENV
            ));
        }

        if self.endpoint_reachable {
            report.push_str("✅ DeepSeek API Connection: OK (Network reachable)\n");
        } else {
            report.push_str(&format!(
                "❌ DeepSeek API Connection: Failed - {}\n",
                self.connectivity_error.as_deref().unwrap_or("unknown error")
            ));
            report.push_str("   Tips: Check your internet connection.\n");
        }

        match (self.embedding_dim, &self.embedding_skip_reason) {
            (Some(dim), _) => {
                report.push_str(&format!("✅ Embedding model: OK (dimension: {})\n", dim));
            }
            (None, reason) => {
                report.push_str(&format!(
                    "ℹ️ Embedding model: Check skipped - {}\n",
                    reason.as_deref().unwrap_or("not available")
                ));
            }
        }

        report.push_str(
            "\nSystem is ready for operation (using mock data for search functions).",
        );
        report
    }
}

/// 状态检查器
pub struct StatusChecker {
    endpoint: String,
    credential_present: bool,
    probe_timeout: Duration,
    probe_text: String,
    embedder: Option<Box<dyn EmbeddingProvider>>,
}

impl StatusChecker {
    pub fn new(config: &Config, embedder: Option<Box<dyn EmbeddingProvider>>) -> Self {
        Self {
            endpoint: config.llm.api_base_url.clone(),
            credential_present: config.credential_present(),
            probe_timeout: Duration::from_secs(config.status.probe_timeout_seconds),
            probe_text: config.status.embedding_probe_text.clone(),
            embedder,
        }
    }

    /// 执行全部检查
    pub async fn check(&self) -> SystemStatus {
        let (endpoint_reachable, connectivity_error) = match self.probe_endpoint().await {
            Ok(()) => (true, None),
            Err(reason) => (false, Some(reason)),
        };

        let (embedding_dim, embedding_skip_reason) = match self.probe_embedding().await {
            Ok(dim) => (Some(dim), None),
            Err(reason) => (None, Some(reason)),
        };

        let status = SystemStatus {
            credential_present: self.credential_present,
            endpoint_reachable,
            embedding_dim,
            connectivity_error,
            embedding_skip_reason,
        };
        tracing::debug!(?status, "status check finished");
        status
    }

    /// 有超时限制的网络探测，状态码小于400视为可达
    async fn probe_endpoint(&self) -> Result<(), String> {
        let client = reqwest::Client::builder()
            .timeout(self.probe_timeout)
            .build()
            .map_err(|e| e.to_string())?;

        match client.get(&self.endpoint).send().await {
            Ok(response) if response.status().as_u16() < 400 => Ok(()),
            Ok(response) => Err(format!("Status code: {}", response.status().as_u16())),
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint, "connectivity probe failed: {}", e);
                Err(describe_reqwest_error(&e))
            }
        }
    }

    async fn probe_embedding(&self) -> Result<usize, String> {
        let embedder = self
            .embedder
            .as_ref()
            .ok_or_else(|| "no embedding model configured".to_string())?;

        match embedder.embed(&self.probe_text).await {
            Ok(vector) => Ok(vector.len()),
            Err(e) => {
                tracing::debug!("embedding probe failed: {:#}", e);
                Err(format!("{:#}", e))
            }
        }
    }
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out ({})", err)
    } else if err.is_connect() {
        format!("connection error ({})", err)
    } else {
        err.to_string()
    }
}

// Include tests
#[cfg(test)]
mod tests;
