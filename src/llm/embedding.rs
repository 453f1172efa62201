//! 可选的embedding能力，状态检查只关心是否可用以及向量维度

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rig::{client::EmbeddingsClient, embeddings::EmbeddingModel, providers::ollama};

/// embedding生成器
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// 为文本生成向量
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;
}

/// 基于本地Ollama服务的embedding生成器
pub struct OllamaEmbedder {
    client: ollama::Client,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: ollama::Client::builder().build(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let model = self.client.embedding_model(&self.model);
        let embedding = model.embed_text(text).await?;
        if embedding.vec.is_empty() {
            return Err(anyhow!("model {} returned an empty vector", self.model));
        }
        Ok(embedding.vec)
    }
}
