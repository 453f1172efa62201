#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::llm::embedding::EmbeddingProvider;
    use crate::status::{StatusChecker, SystemStatus};
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    struct FixedEmbedder(usize);

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f64>> {
            Ok(vec![0.5; self.0])
        }
    }

    struct BrokenEmbedder;

    #[async_trait]
    impl EmbeddingProvider for BrokenEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f64>> {
            Err(anyhow!("embedding module not installed"))
        }
    }

    /// 指向本机未监听端口，连接会被立即拒绝
    fn unreachable_config() -> Config {
        let mut config = Config::default();
        config.llm.api_base_url = "http://127.0.0.1:9".to_string();
        config.status.probe_timeout_seconds = 1;
        config
    }

    #[tokio::test]
    async fn test_broken_embedder_is_skipped_not_failed() {
        let checker = StatusChecker::new(&unreachable_config(), Some(Box::new(BrokenEmbedder)));
        let status = checker.check().await;

        assert_eq!(status.embedding_dim, None);
        assert_eq!(
            status.embedding_skip_reason.as_deref(),
            Some("embedding module not installed")
        );
        assert!(status.render().contains("Check skipped - embedding module not installed"));
    }

    #[tokio::test]
    async fn test_working_embedder_reports_dimension() {
        let checker = StatusChecker::new(&unreachable_config(), Some(Box::new(FixedEmbedder(768))));
        let status = checker.check().await;

        assert_eq!(status.embedding_dim, Some(768));
        assert!(status.embedding_skip_reason.is_none());
        assert!(status.render().contains("dimension: 768"));
    }

    #[tokio::test]
    async fn test_missing_embedder_is_skipped() {
        let checker = StatusChecker::new(&unreachable_config(), None);
        let status = checker.check().await;

        assert_eq!(status.embedding_dim, None);
        assert!(status.embedding_skip_reason.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_cause() {
        let checker = StatusChecker::new(&unreachable_config(), None);
        let status = checker.check().await;

        assert!(!status.endpoint_reachable);
        assert!(status.connectivity_error.is_some());
        assert!(status.render().contains("DeepSeek API Connection: Failed"));
    }

    #[tokio::test]
    async fn test_credential_check_does_not_short_circuit() {
        let config = unreachable_config();
        let checker = StatusChecker::new(&config, Some(Box::new(FixedEmbedder(3))));
        let status = checker.check().await;

        // 凭证缺失且网络不可达时仍会执行embedding检查
        assert!(!status.credential_present);
        assert!(!status.endpoint_reachable);
        assert_eq!(status.embedding_dim, Some(3));
    }

    #[tokio::test]
    async fn test_credential_present() {
        let config = unreachable_config().with_api_key("sk-test");
        let checker = StatusChecker::new(&config, None);
        let status = checker.check().await;

        assert!(status.credential_present);
        assert!(status.render().contains("✅ DeepSeek API Key"));
    }

    #[test]
    fn test_render_all_passing() {
        let status = SystemStatus {
            credential_present: true,
            endpoint_reachable: true,
            embedding_dim: Some(1024),
            connectivity_error: None,
            embedding_skip_reason: None,
        };
        let report = status.render();

        assert!(report.contains("✅ DeepSeek API Key"));
        assert!(report.contains("✅ DeepSeek API Connection: OK"));
        assert!(report.contains("✅ Embedding model: OK (dimension: 1024)"));
        assert!(!report.contains("❌"));
    }
}
