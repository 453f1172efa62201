//! 错误分类

use crate::config::API_KEY_ENV;

/// 菜单动作边界上可能出现的失败类型
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// API凭证缺失
    #[error("API credential not found ({0} is not set)")]
    ConfigurationMissing(&'static str),

    /// 网络探测或远程模型调用失败
    #[error("connection to {endpoint} failed: {reason}")]
    Connectivity { endpoint: String, reason: String },

    /// 用户输入无效
    #[error("invalid input: {0}")]
    InvalidUserInput(String),

    /// Agent编排过程中的其他失败
    #[error("agent crew failed: {0}")]
    DelegateFailure(String),
}

impl PredictorError {
    pub fn missing_credential() -> Self {
        PredictorError::ConfigurationMissing(API_KEY_ENV)
    }

    /// 打印在错误信息后的修复建议
    pub fn remediation_hint(&self) -> String {
        match self {
            PredictorError::ConfigurationMissing(key) => {
                format!("Tips: Add {} to your .env file and restart.", key)
            }
            PredictorError::Connectivity { .. } => {
                "Tips: Check your internet connection and that the DeepSeek API is reachable."
                    .to_string()
            }
            PredictorError::InvalidUserInput(_) => "Tips: Check your input and try again.".to_string(),
            PredictorError::DelegateFailure(_) => format!(
                "Tips: Ensure your .env file has the correct {} for DeepSeek and you have an internet connection.",
                API_KEY_ENV
            ),
        }
    }
}

/// 从anyhow错误链中找到PredictorError并给出修复建议
pub fn remediation_for(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PredictorError>() {
        Some(e) => e.remediation_hint(),
        None => PredictorError::DelegateFailure(String::new()).remediation_hint(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = PredictorError::missing_credential();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
        assert!(err.remediation_hint().contains(".env"));
    }

    #[test]
    fn test_remediation_for_foreign_error() {
        let err = anyhow::anyhow!("disk full");
        assert!(remediation_for(&err).contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_remediation_for_wrapped_error() {
        let err: anyhow::Error = PredictorError::Connectivity {
            endpoint: "https://api.deepseek.com".to_string(),
            reason: "timed out".to_string(),
        }
        .into();
        assert!(remediation_for(&err).contains("internet connection"));
    }
}
