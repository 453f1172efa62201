use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// 远程模型服务地址，当前设计中不允许通过配置覆盖
pub const DEEPSEEK_API_BASE_URL: &str = "https://api.deepseek.com";

/// 存放API凭证的环境变量名
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "patent-predictor.toml";

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 报告输出目录
    pub output_path: PathBuf,

    /// 未输入研究领域时使用的默认值
    pub default_research_area: String,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 系统状态检查配置
    pub status: StatusConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM API KEY，只从环境变量读取
    #[serde(skip)]
    pub api_key: String,

    /// LLM API基地址
    #[serde(skip)]
    pub api_base_url: String,

    /// 分析流水线使用的模型
    pub model_name: String,

    /// 温度
    pub temperature: f64,

    /// 最大tokens
    pub max_tokens: u32,

    /// 带工具的Agent最多进行的对话轮数
    pub max_tool_turns: usize,
}

/// 系统状态检查配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StatusConfig {
    /// 网络探测超时时间（秒）
    pub probe_timeout_seconds: u64,

    /// 本地embedding模型，为None时跳过embedding检查
    pub embedding_model: Option<String>,

    /// embedding探测文本
    pub embedding_probe_text: String,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 启动时加载一次配置：.env -> TOML配置文件 -> 环境变量中的凭证
    pub fn load(config_path: Option<&Path>, env_file: Option<&Path>) -> Result<Self> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path)
                    .context(format!("Failed to load settings file: {:?}", path))?;
            }
            None => {
                if let Err(e) = dotenvy::dotenv() {
                    tracing::debug!("no .env file loaded: {}", e);
                }
            }
        }

        let config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Ok(config.with_api_key(api_key))
    }

    /// 设置API凭证
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.llm.api_key = api_key.into().trim().to_string();
        self
    }

    /// 凭证是否存在
    pub fn credential_present(&self) -> bool {
        !self.llm.api_key.trim().is_empty()
    }

    /// 默认日志过滤指令，RUST_LOG优先
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "patent_predictor=debug"
        } else {
            "patent_predictor=warn"
        }
    }

    /// 解析研究领域，空白输入回退到默认值
    pub fn resolve_research_area(&self, input: &str) -> String {
        let area = input.trim();
        if area.is_empty() {
            self.default_research_area.clone()
        } else {
            area.to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("."),
            default_research_area: String::from("Lithium Battery"),
            llm: LLMConfig::default(),
            status: StatusConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: String::from(DEEPSEEK_API_BASE_URL),
            model_name: String::from("deepseek-chat"),
            temperature: 0.7,
            max_tokens: 4096,
            max_tool_turns: 5,
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            probe_timeout_seconds: 5,
            embedding_model: Some(String::from("nomic-embed-text")),
            embedding_probe_text: String::from("test"),
        }
    }
}
