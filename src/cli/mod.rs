use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Patent Innovation Predictor - 锂电池专利趋势分析演示工具
#[derive(Parser, Debug)]
#[command(name = "patent-predictor")]
#[command(
    about = "Menu-driven patent trend analysis for lithium battery technology, with a three-agent LLM crew and mock patent search."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径（默认读取 ./patent-predictor.toml）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// .env 设置文件路径（默认读取 ./.env）
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// 报告输出目录
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 分析流水线使用的模型
    #[arg(short, long)]
    pub model: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref(), self.env_file.as_deref())?;

        // 覆盖配置文件中的设置
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(model) = self.model {
            config.llm.model_name = model;
        }
        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
