use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::AnalysisReport;

/// 保存报告，返回写入的文件路径
pub fn save_report(report: &AnalysisReport, output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)
            .context(format!("Failed to create output directory: {:?}", output_dir))?;
    }

    let output_file_path = output_dir.join(report.file_name());
    fs::write(&output_file_path, report.to_string())
        .context(format!("Failed to write report: {:?}", output_file_path))?;

    tracing::info!(path = %output_file_path.display(), "report saved");
    Ok(output_file_path)
}
