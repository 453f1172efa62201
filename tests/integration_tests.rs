use std::io::Cursor;

use anyhow::Result;
use async_trait::async_trait;
use patent_predictor::config::Config;
use patent_predictor::generator::crew::{Crew, CrewOutput, CrewRequest, TaskOutput};
use patent_predictor::menu::{ABSTRACT_PREVIEW_CHARS, MenuController, MenuState};
use patent_predictor::status::StatusChecker;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

/// 按任务顺序串联输出的离线团队
struct OfflineCrew;

#[async_trait]
impl Crew for OfflineCrew {
    async fn kickoff(&self, request: &CrewRequest) -> Result<CrewOutput> {
        let raw = request
            .tasks
            .iter()
            .map(|task| task.assigned_role.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        let tasks_output = request
            .tasks
            .iter()
            .map(|task| TaskOutput {
                role: task.assigned_role,
                description: task.description.clone(),
                raw: format!("{} done", task.assigned_role),
            })
            .collect();
        Ok(CrewOutput { raw, tasks_output })
    }
}

fn offline_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.output_path = dir.path().to_path_buf();
    config.llm.api_base_url = "http://127.0.0.1:9".to_string();
    config.status.probe_timeout_seconds = 1;
    config.status.embedding_model = None;
    config
}

async fn run_session(config: Config, input: &str) -> String {
    let status_checker = StatusChecker::new(&config, None);
    let mut menu = MenuController::new(
        config,
        Box::new(OfflineCrew),
        status_checker,
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    )
    .with_rng(StdRng::seed_from_u64(2024));

    menu.run().await.unwrap();
    assert_eq!(menu.state(), MenuState::Exit);
    String::from_utf8(menu.into_output()).unwrap()
}

#[tokio::test]
async fn test_semantic_search_for_separator_membrane() {
    let dir = TempDir::new().unwrap();
    let output = run_session(offline_config(&dir), "2\nseparator membrane\n2\n\n5\n").await;

    assert!(output.contains("[Semantic Search] Found 3 results for 'separator membrane':"));

    let titles: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()) && line.contains(". "))
        .filter(|line| !line.contains("Run complete") && !line.contains("Search for"))
        .filter(|line| !line.contains("Iterative") && !line.contains("View system"))
        .filter(|line| !line.ends_with("Exit"))
        .collect();
    assert_eq!(titles.len(), 3);
    assert!(titles.iter().all(|t| t.contains("separator membrane")));

    let scores: Vec<f64> = output
        .lines()
        .filter_map(|line| line.strip_prefix("   Score: "))
        .map(|score| score.parse().unwrap())
        .collect();
    assert_eq!(scores.len(), 3);
    assert!(scores.iter().all(|s| (70.0..=99.0).contains(s)));

    let previews: Vec<&str> = output
        .lines()
        .filter_map(|line| line.strip_prefix("   Abstract: "))
        .map(|preview| preview.trim_end_matches("..."))
        .collect();
    assert_eq!(previews.len(), 3);
    assert!(
        previews
            .iter()
            .all(|p| p.chars().count() <= ABSTRACT_PREVIEW_CHARS)
    );
}

#[tokio::test]
async fn test_full_session_across_all_actions() {
    let dir = TempDir::new().unwrap();
    let input = "1\nSodium Battery\n\n2\nanode\n1\n\n3\ncathode\n2\n\n4\n\n9\n\n5\n";
    let output = run_session(offline_config(&dir), input).await;

    assert!(output.contains("researcher -> analyst -> writer"));
    assert!(output.contains("[Keyword Search] Found 3 results for 'anode':"));
    assert!(output.contains("with 2 refinement steps"));
    assert!(output.contains("SYSTEM STATUS"));
    assert!(output.contains("Invalid option"));
    assert!(output.contains("Goodbye!"));

    let reports: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("patent_analysis_"));

    let content = std::fs::read_to_string(dir.path().join(&reports[0])).unwrap();
    assert!(content.contains("# Sodium Battery Patent Trend Analysis Report"));
    assert!(content.contains("Model used: deepseek-chat"));
}
