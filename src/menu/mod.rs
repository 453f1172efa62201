//! 交互式菜单
//!
//! 每次循环展示选项 1-5 并读取一行输入；非退出动作完成后等待回车再回到主菜单。
//! 所有动作的失败都在动作内部处理，菜单循环只会因输出流错误而终止。

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::error::{PredictorError, remediation_for};
use crate::generator::crew::Crew;
use crate::generator::outlet::save_report;
use crate::generator::pipeline::AgentPipelineRunner;
use crate::patents::{refine_scores, search_results};
use crate::status::StatusChecker;
use crate::types::{PatentRecord, SearchMode};

/// 摘要预览长度
pub const ABSTRACT_PREVIEW_CHARS: usize = 150;

/// 报告摘要预览长度
pub const REPORT_SUMMARY_CHARS: usize = 500;

/// 未输入或无法解析时的迭代步数
pub const DEFAULT_REFINEMENT_STEPS: i32 = 3;

const SEPARATOR_WIDTH: usize = 60;

/// 菜单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    RunAnalysis,
    Search,
    IterativeSearch,
    Status,
    Exit,
}

impl MenuState {
    /// 解析主菜单输入，无效输入返回None
    pub fn select(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuState::RunAnalysis),
            "2" => Some(MenuState::Search),
            "3" => Some(MenuState::IterativeSearch),
            "4" => Some(MenuState::Status),
            "5" => Some(MenuState::Exit),
            _ => None,
        }
    }
}

/// 会话统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuStats {
    pub reports_written: usize,
    pub searches_run: usize,
    pub explorations_run: usize,
    pub status_checks: usize,
}

/// 解析迭代步数，空白或无法解析时使用默认值
pub fn parse_steps(input: &str) -> Result<i32, PredictorError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_REFINEMENT_STEPS);
    }
    input
        .parse::<i32>()
        .map_err(|_| PredictorError::InvalidUserInput(format!("'{}' is not a step count", input)))
}

/// 菜单控制器
pub struct MenuController<R, W> {
    config: Config,
    crew: Box<dyn Crew>,
    status_checker: StatusChecker,
    rng: StdRng,
    input: R,
    output: W,
    state: MenuState,
    stats: MenuStats,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(
        config: Config,
        crew: Box<dyn Crew>,
        status_checker: StatusChecker,
        input: R,
        output: W,
    ) -> Self {
        Self {
            config,
            crew,
            status_checker,
            rng: StdRng::from_os_rng(),
            input,
            output,
            state: MenuState::MainMenu,
            stats: MenuStats::default(),
        }
    }

    /// 替换随机源，测试中用于固定评分
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn stats(&self) -> &MenuStats {
        &self.stats
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 运行菜单循环直到用户选择退出
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Patent Innovation Predictor!")?;
        writeln!(
            self.output,
            "Note: Using mock data for search functions (no patent search backend required)"
        )?;

        while self.step().await? != MenuState::Exit {}
        Ok(())
    }

    /// 执行一次菜单循环，返回本次进入的状态
    pub async fn step(&mut self) -> Result<MenuState> {
        self.state = MenuState::MainMenu;
        self.display_menu()?;

        // 输入流结束视为退出
        let selected = match self.read_line("Select an option (1-5): ")? {
            Some(choice) => MenuState::select(&choice),
            None => Some(MenuState::Exit),
        };

        match selected {
            Some(MenuState::Exit) => {
                self.state = MenuState::Exit;
                writeln!(self.output, "\nExiting Patent Innovation Predictor. Goodbye!")?;
                tracing::info!(stats = ?self.stats, "session finished");
                return Ok(MenuState::Exit);
            }
            Some(state) => {
                self.state = state;
                match state {
                    MenuState::RunAnalysis => self.run_complete_analysis().await?,
                    MenuState::Search => self.search_patents()?,
                    MenuState::IterativeSearch => self.iterative_exploration()?,
                    MenuState::Status => self.check_system_status().await?,
                    MenuState::MainMenu | MenuState::Exit => {}
                }
            }
            None => {
                writeln!(
                    self.output,
                    "\nInvalid option. Please select a number between 1 and 5."
                )?;
            }
        }

        self.read_line("\nPress Enter to continue...")?;
        let entered = self.state;
        self.state = MenuState::MainMenu;
        Ok(entered)
    }

    fn display_menu(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(
            out,
            "  PATENT INNOVATION PREDICTOR - LITHIUM BATTERY TECHNOLOGY  "
        )?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out, "1. Run complete patent trend analysis and forecasting")?;
        writeln!(out, "2. Search for specific patents (mock data)")?;
        writeln!(out, "3. Iterative patent exploration (mock data)")?;
        writeln!(out, "4. View system status")?;
        writeln!(out, "5. Exit")?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    /// 输出提示并读取一行，输入流结束时返回None
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // 非UTF-8字节按替换字符解码，不中断菜单循环
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// 读取必填文本，空白输入返回InvalidUserInput
    fn read_required(
        &mut self,
        prompt: &str,
        message: &str,
    ) -> Result<Result<String, PredictorError>> {
        let value = self.read_line(prompt)?.unwrap_or_default();
        if value.trim().is_empty() {
            return Ok(Err(PredictorError::InvalidUserInput(message.to_string())));
        }
        Ok(Ok(value.trim().to_string()))
    }

    async fn run_complete_analysis(&mut self) -> Result<()> {
        writeln!(self.output, "\nRunning comprehensive patent analysis...")?;
        writeln!(
            self.output,
            "This may take several minutes depending on the data volume."
        )?;

        let prompt = format!(
            "Enter research area (default: {}): ",
            self.config.default_research_area
        );
        let area_input = self.read_line(&prompt)?.unwrap_or_default();
        let research_area = self.config.resolve_research_area(&area_input);
        let model_name = self.config.llm.model_name.clone();

        writeln!(self.output, "\nAnalyzing patents for: {}", research_area)?;
        writeln!(self.output, "Using model: {}", model_name)?;
        writeln!(self.output, "Agents are now processing the data...\n")?;

        let runner = AgentPipelineRunner::new(&self.config, self.crew.as_ref());
        let outcome = match runner.run(&research_area, &model_name).await {
            Ok(report) => {
                save_report(&report, &self.config.output_path).map(|path| (report, path))
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok((report, path)) => {
                self.stats.reports_written += 1;
                writeln!(
                    self.output,
                    "\n💾 Analysis completed and saved to {}",
                    path.display()
                )?;
                writeln!(self.output, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
                writeln!(self.output, "ANALYSIS SUMMARY")?;
                writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
                writeln!(
                    self.output,
                    "{}...\n",
                    report.summary(REPORT_SUMMARY_CHARS)
                )?;
            }
            Err(e) => {
                tracing::error!("analysis run aborted: {:#}", e);
                writeln!(self.output, "❌ Error during analysis: {:#}", e)?;
                writeln!(self.output, "{}", remediation_for(&e))?;
            }
        }
        Ok(())
    }

    fn search_patents(&mut self) -> Result<()> {
        writeln!(self.output, "\nPATENT SEARCH (MOCK DATA)")?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        let query = match self
            .read_required("Enter search query: ", "Search query cannot be empty.")?
        {
            Ok(query) => query,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        let mode_input = self
            .read_line("Select search type (1: Keyword, 2: Semantic, 3: Hybrid) [3]: ")?
            .unwrap_or_default();
        let mode = SearchMode::from_choice(&mode_input);

        let results = search_results(&query, &mut self.rng);
        self.stats.searches_run += 1;
        tracing::debug!(%query, %mode, count = results.len(), "mock search");

        writeln!(
            self.output,
            "\n[{} Search] Found {} results for '{}':",
            mode,
            results.len(),
            query
        )?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for (i, record) in results.iter().enumerate() {
            self.write_record(i + 1, record, "Score")?;
        }
        Ok(())
    }

    fn iterative_exploration(&mut self) -> Result<()> {
        writeln!(self.output, "\nITERATIVE PATENT EXPLORATION (MOCK DATA)")?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        let query = match self
            .read_required("Enter initial exploration query: ", "Query cannot be empty.")?
        {
            Ok(query) => query,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        let steps_input = self
            .read_line("Number of exploration steps (default: 3): ")?
            .unwrap_or_default();
        let steps = match parse_steps(&steps_input) {
            Ok(steps) => steps,
            Err(e) => {
                writeln!(
                    self.output,
                    "ℹ️ {}, using default: {}",
                    e, DEFAULT_REFINEMENT_STEPS
                )?;
                DEFAULT_REFINEMENT_STEPS
            }
        };

        writeln!(
            self.output,
            "\nExploring patents related to '{}' with {} refinement steps...",
            query, steps
        )?;

        let mut results = search_results(&query, &mut self.rng);
        refine_scores(&mut results, steps);
        self.stats.explorations_run += 1;

        writeln!(
            self.output,
            "\nFound {} results through iterative exploration:",
            results.len()
        )?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for (i, record) in results.iter().enumerate() {
            self.write_record(i + 1, record, "Refined score")?;
        }
        Ok(())
    }

    async fn check_system_status(&mut self) -> Result<()> {
        writeln!(self.output, "\nSYSTEM STATUS")?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.output, "🔄 Checking components...")?;

        let status = self.status_checker.check().await;
        self.stats.status_checks += 1;
        writeln!(self.output, "{}", status.render())?;
        Ok(())
    }

    fn write_record(
        &mut self,
        index: usize,
        record: &PatentRecord,
        score_label: &str,
    ) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "{}. {}", index, record.title)?;
        writeln!(out, "   {}: {}", score_label, record.score)?;
        writeln!(out, "   Date: {}", record.publication_date)?;
        writeln!(out, "   Patent ID: {}", record.patent_id)?;
        writeln!(
            out,
            "   Abstract: {}...",
            record.abstract_preview(ABSTRACT_PREVIEW_CHARS)
        )?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}
