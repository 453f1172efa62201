use std::io::{self, BufReader};

use anyhow::Result;

use crate::config::Config;
use crate::generator::crew::RigCrew;
use crate::llm::embedding::{EmbeddingProvider, OllamaEmbedder};
use crate::menu::MenuController;
use crate::status::StatusChecker;

/// 启动交互式菜单
pub async fn launch(config: Config) -> Result<()> {
    if !config.credential_present() {
        tracing::warn!("API credential missing, remote model calls will fail");
    }

    let embedder = config
        .status
        .embedding_model
        .as_ref()
        .map(|model| Box::new(OllamaEmbedder::new(model.clone())) as Box<dyn EmbeddingProvider>);
    let status_checker = StatusChecker::new(&config, embedder);
    let crew = Box::new(RigCrew::new(config.llm.clone()));

    let mut controller = MenuController::new(
        config,
        crew,
        status_checker,
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    controller.run().await
}
