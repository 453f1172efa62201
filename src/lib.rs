pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod menu;
pub mod patents;
pub mod status;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::PredictorError;
pub use generator::workflow::launch;
