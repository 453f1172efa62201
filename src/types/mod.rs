pub mod patent;
pub mod report;

pub use patent::{PatentRecord, SearchMode};
pub use report::AnalysisReport;
