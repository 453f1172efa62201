pub mod client;
pub mod embedding;
pub mod tools;
