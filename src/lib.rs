pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod report;

pub use engine::Engine;
pub use error::{FarmOpsError, Result};
pub use knowledge::KnowledgeBase;
