//! Heuristic quality checks for deep-research prompt documents.
//!
//! The engine is a pure function over text: [`analyze::validate`] reports
//! which expected sections and phrases are absent, [`analyze::score`] turns
//! that into a 0-100 score, and [`analyze::verdict`] decides pass or fail.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod types;

pub use analyze::{classify, evaluate, score, validate, validate_with, verdict};
pub use error::{PromptCheckError, Result};
pub use types::report::{PromptReport, ValidationResult};
pub use types::rules::RuleSet;
pub use types::scoring::{Score, Tier, Verdict};
