use super::scoring::{Deduction, Score, Tier, Verdict};
use serde::Serialize;

/// Presence checks for a single prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub missing_required: Vec<String>,
    pub missing_recommended: Vec<String>,
    pub word_count: usize,
    pub has_scope: bool,
    pub has_specifics: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptReport {
    pub source: String,
    pub input_sha256: String,
    pub score: Score,
    pub tier: Tier,
    pub verdict: Verdict,
    pub result: ValidationResult,
    pub deductions: Vec<Deduction>,
}

impl PromptReport {
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}
