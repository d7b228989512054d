pub mod scoring;
pub mod sections;
pub mod signals;

use crate::types::report::{PromptReport, ValidationResult};
use crate::types::rules::RuleSet;
use sha2::{Digest, Sha256};

pub use scoring::{classify, score, score_breakdown, verdict};

/// Checks `text` against the built-in rule tables.
pub fn validate(text: &str) -> ValidationResult {
    validate_with(text, RuleSet::builtin())
}

pub fn validate_with(text: &str, rules: &RuleSet) -> ValidationResult {
    let lowered = text.to_lowercase();
    ValidationResult {
        missing_required: sections::missing_exact(text, &rules.required_sections),
        missing_recommended: sections::missing_folded(&lowered, &rules.recommended_elements),
        word_count: signals::word_count(text),
        has_scope: signals::mentions_any(&lowered, &rules.scope_keywords),
        has_specifics: signals::mentions_any(&lowered, &rules.specificity_indicators),
    }
}

/// Runs every check and derives the score, tier and verdict for one document.
pub fn evaluate(source: &str, text: &str, rules: &RuleSet) -> PromptReport {
    let result = validate_with(text, rules);
    let score = score(&result);
    let tier = classify(score);
    let verdict = verdict(score);
    tracing::debug!(
        source,
        words = result.word_count,
        missing_required = result.missing_required.len(),
        missing_recommended = result.missing_recommended.len(),
        "validated prompt"
    );
    tracing::info!(source, score, %tier, %verdict, "scored prompt");

    PromptReport {
        source: source.to_string(),
        input_sha256: sha256_hex(text),
        score,
        tier,
        verdict,
        deductions: score_breakdown(&result),
        result,
    }
}

fn sha256_hex(text: &str) -> String {
    Sha256::digest(text.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
