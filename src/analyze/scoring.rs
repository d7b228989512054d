use crate::types::report::ValidationResult;
use crate::types::scoring::{Deduction, Score, Tier, Verdict};

pub const BASE_SCORE: i64 = 100;
pub const REQUIRED_PENALTY: u32 = 10;
pub const RECOMMENDED_PENALTY: u32 = 5;
pub const SHORT_PENALTY: u32 = 10;
pub const MIN_WORD_COUNT: usize = 200;
pub const SCOPE_PENALTY: u32 = 5;
pub const SPECIFICS_PENALTY: u32 = 5;

pub const EXCELLENT_THRESHOLD: Score = 90;
pub const PASS_THRESHOLD: Score = 70;
pub const IMPROVEMENT_THRESHOLD: Score = 50;

/// Itemized deductions in the order they are applied.
pub fn score_breakdown(result: &ValidationResult) -> Vec<Deduction> {
    let mut deductions = Vec::new();
    for section in &result.missing_required {
        deductions.push(Deduction::new(
            "required.missing",
            format!("missing required section: {section}"),
            REQUIRED_PENALTY,
        ));
    }
    for element in &result.missing_recommended {
        deductions.push(Deduction::new(
            "recommended.missing",
            format!("missing recommended element: {element}"),
            RECOMMENDED_PENALTY,
        ));
    }
    if result.word_count < MIN_WORD_COUNT {
        deductions.push(Deduction::new(
            "length.short",
            format!(
                "word count {} is below {}",
                result.word_count, MIN_WORD_COUNT
            ),
            SHORT_PENALTY,
        ));
    }
    if !result.has_scope {
        deductions.push(Deduction::new(
            "scope.missing",
            "no scope or boundary definition",
            SCOPE_PENALTY,
        ));
    }
    if !result.has_specifics {
        deductions.push(Deduction::new(
            "specifics.missing",
            "no specific instructions",
            SPECIFICS_PENALTY,
        ));
    }
    deductions
}

pub fn score(result: &ValidationResult) -> Score {
    let total: i64 = score_breakdown(result)
        .iter()
        .map(|deduction| i64::from(deduction.points))
        .sum();
    (BASE_SCORE - total).clamp(0, 100) as Score
}

pub fn classify(score: Score) -> Tier {
    if score >= EXCELLENT_THRESHOLD {
        Tier::Excellent
    } else if score >= PASS_THRESHOLD {
        Tier::Good
    } else if score >= IMPROVEMENT_THRESHOLD {
        Tier::NeedsImprovement
    } else {
        Tier::Inadequate
    }
}

pub fn verdict(score: Score) -> Verdict {
    if score >= PASS_THRESHOLD {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
