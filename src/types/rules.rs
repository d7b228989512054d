use crate::error::PromptCheckError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

pub const REQUIRED_SECTIONS: [&str; 7] = [
    "Research Objective",
    "Context and Scope",
    "Research Requirements",
    "Evidence Standards",
    "Analysis Framework",
    "Output Structure",
    "Quality Instructions",
];

pub const RECOMMENDED_ELEMENTS: [&str; 6] = [
    "Primary questions",
    "Secondary considerations",
    "Explicitly exclude",
    "Source types",
    "Reasoning Approach",
    "Critical Evaluation",
];

pub const SCOPE_KEYWORDS: [&str; 6] = [
    "boundaries",
    "timeframe",
    "geographic",
    "scope",
    "focus on",
    "limited to",
];

pub const SPECIFICITY_INDICATORS: [&str; 5] =
    ["specifically", "exactly", "must", "should", "require"];

/// The label and keyword tables a prompt is checked against.
///
/// Required sections match case-sensitively; every other table matches
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub required_sections: Vec<String>,
    pub recommended_elements: Vec<String>,
    pub scope_keywords: Vec<String>,
    pub specificity_indicators: Vec<String>,
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|entry| entry.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            required_sections: owned(&REQUIRED_SECTIONS),
            recommended_elements: owned(&RECOMMENDED_ELEMENTS),
            scope_keywords: owned(&SCOPE_KEYWORDS),
            specificity_indicators: owned(&SPECIFICITY_INDICATORS),
        }
    }
}

impl RuleSet {
    /// Built-in tables, initialized once per process.
    pub fn builtin() -> &'static RuleSet {
        static BUILTIN: OnceLock<RuleSet> = OnceLock::new();
        BUILTIN.get_or_init(RuleSet::default)
    }

    pub fn validate(&self) -> Result<(), PromptCheckError> {
        for (name, table) in [
            ("required_sections", &self.required_sections),
            ("recommended_elements", &self.recommended_elements),
            ("scope_keywords", &self.scope_keywords),
            ("specificity_indicators", &self.specificity_indicators),
        ] {
            validate_table(name, table)?;
        }
        Ok(())
    }
}

fn validate_table(name: &str, table: &[String]) -> Result<(), PromptCheckError> {
    let mut seen = HashSet::<&str>::new();
    for entry in table {
        if entry.trim().is_empty() {
            return Err(PromptCheckError::ConfigParse(format!(
                "rules.{name} contains an empty entry"
            )));
        }
        if !seen.insert(entry.as_str()) {
            return Err(PromptCheckError::ConfigParse(format!(
                "rules.{name} contains duplicate entry: {entry}"
            )));
        }
    }
    Ok(())
}
