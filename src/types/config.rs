use super::rules::RuleSet;
use crate::error::PromptCheckError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptCheckConfig {
    pub rules: Option<RulesConfig>,
}

/// Per-table overrides; a missing key keeps the built-in table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    pub required_sections: Option<Vec<String>>,
    pub recommended_elements: Option<Vec<String>>,
    pub scope_keywords: Option<Vec<String>>,
    pub specificity_indicators: Option<Vec<String>>,
}

impl PromptCheckConfig {
    pub fn rule_set(&self) -> RuleSet {
        let builtin = RuleSet::builtin();
        let Some(rules) = &self.rules else {
            return builtin.clone();
        };
        RuleSet {
            required_sections: rules
                .required_sections
                .clone()
                .unwrap_or_else(|| builtin.required_sections.clone()),
            recommended_elements: rules
                .recommended_elements
                .clone()
                .unwrap_or_else(|| builtin.recommended_elements.clone()),
            scope_keywords: rules
                .scope_keywords
                .clone()
                .unwrap_or_else(|| builtin.scope_keywords.clone()),
            specificity_indicators: rules
                .specificity_indicators
                .clone()
                .unwrap_or_else(|| builtin.specificity_indicators.clone()),
        }
    }

    pub fn validate(&self) -> Result<(), PromptCheckError> {
        self.rule_set().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtin_rules() {
        let cfg: PromptCheckConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(&cfg.rule_set(), RuleSet::builtin());
    }

    #[test]
    fn partial_rules_override_only_named_tables() {
        let cfg: PromptCheckConfig = toml::from_str(
            r#"
[rules]
scope_keywords = ["jurisdiction", "cohort"]
"#,
        )
        .expect("config should parse");

        let rules = cfg.rule_set();
        assert_eq!(rules.scope_keywords, vec!["jurisdiction", "cohort"]);
        assert_eq!(rules.required_sections, RuleSet::builtin().required_sections);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_rule_keys_are_rejected() {
        let parsed = toml::from_str::<PromptCheckConfig>(
            r#"
[rules]
weights = [1, 2]
"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn validate_rejects_duplicate_overrides() {
        let cfg: PromptCheckConfig = toml::from_str(
            r#"
[rules]
recommended_elements = ["Source types", "Source types"]
"#,
        )
        .expect("config should parse");
        assert!(matches!(
            cfg.validate(),
            Err(PromptCheckError::ConfigParse(_))
        ));
    }
}
