use crate::types::report::PromptReport;

pub fn to_json(report: &PromptReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
