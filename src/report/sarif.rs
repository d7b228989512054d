use crate::types::report::PromptReport;
use serde_json::json;

pub fn to_sarif(report: &PromptReport) -> Result<String, serde_json::Error> {
    let location = json!([{
        "physicalLocation": {
            "artifactLocation": { "uri": report.source }
        }
    }]);
    let results: Vec<_> = report
        .deductions
        .iter()
        .map(|deduction| {
            json!({
                "ruleId": deduction.id,
                "level": if deduction.id.starts_with("required.") { "error" } else { "warning" },
                "message": { "text": deduction.reason },
                "locations": location.clone(),
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "promptcheck",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results,
            "properties": {
                "score": report.score,
                "verdict": report.verdict,
            }
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
