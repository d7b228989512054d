use crate::types::report::PromptReport;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
        output.push('\n');
    }
}

pub fn to_markdown(report: &PromptReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str("# Research Prompt Validation Report\n\n");
    output.push_str(&format!("Source: `{}`\n\n", report.source));
    output.push_str(&format!(
        "Overall score: {}/100 ({}, {})\n\n",
        report.score, report.tier, report.verdict
    ));

    output.push_str("## Missing Required Sections\n\n");
    push_list(&mut output, &result.missing_required);

    output.push_str("## Missing Recommended Elements\n\n");
    push_list(&mut output, &result.missing_recommended);

    output.push_str("## Quality Indicators\n\n");
    output.push_str(&format!(
        "- word count: {}\n- scope definition: {}\n- specific instructions: {}\n\n",
        result.word_count,
        yes_no(result.has_scope),
        yes_no(result.has_specifics)
    ));

    output.push_str("## Deductions\n\n");
    if report.deductions.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for deduction in &report.deductions {
            output.push_str(&format!(
                "- -{} `{}`: {}\n",
                deduction.points, deduction.id, deduction.reason
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!("> {}\n", report.tier.remark()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::partial_report;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&partial_report());
        assert!(rendered.contains("# Research Prompt Validation Report"));
        assert!(rendered.contains("## Missing Required Sections"));
        assert!(rendered.contains("- Quality Instructions"));
        assert!(rendered.contains("## Quality Indicators"));
        assert!(rendered.contains("Overall score: 15/100 (inadequate, fail)"));
        assert!(rendered.contains("`length.short`"));
    }
}
