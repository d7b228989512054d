use crate::analyze::scoring::MIN_WORD_COUNT;
use crate::types::report::PromptReport;
use crate::types::scoring::Tier;

const RULE_WIDTH: usize = 50;

fn flag(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "⚠️"
    }
}

/// Console report in the layout users of the checker expect on a terminal.
pub fn to_text(report: &PromptReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let result = &report.result;
    let mut output = String::new();

    output.push_str(&format!("\n{rule}\nRESEARCH PROMPT VALIDATION REPORT\n{rule}\n"));

    if result.missing_required.is_empty() {
        output.push_str("\n✅ All required sections present\n");
    } else {
        output.push_str("\n⚠️  MISSING REQUIRED SECTIONS:\n");
        for section in &result.missing_required {
            output.push_str(&format!("  • {section}\n"));
        }
    }

    if result.missing_recommended.is_empty() {
        output.push_str("\n✅ All recommended elements present\n");
    } else {
        output.push_str("\n⚠️  MISSING RECOMMENDED ELEMENTS:\n");
        for element in &result.missing_recommended {
            output.push_str(&format!("  • {element}\n"));
        }
    }

    let length_note = if result.word_count > MIN_WORD_COUNT {
        "✅"
    } else {
        "⚠️  (consider adding more detail)"
    };
    output.push_str("\n📊 QUALITY INDICATORS:\n");
    output.push_str(&format!(
        "  • Word count: {} {}\n",
        result.word_count, length_note
    ));
    output.push_str(&format!(
        "  • Has scope definition: {}\n",
        flag(result.has_scope)
    ));
    output.push_str(&format!(
        "  • Has specific instructions: {}\n",
        flag(result.has_specifics)
    ));

    output.push_str(&format!(
        "\n📈 OVERALL QUALITY SCORE: {}/100\n",
        report.score
    ));
    let icon = match report.tier {
        Tier::Excellent => "🌟",
        Tier::Good => "👍",
        Tier::NeedsImprovement => "⚠️ ",
        Tier::Inadequate => "❌",
    };
    output.push_str(&format!("{icon} {}\n", report.tier.remark()));
    output.push_str(&format!("\n{rule}\n"));
    output
}
