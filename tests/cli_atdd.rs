use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REQUIRED: [&str; 7] = [
    "Research Objective",
    "Context and Scope",
    "Research Requirements",
    "Evidence Standards",
    "Analysis Framework",
    "Output Structure",
    "Quality Instructions",
];

const RECOMMENDED: [&str; 6] = [
    "Primary questions",
    "Secondary considerations",
    "Explicitly exclude",
    "Source types",
    "Reasoning Approach",
    "Critical Evaluation",
];

fn complete_prompt() -> String {
    let mut text = String::new();
    for section in REQUIRED {
        text.push_str(&format!("## {section}\n\n"));
    }
    for element in RECOMMENDED {
        text.push_str(&format!("- {element}\n"));
    }
    text.push_str("Limited to 2015-2025. Cite exactly one source per claim.\n");
    text.push_str(&"detail ".repeat(210));
    text
}

/// Runs the binary from an empty directory so no repo config is picked up.
fn promptcheck(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("promptcheck").expect("binary should compile");
    cmd.current_dir(workdir.path()).env("HOME", workdir.path());
    cmd
}

#[test]
fn complete_prompt_passes_with_full_score() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("prompt.md");
    fs::write(&path, complete_prompt()).expect("prompt should write");

    promptcheck(&dir)
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("All required sections present"))
        .stdout(predicate::str::contains("All recommended elements present"))
        .stdout(predicate::str::contains("OVERALL QUALITY SCORE: 100/100"))
        .stdout(predicate::str::contains("Ready for deep research"));
}

#[test]
fn empty_stdin_fails_with_zero_score() {
    let dir = TempDir::new().expect("temp dir should be created");

    promptcheck(&dir)
        .arg("-")
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("OVERALL QUALITY SCORE: 0/100"))
        .stdout(predicate::str::contains("Research Objective"));
}

#[test]
fn score_of_seventy_passes() {
    let dir = TempDir::new().expect("temp dir should be created");
    let text = complete_prompt()
        .replace("Evidence Standards", "")
        .replace("Output Structure", "")
        .replace("Quality Instructions", "");

    promptcheck(&dir)
        .args(["-", "--format", "json"])
        .write_stdin(text)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 70"))
        .stdout(predicate::str::contains("\"tier\": \"good\""));
}

#[test]
fn score_of_sixty_five_fails() {
    let dir = TempDir::new().expect("temp dir should be created");
    let text = complete_prompt()
        .replace("Evidence Standards", "")
        .replace("Output Structure", "")
        .replace("Quality Instructions", "")
        .replace("Source types", "");

    promptcheck(&dir)
        .args(["-", "--format", "json"])
        .write_stdin(text)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"score\": 65"))
        .stdout(predicate::str::contains("\"verdict\": \"fail\""));
}

#[test]
fn missing_file_is_reported_without_scoring() {
    let dir = TempDir::new().expect("temp dir should be created");

    promptcheck(&dir)
        .arg("does-not-exist.txt")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("file 'does-not-exist.txt' not found"));
}

#[test]
fn quiet_mode_keeps_exit_status() {
    let dir = TempDir::new().expect("temp dir should be created");

    promptcheck(&dir)
        .args(["-", "--quiet"])
        .write_stdin("just a few words")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn repo_config_overrides_required_sections() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("promptcheck.toml"),
        r#"
[rules]
required_sections = ["Hypothesis"]
recommended_elements = []
"#,
    )
    .expect("config should write");

    let text = format!("Hypothesis\nWe must stay within scope.\n{}", "word ".repeat(200));
    promptcheck(&dir)
        .args(["-", "--format", "md"])
        .write_stdin(text)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 100/100"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = dir.path().join("rules.toml");
    fs::write(&config, "[rules]\nscope_keywords = [\"scope\", \"scope\"]\n")
        .expect("config should write");

    promptcheck(&dir)
        .arg("-")
        .arg("--config")
        .arg(&config)
        .write_stdin("anything")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate entry: scope"));
}

#[test]
fn sarif_output_lists_missing_sections() {
    let dir = TempDir::new().expect("temp dir should be created");

    promptcheck(&dir)
        .args(["-", "--format", "sarif"])
        .write_stdin("Research Objective only")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""))
        .stdout(predicate::str::contains("missing required section: Context and Scope"));
}
