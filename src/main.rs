use clap::Parser;
use promptcheck::cli::{Cli, ReportFormat};
use promptcheck::error::PromptCheckError;
use promptcheck::input::{read_input, InputSource};
use promptcheck::report::{self, OutputFormat};
use promptcheck::{config, evaluate, logging};

pub mod exit_code {
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn run() -> Result<i32, PromptCheckError> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let source = InputSource::parse(&cli.input);
    let text = read_input(&source)?;

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let rules = loaded.rule_set();

    let prompt_report = evaluate(&source.label(), &text, &rules);

    if !cli.quiet {
        let output_format = match cli.format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Sarif => OutputFormat::Sarif,
        };
        let rendered = report::render(&prompt_report, output_format)?;
        println!("{rendered}");
    }

    Ok(prompt_report.exit_code())
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
