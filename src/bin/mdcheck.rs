use std::process::ExitCode;

use anyhow::Result;

use markdown_validator::config::Config;
use markdown_validator::issue::{Severity, ValidationReport};
use markdown_validator::probe::{HttpProbe, LinkProbe};
use markdown_validator::validator::validate_file;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.clone()),
    )
    .init();

    let probe = if config.offline {
        None
    } else {
        Some(HttpProbe::new(config.probe_timeout)?)
    };
    let probe_ref = probe.as_ref().map(|p| p as &dyn LinkProbe);

    let report = validate_file(&config.file, probe_ref);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    // 0 = clean or advisory findings only, 1 = must-fix issues present
    if report.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_report(report: &ValidationReport) {
    println!("Validating {}", report.file_path);
    println!();

    if report.issues.is_empty() {
        println!("No issues found.");
        return;
    }

    for issue in &report.issues {
        let severity = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        let location = if issue.line_number == 0 {
            "file".to_string()
        } else {
            format!("line {}", issue.line_number)
        };
        println!("{:<9} {:<9} {}", location, severity, issue.description);
        if !issue.original_text.is_empty() {
            println!("          > {}", issue.original_text.trim_end());
        }
        if !issue.suggested_fix.is_empty() {
            println!("          fix: {}", issue.suggested_fix);
        }
    }

    println!();
    println!("{}", report.summary);
}
