// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::time::Duration;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};

use crate::commit::{validate, CommitComposer, CommitMessage, CommitPreview};
use crate::config::{CmtConfig, CommitType};
use crate::error::{CmtError, MessageError, Result};
use crate::smart::{Prediction, PredictionEngine};

use super::args::{CheckArgs, Cli, Commands, ComposeArgs, OutputFormat, ScopesArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CmtConfig::load_from(config_path)?
    } else {
        CmtConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Smart => run_smart(&cli, &config),
        Commands::Compose(args) => run_compose(&cli, &config, args),
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Types => run_types(&cli),
        Commands::Scopes(args) => run_scopes(&cli, args),
        Commands::Version => run_version(),
    }
}

/// Run the smart command.
fn run_smart(cli: &Cli, config: &CmtConfig) -> Result<()> {
    tracing::debug!("Running smart command");

    let dir = std::env::current_dir()?;
    let mut engine = PredictionEngine::new(config.clone());

    let spinner = start_spinner("Analyzing changes...");
    let prediction = engine.analyze(&dir);
    spinner.finish_and_clear();

    let Some(prediction) = prediction? else {
        return report_no_prediction(cli, config);
    };

    if cli.format == Some(OutputFormat::Json) {
        println!("{}", prediction_json(&prediction));
        return Ok(());
    }

    print_prediction(&prediction)?;

    if cli.non_interactive {
        println!("{}", message_from(&prediction).format());
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let accepted = Confirm::with_theme(&theme)
        .with_prompt("Use this message?")
        .default(true)
        .interact_opt()?
        .ok_or(CmtError::Cancelled)?;

    let message = if accepted {
        message_from(&prediction)
    } else {
        CommitComposer::new(config.clone()).compose_interactive()?
    };

    finish_with(&message, config)
}

/// Handle the case where the engine found nothing to analyze.
fn report_no_prediction(cli: &Cli, config: &CmtConfig) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) {
        println!("{}", serde_json::json!({ "message": null }));
        return Ok(());
    }

    let term = Term::stderr();
    term.write_line(&format!(
        "{} Could not predict a commit message from the current changes.",
        style("ℹ").blue()
    ))?;

    if cli.non_interactive {
        return Ok(());
    }

    let message = CommitComposer::new(config.clone()).compose_interactive()?;
    finish_with(&message, config)
}

/// Run the compose command.
fn run_compose(cli: &Cli, config: &CmtConfig, args: ComposeArgs) -> Result<()> {
    tracing::debug!("Running compose command with args: {:?}", args);

    let mut composer = CommitComposer::new(config.clone());

    // Pre-fill values from arguments
    if let Some(ref type_name) = args.r#type {
        composer = composer.with_type_str(type_name)?;
    }
    if let Some(ref scope) = args.scope {
        composer = composer.with_scope(scope);
    }
    if let Some(ref message) = args.message {
        composer = composer.with_description(message);
    }
    if args.breaking {
        composer = composer.with_breaking(true);
    }

    let message = if cli.non_interactive {
        composer.compose_non_interactive()
    } else {
        composer.compose_interactive()?
    };

    if cli.format == Some(OutputFormat::Json) {
        println!(
            "{}",
            serde_json::json!({
                "message": message.format(),
                "type": message.commit_type.as_str(),
                "scope": message.scope,
                "description": message.description,
                "breaking": message.breaking,
            })
        );
        return Ok(());
    }

    finish_with(&message, config)
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CmtConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command");

    let validation = validate(&args.message, &config.rules);

    if cli.format == Some(OutputFormat::Json) {
        println!(
            "{}",
            serde_json::json!({
                "valid": validation.is_valid(),
                "issues": validation.issues,
            })
        );
    } else if validation.is_valid() {
        println!(
            "{} Message follows the conventional commit format",
            style("✓").green().bold()
        );
    } else {
        println!(
            "{} Message does not pass validation:",
            style("✗").red().bold()
        );
        for issue in &validation.issues {
            println!("  - {}", issue);
        }
    }

    if validation.is_valid() {
        Ok(())
    } else {
        let count = validation.issues.len();
        Err(CmtError::Message(MessageError::InvalidFormat {
            message: format!(
                "{} {}",
                count,
                if count == 1 { "issue" } else { "issues" }
            ),
        }))
    }
}

/// Run the types command.
fn run_types(cli: &Cli) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) {
        let types: Vec<_> = CommitType::all()
            .iter()
            .map(|commit_type| {
                serde_json::json!({
                    "type": commit_type.as_str(),
                    "description": commit_type.description(),
                })
            })
            .collect();
        println!("{}", serde_json::json!(types));
        return Ok(());
    }

    for commit_type in CommitType::all() {
        println!(
            "{:10} {}",
            commit_type.as_str(),
            style(commit_type.description()).dim()
        );
    }
    Ok(())
}

/// Run the scopes command.
fn run_scopes(cli: &Cli, args: ScopesArgs) -> Result<()> {
    let scopes = crate::commit::suggest_scopes(args.filter.as_deref());

    if cli.format == Some(OutputFormat::Json) {
        println!("{}", serde_json::json!(scopes));
        return Ok(());
    }

    for scope in scopes {
        println!("{}", scope);
    }
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmt {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Print the prediction with its supporting facts and alternatives.
fn print_prediction(prediction: &Prediction) -> Result<()> {
    let term = Term::stderr();

    let detected = match (prediction.language, prediction.framework) {
        (Some(language), Some(framework)) => format!("{} / {}", language, framework),
        (Some(language), None) => language.to_string(),
        (None, Some(framework)) => framework.to_string(),
        (None, None) => "unknown".to_string(),
    };
    term.write_line(&format!(
        "\n{} {}",
        style("Detected:").dim(),
        style(&detected).cyan()
    ))?;
    term.write_line(&format!(
        "{} {}",
        style("Confidence:").dim(),
        style(format!("{:.0}%", prediction.confidence * 100.0)).cyan()
    ))?;

    let message = message_from(prediction);
    term.write_line(&format!(
        "\n  {}\n",
        style(message.header()).green().bold()
    ))?;

    let alternatives = prediction.alternatives();
    if !alternatives.is_empty() {
        term.write_line(&style("Alternatives:").dim().to_string())?;
        for alternative in &alternatives {
            let header = match &prediction.scope {
                Some(scope) => format!(
                    "{}({}): {}",
                    alternative.commit_type, scope, alternative.description
                ),
                None => format!("{}: {}", alternative.commit_type, alternative.description),
            };
            term.write_line(&format!("  {}", style(header).yellow()))?;
            term.write_line(&format!("    {}", style(alternative.reason).dim()))?;
        }
        term.write_line("")?;
    }

    Ok(())
}

/// Show the preview box and print the git invocation for the message.
fn finish_with(message: &CommitMessage, config: &CmtConfig) -> Result<()> {
    let term = Term::stderr();
    term.write_line("")?;
    CommitPreview::new(message).print();
    if config.ui.hints {
        term.write_line(&format!("\n{}", style("To commit, run:").dim()))?;
    }
    println!("git commit -m {}", shell_quote(&message.format()));
    Ok(())
}

/// Assemble a commit message from a prediction.
fn message_from(prediction: &Prediction) -> CommitMessage {
    let mut message =
        CommitMessage::new(prediction.commit_type).with_description(&prediction.description);
    if let Some(scope) = &prediction.scope {
        message = message.with_scope(scope);
    }
    message
}

/// Render the prediction as a JSON object.
fn prediction_json(prediction: &Prediction) -> String {
    let alternatives: Vec<_> = prediction
        .alternatives()
        .iter()
        .map(|alternative| {
            serde_json::json!({
                "type": alternative.commit_type.as_str(),
                "description": alternative.description,
                "reason": alternative.reason,
            })
        })
        .collect();

    serde_json::json!({
        "message": message_from(prediction).format(),
        "type": prediction.commit_type.as_str(),
        "scope": prediction.scope,
        "description": prediction.description,
        "confidence": prediction.confidence,
        "language": prediction.language,
        "framework": prediction.framework,
        "alternatives": alternatives,
    })
    .to_string()
}

/// Single-quote a string for a POSIX shell.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "'\\''"))
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
