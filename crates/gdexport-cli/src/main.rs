//! gdexport: publishes Godot export artifact names as CI step outputs.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod workflow;

use output::Format;

#[derive(Parser)]
#[command(name = "gdexport")]
#[command(about = "Publish Godot export artifact names as CI step outputs", long_about = None)]
struct Cli {
    /// Godot project root, relative to the working directory or absolute
    #[arg(
        long,
        global = true,
        env = "INPUT_RELATIVE_PROJECT_PATH",
        default_value = "."
    )]
    project_path: PathBuf,

    /// How outputs are published
    #[arg(long, global = true, env = "GDEXPORT_FORMAT", value_enum, default_value = "auto")]
    format: Format,

    /// Runner output file appended to by the `github` format
    #[arg(long, global = true, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect artifact names and publish them (the default)
    Collect,
    /// List export presets and what each would publish
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries workflow commands and outputs.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command.unwrap_or(Commands::Collect) {
        Commands::Collect => {
            commands::collect::run(&cli.project_path, cli.format, cli.output_file.as_deref())
        }
        Commands::Validate => commands::validate::run(&cli.project_path),
    };

    finish(result, &mut io::stdout().lock())
}

/// Report a failed run as an `::error::` command and map it to the exit status.
fn finish(result: anyhow::Result<()>, out: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{e:#}");
            error!("{message}");
            // stdout may already be gone; the exit status still reports the failure.
            let _ = writeln!(out, "{}", workflow::error(&message));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_export_presets_exits_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_output");
        let result = commands::collect::run(dir.path(), Format::Github, Some(&output));

        let mut out = Vec::new();
        assert_eq!(finish(result, &mut out), ExitCode::FAILURE);

        let text = String::from_utf8(out).unwrap();
        assert!(
            text.starts_with("::error::No export_presets.cfg found"),
            "{text}"
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_success_exits_zero() {
        let mut out = Vec::new();
        assert_eq!(finish(Ok(()), &mut out), ExitCode::SUCCESS);
        assert!(out.is_empty());
    }

    #[test]
    fn test_cli_reads_action_input() {
        let cli = Cli::try_parse_from(["gdexport", "--project-path", "game", "--format", "json"])
            .unwrap();
        assert_eq!(cli.project_path, PathBuf::from("game"));
        assert_eq!(cli.format, Format::Json);
        assert!(cli.command.is_none());
    }
}
