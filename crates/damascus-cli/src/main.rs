//! Damascus CLI - Command-line interface for the Damascus pattern simulator
//!
//! This binary renders shaped Damascus patterns and manages layer stack files.

use clap::Parser;
use std::process::ExitCode;

use damascus_cli::cli_args::{Cli, Commands, StackCommands};
use damascus_cli::commands;

fn main() -> ExitCode {
    // Logs on stderr, command output on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Stack { command } => match command {
            StackCommands::Validate { file, json } => commands::stack::validate(&file, json),
            StackCommands::Show { file, units, json } => commands::stack::show(&file, &units, json),
            StackCommands::New {
                output,
                count,
                thickness,
            } => commands::stack::new(&output, count, thickness),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
