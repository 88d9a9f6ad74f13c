//! Stack command implementations
//!
//! `stack validate`, `stack show`, and `stack new` operate on layer stack
//! JSON files.

use anyhow::{Context, Result};
use colored::Colorize;
use damascus_spec::{LayerStack, UnitSystem};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CliError, JsonError, JsonLayer, StackOutput};

fn load(file: &str) -> Result<LayerStack> {
    LayerStack::load(Path::new(file)).with_context(|| format!("Failed to load layer stack: {}", file))
}

fn parse_units(name: &str) -> Result<UnitSystem> {
    UnitSystem::from_name(name).ok_or_else(|| {
        anyhow::Error::new(CliError::new(
            error_codes::UNKNOWN_UNITS,
            format!("unknown units: {} (expected mm or in)", name),
        ))
    })
}

fn print_json(output: &StackOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

fn failure(file: &str, err: &anyhow::Error) -> StackOutput {
    StackOutput {
        success: false,
        file: file.to_string(),
        layers: None,
        total_thickness: None,
        units: None,
        errors: vec![JsonError::from_anyhow(err)],
    }
}

/// Run `stack validate`
///
/// # Returns
/// Exit code: 0 if the file loads, 1 otherwise
pub fn validate(file: &str, json_output: bool) -> Result<ExitCode> {
    let loaded = load(file);

    if json_output {
        let output = match &loaded {
            Ok(stack) => StackOutput {
                success: true,
                file: file.to_string(),
                layers: None,
                total_thickness: Some(stack.total_thickness_mm()),
                units: Some(UnitSystem::Metric.suffix().to_string()),
                errors: Vec::new(),
            },
            Err(e) => failure(file, e),
        };
        print_json(&output)?;
    } else {
        println!("{} {}", "Validating:".cyan().bold(), file);
        match &loaded {
            Ok(stack) => println!(
                "{} {} layer(s), {} total",
                "✓".green().bold(),
                stack.len(),
                UnitSystem::Metric.format_thickness(stack.total_thickness_mm())
            ),
            Err(e) => println!("{} {:#}", "✗".red().bold(), e),
        }
    }

    Ok(if loaded.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Run `stack show`
pub fn show(file: &str, units_name: &str, json_output: bool) -> Result<ExitCode> {
    let units = parse_units(units_name)?;

    if json_output {
        let output = match load(file) {
            Ok(stack) => StackOutput {
                success: true,
                file: file.to_string(),
                layers: Some(
                    stack
                        .iter()
                        .map(|layer| JsonLayer {
                            color: layer.color().as_str().to_string(),
                            thickness: units.from_mm(layer.thickness_mm()),
                        })
                        .collect(),
                ),
                total_thickness: Some(units.from_mm(stack.total_thickness_mm())),
                units: Some(units.suffix().to_string()),
                errors: Vec::new(),
            },
            Err(e) => {
                print_json(&failure(file, &e))?;
                return Ok(ExitCode::FAILURE);
            }
        };
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let stack = load(file)?;
    println!("{} {}", "Stack:".cyan().bold(), file);
    if stack.is_empty() {
        println!("  {}", "(no layers)".dimmed());
    }
    for line in stack.listing(units) {
        println!("{}", line);
    }
    println!(
        "{} {}",
        "Total:".dimmed(),
        units.format_thickness(stack.total_thickness_mm())
    );
    Ok(ExitCode::SUCCESS)
}

/// Run `stack new`: write `count` alternating layers starting with white.
pub fn new(output: &str, count: usize, thickness_mm: f64) -> Result<ExitCode> {
    let mut stack = LayerStack::new();
    stack
        .add_alternating(count, thickness_mm)
        .context("Invalid layer thickness")?;
    stack
        .save(Path::new(output))
        .with_context(|| format!("Failed to write layer stack: {}", output))?;

    println!(
        "{} wrote {} layer(s) to {}",
        "✓".green().bold(),
        stack.len(),
        output
    );
    Ok(ExitCode::SUCCESS)
}
