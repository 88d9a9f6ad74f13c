//! Render command implementation
//!
//! Builds a session from the command-line controls, renders at full
//! resolution, and exports by file extension.

use anyhow::{Context, Result};
use colored::Colorize;
use damascus_backend_texture::png::hash_png;
use damascus_backend_texture::{export, read_png, ExportFormat, PatternContext, RasterConfig, Session};
use damascus_spec::{BandThickness, LayerStack, PatternKind, TransformParams};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, CliError, JsonError, RenderOutput, RenderResult};
use crate::cli_args::RenderArgs;

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(args: &RenderArgs) -> Result<ExitCode> {
    if args.json {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &RenderArgs) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Rendering:".cyan().bold(), args.output);

    let result = render(args)?;

    println!("{} {}", "Pattern:".dimmed(), result.pattern);
    println!(
        "{} twist {}, grind {}%, mosaic {}x{}",
        "Controls:".dimmed(),
        result.twist,
        result.grind,
        result.mosaic,
        result.mosaic
    );
    if let Some(hash) = &result.hash {
        println!("{} {}", "Hash:".dimmed(), &hash[..16]);
    }
    println!(
        "{} {}x{} {} in {}ms",
        "✓".green().bold(),
        result.width,
        result.height,
        result.format.to_uppercase(),
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &RenderArgs) -> Result<ExitCode> {
    let (output, code) = match render(args) {
        Ok(result) => (
            RenderOutput {
                success: true,
                result: Some(result),
                errors: Vec::new(),
            },
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            RenderOutput {
                success: false,
                result: None,
                errors: vec![JsonError::from_anyhow(&e)],
            },
            ExitCode::FAILURE,
        ),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(code)
}

/// Parse a pattern name, listing the accepted names on failure.
pub fn parse_pattern(name: &str) -> Result<PatternKind> {
    PatternKind::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = PatternKind::ALL.iter().map(|k| k.as_str()).collect();
        anyhow::Error::new(CliError::new(
            error_codes::UNKNOWN_PATTERN,
            format!("unknown pattern: {} (expected one of {}, w, c)", name, names.join(", ")),
        ))
    })
}

/// Validate the controls, render, and export. Shared by both output modes.
pub fn render(args: &RenderArgs) -> Result<RenderResult> {
    let kind = parse_pattern(&args.pattern)?;
    let bands = BandThickness::new(args.white_mm, args.black_mm).context("Invalid band thickness")?;
    let params = TransformParams {
        twist_amount: args.twist,
        grind_depth: args.grind,
        mosaic_size: args.mosaic,
    };
    params.validate().context("Invalid transform controls")?;
    let config = RasterConfig::with_size(args.size);
    config.validate().context("Invalid raster size")?;

    let stack = match (&args.image, &args.stack) {
        (None, Some(stack_path)) => Some(
            LayerStack::load(Path::new(stack_path))
                .with_context(|| format!("Failed to load layer stack: {}", stack_path))?,
        ),
        _ => None,
    };

    let mut context = PatternContext::new(kind).with_bands(bands);
    context.seed = args.seed;
    match stack {
        Some(stack) if kind.uses_stack() => context = context.with_stack(stack),
        Some(_) => tracing::warn!(pattern = %kind, "pattern ignores the layer stack"),
        None => {}
    }

    let mut session = Session::with_context(config, context)?;
    let pattern_label = match &args.image {
        Some(image) => {
            let base = read_png(Path::new(image)).with_context(|| format!("Failed to load image: {}", image))?;
            session.load_base(base);
            "image".to_string()
        }
        None => kind.to_string(),
    };

    session.set_params(params);
    let raster = session.export_job().run();

    let output = Path::new(&args.output);
    let format = export(&raster, output).with_context(|| format!("Failed to export: {}", args.output))?;
    let hash = match format {
        ExportFormat::Png => {
            let bytes = std::fs::read(output).with_context(|| format!("Failed to read back: {}", args.output))?;
            Some(hash_png(&bytes))
        }
        ExportFormat::Pdf => None,
    };

    Ok(RenderResult {
        pattern: pattern_label,
        width: raster.width,
        height: raster.height,
        twist: params.twist_amount,
        grind: params.grind_depth,
        mosaic: params.mosaic_size,
        output: args.output.clone(),
        format: format.as_str().to_string(),
        hash,
    })
}
