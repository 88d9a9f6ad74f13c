//! CLI argument definitions for the Damascus command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

/// Damascus - forge-welded steel pattern simulator
#[derive(Parser)]
#[command(name = "damascus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a base pattern, shape it, and export PNG or PDF
    Render(RenderArgs),

    /// Create, inspect, and validate layer stack files
    Stack {
        #[command(subcommand)]
        command: StackCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Base pattern (simple_layers, checkerboard, random, chevron|w, curve|c, custom)
    #[arg(short, long, default_value = "simple_layers")]
    pub pattern: String,

    /// Layer stack JSON file (used by chevron, curve, and custom)
    #[arg(short, long)]
    pub stack: Option<String>,

    /// Load the base pattern from a PNG instead of generating it
    #[arg(long, conflicts_with = "stack")]
    pub image: Option<String>,

    /// White band thickness in millimeters (scalar stack)
    #[arg(long, default_value_t = 1.0)]
    pub white_mm: f64,

    /// Black band thickness in millimeters (scalar stack)
    #[arg(long, default_value_t = 1.0)]
    pub black_mm: f64,

    /// Twist amount (0-10)
    #[arg(long, default_value_t = 0.0)]
    pub twist: f64,

    /// Grind depth in percent (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub grind: f64,

    /// Mosaic grid size (1, 2 or 3)
    #[arg(long, default_value_t = 1)]
    pub mosaic: u32,

    /// Seed for random banding (omit for a fresh pattern each run)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Raster edge length in pixels
    #[arg(long, default_value_t = 400)]
    pub size: u32,

    /// Output file (.png or .pdf)
    #[arg(short, long)]
    pub output: String,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum StackCommands {
    /// Check that a stack file loads
    Validate {
        /// Path to the stack JSON file
        file: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the layers of a stack file
    Show {
        /// Path to the stack JSON file
        file: String,

        /// Display units (mm or in)
        #[arg(short, long, default_value = "mm")]
        units: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write a new alternating white/black stack file
    New {
        /// Output path for the stack JSON file
        #[arg(short, long)]
        output: String,

        /// Number of layers
        #[arg(short, long, default_value_t = 2)]
        count: usize,

        /// Thickness of every layer in millimeters
        #[arg(short, long, default_value_t = 1.0)]
        thickness: f64,
    },
}
