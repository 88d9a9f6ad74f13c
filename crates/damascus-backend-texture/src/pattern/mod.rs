//! Base pattern generators.
//!
//! Each generator produces a fresh square raster. The band fills
//! (simple and custom layers) paint whole rows; the checkerboard and the two
//! warps implement [`Pattern2D`] and are rendered per pixel, row-parallel.
//!
//! [`generate_pattern`] is the single entry point used by the session: it
//! takes an explicit [`PatternContext`] rather than reading shared state, so
//! the generator kind and the stack it uses always come from the same
//! snapshot.

mod bands;
mod checker;
mod random;
mod warp;

pub use bands::{fill_bands, BandFill};
pub use checker::{CheckerPattern, CHECKER_CELLS};
pub use random::{RandomStripes, STRIPE_COUNT, STRIPE_HEIGHT, STRIPE_INTENSITY};
pub use warp::{ChevronWarp, CurveWarp, CHEVRON_AMPLITUDE, CURVE_STRENGTH};

use damascus_spec::{BackendError, BandThickness, LayerStack, PatternKind};
use thiserror::Error;

use crate::color::Rgb;
use crate::config::RasterConfig;
use crate::lookup::EffectiveStack;
use crate::raster::Raster;
use crate::rng::DeterministicRng;

/// Errors from pattern generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidParameter(_) => "TEXTURE_001",
        }
    }

    fn category(&self) -> &'static str {
        "texture"
    }
}

/// Trait for per-pixel pattern generators.
pub trait Pattern2D: Sync {
    /// Color at a pixel coordinate.
    fn sample(&self, x: u32, y: u32) -> Rgb;

    /// Render a `width x height` raster, computing rows in parallel.
    fn render(&self, width: u32, height: u32) -> Raster {
        Raster::from_rows(width, height, |y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = self.sample(x as u32, y);
            }
        })
    }
}

/// Everything a regeneration needs: which generator, and the inputs it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternContext {
    /// Active generator.
    pub kind: PatternKind,
    /// Active explicit stack, if any. Empty or absent means "use `bands`".
    pub stack: Option<LayerStack>,
    /// Scalar two-band thicknesses.
    pub bands: BandThickness,
    /// Seed for random banding. `None` draws fresh entropy.
    pub seed: Option<u32>,
}

impl Default for PatternContext {
    fn default() -> Self {
        Self {
            kind: PatternKind::SimpleLayers,
            stack: None,
            bands: BandThickness::default(),
            seed: None,
        }
    }
}

impl PatternContext {
    /// Context for `kind` with default inputs.
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the explicit stack.
    pub fn with_stack(mut self, stack: LayerStack) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Set the scalar band thicknesses.
    pub fn with_bands(mut self, bands: BandThickness) -> Self {
        self.bands = bands;
        self
    }

    /// Set the random banding seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The stack generators should sample.
    pub fn effective_stack(&self, config: &RasterConfig) -> EffectiveStack {
        EffectiveStack::resolve(self.stack.as_ref(), &self.bands, config)
    }
}

/// Generate the base raster for `ctx`.
pub fn generate_pattern(ctx: &PatternContext, config: &RasterConfig) -> Result<Raster, GenerateError> {
    config.validate()?;
    let size = config.size;

    tracing::debug!(kind = %ctx.kind, size, "generating base pattern");

    let raster = match ctx.kind {
        PatternKind::SimpleLayers => {
            BandFill::two_band(&ctx.bands, config).render(size, size)
        }
        PatternKind::Checkerboard => CheckerPattern::new(size).render(size, size),
        PatternKind::Random => {
            let mut rng = DeterministicRng::from_seed_or_entropy(ctx.seed);
            RandomStripes::default().render(size, &mut rng)
        }
        PatternKind::Chevron => {
            ChevronWarp::new(ctx.effective_stack(config), size).render(size, size)
        }
        PatternKind::Curve => {
            CurveWarp::new(ctx.effective_stack(config), size).render(size, size)
        }
        PatternKind::Custom => BandFill::new(ctx.effective_stack(config)).render(size, size),
    };

    Ok(raster)
}
