//! Compositor and session state.
//!
//! [`render`] is the one path from a base pattern to a finished raster; the
//! interactive preview and full-resolution export both call it, so they never
//! disagree. [`Session`] owns the only mutable state in the system: the
//! active generator, its stack and scalar thicknesses, the shaping controls,
//! and the current base raster.

use damascus_spec::{BandThickness, LayerStack, PatternKind, TransformParams};

use crate::config::RasterConfig;
use crate::pattern::{generate_pattern, GenerateError, PatternContext};
use crate::raster::Raster;
use crate::transform::apply_transforms;

/// Render `pattern` through mosaic, twist, and grind.
pub fn render(pattern: &Raster, params: &TransformParams) -> Raster {
    apply_transforms(pattern, params)
}

/// Where the current base raster came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseOrigin {
    /// Produced by a generator from the session context.
    Generated,
    /// Supplied by the caller (e.g. a loaded image).
    Loaded,
}

/// A self-contained render request that can run on another thread.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub base: Raster,
    pub params: TransformParams,
}

impl ExportJob {
    /// Render at full resolution.
    pub fn run(&self) -> Raster {
        render(&self.base, &self.params)
    }
}

/// Interactive session: generator choice, inputs, controls, and base raster.
#[derive(Debug, Clone)]
pub struct Session {
    config: RasterConfig,
    context: PatternContext,
    params: TransformParams,
    base: Raster,
    origin: BaseOrigin,
}

impl Session {
    /// Start a session with the default pattern (simple layers).
    pub fn new(config: RasterConfig) -> Result<Self, GenerateError> {
        Self::with_context(config, PatternContext::default())
    }

    /// Start a session from a fully prepared context, generating the base
    /// exactly once.
    pub fn with_context(config: RasterConfig, context: PatternContext) -> Result<Self, GenerateError> {
        let base = generate_pattern(&context, &config)?;
        tracing::debug!(pattern = %context.kind, width = base.width, height = base.height, "started session");
        Ok(Self {
            config,
            context,
            params: TransformParams::default(),
            base,
            origin: BaseOrigin::Generated,
        })
    }

    /// Raster geometry.
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Active generator context.
    pub fn context(&self) -> &PatternContext {
        &self.context
    }

    /// Owned copy of the active context, taken as one unit.
    pub fn snapshot(&self) -> PatternContext {
        self.context.clone()
    }

    /// Active generator.
    pub fn kind(&self) -> PatternKind {
        self.context.kind
    }

    /// Current shaping controls.
    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// Replace the shaping controls.
    pub fn set_params(&mut self, params: TransformParams) {
        self.params = params;
    }

    /// Current base raster (before transforms).
    pub fn base(&self) -> &Raster {
        &self.base
    }

    /// Where the base raster came from.
    pub fn origin(&self) -> BaseOrigin {
        self.origin
    }

    /// Set the random banding seed used by later regenerations.
    pub fn set_seed(&mut self, seed: Option<u32>) {
        self.context.seed = seed;
    }

    /// Select a preset generator and regenerate.
    ///
    /// Chevron and curve presets clear any active stack, so they use the
    /// scalar thicknesses; use [`Session::apply_stack`] to warp a custom
    /// stack. Checkerboard and random presets reset the controls.
    pub fn select(&mut self, kind: PatternKind) -> Result<&Raster, GenerateError> {
        let mut context = self.context.clone();
        context.kind = kind;
        match kind {
            PatternKind::Chevron | PatternKind::Curve => context.stack = None,
            PatternKind::Checkerboard | PatternKind::Random => {
                self.params = TransformParams::default();
                context.bands = BandThickness::default();
            }
            PatternKind::SimpleLayers | PatternKind::Custom => {}
        }
        self.regenerate_with(context)
    }

    /// Install `stack` and paint it as bands.
    pub fn generate_custom(&mut self, stack: LayerStack) -> Result<&Raster, GenerateError> {
        self.apply_stack(PatternKind::Custom, stack)
    }

    /// Install `stack` as the active stack and regenerate with `kind`.
    pub fn apply_stack(&mut self, kind: PatternKind, stack: LayerStack) -> Result<&Raster, GenerateError> {
        let mut context = self.context.clone();
        context.kind = kind;
        context.stack = Some(stack);
        self.regenerate_with(context)
    }

    /// Change the scalar band thickness.
    ///
    /// Regenerates the base only when the active generator follows the
    /// scalar thicknesses. Returns whether a regeneration happened.
    pub fn set_band_thickness(&mut self, bands: BandThickness) -> Result<bool, GenerateError> {
        self.context.bands = bands;
        if self.origin == BaseOrigin::Generated && self.context.kind.follows_band_thickness() {
            self.regenerate()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Reset the shaping controls and scalar thicknesses to their defaults.
    pub fn reset_controls(&mut self) -> Result<(), GenerateError> {
        self.params = TransformParams::default();
        self.set_band_thickness(BandThickness::default())?;
        Ok(())
    }

    /// Use an externally supplied raster as the base pattern.
    pub fn load_base(&mut self, base: Raster) {
        tracing::debug!(width = base.width, height = base.height, "loaded base raster");
        self.base = base;
        self.origin = BaseOrigin::Loaded;
    }

    /// Regenerate the base from the current context.
    pub fn regenerate(&mut self) -> Result<&Raster, GenerateError> {
        let context = self.snapshot();
        self.regenerate_with(context)
    }

    fn regenerate_with(&mut self, context: PatternContext) -> Result<&Raster, GenerateError> {
        let base = generate_pattern(&context, &self.config)?;
        self.context = context;
        self.base = base;
        self.origin = BaseOrigin::Generated;
        Ok(&self.base)
    }

    /// Render the current base with the current controls.
    pub fn render(&self) -> Raster {
        render(&self.base, &self.params)
    }

    /// Render, then downscale for display. Transform semantics are identical
    /// to [`Session::render`].
    pub fn preview(&self, max_width: u32, max_height: u32) -> Raster {
        self.render().thumbnail(max_width, max_height)
    }

    /// Package the current base and controls for off-thread export.
    pub fn export_job(&self) -> ExportJob {
        ExportJob {
            base: self.base.clone(),
            params: self.params,
        }
    }
}
