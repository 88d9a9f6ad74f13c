//! Damascus Pattern Engine
//!
//! Rasterizes layer stacks into Damascus-style cross-section patterns and
//! shapes them the way a smith works a billet: mosaic stacking, twisting, and
//! grinding into the bar. Every generator and transform is a pure function of
//! its inputs; the only mutable state is the interactive [`Session`].
//!
//! # Example
//!
//! ```no_run
//! use damascus_backend_texture::{export, RasterConfig, Session};
//! use damascus_spec::{PatternKind, TransformParams};
//! use std::path::Path;
//!
//! let mut session = Session::new(RasterConfig::default()).unwrap();
//! session.select(PatternKind::Chevron).unwrap();
//! session.set_params(TransformParams::default().with_twist(2.0).with_grind(25.0));
//!
//! let raster = session.render();
//! export(&raster, Path::new("chevron.png")).unwrap();
//! ```
//!
//! # Determinism
//!
//! - Every generator except unseeded random banding is deterministic
//! - Random banding uses PCG32 when given a seed
//! - PNG encoding uses fixed compression settings

pub mod color;
pub mod compositor;
pub mod config;
pub mod export;
pub mod lookup;
pub mod pattern;
pub mod pdf;
pub mod png;
pub mod raster;
pub mod rng;
pub mod transform;

// Re-export main types for convenience
pub use color::Rgb;
pub use compositor::{render, BaseOrigin, ExportJob, Session};
pub use config::RasterConfig;
pub use export::{export, ExportError, ExportFormat};
pub use lookup::EffectiveStack;
pub use pattern::{generate_pattern, GenerateError, Pattern2D, PatternContext};
pub use pdf::{PageSize, PrintConfig, PrintLayout};
pub use self::png::{read_png, PngConfig, PngError};
pub use raster::Raster;
pub use rng::DeterministicRng;
pub use transform::{apply_transforms, grind, mosaic, twist};
