//! Damascus Pattern Model
//!
//! This crate holds the authoring side of the Damascus pattern simulator:
//! layer stacks, the scalar two-band fallback, shaping controls, and the
//! hand-off types consumed by 3D billet viewers. It knows nothing about
//! pixels; rasterization lives in `damascus-backend-texture`.
//!
//! # Example
//!
//! ```
//! use damascus_spec::{LayerColor, LayerStack, TransformParams};
//!
//! let mut stack = LayerStack::new();
//! stack.push(LayerColor::White, 1.5).unwrap();
//! stack.push(LayerColor::Black, 0.8).unwrap();
//!
//! let json = stack.to_json().unwrap();
//! assert_eq!(LayerStack::from_json(&json).unwrap(), stack);
//!
//! let params = TransformParams::default().with_twist(3.0).with_mosaic(2);
//! assert!(params.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`color`]: the two steels and their canonical RGB values
//! - [`stack`]: layers, stack editing, and JSON persistence
//! - [`params`]: pattern kinds, scalar band thickness, transform controls
//! - [`units`]: display-only millimeter/inch conversion
//! - [`billet`]: 3D viewer hand-off types
//! - [`error`]: error types and the `BackendError` reporting trait
//! - [`validation`]: shared validation helpers

pub mod billet;
pub mod color;
pub mod error;
pub mod params;
pub mod stack;
pub mod units;
pub mod validation;

pub use billet::{Billet, BilletBounds, BilletLayer};
pub use color::LayerColor;
pub use error::{BackendError, ParamsError, StackError};
pub use params::{BandThickness, PatternKind, TransformParams, DEFAULT_BAND_THICKNESS_MM};
pub use stack::{Layer, LayerStack};
pub use units::{inches_to_mm, mm_to_inches, UnitSystem, MM_PER_INCH};
