//! Shaping transforms.
//!
//! Three pure `&Raster -> Raster` operators that emulate working the billet.
//! They always run in the order mosaic, twist, grind: grinding reveals depth
//! after the bar has been stacked and twisted.

mod grind;
mod mosaic;
mod twist;

pub use grind::{grind, grind_shift, GRIND_REACH};
pub use mosaic::mosaic;
pub use twist::twist;

use damascus_spec::TransformParams;

use crate::raster::Raster;

/// Apply mosaic, then twist, then grind.
pub fn apply_transforms(raster: &Raster, params: &TransformParams) -> Raster {
    tracing::debug!(
        mosaic = params.mosaic_size,
        twist = params.twist_amount,
        grind = params.grind_depth,
        "applying transforms"
    );
    let mosaicked = mosaic(raster, params.mosaic_size);
    let twisted = twist(&mosaicked, params.twist_amount);
    grind(&twisted, params.grind_depth)
}
