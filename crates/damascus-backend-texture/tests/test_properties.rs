//! Property-based tests for depth lookup and the shaping transforms.
//!
//! ```bash
//! cargo test -p damascus-backend-texture --test test_properties
//! ```

use proptest::prelude::*;

use damascus_backend_texture::lookup::EffectiveStack;
use damascus_backend_texture::{grind, mosaic, twist, Raster, RasterConfig};
use damascus_spec::{BandThickness, Layer, LayerColor};

// ============================================================================
// Strategies
// ============================================================================

fn arbitrary_raster() -> impl Strategy<Value = Raster> {
    (1u32..12, 1u32..48)
        .prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                prop::collection::vec(any::<u8>(), (w * h * 3) as usize),
            )
        })
        .prop_map(|(w, h, bytes)| Raster::from_rgb8(w, h, &bytes).unwrap())
}

fn arbitrary_layers() -> impl Strategy<Value = Vec<Layer>> {
    prop::collection::vec((any::<bool>(), 0.05f64..6.0), 1..8).prop_map(|specs| {
        specs
            .into_iter()
            .map(|(white, mm)| {
                let color = if white { LayerColor::White } else { LayerColor::Black };
                Layer::new(color, mm).unwrap()
            })
            .collect()
    })
}

fn sorted_rows(raster: &Raster) -> Vec<Vec<[u8; 3]>> {
    let mut rows: Vec<Vec<[u8; 3]>> = raster
        .rows()
        .map(|row| row.iter().map(|p| p.to_array()).collect())
        .collect();
    rows.sort();
    rows
}

// ============================================================================
// Depth lookup
// ============================================================================

proptest! {
    /// The scalar two-band stack repeats every `white + black` rows, for
    /// negative depths too.
    #[test]
    fn two_band_lookup_is_periodic(
        white in 0.05f64..8.0,
        black in 0.05f64..8.0,
        y in -100_000i64..100_000,
    ) {
        let bands = BandThickness::new(white, black).unwrap();
        let lookup = EffectiveStack::two_band(&bands, &RasterConfig::default());
        let period = lookup.period_px() as i64;
        prop_assert!(period >= 2);
        prop_assert_eq!(lookup.color_at(y), lookup.color_at(y + period));
        prop_assert_eq!(lookup.color_at(y), lookup.color_at(y - period));
    }

    /// Explicit stacks repeat every total pixel thickness.
    #[test]
    fn explicit_lookup_is_periodic(layers in arbitrary_layers(), y in -100_000i64..100_000) {
        let lookup = EffectiveStack::from_layers(&layers, &RasterConfig::default());
        let period = lookup.period_px() as i64;
        prop_assert!(period >= layers.len() as i64);
        prop_assert_eq!(lookup.color_at(y), lookup.color_at(y + period));
        prop_assert_eq!(lookup.color_at(y), lookup.color_at(y + 3 * period));
    }

    /// The first layer always owns depth zero.
    #[test]
    fn explicit_lookup_starts_with_first_layer(layers in arbitrary_layers()) {
        let lookup = EffectiveStack::from_layers(&layers, &RasterConfig::default());
        prop_assert_eq!(lookup.color_at(0), layers[0].color());
    }
}

// ============================================================================
// Transforms
// ============================================================================

proptest! {
    /// Grind only reorders rows.
    #[test]
    fn grind_is_a_row_permutation(raster in arbitrary_raster(), depth in 0.0f64..=100.0) {
        let ground = grind(&raster, depth);
        prop_assert_eq!((ground.width, ground.height), (raster.width, raster.height));
        prop_assert_eq!(sorted_rows(&ground), sorted_rows(&raster));
    }

    #[test]
    fn identity_parameters_leave_raster_unchanged(raster in arbitrary_raster()) {
        prop_assert_eq!(&mosaic(&raster, 1), &raster);
        prop_assert_eq!(&twist(&raster, 0.0), &raster);
        prop_assert_eq!(&grind(&raster, 0.0), &raster);
    }

    /// Transforms never change raster dimensions.
    #[test]
    fn transforms_preserve_dimensions(
        raster in arbitrary_raster(),
        n in 1u32..=3,
        amount in 0.0f64..=10.0,
    ) {
        let dims = (raster.width, raster.height);
        let m = mosaic(&raster, n);
        prop_assert_eq!((m.width, m.height), dims);
        let t = twist(&raster, amount);
        prop_assert_eq!((t.width, t.height), dims);
    }
}
