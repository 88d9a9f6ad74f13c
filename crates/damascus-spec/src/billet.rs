//! Hand-off types for 3D billet viewers.
//!
//! A viewer consumes a [`Billet`]: layers in stacking order, each carrying its
//! thickness, color, and a renderable mesh, plus the billet footprint. Mesh
//! construction is the caller's business; this module only lays the layers
//! out along the stacking axis and hands each one to a mesh builder.

use crate::color::LayerColor;
use crate::stack::{Layer, LayerStack};

/// One layer as seen by a viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct BilletLayer<M> {
    /// Thickness in millimeters.
    pub thickness_mm: f64,
    /// Steel color.
    pub color: LayerColor,
    /// Height of this layer's bottom face above the billet base, in millimeters.
    pub z_offset_mm: f64,
    /// Renderable mesh produced by the caller.
    pub mesh: M,
}

/// Axis-aligned extent of a billet in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilletBounds {
    pub width_mm: f64,
    pub length_mm: f64,
    pub height_mm: f64,
}

/// A layered billet ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Billet<M> {
    /// Layers from bottom to top.
    pub layers: Vec<BilletLayer<M>>,
    /// Billet width in millimeters.
    pub width_mm: f64,
    /// Billet length in millimeters.
    pub length_mm: f64,
}

impl<M> Billet<M> {
    /// Lay out `stack` bottom to top and build one mesh per layer.
    ///
    /// `build_mesh` receives each layer and the z offset of its bottom face.
    pub fn from_stack<F>(stack: &LayerStack, width_mm: f64, length_mm: f64, mut build_mesh: F) -> Self
    where
        F: FnMut(&Layer, f64) -> M,
    {
        let mut z = 0.0;
        let layers = stack
            .iter()
            .map(|layer| {
                let z_offset_mm = z;
                z += layer.thickness_mm();
                BilletLayer {
                    thickness_mm: layer.thickness_mm(),
                    color: layer.color(),
                    z_offset_mm,
                    mesh: build_mesh(layer, z_offset_mm),
                }
            })
            .collect();

        Self {
            layers,
            width_mm,
            length_mm,
        }
    }

    /// Total stacked height in millimeters.
    pub fn height_mm(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness_mm).sum()
    }

    /// Footprint and height.
    pub fn bounds(&self) -> BilletBounds {
        BilletBounds {
            width_mm: self.width_mm,
            length_mm: self.length_mm,
            height_mm: self.height_mm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stack_offsets_and_order() {
        let mut stack = LayerStack::new();
        stack.push(LayerColor::White, 1.5).unwrap();
        stack.push(LayerColor::Black, 0.5).unwrap();
        stack.push(LayerColor::White, 2.0).unwrap();

        let mut calls = Vec::new();
        let billet = Billet::from_stack(&stack, 40.0, 200.0, |layer, z| {
            calls.push(z);
            format!("{}@{}", layer.color(), z)
        });

        assert_eq!(calls, vec![0.0, 1.5, 2.0]);
        assert_eq!(billet.layers.len(), 3);
        assert_eq!(billet.layers[1].mesh, "black@1.5");
        assert_eq!(billet.layers[2].z_offset_mm, 2.0);
        assert_eq!(
            billet.bounds(),
            BilletBounds {
                width_mm: 40.0,
                length_mm: 200.0,
                height_mm: 4.0,
            }
        );
    }

    #[test]
    fn test_empty_stack_has_zero_height() {
        let billet: Billet<()> = Billet::from_stack(&LayerStack::new(), 10.0, 10.0, |_, _| ());
        assert!(billet.layers.is_empty());
        assert_eq!(billet.height_mm(), 0.0);
    }
}
