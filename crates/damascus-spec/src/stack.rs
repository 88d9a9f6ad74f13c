//! Layer stacks: the ordered, repeating sequence of welded steels.
//!
//! A stack lists layers from bottom to top in insertion order. Rasterization
//! repeats the stack periodically, so a short stack describes an arbitrarily
//! deep billet.
//!
//! # Persistence
//!
//! A stack is stored as a JSON list of `{"color": "white"|"black",
//! "thickness": <mm>}` records. Unknown keys are rejected. Loading validates
//! every record before building anything, so a bad file produces a single
//! [`StackError::Malformed`] and no partial stack.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::LayerColor;
use crate::error::StackError;
use crate::units::UnitSystem;
use crate::validation::validate_thickness;

/// One welded layer.
///
/// Layers can only be built through validating constructors, so the
/// thickness is always finite and positive:
///
/// ```compile_fail
/// use damascus_spec::{Layer, LayerColor};
///
/// let layer = Layer { color: LayerColor::White, thickness_mm: -1.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layer {
    color: LayerColor,
    #[serde(rename = "thickness")]
    thickness_mm: f64,
}

impl Layer {
    /// Create a layer, rejecting non-positive or non-finite thickness.
    pub fn new(color: LayerColor, thickness_mm: f64) -> Result<Self, StackError> {
        Ok(Self {
            color,
            thickness_mm: validate_thickness(thickness_mm)?,
        })
    }

    /// Shorthand for a white layer.
    pub fn white(thickness_mm: f64) -> Result<Self, StackError> {
        Self::new(LayerColor::White, thickness_mm)
    }

    /// Shorthand for a black layer.
    pub fn black(thickness_mm: f64) -> Result<Self, StackError> {
        Self::new(LayerColor::Black, thickness_mm)
    }

    /// Which steel.
    pub fn color(&self) -> LayerColor {
        self.color
    }

    /// Physical thickness in millimeters. Always > 0.
    pub fn thickness_mm(&self) -> f64 {
        self.thickness_mm
    }
}

/// On-disk form of a layer, before thickness validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayerRecord {
    color: LayerColor,
    thickness: f64,
}

/// Ordered, editable list of layers.
///
/// An empty stack is legal; generators treat it as "no explicit stack" and
/// fall back to the scalar two-band stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from a list of layers, checking every thickness.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, StackError> {
        for layer in &layers {
            validate_thickness(layer.thickness_mm)?;
        }
        Ok(Self { layers })
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if the stack has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers from bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterate layers from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    /// Get a layer by index.
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Sum of all layer thicknesses in millimeters.
    pub fn total_thickness_mm(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness_mm).sum()
    }

    /// Append a layer on top of the stack.
    pub fn push(&mut self, color: LayerColor, thickness_mm: f64) -> Result<(), StackError> {
        let layer = Layer::new(color, thickness_mm)?;
        self.layers.push(layer);
        Ok(())
    }

    /// Append `count` alternating layers, starting with white.
    pub fn add_alternating(&mut self, count: usize, thickness_mm: f64) -> Result<(), StackError> {
        let thickness_mm = validate_thickness(thickness_mm)?;
        let mut color = LayerColor::White;
        for _ in 0..count {
            self.layers.push(Layer {
                color,
                thickness_mm,
            });
            color = color.opposite();
        }
        Ok(())
    }

    /// Replace the layer at `index`.
    pub fn replace(
        &mut self,
        index: usize,
        color: LayerColor,
        thickness_mm: f64,
    ) -> Result<(), StackError> {
        self.check_index(index)?;
        let layer = Layer::new(color, thickness_mm)?;
        self.layers[index] = layer;
        Ok(())
    }

    /// Remove and return the layer at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Layer, StackError> {
        self.check_index(index)?;
        Ok(self.layers.remove(index))
    }

    /// Swap the layer at `index` with the one before it.
    ///
    /// Returns the layer's new index. Moving the first layer is a no-op.
    pub fn move_up(&mut self, index: usize) -> Result<usize, StackError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(0);
        }
        self.layers.swap(index, index - 1);
        Ok(index - 1)
    }

    /// Swap the layer at `index` with the one after it.
    ///
    /// Returns the layer's new index. Moving the last layer is a no-op.
    pub fn move_down(&mut self, index: usize) -> Result<usize, StackError> {
        self.check_index(index)?;
        if index + 1 == self.layers.len() {
            return Ok(index);
        }
        self.layers.swap(index, index + 1);
        Ok(index + 1)
    }

    /// Remove every layer.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// One line per layer, numbered from 1, e.g. `"  1. WHITE - 1.50 mm"`.
    pub fn listing(&self, units: UnitSystem) -> Vec<String> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                format!(
                    "{:3}. {:<5} - {}",
                    i + 1,
                    layer.color.as_str().to_uppercase(),
                    units.format_thickness(layer.thickness_mm)
                )
            })
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), StackError> {
        if index < self.layers.len() {
            Ok(())
        } else {
            Err(StackError::IndexOutOfRange {
                index,
                len: self.layers.len(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StackError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a persisted stack.
    pub fn from_json(json: &str) -> Result<Self, StackError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| StackError::Malformed(format!("invalid JSON: {}", e)))?;
        Self::from_value(&value)
    }

    /// Validate a JSON value and build a stack from it.
    pub fn from_value(value: &Value) -> Result<Self, StackError> {
        let records = value
            .as_array()
            .ok_or_else(|| StackError::Malformed("top-level value must be a list".into()))?;

        let mut layers = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let malformed = |what: String| StackError::Malformed(format!("layer {}: {}", i, what));
            let record = LayerRecord::deserialize(record).map_err(|e| malformed(e.to_string()))?;
            let layer = Layer::new(record.color, record.thickness)
                .map_err(|_| malformed("thickness must be a positive number".into()))?;
            layers.push(layer);
        }
        Ok(Self { layers })
    }

    /// Replace this stack with the one encoded in `json`.
    ///
    /// On error the stack is left exactly as it was.
    pub fn replace_from_json(&mut self, json: &str) -> Result<(), StackError> {
        let loaded = Self::from_json(json)?;
        *self = loaded;
        Ok(())
    }

    /// Write the stack to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), StackError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), layers = self.len(), "saved layer stack");
        Ok(())
    }

    /// Read and validate a stack from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StackError> {
        let json = std::fs::read_to_string(path)?;
        let stack = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), layers = stack.len(), "loaded layer stack");
        Ok(stack)
    }
}

impl<'de> Deserialize<'de> for LayerStack {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a LayerStack {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
