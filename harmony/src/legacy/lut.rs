// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
/// The sample values mapped to the first and last entry of a lookup table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

/// An 8-bit lookup table of a legacy image, with the display range it applies to.
#[derive(Clone, Debug, PartialEq)]
pub struct Lut {
    components: [[u8; 256]; 3],
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    pub const fn new(min: f64, max: f64) -> Self {
        DisplayRange { min, max }
    }

    /// The smallest range containing all given ranges, `None` if there are none.
    pub fn span(ranges: impl IntoIterator<Item = DisplayRange>) -> Option<Self> {
        ranges.into_iter().reduce(|acc, range| DisplayRange {
            min: acc.min.min(range.min),
            max: acc.max.max(range.max),
        })
    }
}

impl Default for DisplayRange {
    fn default() -> Self {
        DisplayRange::new(0.0, 255.0)
    }
}

impl Lut {
    /// A table covering the full 8-bit range.
    pub fn new(reds: [u8; 256], greens: [u8; 256], blues: [u8; 256]) -> Self {
        let range = DisplayRange::default();
        Lut {
            components: [reds, greens, blues],
            min: range.min,
            max: range.max,
        }
    }

    pub fn with_range(self, range: DisplayRange) -> Self {
        Lut {
            min: range.min,
            max: range.max,
            ..self
        }
    }

    pub fn reds(&self) -> &[u8; 256] {
        &self.components[0]
    }

    pub fn greens(&self) -> &[u8; 256] {
        &self.components[1]
    }

    pub fn blues(&self) -> &[u8; 256] {
        &self.components[2]
    }

    pub fn range(&self) -> DisplayRange {
        DisplayRange::new(self.min, self.max)
    }

    pub fn set_range(&mut self, range: DisplayRange) {
        self.min = range.min;
        self.max = range.max;
    }

    /// All reds, then all greens, then all blues.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.components)
    }

    /// Take over the colors of another table but keep this table's range.
    pub(crate) fn recolor(&mut self, other: Lut) {
        self.components = other.components;
    }
}
