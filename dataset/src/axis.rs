// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use core::fmt;

/// The quantity measured along one dimension of a [`Dataset`](crate::Dataset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Axis {
    /// Horizontal position within a plane.
    X,
    /// Vertical position within a plane.
    Y,
    /// Channel, or color component for merged color data.
    Channel,
    /// Focal plane within a stack.
    Z,
    /// Time point within a series.
    Time,
}

impl Axis {
    /// All axes in their conventional order.
    pub const ALL: [Axis; 5] = [Axis::X, Axis::Y, Axis::Channel, Axis::Z, Axis::Time];

    /// The conventional label of this axis.
    pub const fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Channel => "Channel",
            Axis::Z => "Z",
            Axis::Time => "Time",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
