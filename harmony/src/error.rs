// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use image_dataset::{Axis, IndexError};
use thiserror::Error;

/// Failures of a synchronization pass or of the legacy image model.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum HarmonyError {
    /// The view and the legacy image disagree on the number of channels.
    #[error("channel mismatch: {view} vs. {legacy}")]
    ChannelMismatch { view: usize, legacy: usize },
    /// Dataset and legacy image have a different extent along an axis.
    #[error("dimension mismatch along {axis}: dataset has {dataset}, image has {image}")]
    DimensionMismatch {
        axis: Axis,
        dataset: usize,
        image: usize,
    },
    /// A sample can not be represented in 8 bits and wrapping was not permitted.
    #[error("sample {value} at ({x}, {y}) of plane {plane} is outside of 0..=255")]
    ValueOutOfRange {
        value: f64,
        x: usize,
        y: usize,
        plane: usize,
    },
    /// A plane index outside of `1..=planes`.
    #[error("plane {index} requested from a stack of {planes}")]
    NoSuchPlane { index: usize, planes: usize },
    /// A pixel outside of the plane.
    #[error("pixel ({x}, {y}) is outside of a {width}x{height} plane")]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// The operation needs per channel lookup tables.
    #[error("the image has a single lookup table")]
    NotComposite,
    /// The planes given for a legacy image do not match its geometry.
    #[error("expected {expected} planes of {width}x{height}, got {actual}")]
    StackMismatch {
        expected: usize,
        actual: usize,
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    Index(#[from] IndexError),
}
