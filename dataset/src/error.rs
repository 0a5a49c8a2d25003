// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use thiserror::Error;

use crate::Axis;

/// A cursor was read or written outside of the store.
///
/// The store is the only place where positions are validated. Positioning a cursor is always
/// accepted, the error surfaces on the first access at the bad position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("position {position:?} is outside of the store with shape {shape:?}")]
pub struct IndexError {
    /// The position of the cursor at the time of the access.
    pub position: Vec<usize>,
    /// The shape of the store.
    pub shape: Vec<usize>,
}

/// The axes requested for a new dataset are not usable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AxisError {
    #[error("axis {0} was given more than once")]
    Duplicate(Axis),
}
