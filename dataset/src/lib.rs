// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! # Dataset
//!
//! A multidimensional image whose dimensions are addressed by name.
//!
//! Image data produced by microscopes and similar instruments rarely stops at two dimensions. A
//! single acquisition may contain several channels, a stack of focal planes and a time series,
//! each stored along its own dimension of one real valued array. Which dimension holds which
//! quantity differs from image to image, so all access goes through an [`Axis`] lookup first.
//! Axes that an image does not have are reported as `None` and behave as if they had a length of
//! one.
//!
//! ## Usage
//!
//! ```
//! use image_dataset::{Axis, Dataset};
//!
//! let mut dataset = Dataset::new(&[(Axis::X, 4), (Axis::Y, 3), (Axis::Channel, 3)])?;
//! let x = dataset.axis_index(Axis::X).unwrap();
//! let c = dataset.axis_index(Axis::Channel).unwrap();
//! assert_eq!(dataset.axis_index(Axis::Time), None);
//!
//! let mut access = dataset.random_access_mut();
//! access.set_position(2, x);
//! access.set_position(1, c);
//! access.set_real(128.0)?;
//! assert_eq!(access.get()?, 128.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(unsafe_code)]

mod access;
mod axis;
mod color;
mod dataset;
mod error;

pub use self::access::{RandomAccess, RandomAccessMut};
pub use self::axis::Axis;
pub use self::color::ColorTable;
pub use self::dataset::Dataset;
pub use self::error::{AxisError, IndexError};

/// Predefined color tables.
pub mod tables {
    pub use crate::color::{default_color_table, BLUE, CYAN, GRAYS, GREEN, MAGENTA, RED, YELLOW};
}
