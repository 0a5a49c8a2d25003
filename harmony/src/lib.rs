// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Synchronization between named-axis datasets and legacy plane stack images.
//!
//! Two representations of the same multi-channel image often live side by side: a [`Dataset`]
//! addressed by named axes, and a [`LegacyImage`] that stores a flat, sequentially numbered stack
//! of 2D planes with per channel lookup tables. This crate translates the state of one into the
//! other, in place.
//!
//! - [`ColorPixelHarmonizer`] moves color pixels between the three channels per color that a
//!   merged dataset uses and the packed `0xAARRGGBB` pixels of a legacy color image.
//! - [`ColorTableHarmonizer`] moves color tables, display ranges and the display mode between the
//!   active view of an [`ImageDisplay`] and the lookup tables of a legacy image.
//!
//! Neither harmonizer checks that the two sides describe the same geometry. Call
//! [`check_geometry`] first when that is not already known.
//!
//! # Usage
//!
//! ```
//! use image_dataset::{Axis, Dataset};
//! use image_harmony::{ColorPixelHarmonizer, DataHarmonizer, LegacyImage, PixelType};
//!
//! let mut image = LegacyImage::new(PixelType::ColorRgb, 8, 8, 1, 1, 1);
//! image.stack_mut().processor_mut(1)?.set(3, 4, 0xffff0080)?;
//!
//! let mut dataset = Dataset::new(&[(Axis::X, 8), (Axis::Y, 8), (Axis::Channel, 3)])?;
//! image_harmony::check_geometry(&dataset, &image)?;
//!
//! let harmonizer = ColorPixelHarmonizer::new();
//! harmonizer.update_dataset(&mut dataset, &image)?;
//! assert_eq!(dataset.as_array()[&[3usize, 4, 0][..]], 255.0);
//! assert_eq!(dataset.as_array()[&[3usize, 4, 2][..]], 128.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(unsafe_code)]

pub mod display;
mod error;
pub mod legacy;
mod options;
mod pixel;
mod sequence;
mod table;

#[cfg(test)]
mod tests;

use image_dataset::Dataset;

pub use self::display::{DatasetView, ImageDisplay};
pub use self::error::HarmonyError;
pub use self::legacy::{DisplayMode, LegacyChannels, LegacyImage, PixelType};
pub use self::options::{HarmonizerOptions, OverflowPolicy};
pub use self::pixel::{check_geometry, narrow_sample, pack_rgb, unpack_rgb, ColorPixelHarmonizer};
pub use self::sequence::{PlanePosition, PlaneSequencer, Planes};
pub use self::table::{color_tables_from_legacy, ColorTableHarmonizer};

/// Synchronizes pixel data between a dataset and a legacy image.
pub trait DataHarmonizer {
    /// Overwrite the samples of the dataset with the pixels of the legacy image.
    fn update_dataset(&self, dataset: &mut Dataset, image: &LegacyImage)
        -> Result<(), HarmonyError>;

    /// Overwrite the pixels of the legacy image with the samples of the dataset.
    fn update_legacy_image(
        &self,
        dataset: &Dataset,
        image: &mut LegacyImage,
    ) -> Result<(), HarmonyError>;
}

/// Synchronizes display state between a display and a legacy image.
pub trait DisplayHarmonizer {
    /// Overwrite the display state of the active view with that of the legacy image.
    fn update_display(&self, display: &mut ImageDisplay, image: &LegacyImage)
        -> Result<(), HarmonyError>;

    /// Overwrite the display state of the legacy image with that of the display.
    ///
    /// The `dataset` is the data shown by the display's active view.
    fn update_legacy_image(
        &self,
        display: &ImageDisplay,
        dataset: &Dataset,
        image: &mut LegacyImage,
    ) -> Result<(), HarmonyError>;
}
