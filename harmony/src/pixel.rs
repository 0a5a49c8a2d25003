// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Color pixels between merged datasets and packed legacy planes.
//!
//! A merged dataset stores every legacy channel as three consecutive channels on its channel
//! axis, holding red, green and blue in that order. The legacy side packs the same three values
//! into one `0xAARRGGBB` pixel.
use image_dataset::{Axis, Dataset};

use crate::options::{HarmonizerOptions, OverflowPolicy};
use crate::{DataHarmonizer, HarmonyError, LegacyImage};

const OPAQUE: u32 = 0xff00_0000;

/// Synchronizes the samples of a merged color dataset and a direct color legacy image.
///
/// Both directions expect the two images to agree in geometry, see [`check_geometry`]. No
/// metadata is touched in either direction.
#[derive(Clone, Debug, Default)]
pub struct ColorPixelHarmonizer {
    options: HarmonizerOptions,
}

/// The dimensions of the dataset the harmonizer positions its cursor along.
#[derive(Clone, Copy, Debug)]
struct AxisDims {
    x: Option<usize>,
    y: Option<usize>,
    c: Option<usize>,
    z: Option<usize>,
    t: Option<usize>,
}

impl AxisDims {
    fn of(dataset: &Dataset) -> Self {
        AxisDims {
            x: dataset.axis_index(Axis::X),
            y: dataset.axis_index(Axis::Y),
            c: dataset.axis_index(Axis::Channel),
            z: dataset.axis_index(Axis::Z),
            t: dataset.axis_index(Axis::Time),
        }
    }
}

/// Pack three 8-bit components into an opaque legacy pixel.
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a legacy pixel into its red, green and blue components, ignoring alpha.
pub const fn unpack_rgb(value: u32) -> [u8; 3] {
    [
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ]
}

/// Narrow a sample to 8 bits the way legacy images do.
///
/// The value is truncated toward zero and only its low eight bits are kept, so values outside of
/// `0..=255` wrap around: `300.0` becomes `44` and `-1.0` becomes `255`. `NaN` becomes `0`.
pub fn narrow_sample(value: f64) -> u8 {
    // `as` truncates toward zero and saturates at the bounds of the integer.
    (value as i32 & 0xff) as u8
}

/// Check that a dataset can hold the pixels of a legacy color image.
///
/// The dataset needs the image's width, height, slice and frame count, and three channels for
/// every legacy channel. Absent axes count as a length of one.
pub fn check_geometry(dataset: &Dataset, image: &LegacyImage) -> Result<(), HarmonyError> {
    let expected = [
        (Axis::X, image.width()),
        (Axis::Y, image.height()),
        (Axis::Channel, 3 * image.n_channels()),
        (Axis::Z, image.n_slices()),
        (Axis::Time, image.n_frames()),
    ];

    for (axis, len) in expected {
        let have = dataset.dimension(axis);
        if have != len {
            return Err(HarmonyError::DimensionMismatch {
                axis,
                dataset: have,
                image: len,
            });
        }
    }

    Ok(())
}

impl ColorPixelHarmonizer {
    pub fn new() -> Self {
        ColorPixelHarmonizer::default()
    }

    pub fn with_options(options: HarmonizerOptions) -> Self {
        ColorPixelHarmonizer { options }
    }

    pub fn options(&self) -> &HarmonizerOptions {
        &self.options
    }

    fn narrow(&self, value: f64, x: usize, y: usize, plane: usize) -> Result<u8, HarmonyError> {
        match self.options.overflow {
            OverflowPolicy::Wrap => Ok(narrow_sample(value)),
            OverflowPolicy::Reject => {
                let truncated = value.trunc();
                if (0.0..=255.0).contains(&truncated) {
                    Ok(truncated as u8)
                } else {
                    Err(HarmonyError::ValueOutOfRange { value, x, y, plane })
                }
            }
        }
    }
}

impl DataHarmonizer for ColorPixelHarmonizer {
    /// Write the color components of every legacy pixel into the dataset.
    ///
    /// Signals [`Dataset::update`] once all planes are written.
    fn update_dataset(
        &self,
        dataset: &mut Dataset,
        image: &LegacyImage,
    ) -> Result<(), HarmonyError> {
        let dims = AxisDims::of(dataset);
        let (width, height) = (image.width(), image.height());
        let sequencer = image.sequencer();
        log::debug!(
            "decoding {} color planes of {}x{} into dataset",
            sequencer.len(),
            width,
            height
        );

        {
            let mut access = dataset.random_access_mut();
            for plane in sequencer.planes() {
                log::trace!(
                    "decoding plane {} (t={}, z={}, c={})",
                    plane.index,
                    plane.t,
                    plane.z,
                    plane.c
                );
                if let Some(dim) = dims.t {
                    access.set_position(plane.t, dim);
                }
                if let Some(dim) = dims.z {
                    access.set_position(plane.z, dim);
                }

                let processor = image.stack().processor(plane.index)?;
                for y in 0..height {
                    if let Some(dim) = dims.y {
                        access.set_position(y, dim);
                    }

                    for x in 0..width {
                        if let Some(dim) = dims.x {
                            access.set_position(x, dim);
                        }

                        let rgb = unpack_rgb(processor.get(x, y)?);
                        for (component, value) in rgb.into_iter().enumerate() {
                            if let Some(dim) = dims.c {
                                access.set_position(3 * plane.c + component, dim);
                            }
                            access.set_real(f64::from(value))?;
                        }
                    }
                }
            }
        }

        dataset.update();
        Ok(())
    }

    /// Pack the color components of the dataset into every legacy pixel.
    ///
    /// Pixels are always fully opaque.
    fn update_legacy_image(
        &self,
        dataset: &Dataset,
        image: &mut LegacyImage,
    ) -> Result<(), HarmonyError> {
        let dims = AxisDims::of(dataset);
        let (width, height) = (image.width(), image.height());
        let sequencer = image.sequencer();
        log::debug!(
            "encoding dataset into {} color planes of {}x{} ({:?} overflow)",
            sequencer.len(),
            width,
            height,
            self.options.overflow
        );

        let mut access = dataset.random_access();
        for plane in sequencer.planes() {
            log::trace!(
                "encoding plane {} (t={}, z={}, c={})",
                plane.index,
                plane.t,
                plane.z,
                plane.c
            );
            if let Some(dim) = dims.t {
                access.set_position(plane.t, dim);
            }
            if let Some(dim) = dims.z {
                access.set_position(plane.z, dim);
            }

            let processor = image.stack_mut().processor_mut(plane.index)?;
            for y in 0..height {
                if let Some(dim) = dims.y {
                    access.set_position(y, dim);
                }

                for x in 0..width {
                    if let Some(dim) = dims.x {
                        access.set_position(x, dim);
                    }

                    let mut rgb = [0u8; 3];
                    for (component, value) in rgb.iter_mut().enumerate() {
                        if let Some(dim) = dims.c {
                            access.set_position(3 * plane.c + component, dim);
                        }
                        *value = self.narrow(access.get()?, x, y, plane.index)?;
                    }

                    let [r, g, b] = rgb;
                    processor.set(x, y, pack_rgb(r, g, b))?;
                }
            }
        }

        Ok(())
    }
}
