// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Color tables and display ranges between a display and a legacy image.
//!
//! Color tables are a property of the view, not of the dataset. The legacy image keeps them in
//! its lookup tables together with the display range, and with an image that has per channel
//! tables additionally decides how the channels are combined on screen.
use image_dataset::tables::{default_color_table, GRAYS};
use image_dataset::{ColorTable, Dataset};

use crate::display::{ImageDisplay, LutConverter};
use crate::legacy::{make_8bit_color_table, make_8bit_lut, DisplayMode, DisplayRange, Lut};
use crate::{DisplayHarmonizer, HarmonyError, LegacyChannels, LegacyImage, PixelType};

/// Synchronizes the color tables and display ranges of a display with a legacy image.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorTableHarmonizer;

impl ColorTableHarmonizer {
    pub fn new() -> Self {
        ColorTableHarmonizer
    }
}

impl DisplayHarmonizer for ColorTableHarmonizer {
    /// Set the color tables and converter ranges of the active view from a legacy image.
    ///
    /// Does nothing when the display has no active view.
    fn update_display(
        &self,
        display: &mut ImageDisplay,
        image: &LegacyImage,
    ) -> Result<(), HarmonyError> {
        let tables = color_tables_from_legacy(image);
        assign_color_tables(display, tables)?;
        assign_channel_min_max(display, image)
    }

    /// Set the lookup tables and display ranges of a legacy image from a display.
    ///
    /// An image with per channel tables takes the tables of the active view, or the default
    /// progression without one. An image with a single table takes the first color table of
    /// `dataset`, the data shown by the display.
    fn update_legacy_image(
        &self,
        display: &ImageDisplay,
        dataset: &Dataset,
        image: &mut LegacyImage,
    ) -> Result<(), HarmonyError> {
        if image.is_composite() {
            match display.active_view() {
                None => set_composite_luts_to_default(image)?,
                Some(view) => set_composite_luts(image, view.color_tables())?,
            }
        } else {
            let table = dataset.color_table(0).unwrap_or(&GRAYS);
            image.set_color_model(make_8bit_lut(table))?;
        }

        assign_image_min_max(display, image)
    }
}

/// The color tables a legacy image is displayed with.
///
/// A direct color image has no tables of its own, it is shown with a default table for each of
/// the three components of every channel.
pub fn color_tables_from_legacy(image: &LegacyImage) -> Vec<ColorTable> {
    match image.channels() {
        LegacyChannels::Composite { luts, .. } => luts.iter().map(make_8bit_color_table).collect(),
        LegacyChannels::Single(_) if image.pixel_type() == PixelType::ColorRgb => {
            (0..3 * image.n_channels()).map(default_color_table).collect()
        }
        LegacyChannels::Single(lut) => vec![make_8bit_color_table(lut)],
    }
}

/// Assign color tables to the slots of the active view.
///
/// A single table goes to every slot, otherwise tables are assigned by channel index.
fn assign_color_tables(
    display: &mut ImageDisplay,
    tables: Vec<ColorTable>,
) -> Result<(), HarmonyError> {
    let Some(view) = display.active_view_mut() else {
        log::debug!("no active view, color tables left unchanged");
        return Ok(());
    };

    let slots = view.color_tables().len();
    if tables.len() == 1 {
        for idx in 0..slots {
            view.set_color_table(tables[0].clone(), idx);
        }
    } else {
        if tables.len() > slots {
            return Err(HarmonyError::ChannelMismatch {
                view: slots,
                legacy: tables.len(),
            });
        }

        for (idx, table) in tables.into_iter().enumerate() {
            view.set_color_table(table, idx);
        }
    }

    // The cached plane was rendered with the old tables.
    view.projector_mut().map();
    display.update();
    Ok(())
}

/// Copy the display ranges of a legacy image into the converters of the active view.
fn assign_channel_min_max(
    display: &mut ImageDisplay,
    image: &LegacyImage,
) -> Result<(), HarmonyError> {
    let Some(view) = display.active_view_mut() else {
        return Ok(());
    };

    let count = view.converters().len();
    let ranges: Vec<DisplayRange> = match image.channels() {
        LegacyChannels::Composite { luts, .. } => {
            if luts.len() != count {
                return Err(HarmonyError::ChannelMismatch {
                    view: count,
                    legacy: luts.len(),
                });
            }

            luts.iter().map(Lut::range).collect()
        }
        LegacyChannels::Single(lut) => vec![lut.range(); count],
    };

    for (converter, range) in view.converters_mut().iter_mut().zip(ranges) {
        converter.set_min(range.min);
        converter.set_max(range.max);
    }

    Ok(())
}

/// Give every channel its table from the default progression and show them overlaid.
fn set_composite_luts_to_default(image: &mut LegacyImage) -> Result<(), HarmonyError> {
    log::debug!("assigning default lookup tables to {} channels", image.n_channels());
    for channel in 0..image.n_channels() {
        let lut = make_8bit_lut(&default_color_table(channel));
        image.set_channel_lut(lut, channel)?;
    }

    image.set_mode(DisplayMode::Composite)
}

/// Give every channel the table of the same view slot.
///
/// The image is shown in gray when every table is gray, otherwise in color. Without any tables
/// this falls back to the default progression.
fn set_composite_luts(image: &mut LegacyImage, tables: &[ColorTable]) -> Result<(), HarmonyError> {
    if tables.is_empty() {
        return set_composite_luts_to_default(image);
    }

    let channels = image.n_channels();
    if tables.len() < channels {
        return Err(HarmonyError::ChannelMismatch {
            view: tables.len(),
            legacy: channels,
        });
    }

    let mut all_gray = true;
    for (channel, table) in tables.iter().take(channels).enumerate() {
        all_gray &= table.is_gray();
        image.set_channel_lut(make_8bit_lut(table), channel)?;
    }

    let mode = if all_gray {
        DisplayMode::Grayscale
    } else {
        DisplayMode::Color
    };

    log::debug!("assigned {} view tables, mode {:?}", channels, mode);
    image.set_mode(mode)
}

/// Copy the converter ranges of the active view into the legacy image.
///
/// An image with a single range receives the span of all converter ranges.
fn assign_image_min_max(display: &ImageDisplay, image: &mut LegacyImage) -> Result<(), HarmonyError> {
    let Some(view) = display.active_view() else {
        return Ok(());
    };

    let ranges = view.converters().iter().map(LutConverter::range);
    match image.luts().map(<[Lut]>::len) {
        Some(luts) => {
            if luts != view.converters().len() {
                return Err(HarmonyError::ChannelMismatch {
                    view: view.converters().len(),
                    legacy: luts,
                });
            }

            for (channel, range) in ranges.enumerate() {
                image.set_channel_range(channel, range)?;
            }
        }
        None => {
            if let Some(span) = DisplayRange::span(ranges) {
                image.set_display_range(span.min, span.max);
            }
        }
    }

    Ok(())
}
