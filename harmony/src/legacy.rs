// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! The legacy image model: a flat stack of planes with lookup tables.
//!
//! A legacy image stores `channels × slices × frames` planes of identical size, ordered as
//! described by [`PlaneSequencer`]. How its pixels are displayed depends on whether it has a
//! single lookup table for the whole image or one per channel.
mod lut;
mod stack;

use image_dataset::tables::GRAYS;
use image_dataset::{tables, ColorTable};

pub use self::lut::{DisplayRange, Lut};
pub use self::stack::{ImageStack, Plane};

use crate::sequence::PlaneSequencer;
use crate::HarmonyError;

/// The encoding of legacy pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// Unsigned 8-bit gray values or color table indices.
    Gray8,
    /// Unsigned 16-bit gray values.
    Gray16,
    /// 32-bit floating point gray values.
    Gray32,
    /// Packed `0xAARRGGBB` direct color.
    ColorRgb,
}

/// How the channels of an image with per channel tables are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// All channels overlaid, each in its own color.
    Composite,
    /// One channel at a time, in its own color.
    Color,
    /// One channel at a time, in gray.
    Grayscale,
}

/// The lookup tables of a legacy image.
#[derive(Clone, Debug, PartialEq)]
pub enum LegacyChannels {
    /// A single table and range shared by every plane.
    Single(Lut),
    /// One table and range per channel.
    Composite { luts: Vec<Lut>, mode: DisplayMode },
}

/// A stack of 2D planes with color lookup tables.
#[derive(Clone, Debug, PartialEq)]
pub struct LegacyImage {
    pixel_type: PixelType,
    channels: usize,
    slices: usize,
    frames: usize,
    stack: ImageStack,
    luts: LegacyChannels,
}

impl LegacyImage {
    /// A zeroed image with a single gray table.
    pub fn new(
        pixel_type: PixelType,
        width: usize,
        height: usize,
        channels: usize,
        slices: usize,
        frames: usize,
    ) -> Self {
        LegacyImage {
            pixel_type,
            channels,
            slices,
            frames,
            stack: ImageStack::new(width, height, channels * slices * frames),
            luts: LegacyChannels::Single(make_8bit_lut(&GRAYS)),
        }
    }

    /// A zeroed image with one table per channel, drawn from the default progression.
    pub fn composite(
        pixel_type: PixelType,
        width: usize,
        height: usize,
        channels: usize,
        slices: usize,
        frames: usize,
        mode: DisplayMode,
    ) -> Self {
        let luts = (0..channels)
            .map(|c| make_8bit_lut(&tables::default_color_table(c)))
            .collect();

        LegacyImage {
            luts: LegacyChannels::Composite { luts, mode },
            ..Self::new(pixel_type, width, height, channels, slices, frames)
        }
    }

    /// Assemble an image from existing planes and tables.
    ///
    /// The stack must hold exactly `channels × slices × frames` planes, and a composite image
    /// must have one table per channel.
    pub fn from_stack(
        pixel_type: PixelType,
        stack: ImageStack,
        channels: usize,
        slices: usize,
        frames: usize,
        luts: LegacyChannels,
    ) -> Result<Self, HarmonyError> {
        let expected = channels * slices * frames;
        if stack.len() != expected {
            return Err(HarmonyError::StackMismatch {
                expected,
                actual: stack.len(),
                width: stack.width(),
                height: stack.height(),
            });
        }

        if let LegacyChannels::Composite { luts, .. } = &luts {
            if luts.len() != channels {
                return Err(HarmonyError::ChannelMismatch {
                    view: luts.len(),
                    legacy: channels,
                });
            }
        }

        Ok(LegacyImage {
            pixel_type,
            channels,
            slices,
            frames,
            stack,
            luts,
        })
    }

    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    pub fn width(&self) -> usize {
        self.stack.width()
    }

    pub fn height(&self) -> usize {
        self.stack.height()
    }

    /// The number of channels.
    pub fn n_channels(&self) -> usize {
        self.channels
    }

    /// The number of focal planes.
    pub fn n_slices(&self) -> usize {
        self.slices
    }

    /// The number of time points.
    pub fn n_frames(&self) -> usize {
        self.frames
    }

    /// The numbering of this image's planes.
    pub fn sequencer(&self) -> PlaneSequencer {
        PlaneSequencer::new(self.channels, self.slices, self.frames)
    }

    pub fn stack(&self) -> &ImageStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut ImageStack {
        &mut self.stack
    }

    pub fn channels(&self) -> &LegacyChannels {
        &self.luts
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.luts, LegacyChannels::Composite { .. })
    }

    /// The per channel tables, `None` for an image with a single table.
    pub fn luts(&self) -> Option<&[Lut]> {
        match &self.luts {
            LegacyChannels::Single(_) => None,
            LegacyChannels::Composite { luts, .. } => Some(luts),
        }
    }

    /// The single table, `None` for an image with per channel tables.
    pub fn color_model(&self) -> Option<&Lut> {
        match &self.luts {
            LegacyChannels::Single(lut) => Some(lut),
            LegacyChannels::Composite { .. } => None,
        }
    }

    /// Replace the colors of the single table, keeping the display range.
    pub fn set_color_model(&mut self, lut: Lut) -> Result<(), HarmonyError> {
        match &mut self.luts {
            LegacyChannels::Single(current) => {
                current.recolor(lut);
                Ok(())
            }
            LegacyChannels::Composite { luts, .. } => Err(HarmonyError::ChannelMismatch {
                view: 1,
                legacy: luts.len(),
            }),
        }
    }

    /// Replace the colors of one channel's table, keeping its display range.
    ///
    /// Channels are counted from zero.
    pub fn set_channel_lut(&mut self, lut: Lut, channel: usize) -> Result<(), HarmonyError> {
        match &mut self.luts {
            LegacyChannels::Single(_) => Err(HarmonyError::NotComposite),
            LegacyChannels::Composite { luts, .. } => {
                let count = luts.len();
                let current = luts
                    .get_mut(channel)
                    .ok_or(HarmonyError::ChannelMismatch {
                        view: channel + 1,
                        legacy: count,
                    })?;
                current.recolor(lut);
                Ok(())
            }
        }
    }

    /// Set the range of one channel's table.
    pub fn set_channel_range(
        &mut self,
        channel: usize,
        range: DisplayRange,
    ) -> Result<(), HarmonyError> {
        match &mut self.luts {
            LegacyChannels::Single(_) => Err(HarmonyError::NotComposite),
            LegacyChannels::Composite { luts, .. } => {
                let count = luts.len();
                let current = luts
                    .get_mut(channel)
                    .ok_or(HarmonyError::ChannelMismatch {
                        view: channel + 1,
                        legacy: count,
                    })?;
                current.set_range(range);
                Ok(())
            }
        }
    }

    /// The display mode, `None` for an image with a single table.
    pub fn mode(&self) -> Option<DisplayMode> {
        match self.luts {
            LegacyChannels::Single(_) => None,
            LegacyChannels::Composite { mode, .. } => Some(mode),
        }
    }

    pub fn set_mode(&mut self, new_mode: DisplayMode) -> Result<(), HarmonyError> {
        match &mut self.luts {
            LegacyChannels::Single(_) => Err(HarmonyError::NotComposite),
            LegacyChannels::Composite { mode, .. } => {
                *mode = new_mode;
                Ok(())
            }
        }
    }

    /// The lower end of the display range.
    ///
    /// For an image with per channel tables this is the range of the first channel.
    pub fn display_range_min(&self) -> f64 {
        self.display_range().min
    }

    /// The upper end of the display range.
    ///
    /// For an image with per channel tables this is the range of the first channel.
    pub fn display_range_max(&self) -> f64 {
        self.display_range().max
    }

    fn display_range(&self) -> DisplayRange {
        match &self.luts {
            LegacyChannels::Single(lut) => lut.range(),
            LegacyChannels::Composite { luts, .. } => {
                luts.first().map(Lut::range).unwrap_or_default()
            }
        }
    }

    /// Set the display range of every table.
    pub fn set_display_range(&mut self, min: f64, max: f64) {
        let range = DisplayRange::new(min, max);
        match &mut self.luts {
            LegacyChannels::Single(lut) => lut.set_range(range),
            LegacyChannels::Composite { luts, .. } => {
                luts.iter_mut().for_each(|lut| lut.set_range(range))
            }
        }
    }
}

/// Copy a color table into a legacy lookup table, entry by entry.
///
/// The new table covers the default range.
pub fn make_8bit_lut(table: &ColorTable) -> Lut {
    let mut reds = [0; 256];
    let mut greens = [0; 256];
    let mut blues = [0; 256];

    for idx in 0..=u8::MAX {
        let i = usize::from(idx);
        reds[i] = table.get(0, idx);
        greens[i] = table.get(1, idx);
        blues[i] = table.get(2, idx);
    }

    Lut::new(reds, greens, blues)
}

/// Copy the colors of a legacy lookup table into a color table.
pub fn make_8bit_color_table(lut: &Lut) -> ColorTable {
    ColorTable::new(*lut.reds(), *lut.greens(), *lut.blues())
}
