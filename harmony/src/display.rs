// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! The view side: how a dataset is shown.
//!
//! A display holds any number of views and at most one of them is active. Each view carries, per
//! channel, the color table and the converter scaling sample values into that table.
use image_dataset::{tables, Axis, ColorTable, Dataset};

use crate::legacy::DisplayRange;

/// Scales the samples of one channel into the 8-bit index of its color table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LutConverter {
    min: f64,
    max: f64,
}

/// Renders the current plane of a view.
///
/// Rendering itself happens elsewhere. The projector only records that the cached plane has to
/// be recomputed from the dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projector {
    mapped: u64,
}

/// One view of a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetView {
    color_tables: Vec<ColorTable>,
    converters: Vec<LutConverter>,
    projector: Projector,
}

/// A set of views, one of which may be active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageDisplay {
    views: Vec<DatasetView>,
    active: Option<usize>,
    revision: u64,
}

impl LutConverter {
    pub fn new(min: f64, max: f64) -> Self {
        LutConverter { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_min(&mut self, min: f64) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    pub fn range(&self) -> DisplayRange {
        DisplayRange::new(self.min, self.max)
    }

    /// The table index a sample is shown with.
    pub fn index_of(&self, value: f64) -> u8 {
        let span = self.max - self.min;
        if span.is_nan() || span <= 0.0 {
            return if value < self.min { 0 } else { u8::MAX };
        }

        let scaled = (value - self.min) / span * 255.0;
        scaled.clamp(0.0, 255.0) as u8
    }
}

impl Default for LutConverter {
    fn default() -> Self {
        let range = DisplayRange::default();
        LutConverter::new(range.min, range.max)
    }
}

impl Projector {
    /// Recompute the current plane.
    pub fn map(&mut self) {
        self.mapped += 1;
        log::trace!("projector mapped current plane ({} times)", self.mapped);
    }

    /// How often the current plane was recomputed.
    pub fn map_count(&self) -> u64 {
        self.mapped
    }
}

impl DatasetView {
    /// A view of `channels` channels with default tables and converters.
    pub fn new(channels: usize) -> Self {
        DatasetView {
            color_tables: (0..channels).map(tables::default_color_table).collect(),
            converters: vec![LutConverter::default(); channels],
            projector: Projector::default(),
        }
    }

    /// A view of every channel of a dataset, using its color tables where it has them.
    pub fn of_dataset(dataset: &Dataset) -> Self {
        let channels = dataset.dimension(Axis::Channel);
        let color_tables = (0..channels)
            .map(|c| {
                dataset
                    .color_table(c)
                    .cloned()
                    .unwrap_or_else(|| tables::default_color_table(c))
            })
            .collect();

        DatasetView {
            color_tables,
            ..DatasetView::new(channels)
        }
    }

    /// A view without any color tables but with converters for `channels` channels.
    pub fn without_color_tables(channels: usize) -> Self {
        DatasetView {
            color_tables: Vec::new(),
            ..DatasetView::new(channels)
        }
    }

    pub fn color_tables(&self) -> &[ColorTable] {
        &self.color_tables
    }

    /// Replace the table of an existing channel slot, returning the previous one.
    ///
    /// Returns `None` and changes nothing when the slot does not exist.
    pub fn set_color_table(&mut self, table: ColorTable, index: usize) -> Option<ColorTable> {
        let slot = self.color_tables.get_mut(index)?;
        Some(core::mem::replace(slot, table))
    }

    pub fn converters(&self) -> &[LutConverter] {
        &self.converters
    }

    pub fn converters_mut(&mut self) -> &mut [LutConverter] {
        &mut self.converters
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn projector_mut(&mut self) -> &mut Projector {
        &mut self.projector
    }
}

impl ImageDisplay {
    /// A display without views.
    pub fn new() -> Self {
        ImageDisplay::default()
    }

    /// A display showing a single, active view.
    pub fn with_view(view: DatasetView) -> Self {
        let mut display = ImageDisplay::new();
        display.add_view(view);
        display
    }

    /// Add a view, making it the active one.
    pub fn add_view(&mut self, view: DatasetView) -> usize {
        self.views.push(view);
        let idx = self.views.len() - 1;
        self.active = Some(idx);
        idx
    }

    /// Choose the active view, `None` deactivates all views.
    ///
    /// Returns `false` and changes nothing for an unknown view.
    pub fn set_active(&mut self, view: Option<usize>) -> bool {
        if view.is_some_and(|idx| idx >= self.views.len()) {
            return false;
        }

        self.active = view;
        true
    }

    pub fn views(&self) -> &[DatasetView] {
        &self.views
    }

    pub fn active_view(&self) -> Option<&DatasetView> {
        self.views.get(self.active?)
    }

    pub fn active_view_mut(&mut self) -> Option<&mut DatasetView> {
        self.views.get_mut(self.active?)
    }

    /// Signal that the shown content changed.
    pub fn update(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        log::trace!("display updated to revision {}", self.revision);
    }

    /// The number of updates signaled so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
