// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use ndarray::{ArrayD, ArrayViewD, IxDyn};

use crate::access::{RandomAccess, RandomAccessMut};
use crate::{Axis, AxisError, ColorTable};

/// A real valued image addressed by named axes.
///
/// The dataset owns its samples and one optional color table per channel. It does not interpret
/// the samples in any way, how they are displayed is decided by the view showing the dataset.
#[derive(Clone, Debug)]
pub struct Dataset {
    axes: Vec<Axis>,
    data: ArrayD<f64>,
    color_tables: Vec<Option<ColorTable>>,
    revision: u64,
}

impl Dataset {
    /// Allocate a zeroed dataset with the given axes and lengths, in dimension order.
    pub fn new(axes: &[(Axis, usize)]) -> Result<Self, AxisError> {
        let shape: Vec<usize> = axes.iter().map(|&(_, len)| len).collect();
        Self::from_array(
            axes.iter().map(|&(axis, _)| axis).collect(),
            ArrayD::zeros(IxDyn(&shape)),
        )
    }

    /// Wrap existing samples.
    ///
    /// The dimension `i` of `data` is measured along `axes[i]`.
    ///
    /// # Panics
    ///
    /// When the number of axes and the dimensionality of `data` disagree.
    pub fn from_array(axes: Vec<Axis>, data: ArrayD<f64>) -> Result<Self, AxisError> {
        assert_eq!(axes.len(), data.ndim(), "one axis per dimension");

        for (idx, axis) in axes.iter().enumerate() {
            if axes[..idx].contains(axis) {
                return Err(AxisError::Duplicate(*axis));
            }
        }

        Ok(Dataset {
            axes,
            data,
            color_tables: Vec::new(),
            revision: 0,
        })
    }

    /// The dimension measured along an axis, `None` if the dataset lacks it.
    pub fn axis_index(&self, axis: Axis) -> Option<usize> {
        self.axes.iter().position(|&a| a == axis)
    }

    /// The length along an axis.
    ///
    /// Absent axes have a length of one.
    pub fn dimension(&self, axis: Axis) -> usize {
        self.axis_index(axis).map_or(1, |dim| self.data.shape()[dim])
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// A read-only view of all samples.
    pub fn as_array(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// A cursor reading samples, initially at the origin.
    pub fn random_access(&self) -> RandomAccess<'_> {
        RandomAccess::new(self.data.view())
    }

    /// A cursor reading and writing samples, initially at the origin.
    pub fn random_access_mut(&mut self) -> RandomAccessMut<'_> {
        RandomAccessMut::new(self.data.view_mut())
    }

    /// Signal that the samples were modified behind any derived state.
    ///
    /// Bumps the revision so that caches keyed on it are recomputed.
    pub fn update(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        log::trace!("dataset updated to revision {}", self.revision);
    }

    /// The number of updates signaled so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The color table assigned to a channel, if any.
    pub fn color_table(&self, channel: usize) -> Option<&ColorTable> {
        self.color_tables.get(channel)?.as_ref()
    }

    /// Assign the color table of a channel.
    pub fn set_color_table(&mut self, channel: usize, table: ColorTable) {
        if self.color_tables.len() <= channel {
            self.color_tables.resize(channel + 1, None);
        }

        self.color_tables[channel] = Some(table);
    }
}
