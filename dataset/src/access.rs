// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Positional cursors over the samples of a dataset.
//!
//! A cursor remembers one coordinate per dimension. Coordinates are changed one dimension at a
//! time, matching how nested loops over planes, rows and columns advance, and are only checked
//! against the store when a sample is actually read or written.
use ndarray::{ArrayViewD, ArrayViewMutD};

use crate::IndexError;

/// A cursor reading samples.
pub struct RandomAccess<'data> {
    data: ArrayViewD<'data, f64>,
    position: Vec<usize>,
}

/// A cursor reading and writing samples.
pub struct RandomAccessMut<'data> {
    data: ArrayViewMutD<'data, f64>,
    position: Vec<usize>,
}

impl<'data> RandomAccess<'data> {
    pub(crate) fn new(data: ArrayViewD<'data, f64>) -> Self {
        let position = vec![0; data.ndim()];
        RandomAccess { data, position }
    }

    /// Move the cursor along one dimension.
    ///
    /// # Panics
    ///
    /// When `dimension` is not a dimension of the store.
    pub fn set_position(&mut self, coordinate: usize, dimension: usize) {
        self.position[dimension] = coordinate;
    }

    pub fn position(&self) -> &[usize] {
        &self.position
    }

    /// Read the sample at the current position.
    pub fn get(&self) -> Result<f64, IndexError> {
        self.data
            .get(self.position.as_slice())
            .copied()
            .ok_or_else(|| index_error(&self.position, self.data.shape()))
    }
}

impl<'data> RandomAccessMut<'data> {
    pub(crate) fn new(data: ArrayViewMutD<'data, f64>) -> Self {
        let position = vec![0; data.ndim()];
        RandomAccessMut { data, position }
    }

    /// Move the cursor along one dimension.
    ///
    /// # Panics
    ///
    /// When `dimension` is not a dimension of the store.
    pub fn set_position(&mut self, coordinate: usize, dimension: usize) {
        self.position[dimension] = coordinate;
    }

    pub fn position(&self) -> &[usize] {
        &self.position
    }

    /// Read the sample at the current position.
    pub fn get(&self) -> Result<f64, IndexError> {
        self.data
            .get(self.position.as_slice())
            .copied()
            .ok_or_else(|| index_error(&self.position, self.data.shape()))
    }

    /// Overwrite the sample at the current position.
    pub fn set_real(&mut self, value: f64) -> Result<(), IndexError> {
        match self.data.get_mut(self.position.as_slice()) {
            Some(sample) => {
                *sample = value;
                Ok(())
            }
            None => Err(index_error(&self.position, self.data.shape())),
        }
    }
}

fn index_error(position: &[usize], shape: &[usize]) -> IndexError {
    IndexError {
        position: position.to_vec(),
        shape: shape.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, Dataset};

    #[test]
    fn write_then_read() {
        let mut dataset = Dataset::new(&[(Axis::X, 3), (Axis::Y, 2)]).unwrap();

        let mut access = dataset.random_access_mut();
        access.set_position(2, 0);
        access.set_position(1, 1);
        access.set_real(7.5).unwrap();
        assert_eq!(access.position(), &[2, 1]);

        let access = dataset.random_access();
        assert_eq!(access.get().unwrap(), 0.0, "starts at the origin");
        assert_eq!(dataset.as_array()[&[2usize, 1][..]], 7.5);
    }

    #[test]
    fn out_of_range_fails_on_access() {
        let mut dataset = Dataset::new(&[(Axis::X, 3), (Axis::Y, 2)]).unwrap();

        let mut access = dataset.random_access_mut();
        access.set_position(3, 0);
        let err = access.set_real(1.0).unwrap_err();
        assert_eq!(err.position, [3, 0]);
        assert_eq!(err.shape, [3, 2]);

        let mut access = dataset.random_access();
        access.set_position(5, 1);
        assert!(access.get().is_err());
    }

    #[test]
    #[should_panic]
    fn unknown_dimension() {
        let dataset = Dataset::new(&[(Axis::X, 3)]).unwrap();
        dataset.random_access().set_position(0, 1);
    }
}
