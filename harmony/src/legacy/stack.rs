// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use crate::HarmonyError;

/// One 2D plane of a legacy image.
///
/// Every pixel is stored as a 32-bit integer. Direct color planes pack `0xAARRGGBB` into it,
/// indexed planes only use the low bits for the table index or gray value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

/// The planes of a legacy image, numbered from one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageStack {
    width: usize,
    height: usize,
    planes: Vec<Plane>,
}

impl Plane {
    /// A plane with all pixels zero.
    pub fn new(width: usize, height: usize) -> Self {
        Plane {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Wrap row-major pixel data.
    pub fn with_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }

        Some(Plane {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<u32, HarmonyError> {
        let idx = self.offset(x, y)?;
        Ok(self.pixels[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, value: u32) -> Result<(), HarmonyError> {
        let idx = self.offset(x, y)?;
        self.pixels[idx] = value;
        Ok(())
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The pixels as native endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, HarmonyError> {
        if x >= self.width || y >= self.height {
            return Err(HarmonyError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y * self.width + x)
    }
}

impl ImageStack {
    /// A stack of `planes` zeroed planes.
    pub fn new(width: usize, height: usize, planes: usize) -> Self {
        ImageStack {
            width,
            height,
            planes: vec![Plane::new(width, height); planes],
        }
    }

    /// Collect existing planes into a stack.
    ///
    /// Returns `None` when the planes do not all have the given size.
    pub fn from_planes(width: usize, height: usize, planes: Vec<Plane>) -> Option<Self> {
        if planes
            .iter()
            .any(|plane| plane.width != width || plane.height != height)
        {
            return None;
        }

        Some(ImageStack {
            width,
            height,
            planes,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// The plane with a 1-based number.
    pub fn processor(&self, index: usize) -> Result<&Plane, HarmonyError> {
        let planes = self.planes.len();
        index
            .checked_sub(1)
            .and_then(|idx| self.planes.get(idx))
            .ok_or(HarmonyError::NoSuchPlane { index, planes })
    }

    /// The plane with a 1-based number, for modification.
    pub fn processor_mut(&mut self, index: usize) -> Result<&mut Plane, HarmonyError> {
        let planes = self.planes.len();
        index
            .checked_sub(1)
            .and_then(|idx| self.planes.get_mut(idx))
            .ok_or(HarmonyError::NoSuchPlane { index, planes })
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }
}
