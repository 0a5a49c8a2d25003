// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
//! Linear numbering of the planes in a legacy stack.
//!
//! Stacks enumerate their planes with the time point as the outermost and the channel as the
//! innermost loop, starting at one. Every translation between a plane and its position in a
//! dataset goes through this order, there is no other record of which plane holds what.

/// The position of one plane, together with its number in the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanePosition {
    pub t: usize,
    pub z: usize,
    pub c: usize,
    /// The 1-based plane number.
    pub index: usize,
}

/// Converts between `(t, z, c)` positions and plane numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneSequencer {
    channels: usize,
    slices: usize,
    frames: usize,
}

/// Iterator over all plane positions, in stack order.
#[derive(Clone, Debug)]
pub struct Planes {
    sequencer: PlaneSequencer,
    next: usize,
}

impl PlaneSequencer {
    pub fn new(channels: usize, slices: usize, frames: usize) -> Self {
        PlaneSequencer {
            channels,
            slices,
            frames,
        }
    }

    /// The number of planes in the stack.
    pub fn len(&self) -> usize {
        self.channels * self.slices * self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The plane number of a position.
    ///
    /// Coordinates are not checked, a channel beyond the channel count simply continues into the
    /// next focal plane.
    pub fn index(&self, t: usize, z: usize, c: usize) -> usize {
        1 + c + self.channels * (z + self.slices * t)
    }

    /// The position of a plane number, `None` outside of `1..=len`.
    pub fn position(&self, index: usize) -> Option<PlanePosition> {
        if index == 0 || index > self.len() {
            return None;
        }

        let linear = index - 1;
        let c = linear % self.channels;
        let z = (linear / self.channels) % self.slices;
        let t = linear / (self.channels * self.slices);

        Some(PlanePosition { t, z, c, index })
    }

    /// All positions, time outermost and channel innermost.
    pub fn planes(&self) -> Planes {
        Planes {
            sequencer: *self,
            next: 1,
        }
    }
}

impl Iterator for Planes {
    type Item = PlanePosition;

    fn next(&mut self) -> Option<PlanePosition> {
        let position = self.sequencer.position(self.next)?;
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sequencer.len() + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Planes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_is_innermost() {
        let seq = PlaneSequencer::new(2, 3, 1);
        assert_eq!(seq.index(0, 0, 0), 1);
        assert_eq!(seq.index(0, 0, 1), 2);
        assert_eq!(seq.index(0, 1, 0), 3);
        assert_eq!(seq.index(0, 2, 1), 6);
    }

    #[test]
    fn time_is_outermost() {
        let seq = PlaneSequencer::new(3, 2, 4);
        assert_eq!(seq.index(1, 0, 0), 7);
        assert_eq!(seq.index(3, 1, 2), 24);
        assert_eq!(seq.len(), 24);
    }

    #[test]
    fn matches_nested_loops() {
        let (channels, slices, frames) = (3, 4, 2);
        let seq = PlaneSequencer::new(channels, slices, frames);
        let mut planes = seq.planes();
        assert_eq!(planes.len(), 24);

        let mut expected = 1;
        for t in 0..frames {
            for z in 0..slices {
                for c in 0..channels {
                    assert_eq!(seq.index(t, z, c), expected);
                    assert_eq!(
                        planes.next(),
                        Some(PlanePosition {
                            t,
                            z,
                            c,
                            index: expected
                        })
                    );
                    expected += 1;
                }
            }
        }

        assert_eq!(planes.next(), None);
    }

    #[test]
    fn position_bounds() {
        let seq = PlaneSequencer::new(2, 3, 1);
        assert_eq!(seq.position(0), None);
        assert_eq!(seq.position(7), None);
        assert_eq!(
            seq.position(6),
            Some(PlanePosition {
                t: 0,
                z: 2,
                c: 1,
                index: 6
            })
        );
    }

    #[test]
    fn empty_stack() {
        let seq = PlaneSequencer::new(0, 3, 1);
        assert!(seq.is_empty());
        assert_eq!(seq.planes().count(), 0);
    }
}
