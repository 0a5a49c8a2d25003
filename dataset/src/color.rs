// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
/// An immutable mapping from an 8-bit index to a red, green and blue byte.
///
/// Tables are how a view turns the values of one channel into displayed color. The index is
/// whatever the display range scaled the sample to, the table never sees raw sample values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorTable {
    components: [[u8; 256]; 3],
}

/// The identity ramp, every index maps to the gray of the same intensity.
pub const GRAYS: ColorTable = ColorTable::ramp([true, true, true]);
/// Black to full red.
pub const RED: ColorTable = ColorTable::ramp([true, false, false]);
/// Black to full green.
pub const GREEN: ColorTable = ColorTable::ramp([false, true, false]);
/// Black to full blue.
pub const BLUE: ColorTable = ColorTable::ramp([false, false, true]);
/// Black to full cyan.
pub const CYAN: ColorTable = ColorTable::ramp([false, true, true]);
/// Black to full magenta.
pub const MAGENTA: ColorTable = ColorTable::ramp([true, false, true]);
/// Black to full yellow.
pub const YELLOW: ColorTable = ColorTable::ramp([true, true, false]);

const PROGRESSION: [&ColorTable; 7] = [&RED, &GREEN, &BLUE, &CYAN, &MAGENTA, &YELLOW, &GRAYS];

/// The table assigned to a channel that has not been given one explicitly.
///
/// Channels cycle through red, green, blue, cyan, magenta, yellow and gray, so neighbouring
/// channels are told apart when overlaid.
pub fn default_color_table(channel: usize) -> ColorTable {
    PROGRESSION[channel % PROGRESSION.len()].clone()
}

impl ColorTable {
    /// The number of entries in every table.
    pub const LEN: usize = 256;

    /// Create a table from its three component arrays.
    pub const fn new(reds: [u8; 256], greens: [u8; 256], blues: [u8; 256]) -> Self {
        ColorTable {
            components: [reds, greens, blues],
        }
    }

    /// Create a table by evaluating a function for each index.
    pub fn from_fn(mut f: impl FnMut(u8) -> [u8; 3]) -> Self {
        let mut components = [[0; 256]; 3];

        for idx in 0..=u8::MAX {
            let [r, g, b] = f(idx);
            components[0][usize::from(idx)] = r;
            components[1][usize::from(idx)] = g;
            components[2][usize::from(idx)] = b;
        }

        ColorTable { components }
    }

    const fn ramp(enabled: [bool; 3]) -> Self {
        let mut components = [[0; 256]; 3];
        let mut idx = 0;

        while idx < 256 {
            let mut c = 0;
            while c < 3 {
                if enabled[c] {
                    components[c][idx] = idx as u8;
                }
                c += 1;
            }
            idx += 1;
        }

        ColorTable { components }
    }

    /// Query one component of an entry.
    ///
    /// # Panics
    ///
    /// When `component` is not one of `0` (red), `1` (green) or `2` (blue).
    pub fn get(&self, component: usize, index: u8) -> u8 {
        self.components[component][usize::from(index)]
    }

    /// The full entry at an index.
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        let idx = usize::from(index);
        [
            self.components[0][idx],
            self.components[1][idx],
            self.components[2][idx],
        ]
    }

    pub fn reds(&self) -> &[u8; 256] {
        &self.components[0]
    }

    pub fn greens(&self) -> &[u8; 256] {
        &self.components[1]
    }

    pub fn blues(&self) -> &[u8; 256] {
        &self.components[2]
    }

    /// Check if every entry is a shade of gray.
    ///
    /// This is the case when red, green and blue agree at every index. The entries need not form
    /// a ramp, an inverted or thresholded gray table also qualifies.
    pub fn is_gray(&self) -> bool {
        let [reds, greens, blues] = &self.components;
        reds.iter()
            .zip(greens.iter())
            .zip(blues.iter())
            .all(|((r, g), b)| r == g && g == b)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        GRAYS
    }
}
