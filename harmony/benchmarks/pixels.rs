//! Benchmarks packing datasets into legacy color planes and back.
use brunch::Bench;

use image_dataset::{Axis, AxisError, Dataset};
use image_harmony::{ColorPixelHarmonizer, DataHarmonizer, LegacyImage, PixelType};

#[derive(Clone, Copy, Debug)]
enum Direction {
    Encode,
    Decode,
}

struct Harmonize {
    direction: Direction,
    channels: usize,
    slices: usize,
    sz: usize,
}

impl Harmonize {
    fn name(&self) -> String {
        format!(
            "pixels({:?}, {}x{}, {} channels, {} slices)",
            self.direction, self.sz, self.sz, self.channels, self.slices
        )
    }

    fn prepare(self) -> Result<impl FnMut(), AxisError> {
        let mut dataset = Dataset::new(&[
            (Axis::X, self.sz),
            (Axis::Y, self.sz),
            (Axis::Channel, 3 * self.channels),
            (Axis::Z, self.slices),
        ])?;
        let mut image = LegacyImage::new(
            PixelType::ColorRgb,
            self.sz,
            self.sz,
            self.channels,
            self.slices,
            1,
        );
        let harmonizer = ColorPixelHarmonizer::new();
        let direction = self.direction;

        Ok(move || match direction {
            Direction::Encode => harmonizer
                .update_legacy_image(&dataset, &mut image)
                .unwrap(),
            Direction::Decode => harmonizer.update_dataset(&mut dataset, &image).unwrap(),
        })
    }
}

fn main() {
    let tests = [
        Harmonize {
            direction: Direction::Encode,
            channels: 1,
            slices: 1,
            sz: 128,
        },
        Harmonize {
            direction: Direction::Decode,
            channels: 1,
            slices: 1,
            sz: 128,
        },
        Harmonize {
            direction: Direction::Encode,
            channels: 2,
            slices: 8,
            sz: 64,
        },
        Harmonize {
            direction: Direction::Decode,
            channels: 2,
            slices: 8,
            sz: 64,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|harmonize| {
        Bench::new(format!("harmony::pixels::main::{}", harmonize.name()))
            .run(harmonize.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
