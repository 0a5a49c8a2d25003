// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
use image_dataset::tables::{default_color_table, BLUE, CYAN, GRAYS, GREEN, MAGENTA, RED};
use image_dataset::{Axis, ColorTable, Dataset};

use crate::display::LutConverter;
use crate::legacy::{make_8bit_color_table, make_8bit_lut, DisplayRange, ImageStack, Lut};
use crate::{
    ColorTableHarmonizer, DatasetView, DisplayHarmonizer, DisplayMode, HarmonyError,
    ImageDisplay, LegacyChannels, LegacyImage, PixelType,
};

fn composite(tables: &[ColorTable], ranges: &[(f64, f64)]) -> LegacyImage {
    let luts = tables
        .iter()
        .zip(ranges)
        .map(|(table, &(min, max))| make_8bit_lut(table).with_range(DisplayRange::new(min, max)))
        .collect::<Vec<_>>();
    let channels = luts.len();

    LegacyImage::from_stack(
        PixelType::Gray8,
        ImageStack::new(4, 4, channels),
        channels,
        1,
        1,
        LegacyChannels::Composite {
            luts,
            mode: DisplayMode::Composite,
        },
    )
    .expect("valid composite image")
}

fn single(table: &ColorTable, pixel_type: PixelType, channels: usize) -> LegacyImage {
    let mut image = LegacyImage::new(pixel_type, 4, 4, channels, 1, 1);
    image.set_color_model(make_8bit_lut(table)).unwrap();
    image
}

fn dataset(channels: usize) -> Dataset {
    Dataset::new(&[(Axis::X, 4), (Axis::Y, 4), (Axis::Channel, channels)]).unwrap()
}

fn with_ranges(mut view: DatasetView, ranges: &[(f64, f64)]) -> DatasetView {
    for (converter, &(min, max)) in view.converters_mut().iter_mut().zip(ranges) {
        *converter = LutConverter::new(min, max);
    }
    view
}

fn luts(image: &LegacyImage) -> &[Lut] {
    image.luts().expect("a composite image")
}

#[test]
fn display_takes_composite_tables() -> Result<(), HarmonyError> {
    let image = composite(&[MAGENTA, GRAYS, CYAN], &[(0.0, 10.0), (5.0, 50.0), (-1.0, 1.0)]);
    let mut display = ImageDisplay::with_view(DatasetView::new(3));

    ColorTableHarmonizer.update_display(&mut display, &image)?;

    let view = display.active_view().unwrap();
    assert_eq!(view.color_tables(), &[MAGENTA, GRAYS, CYAN][..]);
    let ranges: Vec<_> = view.converters().iter().map(LutConverter::range).collect();
    assert_eq!(
        ranges,
        [
            DisplayRange::new(0.0, 10.0),
            DisplayRange::new(5.0, 50.0),
            DisplayRange::new(-1.0, 1.0)
        ]
    );

    assert_eq!(view.projector().map_count(), 1);
    assert_eq!(display.revision(), 1);
    Ok(())
}

#[test]
fn single_table_goes_to_every_slot() -> Result<(), HarmonyError> {
    let mut image = single(&RED, PixelType::Gray8, 1);
    image.set_display_range(12.0, 34.0);
    let mut display = ImageDisplay::with_view(DatasetView::new(4));

    ColorTableHarmonizer.update_display(&mut display, &image)?;

    let view = display.active_view().unwrap();
    assert_eq!(view.color_tables().len(), 4);
    for table in view.color_tables() {
        assert_eq!(table, &RED);
    }

    for converter in view.converters() {
        assert_eq!(converter.range(), DisplayRange::new(12.0, 34.0));
    }

    Ok(())
}

#[test]
fn direct_color_uses_default_tables() -> Result<(), HarmonyError> {
    let image = single(&GRAYS, PixelType::ColorRgb, 2);
    assert_eq!(crate::color_tables_from_legacy(&image).len(), 6);

    let mut display = ImageDisplay::with_view(DatasetView::of_dataset(&dataset(6)));
    for idx in 0..6 {
        display
            .active_view_mut()
            .unwrap()
            .set_color_table(GRAYS, idx);
    }

    ColorTableHarmonizer.update_display(&mut display, &image)?;
    let expected: Vec<_> = (0..6).map(default_color_table).collect();
    assert_eq!(display.active_view().unwrap().color_tables(), &expected[..]);
    Ok(())
}

#[test]
fn display_without_active_view() -> Result<(), HarmonyError> {
    let image = composite(&[RED, GREEN], &[(0.0, 1.0), (0.0, 1.0)]);
    let mut display = ImageDisplay::new();

    ColorTableHarmonizer.update_display(&mut display, &image)?;
    assert_eq!(display.revision(), 0);

    display.add_view(DatasetView::new(2));
    display.set_active(None);
    ColorTableHarmonizer.update_display(&mut display, &image)?;
    assert_eq!(display.views()[0], DatasetView::new(2));
    Ok(())
}

#[test]
fn display_channel_mismatch() {
    let image = composite(&[RED, GREEN], &[(0.0, 1.0), (0.0, 1.0)]);
    let mut display = ImageDisplay::with_view(DatasetView::new(3));

    let err = ColorTableHarmonizer
        .update_display(&mut display, &image)
        .unwrap_err();
    assert_eq!(err, HarmonyError::ChannelMismatch { view: 3, legacy: 2 });
    assert_eq!(err.to_string(), "channel mismatch: 3 vs. 2");
}

#[test]
fn more_tables_than_slots() {
    let image = composite(&[RED, GREEN, BLUE], &[(0.0, 1.0); 3]);
    let mut display = ImageDisplay::with_view(DatasetView::new(2));

    let err = ColorTableHarmonizer
        .update_display(&mut display, &image)
        .unwrap_err();
    assert_eq!(err, HarmonyError::ChannelMismatch { view: 2, legacy: 3 });
}

#[test]
fn legacy_takes_gray_view_tables() -> Result<(), HarmonyError> {
    let mut image = composite(&[RED, GREEN], &[(0.0, 255.0); 2]);
    let inverted = ColorTable::from_fn(|i| [255 - i; 3]);

    let mut view = with_ranges(DatasetView::new(2), &[(1.0, 2.0), (3.0, 4.0)]);
    view.set_color_table(GRAYS, 0);
    view.set_color_table(inverted.clone(), 1);
    let display = ImageDisplay::with_view(view);

    ColorTableHarmonizer.update_legacy_image(&display, &dataset(2), &mut image)?;

    assert_eq!(image.mode(), Some(DisplayMode::Grayscale));
    assert_eq!(make_8bit_color_table(&luts(&image)[0]), GRAYS);
    assert_eq!(make_8bit_color_table(&luts(&image)[1]), inverted);
    assert_eq!(luts(&image)[0].range(), DisplayRange::new(1.0, 2.0));
    assert_eq!(luts(&image)[1].range(), DisplayRange::new(3.0, 4.0));
    Ok(())
}

#[test]
fn legacy_takes_color_view_tables() -> Result<(), HarmonyError> {
    let mut image = composite(&[GRAYS, GRAYS, GRAYS], &[(0.0, 255.0); 3]);

    let mut view = DatasetView::new(3);
    view.set_color_table(GRAYS, 0);
    view.set_color_table(GRAYS, 1);
    view.set_color_table(MAGENTA, 2);
    let display = ImageDisplay::with_view(view);

    ColorTableHarmonizer.update_legacy_image(&display, &dataset(3), &mut image)?;

    assert_eq!(image.mode(), Some(DisplayMode::Color));
    let tables: Vec<_> = luts(&image).iter().map(make_8bit_color_table).collect();
    assert_eq!(tables, [GRAYS, GRAYS, MAGENTA]);
    Ok(())
}

#[test]
fn legacy_defaults_without_view_tables() -> Result<(), HarmonyError> {
    let mut image = composite(&[GRAYS, GRAYS], &[(0.0, 255.0); 2]);
    image.set_mode(DisplayMode::Grayscale)?;
    let display = ImageDisplay::with_view(DatasetView::without_color_tables(2));

    ColorTableHarmonizer.update_legacy_image(&display, &dataset(2), &mut image)?;

    assert_eq!(image.mode(), Some(DisplayMode::Composite));
    assert_eq!(make_8bit_color_table(&luts(&image)[0]), RED);
    assert_eq!(make_8bit_color_table(&luts(&image)[1]), GREEN);
    Ok(())
}

#[test]
fn legacy_defaults_without_active_view() -> Result<(), HarmonyError> {
    let mut image = composite(&[GRAYS, GRAYS, GRAYS], &[(7.0, 8.0); 3]);
    image.set_mode(DisplayMode::Color)?;

    ColorTableHarmonizer.update_legacy_image(&ImageDisplay::new(), &dataset(3), &mut image)?;

    assert_eq!(image.mode(), Some(DisplayMode::Composite));
    let tables: Vec<_> = luts(&image).iter().map(make_8bit_color_table).collect();
    assert_eq!(tables, [RED, GREEN, BLUE]);
    // Without a view there are no converters to take ranges from.
    for lut in luts(&image) {
        assert_eq!(lut.range(), DisplayRange::new(7.0, 8.0));
    }

    Ok(())
}

#[test]
fn legacy_channel_mismatch() {
    let mut image = composite(&[RED, GREEN], &[(0.0, 255.0); 2]);
    let display = ImageDisplay::with_view(DatasetView::new(3));

    let err = ColorTableHarmonizer
        .update_legacy_image(&display, &dataset(3), &mut image)
        .unwrap_err();
    assert_eq!(err, HarmonyError::ChannelMismatch { view: 3, legacy: 2 });
}

#[test]
fn legacy_needs_a_table_per_channel() {
    let mut image = composite(&[RED, GREEN, BLUE], &[(0.0, 255.0); 3]);
    let mut view = DatasetView::new(1);
    view.set_color_table(GRAYS, 0);
    let display = ImageDisplay::with_view(view);

    let err = ColorTableHarmonizer
        .update_legacy_image(&display, &dataset(3), &mut image)
        .unwrap_err();
    assert_eq!(err, HarmonyError::ChannelMismatch { view: 1, legacy: 3 });
}

#[test]
fn single_lut_from_dataset() -> Result<(), HarmonyError> {
    let mut image = single(&GRAYS, PixelType::Gray16, 1);
    let mut ds = dataset(3);
    ds.set_color_table(0, CYAN);

    let view = with_ranges(
        DatasetView::new(3),
        &[(10.0, 20.0), (-4.0, 15.0), (0.0, 300.0)],
    );
    let display = ImageDisplay::with_view(view);

    ColorTableHarmonizer.update_legacy_image(&display, &ds, &mut image)?;

    let lut = image.color_model().unwrap();
    assert_eq!(make_8bit_color_table(lut), CYAN);
    assert_eq!(image.display_range_min(), -4.0);
    assert_eq!(image.display_range_max(), 300.0);
    Ok(())
}

#[test]
fn single_lut_defaults_to_gray() -> Result<(), HarmonyError> {
    let mut image = single(&RED, PixelType::Gray8, 1);
    image.set_display_range(1.0, 2.0);

    ColorTableHarmonizer.update_legacy_image(&ImageDisplay::new(), &dataset(1), &mut image)?;

    assert_eq!(image.color_model().map(make_8bit_color_table), Some(GRAYS));
    assert_eq!(image.display_range_min(), 1.0);
    assert_eq!(image.display_range_max(), 2.0);
    Ok(())
}

#[test]
fn tables_survive_round_trip() -> Result<(), HarmonyError> {
    let custom = ColorTable::from_fn(|i| [i, i / 2, 255 - i]);
    let source = composite(&[custom.clone(), BLUE], &[(3.0, 30.0), (100.0, 4000.0)]);
    let mut display = ImageDisplay::with_view(DatasetView::new(2));
    ColorTableHarmonizer.update_display(&mut display, &source)?;

    let mut target = composite(&[GRAYS, GRAYS], &[(0.0, 255.0); 2]);
    ColorTableHarmonizer.update_legacy_image(&display, &dataset(2), &mut target)?;

    assert_eq!(luts(&target), luts(&source));
    assert_eq!(target.mode(), Some(DisplayMode::Color));
    Ok(())
}
