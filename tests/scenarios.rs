mod support;

use atlasc::error::Error;
use atlasc::options::PipelineOptions;
use atlasc::pipeline;

#[test]
fn single_disc_sprite_is_tightly_cropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_rgba_png(dir.path(), "disc.png", 64, 64, support::disc_alpha(32, 32, 28));

    let options = PipelineOptions { alpha_threshold: 128, border: 0, padding: 0, ..PipelineOptions::default() };
    let (descriptor, _sheet) = pipeline::run(&[path], &options).unwrap();

    assert_eq!(descriptor.sprites.len(), 1);
    let rect = descriptor.sprites[0].sprite_rect;
    let (w, h) = (rect[2] - rect[0], rect[3] - rect[1]);
    // The spec's own worked example hedges this with "approximately";
    // the disc's bounding box should be roughly 56x56, centered near (32,32).
    assert!((50..=60).contains(&w), "unexpected width {w}");
    assert!((50..=60).contains(&h), "unexpected height {h}");
    assert!((rect[0] - rect[1]).abs() <= 1, "disc bbox should be roughly square-centered");

    // With border=0, padding=0 the sheet_rect equals the sprite_rect translated to the origin.
    let sheet_rect = descriptor.sprites[0].sheet_rect;
    assert_eq!(sheet_rect, [0, 0, w, h]);
}

#[test]
fn two_squares_pack_without_overlap() {
    let dir = tempfile::tempdir().unwrap();
    let a = support::write_rgba_png(dir.path(), "a.png", 32, 32, support::square_alpha(0, 0, 32));
    let b = support::write_rgba_png(dir.path(), "b.png", 32, 32, support::square_alpha(0, 0, 32));

    let options = PipelineOptions { border: 2, padding: 1, ..PipelineOptions::default() };
    let (descriptor, sheet) = pipeline::run(&[a, b], &options).unwrap();

    assert_eq!(descriptor.sprites.len(), 2);
    for entry in &descriptor.sprites {
        let [xmin, ymin, xmax, ymax] = entry.sheet_rect;
        assert_eq!(xmax - xmin, 34);
        assert_eq!(ymax - ymin, 34);
    }

    // Non-overlap: the two sheet_rects (let alone their enlarged placements) must be disjoint.
    let r0 = descriptor.sprites[0].sheet_rect;
    let r1 = descriptor.sprites[1].sheet_rect;
    let disjoint = r0[2] <= r1[0] || r1[2] <= r0[0] || r0[3] <= r1[1] || r1[3] <= r0[1];
    assert!(disjoint, "sheet rects must not overlap: {r0:?} {r1:?}");

    assert!(sheet.width() <= options.max_width);
    assert!(sheet.height() <= options.max_height);
}

#[test]
fn power_of_two_flag_rounds_sheet_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let a = support::write_rgba_png(dir.path(), "a.png", 40, 40, support::square_alpha(0, 0, 40));
    let b = support::write_rgba_png(dir.path(), "b.png", 40, 40, support::square_alpha(0, 0, 40));

    let options = PipelineOptions { border: 0, padding: 0, pot: true, ..PipelineOptions::default() };
    let (descriptor, _sheet) = pipeline::run(&[a, b], &options).unwrap();

    assert_eq!(descriptor.image_width, 128);
    assert_eq!(descriptor.image_height, 64);
    assert!(descriptor.image_width.is_power_of_two());
    assert!(descriptor.image_height.is_power_of_two());
}

#[test]
fn pack_overflow_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<_> = (0..4)
        .map(|i| support::write_rgba_png(dir.path(), &format!("sq{i}.png"), 600, 600, support::square_alpha(0, 0, 600)))
        .collect();

    let options = PipelineOptions { max_width: 1024, max_height: 1024, ..PipelineOptions::default() };
    let result = pipeline::run(&paths, &options);
    assert!(matches!(result, Err(Error::PackOverflow { .. })));
}

#[test]
fn alpha_threshold_controls_empty_vs_nonempty_sprite() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_rgba_png(dir.path(), "faint.png", 16, 16, |_, _| 10);

    let strict = PipelineOptions { alpha_threshold: 20, ..PipelineOptions::default() };
    let result = pipeline::run(&[path.clone()], &strict);
    assert!(matches!(result, Err(Error::EmptySprite(_))));

    let lenient = PipelineOptions { alpha_threshold: 5, border: 0, padding: 0, ..PipelineOptions::default() };
    let (descriptor, _sheet) = pipeline::run(&[path], &lenient).unwrap();
    let rect = descriptor.sprites[0].sprite_rect;
    assert_eq!((rect[2] - rect[0], rect[3] - rect[1]), (16, 16));
}

#[test]
fn determinism_same_inputs_same_order_same_options_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let a = support::write_rgba_png(dir.path(), "a.png", 20, 20, support::disc_alpha(10, 10, 8));
    let b = support::write_rgba_png(dir.path(), "b.png", 24, 24, support::square_alpha(2, 2, 18));

    let options = PipelineOptions { mesh: true, ..PipelineOptions::default() };
    let (d1, sheet1) = pipeline::run(&[a.clone(), b.clone()], &options).unwrap();
    let (d2, sheet2) = pipeline::run(&[a, b], &options).unwrap();

    assert_eq!(d1.to_json_string().unwrap(), d2.to_json_string().unwrap());
    assert_eq!(sheet1.into_raw(), sheet2.into_raw());
}
