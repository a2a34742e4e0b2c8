use fan_harp_blade::prelude::*;
use geo_types::coord;
use pretty_assertions::assert_eq;

const EXAMPLE: &str = "\
# this is a comment line
inner_circle_diameter,10
outer_circle_diameter,20
sector,5,10,4.5,0.2  // this line describes a ring
sector,10,15,12,0.5
sector,15,18,0.5,0.5
broken,line,here
sector,1,2,three,0.5
";

#[test]
fn test_parse_example() {
    let (config, skipped) = parse_with_diagnostics(EXAMPLE);
    assert_eq!(config.inner_circle_radius(), 5.0);
    assert_eq!(config.outer_circle_radius(), 10.0);
    assert_eq!(
        config.slot_groups(),
        &[
            SlotGroup::new(5.0, 10.0, 4.5, 0.2),
            SlotGroup::new(10.0, 15.0, 12.0, 0.5),
            SlotGroup::new(15.0, 18.0, 0.5, 0.5),
        ]
    );
    assert_eq!(
        skipped.iter().map(|s| s.line).collect::<Vec<_>>(),
        vec![7, 8]
    );
}

#[test]
fn test_draw_example() {
    let config = parse(EXAMPLE);
    let canvas = Canvas::fit(&config, Canvas::DEFAULT_MARGIN);
    assert_eq!(canvas.size, 56.0);

    for boundary in [BoundaryStyle::Chord, BoundaryStyle::TrueArc] {
        let options = ProjectionOptions {
            center: canvas.center,
            boundary,
            ..ProjectionOptions::default()
        };
        let drawing = project_blade(&config, &options);
        let slots: Vec<usize> = drawing.groups.iter().map(|g| g.paths.len()).collect();
        assert_eq!(slots, vec![4, 12, 0]);
        for (set, group) in drawing.groups.iter().zip(config.slot_groups()) {
            for (path, interval) in set.paths.iter().zip(layout(group)) {
                let span = path.arc_span_degrees(canvas.center);
                assert!((span - interval.span_degrees()).abs() < 1e-6);
            }
        }
        let rect = drawing.bounding_rect().expect("drawing has extent");
        assert!(rect.min().x >= 0.0 && rect.max().x <= canvas.size);
    }
}

#[test]
fn test_simulate_example() {
    let config = parse(EXAMPLE);
    let model = RotationModel::default();
    let signal = simulate(&config, &model);
    assert_eq!(signal.segment_len, 22000);
    let segments: Vec<&[i16]> = signal.segments().collect();
    assert_eq!(segments.len(), 3);

    // 600 rpm for half a second is five turns; 4.5 repeats at 20% open
    // leaves each turn open for 64° out of 360°.
    let open = segments[0]
        .iter()
        .filter(|s| **s == model.present_level())
        .count();
    let expected = 22000.0 * 64.0 / 360.0;
    assert!((open as f64 - expected).abs() < 25.0);

    // 12 repeats at 50% are open half the time
    let open = segments[1]
        .iter()
        .filter(|s| **s == model.present_level())
        .count();
    assert!((open as f64 - 11000.0).abs() < 25.0);

    assert!(segments[2].iter().all(|s| *s == model.absent_level()));
}

#[test]
fn test_origin_drawing_placed_on_page() {
    let config = parse(EXAMPLE);
    let drawing = project_blade(&config, &ProjectionOptions::default());
    let canvas = Canvas::fit(&config, Canvas::DEFAULT_MARGIN);
    let page = canvas.place(&drawing, true);
    let first = page.0[0].0[0];
    assert_eq!(drawing.options().center, coord! {x: 0.0, y: 0.0});
    assert!((first.x - 33.0).abs() < 1e-9 && (first.y - 28.0).abs() < 1e-9);
}
