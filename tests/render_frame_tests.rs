use mapchart::api::build_render_state;
use mapchart::core::{
    ChartType, LabelDescriptor, PixelPoint, RectShape, SeriesKey, ShapeDescriptor, ShapeGeometry,
};
use mapchart::render::{
    Color, EstimatedTextMeasurer, LinePrimitive, NullRenderer, RenderFrame, Renderer,
};
use mapchart::ChartSpec;

#[test]
fn build_render_state_includes_shapes_labels_and_baseline() {
    let spec = ChartSpec::new(ChartType::Bar, vec![3.0, 1.0, 2.0])
        .with_max_value(6.0)
        .with_labels(true);
    let state = build_render_state(
        &spec,
        PixelPoint::new(200.0, 100.0),
        &EstimatedTextMeasurer::default(),
    )
    .expect("state");

    let frame = state.to_frame();
    frame.validate().expect("valid frame");
    assert_eq!(frame.origin, PixelPoint::new(170.0, 100.0));
    assert_eq!(frame.shapes.len(), 3);
    let texts: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["3", "1", "2"]);
    assert_eq!(frame.guide_line, Some(LinePrimitive::bar_baseline(60.0)));
}

#[test]
fn sector_charts_have_no_baseline_and_center_on_the_anchor() {
    let spec = ChartSpec::new(ChartType::PolarArea, vec![1.0, 4.0]).with_max_value(4.0);
    let state = build_render_state(
        &spec,
        PixelPoint::new(200.0, 100.0),
        &EstimatedTextMeasurer::default(),
    )
    .expect("state");

    assert_eq!(state.origin, PixelPoint::new(200.0, 100.0));
    assert!(state.guide_line.is_none());
    assert!(state.labels.is_empty());
}

#[test]
fn single_series_uses_fill_color_and_multi_series_the_palette() {
    let measurer = EstimatedTextMeasurer::default();
    let red = Color::rgb(1.0, 0.0, 0.0);
    let palette = vec![Color::BLACK, Color::WHITE];

    let single = ChartSpec::new(ChartType::Pie, vec![2.0]).with_colors(red, palette.clone());
    let state = build_render_state(&single, PixelPoint::default(), &measurer).expect("single");
    assert_eq!(state.shapes[0].fill, red);

    let multi = ChartSpec::new(ChartType::Pie, vec![1.0, 1.0, 1.0]).with_colors(red, palette);
    let state = build_render_state(&multi, PixelPoint::default(), &measurer).expect("multi");
    let fills: Vec<Color> = state.shapes.iter().map(|shape| shape.fill).collect();
    assert_eq!(fills, vec![Color::BLACK, Color::WHITE, Color::BLACK]);
}

#[test]
fn null_renderer_records_the_last_frame() {
    let spec = ChartSpec::new(ChartType::Bar, vec![1.0, -1.0]).with_labels(true);
    let state = build_render_state(
        &spec,
        PixelPoint::new(0.0, 0.0),
        &EstimatedTextMeasurer::default(),
    )
    .expect("state");

    let mut renderer = NullRenderer::default();
    renderer.render(&state.to_frame()).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_shape_count, 2);
    assert_eq!(renderer.last_label_count, 2);
    assert_eq!(renderer.last_frame, Some(state.to_frame()));
}

#[test]
fn frame_validation_rejects_malformed_primitives() {
    let bad_bar = ShapeDescriptor::new(
        SeriesKey(0),
        ShapeGeometry::Rect(RectShape::new(0.0, 0.0, -1.0, 5.0)),
        Color::BLACK,
    );
    assert!(RenderFrame::new(PixelPoint::default()).with_shape(bad_bar).validate().is_err());

    let faded_out = LabelDescriptor {
        key: SeriesKey(0),
        text: "x".to_owned(),
        anchor: PixelPoint::default(),
        scale: 1.0,
        opacity: 1.5,
        fill: Color::BLACK,
    };
    assert!(RenderFrame::new(PixelPoint::default()).with_label(faded_out).validate().is_err());

    assert!(RenderFrame::new(PixelPoint::new(f64::NAN, 0.0)).validate().is_err());
    assert!(RenderFrame::new(PixelPoint::default()).with_opacity(-0.1).validate().is_err());

    let mut renderer = NullRenderer::default();
    let invalid = RenderFrame::new(PixelPoint::default()).with_opacity(2.0);
    assert!(renderer.render(&invalid).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}
