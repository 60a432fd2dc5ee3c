use mapchart::core::{ChartType, GeoPoint, PixelPoint, ShapeGeometry};
use mapchart::error::ChartError;
use mapchart::render::NullRenderer;
use mapchart::transition::Easing;
use mapchart::{ChartResult, ChartSpec, ChartSpecUpdate, MapChart};

fn projector(point: GeoPoint) -> ChartResult<PixelPoint> {
    Ok(PixelPoint::new(100.0 + point.lng * 10.0, 200.0 - point.lat * 10.0))
}

fn shifted_projector(point: GeoPoint) -> ChartResult<PixelPoint> {
    Ok(PixelPoint::new(point.lng * 10.0, -point.lat * 10.0))
}

fn bar_spec() -> ChartSpec {
    ChartSpec::new(ChartType::Bar, vec![3.0, 1.0, 2.0]).with_max_value(6.0)
}

fn attached(spec: ChartSpec) -> MapChart<NullRenderer> {
    let mut chart = MapChart::new(NullRenderer::default(), GeoPoint::new(1.0, 2.0), spec)
        .expect("chart");
    chart.add_to_map(&projector).expect("add to map");
    chart
}

fn finish(chart: &mut MapChart<NullRenderer>) {
    while chart.tick(1_000.0).expect("tick") {}
}

#[test]
fn add_to_map_starts_from_zero_area_bars() {
    let chart = attached(bar_spec());

    assert!(chart.is_on_map());
    assert!(chart.is_animating());
    assert_eq!(chart.renderer().frames_rendered, 1);

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.origin, PixelPoint::new(90.0, 190.0));
    assert_eq!(frame.shapes.len(), 3);
    assert!(frame.shapes.iter().all(|shape| shape.geometry.area() == 0.0));
    let guide = frame.guide_line.expect("bar charts draw a baseline");
    assert_eq!((guide.x1, guide.x2), (-3.0, 63.0));
}

#[test]
fn ticks_run_the_transition_to_its_target() {
    let mut chart = attached(bar_spec());

    assert!(chart.tick(375.0).expect("tick"));
    assert!(!chart.tick(375.0).expect("tick"));
    assert!(!chart.is_animating());
    assert!(!chart.tick(16.0).expect("idle tick"));

    let target = chart.render_state().expect("state").clone();
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame, &target.to_frame());
    assert_eq!(chart.renderer().frames_rendered, 3);
}

#[test]
fn rejected_update_leaves_the_chart_untouched() {
    let mut chart = attached(bar_spec());
    finish(&mut chart);
    let before = chart.render_state().cloned();
    let frames = chart.renderer().frames_rendered;

    let update = ChartSpecUpdate {
        label_text: Some(Some(vec!["a".to_owned()])),
        ..ChartSpecUpdate::data(vec![1.0, 2.0])
    };
    let err = chart.set_options(&update, &projector).expect_err("length mismatch");
    assert_eq!(err.config_field(), Some("labelText"));

    let bad_max = ChartSpecUpdate::default().with_max_values(vec![1.0, 2.0]);
    assert!(chart.set_options(&bad_max, &projector).is_err());

    assert_eq!(chart.render_state().cloned(), before);
    assert_eq!(chart.spec(), &bar_spec());
    assert_eq!(chart.renderer().frames_rendered, frames);
    assert!(!chart.is_animating());
}

#[test]
fn data_update_animates_from_the_committed_state() {
    let mut chart = attached(bar_spec());
    finish(&mut chart);
    let previous = chart.render_state().expect("state").shapes.clone();

    chart
        .set_options(&ChartSpecUpdate::data(vec![6.0, 6.0, 6.0]), &projector)
        .expect("update");
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.shapes, previous);

    finish(&mut chart);
    let state = chart.render_state().expect("state");
    assert!(state.shapes.iter().all(|shape| (shape.geometry.area() - 1_200.0).abs() <= 1e-9));
}

#[test]
fn mid_transition_update_restarts_from_what_is_on_screen() {
    let mut chart = attached(bar_spec().with_transition_time_ms(100.0)).with_easing(Easing::Linear);
    finish(&mut chart);

    chart
        .set_options(&ChartSpecUpdate::data(vec![6.0, 0.0, 6.0]), &projector)
        .expect("first update");
    chart.tick(40.0).expect("tick");
    let on_screen = chart.current_state().expect("current");

    chart
        .set_options(&ChartSpecUpdate::data(vec![1.0, 1.0, 1.0]), &projector)
        .expect("second update");
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.shapes, on_screen.shapes);
    assert!(chart.is_animating());
}

#[test]
fn type_switch_rebuilds_the_chart() {
    let mut chart = attached(bar_spec());
    finish(&mut chart);

    chart
        .set_options(&ChartSpecUpdate::chart_type(ChartType::Pie), &projector)
        .expect("switch");
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.origin, PixelPoint::new(120.0, 190.0));
    assert!(frame.guide_line.is_none());
    assert_eq!(frame.shapes.len(), 3);
    for shape in &frame.shapes {
        let ShapeGeometry::Sector(sector) = shape.geometry else {
            panic!("pie frames must only hold sectors");
        };
        assert_eq!(sector.sweep(), 0.0);
    }
}

#[test]
fn guide_line_is_kept_across_same_type_updates() {
    let mut chart = attached(bar_spec());
    finish(&mut chart);

    let update = ChartSpecUpdate {
        width: Some(100.0),
        ..ChartSpecUpdate::default()
    };
    chart.set_options(&update, &projector).expect("resize");
    let guide = chart
        .render_state()
        .and_then(|state| state.guide_line)
        .expect("guide line");
    assert_eq!(guide.x2, 63.0);
}

#[test]
fn view_reset_places_the_chart_without_animation() {
    let mut chart = attached(bar_spec());
    chart.view_reset(&shifted_projector).expect("reset");

    assert!(!chart.is_animating());
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.origin, PixelPoint::new(-10.0, -10.0));
    assert_eq!(frame, &chart.render_state().expect("state").to_frame());
}

#[test]
fn options_set_before_attach_are_only_stored() {
    let mut chart = MapChart::new(NullRenderer::default(), GeoPoint::new(0.0, 0.0), bar_spec())
        .expect("chart");
    chart
        .set_options(&ChartSpecUpdate::data(vec![5.0]), &projector)
        .expect("store");
    chart.view_reset(&projector).expect("noop");

    assert_eq!(chart.renderer().frames_rendered, 0);
    assert_eq!(chart.spec().data, vec![5.0]);
    assert!(!chart.is_on_map());
}

#[test]
fn remove_renders_an_empty_frame() {
    let mut chart = attached(bar_spec());
    chart.remove().expect("remove");

    assert!(!chart.is_on_map());
    assert!(!chart.is_animating());
    assert!(chart.renderer().last_frame.as_ref().expect("frame").is_empty());
}

#[test]
fn invalid_initial_spec_is_rejected() {
    let spec = ChartSpec::new(ChartType::Pie, vec![-1.0, 2.0]);
    let err = MapChart::new(NullRenderer::default(), GeoPoint::new(0.0, 0.0), spec)
        .err()
        .expect("negative pie data");
    assert_eq!(err.config_field(), Some("data"));
}

#[test]
fn non_finite_projection_is_reported() {
    let mut chart = MapChart::new(NullRenderer::default(), GeoPoint::new(0.0, 0.0), bar_spec())
        .expect("chart");
    let broken = |_: GeoPoint| -> ChartResult<PixelPoint> { Ok(PixelPoint::new(f64::NAN, 0.0)) };
    let err = chart.add_to_map(&broken).expect_err("nan projection");
    assert!(matches!(err, ChartError::Projection(_)));
    assert!(!chart.is_on_map());
}
