use criterion::{Criterion, criterion_group, criterion_main};
use mapchart::api::build_render_state;
use mapchart::core::{ChartBox, ChartType, GeometryBuilder, PixelPoint, normalize};
use mapchart::render::EstimatedTextMeasurer;
use mapchart::transition::{ChartTransition, RenderState};
use mapchart::ChartSpec;
use std::hint::black_box;

fn series(count: usize, phase: f64) -> Vec<f64> {
    (0..count)
        .map(|i| 50.0 + 45.0 * ((i as f64) * 0.37 + phase).sin())
        .collect()
}

fn bench_sector_geometry_1k(c: &mut Criterion) {
    let data = series(1_000, 0.0);
    let ratios = normalize(&data, &[100.0], ChartType::PolarArea).expect("valid ratios");
    let builder = GeometryBuilder::for_chart_type(ChartType::PolarArea);

    c.bench_function("sector_geometry_1k", |b| {
        b.iter(|| {
            let _ = builder.build(black_box(&ratios), black_box(ChartBox::new(120.0, 120.0)));
        })
    });
}

fn bench_render_state_with_labels(c: &mut Criterion) {
    let spec = ChartSpec::new(ChartType::Bar, series(64, 0.0))
        .with_max_value(100.0)
        .with_size(320.0, 120.0)
        .with_labels(true);
    let measurer = EstimatedTextMeasurer::default();

    c.bench_function("render_state_bar_64_labels", |b| {
        b.iter(|| {
            let _ = build_render_state(
                black_box(&spec),
                black_box(PixelPoint::new(400.0, 300.0)),
                &measurer,
            )
            .expect("render state");
        })
    });
}

fn bench_transition_frames(c: &mut Criterion) {
    let measurer = EstimatedTextMeasurer::default();
    let center = PixelPoint::new(400.0, 300.0);
    let before = ChartSpec::new(ChartType::Pie, series(256, 0.0)).with_max_value(100.0);
    let after = ChartSpec::new(ChartType::Pie, series(240, 1.3)).with_max_value(100.0);
    let previous: RenderState =
        build_render_state(&before, center, &measurer).expect("previous state");
    let next = build_render_state(&after, center, &measurer).expect("next state");

    c.bench_function("transition_pie_256_frames_60", |b| {
        b.iter(|| {
            let transition = ChartTransition::new(black_box(&previous), next.clone());
            for frame in 0..60 {
                let _ = transition.at(f64::from(frame) / 59.0);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_sector_geometry_1k,
    bench_render_state_with_labels,
    bench_transition_frames
);
criterion_main!(benches);
