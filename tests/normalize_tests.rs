use mapchart::ChartError;
use mapchart::api::ChartSpec;
use mapchart::core::{ChartType, LabelTextOptions, format_significant, normalize, series_labels};

#[test]
fn shared_max_value_scales_every_series() {
    let ratios = normalize(&[3.0, 1.0, 2.0], &[6.0], ChartType::Bar).expect("normalize");
    assert_eq!(ratios.as_slice(), &[3.0 / 6.0, 1.0 / 6.0, 2.0 / 6.0]);
}

#[test]
fn per_series_max_values_use_modular_indexing() {
    let ratios = normalize(&[5.0, 10.0, 1.0], &[10.0, 40.0, 4.0], ChartType::Pie).expect("normalize");
    assert_eq!(ratios.as_slice(), &[0.5, 0.25, 0.25]);
}

#[test]
fn mismatched_max_values_length_names_the_field() {
    let err = normalize(&[1.0, 2.0, 3.0], &[1.0, 2.0], ChartType::Bar)
        .expect_err("two maxima for three values");
    assert_eq!(err.config_field(), Some("maxValues"));
    assert!(format!("{err}").contains("maxValues"));
}

#[test]
fn negative_data_is_allowed_for_bars_only() {
    let ratios = normalize(&[-2.0, 3.0], &[3.0], ChartType::Bar).expect("bar accepts negatives");
    assert!((ratios.as_slice()[0] + 2.0 / 3.0).abs() <= 1e-12);
    assert_eq!(ratios.as_slice()[1], 1.0);

    for chart_type in [ChartType::Pie, ChartType::PolarRadius, ChartType::PolarArea] {
        let err = normalize(&[-2.0, 3.0], &[3.0], chart_type).expect_err("negative sector");
        assert_eq!(err.config_field(), Some("data"));
    }
}

#[test]
fn empty_data_zero_max_and_non_finite_values_are_rejected() {
    assert!(matches!(
        normalize(&[], &[1.0], ChartType::Bar),
        Err(ChartError::Config { field: "data", .. })
    ));
    assert!(matches!(
        normalize(&[1.0], &[0.0], ChartType::Bar),
        Err(ChartError::Config {
            field: "maxValues",
            ..
        })
    ));
    assert!(matches!(
        normalize(&[f64::NAN], &[1.0], ChartType::Bar),
        Err(ChartError::Config { field: "data", .. })
    ));
}

#[test]
fn labels_are_absent_when_disabled() {
    let labels = series_labels(
        &[1.0, 2.0],
        LabelTextOptions {
            show_labels: false,
            label_text: None,
            precision: 0,
        },
    )
    .expect("labels");
    assert!(labels.is_none());
}

#[test]
fn labels_round_raw_values_to_significant_digits() {
    let labels = series_labels(
        &[1234.5, 0.012345, 7.0],
        LabelTextOptions {
            show_labels: true,
            label_text: None,
            precision: 2,
        },
    )
    .expect("labels")
    .expect("enabled");
    assert_eq!(labels, vec!["1.2e+3", "0.012", "7.0"]);
}

#[test]
fn custom_label_text_must_match_data_length() {
    let text = vec!["a".to_owned()];
    let err = series_labels(
        &[1.0, 2.0],
        LabelTextOptions {
            show_labels: true,
            label_text: Some(&text),
            precision: 0,
        },
    )
    .expect_err("length mismatch");
    assert_eq!(err.config_field(), Some("labelText"));
}

#[test]
fn spec_normalize_combines_ratios_and_labels() {
    let spec = ChartSpec::new(ChartType::Bar, vec![3.0, 1.0, 2.0])
        .with_max_value(6.0)
        .with_labels(true);
    let normalized = spec.normalize().expect("normalize");
    assert_eq!(normalized.ratios.len(), 3);
    assert_eq!(
        normalized.labels,
        Some(vec!["3".to_owned(), "1".to_owned(), "2".to_owned()])
    );
}

#[test]
fn label_rounding_breaks_ties_upward_and_drops_negative_zero_sign() {
    assert_eq!(format_significant(2.5, 1), "3");
    assert_eq!(format_significant(0.125, 2), "0.13");
    assert_eq!(format_significant(-0.0, 2), "0.0");
    assert_eq!(format_significant(1e21, 0), "1e+21");
}
