use mapchart::core::ChartType;
use mapchart::render::{Color, LabelColorMode, category10};
use mapchart::{ChartSpec, ChartSpecUpdate};

#[test]
fn empty_json_yields_defaults() {
    let spec = ChartSpec::from_json_str("{}").expect("parse");
    assert_eq!(spec, ChartSpec::default());
    assert_eq!(spec.chart_type, ChartType::Bar);
    assert_eq!(spec.data, vec![1.0]);
    assert_eq!(spec.max_values, vec![1.0]);
    assert_eq!((spec.width, spec.height), (60.0, 60.0));
    assert_eq!(spec.fill_color, Color::parse("#4281e5").expect("color"));
    assert_eq!(spec.color_palette, category10());
    assert_eq!(spec.label_color, LabelColorMode::Auto);
    assert_eq!(spec.label_style, "font-family:sans-serif");
    assert_eq!(spec.transition_time_ms, 750.0);
    spec.validate().expect("defaults are valid");
}

#[test]
fn host_option_names_are_accepted() {
    let spec = ChartSpec::from_json_str(
        r##"{
            "type": "polar-area",
            "data": [10, 20],
            "maxValues": [20, 40],
            "colorPalette": ["#f00", "#00ff00"],
            "showLabels": true,
            "labelColor": "#112233",
            "labelPrecision": 2,
            "transitionTime": 0
        }"##,
    )
    .expect("parse");

    assert_eq!(spec.chart_type, ChartType::PolarArea);
    assert_eq!(spec.color_palette, vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)]);
    assert_eq!(
        spec.label_color,
        LabelColorMode::Fixed(Color::rgb8(0x11, 0x22, 0x33))
    );
    assert_eq!(spec.transition_time_ms, 0.0);

    let normalized = spec.normalize().expect("normalize");
    assert_eq!(normalized.ratios.as_slice(), &[0.5, 0.5]);
    assert_eq!(
        normalized.labels,
        Some(vec!["10".to_owned(), "20".to_owned()])
    );
}

#[test]
fn json_round_trip_preserves_the_spec() {
    let spec = ChartSpec::new(ChartType::PolarRadius, vec![1.0, 2.5, 4.0])
        .with_max_value(5.0)
        .with_size(80.0, 40.0)
        .with_labels(true)
        .with_label_text(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);

    let json = spec.to_json_pretty().expect("serialize");
    assert!(json.contains("\"type\": \"polar-radius\""));
    assert!(json.contains("\"maxValues\""));
    assert!(json.contains("\"transitionTime\""));

    let parsed = ChartSpec::from_json_str(&json).expect("parse");
    assert_eq!(parsed, spec);
}

#[test]
fn unknown_chart_type_fails_to_parse() {
    let err = ChartSpec::from_json_str(r#"{"type": "donut"}"#).expect_err("unknown type");
    assert!(format!("{err}").contains("chart spec json"));
}

#[test]
fn validate_names_the_offending_field() {
    let cases = [
        (ChartSpec::default().with_size(-1.0, 60.0), "width"),
        (ChartSpec::default().with_size(60.0, f64::NAN), "height"),
        (
            ChartSpec {
                opacity: 1.5,
                ..ChartSpec::default()
            },
            "opacity",
        ),
        (
            ChartSpec {
                label_min_size: 30.0,
                ..ChartSpec::default()
            },
            "labelMinSize",
        ),
        (
            ChartSpec {
                label_padding: -1.0,
                ..ChartSpec::default()
            },
            "labelPadding",
        ),
        (
            ChartSpec::default().with_transition_time_ms(f64::INFINITY),
            "transitionTime",
        ),
        (
            ChartSpec::default().with_label_text(vec!["a".to_owned(), "b".to_owned()]),
            "labelText",
        ),
    ];

    for (spec, field) in cases {
        let err = spec.validate().expect_err(field);
        assert_eq!(err.config_field(), Some(field), "{err}");
    }
}

#[test]
fn invalid_color_strings_are_rejected() {
    assert!(ChartSpec::from_json_str(r#"{"fillColor": "tomatoish"}"#).is_err());
    assert!(ChartSpec::from_json_str(r##"{"labelColor": "#12"}"##).is_err());
}

#[test]
fn css_color_keywords_are_accepted() {
    let spec = ChartSpec::from_json_str(
        r##"{"fillColor": "tomato", "colorPalette": ["red", "Navy", "#2ca02c"]}"##,
    )
    .expect("parse");

    assert_eq!(spec.fill_color.to_hex(), "#ff6347");
    let hex: Vec<String> = spec.color_palette.iter().map(|color| color.to_hex()).collect();
    assert_eq!(hex, vec!["#ff0000", "#000080", "#2ca02c"]);
}

#[test]
fn update_merges_only_present_fields() {
    let base = ChartSpec::new(ChartType::Bar, vec![1.0, 2.0]).with_max_value(4.0);
    let update = ChartSpecUpdate::from_json_str(r#"{"data": 3, "height": 90}"#).expect("parse");
    let merged = update.apply_to(&base);

    assert_eq!(merged.data, vec![3.0]);
    assert_eq!(merged.height, 90.0);
    assert_eq!(merged.max_values, vec![4.0]);
    assert_eq!(merged.width, base.width);
    assert_eq!(merged.chart_type, ChartType::Bar);

    let switched = ChartSpecUpdate::chart_type(ChartType::Pie).apply_to(&merged);
    assert_eq!(switched.chart_type, ChartType::Pie);
    assert_eq!(switched.data, merged.data);
}
