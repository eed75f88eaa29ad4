use formula_style::{
    alignment, border, fill, font, BorderEdge, BorderStyle, Color, FontOption, HorizontalAlignment,
    StyleFormat, StyleOption,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn options_deserialize_from_json() {
    let options: Vec<StyleOption> = serde_json::from_value(json!([
        {"font": {"name": "Calibri"}},
        {"font": {"size": 12.0}},
        {"font": "bold"},
        {"pattern": {"type": "solid"}},
        {"pattern": {"foreground": "#FFFFFF00"}},
        {"border": {"edge": "left", "segment": {"style": "thin"}}},
        {"number_format": {"code": "0.00%"}},
    ]))
    .expect("valid option list");

    let expected = StyleFormat::new([
        font::name("Calibri"),
        font::size(12.0),
        font::bold(),
        fill::pattern(formula_style::PatternType::Solid),
        fill::foreground(Color::rgb(0xFF, 0xFF, 0)),
        border::style(BorderEdge::Left, BorderStyle::Thin),
        formula_style::number_format::code("0.00%"),
    ]);
    assert_eq!(StyleFormat::new(options), expected);
}

#[test]
fn malformed_color_option_is_rejected() {
    let err = serde_json::from_value::<StyleOption>(json!({"font": {"color": "red"}}))
        .expect_err("color must be hex");
    assert!(err.to_string().contains("'#'"), "{err}");
}

#[test]
fn snapshot_serializes_only_present_slots() {
    let style = StyleFormat::new([
        StyleOption::Font(FontOption::Italic),
        font::color(Color::rgb(0x12, 0x34, 0x56)),
        border::style(BorderEdge::Bottom, BorderStyle::Double),
    ])
    .canonicalize();

    assert_eq!(
        serde_json::to_value(&style).expect("serialize"),
        json!({
            "font": {"italic": true, "color": "#FF123456"},
            "border": {"bottom": {"style": "double"}},
        })
    );
}

#[test]
fn empty_snapshot_serializes_to_empty_object() {
    let style = StyleFormat::new([]).canonicalize();
    assert_eq!(serde_json::to_value(&style).expect("serialize"), json!({}));
}

#[test]
fn multi_word_variants_use_snake_case() {
    let options: Vec<StyleOption> = serde_json::from_value(json!([
        {"alignment": {"horizontal": "center_continuous"}},
        {"border": {"edge": "top", "segment": {"style": "medium_dash_dot"}}},
        {"pattern": {"type": "dark_gray"}},
    ]))
    .expect("snake_case variant names");

    let expected = StyleFormat::new([
        alignment::horizontal(HorizontalAlignment::CenterContinuous),
        border::style(BorderEdge::Top, BorderStyle::MediumDashDot),
        fill::pattern(formula_style::PatternType::DarkGray),
    ]);
    assert_eq!(StyleFormat::new(options), expected);
}
