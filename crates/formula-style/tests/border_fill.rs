use formula_style::{
    border, fill, BorderEdge, BorderSegment, BorderStyle, Color, GradientType, PatternType,
    StyleFormat,
};

#[test]
fn border_presence_tracks_every_segment_combination() {
    for mask in 0u32..(1 << BorderEdge::ALL.len()) {
        let options: Vec<_> = BorderEdge::ALL
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, edge)| border::style(*edge, BorderStyle::Thin))
            .collect();
        let style = StyleFormat::new(options).canonicalize();

        match style.border() {
            None => assert_eq!(mask, 0, "border absent for mask {mask:#09b}"),
            Some(b) => {
                assert_ne!(mask, 0, "border present for empty mask");
                for (bit, edge) in BorderEdge::ALL.iter().enumerate() {
                    let expected = mask & (1 << bit) != 0;
                    assert_eq!(
                        b.segment(*edge).is_some(),
                        expected,
                        "edge {edge:?} for mask {mask:#09b}"
                    );
                }
            }
        }
    }
}

#[test]
fn left_only_border_nulls_the_other_six() {
    let style = StyleFormat::new([
        border::style(BorderEdge::Left, BorderStyle::Medium),
        border::color(BorderEdge::Left, Color::black()),
    ])
    .canonicalize();
    let b = style.border().expect("border present");

    assert_eq!(
        b.left,
        Some(BorderSegment {
            style: Some(BorderStyle::Medium),
            color: Some(Color::black()),
        })
    );
    for edge in &BorderEdge::ALL[1..] {
        assert!(b.segment(*edge).is_none(), "{edge:?} should be absent");
    }
}

#[test]
fn outline_sets_four_outer_segments() {
    let style = StyleFormat::new(border::outline(BorderStyle::Thick, Color::black())).canonicalize();
    let b = style.border().expect("border present");
    assert!(b.left.is_some() && b.right.is_some() && b.top.is_some() && b.bottom.is_some());
    assert!(b.diagonal.is_none() && b.vertical.is_none() && b.horizontal.is_none());
}

#[test]
fn pattern_only_fill_has_no_gradient() {
    let style = StyleFormat::new([
        fill::pattern(PatternType::Solid),
        fill::foreground(Color::rgb(0xFF, 0xFF, 0)),
    ])
    .canonicalize();
    let f = style.fill().expect("fill present");
    assert!(f.gradient.is_none());
    assert_eq!(
        f.pattern.as_ref().and_then(|p| p.pattern),
        Some(PatternType::Solid)
    );
}

#[test]
fn gradient_only_fill_has_no_pattern() {
    let style = StyleFormat::new([
        fill::gradient(GradientType::Linear),
        fill::degree(90.0),
        fill::stop(0.0, Color::white()),
        fill::stop(1.0, Color::rgb(0, 0, 0xFF)),
    ])
    .canonicalize();
    let f = style.fill().expect("fill present");
    assert!(f.pattern.is_none());
    let gradient = f.gradient.as_ref().expect("gradient present");
    assert_eq!(gradient.stops.len(), 2);
    assert_eq!(gradient.stops[1].color, Color::rgb(0, 0, 0xFF));
}

#[test]
fn both_fill_variants_can_be_present() {
    let style = StyleFormat::new([
        fill::background(Color::white()),
        fill::stop(0.5, Color::black()),
    ])
    .canonicalize();
    let f = style.fill().expect("fill present");
    assert!(f.pattern.is_some());
    assert!(f.gradient.is_some());
}

#[test]
fn untouched_fill_is_absent() {
    let style = StyleFormat::new([border::style(BorderEdge::Top, BorderStyle::Thin)]).canonicalize();
    assert!(style.fill().is_none());
}
