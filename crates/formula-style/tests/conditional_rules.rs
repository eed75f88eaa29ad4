use formula_style::conditional::validators::{
    CellValueValidator, ColorScaleValidator, DataBarValidator, IconSetValidator,
    TimePeriodValidator, TopBottomValidator,
};
use formula_style::conditional::{
    presets, CellIsOperator, Cfvo, CfvoType, ColorScale, DataBar, IconSet, RuleKind, TimePeriod,
};
use formula_style::{Color, DiffStyleId, RuleInfo, RuleOption, RuleValidationError};
use pretty_assertions::assert_eq;

#[test]
fn container_without_validator_always_validates() {
    let empty = RuleInfo::new([]);
    assert_eq!(empty.validate(), Ok(()));
    assert!(!empty.has_validator());

    // Nonsense content still passes when nobody checks it.
    let odd = RuleInfo::new([
        RuleOption::Kind(RuleKind::Top10),
        RuleOption::Rank(0),
        RuleOption::Formulas(vec![String::new(); 5]),
    ]);
    assert_eq!(odd.validate(), Ok(()));
}

#[test]
fn attached_validator_verdict_is_returned_verbatim() {
    let reject = RuleInfo::new([RuleOption::validator(
        |rule: &RuleInfo| -> Result<(), RuleValidationError> {
            Err(RuleValidationError::Custom {
                reason: format!("priority {} not allowed", rule.rule().priority),
            })
        },
    )]);
    assert_eq!(
        reject.validate(),
        Err(RuleValidationError::Custom {
            reason: "priority 0 not allowed".to_string(),
        })
    );

    let accept = RuleInfo::new([
        RuleOption::Kind(RuleKind::Expression),
        RuleOption::validator(|_: &RuleInfo| -> Result<(), RuleValidationError> { Ok(()) }),
    ]);
    assert_eq!(accept.validate(), Ok(()));
}

#[test]
fn validation_is_rerunnable_after_reconfiguration() {
    let mut info = RuleInfo::new(presets::top(0));
    assert_eq!(
        info.validate(),
        Err(RuleValidationError::RankOutOfRange { rank: 0, max: 1000 })
    );
    assert_eq!(
        info.validate(),
        Err(RuleValidationError::RankOutOfRange { rank: 0, max: 1000 })
    );

    info.set([RuleOption::Rank(3)]);
    assert_eq!(info.validate(), Ok(()));
}

#[test]
fn top_rank_is_bounded_by_row_count() {
    let info = RuleInfo::new([
        RuleOption::Kind(RuleKind::Top10),
        RuleOption::Rank(25),
        RuleOption::validator(TopBottomValidator::with_row_count(20)),
    ]);
    assert_eq!(
        info.validate(),
        Err(RuleValidationError::RankOutOfRange { rank: 25, max: 20 })
    );
}

#[test]
fn validators_check_rule_kind() {
    let missing = RuleInfo::new([RuleOption::validator(CellValueValidator)]);
    assert_eq!(missing.validate(), Err(RuleValidationError::MissingKind));

    let wrong = RuleInfo::new([
        RuleOption::Kind(RuleKind::DataBar),
        RuleOption::validator(IconSetValidator),
    ]);
    assert_eq!(
        wrong.validate(),
        Err(RuleValidationError::KindMismatch {
            expected: "iconSet",
            actual: RuleKind::DataBar,
        })
    );
}

#[test]
fn between_needs_two_formulas() {
    let mut info = RuleInfo::new(presets::cell_value(CellIsOperator::Between, ["1"]));
    assert_eq!(
        info.validate(),
        Err(RuleValidationError::FormulaCount {
            expected: 2,
            actual: 1,
        })
    );

    info.set(presets::between("1", "10"));
    assert_eq!(info.validate(), Ok(()));

    let missing_op = RuleInfo::new([
        RuleOption::Kind(RuleKind::CellIs),
        RuleOption::formula("5"),
        RuleOption::validator(CellValueValidator),
    ]);
    assert_eq!(missing_op.validate(), Err(RuleValidationError::MissingOperator));
}

#[test]
fn color_scale_needs_two_or_three_ordered_stops() {
    let one = RuleInfo::new(presets::color_scale([(Cfvo::min(), Color::white())]));
    assert_eq!(
        one.validate(),
        Err(RuleValidationError::ColorScaleThresholds { count: 1 })
    );

    let three = RuleInfo::new(presets::color_scale([
        (Cfvo::min(), Color::rgb(0xF8, 0x69, 0x6B)),
        (Cfvo::percentile(50), Color::rgb(0xFF, 0xEB, 0x84)),
        (Cfvo::max(), Color::rgb(0x63, 0xBE, 0x7B)),
    ]));
    assert_eq!(three.validate(), Ok(()));

    let unordered = RuleInfo::new([
        RuleOption::Kind(RuleKind::ColorScale),
        RuleOption::ColorScale(ColorScale {
            cfvos: vec![Cfvo::number(10.0), Cfvo::number(1.0)],
            colors: vec![Color::white(), Color::black()],
        }),
        RuleOption::validator(ColorScaleValidator),
    ]);
    assert_eq!(
        unordered.validate(),
        Err(RuleValidationError::ThresholdOrder { index: 1 })
    );

    let mismatched = RuleInfo::new([
        RuleOption::Kind(RuleKind::ColorScale),
        RuleOption::ColorScale(ColorScale {
            cfvos: vec![Cfvo::min(), Cfvo::max()],
            colors: vec![Color::white()],
        }),
        RuleOption::validator(ColorScaleValidator),
    ]);
    assert_eq!(
        mismatched.validate(),
        Err(RuleValidationError::ColorScaleColors {
            thresholds: 2,
            colors: 1,
        })
    );
}

#[test]
fn thresholds_are_ordered_across_interleaved_types() {
    let mut info = RuleInfo::new(presets::icon_set(IconSet::ThreeArrows));
    let mut icons = info.rule().icon_set.clone().expect("icon set params");
    icons.cfvos = vec![Cfvo::number(10.0), Cfvo::percent(50), Cfvo::number(5.0)];
    info.set([RuleOption::IconSet(icons)]);
    assert_eq!(
        info.validate(),
        Err(RuleValidationError::ThresholdOrder { index: 2 })
    );
}

#[test]
fn min_and_max_thresholds_sit_at_the_ends() {
    let reversed = RuleInfo::new(presets::color_scale([
        (Cfvo::max(), Color::white()),
        (Cfvo::min(), Color::black()),
    ]));
    assert_eq!(
        reversed.validate(),
        Err(RuleValidationError::ThresholdPlacement {
            index: 0,
            type_: CfvoType::Max,
            expected: "last",
        })
    );

    let min_in_middle = RuleInfo::new(presets::color_scale([
        (Cfvo::percent(10), Color::white()),
        (Cfvo::min(), Color::rgb(0xFF, 0xEB, 0x84)),
        (Cfvo::max(), Color::black()),
    ]));
    assert_eq!(
        min_in_middle.validate(),
        Err(RuleValidationError::ThresholdPlacement {
            index: 1,
            type_: CfvoType::Min,
            expected: "first",
        })
    );
}

#[test]
fn time_period_preset_requires_a_period() {
    assert_eq!(
        RuleInfo::new(presets::time_period(TimePeriod::LastWeek)).validate(),
        Ok(())
    );

    let without_period = RuleInfo::new([
        RuleOption::Kind(RuleKind::TimePeriod),
        RuleOption::validator(TimePeriodValidator),
    ]);
    assert_eq!(
        without_period.validate(),
        Err(RuleValidationError::MissingTimePeriod)
    );
}

#[test]
fn data_bar_checks_lengths_and_bounds() {
    assert_eq!(RuleInfo::new(presets::data_bar(Color::rgb(0x63, 0x8E, 0xC6))).validate(), Ok(()));

    let bar = |min: Cfvo, max: Cfvo, min_length, max_length| {
        RuleInfo::new([
            RuleOption::Kind(RuleKind::DataBar),
            RuleOption::DataBar(DataBar {
                min,
                max,
                color: None,
                min_length,
                max_length,
                gradient: None,
            }),
            RuleOption::validator(DataBarValidator),
        ])
    };

    assert_eq!(
        bar(Cfvo::min(), Cfvo::max(), Some(80), Some(20)).validate(),
        Err(RuleValidationError::DataBarLength { min: 80, max: 20 })
    );
    assert_eq!(
        bar(Cfvo::max(), Cfvo::max(), None, None).validate(),
        Err(RuleValidationError::DataBarBound {
            bound: "min",
            type_: CfvoType::Max,
        })
    );

    let without_params = RuleInfo::new([
        RuleOption::Kind(RuleKind::DataBar),
        RuleOption::validator(DataBarValidator),
    ]);
    assert_eq!(
        without_params.validate(),
        Err(RuleValidationError::MissingParameters {
            kind: RuleKind::DataBar,
        })
    );
}

#[test]
fn icon_set_threshold_count_must_match() {
    let mut info = RuleInfo::new(presets::icon_set(IconSet::ThreeArrows));
    assert_eq!(info.validate(), Ok(()));

    info.set(presets::icon_set(IconSet::FourRating));
    assert_eq!(info.validate(), Ok(()));

    let mut icons = info.rule().icon_set.clone().expect("icon set params");
    icons.cfvos.pop();
    info.set([RuleOption::IconSet(icons)]);
    assert_eq!(
        info.validate(),
        Err(RuleValidationError::IconSetThresholds {
            set: IconSet::FourRating,
            expected: 4,
            actual: 3,
        })
    );
}

#[test]
fn text_and_average_presets_validate() {
    assert_eq!(RuleInfo::new(presets::contains_text("error")).validate(), Ok(()));
    assert_eq!(
        RuleInfo::new(presets::begins_with("")).validate(),
        Err(RuleValidationError::MissingText)
    );

    let mut below = RuleInfo::new(presets::below_average());
    assert_eq!(below.rule().above_average, Some(false));
    below.set([RuleOption::StdDev(4)]);
    assert_eq!(
        below.validate(),
        Err(RuleValidationError::StdDevOutOfRange { std_dev: 4 })
    );
}

#[test]
fn into_parts_hands_over_rule_and_style() {
    let mut info = RuleInfo::new(presets::expression("MOD(ROW(),2)=0"));
    info.set([RuleOption::Style(DiffStyleId::new(7)), RuleOption::Priority(2)]);
    assert_eq!(info.style(), Some(DiffStyleId::new(7)));

    let (rule, style) = info.into_parts();
    assert_eq!(rule.kind, Some(RuleKind::Expression));
    assert_eq!(rule.priority, 2);
    assert_eq!(rule.formulas, vec!["MOD(ROW(),2)=0".to_string()]);
    assert_eq!(style, Some(DiffStyleId::new(7)));
}

#[test]
fn validation_error_messages_are_descriptive() {
    assert_eq!(
        RuleValidationError::RankOutOfRange { rank: 0, max: 100 }.to_string(),
        "rank 0 is outside 1..=100"
    );
    assert_eq!(
        RuleValidationError::KindMismatch {
            expected: "top10",
            actual: RuleKind::CellIs,
        }
        .to_string(),
        "expected a top10 rule, found cellIs"
    );
}
