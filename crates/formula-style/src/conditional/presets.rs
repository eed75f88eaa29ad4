//! Option bundles for common rule kinds.
//!
//! Each preset sets the rule kind, its parameters and the matching validator:
//!
//! ```
//! use formula_style::conditional::{presets, RuleInfo, RuleOption};
//! use formula_style::DiffStyleId;
//!
//! let mut rule = RuleInfo::new(presets::top(10));
//! rule.set([RuleOption::Style(DiffStyleId::new(0)), RuleOption::Priority(1)]);
//! assert!(rule.validate().is_ok());
//! ```

use super::validators::{
    AverageValidator, CellValueValidator, ColorScaleValidator, DataBarValidator,
    FormulaValidator, IconSetValidator, TextValidator, TimePeriodValidator, TopBottomValidator,
};
use super::{
    CellIsOperator, Cfvo, ColorScale, DataBar, IconSet, IconSetRule, RuleKind, RuleOption,
    TimePeriod,
};
use crate::Color;

pub fn cell_value<I, S>(operator: CellIsOperator, formulas: I) -> Vec<RuleOption>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    vec![
        RuleOption::Kind(RuleKind::CellIs),
        RuleOption::Operator(operator),
        RuleOption::Formulas(formulas.into_iter().map(Into::into).collect()),
        RuleOption::validator(CellValueValidator),
    ]
}

pub fn between(low: impl Into<String>, high: impl Into<String>) -> Vec<RuleOption> {
    let formulas: [String; 2] = [low.into(), high.into()];
    cell_value(CellIsOperator::Between, formulas)
}

pub fn expression(formula: impl Into<String>) -> Vec<RuleOption> {
    vec![
        RuleOption::Kind(RuleKind::Expression),
        RuleOption::formula(formula),
        RuleOption::validator(FormulaValidator),
    ]
}

pub fn top(rank: u32) -> Vec<RuleOption> {
    vec![
        RuleOption::Kind(RuleKind::Top10),
        RuleOption::Rank(rank),
        RuleOption::validator(TopBottomValidator::default()),
    ]
}

pub fn top_percent(rank: u32) -> Vec<RuleOption> {
    let mut options = top(rank);
    options.push(RuleOption::Percent);
    options
}

pub fn bottom(rank: u32) -> Vec<RuleOption> {
    let mut options = top(rank);
    options.push(RuleOption::Bottom);
    options
}

pub fn bottom_percent(rank: u32) -> Vec<RuleOption> {
    let mut options = bottom(rank);
    options.push(RuleOption::Percent);
    options
}

pub fn above_average() -> Vec<RuleOption> {
    vec![
        RuleOption::Kind(RuleKind::AboveAverage),
        RuleOption::validator(AverageValidator),
    ]
}

pub fn below_average() -> Vec<RuleOption> {
    let mut options = above_average();
    options.push(RuleOption::AboveAverage(false));
    options
}

/// Two- or three-color scale; `stops` pairs each threshold with its color.
pub fn color_scale(stops: impl IntoIterator<Item = (Cfvo, Color)>) -> Vec<RuleOption> {
    let (cfvos, colors) = stops.into_iter().unzip();
    vec![
        RuleOption::Kind(RuleKind::ColorScale),
        RuleOption::ColorScale(ColorScale { cfvos, colors }),
        RuleOption::validator(ColorScaleValidator),
    ]
}

pub fn data_bar(color: Color) -> Vec<RuleOption> {
    vec![
        RuleOption::Kind(RuleKind::DataBar),
        RuleOption::DataBar(DataBar {
            min: Cfvo::min(),
            max: Cfvo::max(),
            color: Some(color),
            min_length: None,
            max_length: None,
            gradient: None,
        }),
        RuleOption::validator(DataBarValidator),
    ]
}

/// Icon set with evenly spread percent thresholds.
pub fn icon_set(set: IconSet) -> Vec<RuleOption> {
    let count = set.icon_count();
    let cfvos = (0..count)
        .map(|i| Cfvo::percent((i * 100 / count) as u8))
        .collect();
    vec![
        RuleOption::Kind(RuleKind::IconSet),
        RuleOption::IconSet(IconSetRule {
            set,
            cfvos,
            show_value: true,
            reverse: false,
        }),
        RuleOption::validator(IconSetValidator),
    ]
}

fn text_rule(kind: RuleKind, text: impl Into<String>) -> Vec<RuleOption> {
    vec![
        RuleOption::Kind(kind),
        RuleOption::Text(text.into()),
        RuleOption::validator(TextValidator),
    ]
}

pub fn contains_text(text: impl Into<String>) -> Vec<RuleOption> {
    text_rule(RuleKind::ContainsText, text)
}

pub fn not_contains_text(text: impl Into<String>) -> Vec<RuleOption> {
    text_rule(RuleKind::NotContainsText, text)
}

pub fn begins_with(text: impl Into<String>) -> Vec<RuleOption> {
    text_rule(RuleKind::BeginsWith, text)
}

pub fn ends_with(text: impl Into<String>) -> Vec<RuleOption> {
    text_rule(RuleKind::EndsWith, text)
}

pub fn time_period(period: TimePeriod) -> Vec<RuleOption> {
    vec![
        RuleOption::Kind(RuleKind::TimePeriod),
        RuleOption::TimePeriod(period),
        RuleOption::validator(TimePeriodValidator),
    ]
}

pub fn duplicate_values() -> Vec<RuleOption> {
    vec![RuleOption::Kind(RuleKind::DuplicateValues)]
}

pub fn unique_values() -> Vec<RuleOption> {
    vec![RuleOption::Kind(RuleKind::UniqueValues)]
}
