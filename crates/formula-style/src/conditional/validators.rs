//! Built-in validators, one per family of rule kinds.
//!
//! They check the shape of a rule (required parameters, counts, ranges) and
//! never evaluate formulas.

use super::{Cfvo, CfvoType, ConditionalRule, RuleInfo, RuleKind, RuleValidator};
use crate::RuleValidationError;

/// Largest rank Excel accepts for `top10` rules.
pub const MAX_TOP_RANK: u32 = 1000;
/// Largest rank of a percent `top10` rule.
pub const MAX_TOP_PERCENT: u32 = 100;

const DEFAULT_DATA_BAR_MIN_LENGTH: u8 = 10;
const DEFAULT_DATA_BAR_MAX_LENGTH: u8 = 90;

fn expect_kind(
    rule: &ConditionalRule,
    kinds: &[RuleKind],
    expected: &'static str,
) -> Result<RuleKind, RuleValidationError> {
    let kind = rule.kind.ok_or(RuleValidationError::MissingKind)?;
    if kinds.contains(&kind) {
        Ok(kind)
    } else {
        Err(RuleValidationError::KindMismatch {
            expected,
            actual: kind,
        })
    }
}

fn expect_formulas(rule: &ConditionalRule, count: usize) -> Result<(), RuleValidationError> {
    if rule.formulas.len() != count {
        return Err(RuleValidationError::FormulaCount {
            expected: count,
            actual: rule.formulas.len(),
        });
    }
    match rule.formulas.iter().position(|f| f.trim().is_empty()) {
        Some(index) => Err(RuleValidationError::EmptyFormula { index }),
        None => Ok(()),
    }
}

/// `cellIs` rules: an operator plus one formula, or two for (not) between.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellValueValidator;

impl RuleValidator for CellValueValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        expect_kind(rule, &[RuleKind::CellIs], "cellIs")?;
        let operator = rule.operator.ok_or(RuleValidationError::MissingOperator)?;
        expect_formulas(rule, operator.operand_count())
    }
}

/// `expression` rules: exactly one non-empty formula.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormulaValidator;

impl RuleValidator for FormulaValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        expect_kind(rule, &[RuleKind::Expression], "expression")?;
        expect_formulas(rule, 1)
    }
}

/// `top10` rules.
///
/// When `row_count` is known the rank may not exceed it.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopBottomValidator {
    pub row_count: Option<u32>,
}

impl TopBottomValidator {
    pub fn with_row_count(row_count: u32) -> Self {
        Self {
            row_count: Some(row_count),
        }
    }
}

impl RuleValidator for TopBottomValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        expect_kind(rule, &[RuleKind::Top10], "top10")?;
        let rank = rule.rank.ok_or(RuleValidationError::MissingRank)?;

        let mut max = if rule.percent {
            MAX_TOP_PERCENT
        } else {
            MAX_TOP_RANK
        };
        if !rule.percent {
            if let Some(rows) = self.row_count {
                max = max.min(rows);
            }
        }
        if rank == 0 || rank > max {
            return Err(RuleValidationError::RankOutOfRange { rank, max });
        }
        Ok(())
    }
}

/// Numeric value of a threshold that can be compared with its neighbours.
fn comparable_value(cfvo: &Cfvo) -> Option<(CfvoType, f64)> {
    match cfvo.type_ {
        CfvoType::Number | CfvoType::Percent | CfvoType::Percentile => cfvo
            .value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .map(|v| (cfvo.type_, v)),
        _ => None,
    }
}

/// Thresholds must run low to high: `min` only first, `max` only last, and
/// each numeric threshold no lower than the previous one of the same type.
fn expect_ascending(cfvos: &[Cfvo]) -> Result<(), RuleValidationError> {
    let last = cfvos.len().saturating_sub(1);
    let mut previous: Vec<(CfvoType, f64)> = Vec::new();
    for (index, cfvo) in cfvos.iter().enumerate() {
        let misplaced = match cfvo.type_ {
            CfvoType::Min | CfvoType::AutoMin if index != 0 => Some("first"),
            CfvoType::Max | CfvoType::AutoMax if index != last => Some("last"),
            _ => None,
        };
        if let Some(expected) = misplaced {
            return Err(RuleValidationError::ThresholdPlacement {
                index,
                type_: cfvo.type_,
                expected,
            });
        }

        let Some((type_, value)) = comparable_value(cfvo) else {
            continue;
        };
        match previous.iter_mut().find(|(seen, _)| *seen == type_) {
            Some((_, prev)) if value < *prev => {
                return Err(RuleValidationError::ThresholdOrder { index });
            }
            Some((_, prev)) => *prev = value,
            None => previous.push((type_, value)),
        }
    }
    Ok(())
}

/// `colorScale` rules: 2 or 3 ordered thresholds with one color each.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorScaleValidator;

impl RuleValidator for ColorScaleValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        let kind = expect_kind(rule, &[RuleKind::ColorScale], "colorScale")?;
        let scale = rule
            .color_scale
            .as_ref()
            .ok_or(RuleValidationError::MissingParameters { kind })?;

        let count = scale.cfvos.len();
        if !(2..=3).contains(&count) {
            return Err(RuleValidationError::ColorScaleThresholds { count });
        }
        if scale.colors.len() != count {
            return Err(RuleValidationError::ColorScaleColors {
                thresholds: count,
                colors: scale.colors.len(),
            });
        }
        expect_ascending(&scale.cfvos)
    }
}

/// `dataBar` rules: sane bar lengths and bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataBarValidator;

impl RuleValidator for DataBarValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        let kind = expect_kind(rule, &[RuleKind::DataBar], "dataBar")?;
        let bar = rule
            .data_bar
            .as_ref()
            .ok_or(RuleValidationError::MissingParameters { kind })?;

        let min = bar.min_length.unwrap_or(DEFAULT_DATA_BAR_MIN_LENGTH);
        let max = bar.max_length.unwrap_or(DEFAULT_DATA_BAR_MAX_LENGTH);
        if min > max || max > 100 {
            return Err(RuleValidationError::DataBarLength { min, max });
        }
        if matches!(bar.min.type_, CfvoType::Max | CfvoType::AutoMax) {
            return Err(RuleValidationError::DataBarBound {
                bound: "min",
                type_: bar.min.type_,
            });
        }
        if matches!(bar.max.type_, CfvoType::Min | CfvoType::AutoMin) {
            return Err(RuleValidationError::DataBarBound {
                bound: "max",
                type_: bar.max.type_,
            });
        }
        expect_ascending(&[bar.min.clone(), bar.max.clone()])
    }
}

/// `iconSet` rules: one ordered threshold per icon.
#[derive(Clone, Copy, Debug, Default)]
pub struct IconSetValidator;

impl RuleValidator for IconSetValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        let kind = expect_kind(rule, &[RuleKind::IconSet], "iconSet")?;
        let icons = rule
            .icon_set
            .as_ref()
            .ok_or(RuleValidationError::MissingParameters { kind })?;

        let expected = icons.set.icon_count();
        if icons.cfvos.len() != expected {
            return Err(RuleValidationError::IconSetThresholds {
                set: icons.set,
                expected,
                actual: icons.cfvos.len(),
            });
        }
        expect_ascending(&icons.cfvos)
    }
}

/// Text rules (`containsText`, `notContainsText`, `beginsWith`, `endsWith`).
#[derive(Clone, Copy, Debug, Default)]
pub struct TextValidator;

impl RuleValidator for TextValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        expect_kind(
            rule,
            &[
                RuleKind::ContainsText,
                RuleKind::NotContainsText,
                RuleKind::BeginsWith,
                RuleKind::EndsWith,
            ],
            "text",
        )?;
        match rule.text.as_deref() {
            Some(text) if !text.is_empty() => Ok(()),
            _ => Err(RuleValidationError::MissingText),
        }
    }
}

/// `timePeriod` rules: a period is required.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimePeriodValidator;

impl RuleValidator for TimePeriodValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        expect_kind(rule, &[RuleKind::TimePeriod], "timePeriod")?;
        match rule.time_period {
            Some(_) => Ok(()),
            None => Err(RuleValidationError::MissingTimePeriod),
        }
    }
}

/// `aboveAverage` rules: `std_dev`, when set, is 1, 2 or 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageValidator;

impl RuleValidator for AverageValidator {
    fn validate(&self, info: &RuleInfo) -> Result<(), RuleValidationError> {
        let rule = info.rule();
        expect_kind(rule, &[RuleKind::AboveAverage], "aboveAverage")?;
        match rule.std_dev {
            Some(std_dev) if !(1..=3).contains(&std_dev) => {
                Err(RuleValidationError::StdDevOutOfRange { std_dev })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditional::RuleOption;

    #[test]
    fn ascending_check_ignores_mixed_types() {
        let cfvos = [Cfvo::percent(90), Cfvo::number(5.0), Cfvo::max()];
        assert_eq!(expect_ascending(&cfvos), Ok(()));

        let cfvos = [Cfvo::number(10.0), Cfvo::number(5.0)];
        assert_eq!(
            expect_ascending(&cfvos),
            Err(RuleValidationError::ThresholdOrder { index: 1 })
        );
    }

    #[test]
    fn ascending_check_compares_across_other_types() {
        let cfvos = [Cfvo::number(10.0), Cfvo::percent(50), Cfvo::number(5.0)];
        assert_eq!(
            expect_ascending(&cfvos),
            Err(RuleValidationError::ThresholdOrder { index: 2 })
        );
    }

    #[test]
    fn time_period_is_required() {
        let info = RuleInfo::new([RuleOption::Kind(RuleKind::TimePeriod)]);
        assert_eq!(
            TimePeriodValidator.validate(&info),
            Err(RuleValidationError::MissingTimePeriod)
        );
    }

    #[test]
    fn percent_rank_is_capped_at_hundred() {
        let info = RuleInfo::new([
            RuleOption::Kind(RuleKind::Top10),
            RuleOption::Rank(101),
            RuleOption::Percent,
        ]);
        assert_eq!(
            TopBottomValidator::default().validate(&info),
            Err(RuleValidationError::RankOutOfRange { rank: 101, max: 100 })
        );
    }

    #[test]
    fn blank_formula_is_reported_by_index() {
        let info = RuleInfo::new([
            RuleOption::Kind(RuleKind::Expression),
            RuleOption::formula("  "),
        ]);
        assert_eq!(
            FormulaValidator.validate(&info),
            Err(RuleValidationError::EmptyFormula { index: 0 })
        );
    }
}
