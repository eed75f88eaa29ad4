use thiserror::Error;

use crate::conditional::{CfvoType, IconSet, RuleKind};

/// Reasons a conditional rule container was rejected by its validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleValidationError {
    #[error("conditional rule has no kind")]
    MissingKind,
    #[error("expected a {expected} rule, found {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: RuleKind,
    },
    #[error("cellIs rule requires an operator")]
    MissingOperator,
    #[error("rule requires {expected} formula(s), found {actual}")]
    FormulaCount { expected: usize, actual: usize },
    #[error("formula {index} is empty")]
    EmptyFormula { index: usize },
    #[error("top/bottom rule requires a rank")]
    MissingRank,
    #[error("rank {rank} is outside 1..={max}")]
    RankOutOfRange { rank: u32, max: u32 },
    #[error("{kind} rule is missing its parameters")]
    MissingParameters { kind: RuleKind },
    #[error("color scale requires 2 or 3 thresholds, found {count}")]
    ColorScaleThresholds { count: usize },
    #[error("color scale has {thresholds} thresholds but {colors} colors")]
    ColorScaleColors { thresholds: usize, colors: usize },
    #[error("threshold {index} is lower than the threshold before it")]
    ThresholdOrder { index: usize },
    #[error("threshold {index} of type {type_:?} must be the {expected} threshold")]
    ThresholdPlacement {
        index: usize,
        type_: CfvoType,
        expected: &'static str,
    },
    #[error("data bar length {min}..{max} is invalid (expected min <= max <= 100)")]
    DataBarLength { min: u8, max: u8 },
    #[error("data bar {bound} threshold cannot be of type {type_:?}")]
    DataBarBound {
        bound: &'static str,
        type_: CfvoType,
    },
    #[error("icon set {set:?} needs {expected} thresholds, found {actual}")]
    IconSetThresholds {
        set: IconSet,
        expected: usize,
        actual: usize,
    },
    #[error("text rule requires non-empty text")]
    MissingText,
    #[error("time period rule requires a period")]
    MissingTimePeriod,
    #[error("standard deviation {std_dev} is outside 1..=3")]
    StdDevOutOfRange { std_dev: u32 },
    #[error("{reason}")]
    Custom { reason: String },
}
