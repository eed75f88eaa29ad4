use core::fmt;

use serde::{Deserialize, Serialize};

use crate::record::is_false;
use crate::Color;

/// Conditional formatting rule types (`cfRule/@type`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    CellIs,
    Expression,
    ColorScale,
    DataBar,
    IconSet,
    Top10,
    AboveAverage,
    UniqueValues,
    DuplicateValues,
    ContainsText,
    NotContainsText,
    BeginsWith,
    EndsWith,
    ContainsBlanks,
    NotContainsBlanks,
    ContainsErrors,
    NotContainsErrors,
    TimePeriod,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CellIs => "cellIs",
            Self::Expression => "expression",
            Self::ColorScale => "colorScale",
            Self::DataBar => "dataBar",
            Self::IconSet => "iconSet",
            Self::Top10 => "top10",
            Self::AboveAverage => "aboveAverage",
            Self::UniqueValues => "uniqueValues",
            Self::DuplicateValues => "duplicateValues",
            Self::ContainsText => "containsText",
            Self::NotContainsText => "notContainsText",
            Self::BeginsWith => "beginsWith",
            Self::EndsWith => "endsWith",
            Self::ContainsBlanks => "containsBlanks",
            Self::NotContainsBlanks => "notContainsBlanks",
            Self::ContainsErrors => "containsErrors",
            Self::NotContainsErrors => "notContainsErrors",
            Self::TimePeriod => "timePeriod",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellIsOperator {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Equal,
    NotEqual,
    Between,
    NotBetween,
}

impl CellIsOperator {
    /// Number of formulas (thresholds) the operator compares against.
    pub fn operand_count(self) -> usize {
        match self {
            CellIsOperator::Between | CellIsOperator::NotBetween => 2,
            _ => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Today,
    Yesterday,
    Tomorrow,
    Last7Days,
    ThisWeek,
    LastWeek,
    NextWeek,
    ThisMonth,
    LastMonth,
    NextMonth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CfvoType {
    Min,
    Max,
    Number,
    Percent,
    Percentile,
    Formula,
    AutoMin,
    AutoMax,
}

/// A conditional format value object: one threshold of a scale, bar or icon set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cfvo {
    pub type_: CfvoType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Cfvo {
    pub fn new(type_: CfvoType, value: Option<String>) -> Self {
        Self { type_, value }
    }

    pub fn min() -> Self {
        Self::new(CfvoType::Min, None)
    }

    pub fn max() -> Self {
        Self::new(CfvoType::Max, None)
    }

    pub fn number(value: f64) -> Self {
        Self::new(CfvoType::Number, Some(value.to_string()))
    }

    pub fn percent(value: u8) -> Self {
        Self::new(CfvoType::Percent, Some(value.to_string()))
    }

    pub fn percentile(value: u8) -> Self {
        Self::new(CfvoType::Percentile, Some(value.to_string()))
    }

    pub fn formula(formula: impl Into<String>) -> Self {
        Self::new(CfvoType::Formula, Some(formula.into()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScale {
    pub cfvos: Vec<Cfvo>,
    pub colors: Vec<Color>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataBar {
    pub min: Cfvo,
    pub max: Cfvo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    // x14 extensions (Excel 2010+)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconSet {
    ThreeArrows,
    ThreeArrowsGray,
    ThreeFlags,
    ThreeTrafficLights1,
    ThreeTrafficLights2,
    ThreeSigns,
    ThreeSymbols,
    ThreeSymbols2,
    FourArrows,
    FourArrowsGray,
    FourRedToBlack,
    FourRating,
    FourTrafficLights,
    FiveArrows,
    FiveArrowsGray,
    FiveRating,
    FiveQuarters,
}

impl IconSet {
    pub fn icon_count(self) -> usize {
        match self {
            IconSet::ThreeArrows
            | IconSet::ThreeArrowsGray
            | IconSet::ThreeFlags
            | IconSet::ThreeTrafficLights1
            | IconSet::ThreeTrafficLights2
            | IconSet::ThreeSigns
            | IconSet::ThreeSymbols
            | IconSet::ThreeSymbols2 => 3,
            IconSet::FourArrows
            | IconSet::FourArrowsGray
            | IconSet::FourRedToBlack
            | IconSet::FourRating
            | IconSet::FourTrafficLights => 4,
            IconSet::FiveArrows
            | IconSet::FiveArrowsGray
            | IconSet::FiveRating
            | IconSet::FiveQuarters => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconSetRule {
    pub set: IconSet,
    pub cfvos: Vec<Cfvo>,
    #[serde(default = "crate::serde_defaults::default_true")]
    pub show_value: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,
}

/// Rule-kind specific parameters of a conditional formatting rule.
///
/// Formulas and thresholds are stored as text and never evaluated here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionalRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RuleKind>,
    #[serde(default)]
    pub priority: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub stop_if_true: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<CellIsOperator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formulas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<TimePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub percent: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bottom: bool,
    /// `None` keeps the file format default (above average).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above_average: Option<bool>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub equal_average: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_bar: Option<DataBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_set: Option<IconSetRule>,
}
