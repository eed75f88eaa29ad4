//! Conditional formatting rule containers.
//!
//! A [`RuleInfo`] pairs a [`ConditionalRule`] with the differential style the
//! rule applies and an optional [`RuleValidator`]. The container knows nothing
//! about rule-kind semantics; those live in the validators (see
//! [`validators`]) and the option bundles in [`presets`].

use core::fmt;

use crate::{DiffStyleId, RuleValidationError};

pub mod presets;
mod rule;
pub mod validators;

pub use rule::{
    CellIsOperator, Cfvo, CfvoType, ColorScale, ConditionalRule, DataBar, IconSet, IconSetRule,
    RuleKind, TimePeriod,
};

/// Validation strategy for a rule container.
///
/// Implemented by the built-in validators and by any
/// `Fn(&RuleInfo) -> Result<(), RuleValidationError>` closure.
pub trait RuleValidator {
    fn validate(&self, rule: &RuleInfo) -> Result<(), RuleValidationError>;
}

impl<F> RuleValidator for F
where
    F: Fn(&RuleInfo) -> Result<(), RuleValidationError>,
{
    fn validate(&self, rule: &RuleInfo) -> Result<(), RuleValidationError> {
        self(rule)
    }
}

impl fmt::Debug for dyn RuleValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RuleValidator")
    }
}

/// One field assignment on a [`RuleInfo`].
#[derive(Debug)]
pub enum RuleOption {
    Kind(RuleKind),
    Priority(u32),
    StopIfTrue,
    Operator(CellIsOperator),
    /// Replaces all formulas of the rule.
    Formulas(Vec<String>),
    Text(String),
    TimePeriod(TimePeriod),
    Rank(u32),
    Percent,
    Bottom,
    AboveAverage(bool),
    EqualAverage,
    StdDev(u32),
    ColorScale(ColorScale),
    DataBar(DataBar),
    IconSet(IconSetRule),
    Style(DiffStyleId),
    Validator(Box<dyn RuleValidator>),
}

impl RuleOption {
    pub fn validator(validator: impl RuleValidator + 'static) -> Self {
        RuleOption::Validator(Box::new(validator))
    }

    pub fn formula(formula: impl Into<String>) -> Self {
        RuleOption::Formulas(vec![formula.into()])
    }
}

/// Mutable conditional rule container.
///
/// Validation is stateless: nothing records whether [`RuleInfo::validate`]
/// has been called or what it returned.
#[derive(Debug, Default)]
pub struct RuleInfo {
    rule: ConditionalRule,
    style: Option<DiffStyleId>,
    validator: Option<Box<dyn RuleValidator>>,
}

impl RuleInfo {
    /// Creates an empty rule without style or validator, then applies
    /// `options` in order.
    pub fn new(options: impl IntoIterator<Item = RuleOption>) -> Self {
        let mut info = Self::default();
        info.set(options);
        info
    }

    /// Applies more options. Later assignments to a field win.
    pub fn set(&mut self, options: impl IntoIterator<Item = RuleOption>) {
        for option in options {
            self.apply(option);
        }
    }

    fn apply(&mut self, option: RuleOption) {
        let rule = &mut self.rule;
        match option {
            RuleOption::Kind(kind) => rule.kind = Some(kind),
            RuleOption::Priority(priority) => rule.priority = priority,
            RuleOption::StopIfTrue => rule.stop_if_true = true,
            RuleOption::Operator(operator) => rule.operator = Some(operator),
            RuleOption::Formulas(formulas) => rule.formulas = formulas,
            RuleOption::Text(text) => rule.text = Some(text),
            RuleOption::TimePeriod(period) => rule.time_period = Some(period),
            RuleOption::Rank(rank) => rule.rank = Some(rank),
            RuleOption::Percent => rule.percent = true,
            RuleOption::Bottom => rule.bottom = true,
            RuleOption::AboveAverage(above) => rule.above_average = Some(above),
            RuleOption::EqualAverage => rule.equal_average = true,
            RuleOption::StdDev(std_dev) => rule.std_dev = Some(std_dev),
            RuleOption::ColorScale(scale) => rule.color_scale = Some(scale),
            RuleOption::DataBar(bar) => rule.data_bar = Some(bar),
            RuleOption::IconSet(icons) => rule.icon_set = Some(icons),
            RuleOption::Style(style) => self.style = Some(style),
            RuleOption::Validator(validator) => {
                if self.validator.is_some() {
                    log::debug!("replacing validator of conditional rule");
                }
                self.validator = Some(validator);
            }
        }
    }

    /// Runs the attached validator, if any, and returns its verdict unchanged.
    pub fn validate(&self) -> Result<(), RuleValidationError> {
        match &self.validator {
            Some(validator) => validator.validate(self),
            None => Ok(()),
        }
    }

    pub fn rule(&self) -> &ConditionalRule {
        &self.rule
    }

    pub fn style(&self) -> Option<DiffStyleId> {
        self.style
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Hands the rule and its style over for registration with a sheet.
    ///
    /// Consumes the container, so a registered rule can no longer be mutated
    /// through it.
    pub fn into_parts(self) -> (ConditionalRule, Option<DiffStyleId>) {
        (self.rule, self.style)
    }
}
