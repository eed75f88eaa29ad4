//! Fill (background) formatting: pattern and gradient variants.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::record::StyleRecord;
use crate::{Color, StyleOption};

/// Pattern fill types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    None,
    Solid,
    MediumGray,
    DarkGray,
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    Gray125,
    Gray0625,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::MediumGray => "mediumGray",
            Self::DarkGray => "darkGray",
            Self::LightGray => "lightGray",
            Self::DarkHorizontal => "darkHorizontal",
            Self::DarkVertical => "darkVertical",
            Self::DarkDown => "darkDown",
            Self::DarkUp => "darkUp",
            Self::DarkGrid => "darkGrid",
            Self::DarkTrellis => "darkTrellis",
            Self::LightHorizontal => "lightHorizontal",
            Self::LightVertical => "lightVertical",
            Self::LightDown => "lightDown",
            Self::LightUp => "lightUp",
            Self::LightGrid => "lightGrid",
            Self::LightTrellis => "lightTrellis",
            Self::Gray125 => "gray125",
            Self::Gray0625 => "gray0625",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientType {
    Linear,
    Path,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternFill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
}

impl StyleRecord for PatternFill {
    fn is_default(&self) -> bool {
        self.pattern.is_none() && self.fg_color.is_none() && self.bg_color.is_none()
    }
}

/// One color stop of a gradient, `position` in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: OrderedFloat<f64>,
    pub color: Color,
}

impl GradientStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self {
            position: OrderedFloat(position),
            color,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradientFill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GradientType>,
    /// Angle of a linear gradient, in degrees.
    #[serde(default)]
    pub degree: OrderedFloat<f64>,
    #[serde(default)]
    pub left: OrderedFloat<f64>,
    #[serde(default)]
    pub right: OrderedFloat<f64>,
    #[serde(default)]
    pub top: OrderedFloat<f64>,
    #[serde(default)]
    pub bottom: OrderedFloat<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<GradientStop>,
}

impl StyleRecord for GradientFill {
    fn is_default(&self) -> bool {
        self.kind.is_none()
            && self.degree.0 == 0.0
            && self.left.0 == 0.0
            && self.right.0 == 0.0
            && self.top.0 == 0.0
            && self.bottom.0 == 0.0
            && self.stops.is_empty()
    }

    fn present(&self) -> Option<Self> {
        if self.is_default() {
            return None;
        }
        // Stops are copied one by one so the snapshot owns its own sequence.
        let mut stops = Vec::with_capacity(self.stops.len());
        for stop in &self.stops {
            stops.push(GradientStop {
                position: stop.position,
                color: stop.color,
            });
        }
        Some(GradientFill {
            kind: self.kind,
            degree: self.degree,
            left: self.left,
            right: self.right,
            top: self.top,
            bottom: self.bottom,
            stops,
        })
    }
}

/// Canonical fill: either variant may be absent, but not both.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientFill>,
}

/// Live fill state held by a descriptor; both variants always allocated.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FillParts {
    pub(crate) pattern: PatternFill,
    pub(crate) gradient: GradientFill,
}

impl FillParts {
    pub(crate) fn canonicalize(&self) -> Option<Fill> {
        let pattern = self.pattern.present();
        let gradient = self.gradient.present();
        if pattern.is_none() && gradient.is_none() {
            return None;
        }
        Some(Fill { pattern, gradient })
    }

    pub(crate) fn apply_pattern(&mut self, option: PatternOption) {
        match option {
            PatternOption::Type(pattern) => self.pattern.pattern = Some(pattern),
            PatternOption::Foreground(color) => self.pattern.fg_color = Some(color),
            PatternOption::Background(color) => self.pattern.bg_color = Some(color),
        }
    }

    pub(crate) fn apply_gradient(&mut self, option: GradientOption) {
        let gradient = &mut self.gradient;
        match option {
            GradientOption::Type(kind) => gradient.kind = Some(kind),
            GradientOption::Degree(v) => gradient.degree = OrderedFloat(v),
            GradientOption::Left(v) => gradient.left = OrderedFloat(v),
            GradientOption::Right(v) => gradient.right = OrderedFloat(v),
            GradientOption::Top(v) => gradient.top = OrderedFloat(v),
            GradientOption::Bottom(v) => gradient.bottom = OrderedFloat(v),
            GradientOption::Stop { position, color } => {
                gradient.stops.push(GradientStop::new(position, color))
            }
            GradientOption::Stops(stops) => gradient.stops = stops,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternOption {
    Type(PatternType),
    Foreground(Color),
    Background(Color),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientOption {
    Type(GradientType),
    Degree(f64),
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
    /// Appends a stop to the gradient.
    Stop { position: f64, color: Color },
    /// Replaces every stop of the gradient.
    Stops(Vec<GradientStop>),
}

impl From<PatternOption> for StyleOption {
    fn from(option: PatternOption) -> Self {
        StyleOption::Pattern(option)
    }
}

impl From<GradientOption> for StyleOption {
    fn from(option: GradientOption) -> Self {
        StyleOption::Gradient(option)
    }
}

pub fn pattern(pattern: PatternType) -> StyleOption {
    PatternOption::Type(pattern).into()
}

pub fn foreground(color: Color) -> StyleOption {
    PatternOption::Foreground(color).into()
}

pub fn background(color: Color) -> StyleOption {
    PatternOption::Background(color).into()
}

pub fn gradient(kind: GradientType) -> StyleOption {
    GradientOption::Type(kind).into()
}

pub fn degree(degree: f64) -> StyleOption {
    GradientOption::Degree(degree).into()
}

pub fn left(v: f64) -> StyleOption {
    GradientOption::Left(v).into()
}

pub fn right(v: f64) -> StyleOption {
    GradientOption::Right(v).into()
}

pub fn top(v: f64) -> StyleOption {
    GradientOption::Top(v).into()
}

pub fn bottom(v: f64) -> StyleOption {
    GradientOption::Bottom(v).into()
}

pub fn stop(position: f64, color: Color) -> StyleOption {
    GradientOption::Stop { position, color }.into()
}

pub fn stops(stops: impl IntoIterator<Item = GradientStop>) -> StyleOption {
    GradientOption::Stops(stops.into_iter().collect()).into()
}
