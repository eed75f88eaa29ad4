use serde::{Deserialize, Serialize};

use crate::record::{is_false, is_zero_i16, is_zero_u8, StyleRecord};
use crate::StyleOption;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Justify,
    Distributed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingOrder {
    Context,
    LeftToRight,
    RightToLeft,
}

/// Alignment formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlignment>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub wrap_text: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub shrink_to_fit: bool,
    /// Excel text rotation in degrees.
    ///
    /// - `0` = horizontal
    /// - `-90..=90` = rotated text
    /// - Excel also uses `255` for vertical stacked text (supported as-is).
    #[serde(default, skip_serializing_if = "is_zero_i16")]
    pub text_rotation: i16,
    #[serde(default, skip_serializing_if = "is_zero_u8")]
    pub indent: u8,
    #[serde(default, skip_serializing_if = "is_zero_i16")]
    pub relative_indent: i16,
    #[serde(default, skip_serializing_if = "is_false")]
    pub justify_last_line: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_order: Option<ReadingOrder>,
}

impl Alignment {
    pub(crate) fn apply(&mut self, option: AlignmentOption) {
        match option {
            AlignmentOption::Horizontal(h) => self.horizontal = Some(h),
            AlignmentOption::Vertical(v) => self.vertical = Some(v),
            AlignmentOption::WrapText => self.wrap_text = true,
            AlignmentOption::ShrinkToFit => self.shrink_to_fit = true,
            AlignmentOption::TextRotation(degrees) => self.text_rotation = degrees,
            AlignmentOption::Indent(level) => self.indent = level,
            AlignmentOption::RelativeIndent(level) => self.relative_indent = level,
            AlignmentOption::JustifyLastLine => self.justify_last_line = true,
            AlignmentOption::ReadingOrder(order) => self.reading_order = Some(order),
        }
    }
}

impl StyleRecord for Alignment {
    fn is_default(&self) -> bool {
        self.horizontal.is_none()
            && self.vertical.is_none()
            && !self.wrap_text
            && !self.shrink_to_fit
            && self.text_rotation == 0
            && self.indent == 0
            && self.relative_indent == 0
            && !self.justify_last_line
            && self.reading_order.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentOption {
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
    WrapText,
    ShrinkToFit,
    TextRotation(i16),
    Indent(u8),
    RelativeIndent(i16),
    JustifyLastLine,
    ReadingOrder(ReadingOrder),
}

impl From<AlignmentOption> for StyleOption {
    fn from(option: AlignmentOption) -> Self {
        StyleOption::Alignment(option)
    }
}

pub fn horizontal(h: HorizontalAlignment) -> StyleOption {
    AlignmentOption::Horizontal(h).into()
}

pub fn vertical(v: VerticalAlignment) -> StyleOption {
    AlignmentOption::Vertical(v).into()
}

pub fn wrap_text() -> StyleOption {
    AlignmentOption::WrapText.into()
}

pub fn shrink_to_fit() -> StyleOption {
    AlignmentOption::ShrinkToFit.into()
}

pub fn text_rotation(degrees: i16) -> StyleOption {
    AlignmentOption::TextRotation(degrees).into()
}

pub fn indent(level: u8) -> StyleOption {
    AlignmentOption::Indent(level).into()
}

pub fn relative_indent(level: i16) -> StyleOption {
    AlignmentOption::RelativeIndent(level).into()
}

pub fn justify_last_line() -> StyleOption {
    AlignmentOption::JustifyLastLine.into()
}

pub fn reading_order(order: ReadingOrder) -> StyleOption {
    AlignmentOption::ReadingOrder(order).into()
}
