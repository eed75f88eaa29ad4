//! Font formatting and the options that configure it.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::record::{is_false, StyleRecord};
use crate::{Color, StyleOption};

/// Font family classification (`<family val="…"/>`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    NotApplicable,
    Roman,
    Swiss,
    Modern,
    Script,
    Decorative,
}

impl FontFamily {
    pub fn from_ooxml(val: u8) -> Option<Self> {
        match val {
            0 => Some(FontFamily::NotApplicable),
            1 => Some(FontFamily::Roman),
            2 => Some(FontFamily::Swiss),
            3 => Some(FontFamily::Modern),
            4 => Some(FontFamily::Script),
            5 => Some(FontFamily::Decorative),
            _ => None,
        }
    }

    pub fn to_ooxml(self) -> u8 {
        match self {
            FontFamily::NotApplicable => 0,
            FontFamily::Roman => 1,
            FontFamily::Swiss => 2,
            FontFamily::Modern => 3,
            FontFamily::Script => 4,
            FontFamily::Decorative => 5,
        }
    }
}

/// Theme font scheme the font belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontScheme {
    None,
    Major,
    Minor,
}

/// Vertical positioning of text relative to the baseline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontVertAlign {
    Baseline,
    Superscript,
    Subscript,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Underline {
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
    None,
}

impl Underline {
    pub fn from_ooxml(val: Option<&str>) -> Option<Self> {
        match val {
            None => Some(Underline::Single),
            Some("single") => Some(Underline::Single),
            Some("double") => Some(Underline::Double),
            Some("singleAccounting") => Some(Underline::SingleAccounting),
            Some("doubleAccounting") => Some(Underline::DoubleAccounting),
            Some("none") => Some(Underline::None),
            _ => None,
        }
    }

    pub fn to_ooxml(self) -> Option<&'static str> {
        match self {
            Underline::Single => None,
            Underline::Double => Some("double"),
            Underline::SingleAccounting => Some("singleAccounting"),
            Underline::DoubleAccounting => Some("doubleAccounting"),
            Underline::None => Some("none"),
        }
    }
}

/// Font formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Font size in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<OrderedFloat<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub shadow: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub condense: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub extend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vert_align: Option<FontVertAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<FontScheme>,
}

impl Font {
    /// Size, family and charset are either unset or explicitly zero.
    ///
    /// Inherited defaults write zeros into these three fields; such a font
    /// still carries no inline formatting of its own.
    fn has_inherited_metrics_only(&self) -> bool {
        self.size.map_or(true, |size| size.0 == 0.0)
            && self
                .family
                .map_or(true, |family| family == FontFamily::NotApplicable)
            && self.charset.map_or(true, |charset| charset == 0)
    }

    pub(crate) fn apply(&mut self, option: FontOption) {
        match option {
            FontOption::Name(name) => self.name = Some(name),
            FontOption::Size(size) => self.size = Some(OrderedFloat(size)),
            FontOption::Charset(charset) => self.charset = Some(charset),
            FontOption::Family(family) => self.family = Some(family),
            FontOption::Color(color) => self.color = Some(color),
            FontOption::Bold => self.bold = true,
            FontOption::Italic => self.italic = true,
            FontOption::Strike => self.strike = true,
            FontOption::Shadow => self.shadow = true,
            FontOption::Condense => self.condense = true,
            FontOption::Extend => self.extend = true,
            FontOption::Underline(underline) => self.underline = Some(underline),
            FontOption::VertAlign(align) => self.vert_align = Some(align),
            FontOption::Scheme(scheme) => self.scheme = Some(scheme),
        }
    }
}

impl StyleRecord for Font {
    fn is_default(&self) -> bool {
        self.has_inherited_metrics_only()
            && self.name.is_none()
            && self.color.is_none()
            && !self.bold
            && !self.italic
            && !self.strike
            && !self.shadow
            && !self.condense
            && !self.extend
            && self.underline.is_none()
            && self.vert_align.is_none()
            && self.scheme.is_none()
    }
}

/// A font used as inline run formatting inside rich text.
///
/// Carries exactly the fields of [`Font`]; only the role differs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichFont(Font);

impl RichFont {
    pub fn font(&self) -> &Font {
        &self.0
    }

    pub fn into_font(self) -> Font {
        self.0
    }
}

impl From<Font> for RichFont {
    fn from(font: Font) -> Self {
        RichFont(font)
    }
}

impl core::ops::Deref for RichFont {
    type Target = Font;

    fn deref(&self) -> &Font {
        &self.0
    }
}

/// A single font assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontOption {
    Name(String),
    Size(f64),
    Charset(u8),
    Family(FontFamily),
    Color(Color),
    Bold,
    Italic,
    Strike,
    Shadow,
    Condense,
    Extend,
    Underline(Underline),
    VertAlign(FontVertAlign),
    Scheme(FontScheme),
}

impl From<FontOption> for StyleOption {
    fn from(option: FontOption) -> Self {
        StyleOption::Font(option)
    }
}

pub fn name(name: impl Into<String>) -> StyleOption {
    FontOption::Name(name.into()).into()
}

/// Font size in points.
pub fn size(points: f64) -> StyleOption {
    FontOption::Size(points).into()
}

pub fn charset(charset: u8) -> StyleOption {
    FontOption::Charset(charset).into()
}

pub fn family(family: FontFamily) -> StyleOption {
    FontOption::Family(family).into()
}

pub fn color(color: Color) -> StyleOption {
    FontOption::Color(color).into()
}

pub fn bold() -> StyleOption {
    FontOption::Bold.into()
}

pub fn italic() -> StyleOption {
    FontOption::Italic.into()
}

pub fn strike() -> StyleOption {
    FontOption::Strike.into()
}

pub fn shadow() -> StyleOption {
    FontOption::Shadow.into()
}

pub fn condense() -> StyleOption {
    FontOption::Condense.into()
}

pub fn extend() -> StyleOption {
    FontOption::Extend.into()
}

pub fn underline(underline: Underline) -> StyleOption {
    FontOption::Underline(underline).into()
}

pub fn superscript() -> StyleOption {
    FontOption::VertAlign(FontVertAlign::Superscript).into()
}

pub fn subscript() -> StyleOption {
    FontOption::VertAlign(FontVertAlign::Subscript).into()
}

pub fn scheme(scheme: FontScheme) -> StyleOption {
    FontOption::Scheme(scheme).into()
}
