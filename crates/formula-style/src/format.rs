use serde::{Deserialize, Serialize};

use crate::alignment::AlignmentOption;
use crate::border::{BorderParts, SegmentOption};
use crate::fill::{FillParts, GradientOption, PatternOption};
use crate::font::FontOption;
use crate::named_style::NamedStyleOption;
use crate::number_format::NumberFormatOption;
use crate::protection::ProtectionOption;
use crate::record::StyleRecord;
use crate::{
    Alignment, Border, BorderEdge, Fill, Font, NamedStyleInfo, NumberFormat, Protection, RichFont,
};

/// One field assignment on a [`StyleFormat`].
///
/// Options are plain values so they can be collected, reused and deserialized
/// (e.g. `{"font": {"name": "Calibri"}}`). Applying an option never fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleOption {
    Font(FontOption),
    Pattern(PatternOption),
    Gradient(GradientOption),
    Border {
        edge: BorderEdge,
        segment: SegmentOption,
    },
    Alignment(AlignmentOption),
    Protection(ProtectionOption),
    NumberFormat(NumberFormatOption),
    NamedStyle(NamedStyleOption),
}

/// Mutable style description accumulated from [`StyleOption`]s.
///
/// Every sub-record starts out allocated at its default value. Raw fields stay
/// private; the stylesheet consumes a descriptor only through
/// [`StyleFormat::canonicalize`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleFormat {
    font: Font,
    fill: FillParts,
    border: BorderParts,
    alignment: Alignment,
    protection: Protection,
    number_format: NumberFormat,
    named: NamedStyleInfo,
}

impl StyleFormat {
    /// Creates a descriptor with default sub-records, then applies `options`
    /// in order.
    pub fn new(options: impl IntoIterator<Item = StyleOption>) -> Self {
        let mut format = Self::default();
        format.set(options);
        format
    }

    /// Applies more options. Later assignments to a field win.
    pub fn set(&mut self, options: impl IntoIterator<Item = StyleOption>) {
        for option in options {
            self.apply(option);
        }
    }

    fn apply(&mut self, option: StyleOption) {
        match option {
            StyleOption::Font(option) => self.font.apply(option),
            StyleOption::Pattern(option) => self.fill.apply_pattern(option),
            StyleOption::Gradient(option) => self.fill.apply_gradient(option),
            StyleOption::Border { edge, segment } => self.border.apply(edge, segment),
            StyleOption::Alignment(option) => self.alignment.apply(option),
            StyleOption::Protection(option) => self.protection.apply(option),
            StyleOption::NumberFormat(option) => self.number_format.apply(option),
            StyleOption::NamedStyle(option) => self.named.apply(option),
        }
    }

    /// Snapshot of the descriptor with every default sub-record pruned away.
    ///
    /// Present records are deep copies, so the snapshot stays valid after the
    /// descriptor is mutated or dropped.
    pub fn canonicalize(&self) -> CanonicalStyle {
        let style = CanonicalStyle {
            font: self.font.present(),
            fill: self.fill.canonicalize(),
            border: self.border.canonicalize(),
            alignment: self.alignment.present(),
            protection: self.protection.present(),
            number_format: self.number_format.present(),
            named_style: self.named.present(),
        };
        log::trace!(
            "canonicalized style: font={} fill={} border={} alignment={} protection={} number_format={} named_style={}",
            style.font.is_some(),
            style.fill.is_some(),
            style.border.is_some(),
            style.alignment.is_some(),
            style.protection.is_some(),
            style.number_format.is_some(),
            style.named_style.is_some(),
        );
        style
    }

    /// The font as inline rich-text run formatting, if it carries any.
    pub fn rich_font(&self) -> Option<RichFont> {
        self.font.present().map(RichFont::from)
    }
}

/// Pruned, immutable view of a [`StyleFormat`], used as a dedup key.
///
/// Each slot is either absent or a record with at least one non-default field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protection: Option<Protection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_format: Option<NumberFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    named_style: Option<NamedStyleInfo>,
}

/// Owned slots of a [`CanonicalStyle`], handed over to the stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleParts {
    pub font: Option<Font>,
    pub fill: Option<Fill>,
    pub border: Option<Border>,
    pub alignment: Option<Alignment>,
    pub protection: Option<Protection>,
    pub number_format: Option<NumberFormat>,
    pub named_style: Option<NamedStyleInfo>,
}

impl CanonicalStyle {
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    pub fn border(&self) -> Option<&Border> {
        self.border.as_ref()
    }

    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    pub fn protection(&self) -> Option<&Protection> {
        self.protection.as_ref()
    }

    pub fn number_format(&self) -> Option<&NumberFormat> {
        self.number_format.as_ref()
    }

    pub fn named_style(&self) -> Option<&NamedStyleInfo> {
        self.named_style.as_ref()
    }

    /// True when no slot is present, i.e. the style adds nothing to its context.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.fill.is_none()
            && self.border.is_none()
            && self.alignment.is_none()
            && self.protection.is_none()
            && self.number_format.is_none()
            && self.named_style.is_none()
    }

    pub fn into_parts(self) -> StyleParts {
        StyleParts {
            font: self.font,
            fill: self.fill,
            border: self.border,
            alignment: self.alignment,
            protection: self.protection,
            number_format: self.number_format,
            named_style: self.named_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{font, protection};

    #[test]
    fn later_option_overwrites_earlier() {
        let mut format = StyleFormat::new([font::name("Arial"), font::size(10.0)]);
        format.set([font::name("Calibri")]);

        let font = format.canonicalize().font().cloned().expect("font present");
        assert_eq!(font.name.as_deref(), Some("Calibri"));
        assert_eq!(font.size.map(|s| s.0), Some(10.0));
    }

    #[test]
    fn empty_descriptor_is_empty_snapshot() {
        assert!(StyleFormat::default().canonicalize().is_empty());
        assert!(!StyleFormat::new([protection::locked()])
            .canonicalize()
            .is_empty());
    }
}
