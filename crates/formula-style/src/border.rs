//! Border formatting: seven independently optional segments.

use serde::{Deserialize, Serialize};

use crate::record::StyleRecord;
use crate::{Color, StyleOption};

/// Border line style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::Hair => "hair",
            Self::MediumDashed => "mediumDashed",
            Self::DashDot => "dashDot",
            Self::MediumDashDot => "mediumDashDot",
            Self::DashDotDot => "dashDotDot",
            Self::MediumDashDotDot => "mediumDashDotDot",
            Self::SlantDashDot => "slantDashDot",
        }
    }
}

/// The seven edges a border segment can be attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderEdge {
    Left,
    Right,
    Top,
    Bottom,
    Diagonal,
    Vertical,
    Horizontal,
}

impl BorderEdge {
    pub const ALL: [BorderEdge; 7] = [
        BorderEdge::Left,
        BorderEdge::Right,
        BorderEdge::Top,
        BorderEdge::Bottom,
        BorderEdge::Diagonal,
        BorderEdge::Vertical,
        BorderEdge::Horizontal,
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl StyleRecord for BorderSegment {
    fn is_default(&self) -> bool {
        self.style.is_none() && self.color.is_none()
    }
}

/// Canonical border. At least one segment is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Border {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<BorderSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<BorderSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<BorderSegment>,
}

impl Border {
    pub fn segment(&self, edge: BorderEdge) -> Option<&BorderSegment> {
        match edge {
            BorderEdge::Left => self.left.as_ref(),
            BorderEdge::Right => self.right.as_ref(),
            BorderEdge::Top => self.top.as_ref(),
            BorderEdge::Bottom => self.bottom.as_ref(),
            BorderEdge::Diagonal => self.diagonal.as_ref(),
            BorderEdge::Vertical => self.vertical.as_ref(),
            BorderEdge::Horizontal => self.horizontal.as_ref(),
        }
    }

    fn has_segments(&self) -> bool {
        BorderEdge::ALL
            .iter()
            .any(|edge| self.segment(*edge).is_some())
    }
}

/// Live border state held by a descriptor; every segment always allocated.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BorderParts {
    left: BorderSegment,
    right: BorderSegment,
    top: BorderSegment,
    bottom: BorderSegment,
    diagonal: BorderSegment,
    vertical: BorderSegment,
    horizontal: BorderSegment,
}

impl BorderParts {
    fn segment_mut(&mut self, edge: BorderEdge) -> &mut BorderSegment {
        match edge {
            BorderEdge::Left => &mut self.left,
            BorderEdge::Right => &mut self.right,
            BorderEdge::Top => &mut self.top,
            BorderEdge::Bottom => &mut self.bottom,
            BorderEdge::Diagonal => &mut self.diagonal,
            BorderEdge::Vertical => &mut self.vertical,
            BorderEdge::Horizontal => &mut self.horizontal,
        }
    }

    pub(crate) fn apply(&mut self, edge: BorderEdge, option: SegmentOption) {
        let segment = self.segment_mut(edge);
        match option {
            SegmentOption::Style(style) => segment.style = Some(style),
            SegmentOption::Color(color) => segment.color = Some(color),
        }
    }

    pub(crate) fn canonicalize(&self) -> Option<Border> {
        let border = Border {
            left: self.left.present(),
            right: self.right.present(),
            top: self.top.present(),
            bottom: self.bottom.present(),
            diagonal: self.diagonal.present(),
            vertical: self.vertical.present(),
            horizontal: self.horizontal.present(),
        };
        border.has_segments().then_some(border)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOption {
    Style(BorderStyle),
    Color(Color),
}

pub fn style(edge: BorderEdge, style: BorderStyle) -> StyleOption {
    StyleOption::Border {
        edge,
        segment: SegmentOption::Style(style),
    }
}

pub fn color(edge: BorderEdge, color: Color) -> StyleOption {
    StyleOption::Border {
        edge,
        segment: SegmentOption::Color(color),
    }
}

/// Same line style and color on the four outer edges.
pub fn outline(line: BorderStyle, line_color: Color) -> Vec<StyleOption> {
    [
        BorderEdge::Left,
        BorderEdge::Right,
        BorderEdge::Top,
        BorderEdge::Bottom,
    ]
    .into_iter()
    .flat_map(|edge| [style(edge, line), color(edge, line_color)])
    .collect()
}
