//! `formula-style` normalizes user-facing style descriptions into canonical
//! snapshots for a deduplicating stylesheet, and holds conditional formatting
//! rules until they are registered with a sheet.
//!
//! Styles are built from option values and pruned on demand:
//!
//! ```
//! use formula_style::{font, StyleFormat};
//!
//! let style = StyleFormat::new([font::name("Calibri"), font::size(12.0)]);
//! let snapshot = style.canonicalize();
//! assert!(snapshot.font().is_some());
//! assert!(snapshot.fill().is_none());
//! ```
//!
//! The stylesheet owns identifier allocation; this crate only defines the id
//! types ([`DirectStyleId`], [`DiffStyleId`], [`NamedStyleId`]).

pub mod alignment;
pub mod border;
mod color;
pub mod conditional;
mod error;
pub mod fill;
pub mod font;
mod format;
mod ids;
pub mod named_style;
pub mod number_format;
pub mod protection;
mod record;
mod serde_defaults;

pub use alignment::{Alignment, AlignmentOption, HorizontalAlignment, ReadingOrder, VerticalAlignment};
pub use border::{Border, BorderEdge, BorderSegment, BorderStyle, SegmentOption};
pub use color::{Color, ColorParseError};
pub use conditional::{RuleInfo, RuleOption, RuleValidator};
pub use error::RuleValidationError;
pub use fill::{
    Fill, GradientFill, GradientOption, GradientStop, GradientType, PatternFill, PatternOption,
    PatternType,
};
pub use font::{Font, FontFamily, FontOption, FontScheme, FontVertAlign, RichFont, Underline};
pub use format::{CanonicalStyle, StyleFormat, StyleOption, StyleParts};
pub use ids::{DiffStyleId, DirectStyleId, NamedStyleId, DEFAULT_DIRECT_STYLE};
pub use named_style::{NamedStyleInfo, NamedStyleOption};
pub use number_format::{
    builtin_number_format_code, NumberFormat, NumberFormatOption, FIRST_CUSTOM_NUMBER_FORMAT_ID,
};
pub use protection::{Protection, ProtectionOption};
pub use record::StyleRecord;
