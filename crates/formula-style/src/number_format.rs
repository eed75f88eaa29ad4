//! Number format codes, including Excel's built-in table.

use serde::{Deserialize, Serialize};

use crate::record::{is_zero_u32, StyleRecord};
use crate::StyleOption;

/// Number format reference.
///
/// `id` is a built-in id (< 164) or `0` when a custom code still needs an id
/// from the stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberFormat {
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub id: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
}

/// First id available for custom (non built-in) format codes.
pub const FIRST_CUSTOM_NUMBER_FORMAT_ID: u32 = 164;

impl NumberFormat {
    /// True when `code` is the built-in code registered under `id`.
    ///
    /// An unset format (`id` 0 with an empty code) is not built-in.
    pub fn is_builtin(&self) -> bool {
        !self.code.is_empty() && builtin_number_format_code(self.id) == Some(self.code.as_str())
    }

    pub(crate) fn apply(&mut self, option: NumberFormatOption) {
        match option {
            NumberFormatOption::Builtin(id) => {
                self.id = id;
                self.code = builtin_number_format_code(id)
                    .map(str::to_string)
                    .unwrap_or_default();
            }
            NumberFormatOption::Code(code) => {
                self.id = builtin_number_format_id(&code).unwrap_or(0);
                self.code = code;
            }
        }
    }
}

impl StyleRecord for NumberFormat {
    fn is_default(&self) -> bool {
        self.id == 0 && self.code.is_empty()
    }
}

const BUILTIN_NUMBER_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Format code of a built-in number format id.
pub fn builtin_number_format_code(id: u32) -> Option<&'static str> {
    BUILTIN_NUMBER_FORMATS
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .map(|(_, code)| *code)
}

fn builtin_number_format_id(code: &str) -> Option<u32> {
    BUILTIN_NUMBER_FORMATS
        .iter()
        .find(|(_, builtin)| *builtin == code)
        .map(|(id, _)| *id)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormatOption {
    Builtin(u32),
    Code(String),
}

impl From<NumberFormatOption> for StyleOption {
    fn from(option: NumberFormatOption) -> Self {
        StyleOption::NumberFormat(option)
    }
}

pub fn builtin(id: u32) -> StyleOption {
    NumberFormatOption::Builtin(id).into()
}

pub fn code(code: impl Into<String>) -> StyleOption {
    NumberFormatOption::Code(code.into()).into()
}
