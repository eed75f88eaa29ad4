use serde::{Deserialize, Serialize};

use crate::record::{is_false, StyleRecord};
use crate::StyleOption;

/// Reference to a named (cell) style such as "Normal" or "Heading 1".
///
/// This is kept apart from the inline formatting records: it identifies the
/// parent style rather than describing formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedStyleInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_id: Option<u32>,
    /// Outline level for the row/column level built-in styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_level: Option<u8>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub custom_builtin: bool,
}

impl NamedStyleInfo {
    pub(crate) fn apply(&mut self, option: NamedStyleOption) {
        match option {
            NamedStyleOption::Name(name) => self.name = Some(name),
            NamedStyleOption::BuiltinId(id) => self.builtin_id = Some(id),
            NamedStyleOption::OutlineLevel(level) => self.outline_level = Some(level),
            NamedStyleOption::Hidden => self.hidden = true,
            NamedStyleOption::CustomBuiltin => self.custom_builtin = true,
        }
    }
}

impl StyleRecord for NamedStyleInfo {
    fn is_default(&self) -> bool {
        self.name.is_none()
            && self.builtin_id.is_none()
            && self.outline_level.is_none()
            && !self.hidden
            && !self.custom_builtin
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedStyleOption {
    Name(String),
    BuiltinId(u32),
    OutlineLevel(u8),
    Hidden,
    CustomBuiltin,
}

impl From<NamedStyleOption> for StyleOption {
    fn from(option: NamedStyleOption) -> Self {
        StyleOption::NamedStyle(option)
    }
}

pub fn name(name: impl Into<String>) -> StyleOption {
    NamedStyleOption::Name(name.into()).into()
}

pub fn builtin_id(id: u32) -> StyleOption {
    NamedStyleOption::BuiltinId(id).into()
}

pub fn outline_level(level: u8) -> StyleOption {
    NamedStyleOption::OutlineLevel(level).into()
}

pub fn hidden() -> StyleOption {
    NamedStyleOption::Hidden.into()
}

pub fn custom_builtin() -> StyleOption {
    NamedStyleOption::CustomBuiltin.into()
}
