use serde::{Deserialize, Serialize};

use crate::record::{is_false, StyleRecord};
use crate::StyleOption;

/// Cell protection flags. Only take effect while the sheet is protected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Protection {
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
}

impl Protection {
    pub(crate) fn apply(&mut self, option: ProtectionOption) {
        match option {
            ProtectionOption::Locked => self.locked = true,
            ProtectionOption::Hidden => self.hidden = true,
        }
    }
}

impl StyleRecord for Protection {
    fn is_default(&self) -> bool {
        !self.locked && !self.hidden
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionOption {
    Locked,
    Hidden,
}

impl From<ProtectionOption> for StyleOption {
    fn from(option: ProtectionOption) -> Self {
        StyleOption::Protection(option)
    }
}

pub fn locked() -> StyleOption {
    ProtectionOption::Locked.into()
}

pub fn hidden() -> StyleOption {
    ProtectionOption::Hidden.into()
}
