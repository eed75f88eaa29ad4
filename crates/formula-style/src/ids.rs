//! Identifiers issued by the stylesheet for deduplicated styles.
//!
//! Each kind is its own type so ids from different tables cannot be mixed up,
//! and raw integers have to be wrapped explicitly.

use core::fmt;

use serde::{Deserialize, Serialize};

macro_rules! style_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

style_id!(
    /// Index of a full inline format (`cellXfs`) applied to cells.
    DirectStyleId
);
style_id!(
    /// Index of a differential format (`dxfs`) used by conditional rules.
    DiffStyleId
);
style_id!(
    /// Index of a named cell style (`cellStyleXfs`).
    NamedStyleId
);

/// Default direct style of a context.
///
/// For cells it resolves to the "Normal" named style, for hyperlinks to
/// "Hyperlink".
pub const DEFAULT_DIRECT_STYLE: DirectStyleId = DirectStyleId::new(0);
