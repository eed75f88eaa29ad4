/// A style sub-record with a well-defined default ("absent") state.
///
/// Presence is never stored: it is derived from `is_default` every time a
/// canonical snapshot is taken.
pub trait StyleRecord: Clone {
    /// Whether every field is at its default value.
    fn is_default(&self) -> bool;

    /// A deep copy of the record, or `None` when it is at its default.
    fn present(&self) -> Option<Self> {
        if self.is_default() {
            None
        } else {
            Some(self.clone())
        }
    }
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

pub(crate) fn is_zero_i16(v: &i16) -> bool {
    *v == 0
}

pub(crate) fn is_zero_u8(v: &u8) -> bool {
    *v == 0
}

pub(crate) fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}
