/// Serde helper for `#[serde(default = "crate::serde_defaults::default_true")]`.
pub(crate) const fn default_true() -> bool {
    true
}
