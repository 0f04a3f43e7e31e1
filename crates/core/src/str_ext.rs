//! Extension traits for `str` with empty-as-none semantics.
//!
//! Content API text fields come back as empty strings rather than absent
//! values, so callers frequently need to treat `""` as missing.

/// Extension trait for `str` to handle empty-as-none semantics.
pub trait StrExt {
    /// Returns `Some(self)` if non-empty after trimming, `None` otherwise.
    #[must_use]
    fn non_empty(&self) -> Option<&str>;

    /// Returns self if non-empty, otherwise returns `default`.
    #[must_use]
    fn or_str<'a>(&'a self, default: &'a str) -> &'a str;
}

impl StrExt for str {
    #[inline]
    fn non_empty(&self) -> Option<&str> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    #[inline]
    fn or_str<'a>(&'a self, default: &'a str) -> &'a str {
        if self.is_empty() { default } else { self }
    }
}
