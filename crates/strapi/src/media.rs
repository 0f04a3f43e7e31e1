//! Media URL resolution.
//!
//! Strapi's local upload provider returns paths relative to the API host
//! (`/uploads/...`) while cloud providers return absolute URLs.

use landing_core::StrExt;

/// Turns upload paths into absolute URLs against the content API host.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base_url: String,
}

impl MediaResolver {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve an image path.
    ///
    /// - `None` or empty stays `None`
    /// - absolute `http://` / `https://` URLs are returned unchanged
    /// - anything else is prefixed with the base URL
    #[must_use]
    pub fn image_url(&self, path: Option<&str>) -> Option<String> {
        let path = path.and_then(|p| p.non_empty())?;

        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }

        Some(format!("{}{path}", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_stays_missing() {
        let resolver = MediaResolver::new("http://localhost:1337");
        assert_eq!(resolver.image_url(None), None);
        assert_eq!(resolver.image_url(Some("")), None);
    }

    #[test]
    fn absolute_urls_pass_through() {
        let resolver = MediaResolver::new("http://localhost:1337");
        assert_eq!(
            resolver.image_url(Some("https://cdn.example.com/a.jpg")).as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(
            resolver.image_url(Some("http://cdn.example.com/a.jpg")).as_deref(),
            Some("http://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn relative_paths_are_prefixed() {
        let resolver = MediaResolver::new("https://cms.example.com/");
        assert_eq!(
            resolver.image_url(Some("/uploads/ujang.jpg")).as_deref(),
            Some("https://cms.example.com/uploads/ujang.jpg")
        );
    }
}
