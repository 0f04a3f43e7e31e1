//! Salesperson lookup and the view model shared by the HTML and JSON routes.

use async_trait::async_trait;
use landing_core::{StrExt, build_link};
use landing_strapi::{MediaResolver, ProfileLookup, Salesperson, StrapiClient, StrapiError};
use serde::Serialize;
use tracing::{error, warn};

/// Source of salesperson records.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Look up a salesperson by `sales_uid`.
    async fn find_salesperson(&self, uid: &str) -> Result<ProfileLookup, StrapiError>;
}

#[async_trait]
impl ProfileSource for StrapiClient {
    async fn find_salesperson(&self, uid: &str) -> Result<ProfileLookup, StrapiError> {
        Self::find_salesperson(self, uid).await
    }
}

/// Fetch a salesperson for page rendering.
///
/// Not found and fetch failures both yield `None`; only the log level differs.
/// Blank UIDs are never sent upstream.
pub async fn load_salesperson(source: &dyn ProfileSource, uid: &str) -> Option<Salesperson> {
    let Some(uid) = uid.non_empty() else {
        warn!("Empty profile UID");
        return None;
    };

    match source.find_salesperson(uid).await {
        Ok(ProfileLookup::Found(salesperson)) => Some(*salesperson),
        Ok(ProfileLookup::NotFound) => {
            warn!(uid, "Salesperson not found");
            None
        }
        Err(e) => {
            error!(uid, error = %e, "Failed to fetch salesperson");
            landing_telemetry::capture_error(&e);
            None
        }
    }
}

/// Display data for a profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub uid: String,
    pub name: String,
    pub city: String,
    pub province: String,
    pub online: bool,
    pub photo_url: Option<String>,
    pub whatsapp_link: String,
}

impl ProfileView {
    #[must_use]
    pub fn new(salesperson: &Salesperson, media: &MediaResolver) -> Self {
        let photo = salesperson
            .photo_profile
            .as_ref()
            .and_then(|photo| photo.preferred_url());

        Self {
            uid: salesperson.sales_uid.clone(),
            name: salesperson.surename.clone(),
            city: salesperson.city.clone(),
            province: salesperson.province.clone(),
            online: salesperson.online_stat,
            photo_url: media.image_url(photo),
            whatsapp_link: build_link(&salesperson.wanumber, None),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use landing_strapi::PhotoProfile;

    use super::*;

    /// In-memory profile source. UIDs in `failing` return a status error.
    #[derive(Default)]
    pub(crate) struct StubSource {
        pub(crate) profiles: HashMap<String, Salesperson>,
        pub(crate) failing: Vec<String>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubSource {
        pub(crate) fn with(salesperson: Salesperson) -> Self {
            let mut source = Self::default();
            source
                .profiles
                .insert(salesperson.sales_uid.clone(), salesperson);
            source
        }
    }

    #[async_trait]
    impl ProfileSource for StubSource {
        async fn find_salesperson(&self, uid: &str) -> Result<ProfileLookup, StrapiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.iter().any(|f| f == uid) {
                return Err(StrapiError::Status(http::StatusCode::BAD_GATEWAY));
            }
            Ok(self
                .profiles
                .get(uid)
                .cloned()
                .map_or(ProfileLookup::NotFound, |s| ProfileLookup::Found(Box::new(s))))
        }
    }

    pub(crate) fn ujang() -> Salesperson {
        Salesperson {
            sales_uid: "SALES-1766286554860".to_string(),
            surename: "Ujang".to_string(),
            city: "Bandung".to_string(),
            province: "Jawa Barat".to_string(),
            wanumber: "0812-3456-7890".to_string(),
            online_stat: true,
            photo_profile: Some(PhotoProfile {
                url: "/uploads/ujang.jpg".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn view_builds_whatsapp_link_and_photo_url() {
        let media = MediaResolver::new("https://cms.example.com");
        let view = ProfileView::new(&ujang(), &media);

        assert_eq!(view.name, "Ujang");
        assert!(view.online);
        assert_eq!(
            view.photo_url.as_deref(),
            Some("https://cms.example.com/uploads/ujang.jpg")
        );
        assert!(
            view.whatsapp_link
                .starts_with("https://wa.me/6281234567890?text=Hi%2C%20I%20found")
        );
    }

    #[test]
    fn view_without_photo() {
        let salesperson = Salesperson {
            photo_profile: None,
            ..ujang()
        };
        let view = ProfileView::new(&salesperson, &MediaResolver::new("http://localhost:1337"));
        assert_eq!(view.photo_url, None);
    }

    #[tokio::test]
    async fn found_profile_is_returned() {
        let source = StubSource::with(ujang());
        let salesperson = load_salesperson(&source, "SALES-1766286554860").await;
        assert_eq!(salesperson.map(|s| s.surename).as_deref(), Some("Ujang"));
    }

    #[tokio::test]
    async fn not_found_and_failure_are_collapsed() {
        let source = StubSource {
            failing: vec!["SALES-BROKEN".to_string()],
            ..StubSource::with(ujang())
        };

        assert!(load_salesperson(&source, "SALES-MISSING").await.is_none());
        assert!(load_salesperson(&source, "SALES-BROKEN").await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn blank_uid_skips_lookup() {
        let source = StubSource::default();
        assert!(load_salesperson(&source, "  ").await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
