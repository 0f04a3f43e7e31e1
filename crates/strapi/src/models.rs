//! Record types returned by the Strapi content API.
//!
//! Strapi emits `null` for empty text and boolean fields, so those fields go
//! through [`nullable`] and fall back to their defaults instead of failing the
//! whole record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collection envelope: `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct StrapiResponse<T> {
    #[serde(default, deserialize_with = "nullable")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

/// Sales representative (`sales-profiles` collection).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Salesperson {
    pub id: u64,
    #[serde(rename = "documentId", deserialize_with = "nullable")]
    pub document_id: String,
    #[serde(deserialize_with = "nullable")]
    pub sales_uid: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    /// Display name (field name as defined in the content type).
    #[serde(deserialize_with = "nullable")]
    pub surename: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub city: String,
    #[serde(deserialize_with = "nullable")]
    pub province: String,
    #[serde(deserialize_with = "nullable")]
    pub phonenumber: String,
    /// WhatsApp number, free-form.
    #[serde(deserialize_with = "nullable")]
    pub wanumber: String,
    #[serde(deserialize_with = "nullable")]
    pub namasupervisor: String,
    #[serde(deserialize_with = "nullable")]
    pub approved: bool,
    #[serde(deserialize_with = "nullable")]
    pub blocked: bool,
    pub location: Option<GeoPoint>,
    #[serde(deserialize_with = "nullable")]
    pub online_stat: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    pub photo_profile: Option<PhotoProfile>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Uploaded media file attached to a profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhotoProfile {
    pub id: u64,
    #[serde(rename = "documentId", deserialize_with = "nullable")]
    pub document_id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub width: u32,
    #[serde(deserialize_with = "nullable")]
    pub height: u32,
    pub formats: Option<PhotoFormats>,
    #[serde(deserialize_with = "nullable")]
    pub hash: String,
    #[serde(deserialize_with = "nullable")]
    pub ext: String,
    #[serde(deserialize_with = "nullable")]
    pub mime: String,
    /// Size in kilobytes.
    #[serde(deserialize_with = "nullable")]
    pub size: f64,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(rename = "previewUrl")]
    pub preview_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub provider: String,
    pub provider_metadata: Option<serde_json::Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

impl PhotoProfile {
    /// URL to display: `medium`, then `small`, then the original upload.
    ///
    /// Returns `None` when the original upload has no URL.
    #[must_use]
    pub fn preferred_url(&self) -> Option<&str> {
        if self.url.is_empty() {
            return None;
        }

        let formats = self.formats.as_ref();
        [
            formats.and_then(|f| f.medium.as_ref()),
            formats.and_then(|f| f.small.as_ref()),
        ]
        .into_iter()
        .flatten()
        .map(|format| format.url.as_str())
        .find(|url| !url.is_empty())
        .or(Some(self.url.as_str()))
    }
}

/// Resized variants generated by the upload plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhotoFormats {
    pub thumbnail: Option<ImageFormat>,
    pub small: Option<ImageFormat>,
    pub medium: Option<ImageFormat>,
    pub large: Option<ImageFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageFormat {
    #[serde(deserialize_with = "nullable")]
    pub ext: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub hash: String,
    #[serde(deserialize_with = "nullable")]
    pub mime: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub path: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub size: f64,
    #[serde(deserialize_with = "nullable")]
    pub width: u32,
    #[serde(deserialize_with = "nullable")]
    pub height: u32,
    #[serde(rename = "sizeInBytes", deserialize_with = "nullable")]
    pub size_in_bytes: f64,
}

/// Dealer branch (`branches` collection).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Branch {
    pub id: u64,
    #[serde(rename = "documentId", deserialize_with = "nullable")]
    pub document_id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(deserialize_with = "nullable")]
    pub longitude: f64,
    #[serde(deserialize_with = "nullable")]
    pub city: String,
    #[serde(deserialize_with = "nullable")]
    pub province: String,
    #[serde(deserialize_with = "nullable")]
    pub phone_number: String,
    #[serde(deserialize_with = "nullable")]
    pub whatsapp_number: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn format(url: &str) -> ImageFormat {
        ImageFormat {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_sales_profile_response() {
        let body = json!({
            "data": [{
                "id": 3,
                "documentId": "k2j3h4",
                "sales_uid": "SALES-1766286554860",
                "email": "ujang@example.com",
                "surename": "Ujang",
                "address": null,
                "city": "Bandung",
                "province": "Jawa Barat",
                "phonenumber": "081234567890",
                "wanumber": "0812-3456-7890",
                "namasupervisor": "Budi",
                "approved": true,
                "blocked": null,
                "location": { "latitude": -6.9, "longitude": 107.6 },
                "online_stat": true,
                "createdAt": "2024-12-21T03:09:14.860Z",
                "updatedAt": "2024-12-21T03:09:14.860Z",
                "publishedAt": null,
                "photo_profile": {
                    "id": 9,
                    "documentId": "p9",
                    "name": "ujang.jpg",
                    "alternativeText": null,
                    "caption": null,
                    "width": 800,
                    "height": 800,
                    "formats": {
                        "small": { "url": "/uploads/small_ujang.jpg", "width": 500, "height": 500 }
                    },
                    "hash": "ujang_abc",
                    "ext": ".jpg",
                    "mime": "image/jpeg",
                    "size": 81.5,
                    "url": "/uploads/ujang.jpg",
                    "previewUrl": null,
                    "provider": "local",
                    "provider_metadata": null
                }
            }],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 1 } }
        });

        let response: StrapiResponse<Salesperson> = serde_json::from_value(body).unwrap();
        assert_eq!(response.data.len(), 1);

        let salesperson = &response.data[0];
        assert_eq!(salesperson.sales_uid, "SALES-1766286554860");
        assert_eq!(salesperson.surename, "Ujang");
        assert_eq!(salesperson.address, "");
        assert!(!salesperson.blocked);
        assert!(salesperson.online_stat);
        assert!(salesperson.created_at.is_some());
        assert!(salesperson.published_at.is_none());

        let photo = salesperson.photo_profile.as_ref().unwrap();
        assert_eq!(photo.preferred_url(), Some("/uploads/small_ujang.jpg"));

        let pagination = response.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.page_size, 25);
        assert_eq!(pagination.total, 1);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let response: StrapiResponse<Salesperson> =
            serde_json::from_value(json!({ "data": [{ "sales_uid": "S-1" }] })).unwrap();

        let salesperson = &response.data[0];
        assert_eq!(salesperson.sales_uid, "S-1");
        assert_eq!(salesperson.wanumber, "");
        assert!(salesperson.photo_profile.is_none());
        assert!(response.meta.is_none());
    }

    #[test]
    fn null_data_is_empty() {
        let response: StrapiResponse<Branch> =
            serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn parses_branch() {
        let response: StrapiResponse<Branch> = serde_json::from_value(json!({
            "data": [{
                "id": 1,
                "documentId": "b1",
                "name": "Karunia Motor Cimahi",
                "address": "Jl. Amir Machmud 1",
                "latitude": -6.87,
                "longitude": 107.54,
                "city": "Cimahi",
                "province": "Jawa Barat",
                "phone_number": "022-6654321",
                "whatsapp_number": "081200000000"
            }]
        }))
        .unwrap();

        assert_eq!(response.data[0].name, "Karunia Motor Cimahi");
        assert_eq!(response.data[0].whatsapp_number, "081200000000");
    }

    #[test]
    fn preferred_url_order() {
        let mut photo = PhotoProfile {
            url: "/uploads/original.jpg".to_string(),
            formats: Some(PhotoFormats {
                small: Some(format("/uploads/small.jpg")),
                medium: Some(format("/uploads/medium.jpg")),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(photo.preferred_url(), Some("/uploads/medium.jpg"));

        photo.formats = Some(PhotoFormats {
            medium: Some(format("")),
            ..Default::default()
        });
        assert_eq!(photo.preferred_url(), Some("/uploads/original.jpg"));

        photo.formats = None;
        assert_eq!(photo.preferred_url(), Some("/uploads/original.jpg"));
    }

    #[test]
    fn preferred_url_requires_original_upload() {
        let photo = PhotoProfile {
            formats: Some(PhotoFormats {
                medium: Some(format("/uploads/medium.jpg")),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(photo.preferred_url(), None);
    }
}
