//! Strapi content API client.
//!
//! Reads sales representative profiles and dealer branches from the headless
//! CMS and resolves uploaded media paths to absolute URLs.
//!
//! # Example
//!
//! ```ignore
//! let config = StrapiConfig::new("https://cms.example.com").with_api_key(api_key);
//! let client = StrapiClient::new(config)?;
//! match client.find_salesperson("SALES-1766286554860").await? {
//!     ProfileLookup::Found(salesperson) => println!("{}", salesperson.surename),
//!     ProfileLookup::NotFound => println!("no such profile"),
//! }
//! ```

mod client;
mod media;
mod models;

use landing_core::AppError;

pub use client::{DEFAULT_TIMEOUT, ProfileLookup, StrapiClient, StrapiConfig, StrapiError};
pub use media::MediaResolver;
pub use models::{
    Branch, GeoPoint, ImageFormat, Meta, Pagination, PhotoFormats, PhotoProfile, Salesperson,
    StrapiResponse,
};

impl From<StrapiError> for AppError {
    fn from(error: StrapiError) -> Self {
        match error {
            StrapiError::Transport(_) | StrapiError::Status(_) => {
                Self::Unavailable(format!("Content API: {error}"))
            }
            StrapiError::InvalidUrl(_) | StrapiError::Client(_) | StrapiError::Decode(_) => {
                Self::Internal(format!("Content API: {error}"))
            }
        }
    }
}
