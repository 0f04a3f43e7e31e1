//! Core library with shared types and helpers for the landing service.
//!
//! - Error type with automatic HTTP response conversion
//! - WhatsApp number normalization and click-to-chat links
//! - String helpers for empty-as-none handling

pub mod error;
pub mod str_ext;
pub mod whatsapp;

pub use error::{AppError, AppResult, OptionAppExt};
pub use str_ext::StrExt;
pub use whatsapp::{DEFAULT_MESSAGE, build_link, normalize_number};
