//! Sales representative landing pages.
//!
//! Serves a public profile page per salesperson, backed by the Strapi content
//! API, with a WhatsApp click-to-chat link built from the stored number.

pub mod config;
pub mod middleware;
pub mod pages;
pub mod profiles;
pub mod routes;
pub mod startup;
