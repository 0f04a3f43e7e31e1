use super::{SiteInfo, html_escape, layout};
use crate::profiles::ProfileView;

/// Public profile card for a salesperson.
#[must_use]
pub fn render_profile(site: &SiteInfo, profile: &ProfileView) -> String {
    let name = html_escape(&profile.name);
    let brand = html_escape(&site.name);

    let photo = profile.photo_url.as_deref().map_or_else(
        || r#"<span class="photo placeholder" role="img" aria-label="No photo">&#128100;</span>"#.to_string(),
        |url| {
            format!(
                r#"<img class="photo" src="{src}" alt="{name}" width="128" height="128">"#,
                src = html_escape(url),
            )
        },
    );

    let (status_class, status_text) = if profile.online {
        ("online", "Online - Available Now")
    } else {
        ("offline", "Offline - Available Soon")
    };

    let available = if profile.online {
        "<span>Available</span>"
    } else {
        ""
    };

    let body = format!(
        r#"        {logo}
        <div class="card">
            <div class="photo-frame">{photo}</div>
            <div class="card-body">
                <h1>{name}</h1>
                <div class="status {status_class}">{status_text}</div>
                <p>Trusted sales representative ready to help you find the perfect vehicle. Contact me for personalized service and exclusive offers.</p>
                <a href="{whatsapp}" class="button" target="_blank" rel="noopener noreferrer">Chat on WhatsApp</a>
                <div class="trust">
                    <span>&#10004; Verified</span>
                    <span>{city}</span>
                    {available}
                </div>
            </div>
        </div>
        {footer}"#,
        logo = site.logo(),
        whatsapp = html_escape(&profile.whatsapp_link),
        city = html_escape(&profile.city),
        footer = site.footer(),
    );

    let head = format!(
        r#"    <meta name="description" content="{name} - Authorized Sales Representative at {brand}">
    <meta property="og:title" content="{name} - {brand}">
    <meta property="og:description" content="Authorized Sales Representative at {brand}">
    <meta property="og:type" content="website">"#
    );

    layout(
        &format!("{} - Authorized Sales | {}", profile.name, site.name),
        &head,
        &body,
    )
}
