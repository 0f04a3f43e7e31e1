use std::fmt::Write as _;

use super::{SiteInfo, html_escape, layout};

/// Landing page with usage instructions and links to sample profiles.
#[must_use]
pub fn render_home(site: &SiteInfo) -> String {
    let samples = if site.sample_profiles.is_empty() {
        String::new()
    } else {
        let links = site
            .sample_profiles
            .iter()
            .fold(String::new(), |mut out, uid| {
                let uid = html_escape(uid);
                let _ = write!(out, r#"<a href="/profile/{uid}">/profile/{uid}</a>"#);
                out
            });
        format!(r#"<div class="samples"><p>Sample Profiles:</p>{links}</div>"#)
    };

    let body = format!(
        r#"        {logo}
        <div class="card">
            <div class="card-body">
                <h1>Welcome to {name}</h1>
                <p>Access your sales representative's profile by scanning their QR code or entering their profile ID.</p>
                {samples}
                <h3>How to use:</h3>
                <ol>
                    <li>Scan the QR code with your phone</li>
                    <li>You'll be redirected to the salesperson's profile</li>
                    <li>Click "Chat on WhatsApp" to connect</li>
                </ol>
            </div>
        </div>
        {footer}"#,
        logo = site.logo(),
        name = html_escape(&site.name),
        footer = site.footer(),
    );

    let description = format!(
        r#"    <meta name="description" content="{} Sales Representative Landing Pages">"#,
        html_escape(&site.name)
    );

    layout(&format!("{} - Landing Pages", site.name), &description, &body)
}
