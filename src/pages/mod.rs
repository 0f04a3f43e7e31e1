//! Server-rendered HTML pages.

mod home;
mod not_found;
mod profile;

use chrono::{Datelike, Utc};

pub use home::render_home;
pub use not_found::render_not_found;
pub use profile::render_profile;

/// Site-wide branding shared by every page.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    /// Brand name, e.g. "Karunia Motor".
    pub name: String,
    /// Profile UIDs linked from the home page.
    pub sample_profiles: Vec<String>,
}

impl SiteInfo {
    /// Uppercase initials of the first two words, used as the logo mark.
    fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    fn logo(&self) -> String {
        format!(
            r#"<div class="brand"><span class="logo">{initials}</span><span class="brand-name">{name}</span></div>"#,
            initials = html_escape(&self.initials()),
            name = html_escape(&self.name),
        )
    }

    fn footer(&self) -> String {
        format!(
            r#"<footer>&copy; {year} {name}. All rights reserved.</footer>"#,
            year = Utc::now().year(),
            name = html_escape(&self.name),
        )
    }
}

/// Wrap page content in the shared document shell.
///
/// `title` is escaped here; `head` and `body` must already be escaped.
fn layout(title: &str, head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
{head}
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            margin: 0;
            min-height: 100vh;
            background: linear-gradient(135deg, #fef2f2 0%, #ffffff 100%);
        }}
        main {{
            max-width: 420px;
            margin: 0 auto;
            padding: 32px 16px;
            text-align: center;
        }}
        .card {{
            background-color: #ffffff;
            border-radius: 16px;
            overflow: hidden;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
        }}
        .card-body {{
            padding: 24px 32px;
        }}
        .brand {{
            display: inline-flex;
            align-items: center;
            margin-bottom: 24px;
        }}
        .logo {{
            width: 48px;
            height: 48px;
            line-height: 48px;
            border-radius: 50%;
            background-color: #dc2626;
            color: #ffffff;
            font-weight: 700;
            font-size: 20px;
            margin-right: 12px;
        }}
        .brand-name {{
            font-size: 20px;
            font-weight: 600;
        }}
        .photo-frame {{
            padding: 32px 32px 16px;
            background: linear-gradient(135deg, #ef4444 0%, #dc2626 100%);
        }}
        .photo {{
            width: 128px;
            height: 128px;
            border-radius: 50%;
            border: 4px solid #ffffff;
            object-fit: cover;
            background-color: #e5e7eb;
        }}
        .photo.placeholder {{
            display: inline-block;
            line-height: 128px;
            font-size: 48px;
            color: #9ca3af;
        }}
        .status {{
            display: inline-block;
            border-radius: 999px;
            padding: 6px 16px;
            font-size: 14px;
            font-weight: 500;
            margin-bottom: 24px;
        }}
        .status.online {{
            background-color: #f0fdf4;
            border: 1px solid #bbf7d0;
            color: #166534;
        }}
        .status.offline {{
            background-color: #f9fafb;
            border: 1px solid #e5e7eb;
            color: #4b5563;
        }}
        .button {{
            display: block;
            background-color: #22c55e;
            color: #ffffff !important;
            text-decoration: none;
            padding: 16px 24px;
            border-radius: 12px;
            font-weight: 700;
            font-size: 18px;
        }}
        .button:hover {{
            background-color: #16a34a;
        }}
        .button.secondary {{
            display: inline-block;
            background-color: #dc2626;
            font-size: 16px;
            padding: 8px 16px;
        }}
        .trust {{
            margin-top: 24px;
            font-size: 14px;
            color: #6b7280;
        }}
        .trust span {{
            margin: 0 12px;
        }}
        .samples a {{
            display: block;
            text-align: left;
            background-color: #f9fafb;
            border-radius: 8px;
            padding: 12px;
            margin-bottom: 8px;
            color: #374151;
            text-decoration: none;
        }}
        ol {{
            text-align: left;
            font-size: 14px;
            color: #4b5563;
        }}
        footer {{
            margin-top: 24px;
            font-size: 12px;
            color: #6b7280;
        }}
    </style>
</head>
<body>
    <main>
{body}
    </main>
</body>
</html>"#,
        title = html_escape(title),
    )
}

/// Escape text for HTML element content and quoted attribute values.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
