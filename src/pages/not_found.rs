use super::{SiteInfo, layout};

/// Shown when a profile is missing or could not be loaded.
#[must_use]
pub fn render_not_found(site: &SiteInfo) -> String {
    let body = format!(
        r#"        <div class="card">
            <div class="card-body">
                <h1>Sales Not Found</h1>
                <p>The sales representative you're looking for doesn't exist or has been removed.</p>
                <a href="/" class="button secondary">Go Back</a>
            </div>
        </div>
        {footer}"#,
        footer = site.footer(),
    );

    let head = r#"    <meta name="description" content="Sales representative not found">
    <meta name="robots" content="noindex">"#;

    layout(&format!("Sales Not Found - {}", site.name), head, &body)
}
