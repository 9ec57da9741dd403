//! Markup for the JSON-backed lists.

mod blog;
mod press;

pub use blog::*;
pub use press::*;

/// Markup shown in place of a list whose data could not be loaded.
pub fn render_placeholder(text: &str) -> String {
    format!(
        r#"<p class="text-center text-muted">{}</p>"#,
        html_escape(text)
    )
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
