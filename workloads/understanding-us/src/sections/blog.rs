//! Blog story cards.

use super::html_escape;
use crate::data::BlogItem;

/// Render story summaries as cards, in input order.
pub fn render_blog(items: &[BlogItem]) -> String {
    items
        .iter()
        .map(|item| {
            let byline = match &item.author {
                Some(author) => format!("{} &middot; {}", html_escape(&item.date), html_escape(author)),
                None => html_escape(&item.date),
            };
            format!(
                r#"<div class="press-card blog-card" style="padding: 30px; border-top: 4px solid var(--accent-earth);">
        <span class="blog-category" style="color:var(--accent-teal); font-weight:900; letter-spacing:0.1em; text-transform:uppercase; font-size:0.75rem; display:block; margin-bottom:15px;">{}</span>
        <h3 style="font-size: 1.4rem; margin-bottom: 15px;">{}</h3>
        <p style="font-size: 0.95rem; color: #666; line-height: 1.6;">{}</p>
        <div class="blog-byline" style="margin-top: 20px; font-size: 0.8rem; color: #999; font-style: italic;">
          {}
        </div>
      </div>"#,
                html_escape(&item.category),
                html_escape(&item.title),
                html_escape(&item.excerpt),
                byline
            )
        })
        .collect()
}
