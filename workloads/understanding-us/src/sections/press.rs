//! Press list.

use super::html_escape;
use crate::data::PressItem;

/// Render press coverage as a list of outbound links, in input order.
pub fn render_press(items: &[PressItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="press-list-item">
        <div class="press-list-date">{}</div>
        <div class="press-list-content">
          <span class="press-list-source">{}</span>
          <h3 class="press-list-title">{}</h3>
        </div>
        <div class="press-list-arrow">→</div>
      </a>"#,
                html_escape(&item.link),
                html_escape(&item.date),
                html_escape(&item.source),
                html_escape(&item.title)
            )
        })
        .collect()
}
