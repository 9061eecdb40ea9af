//! Renders the recently used tools list into a page container.

use tracing::{debug, warn};

use super::dom::{Element, Page};
use crate::types::tool::RecentToolEntry;

/// Placeholder shown when no tool has been used yet.
pub const EMPTY_MESSAGE: &str = "Henüz araç kullanılmadı";

/// Class carried by every tool link; clicks on these links are tracked.
pub const LINK_CLASS: &str = "widget-link";

/// Builds the `<li>` items for `entries`, or the single placeholder item.
pub fn list_items(entries: &[RecentToolEntry]) -> Vec<Element> {
    if entries.is_empty() {
        return vec![Element::new("li").with_text(EMPTY_MESSAGE)];
    }
    entries
        .iter()
        .map(|entry| {
            Element::new("li").with_child(
                Element::new("a")
                    .with_class(LINK_CLASS)
                    .with_attr("href", &entry.url)
                    .with_text(&entry.name),
            )
        })
        .collect()
}

/// Clears the container matched by `selector` and fills it with `entries`.
///
/// Returns `false` (after logging) when the container cannot be located.
pub fn render(page: &mut Page, selector: &str, entries: &[RecentToolEntry]) -> bool {
    let container = match page.query_selector_mut(selector) {
        Ok(c) => c,
        Err(e) => {
            warn!(selector, error = %e, "recent tools container not found");
            return false;
        }
    };
    container.clear_children();
    for item in list_items(entries) {
        container.append_child(item);
    }
    debug!(selector, count = entries.len(), "rendered recent tools");
    true
}
