//! Search bar over the tool grid.
//!
//! Injects the search input and result-count region in front of the grid and
//! applies `ToolSearchIndex` outcomes to the cards: the `hidden` class for
//! filtered-out cards, `span.search-highlight` around matches, and the status text.

use tracing::{debug, warn};

use super::dom::{Element, Node, Page};
use crate::services::tool_search::{SearchOutcome, Segment, ToolSearchIndex};
use crate::types::settings::SelectorSettings;
use crate::types::tool::ToolCard;

pub const SEARCH_INPUT_ID: &str = "tools-search";
pub const CARD_CLASS: &str = "tool-card";
pub const HIDDEN_CLASS: &str = "hidden";
pub const HIGHLIGHT_CLASS: &str = "search-highlight";

const TITLE_SELECTOR: &str = "h3";
const DESCRIPTION_SELECTOR: &str = "p";

/// The markup inserted before the grid.
pub fn search_container() -> Element {
    Element::new("div")
        .with_class("search-container")
        .with_child(
            Element::new("input")
                .with_id(SEARCH_INPUT_ID)
                .with_class("search-input")
                .with_attr("type", "text")
                .with_attr("placeholder", "Araç ara... (örn: metin, görsel)")
                .with_attr("aria-label", "Araçlarda ara"),
        )
        .with_child(
            Element::new("div")
                .with_class("search-results-count")
                .with_attr("aria-live", "polite"),
        )
}

/// Search bar attached to a page's tool grid.
#[derive(Debug, Clone)]
pub struct SearchWidget {
    card_selector: String,
    input_selector: String,
    status_selector: String,
    index: ToolSearchIndex,
}

impl SearchWidget {
    /// Attaches to the grid named in `selectors`.
    ///
    /// Returns `None` when the grid is absent; the search feature then stays inert
    /// and nothing is injected.
    pub fn initialize(page: &mut Page, selectors: &SelectorSettings) -> Option<Self> {
        if let Err(e) = page.query_selector(&selectors.tools_grid) {
            debug!(error = %e, "no tool grid, search disabled");
            return None;
        }

        if page.query_selector(&selectors.search_input).is_err() {
            if let Err(e) = page.insert_before(&selectors.tools_grid, search_container()) {
                warn!(error = %e, "could not insert search bar");
                return None;
            }
        }
        if let Err(e) = page
            .query_selector(&selectors.search_input)
            .and(page.query_selector(&selectors.results_count))
        {
            warn!(error = %e, "search input or result count missing");
            return None;
        }

        let card_selector = format!("{} .{}", selectors.tools_grid, CARD_CLASS);
        let cards = page
            .query_selector_all(&card_selector)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|card| {
                let title = card.query_selector(TITLE_SELECTOR).ok()?;
                let description = card.query_selector(DESCRIPTION_SELECTOR).ok()?;
                Some(ToolCard::new(title.text_content(), description.text_content()))
            })
            .collect::<Vec<_>>();
        debug!(cards = cards.len(), "search initialized");

        Some(Self {
            card_selector,
            input_selector: selectors.search_input.clone(),
            status_selector: selectors.results_count.clone(),
            index: ToolSearchIndex::new(cards),
        })
    }

    pub fn index(&self) -> &ToolSearchIndex {
        &self.index
    }

    /// Runs `term` against the index and writes the outcome into the page.
    pub fn apply(&self, page: &mut Page, term: &str) -> SearchOutcome {
        let outcome = self.index.query(term);

        let paths = page.body.select_paths(&self.card_selector).unwrap_or_default();
        let mut results = outcome.cards.iter();
        for path in paths {
            let Some(card) = page.body.at_path_mut(&path) else {
                continue;
            };
            card.unwrap_class(HIGHLIGHT_CLASS);
            let (Some(title_path), Some(desc_path)) = (
                first_path(card, TITLE_SELECTOR),
                first_path(card, DESCRIPTION_SELECTOR),
            ) else {
                continue;
            };
            let Some(result) = results.next() else {
                break;
            };

            card.toggle_class(HIDDEN_CLASS, !result.visible);
            if let (Some(segments), Some(title)) = (&result.title, card.at_path_mut(&title_path)) {
                write_segments(title, segments);
            }
            if let (Some(segments), Some(desc)) = (&result.description, card.at_path_mut(&desc_path)) {
                write_segments(desc, segments);
            }
        }

        match page.query_selector_mut(&self.status_selector) {
            Ok(status) => status.set_text(&outcome.status),
            Err(e) => warn!(error = %e, "result count element missing"),
        }
        debug!(term, visible = outcome.visible_count, "search applied");
        outcome
    }

    /// Current value of the search input.
    pub fn input_value(&self, page: &Page) -> String {
        page.query_selector(&self.input_selector)
            .ok()
            .and_then(|input| input.attr("value"))
            .unwrap_or_default()
            .to_string()
    }

    /// Records what the user typed into the input element.
    pub fn set_input_value(&self, page: &mut Page, value: &str) {
        if let Ok(input) = page.query_selector_mut(&self.input_selector) {
            input.set_attr("value", value);
        }
    }

    /// Moves page focus to the search input.
    pub fn focus(&self, page: &mut Page) {
        if let Some(id) = self.input_id(page) {
            page.focus(&id);
        }
    }

    fn input_id(&self, page: &Page) -> Option<String> {
        page.query_selector(&self.input_selector)
            .ok()
            .and_then(|input| input.id.clone())
    }

    /// Escape: empties the input, shows every card, and drops focus.
    pub fn reset(&self, page: &mut Page) -> SearchOutcome {
        self.set_input_value(page, "");
        let outcome = self.apply(page, "");
        if let Some(id) = self.input_id(page) {
            page.blur(&id);
        }
        outcome
    }
}

fn first_path(element: &Element, selector: &str) -> Option<Vec<usize>> {
    element.select_paths(selector).ok()?.into_iter().next()
}

fn write_segments(element: &mut Element, segments: &[Segment]) {
    element.children = segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Node::text(text.clone()),
            Segment::Match(text) => Element::new("span")
                .with_class(HIGHLIGHT_CLASS)
                .with_text(text)
                .into(),
        })
        .collect();
}
