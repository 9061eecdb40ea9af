//! Tool Search Index: incremental substring search over the tool cards.
//!
//! Pure computation: given a query term it decides, per card, visibility and
//! which parts of the title and description to highlight, plus the result-count
//! message. Applying the outcome to the page lives in `ui::search_widget`.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::types::tool::ToolCard;

/// Message for a non-empty term with no matching card.
pub const NO_RESULTS_MESSAGE: &str = "Hiç araç bulunamadı";

/// Piece of a field's text, either plain or a highlighted match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(t) | Segment::Match(t) => t,
        }
    }
}

/// Search result for one card. `None` highlight means "restore plain text".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMatch {
    pub visible: bool,
    pub title: Option<Vec<Segment>>,
    pub description: Option<Vec<Segment>>,
}

/// Result of one query over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub term: String,
    pub cards: Vec<CardMatch>,
    pub visible_count: usize,
    pub status: String,
}

/// Status text shown under the search input.
pub fn results_message(term: &str, visible_count: usize) -> String {
    if term.is_empty() {
        String::new()
    } else if visible_count == 0 {
        NO_RESULTS_MESSAGE.to_string()
    } else {
        format!("{} araç bulundu", visible_count)
    }
}

/// Compiles a case-insensitive pattern that matches `term` literally.
pub fn highlight_pattern(term: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(term, error = %e, "could not build highlight pattern");
            None
        }
    }
}

/// Splits `text` into plain and matched segments; concatenating the segment
/// texts always reproduces `text`.
pub fn highlight_segments(text: &str, pattern: &Regex) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Match(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    segments
}

/// Case-insensitive substring test.
pub fn matches_term(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Static collection of tool cards searched by title and description.
#[derive(Debug, Clone, Default)]
pub struct ToolSearchIndex {
    cards: Vec<ToolCard>,
}

impl ToolSearchIndex {
    pub fn new(cards: Vec<ToolCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[ToolCard] {
        &self.cards
    }

    /// Recomputes visibility and highlights for every card.
    ///
    /// An empty term shows everything and clears all highlights.
    pub fn query(&self, term: &str) -> SearchOutcome {
        if term.is_empty() {
            let cards = self
                .cards
                .iter()
                .map(|_| CardMatch {
                    visible: true,
                    title: None,
                    description: None,
                })
                .collect::<Vec<_>>();
            return SearchOutcome {
                term: String::new(),
                visible_count: cards.len(),
                cards,
                status: String::new(),
            };
        }

        let pattern = highlight_pattern(term);
        let highlight = |text: &str| -> Option<Vec<Segment>> {
            if !matches_term(text, term) {
                return None;
            }
            pattern.as_ref().map(|re| highlight_segments(text, re))
        };

        let cards: Vec<CardMatch> = self
            .cards
            .iter()
            .map(|card| {
                let title_match = matches_term(&card.title, term);
                let desc_match = matches_term(&card.description, term);
                CardMatch {
                    visible: title_match || desc_match,
                    title: highlight(&card.title),
                    description: highlight(&card.description),
                }
            })
            .collect();

        let visible_count = cards.iter().filter(|c| c.visible).count();
        SearchOutcome {
            term: term.to_string(),
            status: results_message(term, visible_count),
            visible_count,
            cards,
        }
    }
}
