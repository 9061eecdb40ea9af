//! Property-based tests for search highlighting.
//!
//! Highlighting must never change a field's text, and clearing the query must
//! restore every card exactly as it was, for arbitrary titles, descriptions
//! and terms (including regex metacharacters).

use proptest::prelude::*;
use toolvana::services::tool_search::{highlight_pattern, highlight_segments, Segment};
use toolvana::types::settings::SelectorSettings;
use toolvana::ui::dom::{Element, Page};
use toolvana::ui::search_widget::{SearchWidget, HIDDEN_CLASS};

fn arb_text() -> impl Strategy<Value = String> {
    "[ a-zA-Z.*()+?|]{1,30}"
}

fn arb_term() -> impl Strategy<Value = String> {
    "[a-zA-Z.*()+?|]{1,4}"
}

fn page_with_card(title: &str, description: &str) -> Page {
    let card = Element::new("div")
        .with_class("tool-card")
        .with_child(Element::new("h3").with_text(title))
        .with_child(Element::new("p").with_text(description));
    Page::new(
        Element::new("body").with_child(
            Element::new("section")
                .with_id("araclar")
                .with_child(Element::new("div").with_class("tools-grid").with_child(card)),
        ),
    )
}

// **Property: segments reproduce the text**
//
// *For any* text and term, concatenating the highlight segments yields the
// original text, and every matched segment equals the term ignoring case.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn segments_reproduce_text(text in arb_text(), term in arb_term()) {
        let re = highlight_pattern(&term).expect("escaped term compiles");
        let segments = highlight_segments(&text, &re);

        let joined: String = segments.iter().map(Segment::text).collect();
        prop_assert_eq!(&joined, &text);

        for segment in &segments {
            if let Segment::Match(m) = segment {
                prop_assert_eq!(m.to_lowercase(), term.to_lowercase());
            }
        }
    }
}

// **Property: highlight then clear is lossless**
//
// *For any* card and term, applying the term and then the empty query leaves
// the card identical to its original markup; visibility follows substring
// containment in either field.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn highlight_then_clear_restores_card(
        title in arb_text(),
        description in arb_text(),
        term in arb_term(),
    ) {
        let mut page = page_with_card(&title, &description);
        let widget = SearchWidget::initialize(&mut page, &SelectorSettings::default())
            .expect("grid present");
        let original = page.query_selector(".tool-card").unwrap().clone();

        let outcome = widget.apply(&mut page, &term);
        let lower = term.to_lowercase();
        let expected_visible = title.to_lowercase().contains(&lower)
            || description.to_lowercase().contains(&lower);
        prop_assert_eq!(outcome.visible_count == 1, expected_visible);

        let card = page.query_selector(".tool-card").unwrap();
        prop_assert_eq!(card.has_class(HIDDEN_CLASS), !expected_visible);
        prop_assert_eq!(card.query_selector("h3").unwrap().text_content(), title.clone());
        prop_assert_eq!(card.query_selector("p").unwrap().text_content(), description.clone());

        widget.apply(&mut page, "");
        let restored = page.query_selector(".tool-card").unwrap();
        prop_assert_eq!(restored, &original);
    }
}
