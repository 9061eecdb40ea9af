//! Unit tests for the page model: selectors, mutation and serialization.

use rstest::rstest;
use toolvana::types::errors::PageError;
use toolvana::ui::dom::{Element, Node, Page};

fn sample_page() -> Page {
    Page::new(
        Element::new("body")
            .with_child(
                Element::new("section")
                    .with_id("araclar")
                    .with_child(Element::new("h2").with_text("Araçlar"))
                    .with_child(
                        Element::new("div")
                            .with_class("tools-grid")
                            .with_child(
                                Element::new("div")
                                    .with_class("tool-card")
                                    .with_child(Element::new("h3").with_text("Bir"))
                                    .with_child(Element::new("p").with_text("birinci")),
                            )
                            .with_child(
                                Element::new("div")
                                    .with_class("tool-card")
                                    .with_class("featured")
                                    .with_child(Element::new("h3").with_text("İki"))
                                    .with_child(Element::new("p").with_text("ikinci")),
                            ),
                    ),
            )
            .with_child(Element::new("div").with_class("tools-grid")),
    )
}

#[rstest]
#[case("#araclar", "section")]
#[case(".tool-card", "div")]
#[case("h3", "h3")]
#[case("div.featured", "div")]
#[case("#araclar .tools-grid", "div")]
#[case("section div.tool-card h3", "h3")]
fn test_selector_finds_element(#[case] selector: &str, #[case] tag: &str) {
    let page = sample_page();
    assert_eq!(page.query_selector(selector).unwrap().tag, tag);
}

#[test]
fn test_descendant_chain_is_scoped() {
    let page = sample_page();
    assert_eq!(page.query_selector_all(".tools-grid").unwrap().len(), 2);
    assert_eq!(page.query_selector_all("#araclar .tools-grid").unwrap().len(), 1);
    let cards = page
        .query_selector_all("#araclar .tools-grid .tool-card")
        .unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].query_selector("h3").unwrap().text_content(), "İki");
}

#[test]
fn test_missing_element_is_not_found() {
    let page = sample_page();
    assert!(matches!(
        page.query_selector("#nope"),
        Err(PageError::ElementNotFound(_))
    ));
    assert!(page.query_selector_all(".nope").unwrap().is_empty());
}

#[rstest]
#[case("")]
#[case("div > p")]
#[case("#a#b")]
#[case("a[href]")]
#[case(".")]
fn test_invalid_selector_is_rejected(#[case] selector: &str) {
    let page = sample_page();
    assert!(matches!(
        page.query_selector(selector),
        Err(PageError::InvalidSelector(_))
    ));
}

#[test]
fn test_class_toggling() {
    let mut el = Element::new("div").with_class("tool-card");
    el.toggle_class("hidden", true);
    el.toggle_class("hidden", true);
    assert_eq!(el.classes(), ["tool-card", "hidden"]);
    el.toggle_class("hidden", false);
    assert!(!el.has_class("hidden"));
    el.remove_class("missing");
    assert_eq!(el.classes(), ["tool-card"]);
}

#[test]
fn test_set_text_and_attrs() {
    let mut el = Element::new("input").with_attr("type", "text");
    el.set_attr("value", "pdf");
    el.set_attr("value", "word");
    assert_eq!(el.attr("value"), Some("word"));
    el.remove_attr("value");
    assert_eq!(el.attr("value"), None);

    let mut status = Element::new("div").with_text("3 araç bulundu");
    status.set_text("");
    assert!(status.children.is_empty());
}

#[test]
fn test_normalize_merges_text_nodes() {
    let mut el = Element::new("h3");
    el.append_child(Node::text("Kel"));
    el.append_child(Node::text(""));
    el.append_child(Node::text("ime"));
    el.normalize();
    assert_eq!(el.children, vec![Node::text("Kelime")]);
}

#[test]
fn test_unwrap_class_restores_plain_text() {
    let mut el = Element::new("h3")
        .with_child(Node::text("PDF "))
        .with_child(
            Element::new("span")
                .with_class("search-highlight")
                .with_text("Dön"),
        )
        .with_child(Node::text("üştürücü"));
    assert_eq!(el.unwrap_class("search-highlight"), 1);
    assert_eq!(el.children, vec![Node::text("PDF Dönüştürücü")]);
    assert_eq!(el.unwrap_class("search-highlight"), 0);
}

#[test]
fn test_insert_before_places_sibling() {
    let mut page = sample_page();
    page.insert_before("#araclar .tools-grid", Element::new("div").with_id("bar"))
        .unwrap();
    let section = page.query_selector("#araclar").unwrap();
    let ids: Vec<Option<&str>> = section
        .child_elements()
        .map(|e| e.id.as_deref())
        .collect();
    assert_eq!(ids, vec![None, Some("bar"), None]);
    assert!(page.insert_before("#nope", Element::new("div")).is_err());
}

#[test]
fn test_focus_and_blur() {
    let mut page = sample_page();
    page.focus("tools-search");
    assert_eq!(page.focused(), Some("tools-search"));
    page.blur("other");
    assert_eq!(page.focused(), Some("tools-search"));
    page.blur("tools-search");
    assert_eq!(page.focused(), None);
}

#[test]
fn test_html_serialization() {
    let el = Element::new("p")
        .with_id("x")
        .with_class("a")
        .with_attr("title", "say \"hi\"")
        .with_text("1 < 2 & 3")
        .with_child(Element::new("br"));
    assert_eq!(
        el.to_html(),
        "<p id=\"x\" class=\"a\" title=\"say &quot;hi&quot;\">1 &lt; 2 &amp; 3<br></p>"
    );
    assert_eq!(el.inner_html(), "1 &lt; 2 &amp; 3<br>");
}
