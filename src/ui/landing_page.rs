//! Static markup of the Toolvana landing page.

use super::dom::{Element, Page};
use super::recent_tools_widget::LINK_CLASS;
use super::search_widget::CARD_CLASS;
use crate::services::tool_catalog::{self, TOOLS};

pub const TOOLS_SECTION_ID: &str = "araclar";
pub const RECENT_LIST_ID: &str = "recent-tools-list";
pub const RESET_BUTTON_ID: &str = "reset-recent-tools";

fn navbar() -> Element {
    let links = [("#anasayfa", "Ana Sayfa"), ("#araclar", "Araçlar"), ("#iletisim", "İletişim")];
    let mut list = Element::new("ul").with_class("nav-links");
    for (href, label) in links {
        list.append_child(
            Element::new("li").with_child(Element::new("a").with_attr("href", href).with_text(label)),
        );
    }
    Element::new("nav")
        .with_class("navbar")
        .with_child(
            Element::new("a")
                .with_class("logo")
                .with_attr("href", "/")
                .with_text("Toolvana"),
        )
        .with_child(list)
        .with_child(
            Element::new("button")
                .with_class("mobile-menu-toggle")
                .with_attr("aria-label", "Menüyü aç"),
        )
}

fn tool_card(id: &str, name: &str, description: &str) -> Element {
    Element::new("div")
        .with_class(CARD_CLASS)
        .with_child(Element::new("h3").with_text(name))
        .with_child(Element::new("p").with_text(description))
        .with_child(
            Element::new("a")
                .with_class(LINK_CLASS)
                .with_attr("href", &tool_catalog::tool_url(id))
                .with_text("Aracı Kullan"),
        )
}

fn tools_section() -> Element {
    let mut grid = Element::new("div").with_class("tools-grid");
    for tool in TOOLS {
        grid.append_child(tool_card(tool.id, tool.name, tool.description));
    }
    Element::new("section")
        .with_id(TOOLS_SECTION_ID)
        .with_child(Element::new("h2").with_text("Araçlar"))
        .with_child(grid)
}

fn recent_tools_widget() -> Element {
    Element::new("aside")
        .with_class("widget")
        .with_child(Element::new("h4").with_text("Son Kullanılan Araçlar"))
        .with_child(Element::new("ul").with_id(RECENT_LIST_ID).with_class("recent-tools-list"))
        .with_child(
            Element::new("button")
                .with_id(RESET_BUTTON_ID)
                .with_attr("type", "button")
                .with_text("Geçmişi Temizle"),
        )
}

/// Builds the landing page: navbar, tool grid and the recent tools widget.
pub fn build() -> Page {
    let body = Element::new("body")
        .with_child(Element::new("header").with_child(navbar()))
        .with_child(
            Element::new("main")
                .with_child(tools_section())
                .with_child(recent_tools_widget()),
        );
    Page::new(body)
}
