//! Static tool catalog: the id → display name table and tool card content.
//!
//! Adding a tool means adding a row to [`TOOLS`].

use crate::types::tool::ToolInfo;

/// Every tool linked from the landing page.
pub const TOOLS: &[ToolInfo] = &[
    ToolInfo {
        id: "kelime-sayaci",
        name: "Kelime Sayacı",
        description: "Metninizdeki kelime, karakter ve paragraf sayısını anında hesaplayın.",
    },
    ToolInfo {
        id: "pdf-donusturucu",
        name: "PDF Dönüştürücü",
        description: "PDF dosyalarınızı Word, metin ve görsel formatlarına dönüştürün.",
    },
    ToolInfo {
        id: "kalori-hesaplayici",
        name: "Kalori Hesaplayıcı",
        description: "Günlük kalori ihtiyacınızı yaş, kilo ve aktivite düzeyine göre hesaplayın.",
    },
    ToolInfo {
        id: "thumbnail-olusturucu",
        name: "YouTube Thumbnail Oluşturucu",
        description: "Videolarınız için dikkat çekici küçük resimler (görsel) tasarlayın.",
    },
];

/// Looks up a tool by its exact id.
pub fn find(id: &str) -> Option<&'static ToolInfo> {
    TOOLS.iter().find(|t| t.id == id)
}

/// Human-readable name for a tool id; unknown ids pass through verbatim.
pub fn display_name(id: &str) -> String {
    find(id)
        .map(|t| t.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Link target for a tool id.
pub fn tool_url(id: &str) -> String {
    format!("/tools/{}.html", id)
}

/// Extracts the tool id from a tool link's `href`.
///
/// `/tools/kelime-sayaci.html?ref=nav` → `kelime-sayaci`. Query strings and
/// fragments are ignored. Returns `None` for in-page anchors (`#...`), an empty
/// href, or an href whose last path segment is empty.
pub fn tool_id_from_href(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let path = href.split(|c| c == '?' || c == '#').next().unwrap_or(href);
    let last = path.rsplit('/').next().unwrap_or(path);
    let id = last.strip_suffix(".html").unwrap_or(last);
    if id.trim().is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
