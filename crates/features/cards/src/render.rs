//! Static rendering entry points.
//!
//! The components stay pure; these functions drive them through the SSR
//! renderer and wrap the result into standalone HTML documents.

use crate::{FactionPage, IndexEntry, IndexPage};
use armyforge_domain::constants::PRODUCT_NAME;
use armyforge_domain::faction::Faction;
use dioxus::prelude::*;

/// Renders the faction page fragment (layout plus unit grid) to HTML.
#[must_use]
pub fn render_faction_page(faction: &Faction) -> String {
    let faction = faction.clone();
    dioxus_ssr::render_element(rsx! {
        FactionPage { faction }
    })
}

/// Renders a complete faction document; the `<title>` is the faction name.
#[must_use]
pub fn render_faction_document(faction: &Faction) -> String {
    document(&faction.name, &render_faction_page(faction))
}

/// Renders the faction index fragment.
#[must_use]
pub fn render_index_page(entries: &[IndexEntry]) -> String {
    let entries = entries.to_vec();
    dioxus_ssr::render_element(rsx! {
        IndexPage { entries }
    })
}

/// Renders the complete index document.
#[must_use]
pub fn render_index_document(entries: &[IndexEntry]) -> String {
    document(PRODUCT_NAME, &render_index_page(entries))
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"fr\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        escape_text(title),
        body
    )
}

/// Minimal text escaping for the hand-assembled document head; body content
/// is escaped by the SSR renderer itself.
fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
