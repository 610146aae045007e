use armyforge_domain::constants::{FOOTER_CAPTION, PRODUCT_NAME};
use dioxus::prelude::*;

/// One line of the generated faction index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub slug: String,
    /// Faction display name used as the link text.
    pub name: String,
}

/// The site index: one link per rendered faction page.
#[component]
pub fn IndexPage(entries: Vec<IndexEntry>) -> Element {
    rsx! {
        div { class: "faction-layout",
            header {
                h1 { "{PRODUCT_NAME}" }
            }
            main {
                ul { class: "faction-list",
                    for entry in entries {
                        li { key: "{entry.slug}",
                            a { href: "factions/{entry.slug}.html", "{entry.name}" }
                        }
                    }
                }
            }
            footer {
                p { "{FOOTER_CAPTION}" }
            }
        }
    }
}
