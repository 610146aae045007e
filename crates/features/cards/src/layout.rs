use armyforge_domain::constants::{FOOTER_CAPTION, PRODUCT_NAME};
use dioxus::prelude::*;

/// Page shell: product header, the supplied body, and the static footer.
#[component]
pub fn FactionLayout(faction_name: String, children: Element) -> Element {
    rsx! {
        div { class: "faction-layout",
            header {
                h1 { "{PRODUCT_NAME} – {faction_name}" }
            }
            main { {children} }
            footer {
                p { "{FOOTER_CAPTION}" }
            }
        }
    }
}
