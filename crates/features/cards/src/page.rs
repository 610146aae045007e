use crate::{FactionLayout, UnitCard};
use armyforge_domain::faction::Faction;
use dioxus::prelude::*;

/// A complete faction page: the layout shell around one keyed [`UnitCard`]
/// per unit, in the faction's stored order.
#[component]
pub fn FactionPage(faction: Faction) -> Element {
    rsx! {
        FactionLayout { faction_name: faction.name.clone(),
            div { class: "units-grid",
                for unit in faction.units.clone() {
                    UnitCard { key: "{unit.id}", unit }
                }
            }
        }
    }
}
