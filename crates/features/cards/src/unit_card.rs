use armyforge_domain::faction::Unit;
use dioxus::prelude::*;

/// One unit card: name and cost, the profile line in declared attribute
/// order, weapons and special rules joined onto single lines, and, only when
/// the unit has upgrades, one radio entry per upgrade grouped by unit id.
///
/// The radio state is inert display output; selecting an upgrade has no
/// modeled consequence.
#[component]
pub fn UnitCard(unit: Unit) -> Element {
    let weapons = unit.weapons.join(", ");
    let special_rules = unit.special_rules.join(", ");

    rsx! {
        div { class: "unit-card",
            h2 {
                "{unit.name} "
                span { "({unit.cost} pts)" }
            }
            div { class: "stats",
                for (label, value) in unit.stats.rows() {
                    div { key: "{label}",
                        strong { "{label}:" }
                        " {value}"
                    }
                }
            }
            div { class: "weapons",
                strong { "Armes:" }
                " {weapons}"
            }
            div { class: "special-rules",
                strong { "Règles spéciales:" }
                " {special_rules}"
            }
            if !unit.upgrades.is_empty() {
                div { class: "upgrades",
                    strong { "Améliorations:" }
                    for upgrade in unit.upgrades.clone() {
                        div { key: "{upgrade.name}",
                            input {
                                r#type: "radio",
                                id: "{upgrade.name}",
                                name: "upgrade-{unit.id}",
                            }
                            label { r#for: "{upgrade.name}",
                                "{upgrade.name} (+{upgrade.cost} pts) – {upgrade.effect}"
                            }
                        }
                    }
                }
            }
        }
    }
}
