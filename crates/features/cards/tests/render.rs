use armyforge_cards::{
    IndexEntry, render_faction_document, render_faction_page, render_index_document,
};
use armyforge_domain::faction::{Faction, Unit, UnitStats, Upgrade};

fn unit(id: &str, name: &str, cost: u32) -> Unit {
    Unit {
        id: id.to_owned(),
        name: name.to_owned(),
        cost,
        stats: UnitStats { movement: 6, melee: 4, ranged: 5, endurance: 3, command: 6 },
        weapons: vec!["Épée".to_owned(), "Bouclier".to_owned()],
        special_rules: vec!["Fanatique".to_owned(), "Charge impétueuse".to_owned()],
        upgrades: vec![],
    }
}

fn guerriers() -> Unit {
    let mut unit = unit("guerriers", "Guerriers", 5);
    unit.upgrades = vec![Upgrade {
        name: "Bannière".to_owned(),
        cost: 2,
        effect: "+1 au Commandement".to_owned(),
    }];
    unit
}

fn faction(units: Vec<Unit>) -> Faction {
    Faction { name: "Disciples de la Guerre".to_owned(), units }
}

#[test]
fn one_fragment_per_unit_in_stored_order() {
    let html = render_faction_page(&faction(vec![
        unit("guerriers", "Guerriers", 5),
        unit("archers", "Archers", 7),
        unit("cavaliers", "Cavaliers", 12),
    ]));

    assert_eq!(html.matches("unit-card").count(), 3);

    let first = html.find("Guerriers").expect("first unit rendered");
    let second = html.find("Archers").expect("second unit rendered");
    let third = html.find("Cavaliers").expect("third unit rendered");
    assert!(first < second && second < third, "units out of stored order");
}

#[test]
fn every_stat_appears_once_with_its_value() {
    let html = render_faction_page(&faction(vec![unit("guerriers", "Guerriers", 5)]));

    for (label, value) in
        [("Mouvement", 6), ("CC", 4), ("CT", 5), ("Endurance", 3), ("Commandement", 6)]
    {
        let row = format!("<strong>{label}:</strong> {value}");
        assert_eq!(html.matches(&row).count(), 1, "missing or duplicated stat row: {row}");
    }
}

#[test]
fn stats_render_in_declared_order() {
    let html = render_faction_page(&faction(vec![unit("guerriers", "Guerriers", 5)]));

    let positions: Vec<usize> = ["Mouvement:", "CC:", "CT:", "Endurance:", "Commandement:"]
        .iter()
        .map(|label| html.find(label).unwrap_or_else(|| panic!("stat {label} not rendered")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "stat order drifted");
}

#[test]
fn name_cost_weapons_and_rules_render_as_specified() {
    let html = render_faction_page(&faction(vec![unit("guerriers", "Guerriers", 5)]));

    assert!(html.contains("Guerriers"));
    assert!(html.contains("(5 pts)"));
    assert!(html.contains("<strong>Armes:</strong> Épée, Bouclier"));
    assert!(html.contains("<strong>Règles spéciales:</strong> Fanatique, Charge impétueuse"));
}

#[test]
fn upgrades_render_one_exclusive_choice_each() {
    let mut armed = guerriers();
    armed.upgrades.push(Upgrade {
        name: "Cor de guerre".to_owned(),
        cost: 3,
        effect: "+1 au Mouvement".to_owned(),
    });
    let html = render_faction_page(&faction(vec![armed]));

    assert!(html.contains("Améliorations:"));
    assert_eq!(html.matches("type=\"radio\"").count(), 2);
    // Both radios share the per-unit group so the choices are mutually exclusive.
    assert_eq!(html.matches("name=\"upgrade-guerriers\"").count(), 2);
    assert!(html.contains("Bannière (+2 pts) – +1 au Commandement"));
    assert!(html.contains("Cor de guerre (+3 pts) – +1 au Mouvement"));
}

#[test]
fn unit_without_upgrades_has_no_upgrade_section() {
    let html = render_faction_page(&faction(vec![unit("archers", "Archers", 7)]));

    assert!(!html.contains("Améliorations"));
    assert!(!html.contains("radio"));
}

#[test]
fn empty_faction_renders_an_empty_grid() {
    let html = render_faction_page(&faction(vec![]));

    assert!(html.contains("units-grid"));
    assert!(!html.contains("unit-card"));
}

#[test]
fn layout_wraps_header_body_and_footer() {
    let html = render_faction_page(&faction(vec![guerriers()]));

    assert!(html.contains("OPR Army Forge – Disciples de la Guerre"));
    assert!(html.contains("<main>"));
    assert!(html.contains("Exportez votre liste en HTML"));

    let header = html.find("<header>").expect("header rendered");
    let main = html.find("<main>").expect("main rendered");
    let footer = html.find("<footer>").expect("footer rendered");
    assert!(header < main && main < footer);
}

#[test]
fn document_is_titled_with_the_faction_name() {
    let html = render_faction_document(&faction(vec![guerriers()]));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Disciples de la Guerre</title>"));
    assert!(html.contains("unit-card"));
}

#[test]
fn text_content_is_escaped() {
    let mut sneaky = unit("seigneur", "Seigneur <Sombre> & Cie", 20);
    sneaky.weapons = vec!["Lame <maudite>".to_owned()];
    let html = render_faction_page(&faction(vec![sneaky]));

    assert!(html.contains("&lt;Sombre&gt;"));
    assert!(html.contains("&lt;maudite&gt;"));
    assert!(!html.contains("<Sombre>"));
}

#[test]
fn index_links_every_faction_page() {
    let entries = vec![
        IndexEntry { slug: "disciples-de-la-guerre".to_owned(), name: "Disciples de la Guerre".to_owned() },
        IndexEntry { slug: "gardiens-du-nord".to_owned(), name: "Gardiens du Nord".to_owned() },
    ];
    let html = render_index_document(&entries);

    assert!(html.contains("<title>OPR Army Forge</title>"));
    assert!(html.contains("href=\"factions/disciples-de-la-guerre.html\""));
    assert!(html.contains("href=\"factions/gardiens-du-nord.html\""));
    assert!(html.contains("Gardiens du Nord"));
}
