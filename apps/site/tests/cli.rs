use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const SLUG: &str = "disciples-de-la-guerre";

const FIXTURE: &str = r#"{
  "name": "Disciples de la Guerre",
  "units": [
    {
      "id": "guerriers",
      "name": "Guerriers",
      "cost": 5,
      "stats": { "Mouvement": 6, "CC": 4, "CT": 5, "Endurance": 3, "Commandement": 6 },
      "weapons": ["Épée", "Bouclier"],
      "specialRules": ["Fanatique", "Charge impétueuse"],
      "upgrades": [{ "name": "Bannière", "cost": 2, "effect": "+1 au Commandement" }]
    }
  ]
}"#;

fn armyforge() -> Command {
    Command::cargo_bin("armyforge").expect("binary should build")
}

fn dirs_with_fixture(contents: &str) -> (TempDir, TempDir) {
    let data = tempdir().expect("data dir");
    let out = tempdir().expect("out dir");
    fs::write(data.path().join(format!("{SLUG}_aof.json")), contents).expect("write fixture");
    (data, out)
}

fn build_args(data: &Path, out: &Path) -> Vec<String> {
    vec![
        "build".to_owned(),
        "--data".to_owned(),
        data.display().to_string(),
        "--out".to_owned(),
        out.display().to_string(),
    ]
}

#[test]
fn build_writes_faction_page_and_index() {
    let (data, out) = dirs_with_fixture(FIXTURE);

    armyforge().args(build_args(data.path(), out.path())).assert().success();

    let page = fs::read_to_string(out.path().join("factions").join(format!("{SLUG}.html")))
        .expect("faction page written");
    assert!(page.contains("<title>Disciples de la Guerre</title>"));
    assert!(page.contains("Guerriers"));
    assert!(page.contains("(5 pts)"));
    assert!(page.contains("Épée, Bouclier"));
    assert!(page.contains("Fanatique, Charge impétueuse"));
    assert!(page.contains("Bannière (+2 pts) – +1 au Commandement"));

    let index = fs::read_to_string(out.path().join("index.html")).expect("index written");
    assert!(index.contains(&format!("href=\"factions/{SLUG}.html\"")));
    assert!(index.contains("Disciples de la Guerre"));
}

#[test]
fn build_accepts_a_single_registered_faction() {
    let (data, out) = dirs_with_fixture(FIXTURE);

    let mut args = build_args(data.path(), out.path());
    args.extend(["--faction".to_owned(), SLUG.to_owned()]);
    armyforge().args(args).assert().success();

    assert!(out.path().join("factions").join(format!("{SLUG}.html")).exists());
}

#[test]
fn unknown_faction_slug_fails_closed() {
    let (data, out) = dirs_with_fixture(FIXTURE);

    let mut args = build_args(data.path(), out.path());
    args.extend(["--faction".to_owned(), "renegades".to_owned()]);
    armyforge()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown faction slug"));
}

#[test]
fn missing_fixture_fails_without_writing_the_page() {
    let data = tempdir().expect("data dir");
    let out = tempdir().expect("out dir");

    armyforge()
        .args(build_args(data.path(), out.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No faction data"));

    assert!(!out.path().join("factions").join(format!("{SLUG}.html")).exists());
}

#[test]
fn malformed_fixture_fails_loudly() {
    let (data, out) = dirs_with_fixture("{ \"name\": \"Disciples de la Guerre\" }");

    armyforge()
        .args(build_args(data.path(), out.path()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed faction data"));

    assert!(!out.path().join("factions").join(format!("{SLUG}.html")).exists());
}

#[test]
fn list_prints_registered_slugs() {
    armyforge().arg("list").assert().success().stdout(predicate::str::contains(SLUG));
}
