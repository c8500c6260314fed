//! Integration tests for the `pz` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding the starter content.
fn test_content() -> TempDir {
    let parent = TempDir::new().unwrap();
    pz().args(["init", "content"])
        .current_dir(parent.path())
        .assert()
        .success();
    parent
}

fn content_dir(parent: &TempDir) -> String {
    parent.path().join("content").to_str().unwrap().to_string()
}

fn pz() -> Command {
    let mut cmd = Command::cargo_bin("pz").unwrap();
    cmd.env_remove("PZ_CONTENT_DIR")
        .env_remove("PZ_LOG")
        .env_remove("PZ_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(dir: &str, spread: &str, order: &str, email: &str) -> serde_json::Value {
    let output = pz()
        .args(["-C", dir, "read", "--spread", spread, "--email", email, "--order", order])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_content_files() {
    let parent = test_content();
    for file in ["tarot.json", "iching.json", "rueda.json", "spreads.json"] {
        assert!(parent.path().join("content").join(file).exists(), "{file} missing");
    }
}

#[test]
fn init_fails_if_dir_exists() {
    let parent = TempDir::new().unwrap();
    fs::create_dir(parent.path().join("content")).unwrap();

    pz().args(["init", "content"])
        .current_dir(parent.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_starter_content() {
    let parent = test_content();
    pz().args(["-C", &content_dir(&parent), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_fails_on_oversized_spread() {
    let parent = test_content();
    let dir = content_dir(&parent);
    fs::write(
        Path::new(&dir).join("spreads.json"),
        r#"{ "rueda_big": { "oraculo": "rueda", "cartas": 50 } }"#,
    )
    .unwrap();

    pz().args(["-C", &dir, "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rueda_big").and(predicate::str::contains("error")));
}

#[test]
fn missing_content_dir_is_reported() {
    let parent = TempDir::new().unwrap();
    let missing = parent.path().join("nowhere");
    pz().args(["-C", missing.to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pz init"));
}

// ---------------------------------------------------------------------------
// spreads / list
// ---------------------------------------------------------------------------

#[test]
fn spreads_lists_ids() {
    let parent = test_content();
    pz().args(["-C", &content_dir(&parent), "spreads"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("tarot_3_ppf")
                .and(predicate::str::contains("iching_1"))
                .and(predicate::str::contains("rueda_4")),
        );
}

#[test]
fn malformed_spread_does_not_hide_the_rest() {
    let parent = test_content();
    let dir = content_dir(&parent);
    fs::write(
        Path::new(&dir).join("spreads.json"),
        r#"{
  "tarot_1": { "oraculo": "tarot", "cartas": 1 },
  "broken": { "oraculo": "tarot", "cartas": -1 }
}"#,
    )
    .unwrap();

    pz().args(["-C", &dir, "spreads"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("tarot_1")
                .and(predicate::str::contains("1 malformed spreads skipped")),
        );

    let value = read_json(&dir, "tarot_1", "order-3", "a@example.com");
    assert_eq!(value["reading"]["cards"].as_array().unwrap().len(), 1);

    pz().args(["-C", &dir, "read", "-s", "broken", "-e", "a@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));

    pz().args(["-C", &dir, "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spread 'broken'"));
}

#[test]
fn list_tarot() {
    let parent = test_content();
    pz().args(["-C", &content_dir(&parent), "list", "tarot"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("El Loco")
                .and(predicate::str::contains("22 tarot entries")),
        );
}

#[test]
fn list_unknown_kind() {
    let parent = test_content();
    pz().args(["-C", &content_dir(&parent), "list", "runas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown content kind"));
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_tarot_json() {
    let parent = test_content();
    let value = read_json(&content_dir(&parent), "tarot_3_ppf", "order-1", "a@example.com");

    assert_eq!(value["order_id"], "order-1");
    let reading = &value["reading"];
    assert_eq!(reading["type"], "tarot");
    let cards = reading["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    let positions: Vec<_> = cards.iter().map(|c| c["position"].as_str().unwrap()).collect();
    assert_eq!(positions, ["Pasado", "Presente", "Futuro"]);
    assert!(cards.iter().all(|c| !c["interpretation"].as_str().unwrap().is_empty()));
}

#[test]
fn read_is_reproducible() {
    let parent = test_content();
    let dir = content_dir(&parent);
    let a = read_json(&dir, "rueda_4", "order-77", "b@example.com");
    let b = read_json(&dir, "rueda_4", "order-77", "b@example.com");
    assert_eq!(a["reading"]["animals"], b["reading"]["animals"]);
}

#[test]
fn read_iching() {
    let parent = test_content();
    let value = read_json(&content_dir(&parent), "iching_1", "order-5", "c@example.com");
    assert_eq!(value["reading"]["type"], "iching");
    let hex = value["reading"]["hexagram"]["hex"].as_u64().unwrap();
    assert!((1..=64).contains(&hex));
}

#[test]
fn read_without_order_mints_one() {
    let parent = test_content();
    let output = pz()
        .args(["-C", &content_dir(&parent), "read", "-s", "tarot_1", "-e", "d@example.com"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let order = value["order_id"].as_str().unwrap();
    assert_eq!(order.len(), 36);
}

#[test]
fn read_unknown_spread_fails() {
    let parent = test_content();
    pz().args(["-C", &content_dir(&parent), "read", "-s", "nope", "-e", "a@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spread not found"));
}

#[test]
fn read_html_to_file() {
    let parent = test_content();
    let out = parent.path().join("lectura.html");
    pz().args([
        "-C",
        &content_dir(&parent),
        "read",
        "-s",
        "rueda_4",
        "-e",
        "a@example.com",
        "-o",
        "order-9",
        "-f",
        "html",
        "--output",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("written to"));

    let html = fs::read_to_string(out).unwrap();
    assert!(html.contains("Pleyazul Oráculos"));
    assert!(html.contains("Para: a@example.com"));
    assert!(html.contains("Medicina de la Rueda Sagrada"));
}

#[test]
fn read_telegram_with_link() {
    let parent = test_content();
    pz().args([
        "-C",
        &content_dir(&parent),
        "read",
        "-s",
        "tarot_1",
        "-e",
        "a@example.com",
        "-o",
        "abc",
        "-f",
        "telegram",
        "--base-url",
        "https://pleyazul.example",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("*Tu lectura Pleyazul está lista*")
            .and(predicate::str::contains("https://pleyazul\\.example/lectura/abc")),
    );
}

#[test]
fn read_markdown() {
    let parent = test_content();
    pz().args([
        "-C",
        &content_dir(&parent),
        "read",
        "-s",
        "iching_1",
        "-e",
        "a@example.com",
        "-f",
        "markdown",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("# Consulta del I Ching")
            .and(predicate::str::contains("## Hexagrama")),
    );
}

#[test]
fn read_unsupported_format() {
    let parent = test_content();
    let dir = content_dir(&parent);
    pz().args(["-C", &dir, "read", "-s", "tarot_1", "-e", "a@example.com", "-f", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn content_dir_from_env() {
    let parent = test_content();
    pz().env("PZ_CONTENT_DIR", content_dir(&parent))
        .args(["spreads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tarot_1"));
}

// ---------------------------------------------------------------------------
// import
// ---------------------------------------------------------------------------

#[test]
fn import_replaces_collection() {
    let parent = test_content();
    let dir = content_dir(&parent);
    let file = parent.path().join("animals.json");
    fs::write(
        &file,
        r#"[
  { "animal": "Colibrí", "arquetipo": "La Alegría" },
  { "animal": "Halcón", "arquetipo": "El Mensajero" }
]"#,
    )
    .unwrap();

    pz().args(["-C", &dir, "import", "rueda", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 rueda entries"));

    pz().args(["-C", &dir, "list", "rueda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Colibrí").and(predicate::str::contains("Búfalo").not()));

    // rueda_4 now asks for more animals than exist.
    pz().args(["-C", &dir, "read", "-s", "rueda_4", "-e", "a@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient content"));
}

#[test]
fn import_rejects_wrong_shape() {
    let parent = test_content();
    let dir = content_dir(&parent);
    let file = parent.path().join("bad.json");
    fs::write(&file, r#"{ "not": "a list" }"#).unwrap();

    pz().args(["-C", &dir, "import", "tarot", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shape"));

    // The existing deck is untouched.
    pz().args(["-C", &dir, "list", "tarot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22 tarot entries"));
}
