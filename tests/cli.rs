use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn instafix(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("instafix").unwrap();
    cmd.current_dir(home)
        .env("INSTAFIX_HOME", home)
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn write_saved(home: &Path, queries: &[&str]) {
    let items: Vec<_> = queries
        .iter()
        .enumerate()
        .map(|(i, query)| {
            json!({
                "id": format!("id-{}", i),
                "query": query,
                "timestamp": 1_700_000_000_000i64,
                "insight": format!("Insight about {}", query),
                "plan": "A short plan.",
                "actions": ["First", "Second", "Third"]
            })
        })
        .collect();
    fs::write(
        home.join("instantFixSaved.json"),
        serde_json::to_string(&items).unwrap(),
    )
    .unwrap();
}

#[test]
fn empty_saved_list() {
    let temp = TempDir::new().unwrap();
    instafix(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved fixes yet"));
}

#[test]
fn ask_without_api_key_fails_with_generic_message() {
    let temp = TempDir::new().unwrap();
    instafix(temp.path())
        .args(["ask", "I", "cannot", "focus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Something went wrong. Please check your connection or try again.",
        ));
}

#[test]
fn theme_is_persisted() {
    let temp = TempDir::new().unwrap();
    instafix(temp.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = dark"));

    assert_eq!(
        fs::read_to_string(temp.path().join("theme.json")).unwrap(),
        "dark"
    );

    instafix(temp.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = light"));
}

#[test]
fn show_and_delete_saved_fixes() {
    let temp = TempDir::new().unwrap();
    write_saved(temp.path(), &["Newest problem", "Older problem"]);

    instafix(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Newest problem"))
        .stdout(predicate::str::contains("2. Older problem"));

    instafix(temp.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Insight about Older problem"))
        .stdout(predicate::str::contains("1. First"));

    instafix(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Newest problem"));

    instafix(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("Newest problem").not())
        .stdout(predicate::str::contains("1. Older problem"));
}

#[test]
fn unknown_position_is_an_error() {
    let temp = TempDir::new().unwrap();
    instafix(temp.path())
        .args(["show", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved fix at position 5"));
}

#[test]
fn corrupt_saved_file_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("instantFixSaved.json"), "[{\"oops\"").unwrap();
    instafix(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved fixes yet"));
}

#[test]
fn config_reports_missing_key() {
    let temp = TempDir::new().unwrap();
    instafix(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("model = gemini-2.5-flash"))
        .stdout(predicate::str::contains("api-key = not set"));
}

#[test]
fn session_reads_commands_from_stdin() {
    let temp = TempDir::new().unwrap();
    write_saved(temp.path(), &["Stored problem"]);
    instafix(temp.path())
        .write_stdin(":saved\n:load 1\n:bogus\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Stored problem"))
        .stdout(predicate::str::contains("3-Step Action"))
        .stdout(predicate::str::contains("Unknown command: :bogus"));
}

#[tokio::test]
async fn ask_and_save_against_mock_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{
                    "text": "{\"insight\":\"Name the fear.\",\"plan\":\"Ten minutes.\",\"actions\":[\"Step A\",\"Step B\",\"Step C\"]}"
                }] }
            }]
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        json!({ "api_base": format!("{}/v1beta", server.uri()) }).to_string(),
    )
    .unwrap();

    instafix(temp.path())
        .env("API_KEY", "test-key")
        .args(["ask", "--save", "Procrastinating on a big project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name the fear."))
        .stdout(predicate::str::contains(
            "  1. Step A\n  2. Step B\n  3. Step C",
        ));

    instafix(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Procrastinating on a big project"));
}
