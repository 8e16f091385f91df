//! End-to-end tests of the projectionist binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = &temp_dir.path().canonicalize().unwrap();
    let config = serde_json::json!({
        "src/*.ts": { "alternate": "test/{}.test.ts", "type": "source" },
        "test/*.test.ts": { "alternate": "src/{}.ts", "type": "test" },
        "app/models/*.rb": { "type": "model", "alternate": "spec/models/{}_spec.rb" }
    });
    fs::write(root.join(".projectionist.json"), config.to_string()).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("test")).unwrap();
    fs::write(root.join("src/foo.ts"), "").unwrap();
    temp_dir
}

fn projectionist(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("projectionist").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_jump_prints_untitled_for_missing_alternate() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();
    let expected = root.join("test/foo.test.ts");

    projectionist(root)
        .args(["jump", "src/foo.ts", "--format", "plain"])
        .assert()
        .success()
        .stdout(format!("untitled active {}\n", expected.display()));
}

#[test]
fn test_split_opens_existing_alternate_beside() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();
    fs::write(root.join("test/foo.test.ts"), "").unwrap();

    projectionist(root)
        .args(["split", "src/foo.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"open""#))
        .stdout(predicate::str::contains(r#""column":"beside""#));
}

#[test]
fn test_no_matching_rule_is_silent() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();
    fs::write(root.join("README.md"), "").unwrap();

    projectionist(root)
        .args(["jump", "README.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_configuration_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let root = &temp_dir.path().canonicalize().unwrap();

    projectionist(root)
        .args(["jump", "src/foo.ts", "--root"])
        .arg(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".projectionist.json"));
}

#[test]
fn test_navigate_with_input() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();
    let expected = root.join("app/models/user.rb");

    projectionist(root)
        .args(["navigate", "src/foo.ts", "--input", "MODEL user", "--format", "plain"])
        .assert()
        .success()
        .stdout(format!("untitled active {}\n", expected.display()));
}

#[test]
fn test_navigate_reads_prompt_from_stdin() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();
    let expected = root.join("test/foo.test.ts");

    projectionist(root)
        .args(["navigate", "src/foo.ts", "--format", "plain"])
        .write_stdin("alternate\n")
        .assert()
        .success()
        .stdout(format!("untitled active {}\n", expected.display()));
}

#[test]
fn test_resolve_reports_existing_file() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();
    fs::write(root.join("test/foo.test.ts"), "").unwrap();

    projectionist(root)
        .args(["resolve", "test/foo.test.ts", "--format", "plain"])
        .assert()
        .success()
        .stdout(format!("existing {}\n", root.join("src/foo.ts").display()));
}

#[test]
fn test_resolve_no_match_json() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();

    projectionist(root)
        .args(["resolve", "docs/guide.md"])
        .assert()
        .success()
        .stdout("{\"matched\":false}\n");
}

#[test]
fn test_list_projections() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();

    projectionist(root)
        .args(["list", "app/models/user.rb", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("alternate"))
        .stdout(predicate::str::contains("spec/models/user_spec.rb"));
}

#[test]
fn test_check_prints_rules_in_order() {
    let temp_dir = workspace();
    let root = &temp_dir.path().canonicalize().unwrap();

    let output = projectionist(root)
        .args(["check", "--format", "plain"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let src = text.find("src/*.ts").unwrap();
    let test = text.find("test/*.test.ts").unwrap();
    let models = text.find("app/models/*.rb").unwrap();
    assert!(src < test && test < models);
    assert!(text.contains("  type: model"));
}

#[test]
fn test_check_rejects_malformed_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let root = &temp_dir.path().canonicalize().unwrap();
    fs::write(
        root.join(".projectionist.json"),
        r#"{ "src/*.ts": { "alternate": "test/index.ts" } }"#,
    )
    .unwrap();

    projectionist(root)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one placeholder"));
}
