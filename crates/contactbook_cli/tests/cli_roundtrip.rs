use std::path::Path;
use std::process::{Command, Output};

fn contactbook(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contactbook"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("CONTACTBOOK_LOG_DIR")
        .output()
        .expect("binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn add_search_delete_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("address_book.json");

    let output = contactbook(&store, &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("The address book is empty."));

    assert!(contactbook(&store, &["add", "Bob Lee", "111", "b@x.com", "NY"])
        .status
        .success());
    assert!(contactbook(&store, &["add", "Amy Wu", "222", "a@x.com", "LA"])
        .status
        .success());

    let output = contactbook(&store, &["search", "la"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Amy Wu"));
    assert!(!text.contains("Bob Lee"));

    let output = contactbook(&store, &["list", "--sort", "name", "--desc"]);
    let text = stdout(&output);
    let bob = text.find("Bob Lee").unwrap();
    let amy = text.find("Amy Wu").unwrap();
    assert!(bob < amy);

    assert!(contactbook(&store, &["delete", "Bob Lee"]).status.success());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store).unwrap()).unwrap();
    assert!(json.get("Bob Lee").is_none());
    assert_eq!(json["Amy Wu"]["Phone"], "222");
}

#[test]
fn user_errors_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("address_book.json");

    let output = contactbook(&store, &["add", "Amy", "", "a@x", "LA"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("all fields are required"));
    assert!(!store.exists());

    let output = contactbook(&store, &["search", " "]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please enter a search query."));

    let output = contactbook(&store, &["delete", "Nobody"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("contact not found: Nobody"));
}

#[test]
fn corrupt_store_is_reported_and_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("address_book.json");
    std::fs::write(&store, "not json").unwrap();

    let output = contactbook(&store, &["list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("corrupt"));
    assert_eq!(std::fs::read_to_string(&store).unwrap(), "not json");
}
