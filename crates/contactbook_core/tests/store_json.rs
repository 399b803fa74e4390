use contactbook_core::{Contact, ContactCollection, ContactStore, JsonFileStore, StoreError};
use std::fs;

fn sample() -> ContactCollection {
    [
        Contact::new("Bob Lee", "111", "b@x.com", "NY"),
        Contact::new("Amy Wu", "222", "a@x.com", "LA"),
        Contact::new("Zoë \"Z\" Ng", "+44 20 7946 0958", "z@x.co.uk", "London, UK"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn save_then_load_roundtrips_keys_values_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    let saved = sample();

    store.save(&saved).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, saved);
}

#[test]
fn persisted_layout_maps_name_to_three_string_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    store.save(&sample()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 3);

    let amy = object["Amy Wu"].as_object().unwrap();
    assert_eq!(amy.len(), 3);
    assert_eq!(amy["Phone"], "222");
    assert_eq!(amy["Email"], "a@x.com");
    assert_eq!(amy["Location"], "LA");
}

#[test]
fn legacy_file_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");
    fs::write(
        &path,
        r#"{
    "Jane Doe": {
        "Phone": "555-1234",
        "Email": "jane@example.com",
        "Location": "Boston"
    }
}"#,
    )
    .unwrap();

    let loaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(
        loaded.get("Jane Doe"),
        Some(&Contact::new("Jane Doe", "555-1234", "jane@example.com", "Boston"))
    );
}

#[test]
fn save_is_a_full_replace() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    store.save(&sample()).unwrap();

    let smaller = [Contact::new("Solo", "1", "s@x", "Nowhere")]
        .into_iter()
        .collect::<ContactCollection>();
    store.save(&smaller).unwrap();

    assert_eq!(store.load().unwrap(), smaller);
}

#[test]
fn empty_or_truncated_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");

    fs::write(&path, "").unwrap();
    assert!(matches!(
        JsonFileStore::new(&path).load().unwrap_err(),
        StoreError::Corrupt { .. }
    ));

    fs::write(&path, r#"{"Amy Wu": {"Phone": "222", "Em"#).unwrap();
    assert!(matches!(
        JsonFileStore::new(&path).load().unwrap_err(),
        StoreError::Corrupt { .. }
    ));
}

#[test]
fn save_leaves_no_temp_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    store.save(&sample()).unwrap();
    store.save(&sample()).unwrap();

    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[cfg(unix)]
#[test]
fn save_keeps_existing_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let store = JsonFileStore::new(&path);
    store.save(&sample()).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    store.save(&sample()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
