//! On-disk layout

use crate::common::*;
use rafdb::{load_catalog, save_catalog};

#[test]
fn snapshot_layout_and_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let catalog = Catalog::new();
    catalog
        .create("users")
        .unwrap()
        .insert("user1", data(&[("age", Value::from(30))]))
        .unwrap();
    save_catalog(&catalog, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'), "snapshot should be pretty-printed");

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let doc = &json["collections"]["users"]["documents"]["user1"];
    assert_eq!(json["collections"]["users"]["name"], "users");
    assert_eq!(doc["id"], "user1");
    assert_eq!(doc["data"]["age"], 30);

    let created = doc["created_at"].as_str().unwrap();
    assert!(created.ends_with('Z'));
    assert_eq!(created, doc["updated_at"].as_str().unwrap());
}

#[test]
fn reads_hand_written_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"{
  "collections": {
    "users": {
      "name": "users",
      "documents": {
        "user1": {
          "id": "user1",
          "data": {"name": "John", "age": 30, "tags": ["a", "b"], "meta": {"x": null}},
          "created_at": "2024-03-01T12:00:00.123456789Z",
          "updated_at": "2024-03-02T08:30:00Z"
        }
      }
    }
  }
}"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).unwrap();
    let doc = catalog.get("users").unwrap().get("user1").unwrap();
    assert_eq!(doc.field("age"), Some(&Value::from(30)));
    assert_eq!(doc.field("name"), Some(&Value::from("John")));
    assert!(doc.updated_at > doc.created_at);
    assert_eq!(doc.created_at.to_rfc3339(), "2024-03-01T12:00:00.123456Z");
}

#[test]
fn same_state_saves_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::new();
    for name in ["b", "a", "c"] {
        let c = catalog.create(name).unwrap();
        for id in ["z", "y", "x"] {
            c.insert(id, data(&[("k", Value::from(id))])).unwrap();
        }
    }

    let first = dir.path().join("one.json");
    let second = dir.path().join("two.json");
    save_catalog(&catalog, &first).unwrap();
    save_catalog(&catalog, &second).unwrap();
    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}
