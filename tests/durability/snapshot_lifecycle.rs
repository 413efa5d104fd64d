//! Save, load, and reopen

use crate::common::*;
use rafdb::{load_catalog, save_catalog};

fn populated() -> Catalog {
    let catalog = Catalog::new();
    let users = catalog.create("users").unwrap();
    users
        .insert(
            "user1",
            data(&[
                ("name", Value::from("John")),
                ("age", Value::from(30)),
                ("score", Value::from(9.75)),
                ("active", Value::Bool(true)),
                ("nickname", Value::Null),
                (
                    "address",
                    Value::Object(data(&[
                        ("city", Value::from("NY")),
                        ("geo", Value::Array(vec![Value::from(40.7), Value::from(-74.0)])),
                    ])),
                ),
            ]),
        )
        .unwrap();
    users.insert("user2", data(&[("name", Value::from("Jane"))])).unwrap();
    users.update("user2", data(&[("name", Value::from("Janet"))])).unwrap();
    catalog.create("products").unwrap().insert("p1", Map::new()).unwrap();
    catalog.create("empty").unwrap();
    catalog
}

fn assert_same(a: &Catalog, b: &Catalog) {
    assert_eq!(a.list(), b.list());
    for name in a.list() {
        let ca = a.get(&name).unwrap();
        let cb = b.get(&name).unwrap();
        assert_eq!(ca.len(), cb.len(), "collection {}", name);
        for doc in ca.list().unwrap() {
            assert_eq!(*cb.get(&doc.id).unwrap(), *doc, "document {}/{}", name, doc.id);
        }
    }
}

#[test]
fn save_load_reproduces_catalog() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rafdb_data.json");
    let catalog = populated();

    let info = save_catalog(&catalog, &path).unwrap();
    assert_eq!(info.collections, 3);
    assert_eq!(info.documents, 3);

    let loaded = load_catalog(&path).unwrap();
    assert_same(&catalog, &loaded);
    assert_eq!(loaded.stats(), catalog.stats());
}

#[test]
fn load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let loaded = load_catalog(dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_empty());
    assert_eq!(loaded.stats().total_documents, 0);
}

#[test]
fn second_save_fully_replaces_first() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    save_catalog(&populated(), &path).unwrap();

    let smaller = Catalog::new();
    smaller.create("only").unwrap();
    save_catalog(&smaller, &path).unwrap();

    assert_eq!(load_catalog(&path).unwrap().list(), vec!["only"]);
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, vec!["data.json"]);
}

#[test]
fn loaded_catalog_accepts_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    save_catalog(&populated(), &path).unwrap();

    let loaded = load_catalog(&path).unwrap();
    let users = loaded.get("users").unwrap();
    let before = users.get("user2").unwrap();
    let after = users.update("user2", Map::new()).unwrap();
    assert!(after.updated_at > before.updated_at);
    assert_eq!(
        users.insert("user1", Map::new()).unwrap_err().kind(),
        ErrorKind::AlreadyExists
    );
    loaded.delete("empty").unwrap();
}

#[test]
fn database_reopen_preserves_state() {
    let mut t = TestDb::new();
    {
        let users = t.catalog().create("users").unwrap();
        users.insert("u1", data(&[("n", Value::from(1))])).unwrap();
        users.insert("u2", data(&[("n", Value::from(2))])).unwrap();
        users.delete("u2").unwrap();
    }
    t.db().checkpoint().unwrap();
    t.reopen();

    let users = t.catalog().get("users").unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users.get("u1").unwrap().field("n"), Some(&Value::from(1)));
}

#[test]
fn close_writes_final_snapshot() {
    let mut t = TestDb::new();
    t.catalog().create("late").unwrap();
    let path = t.snapshot_path();
    t.close();

    assert!(path.exists());
    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.list(), vec!["late"]);
}
