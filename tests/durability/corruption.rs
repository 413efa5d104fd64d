//! Damaged snapshot files

use crate::common::*;
use rafdb::{load_catalog, save_catalog, SnapshotFile};

#[test]
fn garbage_is_corrupt_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    for bytes in [&b"garbage"[..], b"", b"{\"collections\": []}", b"null"] {
        std::fs::write(&path, bytes).unwrap();
        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptSnapshot, "{:?}", bytes);
    }
}

#[test]
fn truncated_file_is_corrupt_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let catalog = Catalog::new();
    catalog.create("c").unwrap().insert("a", Map::new()).unwrap();
    save_catalog(&catalog, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 10]).unwrap();
    assert_eq!(
        load_catalog(&path).unwrap_err().kind(),
        ErrorKind::CorruptSnapshot
    );
}

#[test]
fn invalid_identifiers_are_corrupt_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let cases = [
        r#"{"collections": {"": {"name": "", "documents": {}}}}"#,
        r#"{"collections": {"c": {"name": "c", "documents": {"": {"id": "", "data": {}, "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}}}}}"#,
        r#"{"collections": {"c": {"name": "c", "documents": {"a": {"id": "a", "data": {}, "created_at": "yesterday", "updated_at": "2024-01-01T00:00:00Z"}}}}}"#,
    ];
    for text in cases {
        std::fs::write(&path, text).unwrap();
        assert_eq!(
            load_catalog(&path).unwrap_err().kind(),
            ErrorKind::CorruptSnapshot,
            "{}",
            text
        );
    }
}

#[test]
fn database_open_quarantines_corrupt_file() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join(rafdb::RafConfig::default().snapshot_file);
    std::fs::write(&snapshot, b"not a snapshot").unwrap();

    let db = Database::open(dir.path()).unwrap();
    assert!(db.catalog().is_empty());
    assert!(!snapshot.exists());
    assert!(SnapshotFile::new(dir.path().join("rafdb_data.json.corrupt")).exists());

    // The next checkpoint writes a clean file in its place
    db.catalog().create("fresh").unwrap();
    db.checkpoint().unwrap();
    assert_eq!(load_catalog(&snapshot).unwrap().list(), vec!["fresh"]);
}
