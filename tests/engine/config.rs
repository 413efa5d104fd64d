//! rafdb.toml handling

use crate::common::*;

#[test]
fn explicit_config_is_persisted() {
    let dir = TempDir::new().unwrap();
    let cfg = RafConfig {
        snapshot_file: "store.json".to_string(),
        snapshot_interval_secs: 0,
        save_on_shutdown: true,
    };
    {
        let db = Database::open_with_config(dir.path(), cfg.clone()).unwrap();
        db.catalog().create("c").unwrap();
    }

    assert!(dir.path().join("store.json").exists());
    let db = Database::open(dir.path()).unwrap();
    assert_eq!(db.config(), &cfg);
    assert_eq!(db.catalog().list(), vec!["c"]);
}

#[test]
fn edited_config_is_picked_up() {
    let dir = TempDir::new().unwrap();
    drop(Database::open(dir.path()).unwrap());

    std::fs::write(
        dir.path().join("rafdb.toml"),
        "snapshot_file = \"edited.json\"\nsave_on_shutdown = false\n",
    )
    .unwrap();

    let db = Database::open(dir.path()).unwrap();
    assert_eq!(db.config().snapshot_file, "edited.json");
    assert!(!db.config().save_on_shutdown);
    assert!(db.snapshot_path().unwrap().ends_with("edited.json"));
}

#[test]
fn malformed_config_fails_open() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("rafdb.toml"), "snapshot_interval_secs = \"soon\"\n").unwrap();

    let err = Database::open(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn invalid_explicit_config_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let cfg = RafConfig {
        snapshot_file: String::new(),
        ..Default::default()
    };
    let err = Database::open_with_config(dir.path(), cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(!dir.path().join("rafdb.toml").exists());
}
