//! Single-field equality queries

use crate::common::*;
use rafdb::Filter;

fn seeded() -> (Catalog, std::sync::Arc<Collection>) {
    let catalog = Catalog::new();
    let users = catalog.create("users").unwrap();
    users.insert("a", data(&[("age", Value::from(30)), ("tag", Value::from("x"))])).unwrap();
    users.insert("b", data(&[("age", Value::from(25))])).unwrap();
    users.insert("c", data(&[("age", Value::from("30"))])).unwrap();
    users.insert("d", data(&[("age", Value::Null)])).unwrap();
    users.insert("e", Map::new()).unwrap();
    (catalog, users)
}

fn ids(docs: Vec<std::sync::Arc<Document>>) -> Vec<String> {
    let mut ids: Vec<String> = docs.iter().map(|d| d.id.clone()).collect();
    ids.sort();
    ids
}

#[test]
fn number_matches_only_numbers() {
    let (_catalog, users) = seeded();
    assert_eq!(ids(users.query("age", Value::from(30)).unwrap()), vec!["a"]);
    assert_eq!(ids(users.query("age", Value::from(30.0)).unwrap()), vec!["a"]);
}

#[test]
fn string_matches_only_strings() {
    let (_catalog, users) = seeded();
    assert_eq!(ids(users.query("age", Value::from("30")).unwrap()), vec!["c"]);
}

#[test]
fn null_matches_explicit_null_not_missing() {
    let (_catalog, users) = seeded();
    assert_eq!(ids(users.query("age", Value::Null).unwrap()), vec!["d"]);
}

#[test]
fn no_match_is_empty_not_error() {
    let (_catalog, users) = seeded();
    assert!(users.query("age", Value::from(99)).unwrap().is_empty());
    assert!(users.query("unknown", Value::from(1)).unwrap().is_empty());
}

#[test]
fn structured_values_compare_deeply() {
    let catalog = Catalog::new();
    let c = catalog.create("c").unwrap();
    let tags = Value::Array(vec![Value::from("a"), Value::from(1)]);
    c.insert("one", data(&[("tags", tags.clone())])).unwrap();
    c.insert("two", data(&[("tags", Value::Array(vec![Value::from(1), Value::from("a")]))]))
        .unwrap();

    assert_eq!(ids(c.query("tags", tags).unwrap()), vec!["one"]);
}

#[test]
fn query_is_top_level_only() {
    let catalog = Catalog::new();
    let c = catalog.create("c").unwrap();
    c.insert(
        "n",
        data(&[("address", Value::Object(data(&[("city", Value::from("NY"))])))]),
    )
    .unwrap();
    assert!(c.query("city", Value::from("NY")).unwrap().is_empty());
    assert!(c.query("address.city", Value::from("NY")).unwrap().is_empty());
}

#[test]
fn empty_field_is_invalid() {
    let (_catalog, users) = seeded();
    assert_eq!(
        users.query("", Value::from(1)).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
    assert!(Filter::eq("", Value::Null).is_err());
}

#[test]
fn filter_reuse() {
    let (_catalog, users) = seeded();
    let filter = Filter::eq("tag", "x").unwrap();
    assert_eq!(ids(users.find(&filter).unwrap()), vec!["a"]);
    assert_eq!(ids(users.find(&filter).unwrap()), vec!["a"]);
}
