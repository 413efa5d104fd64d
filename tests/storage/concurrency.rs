//! Concurrent access across and within collections

use crate::common::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn distinct_ids_from_many_threads() {
    let catalog = Arc::new(Catalog::new());
    catalog.create("c").unwrap();
    let threads = 8;
    let per_thread = 250;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let catalog = Arc::clone(&catalog);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let c = catalog.get("c").unwrap();
                barrier.wait();
                for i in 0..per_thread {
                    c.insert(&format!("{}-{}", t, i), data(&[("t", Value::from(t as i64))]))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(catalog.get("c").unwrap().len(), threads * per_thread);
    assert_eq!(catalog.stats().total_documents, threads * per_thread);
}

#[test]
fn same_id_race_has_one_winner() {
    let catalog = Arc::new(Catalog::new());
    catalog.create("c").unwrap();
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let catalog = Arc::clone(&catalog);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                catalog
                    .get("c")
                    .unwrap()
                    .insert("contested", data(&[("t", Value::from(t as i64))]))
                    .is_ok()
            })
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(catalog.get("c").unwrap().len(), 1);
}

#[test]
fn concurrent_create_of_same_name_has_one_winner() {
    let catalog = Arc::new(Catalog::new());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                catalog.create("shared").is_ok()
            })
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn readers_never_see_partial_updates() {
    let catalog = Arc::new(Catalog::new());
    let c = catalog.create("c").unwrap();
    c.insert("doc", data(&[("a", Value::from(0)), ("b", Value::from(0))]))
        .unwrap();

    let writer = {
        let c = Arc::clone(&c);
        thread::spawn(move || {
            for i in 1..=500i64 {
                c.update("doc", data(&[("a", Value::from(i)), ("b", Value::from(i))]))
                    .unwrap();
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&c);
            thread::spawn(move || {
                for _ in 0..500 {
                    let doc = c.get("doc").unwrap();
                    assert_eq!(doc.field("a"), doc.field("b"));
                    assert!(doc.updated_at >= doc.created_at);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(c.get("doc").unwrap().field("a"), Some(&Value::from(500)));
}

#[test]
fn different_collections_proceed_independently() {
    let catalog = Arc::new(Catalog::new());
    let names: Vec<String> = (0..4).map(|i| format!("c{}", i)).collect();
    for name in &names {
        catalog.create(name).unwrap();
    }

    let handles: Vec<_> = names
        .iter()
        .cloned()
        .map(|name| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let c = catalog.get(&name).unwrap();
                for i in 0..200 {
                    c.insert(&i.to_string(), Map::new()).unwrap();
                    let _ = catalog.stats();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    for name in &names {
        assert_eq!(catalog.get(name).unwrap().len(), 200);
    }
}
