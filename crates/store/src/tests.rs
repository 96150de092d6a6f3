// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use timetoeat_core::{Amount, DishImage, stats};

use super::*;

fn new_dish(name: &str, description: &str, course: Course, price: &str) -> NewDish {
    NewDish {
        name: name.into(),
        description: description.into(),
        price: price.into(),
        course,
        image: DishImage::Missing,
    }
}

fn names(snapshot: &Snapshot) -> Vec<&str> {
    snapshot
        .iter()
        .map(|record| record.body.name.as_str())
        .collect()
}

fn sample_store() -> Store {
    Store::with_dishes([
        new_dish("Soup", "Hot soup", Course::Starter, "45"),
        new_dish("Steak", "Grilled", Course::MainCourse, "180"),
        new_dish("Salad", "Green salad", Course::Starter, "55"),
        new_dish("Cake", "Chocolate", Course::Dessert, "60"),
    ])
    .unwrap()
}

#[test]
fn add_appends_trimmed_record() {
    let mut store = Store::new();
    assert!(store.is_empty());
    let before = store.all();
    let record = store
        .add(new_dish(" Soup ", " Hot soup ", Course::Starter, " 45 "))
        .unwrap();
    assert_eq!("Soup", record.body.name);
    assert_eq!("Hot soup", record.body.description);
    assert_eq!(Amount::from(45), record.body.price.amount());
    let after = store.all();
    assert_eq!(before.len() + 1, after.len());
    assert_eq!(Some(&record), after.last());
    assert_eq!(Some(&record), store.get(&record.uid));
}

#[test]
fn add_assigns_unique_uids() {
    let mut store = Store::new();
    let uids = (0..500)
        .map(|i| {
            store
                .add(new_dish(&format!("Dish {i}"), "Tasty", Course::MainCourse, "10"))
                .unwrap()
                .uid
        })
        .collect::<HashSet<_>>();
    assert_eq!(500, uids.len());
    assert_eq!(500, store.len());
}

#[test]
fn uids_are_not_reused_after_removal() {
    let mut store = Store::new();
    let first = store
        .add(new_dish("Soup", "Hot soup", Course::Starter, "45"))
        .unwrap();
    assert!(store.remove_by_id(&first.uid).is_some());
    let second = store
        .add(new_dish("Soup", "Hot soup", Course::Starter, "45"))
        .unwrap();
    assert_ne!(first.uid, second.uid);
}

#[test]
fn duplicate_name_is_rejected_without_change() {
    let mut store = Store::new();
    store
        .add(new_dish("Soup", "Hot soup", Course::Starter, "45"))
        .unwrap();
    let before = store.all();
    assert_eq!(
        Err(AddDishError::DuplicateName),
        store.add(new_dish("Soup", "Cold soup", Course::Starter, "50"))
    );
    assert_eq!(
        Err(AddDishError::DuplicateName),
        store.add(new_dish(" sOUP", "Cold soup", Course::Dessert, "50"))
    );
    let after = store.all();
    assert!(before.is_same(&after));
    assert_eq!(before, after);
    assert_eq!(1, stats::total_count(&after));
    assert_eq!(Amount::from(45), stats::total_value(&after));
}

#[test]
fn invalid_price_is_rejected_without_change() {
    let mut store = sample_store();
    let before = store.all();
    for price in ["0", "-5", "abc", "NaN"] {
        assert_eq!(
            Err(AddDishError::InvalidPrice),
            store.add(new_dish("Pie", "Apple pie", Course::Dessert, price))
        );
    }
    assert_eq!(before, store.all());
}

#[test]
fn remove_missing_record_has_no_effect() {
    let mut store = sample_store();
    let before = store.all();
    let mut other = Store::new();
    let foreign = other
        .add(new_dish("Pie", "Apple pie", Course::Dessert, "40"))
        .unwrap();
    assert!(store.remove_by_id(&foreign.uid).is_none());
    assert!(store.remove_by_id(&foreign.uid).is_none());
    assert!(before.is_same(&store.all()));
}

#[test]
fn remove_preserves_order_of_remaining_records() {
    let mut store = sample_store();
    let steak_uid = store.all()[1].uid;
    let removed = store.remove_by_id(&steak_uid).unwrap();
    assert_eq!("Steak", removed.body.name);
    assert_eq!(vec!["Soup", "Salad", "Cake"], names(&store.all()));
    assert!(store.get(&steak_uid).is_none());
    // Idempotent
    assert!(store.remove_by_id(&steak_uid).is_none());
    assert_eq!(3, store.len());
}

#[test]
fn snapshots_are_not_affected_by_later_modifications() {
    let mut store = sample_store();
    let snapshot = store.all();
    let starters = store.by_course(Course::Starter);
    let soup_uid = snapshot[0].uid;
    assert!(store.remove_by_id(&soup_uid).is_some());
    store
        .add(new_dish("Pie", "Apple pie", Course::Dessert, "40"))
        .unwrap();
    assert_eq!(vec!["Soup", "Steak", "Salad", "Cake"], names(&snapshot));
    assert_eq!(vec!["Soup", "Salad"], names(&starters));
    assert_eq!(vec!["Steak", "Salad", "Cake", "Pie"], names(&store.all()));
}

#[test]
fn by_course_preserves_order() {
    let store = sample_store();
    assert_eq!(vec!["Soup", "Salad"], names(&store.by_course(Course::Starter)));
    assert_eq!(vec!["Steak"], names(&store.by_course(Course::MainCourse)));
    assert_eq!(vec!["Cake"], names(&store.by_course(Course::Dessert)));
    assert!(Store::new().by_course(Course::Dessert).is_empty());
}

#[test]
fn contains_name_ignores_letter_case() {
    let store = sample_store();
    assert!(store.contains_name("soup"));
    assert!(store.contains_name(" CAKE "));
    assert!(!store.contains_name("Pie"));
}

#[test]
fn with_dishes_rejects_duplicates() {
    assert_eq!(
        AddDishError::DuplicateName,
        Store::with_dishes([
            new_dish("Soup", "Hot soup", Course::Starter, "45"),
            new_dish("soup", "Cold soup", Course::Starter, "50"),
        ])
        .unwrap_err()
    );
}

#[test]
fn main_course_aggregates() {
    let mut store = Store::new();
    for (name, price) in [("Steak", "10"), ("Curry", "20"), ("Risotto", "30")] {
        store
            .add(new_dish(name, "Main", Course::MainCourse, price))
            .unwrap();
    }
    let all = store.all();
    assert_eq!(
        Amount::from(20),
        stats::average_price_by_course(&all, Course::MainCourse)
    );
    assert_eq!(
        Amount::from(60),
        stats::total_value_by_course(&all, Course::MainCourse)
    );
}

#[test]
fn most_popular_course_tie_breaks() {
    let store = Store::with_dishes([
        new_dish("Soup", "Hot soup", Course::Starter, "45"),
        new_dish("Steak", "Grilled", Course::MainCourse, "180"),
        new_dish("Salad", "Green salad", Course::Starter, "55"),
        new_dish("Curry", "Spicy", Course::MainCourse, "120"),
    ])
    .unwrap();
    assert_eq!(Course::Starter, stats::most_popular_course(&store.all()));

    let store = Store::with_dishes([
        new_dish("Steak", "Grilled", Course::MainCourse, "180"),
        new_dish("Cake", "Chocolate", Course::Dessert, "60"),
        new_dish("Curry", "Spicy", Course::MainCourse, "120"),
        new_dish("Pie", "Apple", Course::Dessert, "40"),
        new_dish("Risotto", "Creamy", Course::MainCourse, "140"),
        new_dish("Tart", "Lemon", Course::Dessert, "45"),
    ])
    .unwrap();
    assert_eq!(Course::MainCourse, stats::most_popular_course(&store.all()));
}

#[test]
fn snapshot_lookup_by_uid_and_position() {
    let store = sample_store();
    let snapshot = store.all();
    let steak = &snapshot.records()[1];
    assert_eq!(Some(steak), snapshot.get_by_uid(&steak.uid));
    assert_eq!(Some(steak), snapshot.get(1));
    assert!(snapshot.get(4).is_none());
    let starters = store.by_course(Course::Starter);
    assert_eq!("Salad", starters.get(1).unwrap().body.name);
    assert!(starters.get_by_uid(&steak.uid).is_none());
}
