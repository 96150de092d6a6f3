// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use timetoeat_core::{DishImage, stats::count_by_course};
use timetoeat_store::NewDish;

use super::*;

fn new_dish(name: &str, course: Course) -> NewDish {
    NewDish {
        name: name.into(),
        description: format!("{name} of the house"),
        price: "10".into(),
        course,
        image: DishImage::Missing,
    }
}

fn sample_store() -> Store {
    Store::with_dishes([
        new_dish("Soup", Course::Starter),
        new_dish("Steak", Course::MainCourse),
        new_dish("Salad", Course::Starter),
        new_dish("Curry", Course::MainCourse),
        new_dish("Lasagne", Course::MainCourse),
    ])
    .unwrap()
}

fn names(snapshot: &Snapshot) -> Vec<&str> {
    snapshot
        .iter()
        .map(|record| record.body.name.as_str())
        .collect()
}

#[test]
fn default_filter_is_all() {
    assert_eq!(CourseFilter::All, CourseFilter::default());
}

#[test]
fn apply_preserves_order() {
    let store = sample_store();
    assert_eq!(
        vec!["Soup", "Steak", "Salad", "Curry", "Lasagne"],
        names(&CourseFilter::All.apply(&store))
    );
    assert_eq!(
        vec!["Soup", "Salad"],
        names(&CourseFilter::Course(Course::Starter).apply(&store))
    );
    assert_eq!(
        vec!["Steak", "Curry", "Lasagne"],
        names(&CourseFilter::Course(Course::MainCourse).apply(&store))
    );
    assert!(
        CourseFilter::Course(Course::Dessert)
            .apply(&store)
            .is_empty()
    );
}

#[test]
fn matches_agrees_with_apply() {
    let store = sample_store();
    for filter in CourseFilter::all_filters() {
        let expected: Vec<_> = store
            .all()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        assert_eq!(expected.as_slice(), filter.apply(&store).records());
    }
}

#[test]
fn pills_with_counts() {
    let store = sample_store();
    let counts = count_by_course(&store.all());
    let pills = filter_pills(&counts, CourseFilter::Course(Course::Starter));
    let labels: Vec<_> = pills.iter().map(FilterPill::label).collect();
    assert_eq!(
        vec!["All (5)", "Starter (2)", "Main Course (3)", "Dessert (0)"],
        labels
    );
    let selected: Vec<_> = pills
        .iter()
        .filter(|pill| pill.selected)
        .map(|pill| pill.filter)
        .collect();
    assert_eq!(vec![CourseFilter::Course(Course::Starter)], selected);
}

#[test]
fn empty_hints() {
    assert_eq!(
        "Add some dishes to your menu",
        CourseFilter::All.empty_hint()
    );
    assert_eq!(
        "No starter dishes yet",
        CourseFilter::Course(Course::Starter).empty_hint()
    );
    assert_eq!(
        "No main course dishes yet",
        CourseFilter::Course(Course::MainCourse).empty_hint()
    );
    assert_eq!(
        "No dessert dishes yet",
        CourseFilter::Course(Course::Dessert).empty_hint()
    );
}
