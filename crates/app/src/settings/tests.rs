// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn load_missing_file_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(State::default(), State::load(dir.path()).unwrap());
}

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let state = State {
        currency_symbol: "€".into(),
        default_course: Course::Dessert,
        price_decimal_places: 2,
    };
    state.save(dir.path()).unwrap();
    assert_eq!(state, State::load(dir.path()).unwrap());
}

#[test]
fn missing_fields_are_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        new_settings_file_path(dir.path().to_path_buf()),
        "(default_course: Starter)",
    )
    .unwrap();
    let state = State::load(dir.path()).unwrap();
    assert_eq!(Course::Starter, state.default_course);
    assert_eq!(DEFAULT_CURRENCY_SYMBOL, state.currency_symbol);
}

#[test]
fn restore_from_malformed_file_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(new_settings_file_path(dir.path().to_path_buf()), "{{{").unwrap();
    assert!(State::load(dir.path()).is_err());
    assert_eq!(
        State::default(),
        State::restore_from_parent_dir(dir.path())
    );
}

#[tokio::test]
async fn save_spawn_blocking() {
    let dir = tempfile::tempdir().unwrap();
    let state = State {
        price_decimal_places: 1,
        ..Default::default()
    };
    state
        .clone()
        .save_spawn_blocking(dir.path().to_path_buf())
        .await
        .unwrap();
    assert_eq!(state, State::load(dir.path()).unwrap());
}

#[test]
fn update_default_course() {
    let mut state = State::default();
    assert!(!state.update_default_course(Course::MainCourse));
    assert!(state.update_default_course(Course::Starter));
    assert_eq!(Course::Starter, state.default_course);
}

#[test]
fn update_currency_symbol_trimmed() {
    let mut state = State::default();
    assert!(!state.update_currency_symbol(" R "));
    assert!(state.update_currency_symbol(" $ "));
    assert_eq!("$", state.currency_symbol);
}

#[test]
fn observable_state_modify() {
    let state = ObservableState::default();
    assert!(!state.modify(|state| state.update_default_course(Course::MainCourse)));
    assert!(state.modify(|state| state.update_default_course(Course::Dessert)));
    assert_eq!(Course::Dessert, state.read().default_course);
}

#[tokio::test]
async fn save_changed_settings_from_tasklet() {
    let dir = tempfile::tempdir().unwrap();
    let state = ObservableState::default();
    let tasklet = tasklet::on_state_changed_save_to_file(
        state.subscribe(),
        dir.path().to_path_buf(),
        |err| panic!("{err}"),
    );
    let task = tokio::spawn(tasklet);
    assert!(state.modify(|state| state.update_currency_symbol("$")));
    let expected = state.read().clone();
    drop(state);
    task.await.unwrap();
    assert_eq!(expected, State::load(dir.path()).unwrap());
}
