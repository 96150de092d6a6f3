// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn combine_action_effects() {
    let mut effect = ActionEffect::Unchanged;
    effect += ActionEffect::Unchanged;
    assert_eq!(ActionEffect::Unchanged, effect);
    effect += ActionEffect::MaybeChanged;
    assert_eq!(ActionEffect::MaybeChanged, effect);
    effect += ActionEffect::Changed;
    assert_eq!(ActionEffect::Changed, effect);
    effect += ActionEffect::Unchanged;
    assert_eq!(ActionEffect::Changed, effect);
}

#[test]
fn observable_modify() {
    let observable = Observable::new(1);
    assert!(!observable.modify(|_| false));
    assert!(observable.modify(|value| {
        *value += 1;
        true
    }));
    assert_eq!(2, *observable.read());
}
