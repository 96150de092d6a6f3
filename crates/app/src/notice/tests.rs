// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn add_dish_errors_are_errors() {
    for err in [
        AddDishError::EmptyName,
        AddDishError::EmptyDescription,
        AddDishError::EmptyPrice,
        AddDishError::InvalidPrice,
        AddDishError::DuplicateName,
    ] {
        assert_eq!(Severity::Error, Notice::from(err).severity);
    }
}

#[test]
fn duplicate_name_message() {
    let notice = Notice::from(AddDishError::DuplicateName);
    assert_eq!("Duplicate", notice.title);
    assert_eq!("This dish already exists in the menu", notice.message);
}

#[test]
fn permission_denied_is_informational() {
    let notice = Notice::from(PickImageError::PermissionDenied);
    assert_eq!(Severity::Info, notice.severity);
    assert_eq!("Permission Required", notice.title);
}
