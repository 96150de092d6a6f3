// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use timetoeat_store::AddDishError;

use crate::image::PickImageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A short message that is displayed to the user once.
///
/// Not stored with the menu. Front ends are supposed to dismiss
/// a notice after it has been acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: Cow<'static, str>,
}

impl Notice {
    #[must_use]
    pub const fn new(severity: Severity, title: &'static str, message: &'static str) -> Self {
        Self {
            severity,
            title,
            message: Cow::Borrowed(message),
        }
    }

    #[must_use]
    pub const fn dish_added() -> Self {
        Self::new(Severity::Success, "Success", "Dish added to menu!")
    }
}

impl From<AddDishError> for Notice {
    fn from(from: AddDishError) -> Self {
        match from {
            AddDishError::EmptyName => {
                Self::new(Severity::Error, "Error", "Please enter a dish name")
            }
            AddDishError::EmptyDescription => {
                Self::new(Severity::Error, "Error", "Please enter a description")
            }
            AddDishError::EmptyPrice => Self::new(Severity::Error, "Error", "Please enter a price"),
            AddDishError::InvalidPrice => Self::new(
                Severity::Error,
                "Error",
                "Please enter a valid price greater than 0",
            ),
            AddDishError::DuplicateName => Self::new(
                Severity::Error,
                "Duplicate",
                "This dish already exists in the menu",
            ),
        }
    }
}

impl From<PickImageError> for Notice {
    fn from(from: PickImageError) -> Self {
        match from {
            PickImageError::PermissionDenied => Self::new(
                Severity::Info,
                "Permission Required",
                "Please allow access to your photos to add images.",
            ),
            PickImageError::PickerFailed => Self::new(
                Severity::Error,
                "Error",
                "Failed to pick image. Please try again.",
            ),
        }
    }
}

/// Asks the user to confirm a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: &'static str,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

#[cfg(test)]
mod tests;
