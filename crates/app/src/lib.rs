// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Application state shared by all front ends.
//!
//! Front ends render the state and forward user intents as
//! [`Action`]s. The state itself never blocks, only image selection
//! is delegated to an asynchronous [`ImagePicker`](image::ImagePicker).

use std::ops::AddAssign;

use discro::{Publisher, Ref, Subscriber};

/// User intents
pub mod action;
pub use self::action::Action;

/// Statistics and list items for display
pub mod dashboard;

/// Filtering the menu by course
pub mod filter;

/// Entering a new dish
pub mod form;

/// Image selection
pub mod image;

/// The observable menu
pub mod menu;

/// Aggregated application state
pub mod model;
pub use self::model::Model;

/// Messages for the user
pub mod notice;

/// Settings management
pub mod settings;

pub type ObservableRef<'a, T> = Ref<'a, T>;

/// Manages the mutable, observable state
#[derive(Debug)]
pub struct Observable<T> {
    publisher: Publisher<T>,
}

impl<T> Observable<T> {
    #[must_use]
    pub fn new(initial_value: T) -> Self {
        let publisher = Publisher::new(initial_value);
        Self { publisher }
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, T> {
        self.publisher.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<T> {
        self.publisher.subscribe_changed()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn modify(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.publisher.modify(modify)
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

/// Tells the front end if it needs to render again after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    Unchanged,
    MaybeChanged,
    Changed,
}

impl ActionEffect {
    #[must_use]
    pub const fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

impl AddAssign for ActionEffect {
    fn add_assign(&mut self, rhs: Self) {
        *self = match (*self, rhs) {
            (Self::Changed, _) | (_, Self::Changed) => Self::Changed,
            (Self::MaybeChanged, _) | (_, Self::MaybeChanged) => Self::MaybeChanged,
            (Self::Unchanged, Self::Unchanged) => Self::Unchanged,
        };
    }
}

#[cfg(test)]
mod tests;
