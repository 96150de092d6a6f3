// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use discro::Subscriber;

use timetoeat_core::{DishRecord, DishUid, stats::MenuSummary};
use timetoeat_store::{AddDishResult, NewDish, Snapshot, Store};

use crate::{Observable, ObservableRef, notice::ConfirmationPrompt};

pub mod tasklet;

/// A pending request for deleting a dish.
///
/// Can only be obtained from [`MenuState::request_deletion()`] and must
/// be passed back to [`MenuState::confirm_deletion()`] after the user
/// has confirmed the deletion. Dropping the request cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    uid: DishUid,
    name: String,
}

impl DeletionRequest {
    #[must_use]
    pub const fn uid(&self) -> &DishUid {
        &self.uid
    }

    #[must_use]
    pub fn prompt(&self) -> ConfirmationPrompt {
        let Self { name, .. } = self;
        ConfirmationPrompt {
            title: "Delete Dish",
            message: format!("Are you sure you want to delete \"{name}\"?"),
            confirm_label: "Delete",
            cancel_label: "Cancel",
        }
    }
}

/// Owns the menu and publishes a new snapshot after each modification.
#[derive(Debug)]
pub struct MenuState {
    store: Store,
    snapshot: Observable<Snapshot>,
}

impl MenuState {
    #[must_use]
    pub fn new(store: Store) -> Self {
        let snapshot = Observable::new(store.all());
        Self { store, snapshot }
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn read_snapshot(&self) -> ObservableRef<'_, Snapshot> {
        self.snapshot.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<Snapshot> {
        self.snapshot.subscribe_changed()
    }

    #[must_use]
    pub fn summary(&self) -> MenuSummary {
        MenuSummary::of(&self.store.all())
    }

    fn publish_snapshot(&self) -> bool {
        let next_snapshot = self.store.all();
        self.snapshot.modify(|snapshot| {
            if snapshot.is_same(&next_snapshot) {
                return false;
            }
            log::debug!(
                "Publishing menu snapshot with {count} dish(es)",
                count = next_snapshot.len()
            );
            *snapshot = next_snapshot;
            true
        })
    }

    pub fn add_dish(&mut self, new_dish: NewDish) -> AddDishResult<DishRecord> {
        let record = self.store.add(new_dish)?;
        self.publish_snapshot();
        Ok(record)
    }

    /// Prepare the deletion of a dish.
    ///
    /// Returns `None` if the dish does not exist.
    #[must_use]
    pub fn request_deletion(&self, uid: &DishUid) -> Option<DeletionRequest> {
        let record = self.store.get(uid)?;
        Some(DeletionRequest {
            uid: record.uid,
            name: record.body.name.clone(),
        })
    }

    /// Delete a dish after the user has confirmed the request.
    ///
    /// Returns `None` if the dish has already been deleted.
    pub fn confirm_deletion(&mut self, request: DeletionRequest) -> Option<DishRecord> {
        let DeletionRequest { uid, name: _ } = request;
        let removed = self.store.remove_by_id(&uid)?;
        self.publish_snapshot();
        Some(removed)
    }
}
