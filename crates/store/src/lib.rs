// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ordered, in-memory collection of dish records.
//!
//! The [`Store`] exclusively owns all records. Readers only ever get
//! immutable [`Snapshot`]s that are not affected by subsequent
//! modifications.

use std::{ops::Deref, sync::Arc};

use timetoeat_core::{Course, DishRecord, DishUid, EntityUidGenerator};

pub mod dish;
pub use self::dish::{AddDishError, AddDishResult, NewDish};

///////////////////////////////////////////////////////////////////////
// Snapshot
///////////////////////////////////////////////////////////////////////

/// Immutable, ordered sequence of records.
///
/// Cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot(Arc<[DishRecord]>);

impl Snapshot {
    #[must_use]
    pub fn records(&self) -> &[DishRecord] {
        let Self(records) = self;
        records
    }

    #[must_use]
    pub fn get_by_uid(&self, uid: &DishUid) -> Option<&DishRecord> {
        self.records().iter().find(|record| &record.uid == uid)
    }

    /// Check if both snapshots share the same records.
    ///
    /// Snapshots obtained from a [`Store`] without any modification in
    /// between are always the same.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Snapshot {
    type Target = [DishRecord];

    fn deref(&self) -> &Self::Target {
        self.records()
    }
}

impl AsRef<[DishRecord]> for Snapshot {
    fn as_ref(&self) -> &[DishRecord] {
        self.records()
    }
}

impl From<Vec<DishRecord>> for Snapshot {
    fn from(from: Vec<DishRecord>) -> Self {
        Self(from.into())
    }
}

impl FromIterator<DishRecord> for Snapshot {
    fn from_iter<T: IntoIterator<Item = DishRecord>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a DishRecord;
    type IntoIter = std::slice::Iter<'a, DishRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records().iter()
    }
}

///////////////////////////////////////////////////////////////////////
// Store
///////////////////////////////////////////////////////////////////////

/// The dishes of a menu in insertion order.
///
/// Records are only added through [`Store::add()`] and are never
/// modified afterwards. A dish is replaced by removing it and adding
/// a new one.
#[derive(Debug, Default)]
pub struct Store {
    records: Snapshot,
    uid_gen: EntityUidGenerator,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a store and add all dishes in order.
    ///
    /// Fails on the first dish that is rejected.
    pub fn with_dishes(new_dishes: impl IntoIterator<Item = NewDish>) -> AddDishResult<Self> {
        let mut store = Self::new();
        let mut records = Vec::new();
        for new_dish in new_dishes {
            let record = dish::create_entity(&records, &mut store.uid_gen, new_dish)?;
            records.push(record);
        }
        log::debug!("Created store with {count} dish(es)", count = records.len());
        store.records = records.into();
        Ok(store)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, uid: &DishUid) -> Option<&DishRecord> {
        self.records.get_by_uid(uid)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.records.iter().any(|record| record.body.is_same_name(name))
    }

    /// Borrow the current records without sharing a snapshot.
    #[must_use]
    pub fn records(&self) -> &[DishRecord] {
        self.records.records()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> Snapshot {
        self.records.clone()
    }

    /// All records of the given course in insertion order.
    #[must_use]
    pub fn by_course(&self, course: Course) -> Snapshot {
        self.records
            .iter()
            .filter(|record| record.body.course == course)
            .cloned()
            .collect()
    }

    /// Validate and append a new dish.
    ///
    /// The store remains unchanged if the dish is rejected.
    pub fn add(&mut self, new_dish: NewDish) -> AddDishResult<DishRecord> {
        let Self { records, uid_gen } = self;
        let record = dish::create_entity(records, uid_gen, new_dish).inspect_err(|err| {
            log::debug!("Rejected new dish: {err}");
        })?;
        log::info!(
            "Adding dish {uid} \"{name}\"",
            uid = record.uid,
            name = record.body.name,
        );
        let mut next_records = Vec::with_capacity(records.len() + 1);
        next_records.extend_from_slice(records);
        next_records.push(record.clone());
        *records = next_records.into();
        Ok(record)
    }

    /// Remove a dish.
    ///
    /// Returns the removed record or `None` if no record with the
    /// given identifier exists. Removing a missing record has no effect.
    pub fn remove_by_id(&mut self, uid: &DishUid) -> Option<DishRecord> {
        let Some(index) = self.records.iter().position(|record| &record.uid == uid) else {
            log::debug!("Dish {uid} not found");
            return None;
        };
        let mut next_records = self.records.to_vec();
        let removed = next_records.remove(index);
        log::info!(
            "Removing dish {uid} \"{name}\"",
            name = removed.body.name,
        );
        self.records = next_records.into();
        Some(removed)
    }
}

#[cfg(test)]
mod tests;
