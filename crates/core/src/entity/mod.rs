// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use ulid::Ulid;

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// EntityUid
///////////////////////////////////////////////////////////////////////

/// Unique, immutable identifier of an entity.
///
/// Encoded as a ULID, i.e. 48 bits of milliseconds since the Unix epoch
/// followed by 80 bits that disambiguate identifiers generated within
/// the same millisecond.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct EntityUid(Ulid);

impl EntityUid {
    pub const NIL: Self = Self(Ulid(0));

    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    #[must_use]
    pub const fn to_ulid(self) -> Ulid {
        let Self(ulid) = self;
        ulid
    }

    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.to_ulid().0 == 0
    }

    /// Milliseconds since the Unix epoch when this identifier was generated.
    #[must_use]
    pub fn timestamp_ms(self) -> u64 {
        self.to_ulid().timestamp_ms()
    }
}

impl Default for EntityUid {
    fn default() -> Self {
        Self::NIL
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityUidInvalidity {
    Nil,
}

impl Validate for EntityUid {
    type Invalidity = EntityUidInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.is_nil(), Self::Invalidity::Nil)
            .into()
    }
}

impl fmt::Display for EntityUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(ulid) = self;
        fmt::Display::fmt(ulid, f)
    }
}

impl FromStr for EntityUid {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

///////////////////////////////////////////////////////////////////////
// EntityUidGenerator
///////////////////////////////////////////////////////////////////////

/// Generates strictly increasing identifiers.
///
/// Identifiers are never reused by the same generator, even when
/// requested many times within a single millisecond or when the
/// system clock goes backwards.
pub struct EntityUidGenerator {
    generator: ulid::Generator,
    last: Option<EntityUid>,
}

impl EntityUidGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generator: ulid::Generator::new(),
            last: None,
        }
    }

    /// The most recently generated identifier.
    #[must_use]
    pub const fn last(&self) -> Option<EntityUid> {
        self.last
    }

    pub fn generate(&mut self) -> EntityUid {
        let Self { generator, last } = self;
        let next = generator
            .generate()
            .ok()
            .filter(|next| last.is_none_or(|last| *next > last.to_ulid()))
            // Either the random bits of the current millisecond are exhausted
            // or the clock went backwards.
            .or_else(|| last.and_then(|last| last.to_ulid().increment()))
            .unwrap_or_else(Ulid::new);
        let next = EntityUid::from_ulid(next);
        debug_assert!(last.is_none_or(|last| next > last));
        *last = Some(next);
        next
    }
}

impl Default for EntityUidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityUidGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityUidGenerator")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

///////////////////////////////////////////////////////////////////////
// Entity
///////////////////////////////////////////////////////////////////////

/// An identified, immutable body.
///
/// Entities are never modified after creation. Replacing the body
/// requires a new entity with a new identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity<B> {
    pub uid: EntityUid,
    pub body: B,
}

impl<B> Entity<B> {
    #[must_use]
    pub const fn new(uid: EntityUid, body: B) -> Self {
        Self { uid, body }
    }

    #[must_use]
    pub fn into_body(self) -> B {
        let Self { uid: _, body } = self;
        body
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityInvalidity<T> {
    Uid(EntityUidInvalidity),
    Body(T),
}

impl<B> Validate for Entity<B>
where
    B: Validate,
{
    type Invalidity = EntityInvalidity<B::Invalidity>;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self { uid, body } = self;
        ValidationContext::new()
            .validate_with(uid, EntityInvalidity::Uid)
            .validate_with(body, EntityInvalidity::Body)
            .into()
    }
}

#[cfg(test)]
mod tests;
