// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core domain model of a restaurant menu.
//!
//! Contains only pure data types, their validation rules and the
//! stateless aggregation functions that derive statistics from a
//! sequence of dish records.

pub mod dish;
pub use self::dish::{
    BundledImageId, Course, Dish, DishImage, Entity as DishRecord, ResourceLocator,
};

mod entity;
pub use self::entity::*;

pub mod price;
pub use self::price::{Amount, Price};

pub mod stats;

pub mod util;

pub type DishUid = EntityUid;

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};

    pub(crate) use crate::entity::*;
}
