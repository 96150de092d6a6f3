// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::Validate as _;
use thiserror::Error;

use timetoeat_core::{
    Course, Dish, DishImage, DishRecord, EntityUidGenerator, Price,
    price::PriceParseError,
    util::string::trimmed_non_empty_from,
};

/// Unvalidated input for a new dish, as entered by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewDish {
    pub name: String,
    pub description: String,

    /// The price in plain decimal notation.
    pub price: String,

    pub course: Course,
    pub image: DishImage,
}

/// Reasons for rejecting a new dish.
///
/// Only the first failed check is reported, in the order of the
/// variants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddDishError {
    #[error("empty name")]
    EmptyName,

    #[error("empty description")]
    EmptyDescription,

    #[error("empty price")]
    EmptyPrice,

    #[error("invalid price")]
    InvalidPrice,

    #[error("duplicate name")]
    DuplicateName,
}

pub type AddDishResult<T> = Result<T, AddDishError>;

#[derive(Debug)]
pub struct ValidatedInput(Dish);

impl ValidatedInput {
    #[must_use]
    pub fn into_inner(self) -> Dish {
        let Self(dish) = self;
        dish
    }
}

/// Validate a new dish against the existing records.
pub fn validate_input(existing: &[DishRecord], new_dish: NewDish) -> AddDishResult<ValidatedInput> {
    let NewDish {
        name,
        description,
        price,
        course,
        image,
    } = new_dish;
    let name = trimmed_non_empty_from(name).ok_or(AddDishError::EmptyName)?;
    let description = trimmed_non_empty_from(description).ok_or(AddDishError::EmptyDescription)?;
    let price = Price::parse(&price).map_err(|err| match err {
        PriceParseError::Empty => AddDishError::EmptyPrice,
        PriceParseError::Malformed | PriceParseError::NotPositive => AddDishError::InvalidPrice,
    })?;
    if existing.iter().any(|record| record.body.is_same_name(&name)) {
        return Err(AddDishError::DuplicateName);
    }
    let image = if let Err(err) = image.validate() {
        log::warn!("Discarding invalid image {image:?}: {err:?}");
        DishImage::Missing
    } else {
        image
    };
    let dish = Dish {
        name,
        description,
        course,
        price,
        image,
    };
    debug_assert!(dish.validate().is_ok());
    Ok(ValidatedInput(dish))
}

/// Validate a new dish and assign a new, unique identifier.
pub fn create_entity(
    existing: &[DishRecord],
    uid_gen: &mut EntityUidGenerator,
    new_dish: NewDish,
) -> AddDishResult<DishRecord> {
    let dish = validate_input(existing, new_dish)?.into_inner();
    let uid = uid_gen.generate();
    debug_assert!(existing.iter().all(|record| record.uid != uid));
    Ok(DishRecord::new(uid, dish))
}
