// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, ops::Deref};

use strum::{EnumCount, EnumIter, IntoEnumIterator as _};

use crate::{
    prelude::*,
    price::{Price, PriceInvalidity},
    util::string::{eq_trimmed_ignore_case, trimmed_non_empty_from},
};

///////////////////////////////////////////////////////////////////////
// Course
///////////////////////////////////////////////////////////////////////

/// Menu category of a dish.
///
/// The ordinal defines the display order and the precedence when
/// resolving ties between courses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCount, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Course {
    Starter = 0,
    MainCourse = 1,
    Dessert = 2,
}

impl Course {
    /// All courses in display order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        Self::iter()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::MainCourse => "Main Course",
            Self::Dessert => "Dessert",
        }
    }

    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Starter => "Starters",
            Self::MainCourse => "Main Courses",
            Self::Dessert => "Desserts",
        }
    }

    /// Abbreviated label for badges with limited space.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::MainCourse => "Main",
            Self::Dessert => "Dessert",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of distinct courses.
pub const COURSE_COUNT: usize = Course::COUNT;

///////////////////////////////////////////////////////////////////////
// DishImage
///////////////////////////////////////////////////////////////////////

/// Identifier of an image that is bundled with the application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct BundledImageId(String);

/// Opaque locator of an externally selected image, e.g. a URI
/// returned by the media library of the device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ResourceLocator(String);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageRefInvalidity {
    Empty,
    Format,
}

macro_rules! image_ref {
    ($type:ty) => {
        impl $type {
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Trim the value and reject it if nothing remains.
            pub fn clamp_from(value: impl AsRef<str> + Into<String>) -> Option<Self> {
                trimmed_non_empty_from(value).map(Self)
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                let Self(value) = self;
                value
            }

            #[must_use]
            pub fn into_value(self) -> String {
                let Self(value) = self;
                value
            }
        }

        impl Deref for $type {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $type {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Validate for $type {
            type Invalidity = ImageRefInvalidity;

            fn validate(&self) -> ValidationResult<Self::Invalidity> {
                let value = self.as_str();
                ValidationContext::new()
                    .invalidate_if(value.is_empty(), Self::Invalidity::Empty)
                    .invalidate_if(value.trim() != value, Self::Invalidity::Format)
                    .into()
            }
        }
    };
}

image_ref!(BundledImageId);
image_ref!(ResourceLocator);

/// The image of a dish, if any.
///
/// An image is either bundled with the application or has been selected
/// from an external source. Both are never present at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DishImage {
    #[default]
    Missing,

    Bundled(BundledImageId),

    External(ResourceLocator),
}

impl DishImage {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<ResourceLocator>> for DishImage {
    fn from(from: Option<ResourceLocator>) -> Self {
        from.map_or(Self::Missing, Self::External)
    }
}

impl From<BundledImageId> for DishImage {
    fn from(from: BundledImageId) -> Self {
        Self::Bundled(from)
    }
}

impl From<ResourceLocator> for DishImage {
    fn from(from: ResourceLocator) -> Self {
        Self::External(from)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DishImageInvalidity {
    Bundled(ImageRefInvalidity),
    External(ImageRefInvalidity),
}

impl Validate for DishImage {
    type Invalidity = DishImageInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let context = ValidationContext::new();
        let context = match self {
            Self::Missing => context,
            Self::Bundled(id) => context.validate_with(id, Self::Invalidity::Bundled),
            Self::External(locator) => context.validate_with(locator, Self::Invalidity::External),
        };
        context.into()
    }
}

///////////////////////////////////////////////////////////////////////
// Dish
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dish {
    /// Display name
    ///
    /// Unique within a menu, ignoring letter case.
    pub name: String,

    pub description: String,

    pub course: Course,

    pub price: Price,

    pub image: DishImage,
}

impl Dish {
    /// Check if the dish would be listed under the given name,
    /// ignoring letter case and surrounding whitespace.
    #[must_use]
    pub fn is_same_name(&self, name: &str) -> bool {
        eq_trimmed_ignore_case(&self.name, name)
    }
}

fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && text.trim() == text
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DishInvalidity {
    Name,
    Description,
    Price(PriceInvalidity),
    Image(DishImageInvalidity),
}

impl Validate for Dish {
    type Invalidity = DishInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            name,
            description,
            course: _,
            price,
            image,
        } = self;
        ValidationContext::new()
            .invalidate_if(!is_valid_text(name), Self::Invalidity::Name)
            .invalidate_if(!is_valid_text(description), Self::Invalidity::Description)
            .validate_with(price, Self::Invalidity::Price)
            .validate_with(image, Self::Invalidity::Image)
            .into()
    }
}

pub type Entity = crate::entity::Entity<Dish>;

#[cfg(test)]
mod tests;
