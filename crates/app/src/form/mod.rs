// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use timetoeat_core::{Course, DishImage, DishRecord};
use timetoeat_store::{AddDishResult, NewDish};

use crate::{
    image::{ImagePicker, PickImageResult},
    menu::MenuState,
    notice::Notice,
};

/// Input fields for adding a new dish.
///
/// The field contents are kept verbatim. Trimming and parsing
/// happen upon submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: Course,
    pub image: DishImage,
    default_course: Course,
}

impl Default for DishForm {
    fn default() -> Self {
        Self::new(Course::MainCourse)
    }
}

impl DishForm {
    #[must_use]
    pub const fn new(default_course: Course) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            course: default_course,
            image: DishImage::Missing,
            default_course,
        }
    }

    #[must_use]
    pub const fn default_course(&self) -> Course {
        self.default_course
    }

    /// Takes effect when the form is reset.
    pub fn set_default_course(&mut self, default_course: Course) {
        self.default_course = default_course;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.default_course);
    }

    #[must_use]
    pub fn to_new_dish(&self) -> NewDish {
        let Self {
            name,
            description,
            price,
            course,
            image,
            default_course: _,
        } = self;
        NewDish {
            name: name.clone(),
            description: description.clone(),
            price: price.clone(),
            course: *course,
            image: image.clone(),
        }
    }

    /// Add the dish to the menu.
    ///
    /// The form is reset after the dish has been added. Otherwise
    /// all fields remain unchanged for correcting the input.
    pub fn submit(&mut self, menu: &mut MenuState) -> AddDishResult<DishRecord> {
        let record = menu.add_dish(self.to_new_dish())?;
        self.reset();
        Ok(record)
    }

    /// Apply the outcome of an image selection.
    ///
    /// The current image is only replaced if an image has been selected.
    /// Failures are reported as a notice.
    pub fn apply_picked_image(&mut self, result: PickImageResult) -> Option<Notice> {
        match result {
            Ok(Some(locator)) => {
                log::debug!("Selected image: {locator}");
                self.image = DishImage::External(locator);
                None
            }
            Ok(None) => {
                log::debug!("Image selection cancelled");
                None
            }
            Err(err) => {
                log::warn!("Failed to select image: {err}");
                Some(err.into())
            }
        }
    }

    pub async fn pick_image(&mut self, picker: &impl ImagePicker) -> Option<Notice> {
        let result = picker.request_image().await;
        self.apply_picked_image(result)
    }

    /// Returns `true` if an image has been removed.
    pub fn clear_image(&mut self) -> bool {
        if self.image.is_missing() {
            return false;
        }
        self.image = DishImage::Missing;
        true
    }
}
