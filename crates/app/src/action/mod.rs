// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use timetoeat_core::{Course, DishUid};

use crate::{filter::CourseFilter, image::PickImageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Form(FormAction),
    Filter(CourseFilter),
    Delete(DeleteAction),
}

impl From<FormAction> for Action {
    fn from(action: FormAction) -> Self {
        Self::Form(action)
    }
}

impl From<CourseFilter> for Action {
    fn from(filter: CourseFilter) -> Self {
        Self::Filter(filter)
    }
}

impl From<DeleteAction> for Action {
    fn from(action: DeleteAction) -> Self {
        Self::Delete(action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetName(String),
    SetDescription(String),
    SetPrice(String),
    SetCourse(Course),
    /// Outcome of an image selection that has been requested
    /// asynchronously by the front end.
    ImagePicked(PickImageResult),
    ClearImage,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAction {
    /// Ask the user for confirmation.
    Request(DishUid),
    Confirm,
    Cancel,
}
