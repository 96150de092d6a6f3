// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use timetoeat_core::{Course, DishRecord, stats::CourseCounts};
use timetoeat_store::{Snapshot, Store};

/// Restricts the list of dishes to a single course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CourseFilter {
    /// Pseudo-category that matches every dish.
    #[default]
    All,
    Course(Course),
}

impl CourseFilter {
    /// All filters in display order, starting with [`Self::All`].
    pub fn all_filters() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(Course::all().map(Self::Course))
    }

    #[must_use]
    pub fn matches(self, record: &DishRecord) -> bool {
        match self {
            Self::All => true,
            Self::Course(course) => record.body.course == course,
        }
    }

    #[must_use]
    pub fn apply(self, store: &Store) -> Snapshot {
        match self {
            Self::All => store.all(),
            Self::Course(course) => store.by_course(course),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Course(course) => course.label(),
        }
    }

    #[must_use]
    pub fn count(self, counts: &CourseCounts) -> usize {
        match self {
            Self::All => counts.total(),
            Self::Course(course) => counts.get(course),
        }
    }

    /// Displayed instead of an empty list.
    #[must_use]
    pub fn empty_hint(self) -> Cow<'static, str> {
        match self {
            Self::All => Cow::Borrowed("Add some dishes to your menu"),
            Self::Course(course) => Cow::Owned(format!(
                "No {course} dishes yet",
                course = course.label().to_lowercase()
            )),
        }
    }
}

/// A selectable filter together with the number of matching dishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPill {
    pub filter: CourseFilter,
    pub count: usize,
    pub selected: bool,
}

impl FilterPill {
    /// e.g. "Main Course (3)"
    #[must_use]
    pub fn label(&self) -> String {
        let Self { filter, count, .. } = self;
        format!("{label} ({count})", label = filter.label())
    }
}

#[must_use]
pub fn filter_pills(counts: &CourseCounts, selected: CourseFilter) -> Vec<FilterPill> {
    CourseFilter::all_filters()
        .map(|filter| FilterPill {
            filter,
            count: filter.count(counts),
            selected: filter == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests;
