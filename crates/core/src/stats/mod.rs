// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Aggregate statistics of a menu.
//!
//! All functions are pure and derive their results from the given
//! records on every invocation. Nothing is cached.

use crate::{
    dish::{COURSE_COUNT, Course, Entity as DishRecord},
    price::Amount,
};

///////////////////////////////////////////////////////////////////////
// CourseCounts
///////////////////////////////////////////////////////////////////////

/// Number of dishes per course.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseCounts {
    pub starter: usize,
    pub main_course: usize,
    pub dessert: usize,
}

impl CourseCounts {
    #[must_use]
    pub const fn get(&self, course: Course) -> usize {
        match course {
            Course::Starter => self.starter,
            Course::MainCourse => self.main_course,
            Course::Dessert => self.dessert,
        }
    }

    fn get_mut(&mut self, course: Course) -> &mut usize {
        match course {
            Course::Starter => &mut self.starter,
            Course::MainCourse => &mut self.main_course,
            Course::Dessert => &mut self.dessert,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.starter + self.main_course + self.dessert
    }

    /// The course with the most dishes.
    ///
    /// Ties are resolved in favor of the course that comes first,
    /// i.e. starters win against main courses and desserts, and main
    /// courses win against desserts.
    #[must_use]
    pub const fn most_popular(&self) -> Course {
        let Self {
            starter,
            main_course,
            dessert,
        } = *self;
        if starter >= main_course && starter >= dessert {
            Course::Starter
        } else if main_course >= dessert {
            Course::MainCourse
        } else {
            Course::Dessert
        }
    }

    /// Counts paired with their course in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Course, usize)> + '_ {
        Course::all().map(|course| (course, self.get(course)))
    }
}

///////////////////////////////////////////////////////////////////////
// Functions
///////////////////////////////////////////////////////////////////////

fn sum_prices<'a>(records: impl IntoIterator<Item = &'a DishRecord>) -> (usize, Amount) {
    records.into_iter().fold((0, Amount::ZERO), |(count, sum), record| {
        (count + 1, sum.saturating_add(record.body.price.amount()))
    })
}

fn average(count: usize, total: Amount) -> Amount {
    if count == 0 {
        return Amount::ZERO;
    }
    total.checked_div(Amount::from(count)).unwrap_or_default()
}

fn of_course(
    records: &[DishRecord],
    course: Course,
) -> impl Iterator<Item = &DishRecord> {
    records
        .iter()
        .filter(move |record| record.body.course == course)
}

#[must_use]
pub fn total_count(records: &[DishRecord]) -> usize {
    records.len()
}

#[must_use]
pub fn count_by_course(records: &[DishRecord]) -> CourseCounts {
    let mut counts = CourseCounts::default();
    for record in records {
        *counts.get_mut(record.body.course) += 1;
    }
    counts
}

/// Sum of all prices, zero if empty.
#[must_use]
pub fn total_value(records: &[DishRecord]) -> Amount {
    let (_, total) = sum_prices(records);
    total
}

/// Mean price, zero if empty.
#[must_use]
pub fn average_price(records: &[DishRecord]) -> Amount {
    let (count, total) = sum_prices(records);
    average(count, total)
}

#[must_use]
pub fn total_value_by_course(records: &[DishRecord], course: Course) -> Amount {
    let (_, total) = sum_prices(of_course(records, course));
    total
}

#[must_use]
pub fn average_price_by_course(records: &[DishRecord], course: Course) -> Amount {
    let (count, total) = sum_prices(of_course(records, course));
    average(count, total)
}

/// See [`CourseCounts::most_popular()`] for how ties are resolved.
#[must_use]
pub fn most_popular_course(records: &[DishRecord]) -> Course {
    count_by_course(records).most_popular()
}

///////////////////////////////////////////////////////////////////////
// MenuSummary
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CourseSummary {
    pub course: Course,
    pub count: usize,
    pub total_value: Amount,
    pub average_price: Amount,
}

/// All aggregates of a menu, collected in a single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSummary {
    pub total_count: usize,
    pub total_value: Amount,
    pub average_price: Amount,
    pub course_counts: CourseCounts,
    pub most_popular_course: Course,

    /// Per-course aggregates in display order.
    pub courses: [CourseSummary; COURSE_COUNT],
}

impl MenuSummary {
    #[must_use]
    pub fn of(records: &[DishRecord]) -> Self {
        let mut course_counts = CourseCounts::default();
        let mut course_totals = [Amount::ZERO; COURSE_COUNT];
        for record in records {
            let course = record.body.course;
            *course_counts.get_mut(course) += 1;
            let total = &mut course_totals[course.index()];
            *total = total.saturating_add(record.body.price.amount());
        }
        let total_value = course_totals
            .iter()
            .fold(Amount::ZERO, |sum, total| sum.saturating_add(*total));
        let courses = [Course::Starter, Course::MainCourse, Course::Dessert].map(|course| {
            let count = course_counts.get(course);
            let total_value = course_totals[course.index()];
            CourseSummary {
                course,
                count,
                total_value,
                average_price: average(count, total_value),
            }
        });
        Self {
            total_count: records.len(),
            total_value,
            average_price: average(records.len(), total_value),
            course_counts,
            most_popular_course: course_counts.most_popular(),
            courses,
        }
    }

    #[must_use]
    pub const fn course(&self, course: Course) -> &CourseSummary {
        &self.courses[course.index()]
    }
}
