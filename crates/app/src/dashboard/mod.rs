// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use timetoeat_core::{
    Amount, Course, DishImage, DishRecord, DishUid, price::round_amount, stats::MenuSummary,
};

/// Formats amounts for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    currency_symbol: String,
    decimal_places: u32,
}

impl PriceFormat {
    #[must_use]
    pub const fn new(currency_symbol: String, decimal_places: u32) -> Self {
        Self {
            currency_symbol,
            decimal_places,
        }
    }

    /// Without rounding and insignificant trailing zeros, e.g. "R12.5".
    #[must_use]
    pub fn exact(&self, amount: Amount) -> String {
        let Self {
            currency_symbol, ..
        } = self;
        format!("{currency_symbol}{amount}", amount = amount.normalize())
    }

    /// Rounded to the configured number of decimal places, e.g. "R13".
    #[must_use]
    pub fn rounded(&self, amount: Amount) -> String {
        let Self {
            currency_symbol,
            decimal_places,
        } = self;
        let rounded = round_amount(amount, *decimal_places);
        format!(
            "{currency_symbol}{rounded:.precision$}",
            precision = *decimal_places as usize
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseAnalytics {
    pub course: Course,
    pub label: &'static str,
    pub count: usize,
    pub total_value: String,
    pub average_price: String,
}

/// Overview of the whole menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total_items: usize,
    pub average_price: String,
    pub most_popular_course: &'static str,
    pub courses: Vec<CourseAnalytics>,
}

impl Dashboard {
    #[must_use]
    pub fn new(records: &[DishRecord], price_format: &PriceFormat) -> Self {
        let summary = MenuSummary::of(records);
        let courses = summary
            .courses
            .iter()
            .map(|course_summary| CourseAnalytics {
                course: course_summary.course,
                label: course_summary.course.plural_label(),
                count: course_summary.count,
                total_value: price_format.exact(course_summary.total_value),
                average_price: price_format.rounded(course_summary.average_price),
            })
            .collect();
        Self {
            total_items: summary.total_count,
            average_price: price_format.rounded(summary.average_price),
            most_popular_course: summary.most_popular_course.plural_label(),
            courses,
        }
    }
}

/// A single entry in a list of dishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishListItem<'a> {
    pub uid: DishUid,
    pub name: &'a str,
    pub description: &'a str,
    pub price: String,
    pub course: Course,
    pub image: &'a DishImage,
}

impl<'a> DishListItem<'a> {
    #[must_use]
    pub fn new(record: &'a DishRecord, price_format: &PriceFormat) -> Self {
        let DishRecord { uid, body } = record;
        Self {
            uid: *uid,
            name: &body.name,
            description: &body.description,
            price: price_format.exact(body.price.amount()),
            course: body.course,
            image: &body.image,
        }
    }
}
