// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::price::Amount;

fn soup() -> Dish {
    Dish {
        name: "Soup".into(),
        description: "Hot soup".into(),
        course: Course::Starter,
        price: Price::new(Amount::from(45)),
        image: DishImage::Missing,
    }
}

#[test]
fn courses_in_display_order() {
    assert_eq!(
        vec![Course::Starter, Course::MainCourse, Course::Dessert],
        Course::all().collect::<Vec<_>>()
    );
    assert_eq!(3, COURSE_COUNT);
    for (index, course) in Course::all().enumerate() {
        assert_eq!(index, course.index());
    }
}

#[test]
fn course_labels() {
    assert_eq!("Main Course", Course::MainCourse.to_string());
    assert_eq!("Main Courses", Course::MainCourse.plural_label());
    assert_eq!("Main", Course::MainCourse.short_label());
    assert_eq!("Starters", Course::Starter.plural_label());
    assert_eq!("Dessert", Course::Dessert.short_label());
}

#[test]
fn image_ref_clamp_from() {
    assert_eq!(
        Some(ResourceLocator::new("file:///photos/soup.jpg".into())),
        ResourceLocator::clamp_from(" file:///photos/soup.jpg\n")
    );
    assert!(ResourceLocator::clamp_from(" ").is_none());
    assert!(BundledImageId::clamp_from("").is_none());
}

#[test]
fn image_ref_validate() {
    assert!(BundledImageId::new("soup.jpg".into()).validate().is_ok());
    assert!(BundledImageId::new(" soup.jpg".into()).validate().is_err());
    assert!(ResourceLocator::default().validate().is_err());
}

#[test]
fn missing_image_is_valid() {
    assert!(DishImage::Missing.is_missing());
    assert!(DishImage::default().validate().is_ok());
    assert_eq!(DishImage::Missing, DishImage::from(None));
}

#[test]
fn external_image_from_locator() {
    let locator = ResourceLocator::new("content://media/42".into());
    let image = DishImage::from(Some(locator.clone()));
    assert_eq!(DishImage::External(locator), image);
    assert!(!image.is_missing());
    assert!(image.validate().is_ok());
}

#[test]
fn invalid_image_invalidates_dish() {
    let dish = Dish {
        image: DishImage::Bundled(BundledImageId::default()),
        ..soup()
    };
    assert!(dish.validate().is_err());
}

#[test]
fn validate_dish() {
    assert!(soup().validate().is_ok());
    assert!(
        Dish {
            name: String::new(),
            ..soup()
        }
        .validate()
        .is_err()
    );
    assert!(
        Dish {
            name: " Soup".into(),
            ..soup()
        }
        .validate()
        .is_err()
    );
    assert!(
        Dish {
            description: "\t".into(),
            ..soup()
        }
        .validate()
        .is_err()
    );
    assert!(
        Dish {
            price: Price::default(),
            ..soup()
        }
        .validate()
        .is_err()
    );
}

#[test]
fn same_name_ignores_letter_case() {
    let dish = soup();
    assert!(dish.is_same_name("soup"));
    assert!(dish.is_same_name("  SOUP "));
    assert!(!dish.is_same_name("Soup of the day"));
}
