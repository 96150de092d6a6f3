// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::*;
use crate::Price;

#[test]
fn nil_uid_is_invalid() {
    assert!(EntityUid::NIL.is_nil());
    assert!(EntityUid::NIL.validate().is_err());
    assert!(EntityUid::default().validate().is_err());
}

#[test]
fn generated_uids_are_valid() {
    let mut generator = EntityUidGenerator::new();
    assert!(generator.last().is_none());
    let uid = generator.generate();
    assert!(uid.validate().is_ok());
    assert_eq!(Some(uid), generator.last());
}

#[test]
fn generate_many_within_the_same_millisecond() {
    let mut generator = EntityUidGenerator::new();
    let uids = (0..10_000).map(|_| generator.generate()).collect::<Vec<_>>();
    assert!(uids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(uids.len(), uids.iter().collect::<HashSet<_>>().len());
}

#[test]
fn independent_generators_do_not_collide() {
    let mut lhs = EntityUidGenerator::new();
    let mut rhs = EntityUidGenerator::new();
    let uids = (0..1_000)
        .flat_map(|_| [lhs.generate(), rhs.generate()])
        .collect::<HashSet<_>>();
    assert_eq!(2_000, uids.len());
}

#[test]
fn parse_display_string() {
    let uid = EntityUidGenerator::new().generate();
    let encoded = uid.to_string();
    assert_eq!(26, encoded.len());
    assert_eq!(uid, encoded.parse().unwrap());
    assert!("not a uid".parse::<EntityUid>().is_err());
}

#[test]
fn entity_with_nil_uid_is_invalid() {
    let price = Price::new(Decimal::ONE);
    let entity = Entity::new(EntityUid::NIL, price);
    assert!(entity.validate().is_err());
    let entity = Entity::new(EntityUidGenerator::new().generate(), price);
    assert!(entity.validate().is_ok());
    assert_eq!(price, entity.into_body());
}
