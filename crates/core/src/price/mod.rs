// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr as _};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::prelude::*;

/// Exact decimal number for monetary values.
///
/// Sums and averages of prices are calculated without the rounding
/// errors of binary floating-point numbers.
pub type Amount = Decimal;

/// The price of a single dish.
///
/// Valid prices are strictly positive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Price(Amount);

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PriceParseError {
    #[display("empty")]
    Empty,

    #[display("not a decimal number")]
    Malformed,

    #[display("not greater than zero")]
    NotPositive,
}

impl Price {
    #[must_use]
    pub const fn new(amount: Amount) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> Amount {
        let Self(amount) = self;
        amount
    }

    /// Parse a price from user input.
    ///
    /// Leading and trailing whitespace is ignored. Accepts plain decimal
    /// notation, e.g. `45` or `12.50`, and scientific notation, e.g. `1.5e2`.
    pub fn parse(input: &str) -> Result<Self, PriceParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PriceParseError::Empty);
        }
        let amount = parse_amount(input).ok_or(PriceParseError::Malformed)?;
        let price = Self(amount);
        if price.validate().is_err() {
            return Err(PriceParseError::NotPositive);
        }
        Ok(price)
    }
}

/// Plain or scientific decimal notation without digit separators,
/// e.g. `12.50` or `1.5e2`.
fn parse_amount(input: &str) -> Option<Amount> {
    if input.contains('_') {
        return None;
    }
    Amount::from_str(input)
        .or_else(|_| Amount::from_scientific(input))
        .ok()
}

impl From<Price> for Amount {
    fn from(from: Price) -> Self {
        from.amount()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PriceInvalidity {
    NotPositive,
}

impl Validate for Price {
    type Invalidity = PriceInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                self.amount() <= Amount::ZERO,
                Self::Invalidity::NotPositive,
            )
            .into()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Omit insignificant trailing zeros, i.e. "45" instead of "45.00"
        fmt::Display::fmt(&self.amount().normalize(), f)
    }
}

/// Round an amount for display, with midpoints rounded away from zero.
#[must_use]
pub fn round_amount(amount: Amount, decimal_places: u32) -> Amount {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}
