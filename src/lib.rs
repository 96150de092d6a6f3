// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Menu management for restaurants.
//!
//! Dishes are recorded with a name, description, course, price and an
//! optional image. The menu can be browsed by course and summarized
//! with aggregate statistics.

pub use timetoeat_core::*;

pub mod store {
    pub use timetoeat_store::*;
}

pub mod app {
    pub use timetoeat_app::*;
}
