// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use discro::{Publisher, Ref, Subscriber};
use serde::{Deserialize, Serialize};

use timetoeat_core::Course;

use crate::dashboard::PriceFormat;

pub mod tasklet;

pub const FILE_NAME: &str = "timetoeat_settings";

pub const FILE_SUFFIX: &str = "ron";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// Prefix of all displayed amounts.
    pub currency_symbol: String,

    /// Preselected course when entering a new dish.
    pub default_course: Course,

    /// Number of decimal places of rounded amounts, e.g. averages.
    pub price_decimal_places: u32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            default_course: Course::MainCourse,
            price_decimal_places: 0,
        }
    }
}

impl State {
    #[must_use]
    pub fn restore_from_parent_dir(parent_dir: &Path) -> Self {
        log::info!("Loading saved settings from: {}", parent_dir.display());
        Self::load(parent_dir)
            .map_err(|err| {
                log::warn!("Failed to load saved settings: {err}");
            })
            .unwrap_or_default()
    }

    pub fn load(parent_dir: &Path) -> anyhow::Result<State> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text).map_err(Into::into),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving current settings into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    pub async fn save_spawn_blocking(self, parent_dir: PathBuf) -> anyhow::Result<()> {
        match tokio::runtime::Handle::current()
            .spawn_blocking(move || self.save(&parent_dir))
            .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                anyhow::bail!("failed to save: {err}");
            }
            Err(err) => {
                anyhow::bail!("failed to join blocking task after saving: {err}");
            }
        }
    }

    #[must_use]
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(self.currency_symbol.clone(), self.price_decimal_places)
    }

    pub fn update_default_course(&mut self, new_default_course: Course) -> bool {
        if self.default_course == new_default_course {
            // No effect
            return false;
        }
        log::info!("Updating default course: {new_default_course}");
        self.default_course = new_default_course;
        true
    }

    pub fn update_currency_symbol(&mut self, new_currency_symbol: &str) -> bool {
        let new_currency_symbol = new_currency_symbol.trim();
        if self.currency_symbol == new_currency_symbol {
            // No effect
            return false;
        }
        log::info!("Updating currency symbol: {new_currency_symbol}");
        new_currency_symbol.clone_into(&mut self.currency_symbol);
        true
    }
}

#[must_use]
fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}

/// Manages the mutable, observable state
#[derive(Debug)]
pub struct ObservableState {
    state_pub: Publisher<State>,
}

impl ObservableState {
    #[must_use]
    pub fn new(initial_state: State) -> Self {
        let state_pub = Publisher::new(initial_state);
        Self { state_pub }
    }

    #[must_use]
    pub fn read(&self) -> Ref<'_, State> {
        self.state_pub.read()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscriber<State> {
        self.state_pub.subscribe()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn modify(&self, modify_state: impl FnOnce(&mut State) -> bool) -> bool {
        self.state_pub.modify(modify_state)
    }
}

impl Default for ObservableState {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

#[cfg(test)]
mod tests;
