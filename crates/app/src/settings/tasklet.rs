// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{future::Future, path::PathBuf};

use discro::Subscriber;

use super::State;

/// Save the settings after they have changed.
///
/// The settings at the time of invocation are supposed to be saved
/// already and are not saved again.
pub fn on_state_changed_save_to_file(
    mut subscriber: Subscriber<State>,
    settings_dir: PathBuf,
    mut report_error: impl FnMut(anyhow::Error) + Send + 'static,
) -> impl Future<Output = ()> + Send + 'static {
    // Acknowledge the initial settings before spawning the task. Otherwise
    // changes that occur while spawning would slip through unnoticed.
    let mut old_settings = subscriber.read_ack().clone();
    async move {
        log::debug!("Starting on_state_changed_save_to_file");
        loop {
            if subscriber.changed().await.is_err() {
                // Publisher has disappeared
                log::debug!("Stopping on_state_changed_save_to_file");
                break;
            }
            {
                let new_settings = subscriber.read_ack();
                if old_settings == *new_settings {
                    continue;
                }
                old_settings = new_settings.clone();
            }
            log::info!("Saving changed settings: {old_settings:?}");
            if let Err(err) = old_settings
                .clone()
                .save_spawn_blocking(settings_dir.clone())
                .await
            {
                report_error(err);
            }
        }
    }
}
