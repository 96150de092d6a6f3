// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use discro::Subscriber;

use timetoeat_store::Snapshot;

/// Listen for new snapshots of the menu.
///
/// The `on_changed` callback closure is invoked once with the current
/// snapshot and then for every new snapshot. It must return `true` to
/// continue listening and `false` to abort listening.
pub fn on_snapshot_changed(
    mut snapshot_sub: Subscriber<Snapshot>,
    mut on_changed: impl FnMut(&Snapshot) -> bool + Send + 'static,
) -> impl Future<Output = ()> + Send + 'static {
    // Read the initial value immediately before spawning the async task
    let mut snapshot = Snapshot::clone(&snapshot_sub.read_ack());
    async move {
        log::debug!("Starting on_snapshot_changed");
        loop {
            if !on_changed(&snapshot) {
                // Consumer has rejected the notification
                log::debug!("Aborting on_snapshot_changed");
                return;
            }
            loop {
                if snapshot_sub.changed().await.is_err() {
                    // Publisher has disappeared
                    log::debug!("Stopping on_snapshot_changed");
                    return;
                }
                let new_snapshot = Snapshot::clone(&snapshot_sub.read_ack());
                if !new_snapshot.is_same(&snapshot) {
                    snapshot = new_snapshot;
                    break;
                }
            }
        }
    }
}
