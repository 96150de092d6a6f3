// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt as _, BufReader};

use timetoeat::{
    app::{
        ActionEffect, Model,
        action::{Action, DeleteAction, FormAction},
        image::ImagePicker as _,
        menu::{MenuState, tasklet::on_snapshot_changed},
        settings::{self, ObservableState, tasklet::on_state_changed_save_to_file},
    },
    prelude::IsValid as _,
    store::Store,
};

mod console;
use self::console::{Command, FileImagePicker};

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let config_dir = app_config_dir();
    let initial_settings = config_dir.as_deref().map_or_else(
        || {
            log::warn!("Config directory is unavailable");
            settings::State::default()
        },
        settings::State::restore_from_parent_dir,
    );
    let settings_state = ObservableState::new(initial_settings);
    if let Some(config_dir) = config_dir {
        tokio::spawn(on_state_changed_save_to_file(
            settings_state.subscribe(),
            config_dir,
            |err| log::error!("Failed to save settings: {err}"),
        ));
    }

    let store = if std::env::args().skip(1).any(|arg| arg == "--demo") {
        Store::with_dishes(console::demo_dishes())?
    } else {
        Store::new()
    };
    debug_assert!(store.records().iter().all(|record| record.is_valid()));
    let menu = MenuState::new(store);
    tokio::spawn(on_snapshot_changed(menu.subscribe_changed(), |snapshot| {
        log::debug!("Menu contains {count} dish(es)", count = snapshot.len());
        true
    }));
    let mut model = Model::new(menu, &settings_state.read());

    println!("{app_name}: type \"help\" for a list of commands", app_name = app_name());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match console::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        if !on_command(&mut model, &settings_state, command).await {
            break;
        }
    }
    Ok(())
}

/// Returns `false` when done.
async fn on_command(model: &mut Model, settings_state: &ObservableState, command: Command) -> bool {
    match command {
        Command::Help => println!("{help}", help = console::HELP),
        Command::Quit => return false,
        Command::List => {
            console::print_filter_pills(model);
            console::print_list(model);
        }
        Command::Stats => console::print_dashboard(model),
        Command::ShowForm => console::print_form(model),
        Command::PickImage(path) => {
            // Await the selection before dispatching the outcome
            let result = FileImagePicker::new(path).request_image().await;
            on_action(model, FormAction::ImagePicked(result).into());
        }
        Command::Delete(position) => {
            let Some(uid) = console::visible_dish_uid(model, position) else {
                eprintln!("No dish with number {position}");
                return true;
            };
            on_action(model, DeleteAction::Request(uid).into());
        }
        Command::Currency(symbol) => {
            settings_state.modify(|state| state.update_currency_symbol(&symbol));
            model.apply_settings(&settings_state.read());
        }
        Command::DefaultCourse(course) => {
            settings_state.modify(|state| state.update_default_course(course));
            model.apply_settings(&settings_state.read());
        }
        Command::Action(action) => on_action(model, action),
    }
    true
}

fn on_action(model: &mut Model, action: Action) {
    let effect = model.on_action(action);
    if let Some(notice) = model.take_notice() {
        console::print_notice(&notice);
    }
    if matches!(effect, ActionEffect::Unchanged) {
        return;
    }
    if let Some(request) = model.pending_deletion() {
        console::print_deletion_prompt(request);
    }
}

#[must_use]
const fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

#[must_use]
fn app_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", app_name())
}

fn init_app_dir(app_dir: &Path) {
    if let Err(err) = std::fs::create_dir_all(app_dir) {
        log::error!(
            "Failed to create app directory '{dir}': {err}",
            dir = app_dir.display(),
        );
    }
}

#[must_use]
fn app_config_dir() -> Option<PathBuf> {
    let app_dirs = app_dirs()?;
    let config_dir = app_dirs.config_local_dir();
    init_app_dir(config_dir);
    Some(config_dir.to_path_buf())
}
