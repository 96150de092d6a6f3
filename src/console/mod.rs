// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{Context as _, anyhow, bail};

use timetoeat::{
    Course, DishImage, DishUid, ResourceLocator,
    app::{
        Model,
        action::{Action, DeleteAction, FormAction},
        filter::CourseFilter,
        image::{ImagePicker, PickImageError, PickImageResult},
        menu::DeletionRequest,
        notice::{Notice, Severity},
    },
    store::NewDish,
};

pub(crate) const HELP: &str = "\
Commands:
  list                      List the dishes of the selected course
  filter all|starter|main|dessert
                            Select a course
  stats                     Show the dashboard
  form                      Show the new dish
  name <text>               Enter the name of the new dish
  description <text>        Enter the description of the new dish
  price <amount>            Enter the price of the new dish
  course starter|main|dessert
                            Select the course of the new dish
  image <path>              Attach an image file to the new dish
  noimage                   Remove the image of the new dish
  submit                    Add the new dish to the menu
  delete <number>           Delete a listed dish
  yes | no                  Confirm or cancel a deletion
  currency <symbol>         Change the currency symbol
  default starter|main|dessert
                            Change the preselected course
  help                      Show this help
  quit                      Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Quit,
    List,
    Stats,
    ShowForm,
    PickImage(String),
    /// 1-based position in the list of visible dishes
    Delete(usize),
    Currency(String),
    DefaultCourse(Course),
    Action(Action),
}

impl From<FormAction> for Command {
    fn from(action: FormAction) -> Self {
        Self::Action(action.into())
    }
}

fn parse_course(arg: &str) -> anyhow::Result<Course> {
    let course = match arg.to_lowercase().as_str() {
        "starter" | "starters" => Course::Starter,
        "main" | "main course" | "mains" => Course::MainCourse,
        "dessert" | "desserts" => Course::Dessert,
        _ => bail!("unknown course \"{arg}\""),
    };
    Ok(course)
}

fn parse_filter(arg: &str) -> anyhow::Result<CourseFilter> {
    if arg.eq_ignore_ascii_case("all") {
        return Ok(CourseFilter::All);
    }
    parse_course(arg).map(CourseFilter::Course)
}

/// Returns `None` for blank lines.
pub(crate) fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (keyword, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(keyword, arg)| (keyword, arg.trim()));
    let command = match keyword.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "list" | "ls" => Command::List,
        "stats" => Command::Stats,
        "form" => Command::ShowForm,
        "filter" => Command::Action(parse_filter(arg)?.into()),
        // Field contents are submitted verbatim
        "name" => FormAction::SetName(arg.to_owned()).into(),
        "description" => FormAction::SetDescription(arg.to_owned()).into(),
        "price" => FormAction::SetPrice(arg.to_owned()).into(),
        "course" => FormAction::SetCourse(parse_course(arg)?).into(),
        "image" => Command::PickImage(arg.to_owned()),
        "noimage" => FormAction::ClearImage.into(),
        "submit" | "add" => FormAction::Submit.into(),
        "delete" | "rm" => {
            let position = arg
                .parse::<usize>()
                .ok()
                .filter(|position| *position > 0)
                .ok_or_else(|| anyhow!("invalid number \"{arg}\""))?;
            Command::Delete(position)
        }
        "yes" | "y" => Command::Action(DeleteAction::Confirm.into()),
        "no" | "n" => Command::Action(DeleteAction::Cancel.into()),
        "currency" => {
            if arg.is_empty() {
                bail!("missing currency symbol");
            }
            Command::Currency(arg.to_owned())
        }
        "default" => Command::DefaultCourse(parse_course(arg)?),
        _ => bail!("unknown command \"{keyword}\""),
    };
    Ok(Some(command))
}

/// Resolve a 1-based position in the listed dishes.
pub(crate) fn visible_dish_uid(model: &Model, position: usize) -> Option<DishUid> {
    let index = position.checked_sub(1)?;
    model
        .visible_dishes()
        .records()
        .get(index)
        .map(|record| record.uid)
}

/// Selects image files from the local file system.
#[derive(Debug)]
pub(crate) struct FileImagePicker {
    path: PathBuf,
}

impl FileImagePicker {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImagePicker for FileImagePicker {
    async fn request_image(&self) -> PickImageResult {
        if self.path.as_os_str().is_empty() {
            // Nothing selected
            return Ok(None);
        }
        let path = self.path.clone();
        let canonical_path = tokio::task::spawn_blocking(move || {
            std::fs::canonicalize(&path)
                .with_context(|| format!("canonicalize {path}", path = path.display()))
        })
        .await
        .map_err(|err| {
            log::warn!("Failed to join blocking task: {err}");
            PickImageError::PickerFailed
        })?
        .map_err(|err| {
            log::warn!("{err:#}");
            match err.downcast_ref::<std::io::Error>().map(std::io::Error::kind) {
                Some(std::io::ErrorKind::PermissionDenied) => PickImageError::PermissionDenied,
                _ => PickImageError::PickerFailed,
            }
        })?;
        let locator = format!("file://{path}", path = canonical_path.display());
        Ok(ResourceLocator::clamp_from(locator))
    }
}

/// A dish for a quick start with `--demo`.
fn demo_dish(name: &str, description: &str, price: &str, course: Course) -> NewDish {
    NewDish {
        name: name.to_owned(),
        description: description.to_owned(),
        price: price.to_owned(),
        course,
        image: DishImage::Missing,
    }
}

pub(crate) fn demo_dishes() -> Vec<NewDish> {
    vec![
        demo_dish(
            "Tomato Soup",
            "Roasted tomatoes with basil",
            "45",
            Course::Starter,
        ),
        demo_dish(
            "Grilled Steak",
            "Sirloin with pepper sauce and chips",
            "189.90",
            Course::MainCourse,
        ),
        demo_dish(
            "Chicken Curry",
            "Mild curry with basmati rice",
            "125",
            Course::MainCourse,
        ),
        demo_dish(
            "Malva Pudding",
            "Warm sponge pudding with custard",
            "65",
            Course::Dessert,
        ),
    ]
}

pub(crate) fn print_list(model: &Model) {
    let items = model.visible_items();
    if items.is_empty() {
        println!("{hint}", hint = model.filter().empty_hint());
        return;
    }
    for (index, item) in items.iter().enumerate() {
        let image = if item.image.is_missing() { "" } else { " [image]" };
        println!(
            "{position:>3}. {name} ({course}) {price}{image}",
            position = index + 1,
            name = item.name,
            course = item.course.short_label(),
            price = item.price,
        );
        println!("     {description}", description = item.description);
    }
}

pub(crate) fn print_filter_pills(model: &Model) {
    let pills = model
        .filter_pills()
        .iter()
        .map(|pill| {
            if pill.selected {
                format!("[{label}]", label = pill.label())
            } else {
                pill.label()
            }
        })
        .collect::<Vec<_>>();
    println!("{pills}", pills = pills.join("  "));
}

pub(crate) fn print_dashboard(model: &Model) {
    let dashboard = model.dashboard();
    println!("Total items:     {}", dashboard.total_items);
    println!("Average price:   {}", dashboard.average_price);
    println!("Most popular:    {}", dashboard.most_popular_course);
    for course in &dashboard.courses {
        println!(
            "  {label:<14} {count:>3} item(s), total {total}, average {average}",
            label = course.label,
            count = course.count,
            total = course.total_value,
            average = course.average_price,
        );
    }
}

pub(crate) fn print_form(model: &Model) {
    let form = model.form();
    println!("Name:        {}", form.name);
    println!("Description: {}", form.description);
    println!("Price:       {}", form.price);
    println!("Course:      {}", form.course);
    let image = match &form.image {
        DishImage::Missing => "none".to_owned(),
        DishImage::Bundled(id) => id.to_string(),
        DishImage::External(locator) => locator.to_string(),
    };
    println!("Image:       {image}");
}

pub(crate) fn print_deletion_prompt(request: &DeletionRequest) {
    let prompt = request.prompt();
    println!("{title}: {message}", title = prompt.title, message = prompt.message);
    println!(
        "Type \"yes\" to {confirm} or \"no\" to {cancel}.",
        confirm = prompt.confirm_label.to_lowercase(),
        cancel = prompt.cancel_label.to_lowercase(),
    );
}

pub(crate) fn print_notice(notice: &Notice) {
    let Notice {
        severity,
        title,
        message,
    } = notice;
    match severity {
        Severity::Success | Severity::Info => println!("{title}: {message}"),
        Severity::Error => eprintln!("{title}: {message}"),
    }
}
