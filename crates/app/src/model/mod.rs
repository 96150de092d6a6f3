// SPDX-FileCopyrightText: Copyright (C) 2025-2026 TimeToEat contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use timetoeat_store::Snapshot;

use crate::{
    ActionEffect,
    action::{Action, DeleteAction, FormAction},
    dashboard::{Dashboard, DishListItem, PriceFormat},
    filter::{CourseFilter, FilterPill, filter_pills},
    form::DishForm,
    menu::{DeletionRequest, MenuState},
    notice::Notice,
    settings,
};

/// State of a single front end.
#[derive(Debug)]
pub struct Model {
    menu: MenuState,
    form: DishForm,
    filter: CourseFilter,
    pending_deletion: Option<DeletionRequest>,
    notice: Option<Notice>,
    price_format: PriceFormat,
}

impl Model {
    #[must_use]
    pub fn new(menu: MenuState, settings: &settings::State) -> Self {
        Self {
            menu,
            form: DishForm::new(settings.default_course),
            filter: CourseFilter::default(),
            pending_deletion: None,
            notice: None,
            price_format: settings.price_format(),
        }
    }

    #[must_use]
    pub const fn menu(&self) -> &MenuState {
        &self.menu
    }

    #[must_use]
    pub const fn form(&self) -> &DishForm {
        &self.form
    }

    #[must_use]
    pub const fn filter(&self) -> CourseFilter {
        self.filter
    }

    #[must_use]
    pub const fn pending_deletion(&self) -> Option<&DeletionRequest> {
        self.pending_deletion.as_ref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Adopt changed settings.
    pub fn apply_settings(&mut self, settings: &settings::State) -> ActionEffect {
        let price_format = settings.price_format();
        let mut effect = ActionEffect::Unchanged;
        if self.price_format != price_format {
            self.price_format = price_format;
            effect += ActionEffect::Changed;
        }
        if self.form.default_course() != settings.default_course {
            self.form.set_default_course(settings.default_course);
            effect += ActionEffect::MaybeChanged;
        }
        effect
    }

    /// Consume the current notice after it has been displayed.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    #[must_use]
    pub fn visible_dishes(&self) -> Snapshot {
        self.filter.apply(self.menu.store())
    }

    #[must_use]
    pub fn visible_items(&self) -> Vec<DishListItem<'_>> {
        self.menu
            .store()
            .records()
            .iter()
            .filter(|record| self.filter.matches(record))
            .map(|record| DishListItem::new(record, &self.price_format))
            .collect()
    }

    #[must_use]
    pub fn filter_pills(&self) -> Vec<FilterPill> {
        filter_pills(&self.menu.summary().course_counts, self.filter)
    }

    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(&self.menu.store().all(), &self.price_format)
    }

    pub fn on_action(&mut self, action: Action) -> ActionEffect {
        log::debug!("Received action {action:?}");
        match action {
            Action::Form(action) => self.on_form_action(action),
            Action::Filter(filter) => {
                if self.filter == filter {
                    return ActionEffect::Unchanged;
                }
                self.filter = filter;
                ActionEffect::Changed
            }
            Action::Delete(action) => self.on_delete_action(action),
        }
    }

    fn on_form_action(&mut self, action: FormAction) -> ActionEffect {
        let form = &mut self.form;
        match action {
            FormAction::SetName(name) => update_field(&mut form.name, name),
            FormAction::SetDescription(description) => {
                update_field(&mut form.description, description)
            }
            FormAction::SetPrice(price) => update_field(&mut form.price, price),
            FormAction::SetCourse(course) => {
                if form.course == course {
                    return ActionEffect::Unchanged;
                }
                form.course = course;
                ActionEffect::Changed
            }
            FormAction::ImagePicked(result) => {
                let image_before = form.image.clone();
                let notice = form.apply_picked_image(result);
                let mut effect = ActionEffect::from_changed(form.image != image_before);
                effect += self.replace_notice(notice);
                effect
            }
            FormAction::ClearImage => ActionEffect::from_changed(form.clear_image()),
            FormAction::Submit => {
                let notice = match form.submit(&mut self.menu) {
                    Ok(record) => {
                        log::info!("Added dish {name}", name = record.body.name);
                        Notice::dish_added()
                    }
                    Err(err) => {
                        log::info!("Rejected dish: {err}");
                        err.into()
                    }
                };
                self.notice = Some(notice);
                ActionEffect::Changed
            }
        }
    }

    fn on_delete_action(&mut self, action: DeleteAction) -> ActionEffect {
        match action {
            DeleteAction::Request(uid) => {
                let Some(request) = self.menu.request_deletion(&uid) else {
                    log::warn!("Cannot delete unknown dish {uid}");
                    return ActionEffect::Unchanged;
                };
                self.pending_deletion = Some(request);
                ActionEffect::Changed
            }
            DeleteAction::Confirm => {
                let Some(request) = self.pending_deletion.take() else {
                    return ActionEffect::Unchanged;
                };
                if let Some(removed) = self.menu.confirm_deletion(request) {
                    log::info!("Deleted dish {name}", name = removed.body.name);
                }
                ActionEffect::Changed
            }
            DeleteAction::Cancel => {
                ActionEffect::from_changed(self.pending_deletion.take().is_some())
            }
        }
    }

    fn replace_notice(&mut self, notice: Option<Notice>) -> ActionEffect {
        let Some(notice) = notice else {
            return ActionEffect::Unchanged;
        };
        self.notice = Some(notice);
        ActionEffect::Changed
    }
}

fn update_field(field: &mut String, value: String) -> ActionEffect {
    if *field == value {
        return ActionEffect::Unchanged;
    }
    *field = value;
    ActionEffect::Changed
}
