// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable references into the
//! application state and return the follow-up [`Task`].

use super::{CatalogState, Message, Screen};
use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::contact;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache, ImageSource};
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::Task;
use std::path::{Path, PathBuf};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub catalog: &'a mut CatalogState,
    pub data_path: &'a Path,
    pub asset_dir: &'a Path,
    pub images: &'a mut ImageCache,
    pub screen: &'a mut Screen,
    pub home: &'a mut home::State,
    pub detail: &'a mut Option<detail::State>,
    pub pending_car: &'a mut Option<String>,
    pub window_width: f32,
    pub theme_mode: &'a mut ThemeMode,
    pub banner: &'a mut Option<String>,
}

/// Reads the data file in the background.
pub fn load_catalog(path: PathBuf) -> Task<Message> {
    tracing::debug!(path = %path.display(), "loading catalog");
    Task::perform(
        async move { Catalog::load(path).await },
        Message::CatalogLoaded,
    )
}

/// Starts a load for every reference not already cached or in flight.
///
/// References that cannot be resolved are marked failed right away.
pub fn request_images(
    images: &mut ImageCache,
    asset_dir: &Path,
    references: &[String],
) -> Task<Message> {
    let claimed = images.claim(references.iter().map(String::as_str));
    let mut tasks = Vec::with_capacity(claimed.len());

    for reference in claimed {
        match ImageSource::resolve(&reference, asset_dir) {
            Some(source) => tasks.push(Task::perform(
                media::load(source),
                move |result| Message::ImageLoaded { reference, result },
            )),
            None => images.mark_failed(&reference),
        }
    }

    Task::batch(tasks)
}

pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Catalog, Error>,
) -> Task<Message> {
    match result {
        Ok(catalog) => {
            tracing::info!(cars = catalog.len(), "catalog ready");
            *ctx.catalog = CatalogState::Ready(catalog);
            let covers = home_covers(ctx);
            let covers_task = request_images(ctx.images, ctx.asset_dir, &covers);

            match ctx.pending_car.take() {
                Some(id) => Task::batch([covers_task, open_car(ctx, id)]),
                None => covers_task,
            }
        }
        Err(err) => {
            tracing::warn!(path = %ctx.data_path.display(), error = %err, "catalog load failed");
            *ctx.catalog = CatalogState::Failed(err);
            if let Some(id) = ctx.pending_car.take() {
                *ctx.screen = Screen::NotFound(id);
            }
            Task::none()
        }
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    reference: String,
    result: Result<Handle, Error>,
) -> Task<Message> {
    if let Err(err) = &result {
        tracing::warn!(reference = %reference, error = %err, "image load failed");
    }
    ctx.images.finish(reference, result);
    Task::none()
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::GoHome => go_home(ctx),
        NavbarEvent::ToggleTheme => {
            let next = if ctx.theme_mode.is_dark() {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            *ctx.theme_mode = next;
            ctx.config.general.theme_mode = next;
            persist_config(ctx);
            Task::none()
        }
        NavbarEvent::CycleLanguage => {
            let locales = &ctx.i18n.available_locales;
            if locales.is_empty() {
                return Task::none();
            }
            let current = locales
                .iter()
                .position(|locale| locale == ctx.i18n.current_locale())
                .unwrap_or(0);
            let next = locales[(current + 1) % locales.len()].clone();
            tracing::debug!(locale = %next, "switching language");

            ctx.config.general.language = Some(next.to_string());
            ctx.i18n.set_locale(next);
            persist_config(ctx);
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match ctx.home.update(message) {
        HomeEvent::None => Task::none(),
        HomeEvent::OpenCar(id) => open_car(ctx, id),
        HomeEvent::Expanded => {
            let covers = home_covers(ctx);
            request_images(ctx.images, ctx.asset_dir, &covers)
        }
        HomeEvent::Retry => {
            *ctx.catalog = CatalogState::Loading;
            load_catalog(ctx.data_path.to_path_buf())
        }
    }
}

pub fn handle_detail_message(ctx: &mut UpdateContext<'_>, message: detail::Message) -> Task<Message> {
    let Some(state) = ctx.detail.as_mut() else {
        return Task::none();
    };

    let (event, task) = state.handle(message);
    let task = task.map(Message::Detail);

    match event {
        DetailEvent::None => task,
        DetailEvent::Back => Task::batch([task, go_home(ctx)]),
        DetailEvent::OpenLink(url) => {
            if let Err(err) = contact::open_link(&url) {
                *ctx.banner = Some(err.i18n_key().to_string());
            }
            task
        }
        DetailEvent::ImageShown(reference) => Task::batch([
            task,
            request_images(ctx.images, ctx.asset_dir, &[reference]),
        ]),
    }
}

/// Routes to the detail screen for `id`, or to Not found.
///
/// While the catalog is still loading the request is parked and replayed
/// once it arrives.
pub fn open_car(ctx: &mut UpdateContext<'_>, id: String) -> Task<Message> {
    let car = match &*ctx.catalog {
        CatalogState::Loading => {
            *ctx.pending_car = Some(id);
            return Task::none();
        }
        CatalogState::Failed(_) => None,
        CatalogState::Ready(catalog) => catalog.find(&id).cloned(),
    };

    match car {
        Some(car) => {
            tracing::debug!(car = %id, pictures = car.pictures.len(), "opening car");
            let task = request_images(ctx.images, ctx.asset_dir, &car.pictures);
            *ctx.detail = Some(detail::State::new(
                car,
                ctx.config.gallery_settings(),
                ctx.window_width,
            ));
            *ctx.screen = Screen::CarDetail(id);
            task
        }
        None => {
            tracing::debug!(car = %id, "car not found");
            *ctx.detail = None;
            *ctx.screen = Screen::NotFound(id);
            Task::none()
        }
    }
}

/// Returns to the home screen and reloads any covers evicted meanwhile.
pub fn go_home(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.screen = Screen::Home;
    *ctx.detail = None;
    let covers = home_covers(ctx);
    request_images(ctx.images, ctx.asset_dir, &covers)
}

fn home_covers(ctx: &UpdateContext<'_>) -> Vec<String> {
    match &*ctx.catalog {
        CatalogState::Ready(catalog) => ctx.home.visible_covers(
            catalog,
            ctx.config.featured_limit(),
            ctx.config.listing_limit(),
        ),
        _ => Vec::new(),
    }
}

fn persist_config(ctx: &mut UpdateContext<'_>) {
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        tracing::warn!(error = %err, "failed to save config");
        *ctx.banner = Some("notification-config-save-error".to_string());
    }
}
