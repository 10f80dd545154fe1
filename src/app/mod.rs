// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home and detail
//! screens.
//!
//! The `App` struct owns the catalog, the picture cache, localization and
//! preferences, and translates component events into side effects such as
//! image fetches, config persistence or opening an external link.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::theming::ThemeMode;
use crate::ui::{detail, home};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Where the catalog stands.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(Error),
}

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit config directory; `None` resolves the usual way.
    config_dir: Option<PathBuf>,
    catalog: CatalogState,
    data_path: PathBuf,
    asset_dir: PathBuf,
    images: ImageCache,
    screen: Screen,
    home: home::State,
    detail: Option<detail::State>,
    /// Car requested before the catalog finished loading.
    pending_car: Option<String>,
    window_width: f32,
    theme_mode: ThemeMode,
    /// i18n key of the message shown in the dismissible banner.
    banner: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("data_path", &self.data_path)
            .field("images", &self.images.stats())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let data_path = config.data_path();
        let asset_dir = config.asset_dir(&data_path);
        Self {
            i18n: I18n::default(),
            images: ImageCache::new(config.image_cache_capacity()),
            config,
            config_dir: None,
            catalog: CatalogState::Loading,
            data_path,
            asset_dir,
            screen: Screen::Home,
            home: home::State::default(),
            detail: None,
            pending_car: None,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            theme_mode: ThemeMode::System,
            banner: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the catalog load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let data_path = flags
            .data_file
            .map(PathBuf::from)
            .unwrap_or_else(|| config.data_path());
        let asset_dir = config.asset_dir(&data_path);
        tracing::info!(
            data = %data_path.display(),
            assets = %asset_dir.display(),
            locale = %i18n.current_locale(),
            "starting"
        );

        let app = App {
            i18n,
            images: ImageCache::new(config.image_cache_capacity()),
            theme_mode: config.general.theme_mode,
            data_path,
            asset_dir,
            config,
            pending_car: flags.car,
            banner: config_warning,
            ..Self::default()
        };

        let task = update::load_catalog(app.data_path.clone());
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");
        match (&self.screen, &self.detail) {
            (Screen::CarDetail(_), Some(detail)) => {
                format!("{} | {app_name}", detail.car().heading())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(&self.screen);
        let detail_sub = subscription::create_detail_subscription(self.detail.as_ref());

        Subscription::batch([event_sub, detail_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: &self.config_dir,
            catalog: &mut self.catalog,
            data_path: &self.data_path,
            asset_dir: &self.asset_dir,
            images: &mut self.images,
            screen: &mut self.screen,
            home: &mut self.home,
            detail: &mut self.detail,
            pending_car: &mut self.pending_car,
            window_width: self.window_width,
            theme_mode: &mut self.theme_mode,
            banner: &mut self.banner,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Detail(detail_message) => update::handle_detail_message(&mut ctx, detail_message),
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::ImageLoaded { reference, result } => {
                update::handle_image_loaded(&mut ctx, reference, result)
            }
            Message::GoHome => update::go_home(&mut ctx),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::DismissBanner => {
                self.banner = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            catalog: &self.catalog,
            images: &self.images,
            home: &self.home,
            detail: self.detail.as_ref(),
            featured_limit: self.config.featured_limit(),
            listing_limit: self.config.listing_limit(),
            window_width: self.window_width,
            is_dark: self.theme_mode.is_dark(),
            banner: self.banner.as_deref(),
        })
    }
}
