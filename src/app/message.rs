// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::ui::{detail, home, navbar};
use iced::widget::image::Handle;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Detail(detail::Message),
    /// Result of the startup (or retried) catalog read.
    CatalogLoaded(Result<Catalog, Error>),
    /// A picture finished loading, successfully or not.
    ImageLoaded {
        reference: String,
        result: Result<Handle, Error>,
    },
    GoHome,
    WindowResized(Size),
    DismissBanner,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ar`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWROOM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Data file to read instead of the configured one.
    pub data_file: Option<String>,
    /// Car to open once the catalog is loaded.
    pub car: Option<String>,
}
