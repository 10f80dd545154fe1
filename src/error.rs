// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors travel back to the UI inside `Message` payloads, which must be
//! `Clone`, so every variant stores a rendered string instead of the source
//! error.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("JSON Error: {0}")]
    Json(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("HTTP Error: {0}")]
    Http(String),

    #[error("Image Error: {0}")]
    Image(String),

    /// The platform opener for an external link could not be started.
    #[error("Launch Error: {0}")]
    Launch(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Json(_) => "error-catalog-invalid",
            Error::Config(_) => "error-config",
            Error::Http(_) => "error-http",
            Error::Image(_) => "error-image",
            Error::Launch(_) => "error-open-link",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
