// SPDX-License-Identifier: MPL-2.0
//! Picture loading for listing cards and the carousel.
//!
//! References from the data file are resolved to an [`ImageSource`], fetched
//! in the background with [`load`], and kept in an [`ImageCache`].

pub mod cache;
pub mod loader;
pub mod source;

pub use cache::{CacheStats, ImageCache, ImageStatus};
pub use loader::load;
pub use source::ImageSource;
