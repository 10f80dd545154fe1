// SPDX-License-Identifier: MPL-2.0
//! `showroom` is a used-car catalog browser built with the Iced GUI framework.
//!
//! It reads listings from a static JSON file and shows them on a home grid
//! and on detail pages built around an image carousel, with Fluent
//! localization and user preference management.

pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
