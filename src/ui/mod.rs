// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Featured and full listing grids
//! - [`detail`] - Car detail page around the image carousel
//! - [`not_found`] - Unknown car id
//!
//! # Shared Infrastructure
//!
//! - [`gallery`] - Image carousel with the draggable thumbnail strip
//! - [`card`] - Listing card
//! - [`picture`] - Cached picture or placeholder
//! - [`state`] - Reusable state management (drag)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar
//! - [`footer`] - Static page footer

pub mod card;
pub mod design_tokens;
pub mod detail;
pub mod footer;
pub mod gallery;
pub mod home;
pub mod navbar;
pub mod not_found;
pub mod picture;
pub mod state;
pub mod styles;
pub mod theming;
