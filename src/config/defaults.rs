// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Catalog**: How many cars the home sections show
//! - **Gallery**: Thumbnail strip geometry and scrolling behavior
//! - **Images**: Decoded image cache sizing

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Default data file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/data.json";

/// Number of featured cars shown on the home screen before "View all".
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Number of regular listings shown on the home screen before "View all".
pub const DEFAULT_LISTING_LIMIT: usize = 9;

/// Upper bound for either home section limit.
pub const MAX_SECTION_LIMIT: usize = 100;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Approximate thumbnail width including the gap, used for centering.
pub const DEFAULT_THUMBNAIL_WIDTH: f32 = 120.0;

/// Minimum thumbnail width accepted from the config file.
pub const MIN_THUMBNAIL_WIDTH: f32 = 40.0;

/// Maximum thumbnail width accepted from the config file.
pub const MAX_THUMBNAIL_WIDTH: f32 = 400.0;

/// Slack before the right edge counts as reached.
pub const DEFAULT_EDGE_TOLERANCE: f32 = 1.0;

/// Distance the strip moves per scroll-button press.
pub const DEFAULT_SCROLL_STEP: f32 = 200.0;

/// Multiplier turning pointer travel into strip travel while dragging.
pub const DEFAULT_DRAG_MULTIPLIER: f32 = 2.0;

/// Maximum drag multiplier accepted from the config file.
pub const MAX_DRAG_MULTIPLIER: f32 = 8.0;

/// Duration of a smooth strip scroll (milliseconds).
pub const DEFAULT_SCROLL_ANIMATION_MS: u64 = 250;

/// Maximum smooth scroll duration (milliseconds).
pub const MAX_SCROLL_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;

/// Minimum image cache capacity.
pub const MIN_IMAGE_CACHE_CAPACITY: usize = 8;

/// Maximum image cache capacity.
pub const MAX_IMAGE_CACHE_CAPACITY: usize = 512;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FEATURED_LIMIT > 0);
    assert!(DEFAULT_LISTING_LIMIT > 0);
    assert!(DEFAULT_FEATURED_LIMIT <= MAX_SECTION_LIMIT);
    assert!(DEFAULT_LISTING_LIMIT <= MAX_SECTION_LIMIT);

    assert!(MIN_THUMBNAIL_WIDTH > 0.0);
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_WIDTH);
    assert!(DEFAULT_EDGE_TOLERANCE >= 0.0);
    assert!(DEFAULT_SCROLL_STEP > 0.0);
    assert!(DEFAULT_DRAG_MULTIPLIER > 0.0);
    assert!(DEFAULT_DRAG_MULTIPLIER <= MAX_DRAG_MULTIPLIER);
    assert!(DEFAULT_SCROLL_ANIMATION_MS <= MAX_SCROLL_ANIMATION_MS);

    assert!(MIN_IMAGE_CACHE_CAPACITY > 0);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY >= MIN_IMAGE_CACHE_CAPACITY);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY <= MAX_IMAGE_CACHE_CAPACITY);
};
