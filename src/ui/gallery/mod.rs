// SPDX-License-Identifier: MPL-2.0
//! Image carousel for the car detail screen.
//!
//! - [`state`]: the widget-free state machine (index, drag, edge flags)
//! - [`animator`]: easing for smooth strip scrolls
//! - [`component`]: messages, effects, and the Iced view

pub mod animator;
pub mod component;
pub mod state;

pub use component::{Effect, Message, State, ViewContext};
pub use state::{
    centered_offset, Carousel, Direction, EdgeFlags, GallerySettings, StripMetrics, StripScroll,
    CLICK_SLOP,
};
