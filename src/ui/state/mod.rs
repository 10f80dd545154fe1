// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept out of widgets so it can be unit tested.

pub mod drag;

pub use drag::DragState;
