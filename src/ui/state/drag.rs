// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for scrolling the thumbnail strip.

/// Manages grab-and-drag state along the horizontal axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer x where the drag started
    pub start_x: Option<f32>,

    /// Strip offset when the drag started
    pub start_offset: Option<f32>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, pointer_x: f32, offset: f32) {
        self.is_dragging = true;
        self.start_x = Some(pointer_x);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_x = None;
        self.start_offset = None;
    }

    /// Calculates the strip offset for the current pointer position.
    ///
    /// Moving the pointer right scrolls content left, amplified by
    /// `multiplier`. The result is not clamped.
    #[must_use]
    pub fn calculate_offset(&self, pointer_x: f32, multiplier: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }

        let start_x = self.start_x?;
        let start_offset = self.start_offset?;

        Some(start_offset - (pointer_x - start_x) * multiplier)
    }

    /// Distance the pointer has moved since the drag started.
    #[must_use]
    pub fn travel(&self, pointer_x: f32) -> Option<f32> {
        self.start_x.map(|start_x| (pointer_x - start_x).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_x.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn start_drag_sets_state() {
        let mut state = DragState::default();
        state.start(100.0, 20.0);

        assert!(state.is_dragging);
        assert_eq!(state.start_x, Some(100.0));
        assert_eq!(state.start_offset, Some(20.0));
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(100.0, 20.0);
        state.stop();

        assert!(!state.is_dragging);
        assert!(state.start_x.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_offset(100.0, 2.0).is_none());
    }

    #[test]
    fn calculate_offset_applies_multiplier() {
        let mut state = DragState::default();
        state.start(200.0, 300.0);

        // Pointer moved left by 20, so content moves right by 40.
        assert_eq!(state.calculate_offset(180.0, 2.0), Some(340.0));
        // Pointer moved right by 50 with a unit multiplier.
        assert_eq!(state.calculate_offset(250.0, 1.0), Some(250.0));
    }

    #[test]
    fn calculate_offset_can_go_negative() {
        let mut state = DragState::default();
        state.start(10.0, 0.0);
        assert_eq!(state.calculate_offset(30.0, 2.0), Some(-40.0));
    }

    #[test]
    fn travel_is_absolute_distance() {
        let mut state = DragState::default();
        assert!(state.travel(5.0).is_none());
        state.start(50.0, 0.0);
        assert_eq!(state.travel(47.0), Some(3.0));
        assert_eq!(state.travel(60.0), Some(10.0));
    }
}
