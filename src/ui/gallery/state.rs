// SPDX-License-Identifier: MPL-2.0
//! Carousel state machine.
//!
//! Pure state: a cursor over a fixed image sequence, the thumbnail strip's
//! drag state, scroll metrics, and edge flags. Operations that should move
//! the strip return a [`StripScroll`] instead of touching widgets, so
//! everything here runs without a window.

use crate::config::{
    DEFAULT_DRAG_MULTIPLIER, DEFAULT_EDGE_TOLERANCE, DEFAULT_SCROLL_ANIMATION_MS,
    DEFAULT_SCROLL_STEP, DEFAULT_THUMBNAIL_WIDTH,
};
use crate::ui::state::DragState;
use std::time::Duration;

/// Pointer travel below which a press-release on a thumbnail is a click.
pub const CLICK_SLOP: f32 = 4.0;

/// Strip geometry and scrolling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySettings {
    /// Thumbnail width including the gap.
    pub thumbnail_width: f32,
    pub edge_tolerance: f32,
    pub scroll_step: f32,
    pub drag_multiplier: f32,
    pub scroll_animation: Duration,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            scroll_step: DEFAULT_SCROLL_STEP,
            drag_multiplier: DEFAULT_DRAG_MULTIPLIER,
            scroll_animation: Duration::from_millis(DEFAULT_SCROLL_ANIMATION_MS),
        }
    }
}

/// Last known geometry of the thumbnail viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StripMetrics {
    pub offset: f32,
    pub content_width: f32,
    pub visible_width: f32,
}

impl StripMetrics {
    /// Guesses the geometry before the viewport has reported anything.
    #[must_use]
    pub fn estimate(image_count: usize, thumbnail_width: f32, visible_width: f32) -> Self {
        Self {
            offset: 0.0,
            content_width: image_count as f32 * thumbnail_width,
            visible_width: visible_width.max(0.0),
        }
    }

    /// Largest offset the strip can scroll to.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.visible_width).max(0.0)
    }

    /// Clamps `offset` into the scrollable range.
    #[must_use]
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }
}

/// Whether the strip has hidden thumbnails on either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeFlags {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl EdgeFlags {
    #[must_use]
    pub fn from_metrics(metrics: &StripMetrics, tolerance: f32) -> Self {
        Self {
            can_scroll_left: metrics.offset > 0.0,
            can_scroll_right: metrics.offset
                < metrics.content_width - metrics.visible_width - tolerance,
        }
    }
}

/// Direction for the strip's scroll buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A request to move the thumbnail strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripScroll {
    pub offset: f32,
    pub smooth: bool,
}

/// Strip offset that centers thumbnail `index`, never below zero.
#[must_use]
pub fn centered_offset(index: usize, thumbnail_width: f32, visible_width: f32) -> f32 {
    (index as f32 * thumbnail_width - visible_width / 2.0 + thumbnail_width / 2.0).max(0.0)
}

/// Image carousel over a fixed sequence of picture references.
#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<String>,
    title: String,
    index: usize,
    drag: DragState,
    metrics: StripMetrics,
    edges: EdgeFlags,
    settings: GallerySettings,
}

impl Carousel {
    pub fn new(images: Vec<String>, title: impl Into<String>, settings: GallerySettings) -> Self {
        Self {
            images,
            title: title.into(),
            index: 0,
            drag: DragState::default(),
            metrics: StripMetrics::default(),
            edges: EdgeFlags::default(),
            settings,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Whether previous/next controls do anything.
    pub fn can_navigate(&self) -> bool {
        self.images.len() > 1
    }

    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    pub fn metrics(&self) -> StripMetrics {
        self.metrics
    }

    pub fn edge_flags(&self) -> EdgeFlags {
        self.edges
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// `"{index + 1} / {length}"`, or `"0 / 0"` with no images.
    pub fn counter_label(&self) -> String {
        if self.images.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, self.images.len())
        }
    }

    /// Moves to the next image, wrapping to the first.
    pub fn next(&mut self) -> Option<StripScroll> {
        if !self.can_navigate() {
            return None;
        }
        self.set_index((self.index + 1) % self.images.len())
    }

    /// Moves to the previous image, wrapping to the last.
    pub fn previous(&mut self) -> Option<StripScroll> {
        if !self.can_navigate() {
            return None;
        }
        let len = self.images.len();
        self.set_index((self.index + len - 1) % len)
    }

    /// Jumps to image `index`.
    ///
    /// An out-of-range index is a caller bug: it panics in debug builds and
    /// is ignored otherwise.
    pub fn select_index(&mut self, index: usize) -> Option<StripScroll> {
        debug_assert!(
            index < self.images.len(),
            "image index {index} out of range for {} images",
            self.images.len()
        );
        if index >= self.images.len() {
            tracing::warn!(index, len = self.images.len(), "ignoring out-of-range image index");
            return None;
        }
        self.set_index(index)
    }

    fn set_index(&mut self, index: usize) -> Option<StripScroll> {
        if index == self.index {
            return None;
        }
        tracing::debug!(from = self.index, to = index, "carousel index changed");
        self.index = index;
        Some(StripScroll {
            offset: self.centered_offset(),
            smooth: true,
        })
    }

    /// Strip offset that centers the active thumbnail.
    pub fn centered_offset(&self) -> f32 {
        centered_offset(
            self.index,
            self.settings.thumbnail_width,
            self.metrics.visible_width,
        )
    }

    /// Enters the dragging state at `pointer_x`, anchored to the current offset.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        if self.images.is_empty() {
            return;
        }
        self.drag.start(pointer_x, self.metrics.offset);
    }

    /// Strip offset for `pointer_x` while dragging; `None` when idle.
    ///
    /// Depends only on the drag start, so intermediate moves do not
    /// accumulate error.
    pub fn continue_drag(&mut self, pointer_x: f32) -> Option<f32> {
        self.drag
            .calculate_offset(pointer_x, self.settings.drag_multiplier)
    }

    /// Leaves the dragging state. Safe to call when idle.
    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    /// Pointer travel since the drag started, if dragging.
    pub fn drag_travel(&self, pointer_x: f32) -> Option<f32> {
        if self.drag.is_dragging {
            self.drag.travel(pointer_x)
        } else {
            None
        }
    }

    /// One scroll-button step in `direction` from the current offset.
    pub fn scroll_thumbnails(&self, direction: Direction) -> StripScroll {
        let step = match direction {
            Direction::Left => -self.settings.scroll_step,
            Direction::Right => self.settings.scroll_step,
        };
        StripScroll {
            offset: self.metrics.clamp(self.metrics.offset + step),
            smooth: true,
        }
    }

    /// Stores fresh viewport geometry and recomputes the edge flags.
    pub fn recompute_edge_flags(&mut self, metrics: StripMetrics) -> EdgeFlags {
        self.metrics = metrics;
        self.edges = EdgeFlags::from_metrics(&metrics, self.settings.edge_tolerance);
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(count: usize) -> Carousel {
        let images = (0..count).map(|i| format!("/images/{i}.jpg")).collect();
        Carousel::new(images, "Toyota Camry 2019", GallerySettings::default())
    }

    fn metrics(offset: f32, content_width: f32, visible_width: f32) -> StripMetrics {
        StripMetrics {
            offset,
            content_width,
            visible_width,
        }
    }

    #[test]
    fn next_wraps_to_start() {
        for n in 2..7 {
            let mut c = carousel(n);
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.current_index(), 0, "n = {n}");
        }
    }

    #[test]
    fn previous_inverts_next() {
        let mut c = carousel(4);
        for start in 0..4 {
            c.select_index(start);
            c.next();
            c.previous();
            assert_eq!(c.current_index(), start);
            c.previous();
            c.next();
            assert_eq!(c.current_index(), start);
        }
    }

    #[test]
    fn short_sequences_never_move() {
        for n in 0..=1 {
            let mut c = carousel(n);
            assert!(c.next().is_none());
            assert!(c.previous().is_none());
            assert_eq!(c.current_index(), 0);
        }
    }

    #[test]
    fn select_index_updates_counter() {
        let mut c = carousel(6);
        c.select_index(4);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.counter_label(), "5 / 6");
    }

    #[test]
    fn five_images_three_nexts() {
        let mut c = carousel(5);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.counter_label(), "4 / 5");
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = carousel(3);
        c.previous();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.counter_label(), "3 / 3");
    }

    #[test]
    fn empty_counter() {
        assert_eq!(carousel(0).counter_label(), "0 / 0");
        assert!(carousel(0).current_image().is_none());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn out_of_range_select_is_ignored_in_release() {
        let mut c = carousel(3);
        c.select_index(1);
        assert!(c.select_index(3).is_none());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_select_asserts_in_debug() {
        let mut c = carousel(3);
        c.select_index(3);
    }

    #[test]
    fn drag_offset_depends_only_on_endpoints() {
        let mut c = carousel(10);
        c.recompute_edge_flags(metrics(300.0, 1200.0, 500.0));
        c.begin_drag(100.0);

        let direct = {
            let mut d = c.clone();
            d.continue_drag(60.0)
        };
        c.continue_drag(140.0);
        c.continue_drag(20.0);
        let via_moves = c.continue_drag(60.0);

        assert_eq!(direct, Some(300.0 - (60.0 - 100.0) * 2.0));
        assert_eq!(via_moves, direct);
    }

    #[test]
    fn end_drag_disables_continue_until_next_begin() {
        let mut c = carousel(10);
        c.begin_drag(50.0);
        c.end_drag();
        assert!(c.continue_drag(80.0).is_none());
        c.end_drag();
        assert!(!c.is_dragging());

        c.begin_drag(80.0);
        assert_eq!(c.continue_drag(70.0), Some(20.0));
    }

    #[test]
    fn drag_multiplier_comes_from_settings() {
        let settings = GallerySettings {
            drag_multiplier: 3.0,
            ..GallerySettings::default()
        };
        let mut c = Carousel::new(vec!["a".into(), "b".into()], "t", settings);
        c.begin_drag(10.0);
        assert_eq!(c.continue_drag(0.0), Some(30.0));
    }

    #[test]
    fn empty_carousel_does_not_drag() {
        let mut c = carousel(0);
        c.begin_drag(10.0);
        assert!(!c.is_dragging());
    }

    #[test]
    fn drag_travel_measures_from_start() {
        let mut c = carousel(3);
        assert!(c.drag_travel(10.0).is_none());
        c.begin_drag(10.0);
        assert_eq!(c.drag_travel(13.0), Some(3.0));
    }

    #[test]
    fn narrow_content_has_no_edges() {
        let mut c = carousel(3);
        let flags = c.recompute_edge_flags(metrics(0.0, 360.0, 800.0));
        assert!(!flags.can_scroll_left);
        assert!(!flags.can_scroll_right);

        let flags = c.recompute_edge_flags(metrics(0.0, 800.0, 800.0));
        assert_eq!(flags, EdgeFlags::default());
    }

    #[test]
    fn edge_flags_follow_offset() {
        let mut c = carousel(10);
        let at_start = c.recompute_edge_flags(metrics(0.0, 1200.0, 500.0));
        assert!(!at_start.can_scroll_left);
        assert!(at_start.can_scroll_right);

        let middle = c.recompute_edge_flags(metrics(300.0, 1200.0, 500.0));
        assert!(middle.can_scroll_left && middle.can_scroll_right);

        // Within the tolerance of the end counts as the end.
        let at_end = c.recompute_edge_flags(metrics(699.5, 1200.0, 500.0));
        assert!(at_end.can_scroll_left);
        assert!(!at_end.can_scroll_right);
    }

    #[test]
    fn centering_formula() {
        assert_eq!(centered_offset(0, 120.0, 600.0), 0.0);
        assert_eq!(centered_offset(2, 120.0, 600.0), 0.0);
        assert_eq!(centered_offset(5, 120.0, 600.0), 5.0 * 120.0 - 300.0 + 60.0);
    }

    #[test]
    fn index_change_requests_smooth_centering() {
        let mut c = carousel(10);
        c.recompute_edge_flags(metrics(0.0, 1200.0, 480.0));
        let scroll = c.select_index(6).expect("index changed");
        assert!(scroll.smooth);
        assert_eq!(scroll.offset, 6.0 * 120.0 - 240.0 + 60.0);

        // Re-selecting the same index is not a change.
        assert!(c.select_index(6).is_none());
    }

    #[test]
    fn scroll_buttons_step_and_clamp() {
        let mut c = carousel(10);
        c.recompute_edge_flags(metrics(100.0, 1200.0, 500.0));

        assert_eq!(c.scroll_thumbnails(Direction::Right).offset, 300.0);
        assert_eq!(c.scroll_thumbnails(Direction::Left).offset, 0.0);

        c.recompute_edge_flags(metrics(650.0, 1200.0, 500.0));
        assert_eq!(c.scroll_thumbnails(Direction::Right).offset, 700.0);
    }

    #[test]
    fn estimated_metrics_use_thumbnail_width() {
        let m = StripMetrics::estimate(8, 120.0, 600.0);
        assert_eq!(m.content_width, 960.0);
        assert_eq!(m.max_offset(), 360.0);
        assert_eq!(m.clamp(-5.0), 0.0);
    }
}
