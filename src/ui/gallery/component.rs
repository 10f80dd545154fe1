// SPDX-License-Identifier: MPL-2.0
//! Carousel component: wires [`Carousel`] to Iced widgets.
//!
//! The thumbnail strip is a horizontal scrollable wrapped in a mouse area.
//! Pointer press, move, release and leave drive the drag; the strip's own
//! scroll reports keep the metrics and edge flags current. Strip movement
//! requested by the state machine becomes a `scroll_to` operation, either
//! immediately or stepped by [`ScrollAnimator`] on a frame tick.

use super::animator::ScrollAnimator;
use super::state::{Carousel, Direction, GallerySettings, StripMetrics, StripScroll, CLICK_SLOP};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::picture;
use crate::ui::styles;
use iced::widget::scrollable::{AbsoluteOffset, Direction as ScrollDirection, Scrollbar, Viewport};
use iced::widget::{
    button, mouse_area, operation, Column, Container, Id, Row, Scrollable, Space, Stack, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length, Point, Subscription, Task};
use std::time::{Duration, Instant};

const STRIP_ID: &str = "gallery-thumbnail-strip";
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    ScrollStrip(Direction),
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    ThumbnailReleased(usize),
    StripScrolled(Viewport),
    AnimationFrame(Instant),
}

/// Effects propagated to the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The visible image changed; carries the new index.
    IndexChanged(usize),
}

#[derive(Debug, Clone)]
pub struct State {
    carousel: Carousel,
    animator: ScrollAnimator,
    pointer_x: Option<f32>,
    press_x: Option<f32>,
}

impl State {
    /// Creates the carousel for one listing.
    ///
    /// `visible_width` seeds the strip metrics until the scrollable reports
    /// its real geometry.
    pub fn new(
        images: Vec<String>,
        title: impl Into<String>,
        settings: GallerySettings,
        visible_width: f32,
    ) -> Self {
        let mut carousel = Carousel::new(images, title, settings);
        let estimate =
            StripMetrics::estimate(carousel.len(), settings.thumbnail_width, visible_width);
        carousel.recompute_edge_flags(estimate);

        Self {
            carousel,
            animator: ScrollAnimator::new(settings.scroll_animation),
            pointer_x: None,
            press_x: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// The thumbnail strip only appears when there is something to pick.
    pub fn shows_strip(&self) -> bool {
        self.carousel.can_navigate()
    }

    /// Frame ticks while a smooth scroll runs.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.animator.is_active() {
            iced::time::every(FRAME_INTERVAL).map(Message::AnimationFrame)
        } else {
            Subscription::none()
        }
    }

    pub fn handle(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Next => {
                let scroll = self.carousel.next();
                self.index_changed(scroll)
            }
            Message::Previous => {
                let scroll = self.carousel.previous();
                self.index_changed(scroll)
            }
            Message::ThumbnailReleased(index) => {
                let travel = match (self.press_x, self.pointer_x) {
                    (Some(pressed), Some(released)) => (released - pressed).abs(),
                    _ => 0.0,
                };
                self.carousel.end_drag();
                self.press_x = None;

                if travel >= CLICK_SLOP || index >= self.carousel.len() {
                    return (Effect::None, Task::none());
                }
                let scroll = self.carousel.select_index(index);
                self.index_changed(scroll)
            }
            Message::PointerMoved(position) => {
                self.pointer_x = Some(position.x);
                match self.carousel.continue_drag(position.x) {
                    Some(offset) => {
                        self.animator.cancel();
                        (Effect::None, self.scroll_now(offset))
                    }
                    None => (Effect::None, Task::none()),
                }
            }
            Message::PointerPressed => {
                if let Some(x) = self.pointer_x {
                    self.press_x = Some(x);
                    self.animator.cancel();
                    self.carousel.begin_drag(x);
                }
                (Effect::None, Task::none())
            }
            Message::PointerReleased => {
                self.carousel.end_drag();
                (Effect::None, Task::none())
            }
            Message::PointerLeft => {
                self.carousel.end_drag();
                self.pointer_x = None;
                self.press_x = None;
                (Effect::None, Task::none())
            }
            Message::ScrollStrip(direction) => {
                let scroll = self.carousel.scroll_thumbnails(direction);
                (Effect::None, self.apply_scroll(scroll))
            }
            Message::StripScrolled(viewport) => {
                self.carousel.recompute_edge_flags(StripMetrics {
                    offset: viewport.absolute_offset().x,
                    content_width: viewport.content_bounds().width,
                    visible_width: viewport.bounds().width,
                });
                (Effect::None, Task::none())
            }
            Message::AnimationFrame(now) => match self.animator.tick(now) {
                Some(offset) => (Effect::None, self.scroll_now(offset)),
                None => (Effect::None, Task::none()),
            },
        }
    }

    fn index_changed(&mut self, scroll: Option<StripScroll>) -> (Effect, Task<Message>) {
        match scroll {
            Some(scroll) => (
                Effect::IndexChanged(self.carousel.current_index()),
                self.apply_scroll(scroll),
            ),
            None => (Effect::None, Task::none()),
        }
    }

    fn apply_scroll(&mut self, scroll: StripScroll) -> Task<Message> {
        let metrics = self.carousel.metrics();
        let target = metrics.clamp(scroll.offset);
        if scroll.smooth && self.animator.start(metrics.offset, target, Instant::now()) {
            // The frame subscription takes it from here.
            return Task::none();
        }
        self.animator.cancel();
        self.scroll_now(target)
    }

    fn scroll_now(&self, offset: f32) -> Task<Message> {
        let x = self.carousel.metrics().clamp(offset);
        operation::scroll_to(Id::new(STRIP_ID), AbsoluteOffset { x, y: 0.0 })
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .push(self.view_stage(&ctx));

        if self.shows_strip() {
            content = content.push(self.view_strip(&ctx));
        }

        content.into()
    }

    /// Main picture with arrows and counter.
    fn view_stage<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let carousel = &self.carousel;
        let height = Length::Fixed(sizing::CAROUSEL_HEIGHT);

        if carousel.is_empty() {
            return Container::new(Text::new(ctx.i18n.tr("gallery-no-images")))
                .center_x(Length::Fill)
                .center_y(height)
                .style(styles::container::placeholder)
                .into();
        }

        let picture = picture::view(
            ctx.i18n,
            ctx.images,
            carousel.current_image(),
            Length::Fill,
            height,
            ContentFit::Cover,
        );

        let mut stage = Stack::new().width(Length::Fill).height(height).push(picture);

        if carousel.can_navigate() {
            let (previous_glyph, next_glyph) = if ctx.i18n.is_rtl() {
                ("›", "‹")
            } else {
                ("‹", "›")
            };
            let arrow = |glyph: &'static str, message: Message| {
                button(
                    Text::new(glyph)
                        .size(typography::TITLE_LG)
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Center),
                )
                .on_press(message)
                .width(Length::Fixed(sizing::CAROUSEL_ARROW))
                .height(Length::Fixed(sizing::CAROUSEL_ARROW))
                .style(styles::button::carousel_arrow)
            };

            let arrows = Row::new()
                .push(arrow(previous_glyph, Message::Previous))
                .push(Space::new().width(Length::Fill))
                .push(arrow(next_glyph, Message::Next))
                .padding(spacing::MD)
                .align_y(alignment::Vertical::Center);

            stage = stage.push(
                Container::new(arrows)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(alignment::Vertical::Center),
            );
        }

        let counter = Container::new(Text::new(carousel.counter_label()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::counter);

        stage
            .push(
                Container::new(counter)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::MD)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Bottom),
            )
            .into()
    }

    /// Scroll buttons around the draggable thumbnail strip.
    fn view_strip<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let carousel = &self.carousel;
        let edges = carousel.edge_flags();
        let current = carousel.current_index();
        let dragging = carousel.is_dragging();

        let mut thumbnails = Row::new().spacing(sizing::THUMBNAIL_GAP);
        for (index, reference) in carousel.images().iter().enumerate() {
            // The outline inset keeps each framed thumbnail exactly THUMBNAIL wide.
            let picture = picture::view(
                ctx.i18n,
                ctx.images,
                Some(reference.as_str()),
                Length::Fixed(sizing::THUMBNAIL - 2.0 * border::WIDTH_MD),
                Length::Fixed(sizing::THUMBNAIL_HEIGHT - 2.0 * border::WIDTH_MD),
                ContentFit::Cover,
            );
            let framed = Container::new(picture)
                .padding(border::WIDTH_MD)
                .style(styles::container::thumbnail(index == current));

            let thumbnail = mouse_area(framed).on_release(Message::ThumbnailReleased(index));
            thumbnails = thumbnails.push(if dragging {
                thumbnail.interaction(mouse::Interaction::Grabbing)
            } else {
                thumbnail.interaction(mouse::Interaction::Pointer)
            });
        }

        let strip = Scrollable::new(thumbnails)
            .id(Id::new(STRIP_ID))
            .width(Length::Fill)
            .direction(ScrollDirection::Horizontal(Scrollbar::hidden()))
            .on_scroll(Message::StripScrolled);

        let strip = mouse_area(strip)
            .on_press(Message::PointerPressed)
            .on_release(Message::PointerReleased)
            .on_exit(Message::PointerLeft)
            .on_move(Message::PointerMoved)
            .interaction(if dragging {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Grab
            });

        let scroll_button = |glyph: &'static str, direction: Direction, enabled: bool| {
            button(
                Text::new(glyph)
                    .size(typography::BODY_LG)
                    .align_x(alignment::Horizontal::Center),
            )
            .on_press_maybe(enabled.then_some(Message::ScrollStrip(direction)))
            .width(Length::Fixed(sizing::ICON_LG))
            .style(styles::button::strip_scroll)
        };

        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(scroll_button("‹", Direction::Left, edges.can_scroll_left))
            .push(strip)
            .push(scroll_button("›", Direction::Right, edges.can_scroll_right))
            .into()
    }
}
