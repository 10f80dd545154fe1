// SPDX-License-Identifier: MPL-2.0
//! Home screen: hero heading, featured cars and the full listing grid.
//!
//! Each section shows a configured number of cards until its "View all"
//! toggle is pressed. The catalog itself is owned by the application; this
//! module only keeps the two toggles.

use crate::catalog::{Car, Catalog};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// What the home screen has to show.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Loading,
    Failed(&'a Error),
    Ready(&'a Catalog),
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub content: Content<'a>,
    pub featured_limit: usize,
    pub listing_limit: usize,
    /// Available width, used to pick the number of grid columns.
    pub width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleFeatured,
    ToggleListings,
    OpenCar(String),
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenCar(String),
    Retry,
    /// More cards became visible; their pictures may need loading.
    Expanded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    show_all_featured: bool,
    show_all_listings: bool,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleFeatured => {
                self.show_all_featured = !self.show_all_featured;
                expanded(self.show_all_featured)
            }
            Message::ToggleListings => {
                self.show_all_listings = !self.show_all_listings;
                expanded(self.show_all_listings)
            }
            Message::OpenCar(id) => Event::OpenCar(id),
            Message::Retry => Event::Retry,
        }
    }

    pub fn shows_all_featured(&self) -> bool {
        self.show_all_featured
    }

    pub fn shows_all_listings(&self) -> bool {
        self.show_all_listings
    }

    /// Featured cars currently on screen.
    pub fn visible_featured<'c>(&self, catalog: &'c Catalog, limit: usize) -> &'c [Car] {
        if self.show_all_featured {
            catalog.featured(usize::MAX)
        } else {
            catalog.featured(limit)
        }
    }

    /// Listing cars currently on screen.
    pub fn visible_listings<'c>(&self, catalog: &'c Catalog, limit: usize) -> &'c [Car] {
        if self.show_all_listings {
            catalog.listings(usize::MAX)
        } else {
            catalog.listings(limit)
        }
    }

    /// Cover pictures of every visible card, in display order.
    pub fn visible_covers(
        &self,
        catalog: &Catalog,
        featured_limit: usize,
        listing_limit: usize,
    ) -> Vec<String> {
        self.visible_featured(catalog, featured_limit)
            .iter()
            .chain(self.visible_listings(catalog, listing_limit))
            .filter_map(Car::cover_picture)
            .map(str::to_string)
            .collect()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let hero = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("home-heading")).size(typography::DISPLAY))
            .push(
                Text::new(ctx.i18n.tr("home-subheading"))
                    .size(typography::BODY_LG)
                    .style(styles::text::muted),
            );

        let body: Element<'a, Message> = match ctx.content {
            Content::Loading => status_message(ctx.i18n.tr("home-loading")),
            Content::Failed(error) => view_error(ctx.i18n, error),
            Content::Ready(catalog) => self.view_catalog(&ctx, catalog),
        };

        Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(hero)
            .push(body)
            .into()
    }

    fn view_catalog<'a>(&'a self, ctx: &ViewContext<'a>, catalog: &'a Catalog) -> Element<'a, Message> {
        if catalog.is_empty() {
            return status_message(ctx.i18n.tr("home-empty"));
        }

        let columns = columns_for_width(ctx.width);
        let mut sections = Column::new().spacing(spacing::XXL);

        if catalog.featured_count() > 0 {
            sections = sections.push(section(
                ctx,
                "home-featured-title",
                self.visible_featured(catalog, ctx.featured_limit),
                columns,
                toggle(
                    ctx.i18n,
                    catalog.featured_count() > ctx.featured_limit,
                    self.show_all_featured,
                    Message::ToggleFeatured,
                ),
            ));
        }

        sections
            .push(section(
                ctx,
                "home-listings-title",
                self.visible_listings(catalog, ctx.listing_limit),
                columns,
                toggle(
                    ctx.i18n,
                    catalog.listing_count() > ctx.listing_limit,
                    self.show_all_listings,
                    Message::ToggleListings,
                ),
            ))
            .into()
    }
}

fn expanded(show_all: bool) -> Event {
    if show_all {
        Event::Expanded
    } else {
        Event::None
    }
}

/// Number of card columns that fit in `width`, between one and three.
pub fn columns_for_width(width: f32) -> usize {
    let available = (width - 2.0 * spacing::XL).min(sizing::CONTENT_MAX_WIDTH);
    let per_card = sizing::CARD_WIDTH + spacing::LG;
    ((available + spacing::LG) / per_card).floor().clamp(1.0, 3.0) as usize
}

fn toggle<'a>(i18n: &I18n, needed: bool, showing_all: bool, message: Message) -> Option<Element<'a, Message>> {
    if !needed {
        return None;
    }
    let key = if showing_all { "home-show-less" } else { "home-view-all" };
    Some(
        button(Text::new(i18n.tr(key)).size(typography::BODY_SM))
            .on_press(message)
            .style(styles::button::outline)
            .into(),
    )
}

fn section<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    cars: &'a [Car],
    columns: usize,
    toggle: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill));
    if let Some(toggle) = toggle {
        header = header.push(toggle);
    }

    let card_ctx = card::ViewContext {
        i18n: ctx.i18n,
        images: ctx.images,
    };

    let grid = cars.chunks(columns.max(1)).fold(
        Column::new().spacing(spacing::LG),
        |grid, row_cars| {
            let row = row_cars.iter().fold(Row::new().spacing(spacing::LG), |row, car| {
                row.push(card::view(&card_ctx, car, Message::OpenCar(car.id.clone())))
            });
            grid.push(row)
        },
    );

    Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(grid)
        .into()
}

fn status_message<'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY_LG).style(styles::text::muted))
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

fn view_error<'a>(i18n: &I18n, error: &Error) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("home-load-failed"))
                .size(typography::TITLE_SM)
                .style(styles::text::error),
        )
        .push(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("home-retry")).size(typography::BODY_SM))
                .on_press(Message::Retry)
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::error_banner)
        .into()
}
