// SPDX-License-Identifier: MPL-2.0
//! Car detail screen: carousel, specifications, description and the
//! contact sidebar.

use crate::catalog::format::{format_mileage, format_price, html_to_text};
use crate::catalog::Car;
use crate::contact;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::{self, GallerySettings};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Subscription, Task};

/// Below this width the sidebar moves under the article.
const WIDE_LAYOUT_MIN_WIDTH: f32 = 960.0;

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Back,
    Contact,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    /// Hand this URL to the system opener.
    OpenLink(String),
    /// The carousel moved to this picture; it must be in the cache.
    ImageShown(String),
}

#[derive(Debug, Clone)]
pub struct State {
    car: Car,
    gallery: gallery::State,
}

impl State {
    /// Opens the detail screen for `car`. `width` is the current window
    /// width, used to estimate the thumbnail strip until it reports back.
    pub fn new(car: Car, settings: GallerySettings, width: f32) -> Self {
        let gallery = gallery::State::new(
            car.pictures.clone(),
            car.display_title(),
            settings,
            estimated_strip_width(width),
        );
        Self { car, gallery }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.gallery.subscription().map(Message::Gallery)
    }

    pub fn handle(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Gallery(message) => {
                let (effect, task) = self.gallery.handle(message);
                let task = task.map(Message::Gallery);
                if let gallery::Effect::IndexChanged(index) = effect {
                    tracing::debug!(car = %self.car.id, index, "gallery image changed");
                    if let Some(reference) = self.gallery.carousel().current_image() {
                        return (Event::ImageShown(reference.to_string()), task);
                    }
                }
                (Event::None, task)
            }
            Message::Back => (Event::Back, Task::none()),
            Message::Contact => match contact::car_inquiry_link(&self.car) {
                Some(url) => (Event::OpenLink(url), Task::none()),
                None => (Event::None, Task::none()),
            },
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let back = button(Text::new(format!("← {}", i18n.tr("detail-back"))).size(typography::BODY))
            .on_press(Message::Back)
            .style(styles::button::link);

        let article = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::LG)
                .push(
                    self.gallery
                        .view(gallery::ViewContext {
                            i18n,
                            images: ctx.images,
                        })
                        .map(Message::Gallery),
                )
                .push(self.view_header())
                .push(self.view_specs(i18n))
                .push(self.view_description(i18n)),
        )
        .width(Length::Fill)
        .style(styles::container::panel);

        let sidebar = self.view_sidebar(i18n);

        let layout: Element<'a, Message> = if ctx.width >= WIDE_LAYOUT_MIN_WIDTH {
            Row::new()
                .spacing(spacing::LG)
                .push(article)
                .push(
                    Container::new(sidebar)
                        .width(Length::Fixed(sizing::SIDEBAR_WIDTH)),
                )
                .into()
        } else {
            Column::new()
                .spacing(spacing::LG)
                .push(article)
                .push(sidebar)
                .into()
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::XL)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(back)
            .push(layout)
            .into()
    }

    fn view_header<'a>(&self) -> Element<'a, Message> {
        let car = &self.car;
        let mut subtitle = Row::new().spacing(spacing::MD);
        if !car.city.trim().is_empty() {
            subtitle = subtitle.push(muted(car.city.clone()));
        }
        subtitle = subtitle.push(muted(car.year.to_string()));

        Column::new()
            .spacing(spacing::XS)
            .push(bold(car.heading(), typography::TITLE_LG))
            .push(subtitle)
            .into()
    }

    fn view_specs<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let car = &self.car;
        let make_model = format!("{} {}", car.make, car.model).trim().to_string();
        let mileage = i18n.tr_with_args("card-mileage", &[("km", format_mileage(car.km_driven).as_str())]);

        let tiles = [
            (i18n.tr("detail-spec-make-model"), make_model),
            (i18n.tr("detail-spec-mileage"), mileage),
            (i18n.tr("detail-spec-fuel"), or_dash(&car.fuel_type)),
            (i18n.tr("detail-spec-color"), or_dash(&car.exterior_color)),
        ];

        let grid = tiles.chunks(2).fold(Column::new().spacing(spacing::SM), |grid, pair| {
            let row = pair.iter().fold(Row::new().spacing(spacing::SM), |row, (label, value)| {
                row.push(
                    Container::new(
                        Column::new()
                            .spacing(spacing::XXS)
                            .push(muted(label.clone()))
                            .push(bold(value.clone(), typography::BODY_LG)),
                    )
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::container::tile),
                )
            });
            grid.push(row)
        });

        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("detail-specifications")).size(typography::TITLE_SM))
            .push(grid)
            .into()
    }

    fn view_description<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let text = html_to_text(&self.car.description);
        let body = if text.is_empty() {
            muted(i18n.tr("detail-no-description"))
        } else {
            Text::new(text).size(typography::BODY)
        };

        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("detail-description")).size(typography::TITLE_SM))
            .push(body)
            .into()
    }

    fn view_sidebar<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let car = &self.car;

        let mut actions = Column::new().spacing(spacing::SM);
        if car.contact_number().is_some() {
            actions = actions.push(
                button(Text::new(i18n.tr("detail-contact-seller")).size(typography::BODY))
                    .on_press(Message::Contact)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::messaging),
            );
        }
        // Call and email are shown but not wired to anything yet.
        for key in ["detail-call-seller", "detail-email-seller"] {
            actions = actions.push(
                button(Text::new(i18n.tr(key)).size(typography::BODY))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::disabled()),
            );
        }

        let facts = [
            ("detail-fact-body", or_dash(&car.body_style)),
            ("detail-fact-transmission", or_dash(&car.transmission_type)),
            ("detail-fact-year", car.year.to_string()),
            ("detail-fact-location", or_dash(&car.city)),
        ]
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, (key, value)| {
            column.push(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(muted(i18n.tr(key)))
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(value).size(typography::BODY_SM)),
            )
        });

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(muted(i18n.tr("detail-price")))
                    .push(
                        Text::new(format_price(car.price, &car.currency))
                            .size(typography::TITLE_LG)
                            .style(styles::text::accent),
                    ),
            )
            .push(actions)
            .push(
                Column::new()
                    .spacing(spacing::SM)
                    .push(Text::new(i18n.tr("detail-quick-facts")).size(typography::TITLE_SM))
                    .push(facts),
            );

        Container::new(content)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

/// Strip width left once page padding, panel padding and the sidebar are
/// taken out of `window_width`.
fn estimated_strip_width(window_width: f32) -> f32 {
    let mut width = window_width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * spacing::XL;
    if window_width >= WIDE_LAYOUT_MIN_WIDTH {
        width -= sizing::SIDEBAR_WIDTH + spacing::LG;
    }
    // Panel padding and the two strip scroll buttons.
    width -= 2.0 * spacing::LG + 2.0 * (sizing::ICON_LG + spacing::XS);
    width.max(0.0)
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn muted<'a>(value: String) -> Text<'a> {
    Text::new(value)
        .size(typography::BODY_SM)
        .style(styles::text::muted)
}

fn bold<'a>(value: String, size: f32) -> Text<'a> {
    Text::new(value).size(size).font(Font {
        weight: Weight::Bold,
        ..Font::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_car(number: Option<&str>) -> Car {
        Car {
            id: "42".into(),
            make: "Nissan".into(),
            model: "Patrol".into(),
            year: 2021,
            price: 185_000.0,
            currency: "AED".into(),
            city: "Sharjah".into(),
            description: "<p>Full service history</p>".into(),
            pictures: (0..4).map(|i| format!("https://cdn.example.com/{i}.jpg")).collect(),
            whatsapp_number: number.map(str::to_string),
            ..Car::default()
        }
    }

    fn state(number: Option<&str>) -> State {
        State::new(sample_car(number), GallerySettings::default(), 1280.0)
    }

    #[test]
    fn back_is_propagated() {
        let mut s = state(None);
        let (event, _task) = s.handle(Message::Back);
        assert_eq!(event, Event::Back);
    }

    #[test]
    fn contact_builds_messaging_link() {
        let mut s = state(Some("+971 50 123 4567"));
        let (event, _task) = s.handle(Message::Contact);
        match event {
            Event::OpenLink(url) => {
                assert!(url.starts_with("https://wa.me/971501234567?text="));
                assert!(url.contains("Nissan%20Patrol%202021"));
            }
            other => panic!("expected OpenLink, got {other:?}"),
        }
    }

    #[test]
    fn contact_without_number_does_nothing() {
        let mut s = state(None);
        let (event, _task) = s.handle(Message::Contact);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn gallery_messages_reach_the_carousel() {
        let mut s = state(None);
        s.handle(Message::Gallery(gallery::Message::Next));
        s.handle(Message::Gallery(gallery::Message::Next));
        assert_eq!(s.gallery().carousel().counter_label(), "3 / 4");
        assert_eq!(s.gallery().carousel().title(), "Nissan Patrol 2021");
    }

    #[test]
    fn index_change_reports_the_shown_picture() {
        let mut s = state(None);
        let (event, _task) = s.handle(Message::Gallery(gallery::Message::Previous));
        assert_eq!(
            event,
            Event::ImageShown("https://cdn.example.com/3.jpg".into())
        );

        let mut single = State::new(
            Car {
                pictures: vec!["/images/only.jpg".into()],
                ..sample_car(None)
            },
            GallerySettings::default(),
            1280.0,
        );
        let (event, _task) = single.handle(Message::Gallery(gallery::Message::Next));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn strip_width_estimate_accounts_for_layout() {
        let wide = estimated_strip_width(1280.0);
        let narrow = estimated_strip_width(800.0);
        assert!(wide > 0.0);
        assert!(narrow > 0.0);
        assert!(estimated_strip_width(1280.0) < 1280.0 - sizing::SIDEBAR_WIDTH);
        assert_eq!(estimated_strip_width(0.0), 0.0);
    }

    #[test]
    fn detail_view_renders_both_layouts() {
        let i18n = I18n::default();
        let images = ImageCache::new(8);
        let s = state(Some("0501234567"));
        for width in [1280.0, 700.0] {
            let _element = s.view(ViewContext {
                i18n: &i18n,
                images: &images,
                width,
            });
        }
    }
}
