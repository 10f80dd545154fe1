// SPDX-License-Identifier: MPL-2.0
//! Listing card used by the home grids.

use crate::catalog::format::{format_mileage, format_price};
use crate::catalog::Car;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::picture;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Font, Length};

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// `"{fuel} • {transmission}"`, skipping whichever side is blank.
pub fn drivetrain_line(car: &Car) -> String {
    [car.fuel_type.trim(), car.transmission_type.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Renders one card; pressing it emits `on_open`.
pub fn view<'a, M: Clone + 'a>(ctx: &ViewContext<'_>, car: &Car, on_open: M) -> Element<'a, M> {
    let i18n = ctx.i18n;
    let image_height = Length::Fixed(sizing::CARD_IMAGE_HEIGHT);

    let mut cover = Stack::new()
        .width(Length::Fill)
        .height(image_height)
        .push(picture::view(
            i18n,
            ctx.images,
            car.cover_picture(),
            Length::Fill,
            image_height,
            ContentFit::Cover,
        ));

    if car.featured {
        let badge = Container::new(Text::new(i18n.tr("card-featured")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge);
        cover = cover.push(
            Container::new(badge)
                .width(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Top),
        );
    }

    let title = Text::new(car.heading())
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let price = Text::new(format_price(car.price, &car.currency))
        .size(typography::TITLE_MD)
        .style(styles::text::accent);

    let mileage = i18n.tr_with_args("card-mileage", &[("km", format_mileage(car.km_driven).as_str())]);
    let facts = Row::new()
        .spacing(spacing::SM)
        .push(muted(car.city.clone()))
        .push(muted(car.year.to_string()))
        .push(muted(mileage));

    let make_model = format!("{} {}", car.make, car.model);

    let details = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(title)
        .push(price)
        .push(facts)
        .push(muted(drivetrain_line(car)))
        .push(
            Row::new()
                .align_y(Vertical::Center)
                .push(muted(make_model.trim().to_string()))
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(i18n.tr("card-view-details"))
                        .size(typography::BODY_SM)
                        .style(styles::text::accent),
                ),
        );

    let body = Container::new(Column::new().push(cover).push(details))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::panel);

    button(body)
        .padding(0)
        .on_press(on_open)
        .style(styles::button::card)
        .into()
}

fn muted<'a>(value: String) -> Text<'a> {
    Text::new(value)
        .size(typography::BODY_SM)
        .style(styles::text::muted)
}
