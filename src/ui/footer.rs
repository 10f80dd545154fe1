// SPDX-License-Identifier: MPL-2.0
//! Static page footer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Brands listed under "Popular brands".
const POPULAR_BRANDS: &[&str] = &["Toyota", "BMW", "Mercedes"];

pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let heading = |key: &str| Text::new(i18n.tr(key)).size(typography::BODY_LG);
    let line = |value: String| {
        Text::new(value)
            .size(typography::BODY_SM)
            .style(styles::text::footer)
    };

    let about = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(2))
        .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(line(i18n.tr("footer-tagline")));

    let links = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(heading("footer-quick-links"))
        .push(line(i18n.tr("navbar-used-cars")))
        .push(line(i18n.tr("footer-sell")))
        .push(line(i18n.tr("footer-about")));

    let brands = POPULAR_BRANDS.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .width(Length::FillPortion(1))
            .push(heading("footer-popular-brands")),
        |column, brand| column.push(line((*brand).to_string())),
    );

    let contact = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(heading("footer-contact"))
        .push(line(i18n.tr("footer-email")))
        .push(line(i18n.tr("footer-phone")))
        .push(line(i18n.tr("footer-location")));

    let year = chrono::Local::now().year().to_string();
    let copyright = Text::new(i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
        .size(typography::CAPTION)
        .style(styles::text::footer);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(about)
                .push(links)
                .push(brands)
                .push(contact),
        )
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(1.0))
                .style(styles::container::divider),
        )
        .push(
            Container::new(copyright)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::footer)
        .into()
}
