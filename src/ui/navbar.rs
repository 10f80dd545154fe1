// SPDX-License-Identifier: MPL-2.0
//! Top bar with the brand, the listings link, and appearance toggles.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    GoHome,
    ToggleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    GoHome,
    ToggleTheme,
    CycleLanguage,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::GoHome => Event::GoHome,
        Message::ToggleTheme => Event::ToggleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("app-name"))
            .size(typography::TITLE_MD)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
    )
    .on_press(Message::GoHome)
    .style(styles::button::link);

    let used_cars = button(Text::new(ctx.i18n.tr("navbar-used-cars")).size(typography::BODY))
        .on_press(Message::GoHome)
        .style(styles::button::link);

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("navbar-theme-light")
    } else {
        ctx.i18n.tr("navbar-theme-dark")
    };
    let theme_toggle = button(Text::new(theme_label).size(typography::BODY_SM))
        .on_press(Message::ToggleTheme)
        .style(styles::button::outline);

    let language = button(Text::new(ctx.i18n.tr("navbar-language")).size(typography::BODY_SM))
        .on_press(Message::CycleLanguage)
        .style(styles::button::outline);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(used_cars)
        .push(language)
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}
