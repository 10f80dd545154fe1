// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen shares the navbar on top and scrolls together with the
//! footer below it.

use super::{CatalogState, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::detail::{self, ViewContext as DetailViewContext};
use crate::ui::home::{self, Content, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::{footer, not_found, styles};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub catalog: &'a CatalogState,
    pub images: &'a ImageCache,
    pub home: &'a home::State,
    pub detail: Option<&'a detail::State>,
    pub featured_limit: usize,
    pub listing_limit: usize,
    pub window_width: f32,
    pub is_dark: bool,
    pub banner: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        is_dark: ctx.is_dark,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(&ctx),
        Screen::CarDetail(id) => match ctx.detail {
            Some(state) => state
                .view(DetailViewContext {
                    i18n: ctx.i18n,
                    images: ctx.images,
                    width: ctx.window_width,
                })
                .map(Message::Detail),
            None => not_found::view(ctx.i18n, id, Message::GoHome),
        },
        Screen::NotFound(id) => not_found::view(ctx.i18n, id, Message::GoHome),
    };

    let page = Column::new()
        .width(Length::Fill)
        .push(Container::new(current_view).center_x(Length::Fill))
        .push(footer::view(ctx.i18n));

    let mut column = Column::new().push(navbar_view);
    if let Some(key) = ctx.banner {
        column = column.push(view_banner(ctx.i18n, key));
    }
    column = column.push(Scrollable::new(page).width(Length::Fill).height(Length::Fill));

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = match ctx.catalog {
        CatalogState::Loading => Content::Loading,
        CatalogState::Failed(error) => Content::Failed(error),
        CatalogState::Ready(catalog) => Content::Ready(catalog),
    };

    ctx.home
        .view(HomeViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            content,
            featured_limit: ctx.featured_limit,
            listing_limit: ctx.listing_limit,
            width: ctx.window_width,
        })
        .map(Message::Home)
}

fn view_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .style(styles::text::error),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("banner-dismiss")).size(typography::BODY_SM))
                .on_press(Message::DismissBanner)
                .style(styles::button::link),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .style(styles::container::error_banner)
        .into()
}
