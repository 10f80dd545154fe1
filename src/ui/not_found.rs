// SPDX-License-Identifier: MPL-2.0
//! Shown when a requested car id is not in the catalog.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a, M: Clone + 'a>(i18n: &I18n, id: &str, on_back: M) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("detail-not-found-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr_with_args("detail-not-found-body", &[("id", id)]))
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(
            button(Text::new(i18n.tr("detail-back")).size(typography::BODY))
                .on_press(on_back)
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n, "missing-7", ());
    }
}
