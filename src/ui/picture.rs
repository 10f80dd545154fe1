// SPDX-License-Identifier: MPL-2.0
//! Cached picture or a placeholder box, shared by cards and the carousel.

use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageStatus};
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{Container, Image, Text};
use iced::{ContentFit, Element, Length};

/// Renders `reference` from `cache`, or a placeholder describing its state.
pub fn view<'a, M: 'a>(
    i18n: &I18n,
    cache: &ImageCache,
    reference: Option<&str>,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, M> {
    let Some(reference) = reference else {
        return placeholder(i18n.tr("picture-none"), width, height);
    };

    if let Some(handle) = cache.peek(reference) {
        return Image::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into();
    }

    let key = match cache.status(reference) {
        ImageStatus::Failed => "picture-unavailable",
        _ => "picture-loading",
    };
    placeholder(i18n.tr(key), width, height)
}

fn placeholder<'a, M: 'a>(label: String, width: Length, height: Length) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .center_x(width)
        .center_y(height)
        .style(styles::container::placeholder)
        .into()
}
