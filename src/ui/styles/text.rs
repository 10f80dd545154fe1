// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Secondary text: labels, meta lines.
pub fn muted(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::GRAY_400
    } else {
        palette::GRAY_500
    };
    text::Style { color: Some(color) }
}

/// Prices and calls to action.
pub fn accent(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::PRIMARY_100
    } else {
        palette::PRIMARY_600
    };
    text::Style { color: Some(color) }
}

/// Text on the dark footer.
pub fn footer(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_400),
    }
}

pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
