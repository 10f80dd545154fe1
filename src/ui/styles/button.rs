// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (brand blue).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Seller messaging button (green).
pub fn messaging(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::MESSAGING_600,
        _ => palette::MESSAGING_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Outlined secondary action, e.g. "View all".
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let hover_bg = if is_dark {
        palette::GRAY_700
    } else {
        palette::PRIMARY_100
    };
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(hover_bg))
            }
            _ => None,
        },
        text_color: if is_dark {
            palette::PRIMARY_100
        } else {
            palette::PRIMARY_600
        },
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text link (back link, navbar entries, cards).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = if theme.extended_palette().is_dark {
        palette::PRIMARY_100
    } else {
        palette::PRIMARY_600
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => base,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Transparent wrapper used for clickable cards; only the cursor changes.
pub fn card(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent arrows drawn over the carousel image.
pub fn carousel_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OPAQUE,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Strip scroll buttons: light chips that fade when disabled.
pub fn strip_scroll(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (bg, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (WHITE, palette::GRAY_900)
    };
    let alpha = match status {
        button::Status::Disabled => opacity::OVERLAY_MEDIUM,
        _ => opacity::OPAQUE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..bg })),
        text_color: Color {
            a: alpha,
            ..text_color
        },
        border: Border {
            color: if status == button::Status::Hovered {
                palette::PRIMARY_500
            } else {
                palette::GRAY_200
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Grayed out, non-interactive.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let is_dark = theme.extended_palette().is_dark;
        button::Style {
            background: Some(Background::Color(if is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_100
            })),
            text_color: palette::GRAY_500,
            border: Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
