// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White (or dark) raised surface for cards, the detail article and the sidebar.
///
/// Colors come from the active theme so surfaces stay readable in both
/// modes.
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Page background behind panels.
pub fn page(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let color = if extended.is_dark {
        extended.background.weak.color
    } else {
        palette::GRAY_50
    };
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Light tile used for the specification grid.
pub fn tile(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let color = if extended.is_dark {
        extended.background.weak.color
    } else {
        palette::GRAY_100
    };
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// "Featured" badge over card pictures.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark pill behind the carousel counter.
pub fn counter(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Frame around a thumbnail; the active one gets a brand outline.
pub fn thumbnail(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            border: Border {
                color: if active {
                    palette::PRIMARY_600
                } else {
                    Color::TRANSPARENT
                },
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Neutral box shown while a picture loads or after it failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: Some(palette::GRAY_500),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dark footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// One-pixel separator on the footer.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        ..Default::default()
    }
}

/// Inline error banner.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
