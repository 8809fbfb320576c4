//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette::{self, with_alpha};
use super::shadows;
use super::shadows::radius;

/// Header bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Page background behind cards.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Card with a soft shadow.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::card(),
        ..Default::default()
    }
}

/// Recessed panel for raw body text and reply drafts.
pub fn sunken_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Table header row.
pub fn table_header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        text_color: Some(p.text_secondary),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Small filled badge in `color`.
pub fn badge_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            color,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Tinted badge: light fill with a colored outline and text.
pub fn soft_badge_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(with_alpha(color, 0.12))),
        text_color: Some(color),
        border: Border {
            color: with_alpha(color, 0.5),
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Banner for a notice of the given color.
pub fn notice_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(with_alpha(color, 0.12))),
            text_color: Some(p.text_primary),
            border: Border {
                color,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..Default::default()
        }
    }
}

/// Filled part of a percentage bar.
pub fn bar_fill_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color,
            width: 0.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Track behind a percentage bar.
pub fn bar_track_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}
