//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Primary action button.
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary_light,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::glow(p.primary),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_light)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_dark)),
            shadow: shadows::none(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.text_muted)),
            text_color: p.surface,
            border: Border {
                color: p.text_muted,
                ..base.border
            },
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Secondary button: outlined, transparent fill.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.primary,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            ..base
        },
    }
}

/// Destructive action button.
pub fn danger_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.danger,
        border: Border {
            color: p.danger,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.danger)),
            text_color: p.text_on_primary,
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            ..base
        },
    }
}

/// Header tab, highlighted when `active`.
pub fn tab_button_style(active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();
        let (background, text_color) = if active {
            (p.primary, p.text_on_primary)
        } else if matches!(status, button::Status::Hovered) {
            (p.hover, p.text_primary)
        } else {
            (Color::TRANSPARENT, p.text_secondary)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::MEDIUM.into(),
            },
            shadow: shadows::none(),
            snap: false,
        }
    }
}

/// Rounded filter chip, tinted with `accent` when `active`.
pub fn chip_button_style(
    active: bool,
    accent: Color,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();
        let (background, text_color, border_color) = if active {
            (accent, Color::WHITE, accent)
        } else {
            match status {
                button::Status::Hovered => (p.hover, p.text_primary, accent),
                _ => (p.surface, p.text_secondary, p.border_subtle),
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadows::none(),
            snap: false,
        }
    }
}

/// Clickable row or card.
pub fn row_button_style(selected: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();
        let background = match (selected, status) {
            (true, _) => p.selected,
            (false, button::Status::Hovered) => p.hover,
            (false, _) => p.surface,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: p.text_primary,
            border: Border {
                color: if selected { p.selected_border } else { p.border_subtle },
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadows::raised()
            } else {
                shadows::none()
            },
            snap: false,
        }
    }
}

/// Icon-only button with no chrome.
pub fn ghost_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_secondary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            text_color: p.text_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}
