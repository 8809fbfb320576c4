//! Styling and theming for the application.

pub mod widgets;

use iced::Font;
use iced::font::Weight;

/// Bold variant of the default font.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Semibold variant of the default font.
pub const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};
