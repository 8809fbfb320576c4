//! Color palette with light and dark theme support.
//!
//! Category and importance colors are fixed across themes so a category
//! reads the same everywhere.

use iced::Color;
use inboxlens_core::{Category, ImportanceBand};

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_elevated: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Status
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // States
    pub selected: Color,
    pub selected_border: Color,
    pub hover: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,

    pub shadow: Color,
}

impl Palette {
    /// Light palette: white cards on a cool grey page.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.40, 0.49, 0.92), // #667eea
            primary_light: Color::from_rgb(0.55, 0.62, 0.96),
            primary_dark: Color::from_rgb(0.46, 0.29, 0.64), // #764ba2

            surface: Color::WHITE,
            surface_elevated: Color::WHITE,
            surface_sunken: Color::from_rgb(0.97, 0.975, 0.99),
            background: Color::from_rgb(0.95, 0.96, 0.98),

            text_primary: Color::from_rgb(0.13, 0.15, 0.20),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            success: Color::from_rgb(0.16, 0.65, 0.27),
            warning: Color::from_rgb(0.96, 0.62, 0.04),
            danger: Color::from_rgb(0.86, 0.21, 0.27),
            info: Color::from_rgb(0.09, 0.64, 0.72),

            selected: Color::from_rgb(0.93, 0.94, 1.0),
            selected_border: Color::from_rgb(0.40, 0.49, 0.92),
            hover: Color::from_rgb(0.97, 0.97, 0.99),

            border_subtle: Color::from_rgb(0.91, 0.92, 0.94),
            border_medium: Color::from_rgb(0.84, 0.86, 0.89),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.55, 0.62, 0.98),
            primary_light: Color::from_rgb(0.68, 0.73, 1.0),
            primary_dark: Color::from_rgb(0.42, 0.48, 0.85),

            surface: Color::from_rgb(0.12, 0.13, 0.16),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.19),
            surface_sunken: Color::from_rgb(0.10, 0.11, 0.13),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            success: Color::from_rgb(0.30, 0.85, 0.50),
            warning: Color::from_rgb(1.0, 0.78, 0.25),
            danger: Color::from_rgb(1.0, 0.40, 0.45),
            info: Color::from_rgb(0.35, 0.80, 0.90),

            selected: Color::from_rgb(0.16, 0.18, 0.26),
            selected_border: Color::from_rgb(0.55, 0.62, 0.98),
            hover: Color::from_rgb(0.15, 0.16, 0.19),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

/// Accent color of a category badge.
#[must_use]
pub fn category_color(category: &Category) -> Color {
    let [r, g, b] = category.accent_rgb();
    Color::from_rgb8(r, g, b)
}

/// Color of an importance band.
#[must_use]
pub const fn band_color(band: ImportanceBand) -> Color {
    match band {
        ImportanceBand::Critical => Color::from_rgb8(0xdc, 0x35, 0x45),
        ImportanceBand::High => Color::from_rgb8(0xfd, 0x7e, 0x14),
        ImportanceBand::Medium => Color::from_rgb8(0xff, 0xc1, 0x07),
        ImportanceBand::Low => Color::from_rgb8(0x28, 0xa7, 0x45),
    }
}

/// Same color at the given opacity.
#[must_use]
pub const fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::from_rgba(color.r, color.g, color.b, alpha)
}
