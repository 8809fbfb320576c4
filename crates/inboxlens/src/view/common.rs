//! Small building blocks shared by several views.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use inboxlens_core::{Category, ImportanceBand};

use crate::message::Message;
use crate::style::{self, widgets};
use crate::style::widgets::palette;

/// Portions a bar is divided into.
const BAR_RESOLUTION: u16 = 1000;

/// Page heading with an optional trailing count.
pub fn heading(title: &str, count: Option<usize>) -> Element<'static, Message> {
    let p = palette::current();
    let mut heading = row![text(title.to_string()).size(24).font(style::BOLD).color(p.text_primary)]
        .spacing(10)
        .align_y(Alignment::Center);
    if let Some(count) = count {
        heading = heading.push(
            container(text(count.to_string()).size(12))
                .padding([2, 10])
                .style(widgets::soft_badge_style(p.primary)),
        );
    }
    heading.into()
}

/// Colored category pill.
pub fn category_badge(category: &Category) -> Element<'static, Message> {
    container(text(category.display_name().to_string()).size(11).font(style::SEMIBOLD))
        .padding([3, 10])
        .style(widgets::badge_style(widgets::category_color(category)))
        .into()
}

/// Importance pill such as "🟠 High · 62".
pub fn importance_badge(score: u8) -> Element<'static, Message> {
    let band = ImportanceBand::from_score(score);
    container(text(format!("{} {} \u{00B7} {score}", band.icon(), band.label())).size(11))
        .padding([3, 10])
        .style(widgets::soft_badge_style(widgets::band_color(band)))
        .into()
}

/// Neutral outlined pill.
pub fn tag(label: String) -> Element<'static, Message> {
    let p = palette::current();
    container(text(label).size(11))
        .padding([3, 10])
        .style(widgets::soft_badge_style(p.text_secondary))
        .into()
}

/// Horizontal bar filled to `percent` of its width.
pub fn percentage_bar(percent: f64, color: iced::Color) -> Element<'static, Message> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=1000
    let filled = (percent.clamp(0.0, 100.0) * f64::from(BAR_RESOLUTION) / 100.0).round() as u16;
    let rest = BAR_RESOLUTION - filled;

    let mut bar = row![];
    if filled > 0 {
        bar = bar.push(
            container(Space::new().height(Length::Fixed(10.0)))
                .width(Length::FillPortion(filled))
                .style(widgets::bar_fill_style(color)),
        );
    }
    if rest > 0 {
        bar = bar.push(Space::new().width(Length::FillPortion(rest)));
    }

    container(bar)
        .width(Length::Fill)
        .style(widgets::bar_track_style)
        .into()
}

/// Centered placeholder for empty lists.
pub fn empty_state(
    icon: &'static str,
    title: &str,
    hint: &str,
    action: Option<(&'static str, Message)>,
) -> Element<'static, Message> {
    let p = palette::current();
    let mut content = column![
        text(icon).size(48),
        text(title.to_string()).size(18).font(style::SEMIBOLD).color(p.text_primary),
        text(hint.to_string()).size(14).color(p.text_secondary),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    if let Some((label, message)) = action {
        content = content.push(
            button(text(label).size(14))
                .padding([10, 20])
                .style(widgets::primary_button_style)
                .on_press(message),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Shortens `value` to `max_chars` characters, marking the cut.
pub fn clip(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(max_chars).collect();
    clipped.push('\u{2026}');
    clipped
}

/// Selection glyph for checkbox-like buttons.
pub const fn check_glyph(checked: bool) -> &'static str {
    if checked { "\u{2611}" } else { "\u{2610}" }
}
