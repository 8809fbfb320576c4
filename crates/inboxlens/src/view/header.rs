//! Header with tabs, backend status and session controls.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use inboxlens_core::UserSession;

use crate::message::{Message, View};
use crate::model::BackendHealth;
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::{self, widgets};

/// Counts shown next to tab labels.
#[derive(Debug, Clone, Copy)]
pub struct TabCounts {
    pub unprocessed: usize,
    pub processed: usize,
}

/// Renders the application header.
pub fn view_header(
    current: View,
    counts: TabCounts,
    health: &BackendHealth,
    session: Option<&UserSession>,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let p = palette::current();

    let title = text("\u{2709} InboxLens")
        .size(22)
        .font(style::BOLD)
        .color(p.primary);

    let tabs = View::TABS.iter().fold(row![].spacing(4), |tabs, &view| {
        let label = match view {
            View::Inbox => format!("{} ({})", view.title(), counts.unprocessed),
            View::Processed => format!("{} ({})", view.title(), counts.processed),
            _ => view.title().to_string(),
        };
        let active = current == view || (current == View::Detail && view == View::Processed);
        tabs.push(
            button(text(label).size(14))
                .padding([8, 14])
                .style(widgets::tab_button_style(active))
                .on_press(Message::NavigateTo(view)),
        )
    });

    let health_color = match health {
        BackendHealth::Checking => p.text_muted,
        BackendHealth::Online => p.success,
        BackendHealth::Degraded(_) => p.warning,
        BackendHealth::Offline(_) => p.danger,
    };
    let health_badge = container(text(format!("\u{25CF} {}", health.label())).size(11))
        .padding([4, 10])
        .style(widgets::soft_badge_style(health_color));

    let user = session.map_or_else(|| "Loading session...".to_string(), |s| format!("User {}", s.short_id()));
    let user_label = text(user).size(12).color(p.text_secondary);

    let reset = button(text("\u{21BB} New session").size(12))
        .padding([6, 10])
        .style(widgets::ghost_button_style)
        .on_press_maybe(session.map(|_| Message::ResetSession));

    let theme_glyph = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme_toggle = button(text(theme_glyph).size(16))
        .padding([6, 10])
        .style(widgets::secondary_button_style)
        .on_press(Message::ToggleTheme);

    let content = row![
        title,
        Space::new().width(Length::Fixed(16.0)),
        tabs,
        Space::new().width(Length::Fill),
        health_badge,
        user_label,
        reset,
        theme_toggle,
    ]
    .spacing(12)
    .padding([12, 20])
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .style(widgets::header_style)
        .into()
}
