//! Emails stored on the backend for the current user.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use inboxlens_core::ProcessedEmail;
use inboxlens_core::time::format_timestamp;

use crate::message::{Message, ServerMessage};
use crate::model::ServerListState;
use crate::style::widgets::palette;
use crate::style::{self, widgets};
use crate::view::common::{category_badge, clip, empty_state, heading, importance_badge};
use crate::view::processed::category_chips;

/// Renders the server list view.
pub fn view_server_list(state: &ServerListState) -> Element<'static, Message> {
    let p = palette::current();

    let refresh = button(text(if state.is_loading { "Loading..." } else { "\u{21BB} Refresh" }).size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press_maybe((!state.is_loading).then_some(Message::Server(ServerMessage::Refresh)));

    let toolbar = row![
        heading("Stored on the server", Some(state.emails.len())),
        Space::new().width(Length::Fill),
        refresh,
    ]
    .align_y(Alignment::Center);

    let important = button(text("\u{2B50} Important only").size(12))
        .padding([6, 12])
        .style(widgets::chip_button_style(state.important_only, p.warning))
        .on_press(Message::Server(ServerMessage::ToggleImportantOnly));

    let filters = row![
        category_chips(&state.category, |f| Message::Server(ServerMessage::CategorySelected(f))),
        Space::new().width(Length::Fill),
        important,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let body: Element<'static, Message> = if let Some(error) = &state.error {
        container(
            column![
                text("Could not load stored emails").size(16).font(style::SEMIBOLD).color(p.danger),
                text(error.clone()).size(13).color(p.text_secondary),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(widgets::card_style)
        .into()
    } else if state.emails.is_empty() && !state.is_loading {
        empty_state(
            "\u{1F5C4}",
            "No stored emails",
            "Nothing on the server matches these filters for this session.",
            None,
        )
    } else {
        let rows = state
            .emails
            .iter()
            .fold(Column::new().spacing(6), |rows, email| rows.push(stored_row(email)));
        scrollable(rows)
            .height(Length::Fill)
            .style(widgets::scrollable_style)
            .into()
    };

    column![toolbar, filters, body]
        .spacing(12)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn stored_row(email: &ProcessedEmail) -> Element<'static, Message> {
    let p = palette::current();

    let cells = row![
        container(category_badge(&email.category)).width(Length::FillPortion(2)),
        column![
            text(clip(&email.subject, 80)).size(13).font(style::SEMIBOLD),
            text(clip(&email.sender, 50)).size(12).color(p.text_secondary),
        ]
        .spacing(2)
        .width(Length::FillPortion(6)),
        container(importance_badge(email.importance_score)).width(Length::FillPortion(2)),
        text(format_timestamp(email.processed_at))
            .size(12)
            .color(p.text_muted)
            .width(Length::FillPortion(2)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let open = button(cells)
        .width(Length::Fill)
        .padding([8, 12])
        .style(widgets::row_button_style(false))
        .on_press(Message::OpenDetail(email.id.clone()));

    let delete = button(text("\u{1F5D1}").size(13))
        .padding([6, 10])
        .style(widgets::ghost_button_style)
        .on_press_maybe(
            email
                .remote_id
                .clone()
                .map(|id| Message::Server(ServerMessage::Delete(id))),
        );

    row![open, delete].spacing(4).align_y(Alignment::Center).into()
}
