//! Inbox staging table.

use chrono::{DateTime, Utc};
use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use inboxlens_core::InboxState;
use inboxlens_core::time::relative_time;

use crate::message::{InboxMessage, Message, View};
use crate::style::widgets::{self, palette};
use crate::view::common::{check_glyph, clip, empty_state, heading};

const SENDER_PORTION: u16 = 3;
const SUBJECT_PORTION: u16 = 4;
const PREVIEW_PORTION: u16 = 6;
const RECEIVED_PORTION: u16 = 2;

/// Renders the staged emails with selection and processing controls.
pub fn view_inbox(inbox: &InboxState, now: DateTime<Utc>) -> Element<'static, Message> {
    let p = palette::current();
    let selected = inbox.selected().len();
    let processing = inbox.is_processing();

    let select_all_label = if inbox.all_selected() {
        "\u{2610} Clear selection"
    } else {
        "\u{2611} Select all"
    };
    let select_all = button(text(select_all_label).size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press_maybe((!inbox.is_empty() && !processing).then_some(Message::Inbox(InboxMessage::ToggleAll)));

    let process_label = if processing {
        "\u{23F3} Processing...".to_string()
    } else {
        format!("\u{26A1} Process selected ({selected})")
    };
    let process = button(text(process_label).size(13))
        .padding([8, 16])
        .style(widgets::primary_button_style)
        .on_press_maybe((selected > 0 && !processing).then_some(Message::Inbox(InboxMessage::Process)));

    let samples = button(text("Load samples").size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press_maybe((!processing).then_some(Message::Inbox(InboxMessage::LoadSamples)));

    let add = button(text("+ Add email").size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press(Message::NavigateTo(View::AddEmail));

    let clear = button(text("Clear all").size(13))
        .padding([8, 14])
        .style(widgets::danger_button_style)
        .on_press_maybe((!inbox.is_empty() && !processing).then_some(Message::Inbox(InboxMessage::ClearAll)));

    let toolbar = row![
        heading("Unprocessed emails", Some(inbox.len())),
        Space::new().width(Length::Fill),
        select_all,
        samples,
        add,
        clear,
        process,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body: Element<'static, Message> = if inbox.is_empty() {
        empty_state(
            "\u{1F4ED}",
            "The inbox is empty",
            "Load the sample emails, add one by hand or import a JSON file.",
            Some(("Load samples", Message::Inbox(InboxMessage::LoadSamples))),
        )
    } else {
        let header = container(
            row![
                Space::new().width(Length::Fixed(28.0)),
                column_label("Sender", SENDER_PORTION),
                column_label("Subject", SUBJECT_PORTION),
                column_label("Preview", PREVIEW_PORTION),
                column_label("Received", RECEIVED_PORTION),
                Space::new().width(Length::Fixed(36.0)),
            ]
            .spacing(12),
        )
        .padding([8, 12])
        .style(widgets::table_header_style);

        let rows = inbox.emails().iter().fold(Column::new().spacing(6), |rows, email| {
            let is_selected = inbox.is_selected(&email.id);
            let cells = row![
                text(check_glyph(is_selected)).size(16).width(Length::Fixed(16.0)),
                text(clip(&email.sender, 40))
                    .size(13)
                    .width(Length::FillPortion(SENDER_PORTION)),
                text(clip(&email.subject, 60))
                    .size(13)
                    .font(crate::style::SEMIBOLD)
                    .width(Length::FillPortion(SUBJECT_PORTION)),
                text(email.preview(90))
                    .size(12)
                    .color(p.text_secondary)
                    .width(Length::FillPortion(PREVIEW_PORTION)),
                text(relative_time(email.received_at, now))
                    .size(12)
                    .color(p.text_muted)
                    .width(Length::FillPortion(RECEIVED_PORTION)),
            ]
            .spacing(12)
            .align_y(Alignment::Center);

            let toggle = button(cells)
                .width(Length::Fill)
                .padding([10, 12])
                .style(widgets::row_button_style(is_selected))
                .on_press_maybe((!processing).then(|| Message::Inbox(InboxMessage::Toggle(email.id.clone()))));

            let remove = button(text("\u{2715}").size(12))
                .padding([6, 10])
                .style(widgets::ghost_button_style)
                .on_press_maybe((!processing).then(|| Message::Inbox(InboxMessage::Remove(email.id.clone()))));

            rows.push(row![toggle, remove].spacing(4).align_y(Alignment::Center))
        });

        column![
            header,
            scrollable(rows)
                .height(Length::Fill)
                .style(widgets::scrollable_style),
        ]
        .spacing(8)
        .into()
    };

    let hint = text(if selected == 0 {
        "Select emails and press Process (Ctrl+Enter). Ctrl+A selects everything.".to_string()
    } else {
        format!("{selected} selected")
    })
    .size(12)
    .color(p.text_muted);

    column![toolbar, hint, body]
        .spacing(12)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn column_label(label: &'static str, portion: u16) -> Element<'static, Message> {
    text(label)
        .size(12)
        .font(crate::style::SEMIBOLD)
        .width(Length::FillPortion(portion))
        .into()
}
