//! Manual entry and JSON import form.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::{AddEmailMessage, Message};
use crate::model::AddEmailState;
use crate::style::widgets::palette;
use crate::style::{self, widgets};
use crate::view::common::heading;

const IMPORT_FORMAT_HINT: &str =
    r#"A JSON array such as [{"from": "a@x.com", "subject": "Hi", "content": "Body"}]. "sender" and "body" are accepted too."#;

/// Renders the add-email form.
pub fn view_add_email(form: &AddEmailState) -> Element<'static, Message> {
    let p = palette::current();

    let sender = field_row("From:", &form.sender, "sender@example.com", |s| {
        Message::AddEmail(AddEmailMessage::SenderChanged(s))
    });
    let subject = field_row("Subject:", &form.subject, "Subject line", |s| {
        Message::AddEmail(AddEmailMessage::SubjectChanged(s))
    });
    let body = field_row("Body:", &form.body, "Write or paste the email body...", |s| {
        Message::AddEmail(AddEmailMessage::BodyChanged(s))
    });

    let add = button(text("+ Add to inbox").size(14))
        .padding([10, 20])
        .style(widgets::primary_button_style)
        .on_press(Message::AddEmail(AddEmailMessage::Submit));

    let cancel = button(text("Cancel").size(14))
        .padding([10, 20])
        .style(widgets::secondary_button_style)
        .on_press(Message::AddEmail(AddEmailMessage::Cancel));

    let manual = card(
        "Add an email by hand",
        column![sender, subject, body, row![add, cancel].spacing(12)]
            .spacing(12)
            .into(),
    );

    let path = text_input("/path/to/emails.json", &form.import_path)
        .on_input(|s| Message::AddEmail(AddEmailMessage::ImportPathChanged(s)))
        .on_submit(Message::AddEmail(AddEmailMessage::Import))
        .padding(10)
        .size(14)
        .width(Length::Fill)
        .style(widgets::input_style);

    let import = button(text(if form.is_importing { "Importing..." } else { "Import JSON" }).size(14))
        .padding([10, 20])
        .style(widgets::primary_button_style)
        .on_press_maybe((!form.is_importing).then_some(Message::AddEmail(AddEmailMessage::Import)));

    let importer = card(
        "Import from a JSON file",
        column![
            row![path, import].spacing(12).align_y(Alignment::Center),
            text(IMPORT_FORMAT_HINT).size(12).color(p.text_muted),
        ]
        .spacing(10)
        .into(),
    );

    let status: Element<'static, Message> = form.error.as_ref().map_or_else(
        || Space::new().height(Length::Fixed(20.0)).into(),
        |error| text(error.clone()).size(14).color(p.danger).into(),
    );

    let content = column![heading("Add email", None), status, manual, importer]
        .spacing(16)
        .padding(24)
        .width(Length::Fill);

    scrollable(content)
        .height(Length::Fill)
        .style(widgets::scrollable_style)
        .into()
}

fn card(title: &'static str, body: Element<'static, Message>) -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text(title).size(15).font(style::SEMIBOLD).color(p.text_primary),
            body,
        ]
        .spacing(14),
    )
    .padding(20)
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}

/// Creates a labeled input field row.
fn field_row(
    label: &'static str,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> Message + 'static,
) -> Element<'static, Message> {
    let p = palette::current();
    let label_text = text(label)
        .size(14)
        .color(p.text_secondary)
        .width(Length::Fixed(80.0));

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10)
        .size(14)
        .width(Length::Fill)
        .style(widgets::input_style);

    row![label_text, input]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}
