//! Full analysis of one processed email.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use inboxlens_core::time::format_timestamp;
use inboxlens_core::{Capabilities, Feature, ProcessedEmail};

use crate::message::{DetailMessage, Message};
use crate::style::widgets::palette;
use crate::style::{self, widgets};
use crate::view::common::{category_badge, importance_badge, percentage_bar, tag};

/// Everything the detail view shows besides the email itself.
#[derive(Debug, Clone)]
pub struct DetailProps {
    /// Resolved reply text.
    pub reply: String,
    pub copied: bool,
    pub show_raw: bool,
    pub capabilities: Capabilities,
    pub is_deleting: bool,
}

/// Renders the detail view.
pub fn view_detail(email: &ProcessedEmail, props: DetailProps) -> Element<'static, Message> {
    let p = palette::current();

    let back = button(text("\u{2190} Back").size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press(Message::Detail(DetailMessage::Back));

    let delete = button(text(if props.is_deleting { "Deleting..." } else { "\u{1F5D1} Delete" }).size(13))
        .padding([8, 14])
        .style(widgets::danger_button_style)
        .on_press_maybe((!props.is_deleting).then_some(Message::Detail(DetailMessage::Delete)));

    let toolbar = row![back, Space::new().width(Length::Fill), delete].align_y(Alignment::Center);

    let subject = if email.subject.is_empty() {
        "(no subject)".to_string()
    } else {
        email.subject.clone()
    };

    let mut badges = row![category_badge(&email.category), importance_badge(email.importance_score)]
        .spacing(6)
        .align_y(Alignment::Center);
    if email.is_important {
        badges = badges.push(tag("\u{2B50} Important".to_string()));
    }
    if let Some(tone) = &email.tone {
        badges = badges.push(tag(format!("Tone: {tone}")));
    }
    if let Some(formality) = &email.formality {
        badges = badges.push(tag(format!("Formality: {formality}")));
    }
    if let Some(confidence) = email.classification_confidence {
        badges = badges.push(tag(format!("{:.0}% confidence", confidence * 100.0)));
    }

    let meta = column![
        meta_line("From", email.sender.clone()),
        meta_line("Received", format_timestamp(email.received_at)),
        meta_line("Processed", format_timestamp(email.processed_at)),
    ]
    .spacing(4);

    let band = email.band();
    let importance = section(
        "Importance",
        column![
            row![
                text(format!("{} {}", band.icon(), band.label())).size(14).font(style::SEMIBOLD),
                Space::new().width(Length::Fill),
                text(format!("{}/100", email.importance_score)).size(13).color(p.text_secondary),
            ],
            percentage_bar(f64::from(email.importance_score), widgets::band_color(band)),
        ]
        .spacing(8)
        .into(),
    );

    let summary = section(
        "Summary",
        text(if email.summary.is_empty() {
            "No summary available.".to_string()
        } else {
            email.summary.clone()
        })
        .size(14)
        .into(),
    );

    let mut sections = column![
        toolbar,
        text(subject).size(24).font(style::BOLD).color(p.text_primary),
        badges,
        meta,
        importance,
        summary,
    ]
    .spacing(16);

    if !email.key_points.is_empty() {
        sections = sections.push(section("Key points", bullet_list("\u{2022}", &email.key_points)));
    }
    if !email.action_items.is_empty() {
        sections = sections.push(section("Action items", bullet_list("\u{2610}", &email.action_items)));
    }
    if !email.suggested_actions.is_empty() {
        let actions = email
            .suggested_actions
            .iter()
            .fold(row![].spacing(6), |chips, action| chips.push(tag(action.replace('_', " "))));
        sections = sections.push(section("Suggested actions", actions.into()));
    }

    sections = sections.push(section("Suggested reply", reply_panel(&props)));

    let raw_label = if props.show_raw {
        "Hide original email"
    } else {
        "Show original email"
    };
    sections = sections.push(
        button(text(raw_label).size(13))
            .padding([6, 12])
            .style(widgets::ghost_button_style)
            .on_press(Message::Detail(DetailMessage::ToggleRaw)),
    );
    if props.show_raw {
        sections = sections.push(
            container(text(email.body.clone()).size(13))
                .padding(16)
                .width(Length::Fill)
                .style(widgets::sunken_style),
        );
    }

    scrollable(container(sections).padding(24).width(Length::Fill))
        .height(Length::Fill)
        .style(widgets::scrollable_style)
        .into()
}

fn reply_panel(props: &DetailProps) -> Element<'static, Message> {
    let p = palette::current();

    let draft = container(text(props.reply.clone()).size(14))
        .padding(16)
        .width(Length::Fill)
        .style(widgets::sunken_style);

    let copy = button(text("\u{1F4CB} Copy reply").size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press(Message::Detail(DetailMessage::CopyReply));

    let copy_full = button(text("\u{1F4CB} Copy with headers").size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press(Message::Detail(DetailMessage::CopyFullReply));

    let mut actions = row![copy, copy_full].spacing(8).align_y(Alignment::Center);
    if props.copied {
        actions = actions.push(text("\u{2714} Copied!").size(13).color(p.success));
    }
    actions = actions.push(Space::new().width(Length::Fill));

    for feature in [Feature::SendNow, Feature::ScheduleSend] {
        let style = if props.capabilities.is_enabled(feature) {
            widgets::primary_button_style
        } else {
            widgets::secondary_button_style
        };
        actions = actions.push(
            button(text(feature.label()).size(13))
                .padding([8, 14])
                .style(style)
                .on_press(Message::Detail(DetailMessage::Feature(feature))),
        );
    }

    column![draft, actions].spacing(10).into()
}

fn section(title: &'static str, body: Element<'static, Message>) -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text(title).size(13).font(style::SEMIBOLD).color(p.text_secondary),
            body,
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}

fn bullet_list(bullet: &'static str, items: &[String]) -> Element<'static, Message> {
    items
        .iter()
        .fold(Column::new().spacing(6), |list, item| {
            list.push(row![text(bullet).size(14), text(item.clone()).size(14)].spacing(8))
        })
        .into()
}

fn meta_line(label: &'static str, value: String) -> Element<'static, Message> {
    let p = palette::current();
    row![
        text(label).size(12).color(p.text_muted).width(Length::Fixed(80.0)),
        text(value).size(13).color(p.text_primary),
    ]
    .spacing(8)
    .into()
}
