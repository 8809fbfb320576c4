//! Processed results: filters, summary strip and cards or table.

use iced::widget::{Column, Row, Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};
use inboxlens_core::{
    Category, CategoryFilter, ProcessedEmail, ProcessedSet, ResultsSummary, apply_filter,
};
use inboxlens_core::time::format_timestamp;

use crate::message::{Message, ResultsMessage, View};
use crate::model::{Layout, ResultsViewState};
use crate::style::{self, widgets};
use crate::style::widgets::palette;
use crate::view::common::{category_badge, clip, empty_state, heading, importance_badge, tag};

const CARDS_PER_ROW: usize = 2;

/// Renders the processed results view.
pub fn view_processed(set: &ProcessedSet, state: &ResultsViewState) -> Element<'static, Message> {
    if set.is_empty() {
        return container(empty_state(
            "\u{1F4CA}",
            "No processed emails yet",
            "Select emails in the inbox and process them to see the analysis here.",
            Some(("Go to inbox", Message::NavigateTo(View::Inbox))),
        ))
        .padding(24)
        .into();
    }

    let p = palette::current();
    let shown = apply_filter(set, &state.filter, state.layout.sort_order());
    let summary = ResultsSummary::compute(set.as_slice(), shown.len());

    let layout_toggle = button(text(state.layout.switch_label()).size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press(Message::Results(ResultsMessage::ToggleLayout));

    let toolbar = row![
        heading("Processed emails", Some(set.len())),
        Space::new().width(Length::Fill),
        layout_toggle,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let search = text_input("Search subject, sender or summary...", &state.filter.search)
        .on_input(|s| Message::Results(ResultsMessage::SearchChanged(s)))
        .padding([10, 14])
        .size(14)
        .width(Length::Fixed(320.0))
        .style(widgets::input_style);

    let important = button(text("\u{2B50} Important only").size(12))
        .padding([6, 12])
        .style(widgets::chip_button_style(state.filter.important_only, p.warning))
        .on_press(Message::Results(ResultsMessage::ToggleImportantOnly));

    let filters = row![
        category_chips(&state.filter.category, |f| {
            Message::Results(ResultsMessage::CategorySelected(f))
        }),
        Space::new().width(Length::Fill),
        important,
        search,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let summary_line = text(format!(
        "Showing {} of {} \u{00B7} {} important \u{00B7} {} need a reply \u{00B7} {} categories",
        summary.shown, summary.total, summary.important, summary.needs_reply, summary.categories
    ))
    .size(12)
    .color(p.text_secondary);

    let body: Element<'static, Message> = if shown.is_empty() {
        empty_state(
            "\u{1F50D}",
            "No emails match the current filters",
            "Try another category or clear the search.",
            None,
        )
    } else {
        let content = match state.layout {
            Layout::Cards => cards(&shown),
            Layout::Table => table(&shown),
        };
        scrollable(content)
            .height(Length::Fill)
            .style(widgets::scrollable_style)
            .into()
    };

    let process_more = button(text("\u{2190} Back to inbox").size(12))
        .padding([6, 10])
        .style(widgets::ghost_button_style)
        .on_press(Message::NavigateTo(View::Inbox));

    let strip = row![summary_line, Space::new().width(Length::Fill), process_more].align_y(Alignment::Center);

    column![toolbar, filters, strip, body]
        .spacing(12)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// "All" plus one chip per known category.
pub fn category_chips(
    active: &CategoryFilter,
    on_select: impl Fn(CategoryFilter) -> Message,
) -> Element<'static, Message> {
    let p = palette::current();
    let all = button(text("All").size(12))
        .padding([6, 12])
        .style(widgets::chip_button_style(*active == CategoryFilter::All, p.primary))
        .on_press(on_select(CategoryFilter::All));

    Category::ALL
        .into_iter()
        .fold(Row::new().spacing(6).push(all), |chips, category| {
            let filter = CategoryFilter::Only(category.clone());
            let is_active = *active == filter;
            chips.push(
                button(text(category.display_name().to_string()).size(12))
                    .padding([6, 12])
                    .style(widgets::chip_button_style(is_active, widgets::category_color(&category)))
                    .on_press(on_select(filter)),
            )
        })
        .into()
}

fn cards(emails: &[&ProcessedEmail]) -> Element<'static, Message> {
    emails
        .chunks(CARDS_PER_ROW)
        .fold(Column::new().spacing(12), |grid, chunk| {
            let mut line = chunk
                .iter()
                .fold(Row::new().spacing(12), |line, email| line.push(card(email)));
            for _ in chunk.len()..CARDS_PER_ROW {
                line = line.push(Space::new().width(Length::Fill));
            }
            grid.push(line)
        })
        .into()
}

fn card(email: &ProcessedEmail) -> Element<'static, Message> {
    let p = palette::current();

    let mut badges = row![
        category_badge(&email.category),
        Space::new().width(Length::Fill),
        importance_badge(email.importance_score),
    ]
    .spacing(6)
    .align_y(Alignment::Center);
    if email.is_important {
        badges = badges.push(text("\u{2B50}").size(14));
    }

    let mut footer = row![].spacing(6);
    if let Some(tone) = &email.tone {
        footer = footer.push(tag(tone.clone()));
    }
    if email.needs_reply() {
        footer = footer.push(tag("\u{21A9} Needs reply".to_string()));
    }

    let content = column![
        badges,
        text(clip(&email.subject, 80)).size(15).font(style::SEMIBOLD),
        text(email.sender.clone()).size(12).color(p.text_secondary),
        text(clip(&email.summary, 180)).size(13).color(p.text_primary),
        footer,
    ]
    .spacing(8);

    button(content)
        .width(Length::Fill)
        .padding(16)
        .style(widgets::row_button_style(false))
        .on_press(Message::OpenDetail(email.id.clone()))
        .into()
}

fn table(emails: &[&ProcessedEmail]) -> Element<'static, Message> {
    let header = container(
        row![
            cell_label("Category", 2),
            cell_label("Subject", 5),
            cell_label("Sender", 3),
            cell_label("Importance", 2),
            cell_label("Tone", 2),
            cell_label("Processed", 2),
        ]
        .spacing(12),
    )
    .padding([8, 12])
    .style(widgets::table_header_style);

    emails
        .iter()
        .fold(Column::new().spacing(4).push(header), |rows, email| {
            let p = palette::current();
            let cells = row![
                container(category_badge(&email.category)).width(Length::FillPortion(2)),
                text(clip(&email.subject, 70))
                    .size(13)
                    .width(Length::FillPortion(5)),
                text(clip(&email.sender, 40))
                    .size(12)
                    .color(p.text_secondary)
                    .width(Length::FillPortion(3)),
                container(importance_badge(email.importance_score)).width(Length::FillPortion(2)),
                text(email.tone.clone().unwrap_or_else(|| "-".to_string()))
                    .size(12)
                    .width(Length::FillPortion(2)),
                text(format_timestamp(email.processed_at))
                    .size(12)
                    .color(p.text_muted)
                    .width(Length::FillPortion(2)),
            ]
            .spacing(12)
            .align_y(Alignment::Center);

            rows.push(
                button(cells)
                    .width(Length::Fill)
                    .padding([8, 12])
                    .style(widgets::row_button_style(false))
                    .on_press(Message::OpenDetail(email.id.clone())),
            )
        })
        .into()
}

fn cell_label(label: &'static str, portion: u16) -> Element<'static, Message> {
    text(label)
        .size(12)
        .font(style::SEMIBOLD)
        .width(Length::FillPortion(portion))
        .into()
}
