//! Aggregate statistics for the current user.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use inboxlens_core::StatsView;

use crate::message::Message;
use crate::model::StatsState;
use crate::style::widgets::palette;
use crate::style::{self, widgets};
use crate::view::common::{empty_state, heading, percentage_bar};

/// Renders the statistics view.
pub fn view_stats(state: &StatsState) -> Element<'static, Message> {
    let p = palette::current();

    let refresh = button(text("\u{21BB} Refresh").size(13))
        .padding([8, 14])
        .style(widgets::secondary_button_style)
        .on_press_maybe((*state != StatsState::Loading).then_some(Message::RefreshStats));

    let toolbar = row![heading("Statistics", None), Space::new().width(Length::Fill), refresh]
        .align_y(Alignment::Center);

    let body: Element<'static, Message> = match state {
        StatsState::Idle => empty_state(
            "\u{1F4C8}",
            "No statistics loaded",
            "Press F5 to load them.",
            Some(("Load", Message::RefreshStats)),
        ),
        StatsState::Loading => empty_state("\u{23F3}", "Loading statistics...", "", None),
        StatsState::Failed(err) => container(
            column![
                text("Could not load statistics").size(16).font(style::SEMIBOLD).color(p.danger),
                text(err.clone()).size(13).color(p.text_secondary),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(widgets::card_style)
        .into(),
        StatsState::Loaded(view) if view.is_empty() => empty_state(
            "\u{1F4ED}",
            "Nothing analyzed yet",
            "Process some emails and their statistics will show up here.",
            None,
        ),
        StatsState::Loaded(view) => loaded(view),
    };

    column![toolbar, body]
        .spacing(16)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loaded(view: &StatsView) -> Element<'static, Message> {
    let p = palette::current();

    let tiles = row![
        tile("Total emails", view.total.to_string(), p.primary),
        tile("Important", view.important.to_string(), p.warning),
        tile("Important ratio", view.important_ratio.clone(), p.danger),
    ]
    .spacing(12);

    let bars = view.rows.iter().fold(Column::new().spacing(10), |bars, row_data| {
        let color = widgets::category_color(&row_data.category);
        bars.push(
            row![
                text(row_data.category.display_name().to_string())
                    .size(13)
                    .width(Length::Fixed(120.0)),
                percentage_bar(row_data.percentage, color),
                text(format!("{} ({})", row_data.count, row_data.percentage_label))
                    .size(12)
                    .color(p.text_secondary)
                    .width(Length::Fixed(90.0)),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
    });

    let breakdown = container(
        column![
            text("By category").size(13).font(style::SEMIBOLD).color(p.text_secondary),
            bars,
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(widgets::card_style);

    column![tiles, breakdown].spacing(16).into()
}

fn tile(label: &'static str, value: String, accent: iced::Color) -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text(value).size(28).font(style::BOLD).color(accent),
            text(label).size(12).color(p.text_secondary),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}
