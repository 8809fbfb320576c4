//! Dismissable notice banner.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::model::{Notice, NoticeKind};
use crate::style::widgets::{self, palette};

/// Renders the banner for `notice`.
pub fn view_notice(notice: &Notice) -> Element<'static, Message> {
    let p = palette::current();
    let color = match notice.kind {
        NoticeKind::Info => p.info,
        NoticeKind::Success => p.success,
        NoticeKind::Warning => p.warning,
        NoticeKind::Error => p.danger,
    };

    let content = row![
        text(notice.icon()).size(16).color(color),
        text(notice.text.clone()).size(14),
        Space::new().width(Length::Fill),
        button(text("\u{2715}").size(12))
            .padding([4, 8])
            .style(widgets::ghost_button_style)
            .on_press(Message::DismissNotice),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(content)
        .padding([8, 14])
        .width(Length::Fill)
        .style(widgets::notice_style(color))
        .into()
}
