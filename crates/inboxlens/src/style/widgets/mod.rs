//! Widget styles with shadows and rounded corners.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use palette::{band_color, category_color, with_alpha};

pub use shadows::radius;

pub use containers::{
    badge_style, bar_fill_style, bar_track_style, card_style, header_style, notice_style,
    page_style, soft_badge_style, sunken_style, table_header_style,
};

pub use buttons::{
    chip_button_style, danger_button_style, ghost_button_style, primary_button_style,
    row_button_style, secondary_button_style, tab_button_style,
};

pub use inputs::{input_style, scrollable_style};
