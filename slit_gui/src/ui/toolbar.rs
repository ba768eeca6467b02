//! Header row: application title and the active intensity model.

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use slit_core::Variant;

use crate::Message;

/// Render the application header
pub fn view_header(title: &str, variant: Variant) -> Element<'_, Message> {
    row![
        text(title).size(22),
        Space::new().width(Length::Fill),
        text(variant.display_name()).size(12).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}
