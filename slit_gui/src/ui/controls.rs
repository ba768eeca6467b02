//! Parameter controls (below the plot)
//!
//! One slider per control of the active model, the slit-width toggle and
//! the Reset button. Slider bounds come from [`ControlId::range`], so the
//! model never receives a value outside them from here.

use iced::widget::{button, checkbox, column, row, slider, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use slit_core::{ControlId, PatternSession};

use crate::Message;

/// Render sliders, toggle and reset button for the session's active variant
pub fn view_controls(session: &PatternSession) -> Element<'_, Message> {
    let variant = session.variant();

    let mut sliders: Column<'_, Message> = column![].spacing(6);
    for &id in variant.controls() {
        sliders = sliders.push(view_slider(id, session.control(id).value()));
    }

    let slit_width_toggle = checkbox(variant.uses_slit_width())
        .label("Spaltbreite berücksichtigen")
        .on_toggle(Message::ToggleSlitWidth)
        .text_size(11);

    let reset_button = button(text("Reset").size(12))
        .on_press(Message::Reset)
        .padding(Padding::from([6, 16]))
        .style(button::secondary);

    let side = column![reset_button, Space::new().height(6), slit_width_toggle]
        .spacing(4)
        .width(Length::Fixed(190.0));

    row![side, sliders.width(Length::Fill)]
        .spacing(12)
        .align_y(Alignment::Start)
        .into()
}

/// Labeled slider with its current value
fn view_slider(id: ControlId, value: f64) -> Element<'static, Message> {
    row![
        text(id.label()).size(11).width(Length::Fixed(170.0)),
        slider(id.range(), value, move |v| Message::ParameterChanged(id, v))
            .step(id.step())
            .width(Length::Fill),
        text(format_value(id, value)).size(11).width(Length::Fixed(90.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Current value with the precision its slider step resolves
fn format_value(id: ControlId, value: f64) -> String {
    match id {
        ControlId::Separation => format!("{:.3} {}", value, id.unit()),
        ControlId::Wavelength => format!("{:.0} {}", value, id.unit()),
        ControlId::SlitWidth => format!("{:.2} {}", value, id.unit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(ControlId::Separation, 0.155), "0.155 mm");
        assert_eq!(format_value(ControlId::Wavelength, 560.0), "560 nm");
        assert_eq!(format_value(ControlId::SlitWidth, 25.0), "25.00 µm");
    }
}
