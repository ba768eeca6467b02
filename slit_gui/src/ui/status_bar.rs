//! Status Bar (Bottom)
//!
//! Displays:
//! - Fringe spacing on the screen
//! - First diffraction zero and fringe count in the central envelope
//! - Number of angle samples
//! - The last rejected input, if any

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use slit_core::analysis::PatternSummary;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(summary: &'a PatternSummary, error: Option<&'a str>) -> Element<'a, Message> {
    let envelope_info = match (summary.first_diffraction_zero_rad, summary.fringes_in_central_envelope) {
        (Some(zero), Some(fringes)) => format!(
            "1. Beugungsminimum: {:.3}°  |  Streifen im Hauptmaximum: {}",
            zero.to_degrees(),
            fringes
        ),
        (None, Some(fringes)) => format!("Streifen im Hauptmaximum: {}", fringes),
        _ => String::new(),
    };

    let message = error.unwrap_or_default();

    row![
        text(format!(
            "Abstand zwischen Maxima: {:.3} mm",
            summary.fringe_spacing_m * 1e3
        ))
        .size(10),
        Space::new().width(16),
        text(envelope_info).size(10),
        Space::new().width(Length::Fill),
        text(message).size(10).color([0.8, 0.2, 0.2]),
        Space::new().width(16),
        text(format!("{} Stützstellen", summary.samples)).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
