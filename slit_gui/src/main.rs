//! # Doppelspalt GUI Application
//!
//! Interactive view of the double-slit intensity pattern. Sliders move the
//! slit separation, wavelength and slit width; every change recomputes the
//! full curve and the canvas redraws from the new state.
//!
//! Built with Iced. All state lives in [`App`], which owns a
//! [`PatternSession`]; there are no globals.

mod ui;

use iced::widget::{column, container};
use iced::{Element, Length, Size};

use slit_core::analysis::PatternSummary;
use slit_core::{ControlId, PatternSession, Variant};

/// Window title
pub const TITLE: &str = "Beugung am Doppelspalt";

/// Application state
pub struct App {
    pub session: PatternSession,
    /// Landmarks of the curve currently on screen
    pub summary: PatternSummary,
    /// Last rejected input, cleared by the next accepted change
    pub error_message: Option<String>,
}

/// UI events. Each control identity maps to exactly one handler arm in
/// [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    ParameterChanged(ControlId, f64),
    Reset,
    ToggleSlitWidth(bool),
}

impl App {
    pub fn new(session: PatternSession) -> Self {
        let summary = session.summary();
        Self {
            session,
            summary,
            error_message: None,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ParameterChanged(id, value) => match self.session.set_control(id, value) {
                Ok(_) => self.error_message = None,
                Err(err) => self.error_message = Some(err.to_string()),
            },
            Message::Reset => {
                self.session.reset();
                self.error_message = None;
            }
            Message::ToggleSlitWidth(enabled) => {
                let variant = if enabled {
                    Variant::ThreeParameter
                } else {
                    Variant::TwoParameter
                };
                self.session.set_variant(variant);
            }
        }
        self.summary = self.session.summary();
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(TITLE, self.session.variant()),
            ui::plot::view_plot(&self.session),
            ui::controls::view_controls(&self.session),
            ui::status_bar::view_status_bar(&self.summary, self.error_message.as_deref()),
        ]
        .spacing(8);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(12)
            .into()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let session = PatternSession::with_defaults()?;
    log::info!(
        "starting with {} angle samples, {}",
        session.grid().len(),
        session.parameters()
    );

    iced::application(move || App::new(session.clone()), App::update, App::view)
        .title(TITLE)
        .window_size(Size::new(1000.0, 760.0))
        .run()?;

    Ok(())
}
