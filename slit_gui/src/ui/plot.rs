//! Canvas drawing for the intensity curve
//!
//! Renders the sampled curve as a red line over the fixed grid range, with
//! a framed axis box, tick labels on both axes and the axis titles.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use slit_core::PatternSession;

use crate::Message;

const X_LABEL: &str = "Abstand zwischen Maxima [m]";
const Y_LABEL: &str = "Intensität I(θ)/I₀";

const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 26.0;
const MARGIN_BOTTOM: f32 = 44.0;

const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

/// Render the plot canvas for the session's current curve
pub fn view_plot(session: &PatternSession) -> Element<'_, Message> {
    let grid = session.grid();
    let plot = IntensityPlot {
        angles: grid.angles(),
        values: session.curve().values(),
        x_min: grid.start(),
        x_max: grid.end(),
    };

    Canvas::new(plot)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Canvas program borrowing the grid and the curve
pub struct IntensityPlot<'a> {
    angles: &'a [f64],
    values: &'a [f64],
    x_min: f64,
    x_max: f64,
}

/// Pixel rectangle inside the margins, with data-to-screen mapping
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    x_min: f64,
    x_max: f64,
}

impl PlotArea {
    fn new(bounds_width: f32, bounds_height: f32, x_min: f64, x_max: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (bounds_width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (bounds_height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            x_min,
            x_max,
        }
    }

    fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn right(&self) -> f32 {
        self.left + self.width
    }

    fn x(&self, value: f64) -> f32 {
        let span = self.x_max - self.x_min;
        if span <= 0.0 {
            return self.left;
        }
        self.left + ((value - self.x_min) / span) as f32 * self.width
    }

    /// Intensity is plotted on a fixed [0, 1] axis
    fn y(&self, intensity: f64) -> f32 {
        self.bottom() - intensity.clamp(0.0, 1.0) as f32 * self.height
    }
}

impl<'a> IntensityPlot<'a> {
    fn draw_axes(&self, frame: &mut Frame, area: &PlotArea, axis_color: Color, grid_color: Color) {
        let frame_box = Path::rectangle(
            Point::new(area.left, area.top),
            iced::Size::new(area.width, area.height),
        );
        frame.stroke(&frame_box, Stroke::default().with_color(axis_color).with_width(1.0));

        // Y ticks at 0.0, 0.2, ... 1.0
        for i in 0..=Y_TICKS {
            let value = i as f64 / Y_TICKS as f64;
            let py = area.y(value);

            if i > 0 && i < Y_TICKS {
                let guide = Path::line(Point::new(area.left, py), Point::new(area.right(), py));
                frame.stroke(&guide, Stroke::default().with_color(grid_color).with_width(1.0));
            }

            let tick = Path::line(Point::new(area.left - 4.0, py), Point::new(area.left, py));
            frame.stroke(&tick, Stroke::default().with_color(axis_color).with_width(1.0));

            frame.fill_text(Text {
                content: format!("{:.1}", value),
                position: Point::new(area.left - 8.0, py - 6.0),
                color: axis_color,
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Right.into(),
                ..Text::default()
            });
        }

        // X ticks evenly spread over the grid range
        for i in 0..=X_TICKS {
            let value = area.x_min + (area.x_max - area.x_min) * i as f64 / X_TICKS as f64;
            let px = area.x(value);

            let tick = Path::line(Point::new(px, area.bottom()), Point::new(px, area.bottom() + 4.0));
            frame.stroke(&tick, Stroke::default().with_color(axis_color).with_width(1.0));

            frame.fill_text(Text {
                content: format!("{:.3}", value),
                position: Point::new(px, area.bottom() + 6.0),
                color: axis_color,
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }

        frame.fill_text(Text {
            content: X_LABEL.to_string(),
            position: Point::new(area.left + area.width / 2.0, area.bottom() + 24.0),
            color: axis_color,
            size: iced::Pixels(12.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        frame.fill_text(Text {
            content: Y_LABEL.to_string(),
            position: Point::new(area.left, area.top - 20.0),
            color: axis_color,
            size: iced::Pixels(12.0),
            ..Text::default()
        });
    }

    fn draw_curve(&self, frame: &mut Frame, area: &PlotArea, color: Color) {
        let mut points = self.angles.iter().zip(self.values.iter());
        let Some((&first_x, &first_y)) = points.next() else {
            return;
        };

        let curve = Path::new(|builder| {
            builder.move_to(Point::new(area.x(first_x), area.y(first_y)));
            for (&x, &y) in points {
                builder.line_to(Point::new(area.x(x), area.y(y)));
            }
        });
        frame.stroke(&curve, Stroke::default().with_color(color).with_width(2.0));
    }
}

impl<'a> canvas::Program<Message> for IntensityPlot<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = PlotArea::new(bounds.width, bounds.height, self.x_min, self.x_max);

        let axis_color = Color::from_rgb(0.35, 0.35, 0.35);
        let grid_color = Color::from_rgba(0.5, 0.5, 0.5, 0.25);
        let curve_color = Color::from_rgb(0.85, 0.1, 0.1);

        self.draw_axes(&mut frame, &area, axis_color, grid_color);
        self.draw_curve(&mut frame, &area, curve_color);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_mapping() {
        let area = PlotArea::new(
            MARGIN_LEFT + 100.0 + MARGIN_RIGHT,
            MARGIN_TOP + 50.0 + MARGIN_BOTTOM,
            -1.0,
            1.0,
        );
        assert_eq!(area.x(-1.0), MARGIN_LEFT);
        assert_eq!(area.x(1.0), MARGIN_LEFT + 100.0);
        assert_eq!(area.y(0.0), MARGIN_TOP + 50.0);
        assert_eq!(area.y(1.0), MARGIN_TOP);
        // Out-of-range intensities stay inside the box
        assert_eq!(area.y(2.0), MARGIN_TOP);
    }
}
