//! Canvas programs for the dashboard charts.

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Point, Radians, Rectangle, Renderer, Size, Theme};
use vitals_theme::Palette;

/// Polyline chart over the CPU and memory rolling histories.
///
/// The x axis is scaled to the history capacity, so the trace grows
/// rightward while the window fills and scrolls once eviction starts.
/// The y axis is fixed at 0–100%.
#[derive(Debug)]
pub struct HistoryChart {
    pub cpu: Vec<f64>,
    pub mem: Vec<f64>,
    pub capacity: usize,
    pub palette: &'static Palette,
}

impl<Message> canvas::Program<Message> for HistoryChart {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = frame.size();

        frame.fill_rectangle(Point::ORIGIN, size, self.palette.surface.to_iced());

        // Grid lines at 25 / 50 / 75%.
        for fraction in [0.25_f32, 0.5, 0.75] {
            let y = size.height * (1.0 - fraction);
            let line = Path::line(Point::new(0.0, y), Point::new(size.width, y));
            frame.stroke(
                &line,
                Stroke::default()
                    .with_color(self.palette.grid.to_iced())
                    .with_width(1.0),
            );
        }

        for (series, color) in [
            (&self.cpu, self.palette.cpu_series),
            (&self.mem, self.palette.mem_series),
        ] {
            if let Some(path) = polyline(series, self.capacity, size) {
                frame.stroke(
                    &path,
                    Stroke::default().with_color(color.to_iced()).with_width(2.0),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Scaled polyline for one percentage series, `None` when there are fewer
/// than two points to connect.
fn polyline(series: &[f64], capacity: usize, size: Size) -> Option<Path> {
    if series.len() < 2 {
        return None;
    }

    let step = size.width / (capacity.max(2) - 1) as f32;
    let points: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(i, &pct)| {
            let y = size.height * (1.0 - (pct as f32 / 100.0).clamp(0.0, 1.0));
            Point::new(i as f32 * step, y)
        })
        .collect();

    Some(Path::new(|builder| {
        builder.move_to(points[0]);
        for point in &points[1..] {
            builder.line_to(*point);
        }
    }))
}

/// Pie chart of disk used vs free space.
#[derive(Debug)]
pub struct UsagePie {
    /// Used share of the disk in percent (0–100).
    pub used_percent: f64,
    pub palette: &'static Palette,
}

impl<Message> canvas::Program<Message> for UsagePie {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = frame.size();
        let center = frame.center();
        let radius = size.width.min(size.height) / 2.0 - 4.0;

        let used = (self.used_percent as f32 / 100.0).clamp(0.0, 1.0);

        let full = Path::circle(center, radius);
        frame.fill(&full, self.palette.disk_free.to_iced());

        if used > 0.0 {
            // Slice sweeps clockwise from 12 o'clock.
            let start = -std::f32::consts::FRAC_PI_2;
            let sweep = used * std::f32::consts::TAU;

            let slice = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(canvas::path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle:   Radians(start + sweep),
                });
                builder.close();
            });
            frame.fill(&slice, self.palette.disk_used.to_iced());
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_needs_two_points() {
        let size = Size::new(100.0, 100.0);
        assert!(polyline(&[], 10, size).is_none());
        assert!(polyline(&[50.0], 10, size).is_none());
        assert!(polyline(&[50.0, 60.0], 10, size).is_some());
    }

    #[test]
    fn polyline_tolerates_out_of_range_values() {
        // The store does no clamping, so the chart must.
        let size = Size::new(100.0, 100.0);
        assert!(polyline(&[-5.0, 140.0], 2, size).is_some());
    }
}
