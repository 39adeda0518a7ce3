/// Living environment pie chart
/// Draws one wedge per slice with a percentage label outside the rim
use iced::alignment;
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Length, Pixels, Point, Rectangle};
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::state::data::StatSlice;
use crate::ui::theme::hex;
use crate::Message;

/// Radius of the pie in pixels
pub const OUTER_RADIUS: f32 = 80.0;

/// Gap between the rim and the slice labels
const LABEL_OFFSET: f32 = 28.0;

/// Segments per full turn when approximating the rim
const RIM_SEGMENTS: f32 = 96.0;

/// Pie chart data structure
#[derive(Debug, Clone)]
pub struct PieChart {
    pub slices: Vec<StatSlice>,
    pub colors: Vec<Color>,
}

/// A slice's share of the whole and the angles it spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub fraction: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl Wedge {
    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Split a full turn between the values, starting at 12 o'clock and
/// going clockwise. Returns nothing when the values sum to zero.
pub fn wedges(values: &[f32]) -> Vec<Wedge> {
    let total: f32 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|&value| {
            let fraction = value.max(0.0) / total;
            let start_angle = angle;
            angle += fraction * TAU;
            Wedge {
                fraction,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Label shown next to a wedge, e.g. "Indoor 60%"
pub fn slice_label(label: &str, fraction: f32) -> String {
    format!("{} {}%", label, (fraction * 100.0).round() as i64)
}

/// Outline of a wedge: the center followed by points along the rim
pub fn wedge_outline(center: Point, radius: f32, wedge: &Wedge) -> Vec<Point> {
    let sweep = wedge.end_angle - wedge.start_angle;
    let steps = ((sweep / TAU) * RIM_SEGMENTS).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = wedge.start_angle + sweep * (i as f32 / steps as f32);
        points.push(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}

impl canvas::Program<Message> for PieChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();

        let values: Vec<f32> = self.slices.iter().map(|s| s.value).collect();

        for (index, (slice, wedge)) in self.slices.iter().zip(wedges(&values)).enumerate() {
            if wedge.fraction <= 0.0 {
                continue;
            }
            let color = self.colors[index % self.colors.len().max(1)];

            let outline = wedge_outline(center, OUTER_RADIUS, &wedge);
            let path = Path::new(|builder| {
                builder.move_to(outline[0]);
                for point in &outline[1..] {
                    builder.line_to(*point);
                }
                builder.close();
            });
            frame.fill(&path, color);
            frame.stroke(&path, Stroke::default().with_color(Color::WHITE).with_width(1.0));

            let mid = wedge.mid_angle();
            let label_radius = OUTER_RADIUS + LABEL_OFFSET;
            frame.fill_text(canvas::Text {
                content: slice_label(slice.label, wedge.fraction),
                position: Point::new(
                    center.x + label_radius * mid.cos(),
                    center.y + label_radius * mid.sin(),
                ),
                color,
                size: Pixels(14.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Chart plus a legend row underneath
pub fn view(slices: &[StatSlice], colors: &[u32], label_color: Color) -> Element<'static, Message> {
    let colors: Vec<Color> = colors.iter().copied().map(hex).collect();

    let chart = canvas::Canvas::new(PieChart {
        slices: slices.to_vec(),
        colors: colors.clone(),
    })
    .width(Length::Fill)
    .height(Length::Fixed(260.0));

    let legend = slices.iter().enumerate().fold(row![].spacing(16), |legend, (index, slice)| {
        let swatch_color = colors[index % colors.len().max(1)];
        let swatch = container(Space::new(Length::Fixed(12.0), Length::Fixed(12.0))).style(
            move |_theme| container::Style {
                background: Some(iced::Background::Color(swatch_color)),
                ..Default::default()
            },
        );
        legend.push(
            row![swatch, text(slice.label).size(14).color(label_color)]
                .spacing(6)
                .align_y(iced::Alignment::Center),
        )
    });

    column![chart, container(legend).center_x(Length::Fill)]
        .spacing(8)
        .height(Length::Fixed(300.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::CAT_STATS;

    fn stat_values() -> Vec<f32> {
        CAT_STATS.iter().map(|s| s.value).collect()
    }

    #[test]
    fn test_labels_show_rounded_percent() {
        let labels: Vec<String> = CAT_STATS
            .iter()
            .zip(wedges(&stat_values()))
            .map(|(slice, wedge)| slice_label(slice.label, wedge.fraction))
            .collect();
        assert_eq!(labels, vec!["Indoor 60%", "Outdoor 40%"]);
    }

    #[test]
    fn test_wedges_cover_full_turn() {
        let wedges = wedges(&stat_values());
        assert_eq!(wedges.len(), 2);
        assert!((wedges[0].start_angle + FRAC_PI_2).abs() < 1e-6);
        assert_eq!(wedges[0].end_angle, wedges[1].start_angle);

        let sweep: f32 = wedges.iter().map(|w| w.end_angle - w.start_angle).sum();
        assert!((sweep - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_zero_total_has_no_wedges() {
        assert!(wedges(&[0.0, 0.0]).is_empty());
        assert!(wedges(&[]).is_empty());
    }

    #[test]
    fn test_outline_stays_on_rim() {
        let center = Point::new(100.0, 100.0);
        let wedge = wedges(&stat_values())[0];
        let outline = wedge_outline(center, OUTER_RADIUS, &wedge);

        assert_eq!(outline[0], center);
        for point in &outline[1..] {
            let distance = ((point.x - center.x).powi(2) + (point.y - center.y).powi(2)).sqrt();
            assert!((distance - OUTER_RADIUS).abs() < 1e-3);
        }
    }
}
