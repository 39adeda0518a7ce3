/// Vector icons drawn on canvas
///
/// The paw is used both as the cursor follower overlay and as a small
/// decoration next to the title. The magnifier sits in the search field.
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle, Size, Vector};

use crate::state::motion::CursorState;
use crate::Message;

/// Toe pads relative to the palm center, in units of the palm radius
const TOES: [(f32, f32, f32); 4] = [
    (-1.15, -0.95, 0.42),
    (-0.42, -1.45, 0.45),
    (0.42, -1.45, 0.45),
    (1.15, -0.95, 0.42),
];

/// Draw a paw centered on `center`. `size` is the palm radius.
pub fn draw_paw(frame: &mut canvas::Frame, center: Point, size: f32, color: Color) {
    let palm = Path::circle(center, size);
    frame.fill(&palm, color);

    for (dx, dy, radius) in TOES {
        let toe = Path::circle(center + Vector::new(dx * size, dy * size), radius * size);
        frame.fill(&toe, color);
    }
}

/// Full-window overlay that draws the paw at the follower's position
#[derive(Debug, Clone, Copy)]
pub struct PawOverlay {
    pub position: CursorState,
    pub color: Color,
}

/// Palm radius of the following paw
const FOLLOWER_SIZE: f32 = 9.0;

/// The paw trails just below and right of the pointer
const FOLLOWER_OFFSET: Vector = Vector::new(18.0, 22.0);

impl canvas::Program<Message> for PawOverlay {
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
        let center = Point::new(self.position.x, self.position.y) + FOLLOWER_OFFSET;
        draw_paw(&mut frame, center, FOLLOWER_SIZE, self.color);
        vec![frame.into_geometry()]
    }
}

/// Static paw icon of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct PawIcon {
    pub color: Color,
}

impl canvas::Program<Message> for PawIcon {
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
        let size = bounds.width.min(bounds.height) / 5.0;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0 + size * 0.6);
        draw_paw(&mut frame, center, size, self.color);
        vec![frame.into_geometry()]
    }
}

/// Search magnifier: a ring with a handle to the lower right
#[derive(Debug, Clone, Copy)]
pub struct Magnifier {
    pub color: Color,
}

impl canvas::Program<Message> for Magnifier {
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
        let side = bounds.width.min(bounds.height);
        let radius = side * 0.3;
        let center = Point::new(side * 0.42, side * 0.42);
        let stroke = || Stroke::default().with_color(self.color).with_width(2.0);

        frame.stroke(&Path::circle(center, radius), stroke());

        let diagonal = std::f32::consts::FRAC_1_SQRT_2;
        let handle_start = center + Vector::new(radius * diagonal, radius * diagonal);
        let handle_end = Point::new(side * 0.9, side * 0.9);
        frame.stroke(&Path::line(handle_start, handle_end), stroke());

        vec![frame.into_geometry()]
    }
}

/// Size an icon canvas should be given
pub const ICON_SIZE: Size = Size::new(20.0, 20.0);
