//! Corner anchoring.
//!
//! Sizes and origins here follow the AppKit convention: the origin of the
//! screen is its bottom-left corner and `y` grows upwards. egui viewports are
//! positioned from the top-left, so [`to_top_left`] converts between the two.

use eframe::egui::{Pos2, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Vec2> for Size {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for Vec2 {
    fn from(s: Size) -> Self {
        Vec2::new(s.width, s.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Pos2 {
    fn from(p: Point) -> Self {
        Pos2::new(p.x, p.y)
    }
}

/// Origin that places `window` flush against the top-right corner of `screen`.
///
/// Negative coordinates are returned unchanged when the window does not fit.
pub fn top_right_origin(window: Size, screen: Size) -> Point {
    Point::new(screen.width - window.width, screen.height - window.height)
}

/// Converts a bottom-left based window origin into a top-left based one.
pub fn to_top_left(origin: Point, window: Size, screen: Size) -> Point {
    Point::new(origin.x, screen.height - (origin.y + window.height))
}

/// Outer position to hand to an egui viewport command.
pub fn anchored_position(window: Size, screen: Size) -> Pos2 {
    let origin = top_right_origin(window, screen);
    to_top_left(origin, window, screen).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_to_top_right() {
        let origin = top_right_origin(Size::new(120.0, 30.0), Size::new(1440.0, 900.0));
        assert_eq!(origin, Point::new(1320.0, 870.0));
    }

    #[test]
    fn window_filling_the_screen_sits_at_zero() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(top_right_origin(size, size), Point::new(0.0, 0.0));
    }

    #[test]
    fn oversized_window_goes_negative() {
        let origin = top_right_origin(Size::new(200.0, 50.0), Size::new(100.0, 40.0));
        assert_eq!(origin, Point::new(-100.0, -10.0));
    }

    #[test]
    fn zero_sized_window_sits_on_the_corner() {
        let origin = top_right_origin(Size::default(), Size::new(1920.0, 1080.0));
        assert_eq!(origin, Point::new(1920.0, 1080.0));
    }

    #[test]
    fn top_left_conversion_puts_the_anchor_on_the_top_edge() {
        let window = Size::new(120.0, 30.0);
        for screen in [
            Size::new(1440.0, 900.0),
            Size::new(2560.0, 1440.0),
            Size::new(640.0, 480.0),
        ] {
            let pos = anchored_position(window, screen);
            assert_eq!(pos, Pos2::new(screen.width - window.width, 0.0));
        }
    }

    #[test]
    fn top_left_conversion_of_bottom_left_corner() {
        let window = Size::new(10.0, 20.0);
        let screen = Size::new(100.0, 200.0);
        let p = to_top_left(Point::new(0.0, 0.0), window, screen);
        assert_eq!(p, Point::new(0.0, 180.0));
    }

    #[test]
    fn converts_from_egui_vectors() {
        let size: Size = Vec2::new(3.0, 4.0).into();
        assert_eq!(size, Size::new(3.0, 4.0));
        assert_eq!(Vec2::from(size), Vec2::new(3.0, 4.0));
    }
}
