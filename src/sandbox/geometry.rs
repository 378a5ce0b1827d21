use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position of a dropped component relative to the sandbox container origin.
pub fn move_component(pointer_x: f64, pointer_y: f64, origin: Position) -> Position {
    Position::new(pointer_x - origin.x, pointer_y - origin.y)
}

/// How to draw a straight line as a rotated box: a box of width `length`
/// placed at the origin and rotated by `angle_degrees` about its top-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGeometry {
    pub length: f64,
    pub angle_degrees: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// The line is always drawn from the upper endpoint (smaller y) downward, so
/// the angle stays in `[0, 180]`.
pub fn line_geometry(ax: f64, ay: f64, bx: f64, by: f64) -> LineGeometry {
    let (ax, ay, bx, by) = if ay > by { (bx, by, ax, ay) } else { (ax, ay, bx, by) };
    let (dx, dy) = (bx - ax, by - ay);
    let length = dx.hypot(dy);
    let angle_degrees = if length == 0.0 { 0.0 } else { dy.atan2(dx).to_degrees() };
    LineGeometry {
        length,
        angle_degrees,
        origin_x: ax,
        origin_y: ay,
    }
}
