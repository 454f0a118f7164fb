//! Integer Bresenham rasterization

/// Logical point; signed so line arithmetic can step past the panel edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Points of the line from `start` to `end`, both inclusive
///
/// Tie-break per step: move x when `2·err > -dy`, then move y when
/// `2·err < dx`. Iteration ends once both coordinates reach `end`.
#[derive(Debug, Clone)]
pub struct Bresenham {
    current: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Bresenham {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = i64::from(start.x.abs_diff(end.x));
        let dy = i64::from(start.y.abs_diff(end.y));
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = self.err * 2;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }

        Some(point)
    }
}
