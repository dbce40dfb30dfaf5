use core::ops::Sub;

/// Pixel-grid point: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }
}

/// Integer displacement between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec2i {
    pub dx: i32,
    pub dy: i32,
}

impl Vec2i {
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    pub fn norm_sq(self) -> i64 {
        let dx = i64::from(self.dx);
        let dy = i64::from(self.dy);
        dx * dx + dy * dy
    }

    pub fn norm(self) -> f64 {
        f64::from(self.dx).hypot(f64::from(self.dy))
    }

    /// z component of the 2D cross product.
    pub fn cross(self, rhs: Self) -> i64 {
        i64::from(self.dx) * i64::from(rhs.dy) - i64::from(self.dy) * i64::from(rhs.dx)
    }
}

impl Sub for Point2i {
    type Output = Vec2i;

    fn sub(self, rhs: Point2i) -> Self::Output {
        Vec2i {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}
