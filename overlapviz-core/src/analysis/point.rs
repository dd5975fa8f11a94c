use std::fmt;

use glam::IVec2;
use serde::Serialize;

/// An integer point on the horizontal plane.
///
/// `z` is the second planar axis, not a height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub z: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Views the point as a glam vector, `z` mapped to `y`.
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.z)
    }
}

impl From<IVec2> for Point {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for IVec2 {
    fn from(p: Point) -> Self {
        p.as_ivec2()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
