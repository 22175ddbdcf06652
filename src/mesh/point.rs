//! Totally ordered 3D points.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Point3;

/// A vertex position with exact lexicographic ordering.
///
/// Points compare by `x`, then `y`, then `z` with no tolerance: two points that
/// differ in the last bit of any coordinate are distinct. `0.0` and `-0.0` are
/// equal, and NaN coordinates fall back to [`f64::total_cmp`] so the order
/// stays total and points can key ordered maps.
#[derive(Copy, Clone)]
pub struct Point(Point3<f64>);

impl Point {
    /// Create a point from coordinates.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// The z coordinate.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Coordinates as an array.
    #[inline]
    pub fn coords(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// The underlying nalgebra point.
    #[inline]
    pub fn as_point3(&self) -> &Point3<f64> {
        &self.0
    }
}

fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_coord(self.0.x, other.0.x)
            .then_with(|| cmp_coord(self.0.y, other.0.y))
            .then_with(|| cmp_coord(self.0.z, other.0.z))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<Point3<f64>> for Point {
    fn from(p: Point3<f64>) -> Self {
        Self(p)
    }
}

impl From<Point> for Point3<f64> {
    fn from(p: Point) -> Self {
        p.0
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
