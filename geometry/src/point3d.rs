/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::Float;
use serde::{Deserialize, Serialize};

/// A point in space
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point3D {
    /// The X component
    pub x: Float,
    /// The Y component
    pub y: Float,
    /// The Z component
    pub z: Float,
}

impl std::fmt::Display for Point3D {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Point3D({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::ops::Mul<Float> for Point3D {
    type Output = Point3D;

    fn mul(self, s: Float) -> Point3D {
        Point3D::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Point3D {
    /// Creates a new [`Point3D`]
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Squared distance between two points
    pub fn squared_distance(&self, other: Point3D) -> Float {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Distance between two points
    ///
    /// ```
    /// use geometry::Point3D;
    /// let a = Point3D::new(0., 0., 0.);
    /// let b = Point3D::new(3., 4., 0.);
    /// assert!((a.distance(b) - 5.).abs() < 1e-9);
    /// ```
    pub fn distance(&self, other: Point3D) -> Float {
        self.squared_distance(other).sqrt()
    }

    /// Checks whether all the components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3D::new(1., 1., 1.);
        let b = Point3D::new(1., 1., 3.);
        assert!((a.distance(b) - 2.).abs() < 1e-9);
        assert!((a.squared_distance(b) - 4.).abs() < 1e-9);
        assert!((b.distance(a) - 2.).abs() < 1e-9);
    }

    #[test]
    fn test_scale() {
        let a = Point3D::new(100., 250., 30.) * 0.01;
        assert!((a.x - 1.).abs() < 1e-9);
        assert!((a.y - 2.5).abs() < 1e-9);
        assert!((a.z - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_finite() {
        assert!(Point3D::new(1., 2., 3.).is_finite());
        assert!(!Point3D::new(Float::NAN, 2., 3.).is_finite());
    }
}
