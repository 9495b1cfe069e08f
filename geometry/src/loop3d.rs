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

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Float, Point3D};

/// A set of [`Point3D`] in sequence, forming a closed loop. The
/// last vertex is implicitly connected to the first one, so there is no
/// need to repeat it.
///
/// When serialized, a [`Loop3D`] becomes a flat array of numbers
/// (i.e., `[x0, y0, z0, x1, y1, z1, ...]`).
///
/// ```
/// use geometry::Loop3D;
///
/// let the_loop : Loop3D = serde_json::from_str("[0,0,0, 1,0,0, 1,1,0]").unwrap();
/// assert_eq!(the_loop.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loop3D {
    /// The points of the [`Loop3D`]
    vertices: Vec<Point3D>,
}

impl std::iter::IntoIterator for Loop3D {
    type Item = Point3D;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl std::ops::Index<usize> for Loop3D {
    type Output = Point3D;

    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.vertices.len() {
            panic!(
                "Trying to get a vertex out of bounds... {} available, index was {}",
                self.vertices.len(),
                index
            );
        }
        &self.vertices[index]
    }
}

impl From<Vec<Point3D>> for Loop3D {
    fn from(vertices: Vec<Point3D>) -> Self {
        Self { vertices }
    }
}

impl Serialize for Loop3D {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3 * self.vertices.len()))?;
        for Point3D { x, y, z } in self.vertices.iter() {
            seq.serialize_element(x)?;
            seq.serialize_element(y)?;
            seq.serialize_element(z)?;
        }

        seq.end()
    }
}

impl<'de> Deserialize<'de> for Loop3D {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data: Value = Deserialize::deserialize(deserializer)?;
        let numbers = match data {
            Value::Array(a) => a,
            _ => {
                return Err(serde::de::Error::custom(
                    "expecting Loop3D to be an array of numbers",
                ))
            }
        };
        if numbers.len() % 3 != 0 {
            let msg = format!(
                "the number of elements in a Loop3D must be a multiple of 3... found {}",
                numbers.len()
            );
            return Err(serde::de::Error::custom(msg));
        }

        let mut values = Vec::with_capacity(numbers.len());
        for v in numbers.iter() {
            let v = match v {
                Value::Number(v) => v
                    .as_f64()
                    .ok_or("Could not get coordinate... it does not seem to be a number")
                    .map_err(serde::de::Error::custom)?,
                _ => {
                    return Err(serde::de::Error::custom(
                        "expecting Loop3D to be an array of numbers",
                    ))
                }
            };
            values.push(v as Float);
        }

        let vertices = values
            .chunks(3)
            .map(|c| Point3D::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { vertices })
    }
}

impl Loop3D {
    /// Creates a new and empty [`Loop3D`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new and empty [`Loop3D`] with some capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Adds a [`Point3D`] at the end of the [`Loop3D`]
    pub fn push(&mut self, point: Point3D) {
        self.vertices.push(point)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Checks whether the [`Loop3D`] has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Borrows the vertices
    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    /// Iterates over the vertices
    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.vertices.iter()
    }

    /// Multiplies every coordinate by a factor (e.g., for
    /// changing units)
    pub fn scale(&self, factor: Float) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| *p * factor).collect(),
        }
    }

    /// Returns a new [`Loop3D`] in which points that are closer than twice
    /// the `tolerance` to a previously kept point are dropped. The first
    /// point of each cluster is the one that survives.
    ///
    /// Returns `None` when fewer than 3 points remain, as such loop
    /// does not describe a polygon anymore.
    ///
    /// ```
    /// use geometry::{Loop3D, Point3D};
    ///
    /// let mut l = Loop3D::new();
    /// l.push(Point3D::new(0., 0., 0.));
    /// l.push(Point3D::new(0.001, 0., 0.));
    /// l.push(Point3D::new(1., 0., 0.));
    /// l.push(Point3D::new(1., 1., 0.));
    ///
    /// let clean = l.clean(0.01).unwrap();
    /// assert_eq!(clean.len(), 3);
    /// ```
    pub fn clean(&self, tolerance: Float) -> Option<Self> {
        let min_distance = 2. * tolerance;
        let min_sq = min_distance * min_distance;
        let mut vertices: Vec<Point3D> = Vec::with_capacity(self.vertices.len());
        for p in self.vertices.iter() {
            if !p.is_finite() {
                return None;
            }
            if vertices.iter().all(|kept| kept.squared_distance(*p) >= min_sq) {
                vertices.push(*p)
            }
        }

        if vertices.len() < 3 {
            None
        } else {
            Some(Self { vertices })
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn square(l: Float) -> Loop3D {
        let mut ret = Loop3D::new();
        ret.push(Point3D::new(0., 0., 0.));
        ret.push(Point3D::new(l, 0., 0.));
        ret.push(Point3D::new(l, l, 0.));
        ret.push(Point3D::new(0., l, 0.));
        ret
    }

    #[test]
    fn test_serde() -> Result<(), String> {
        let l: Loop3D = serde_json::from_str("[0,0,0, 1,0,0, 1,1,0, 0,1,0]")
            .map_err(|e| e.to_string())?;
        assert_eq!(l, square(1.));

        let s = serde_json::to_string(&l).map_err(|e| e.to_string())?;
        assert_eq!(s, "[0.0,0.0,0.0,1.0,0.0,0.0,1.0,1.0,0.0,0.0,1.0,0.0]");

        let l: Loop3D = json5::from_str("[0,0,0, 1,0,0, 1,1,0, 0,1,0,]")
            .map_err(|e| e.to_string())?;
        assert_eq!(l.len(), 4);

        // Not a multiple of three
        assert!(serde_json::from_str::<Loop3D>("[0,0,0, 1,0]").is_err());
        // Not numbers
        assert!(serde_json::from_str::<Loop3D>("[0,0,\"a\"]").is_err());
        assert!(serde_json::from_str::<Loop3D>("{\"x\": 1}").is_err());
        Ok(())
    }

    #[test]
    fn test_clean_keeps_clean_loops() {
        let l = square(1.);
        let c = l.clean(0.01).unwrap();
        assert_eq!(c, l);
    }

    #[test]
    fn test_clean_merges() {
        let mut l = square(1.);
        // Repeats the first point... as many tools do
        l.push(Point3D::new(0., 0., 0.));
        // Closer than 2 * tolerance to (1,1,0)
        l.push(Point3D::new(1., 1.015, 0.));
        let c = l.clean(0.01).unwrap();
        assert_eq!(c, square(1.));
    }

    #[test]
    fn test_clean_degenerate() {
        let mut l = Loop3D::new();
        l.push(Point3D::new(0., 0., 0.));
        l.push(Point3D::new(0.005, 0., 0.));
        l.push(Point3D::new(1., 0., 0.));
        assert!(l.clean(0.01).is_none());

        let mut l = square(1.);
        l.push(Point3D::new(Float::NAN, 0., 0.));
        assert!(l.clean(0.01).is_none());
    }

    #[test]
    fn test_clean_idempotent() {
        let mut l = Loop3D::new();
        for (x, y) in [
            (0., 0.),
            (0.01, 0.),
            (0.025, 0.),
            (0.04, 0.),
            (1., 0.),
            (1., 1.),
            (1., 1.019),
            (0., 1.),
        ] {
            l.push(Point3D::new(x, y, 0.));
        }
        let once = l.clean(0.01).unwrap();
        let twice = once.clean(0.01).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_scale() {
        let l = square(100.).scale(0.01);
        assert_eq!(l, square(1.));
    }
}
