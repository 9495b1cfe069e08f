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

/// The units in which the geometry of a [`crate::Model`] is described
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Meters, the units expected by the simulation engine
    #[default]
    Meters,
    /// Centimeters
    Centimeters,
    /// Millimeters
    Millimeters,
    /// Feet
    Feet,
    /// Inches
    Inches,
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnitSystem::Meters => "Meters",
            UnitSystem::Centimeters => "Centimeters",
            UnitSystem::Millimeters => "Millimeters",
            UnitSystem::Feet => "Feet",
            UnitSystem::Inches => "Inches",
        };
        write!(f, "{}", s)
    }
}

impl UnitSystem {
    /// The factor by which lengths in these units need to be multiplied
    /// in order to get meters. Returns `None` for non-metric
    /// units, which are not supported.
    ///
    /// ```
    /// use model::UnitSystem;
    /// assert_eq!(UnitSystem::Centimeters.to_meters(), Some(0.01));
    /// assert_eq!(UnitSystem::Feet.to_meters(), None);
    /// ```
    pub fn to_meters(&self) -> Option<Float> {
        match self {
            UnitSystem::Meters => Some(1.),
            UnitSystem::Centimeters => Some(0.01),
            UnitSystem::Millimeters => Some(0.001),
            UnitSystem::Feet | UnitSystem::Inches => None,
        }
    }

    /// Checks whether the unit system is metric
    pub fn is_metric(&self) -> bool {
        self.to_meters().is_some()
    }
}

/// The direction of North. It can be given as an angle or
/// as a vector in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
pub enum North {
    /// An angle in degrees
    Degrees {
        /// The angle
        angle: Float,
    },

    /// A vector pointing North
    Vector {
        /// The X component
        x: Float,
        /// The Y component
        y: Float,
    },
}

impl Default for North {
    fn default() -> Self {
        North::Degrees { angle: 0. }
    }
}

impl North {
    /// Gets the north angle in degrees. A vector is converted into the
    /// counterclockwise angle going from it to the Y axis, which is
    /// always within `[0, 360)`.
    ///
    /// ```
    /// use model::North;
    ///
    /// let north = North::Vector { x: 1., y: 0. };
    /// assert!((north.degrees().unwrap() - 90.).abs() < 1e-6);
    ///
    /// let north = North::Degrees { angle: 35. };
    /// assert!((north.degrees().unwrap() - 35.).abs() < 1e-6);
    /// ```
    pub fn degrees(&self) -> Result<Float, String> {
        match self {
            North::Degrees { angle } => Ok(*angle),
            North::Vector { x, y } => {
                if x.abs() < Float::EPSILON && y.abs() < Float::EPSILON {
                    return Err("north vector cannot be a zero vector".to_string());
                }
                let angle = 90. - y.atan2(*x).to_degrees();
                Ok(angle.rem_euclid(360.))
            }
        }
    }
}
