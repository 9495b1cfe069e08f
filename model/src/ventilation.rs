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

/// The temperatures within which natural ventilation is allowed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VentilationLimits {
    /// Below this indoor temperature, ventilation stops
    #[serde(default = "low")]
    pub min_indoor_temperature: Float,

    /// Above this indoor temperature, ventilation stops
    #[serde(default = "high")]
    pub max_indoor_temperature: Float,

    /// Below this outdoor temperature, ventilation stops
    #[serde(default = "low")]
    pub min_outdoor_temperature: Float,

    /// Above this outdoor temperature, ventilation stops
    #[serde(default = "high")]
    pub max_outdoor_temperature: Float,
}

fn low() -> Float {
    -100.
}

fn high() -> Float {
    100.
}

impl Default for VentilationLimits {
    fn default() -> Self {
        Self {
            min_indoor_temperature: low(),
            max_indoor_temperature: high(),
            min_outdoor_temperature: low(),
            max_outdoor_temperature: high(),
        }
    }
}

/// Ventilation driven by wind and stack effect through an opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpeningVentilation {
    /// The area of the opening, in m2
    pub opening_area: Float,

    /// The schedule that allows or prevents ventilation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// The opening effectiveness. Autocalculated if not given
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_effectiveness: Option<Float>,

    /// The angle between North and the normal of the opening, in degrees
    #[serde(default)]
    pub effective_angle: Float,

    /// The height difference between the opening and the neutral
    /// pressure level, in m
    #[serde(default)]
    pub height_difference: Float,

    /// The discharge coefficient of the opening. Autocalculated if not given
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_coefficient: Option<Float>,

    /// When is ventilation allowed
    #[serde(default)]
    pub limits: VentilationLimits,
}

/// Ventilation driven by a fan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FanVentilation {
    /// The flow rate, in m3/s
    pub flow_rate: Float,

    /// The schedule that allows or prevents ventilation
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// The pressure rise of the fan, in Pa
    #[serde(default)]
    pub fan_pressure_rise: Float,

    /// The total efficiency of the fan
    #[serde(default = "unit_efficiency")]
    pub fan_efficiency: Float,

    /// When is ventilation allowed
    #[serde(default)]
    pub limits: VentilationLimits,
}

fn unit_efficiency() -> Float {
    1.
}

/// The ways in which a zone can be naturally ventilated
///
/// ```
/// use model::NaturalVentilation;
///
/// let v : NaturalVentilation = json5::from_str("{
///     type: 'WindowOpening',
///     opening_area: 1.2,
/// }").unwrap();
/// assert!(v.schedule().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NaturalVentilation {
    /// Operable windows
    WindowOpening(OpeningVentilation),

    /// An opening specifically designed for stack ventilation
    CustomStack(OpeningVentilation),

    /// A fan
    Fan(FanVentilation),
}

impl NaturalVentilation {
    /// The schedule that allows or prevents ventilation
    pub fn schedule(&self) -> Option<&str> {
        match self {
            NaturalVentilation::WindowOpening(v) | NaturalVentilation::CustomStack(v) => {
                v.schedule.as_deref()
            }
            NaturalVentilation::Fan(v) => v.schedule.as_deref(),
        }
    }
}

/// Air that is moved from one zone into another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirMixing {
    /// The zone from which air comes
    pub source_zone: String,

    /// The flow rate, in m3/s
    pub flow_rate: Float,

    /// The schedule of the flow
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}
