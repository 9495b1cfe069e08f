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
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A `Yes` or `No` field in the IDF file.
///
/// It is deserialized from a boolean or from the strings `"Yes"` and
/// `"No"`. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YesNo {
    /// Yes
    Yes,
    /// No
    No,
}

impl YesNo {
    /// The text of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        match b {
            true => YesNo::Yes,
            false => YesNo::No,
        }
    }
}

struct YesNoVisitor;

impl<'de> Visitor<'de> for YesNoVisitor {
    type Value = YesNo;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a boolean, \"Yes\" or \"No\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for YesNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(YesNoVisitor)
    }
}

/// The kind of terrain surrounding the building, which modifies the wind speed
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Terrain {
    /// Describes a Flat, Open Country
    Country,

    /// Describes a Rough, Wooded Country or Suburb
    Suburbs,

    /// Describes Towns, City Outskirts, and centers of large cities
    #[default]
    City,

    /// Describes sites next to the Ocean or Bayou Flat
    Ocean,

    /// Describes Urban, Industrual or Forest terrain
    Urban,
}

impl Terrain {
    /// The name of the terrain in the IDF file
    pub fn idf_name(&self) -> &'static str {
        match self {
            Terrain::Country => "Country",
            Terrain::Suburbs => "Suburbs",
            Terrain::City => "City",
            Terrain::Ocean => "Ocean",
            Terrain::Urban => "Urban",
        }
    }
}

/// How solar radiation is distributed within the zones
#[derive(Debug, Eq, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum SolarDistribution {
    /// No exterior shading; all the beam radiation falls on the floor
    MinimalShadowing,

    /// Exterior shading, beam radiation falls on the floor
    FullExterior,

    /// Exterior shading and beam radiation tracked inside the zones
    FullInteriorAndExterior,

    /// Like `FullExterior`, with reflections from exterior surfaces
    FullExteriorWithReflections,

    /// Like `FullInteriorAndExterior`, with reflections from exterior surfaces
    #[default]
    FullInteriorAndExteriorWithReflections,
}

impl SolarDistribution {
    /// The name of the option in the IDF file
    pub fn idf_name(&self) -> &'static str {
        match self {
            SolarDistribution::MinimalShadowing => "MinimalShadowing",
            SolarDistribution::FullExterior => "FullExterior",
            SolarDistribution::FullInteriorAndExterior => "FullInteriorAndExterior",
            SolarDistribution::FullExteriorWithReflections => "FullExteriorWithReflections",
            SolarDistribution::FullInteriorAndExteriorWithReflections => {
                "FullInteriorAndExteriorWithReflections"
            }
        }
    }
}

/// How and how often shadows are calculated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadowCalculation {
    /// The calculation method
    #[serde(default = "default_shadow_method")]
    pub method: String,

    /// Days between calculations
    #[serde(default = "default_shadow_frequency")]
    pub frequency: usize,

    /// Maximum number of figures in the overlap calculations
    #[serde(default = "default_max_figures")]
    pub max_figures: usize,
}

fn default_shadow_method() -> String {
    "AverageOverDaysInFrequency".to_string()
}
fn default_shadow_frequency() -> usize {
    6
}
fn default_max_figures() -> usize {
    1500
}

impl Default for ShadowCalculation {
    fn default() -> Self {
        Self {
            method: default_shadow_method(),
            frequency: default_shadow_frequency(),
            max_figures: default_max_figures(),
        }
    }
}

/// Which calculations are performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationControl {
    /// Do zone sizing calculations
    #[serde(default = "no")]
    pub zone_sizing: YesNo,

    /// Do system sizing calculations
    #[serde(default = "no")]
    pub system_sizing: YesNo,

    /// Do plant sizing calculations
    #[serde(default = "no")]
    pub plant_sizing: YesNo,

    /// Run the simulation for the sizing periods
    #[serde(default = "no")]
    pub run_for_sizing_periods: YesNo,

    /// Run the simulation for the run period of the weather file
    #[serde(default = "yes")]
    pub run_for_weather_file: YesNo,
}

fn yes() -> YesNo {
    YesNo::Yes
}
fn no() -> YesNo {
    YesNo::No
}

impl Default for SimulationControl {
    fn default() -> Self {
        Self {
            zone_sizing: no(),
            system_sizing: no(),
            plant_sizing: no(),
            run_for_sizing_periods: no(),
            run_for_weather_file: yes(),
        }
    }
}

/// The parameters of the simulation that go into the header
/// of the IDF file.
///
/// ```
/// use idf::SimulationParameters;
///
/// let p = SimulationParameters::from_json5("{
///     timestep: 4,
///     terrain: {type: 'Ocean'},
///     simulation_control: {zone_sizing: 'Yes'},
/// }").unwrap();
/// assert_eq!(p.timestep, 4);
/// assert_eq!(p.threads, 10);
/// assert_eq!(p.simulation_control.zone_sizing.as_str(), "Yes");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationParameters {
    /// Number of timesteps per hour
    #[serde(default = "default_timestep")]
    pub timestep: usize,

    /// Shadow calculation settings
    #[serde(default)]
    pub shadow_calculation: ShadowCalculation,

    /// How solar radiation is distributed within the zones
    #[serde(default)]
    pub solar_distribution: SolarDistribution,

    /// The terrain around the building
    #[serde(default)]
    pub terrain: Terrain,

    /// Which calculations are performed
    #[serde(default)]
    pub simulation_control: SimulationControl,

    /// Number of threads the simulation engine is allowed to use
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Loads convergence tolerance
    #[serde(default = "default_loads_tolerance")]
    pub loads_convergence_tolerance: Float,

    /// Temperature convergence tolerance, in C
    #[serde(default = "default_temperature_tolerance")]
    pub temperature_convergence_tolerance: Float,

    /// Maximum number of warm-up days
    #[serde(default = "default_max_warmup")]
    pub max_warmup_days: usize,

    /// Minimum number of warm-up days
    #[serde(default = "default_min_warmup")]
    pub min_warmup_days: usize,
}

fn default_timestep() -> usize {
    6
}
fn default_threads() -> usize {
    10
}
fn default_loads_tolerance() -> Float {
    0.04
}
fn default_temperature_tolerance() -> Float {
    0.4
}
fn default_max_warmup() -> usize {
    25
}
fn default_min_warmup() -> usize {
    6
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            timestep: default_timestep(),
            shadow_calculation: ShadowCalculation::default(),
            solar_distribution: SolarDistribution::default(),
            terrain: Terrain::default(),
            simulation_control: SimulationControl::default(),
            threads: default_threads(),
            loads_convergence_tolerance: default_loads_tolerance(),
            temperature_convergence_tolerance: default_temperature_tolerance(),
            max_warmup_days: default_max_warmup(),
            min_warmup_days: default_min_warmup(),
        }
    }
}

impl SimulationParameters {
    /// Parses the parameters from JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        let p: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        p.validate()?;
        Ok(p)
    }

    /// Parses the parameters from JSON5
    pub fn from_json5(json: &str) -> Result<Self, String> {
        let p: Self = json5::from_str(json).map_err(|e| e.to_string())?;
        p.validate()?;
        Ok(p)
    }

    /// Reads the parameters from a file; JSON if the extension
    /// is `.json`, JSON5 otherwise
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let path = filename.as_ref();
        let src = match std::fs::read_to_string(path) {
            Ok(v) => v,
            Err(_) => return Err(format!("Could not read parameters file '{}'", path.display())),
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&src),
            _ => Self::from_json5(&src),
        }
    }

    /// Checks that the parameters make sense
    pub fn validate(&self) -> Result<(), String> {
        // The simulation engine needs the timestep to divide an hour evenly
        const VALID_TIMESTEPS: [usize; 12] = [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60];
        if !VALID_TIMESTEPS.contains(&self.timestep) {
            return Err(format!(
                "Invalid timestep {}... expecting one of {:?}",
                self.timestep, VALID_TIMESTEPS
            ));
        }
        if self.min_warmup_days > self.max_warmup_days {
            return Err(format!(
                "Minimum number of warm-up days ({}) is larger than the maximum ({})",
                self.min_warmup_days, self.max_warmup_days
            ));
        }
        if self.threads == 0 {
            return Err("Number of threads should be larger than 0".to_string());
        }
        Ok(())
    }
}

/***********/
/* TESTING */
/***********/
