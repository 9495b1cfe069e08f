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

use crate::{Float, ShadingSurface, UnitSystem, Zone};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_tolerance() -> Float {
    0.01
}

/// A building to be written as an EnergyPlus input file: its [`Zone`]s,
/// the [`ShadingSurface`]s around it and some metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    /// The name of the model
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The version of the format in which the model was written,
    /// as `major.minor[.patch]`
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The units in which coordinates are expressed
    #[serde(default)]
    pub units: UnitSystem,

    /// Points closer than twice this distance are considered
    /// to be the same point
    #[serde(default = "default_tolerance")]
    pub tolerance: Float,

    /// The [`Zone`]s in the model
    #[serde(default)]
    pub zones: Vec<Zone>,

    /// Surfaces that cast shadows over the zones
    #[serde(default)]
    pub shading: Vec<ShadingSurface>,
}

impl std::default::Default for Model {
    fn default() -> Self {
        Self {
            name: None,
            version: None,
            units: UnitSystem::default(),
            tolerance: default_tolerance(),
            zones: Vec::new(),
            shading: Vec::new(),
        }
    }
}

/// Parses a version of the form `major.minor[.patch]`
pub fn parse_version(version: &str) -> Result<(usize, usize, usize), String> {
    let parts: Vec<&str> = version.trim().split('.').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(format!(
            "Version '{}' should be of the form 'major.minor[.patch]'",
            version
        ));
    }
    let mut ret = [0; 3];
    for (i, p) in parts.iter().enumerate() {
        ret[i] = p
            .parse::<usize>()
            .map_err(|_| format!("Invalid number '{}' in version '{}'", p, version))?;
    }
    Ok((ret[0], ret[1], ret[2]))
}

impl Model {
    /// Parses a `Model` from a JSON string
    ///
    /// ```rust
    /// use model::Model;
    ///
    /// let json_str = r#"{
    ///     "version": "0.5.0",
    ///     "zones": [{
    ///         "name": "Kitchen"
    ///     }]
    /// }"#;
    ///
    /// let model = Model::from_json(&json_str).unwrap();
    /// assert_eq!(model.zones.len(), 1);
    /// assert_eq!(model.tolerance, 0.01);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Parses a `Model` from a JSON5 string
    pub fn from_json5(json: &str) -> Result<Self, String> {
        json5::from_str(json).map_err(|e| e.to_string())
    }

    /// Reads a `Model` from a file. Files with a `.json` extension
    /// are parsed as JSON; everything else is parsed as JSON5.
    pub fn from_json_file<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let path = filename.as_ref();
        let src = match std::fs::read_to_string(path) {
            Ok(v) => v,
            Err(_) => return Err(format!("Could not read model file '{}'", path.display())),
        };
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let model = if is_json {
            Self::from_json(&src)
        } else {
            Self::from_json5(&src)
        };
        model.map_err(|e| format!("Could not parse model file '{}': {}", path.display(), e))
    }

    /// The version of the model, parsed
    pub fn parsed_version(&self) -> Option<Result<(usize, usize, usize), String>> {
        self.version.as_deref().map(parse_version)
    }

    /// Returns a copy of the model with all its coordinates (and
    /// the tolerance) in meters. Fails if the model uses imperial units.
    pub fn in_meters(&self) -> Result<Model, String> {
        let factor = self.units.to_meters().ok_or_else(|| {
            format!(
                "Models in {} are not supported. Please use metric units",
                self.units
            )
        })?;

        let mut ret = self.clone();
        ret.units = UnitSystem::Meters;
        if factor == 1.0 {
            return Ok(ret);
        }
        ret.tolerance *= factor;
        ret.zones.iter_mut().for_each(|z| z.scale(factor));
        ret.shading.iter_mut().for_each(|s| s.scale(factor));
        Ok(ret)
    }
}

/***********/
/* TESTING */
/***********/
