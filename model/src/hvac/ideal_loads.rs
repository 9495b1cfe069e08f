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

/// The settings of the ideal loads air system that heats
/// and cools a zone.
///
/// Unset temperatures and capacities are written with the
/// values given by [`IdealLoadsSettings::heating_supply_temperature`],
/// [`IdealLoadsSettings::cooling_supply_temperature`],
/// [`IdealLoadsSettings::heating_limit`] and [`IdealLoadsSettings::cooling_limit`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdealLoadsSettings {
    /// The temperature of the air supplied when heating, in C
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_supply_air_temperature: Option<Float>,

    /// The temperature of the air supplied when cooling, in C
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling_supply_air_temperature: Option<Float>,

    /// The maximum sensible heating capacity, in W
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heating_capacity: Option<Float>,

    /// The maximum total cooling capacity, in W
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cooling_capacity: Option<Float>,
}

impl IdealLoadsSettings {
    /// The heating supply temperature, as a field value
    ///
    /// ```
    /// use model::IdealLoadsSettings;
    ///
    /// let mut s = IdealLoadsSettings::default();
    /// assert_eq!(s.heating_supply_temperature(), "50");
    /// s.heating_supply_air_temperature = Some(45.);
    /// assert_eq!(s.heating_supply_temperature(), "45.0");
    /// ```
    pub fn heating_supply_temperature(&self) -> String {
        match self.heating_supply_air_temperature {
            Some(v) => format!("{:?}", v),
            None => "50".to_string(),
        }
    }

    /// The cooling supply temperature, as a field value
    pub fn cooling_supply_temperature(&self) -> String {
        match self.cooling_supply_air_temperature {
            Some(v) => format!("{:?}", v),
            None => "13".to_string(),
        }
    }

    /// The heating limit and the capacity, as field values
    pub fn heating_limit(&self) -> (&'static str, String) {
        limit(self.max_heating_capacity)
    }

    /// The cooling limit and the capacity, as field values
    pub fn cooling_limit(&self) -> (&'static str, String) {
        limit(self.max_cooling_capacity)
    }
}

fn limit(capacity: Option<Float>) -> (&'static str, String) {
    match capacity {
        Some(v) => ("LimitCapacity", format!("{:?}", v)),
        None => ("NoLimit", String::new()),
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let s: IdealLoadsSettings = json5::from_str(
            "{
            cooling_supply_air_temperature: 12.5,
            max_cooling_capacity: 3000,
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(s.heating_supply_temperature(), "50");
        assert_eq!(s.cooling_supply_temperature(), "12.5");
        assert_eq!(s.heating_limit(), ("NoLimit", String::new()));
        assert_eq!(s.cooling_limit(), ("LimitCapacity", "3000.0".to_string()));
        Ok(())
    }
}
