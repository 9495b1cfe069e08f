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

use crate::scanner::HeaderScanner;
use crate::Float;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A Location, as described by the `LOCATION` line at the beginning of
/// an EPW file
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// The name of the City
    pub city: String,

    /// The name of the state (or something similar, varies with country)
    pub state: String,

    /// The name or ISO code of the country
    pub country: String,

    /// The Latitude in Degrees.
    ///
    /// South is negative, North is Positive.
    pub latitude: Float,

    /// The Longitude in Degrees.
    ///
    /// West is Negative, East is Positive
    pub longitude: Float,

    /// The Timezone of the location (GMT)
    pub timezone: Float,

    /// The elevation of the weather station
    pub elevation: Float,
}

impl Location {
    /// Parses the first line of an EPW file.
    ///
    /// The name elements are taken from the beginning of the line
    /// (i.e., `LOCATION,city,state,country,...`) and the numeric ones are
    /// taken from the end (i.e., `...,latitude,longitude,timezone,elevation`).
    pub fn from_epw_header(line: &str) -> Result<Self, String> {
        let elements = HeaderScanner::new(line.as_bytes()).scan_line()?;
        let n = elements.len();
        if n < 8 {
            return Err(format!(
                "weather file header has {} elements... expecting at least 8",
                n
            ));
        }
        if !elements[0].eq_ignore_ascii_case("LOCATION") {
            return Err(format!(
                "weather file header should start with 'LOCATION'... found '{}'",
                elements[0]
            ));
        }

        let number = |i: usize, name: &str| -> Result<Float, String> {
            elements[i]
                .parse::<Float>()
                .map_err(|_| format!("could not parse {} '{}' in weather file header", name, elements[i]))
        };

        Ok(Self {
            city: elements[1].clone(),
            state: elements[2].clone(),
            country: elements[3].clone(),
            latitude: number(n - 4, "latitude")?,
            longitude: number(n - 3, "longitude")?,
            timezone: number(n - 2, "time zone")?,
            elevation: number(n - 1, "elevation")?,
        })
    }

    /// Reads the first line of an EPW file and parses it as a [`Location`]
    pub fn from_epw_file<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let path = filename.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| format!("Could not read epw file '{}': {}", path.display(), e))?;
        let first_line = src.lines().next().unwrap_or("");
        Self::from_epw_header(first_line)
    }

    /// The name used for describing this location in a simulation
    /// input (i.e., the city and the country, separated by a tab)
    pub fn name(&self) -> String {
        format!("{}\t{}", self.city, self.country)
    }
}
