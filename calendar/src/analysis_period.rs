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

use crate::{Date, Float};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The period of the year covered by a simulation.
///
/// It goes from the `start` [`Date`] to the `end` [`Date`], both included.
/// Periods in which `end` is earlier than `start` wrap around the end
/// of the year (e.g., from November to February).
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "start": { "month": 6, "day": 21, "hour": 1 },
///     "end": { "month": 9, "day": 21, "hour": 24 }
/// }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisPeriod {
    /// The first day of the period
    pub start: Date,

    /// The last day of the period
    pub end: Date,
}

impl Default for AnalysisPeriod {
    /// The whole year, from January 1st at 1AM to December 31st at midnight
    fn default() -> Self {
        Self {
            start: Date {
                month: 1,
                day: 1,
                hour: 1.,
            },
            end: Date {
                month: 12,
                day: 31,
                hour: 24.,
            },
        }
    }
}

impl AnalysisPeriod {
    /// Creates a new [`AnalysisPeriod`], validating both ends
    pub fn new(start: Date, end: Date) -> Result<Self, String> {
        start.validate()?;
        end.validate()?;
        Ok(Self { start, end })
    }

    /// Checks whether this period covers the whole year
    pub fn is_full_year(&self) -> bool {
        self.start.month == 1 && self.start.day == 1 && self.end.month == 12 && self.end.day == 31
    }

    /// Checks whether the period goes through the end of the year
    pub fn wraps_around(&self) -> bool {
        self.end.is_earlier(self.start)
    }
}

impl FromStr for AnalysisPeriod {
    type Err = String;

    /// Parses six comma-separated numbers: start month, start day,
    /// start hour, end month, end day, end hour.
    ///
    /// ```
    /// use calendar::AnalysisPeriod;
    ///
    /// let p : AnalysisPeriod = "6, 21, 1, 9, 21, 24".parse().unwrap();
    /// assert_eq!(p.start.month, 6);
    /// assert_eq!(p.end.day, 21);
    /// assert!("6,21,1".parse::<AnalysisPeriod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<&str> = s.split(',').map(|x| x.trim()).collect();
        if values.len() != 6 {
            return Err(format!(
                "An analysis period needs 6 comma-separated values (start month, day and hour; end month, day and hour)... found {} in '{}'",
                values.len(),
                s
            ));
        }
        let int = |v: &str| -> Result<u8, String> {
            v.parse::<u8>()
                .map_err(|_| format!("Could not parse '{}' as a month or day", v))
        };
        let float = |v: &str| -> Result<Float, String> {
            v.parse::<Float>()
                .map_err(|_| format!("Could not parse '{}' as an hour", v))
        };

        let start = Date::new(int(values[0])?, int(values[1])?, float(values[2])?)?;
        let end = Date::new(int(values[3])?, int(values[4])?, float(values[5])?)?;
        Self::new(start, end)
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_default_is_full_year() {
        let p = AnalysisPeriod::default();
        assert!(p.is_full_year());
        assert!(!p.wraps_around());
        assert_eq!(p.start.month, 1);
        assert_eq!(p.end.month, 12);
        assert_eq!(p.end.day, 31);
    }

    #[test]
    fn test_parse() -> Result<(), String> {
        let p: AnalysisPeriod = "11,1,1,2,28,24".parse()?;
        assert_eq!(p.start.month, 11);
        assert_eq!(p.start.day, 1);
        assert_eq!(p.end.month, 2);
        assert_eq!(p.end.day, 28);
        assert!(p.wraps_around());
        assert!(!p.is_full_year());

        assert!("1,1,1,2,30,24".parse::<AnalysisPeriod>().is_err());
        assert!("a,1,1,2,3,24".parse::<AnalysisPeriod>().is_err());
        Ok(())
    }

    #[test]
    fn test_serde() -> Result<(), String> {
        let p: AnalysisPeriod = json5::from_str(
            "{
                start: {month: 6, day: 21, hour: 1},
                end: {month: 9, day: 21, hour: 24},
            }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(p.start.month, 6);
        assert_eq!(p.end.month, 9);

        let json = serde_json::to_string(&p).map_err(|e| e.to_string())?;
        let back: AnalysisPeriod = serde_json::from_str(&json).map_err(|e| e.to_string())?;
        assert_eq!(p, back);
        Ok(())
    }
}
