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
use std::cmp::Ordering;
use std::fmt;

/// Number of days in each month of a non-leap year
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the number of days in a month (1 to 12) of a
/// non-leap year, or an error if the month does not exist.
///
/// ```
/// use calendar::days_in_month;
/// assert_eq!(days_in_month(2).unwrap(), 28);
/// assert!(days_in_month(13).is_err());
/// ```
pub fn days_in_month(month: u8) -> Result<u8, String> {
    if month == 0 || month > 12 {
        return Err(format!("Month '{}' does not exist", month));
    }
    Ok(MONTH_LENGTHS[month as usize - 1])
}

/// An extremely simple Date object. We don't
/// need anything else, I think.
/// It does not consider years at all!
/// Days and Months are counted from 1
/// (e.g. January is 1, not 0)
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Date {
    /// Months of the year, from 1 to 12
    pub month: u8,

    /// Day of the month, from 1 to N
    pub day: u8,

    /// Hour of the day, from 0.0 to 24.0
    pub hour: Float,
}

impl Default for Date {
    fn default() -> Self {
        Self {
            month: 1,
            day: 1,
            hour: 0.,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hour = self.hour.floor();
        let mut minute = ((self.hour - hour) * 60.0).round();
        if minute >= 60.0 {
            hour += 1.0;
            minute = 0.0
        }
        write!(
            f,
            "{:02}/{:02} {:02}:{:02}",
            self.month, self.day, hour as usize, minute as usize
        )
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.month.cmp(&other.month) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.day.cmp(&other.day) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        self.hour.partial_cmp(&other.hour)
    }
}

impl Date {
    /// Creates a new [`Date`], checking that the month, the
    /// day of the month and the hour make sense
    ///
    /// ```
    /// use calendar::Date;
    ///
    /// assert!(Date::new(2, 28, 13.).is_ok());
    /// assert!(Date::new(2, 29, 13.).is_err());
    /// assert!(Date::new(1, 1, 25.).is_err());
    /// ```
    pub fn new(month: u8, day: u8, hour: Float) -> Result<Self, String> {
        let d = Self { month, day, hour };
        d.validate()?;
        Ok(d)
    }

    /// Checks that the [`Date`] exists in a non-leap year
    pub fn validate(&self) -> Result<(), String> {
        let n_days = days_in_month(self.month)?;
        if self.day == 0 || self.day > n_days {
            return Err(format!(
                "Day '{}' does not exist in month '{}'",
                self.day, self.month
            ));
        }
        if !(0. ..=24.).contains(&self.hour) {
            return Err(format!(
                "Hour '{}' should be between 0 and 24",
                self.hour
            ));
        }
        Ok(())
    }

    /// Checks whether `self` is earlier than `other`
    pub fn is_earlier(&self, other: Date) -> bool {
        matches!(self.partial_cmp(&other), Some(Ordering::Less))
    }
}

/***********/
/* TESTING */
/***********/
