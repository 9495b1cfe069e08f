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

use serde::{Deserialize, Serialize};
mod ideal_loads;
pub use crate::hvac::ideal_loads::IdealLoadsSettings;

/// The heating and cooling system of a zone.
///
/// Only ideal loads systems can be written. Any other system is
/// replaced by one of those (and the user is warned).
///
/// ```
/// use model::HVACSystem;
///
/// let hvac : HVACSystem = json5::from_str("{type: 'Other', name: 'VAV with reheat'}").unwrap();
/// assert!(!hvac.is_ideal_loads());
/// assert!(HVACSystem::default().is_ideal_loads());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
pub enum HVACSystem {
    /// An ideal system that delivers whatever is needed to keep the
    /// zone within its setpoints
    #[default]
    IdealLoads,

    /// Any other system
    Other {
        /// The name of the system
        name: String,
    },
}

impl HVACSystem {
    /// Checks whether this is an ideal loads system
    pub fn is_ideal_loads(&self) -> bool {
        matches!(self, HVACSystem::IdealLoads)
    }
}
