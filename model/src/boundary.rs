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

/// Represents the boundary of a `Surface`
///
/// By default (i.e., if no boundary is assigned to a `Surface`),
/// the boundary will be assumed to be outside.
///
/// ```
/// use model::Boundary;
///
/// let b : Boundary = serde_json::from_str(r#"{"type": "Surface", "surface": "Kitchen_Wall"}"#).unwrap();
/// assert_eq!(b.condition(), "Surface");
/// assert_eq!(b.object(), "Kitchen_Wall");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
pub enum Boundary {
    /// Leads Outdoors. This is also the default (i.e., when no
    /// Boundary is set)
    #[default]
    Outdoors,

    /// The Surface is in contact with the Ground
    Ground,

    /// The Surface leads to another surface, in another zone
    Surface {
        /// The name of the surface at the other side
        surface: String,
    },

    /// The other side of the surface is at the same
    /// conditions as this side
    Adiabatic,
}

impl Boundary {
    /// The name of the boundary condition, as understood by EnergyPlus
    pub fn condition(&self) -> &'static str {
        match self {
            Boundary::Outdoors => "Outdoors",
            Boundary::Ground => "Ground",
            Boundary::Surface { .. } => "Surface",
            Boundary::Adiabatic => "Adiabatic",
        }
    }

    /// The name of the object at the other side of the boundary. It
    /// is empty unless the boundary is another surface.
    pub fn object(&self) -> &str {
        match self {
            Boundary::Surface { surface } => surface,
            Boundary::Outdoors | Boundary::Ground | Boundary::Adiabatic => "",
        }
    }

    /// Surfaces that lead outdoors are exposed to sun and wind, unless
    /// said otherwise
    pub fn is_exposed(&self) -> bool {
        matches!(self, Boundary::Outdoors)
    }

    /// Checks whether the surface separates the building from
    /// the exterior (i.e., outdoors or ground)
    pub fn is_exterior(&self) -> bool {
        matches!(self, Boundary::Outdoors | Boundary::Ground)
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde_boundary() -> Result<(), String> {
        let b: Boundary = json5::from_str("{type: 'Ground'}").map_err(|e| e.to_string())?;
        assert_eq!(b, Boundary::Ground);
        assert_eq!(b.condition(), "Ground");
        assert_eq!(b.object(), "");
        assert!(b.is_exterior());
        assert!(!b.is_exposed());

        let b: Boundary = json5::from_str("{type: 'Surface', surface: 'Other wall'}")
            .map_err(|e| e.to_string())?;
        assert_eq!(b.object(), "Other wall");
        assert!(!b.is_exterior());

        // Serialize and deserialize again
        let s = serde_json::to_string(&b).map_err(|e| e.to_string())?;
        let b2: Boundary = serde_json::from_str(&s).map_err(|e| e.to_string())?;
        assert_eq!(b, b2);

        assert!(json5::from_str::<Boundary>("{type: 'Surface', space: 'Other'}").is_err());
        Ok(())
    }

    #[test]
    fn default_is_outdoors() {
        let b = Boundary::default();
        assert_eq!(b.condition(), "Outdoors");
        assert!(b.is_exposed());
    }
}
