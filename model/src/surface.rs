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

use crate::{Boundary, Fenestration, Float, Loop3D};
use serde::{Deserialize, Serialize};

/// The kind of [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    /// A wall
    Wall,
    /// A roof
    Roof,
    /// A floor
    Floor,
    /// A ceiling
    Ceiling,
    /// A virtual wall that lets air and light go through
    AirWall,
}

impl SurfaceType {
    /// The name of the surface type, as understood by EnergyPlus. Air
    /// walls are written as walls
    pub fn idf_name(&self) -> &'static str {
        match self {
            SurfaceType::Wall | SurfaceType::AirWall => "Wall",
            SurfaceType::Roof => "Roof",
            SurfaceType::Floor => "Floor",
            SurfaceType::Ceiling => "Ceiling",
        }
    }

    /// The construction used when none was assigned
    ///
    /// ```
    /// use model::{SurfaceType, Boundary};
    ///
    /// assert_eq!(SurfaceType::Wall.default_construction(&Boundary::Outdoors), "Exterior Wall");
    /// assert_eq!(SurfaceType::Floor.default_construction(&Boundary::Ground), "Exterior Floor");
    /// assert_eq!(SurfaceType::AirWall.default_construction(&Boundary::Adiabatic), "Air Wall");
    /// ```
    pub fn default_construction(&self, boundary: &Boundary) -> &'static str {
        let exterior = boundary.is_exterior();
        match self {
            SurfaceType::Wall => {
                if exterior {
                    "Exterior Wall"
                } else {
                    "Interior Wall"
                }
            }
            SurfaceType::Roof => {
                if exterior {
                    "Exterior Roof"
                } else {
                    "Interior Ceiling"
                }
            }
            SurfaceType::Floor => {
                if exterior {
                    "Exterior Floor"
                } else {
                    "Interior Floor"
                }
            }
            SurfaceType::Ceiling => "Interior Ceiling",
            SurfaceType::AirWall => "Air Wall",
        }
    }
}

/// A fixed (i.e., not movable) surface enclosing a zone. It may contain
/// [`Fenestration`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Surface {
    /// The name of the surface
    pub name: String,

    /// The kind of surface
    pub surface_type: SurfaceType,

    /// The vertices of the surface
    pub vertices: Loop3D,

    /// The name of the construction. If none is given, a
    /// default one (depending on the surface type and boundary) is used.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction: Option<String>,

    /// What is at the other side of the surface
    #[serde(default)]
    pub boundary: Boundary,

    /// Is the surface exposed to the sun? By default, only
    /// surfaces leading outdoors are
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun_exposure: Option<bool>,

    /// Is the surface exposed to the wind? By default, only
    /// surfaces leading outdoors are
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_exposure: Option<bool>,

    /// The view factor to the ground. Calculated by the
    /// simulation engine when not given
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_view_factor: Option<Float>,

    /// The windows and doors in the surface
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fenestrations: Vec<Fenestration>,
}

impl Surface {
    /// Creates a new [`Surface`] leading outdoors, with a default construction
    pub fn new<S: Into<String>>(name: S, surface_type: SurfaceType, vertices: Loop3D) -> Self {
        Self {
            name: name.into(),
            surface_type,
            vertices,
            construction: None,
            boundary: Boundary::default(),
            sun_exposure: None,
            wind_exposure: None,
            ground_view_factor: None,
            fenestrations: Vec::new(),
        }
    }

    /// The construction assigned to the surface or, if
    /// there is none, the default one
    pub fn effective_construction(&self) -> &str {
        match &self.construction {
            Some(c) => c,
            None => self.surface_type.default_construction(&self.boundary),
        }
    }

    /// Is the surface exposed to the sun?
    pub fn is_sun_exposed(&self) -> bool {
        self.sun_exposure.unwrap_or_else(|| self.boundary.is_exposed())
    }

    /// Is the surface exposed to the wind?
    pub fn is_wind_exposed(&self) -> bool {
        self.wind_exposure
            .unwrap_or_else(|| self.boundary.is_exposed())
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_defaults() -> Result<(), String> {
        let s: Surface = json5::from_str(
            "{
            name: 'Floor',
            surface_type: 'Floor',
            boundary: {type: 'Ground'},
            vertices: [0,0,0, 0,1,0, 1,1,0, 1,0,0],
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(s.effective_construction(), "Exterior Floor");
        assert!(!s.is_sun_exposed());
        assert!(!s.is_wind_exposed());
        assert!(s.fenestrations.is_empty());

        let mut s = s;
        s.construction = Some("Slab".into());
        s.sun_exposure = Some(true);
        assert_eq!(s.effective_construction(), "Slab");
        assert!(s.is_sun_exposed());
        Ok(())
    }

    #[test]
    fn test_air_wall() -> Result<(), String> {
        let s: Surface = json5::from_str(
            "{
            name: 'Open',
            surface_type: 'AirWall',
            boundary: {type: 'Surface', surface: 'Other Open'},
            vertices: [0,0,0, 1,0,0, 1,0,1, 0,0,1],
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(s.surface_type.idf_name(), "Wall");
        assert_eq!(s.effective_construction(), "Air Wall");
        assert_eq!(s.boundary.object(), "Other Open");
        Ok(())
    }

    #[test]
    fn test_unknown_fields() {
        let s = json5::from_str::<Surface>(
            "{
            name: 'Open',
            surface_type: 'Wall',
            colour: 'red',
            vertices: [0,0,0, 1,0,0, 1,0,1, 0,0,1],
        }",
        );
        assert!(s.is_err());
    }
}
