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

use crate::{Boundary, Float, Loop3D};
use serde::{Deserialize, Serialize};

/// The kind of [`Fenestration`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FenestrationType {
    /// A window
    #[default]
    Window,
    /// A door made mostly of glass
    GlassDoor,
    /// An opaque door
    Door,
}

impl FenestrationType {
    /// The name of the surface type, as understood by EnergyPlus
    pub fn idf_name(&self) -> &'static str {
        match self {
            FenestrationType::Window => "Window",
            FenestrationType::GlassDoor => "GlassDoor",
            FenestrationType::Door => "Door",
        }
    }

    /// The construction used when none was assigned. It depends on whether the
    /// parent surface is in the building envelope.
    pub fn default_construction(&self, parent_boundary: &Boundary) -> &'static str {
        match (self, parent_boundary.is_exterior()) {
            (FenestrationType::Door, _) => "Exterior Door",
            (FenestrationType::Window | FenestrationType::GlassDoor, true) => "Exterior Window",
            (FenestrationType::Window | FenestrationType::GlassDoor, false) => "Interior Window",
        }
    }
}

/// Shading devices attached to a window (e.g., blinds)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowShading {
    /// The IDF text describing the shading material and its control. It is
    /// written to the output file as it is.
    pub records: String,

    /// The name of the schedule that controls the shading device
    #[serde(default)]
    pub schedule: Option<String>,
}

impl WindowShading {
    /// The schedule of the shading, unless it is always on (in which case
    /// there is no need to write it).
    pub fn controlling_schedule(&self) -> Option<&str> {
        match &self.schedule {
            Some(s) if !s.eq_ignore_ascii_case("ALWAYSON") => Some(s),
            _ => None,
        }
    }
}

/// A window, glass door or door within a [`crate::Surface`].
///
/// ```
/// use model::{Fenestration, Boundary};
///
/// let f : Fenestration = json5::from_str("{
///     name: 'Office_Window',
///     vertices: [1,0,1, 3,0,1, 3,0,2, 1,0,2],
/// }").unwrap();
/// assert_eq!(f.multiplier, 1);
/// assert_eq!(f.effective_construction(&Boundary::Outdoors), "Exterior Window");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fenestration {
    /// The name of the fenestration
    pub name: String,

    /// The kind of fenestration
    #[serde(default)]
    pub fenestration_type: FenestrationType,

    /// The vertices of the fenestration
    pub vertices: Loop3D,

    /// The name of the construction. If none is given, a default
    /// one will be used
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction: Option<String>,

    /// The name of the fenestration at the other side, when
    /// the parent surface is interior
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_object: Option<String>,

    /// The view factor to the ground. Calculated by the
    /// simulation engine when not given
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_view_factor: Option<Float>,

    /// The name of a `WindowShadingControl` object
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading_control: Option<String>,

    /// The name of a `WindowProperty:FrameAndDivider` object
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_and_divider: Option<String>,

    /// The number of identical fenestrations this one represents
    #[serde(default = "default_multiplier")]
    pub multiplier: usize,

    /// Shading devices
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading: Option<WindowShading>,
}

fn default_multiplier() -> usize {
    1
}

impl Fenestration {
    /// Creates a new window with default attributes
    pub fn new<S: Into<String>>(name: S, vertices: Loop3D) -> Self {
        Self {
            name: name.into(),
            fenestration_type: FenestrationType::Window,
            vertices,
            construction: None,
            boundary_object: None,
            ground_view_factor: None,
            shading_control: None,
            frame_and_divider: None,
            multiplier: 1,
            shading: None,
        }
    }

    /// The construction assigned to the fenestration or, if
    /// there is none, the default one
    pub fn effective_construction(&self, parent_boundary: &Boundary) -> &str {
        match &self.construction {
            Some(c) => c,
            None => self.fenestration_type.default_construction(parent_boundary),
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_default_constructions() {
        let ground = Boundary::Ground;
        let interior = Boundary::Surface {
            surface: "other".into(),
        };
        assert_eq!(
            FenestrationType::Window.default_construction(&ground),
            "Exterior Window"
        );
        assert_eq!(
            FenestrationType::GlassDoor.default_construction(&interior),
            "Interior Window"
        );
        assert_eq!(
            FenestrationType::Door.default_construction(&interior),
            "Exterior Door"
        );
    }

    #[test]
    fn test_serde() -> Result<(), String> {
        let f: Fenestration = json5::from_str(
            "{
            name: 'Door',
            fenestration_type: 'Door',
            construction: 'Wood door',
            multiplier: 2,
            vertices: [0,0,0, 1,0,0, 1,0,2, 0,0,2],
            shading: {
                records: 'WindowMaterial:Blind, ...;',
                schedule: 'BLINDS'
            }
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(f.fenestration_type, FenestrationType::Door);
        assert_eq!(f.effective_construction(&Boundary::Outdoors), "Wood door");
        assert_eq!(f.multiplier, 2);
        assert_eq!(f.vertices.len(), 4);
        let shading = f.shading.as_ref().ok_or("no shading")?;
        assert_eq!(shading.controlling_schedule(), Some("BLINDS"));

        let s = serde_json::to_string(&f).map_err(|e| e.to_string())?;
        let f2: Fenestration = serde_json::from_str(&s).map_err(|e| e.to_string())?;
        assert_eq!(f, f2);
        Ok(())
    }

    #[test]
    fn test_always_on_shading() {
        let s = WindowShading {
            records: String::new(),
            schedule: Some("AlwaysOn".into()),
        };
        assert!(s.controlling_schedule().is_none());
        let s = WindowShading::default();
        assert!(s.controlling_schedule().is_none());
    }
}
