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

use crate::{Float, Loop3D};
use serde::{Deserialize, Serialize};

/// A surface that casts shadows over the building (e.g., a neighbouring
/// building or a tree) but does not enclose any zone. It may be
/// made of several disjoint loops.
///
/// ```
/// use model::ShadingSurface;
///
/// let s : ShadingSurface = json5::from_str("{
///     name: 'Tree',
///     loops: [
///         [0,0,5, 1,0,5, 1,1,5],
///         [3,0,5, 4,0,5, 4,1,5],
///     ]
/// }").unwrap();
/// assert_eq!(s.loops.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadingSurface {
    /// The name of the shading surface
    pub name: String,

    /// The loops that form the shading surface
    pub loops: Vec<Loop3D>,

    /// The schedule of the transmittance of the surface (i.e., a schedule
    /// name or the path to a CSV file). Opaque if not given
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmittance_schedule: Option<String>,
}

impl ShadingSurface {
    /// Multiplies every coordinate by a factor
    pub fn scale(&mut self, factor: Float) {
        self.loops = self.loops.iter().map(|l| l.scale(factor)).collect();
    }
}
