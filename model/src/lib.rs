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

#![deny(missing_docs)]

//! This crate contains the data structure utilized for describing
//! a building that is to be written as an EnergyPlus input file.
//!
//! It contains the [`Zone`]s of the building (with their [`Surface`]s,
//! [`Fenestration`]s, loads, schedules and HVAC), the [`ShadingSurface`]s
//! around it, and the [`ResourceLibrary`] in which materials, constructions
//! and schedules are looked up by name.
//!
//! Models are read from JSON or JSON5 files; libraries can also be read
//! from IDF text.
//!
//! # Example
//!
//! ```
//! use model::Model;
//!
//! let model = Model::from_json5("{
//!     version: '0.5.0',
//!     zones: [{
//!         name: 'Office',
//!         surfaces: [{
//!             name: 'Office_Wall',
//!             surface_type: 'Wall',
//!             vertices: [0,0,0, 4,0,0, 4,0,3, 0,0,3],
//!         }],
//!     }],
//! }").unwrap();
//!
//! assert_eq!(model.zones.len(), 1);
//! assert_eq!(model.zones[0].surfaces[0].effective_construction(), "Exterior Wall");
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

pub use geometry::{Loop3D, Point3D};

/// The module containing the functions that allow parsing IDF objects from text
mod scanner;

/// Warning and error messages
mod error_msgs;
pub use error_msgs::{format_message, print_error, print_warning, MessageKind};

/// The model itself
mod model;
pub use crate::model::{parse_version, Model};

/// Units and orientation of the model
mod units;
pub use units::{North, UnitSystem};

/// Represents the boundary of a [`Surface`] (e.g. it can lead to the ground, outdoors or another surface)
mod boundary;
pub use boundary::Boundary;

/// Windows, glass doors and doors
mod fenestration;
pub use fenestration::{Fenestration, FenestrationType, WindowShading};

/// A fixed surface enclosing a [`Zone`]
mod surface;
pub use surface::{Surface, SurfaceType};

/// Surfaces that cast shadows but do not enclose any zone
mod shading;
pub use shading::ShadingSurface;

/// A thermal zone and its loads and schedules
mod zone;
pub use zone::{InternalMass, Zone, ZoneKind, ZoneLoads, ZoneSchedules};

/// Natural ventilation and air mixing between zones
mod ventilation;
pub use ventilation::{AirMixing, FanVentilation, NaturalVentilation, OpeningVentilation, VentilationLimits};

/// Heating and cooling systems
pub mod hvac;
pub use hvac::{HVACSystem, IdealLoadsSettings};

/// Named materials, constructions and schedules
mod library;
pub use library::{LibraryField, LibraryObject, ResourceLibrary, ALWAYS_ON};
