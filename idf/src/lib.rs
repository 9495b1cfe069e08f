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

//! Writes [`model::Model`]s as EnergyPlus input (IDF) files.
//!
//! The writing happens in seven stages, always in the same order: the
//! header (simulation parameters, location, run period), the shading
//! surfaces, the geometry of the zones, the constructions and materials,
//! the schedules, the loads and HVAC of each group of zones, and the
//! output requests.
//!
//! Constructions, materials and schedules are looked up in a
//! [`model::ResourceLibrary`] and written once, no matter how many
//! surfaces or zones reference them. Missing library objects, broken
//! surfaces and windows are reported as warnings in a [`Report`] and
//! the file is still written.
//!
//! ```
//! use idf::{IdfWriter, Report, WriteRequest};
//! use model::{Model, ResourceLibrary};
//! use weather::Location;
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
//! let location = Location::from_epw_header(
//!     "LOCATION,Wellington,-,NZL,IWEC Data,934360,-41.33,174.80,12.0,6.0"
//! ).unwrap();
//!
//! let library = ResourceLibrary::builtin();
//! let dir = std::env::temp_dir();
//! let writer = IdfWriter::new(&model, &library, &dir);
//! let mut idf: Vec<u8> = Vec::new();
//! let mut report = Report::new();
//! writer.write(&mut idf, &WriteRequest::new("office.idf", location), &mut report).unwrap();
//!
//! let idf = String::from_utf8(idf).unwrap();
//! assert!(idf.contains("\nBuildingSurface:Detailed,\n\tOffice_Wall,"));
//! // 'Exterior Wall' is not in the library
//! assert_eq!(report.warnings().len(), 1);
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

/// The errors that prevent a file from being written
mod error;
pub use error::IdfError;

/// The log of a write
mod report;
pub use report::{Report, ReportEntry};

/// The parameters of the simulation
pub mod params;
pub use params::{SimulationParameters, SolarDistribution, Terrain, YesNo};

/// Functions that produce IDF objects
pub mod records;

/// Collects the constructions, materials and schedules used by the model
pub mod dedup;
pub use dedup::{DeduplicationContext, OrderedNameSet, ZoneGrouping};

/// Turns schedule references into IDF objects
pub mod schedule_resolver;
pub use schedule_resolver::{Resolution, ScheduleResolver};

/// Writes the whole IDF file
mod writer;
pub use writer::{check_model, IdfWriter, WriteRequest, ENERGYPLUS_VERSION};
