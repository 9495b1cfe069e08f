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

//! Writes [EnergyPlus](https://energyplus.net) input files (IDF) from
//! building models and runs them.
//!
//! The heavy lifting is done by the [`idf`] crate; this one puts
//! the files where they belong, calls EnergyPlus and tells
//! where the results are.
//!
//! ```
//! use idf_writer::WorkingDirectory;
//! use std::path::Path;
//!
//! let wd = WorkingDirectory::new(Some(Path::new("/sims")), Some("office"));
//! assert_eq!(wd.idf_path(), Path::new("/sims/office/EnergyPlus/office.idf"));
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

mod working_dir;
pub use working_dir::{default_root, idf_file_name, WorkingDirectory, DEFAULT_IDF_NAME};

/// Writes scripts that call EnergyPlus, and runs them
pub mod runner;
pub use runner::{
    batch_script, default_energyplus_dir, read_error_file, run_subprocess, shell_script,
    CompletedProcess, EnergyPlusRunner, ScriptFlavor,
};

/// A module with some useful functions to run a simulation
pub mod run_simulation;
pub use run_simulation::{simulate, SimOptions, SimulationOutput};

// Re-exports
pub use calendar::{AnalysisPeriod, Date};
pub use geometry;
pub use idf::{
    check_model, IdfError, IdfWriter, Report, SimulationParameters, WriteRequest,
    ENERGYPLUS_VERSION,
};
pub use model;
pub use model::{Model, ResourceLibrary};
pub use weather::{check_weather_path, Location};
