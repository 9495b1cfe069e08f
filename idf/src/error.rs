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

use std::path::PathBuf;
use thiserror::Error;

/// The errors that stop an IDF file from being written.
///
/// Missing library objects or broken geometry are not errors: they are
/// reported as warnings in the [`crate::Report`] and the file is still written.
#[derive(Debug, Error)]
pub enum IdfError {
    /// The model was written in a format version this crate cannot read
    #[error("Model version '{found}' is not supported... expecting a version between {min} (inclusive) and {max} (exclusive)")]
    IncompatibleVersion {
        /// The version of the model
        found: String,
        /// The oldest supported version
        min: String,
        /// The first unsupported version
        max: String,
    },

    /// The model does not say which version it is
    #[error("The model does not have a version")]
    MissingVersion,

    /// The model is not in meters, centimeters or millimeters
    #[error("Non-metric units ({0}) are not supported")]
    NonMetricUnits(String),

    /// The weather file does not exist, its path contains characters
    /// the simulation engine cannot handle, or its header cannot be read
    #[error("Weather file error: {0}")]
    WeatherFile(String),

    /// A CSV schedule could not be read or copied into the working directory
    #[error("Could not copy schedule file '{}': {source}", path.display())]
    ScheduleCopy {
        /// The path of the schedule file
        path: PathBuf,
        /// What went wrong
        source: std::io::Error,
    },

    /// A model, library, parameter or output file could not be read
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other input or output error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/***********/
/* TESTING */
/***********/
