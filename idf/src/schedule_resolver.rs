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

use crate::records::{self, Record};
use crate::IdfError;
use model::ResourceLibrary;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// The first field of the header line of CSV schedules carrying their limits
pub const CSV_HEADER_MARKER: &str = "Honeybee";

/// Checks whether a schedule reference is the path to a CSV file
/// (as opposed to the name of a schedule in the library)
pub fn is_file_schedule(reference: &str) -> bool {
    reference.to_ascii_lowercase().ends_with(".csv")
}

fn file_name(reference: &str) -> String {
    Path::new(reference)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| reference.to_string())
}

/// The name of the object created for a CSV schedule: the name of the
/// file without extension, with dots replaced by underscores
/// (e.g., `C:\schedules\Occ.Sched.csv` becomes `Occ_Sched`)
pub fn file_schedule_name(reference: &str) -> String {
    let name = file_name(reference);
    let parts: Vec<&str> = name.split('.').collect();
    parts[..parts.len().saturating_sub(1)].join("_")
}

/// The name of the type limits read from the header of a CSV
/// schedule (e.g., `Occ.Sched.csv` gives `occschedTypeLimit`)
fn file_type_limits_name(reference: &str) -> String {
    let name = file_name(reference).to_lowercase();
    let parts: Vec<&str> = name.split('.').collect();
    format!("{}TypeLimit", parts[..parts.len().saturating_sub(1)].concat())
}

/// The result of resolving a schedule reference
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The records that define the schedule
    Records(Vec<Record>),

    /// A CSV schedule that has already been written
    AlreadyEmitted,

    /// The schedule is not in the library
    NotFound,
}

/// The limits and the number of hours in a CSV schedule
#[derive(Debug, Clone, PartialEq)]
struct CsvHeader {
    limits: Option<[String; 4]>,
    hours: usize,
}

fn parse_csv_header(content: &str) -> CsvHeader {
    let mut lines = content.lines();
    let limits = lines.next().and_then(|first| {
        let fields: Vec<&str> = first.split(',').map(|f| f.trim()).collect();
        if fields[0].starts_with(CSV_HEADER_MARKER) && fields.len() >= 5 {
            Some([
                fields[1].to_string(),
                fields[2].to_string(),
                fields[3].to_string(),
                fields[4].to_string(),
            ])
        } else {
            None
        }
    });
    let multiplier = lines
        .nth(1)
        .and_then(|third| third.split(',').next())
        .and_then(|f| f.trim().parse::<usize>().ok())
        .filter(|m| *m > 0)
        .unwrap_or(1);

    CsvHeader {
        limits,
        hours: 8760 * multiplier,
    }
}

/// Turns schedule references into the records that define them.
///
/// CSV schedules are copied into the working directory the first time
/// they are resolved; resolving them again produces nothing.
#[derive(Debug)]
pub struct ScheduleResolver<'a> {
    library: &'a ResourceLibrary,
    working_dir: PathBuf,
    /// Upper-case source path => name of the object
    file_schedules: HashMap<String, String>,
    /// Upper-case names of the objects written for CSV schedules
    taken_names: HashSet<String>,
}

impl<'a> ScheduleResolver<'a> {
    /// Creates a resolver that copies CSV schedules into `working_dir`
    pub fn new<P: AsRef<Path>>(library: &'a ResourceLibrary, working_dir: P) -> Self {
        Self {
            library,
            working_dir: working_dir.as_ref().to_path_buf(),
            file_schedules: HashMap::new(),
            taken_names: HashSet::new(),
        }
    }

    /// The name by which other objects refer to a schedule
    pub fn reference_name(&self, reference: &str) -> String {
        if !is_file_schedule(reference) {
            return reference.to_string();
        }
        match self.file_schedules.get(&reference.to_uppercase()) {
            Some(name) => name.clone(),
            None => file_schedule_name(reference),
        }
    }

    /// Checks whether a CSV schedule has already been written
    pub fn is_registered(&self, reference: &str) -> bool {
        self.file_schedules.contains_key(&reference.to_uppercase())
    }

    /// The name of the object and of the copied file for a CSV schedule
    /// that has not been resolved yet. Names already given to other files
    /// get a numeric suffix (e.g., `occ_2` and `occ_2.csv`).
    fn unique_name(&self, reference: &str) -> (String, String) {
        let base = file_schedule_name(reference);
        if !self.taken_names.contains(&base.to_uppercase()) {
            return (base, file_name(reference));
        }
        let mut i = 2;
        loop {
            let candidate = format!("{}_{}", base, i);
            if !self.taken_names.contains(&candidate.to_uppercase()) {
                let copy_name = format!("{}.csv", candidate);
                return (candidate, copy_name);
            }
            i += 1;
        }
    }

    /// Resolves a schedule reference. Only failing to read or copy a CSV
    /// schedule is an error.
    pub fn resolve(&mut self, reference: &str) -> Result<Resolution, IdfError> {
        if !is_file_schedule(reference) {
            return Ok(match self.library.schedule(reference) {
                Some(o) => Resolution::Records(vec![records::library_object(o)]),
                None => Resolution::NotFound,
            });
        }

        let key = reference.to_uppercase();
        if self.file_schedules.contains_key(&key) {
            return Ok(Resolution::AlreadyEmitted);
        }

        let source = PathBuf::from(reference);
        let copy_error = |e: std::io::Error| IdfError::ScheduleCopy {
            path: source.clone(),
            source: e,
        };
        let content = std::fs::read_to_string(&source).map_err(copy_error)?;
        let header = parse_csv_header(&content);

        // Files with the same name in different folders get their own copy
        let (name, copy_name) = self.unique_name(reference);
        let destination = self.working_dir.join(&copy_name);
        if destination != source {
            std::fs::copy(&source, &destination).map_err(copy_error)?;
        }

        self.taken_names.insert(name.to_uppercase());
        self.file_schedules.insert(key, name.clone());

        let mut ret = Vec::with_capacity(2);
        let type_limits = match &header.limits {
            Some(limits) => {
                let limits_name = file_type_limits_name(&copy_name);
                ret.push(records::schedule_type_limits(&limits_name, limits));
                limits_name
            }
            None => "Fraction".to_string(),
        };
        ret.push(records::schedule_file(
            &name,
            &type_limits,
            &destination.to_string_lossy(),
            header.hours,
        ));
        Ok(Resolution::Records(ret))
    }
}

/***********/
/* TESTING */
/***********/
