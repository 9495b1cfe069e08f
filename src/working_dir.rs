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

use std::path::{Path, PathBuf};

/// The name given to IDF files when none is provided
pub const DEFAULT_IDF_NAME: &str = "unnamed.idf";

/// Makes sure the name of an IDF file ends with `idf`, using
/// [`DEFAULT_IDF_NAME`] when no name (or an empty one) is given.
///
/// ```
/// use idf_writer::idf_file_name;
///
/// assert_eq!(idf_file_name(None), "unnamed.idf");
/// assert_eq!(idf_file_name(Some("office")), "office.idf");
/// assert_eq!(idf_file_name(Some("office.idf")), "office.idf");
/// ```
pub fn idf_file_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        None | Some("") => DEFAULT_IDF_NAME.to_string(),
        Some(n) if n.ends_with("idf") => n.to_string(),
        Some(n) => format!("{}.idf", n),
    }
}

/// The folder under which working directories are created
/// when no other is given
pub fn default_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("c:\\ladybug")
    } else {
        std::env::temp_dir().join("ladybug")
    }
}

/// The folder where the IDF file is written and the simulation is run:
/// `<root>/<name without extension>/EnergyPlus/<name>.idf`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory {
    dir: PathBuf,
    idf_name: String,
}

impl WorkingDirectory {
    /// Builds the working directory of an IDF file. It is not created
    /// until [`WorkingDirectory::create`] is called.
    pub fn new(root: Option<&Path>, idf_name: Option<&str>) -> Self {
        let idf_name = idf_file_name(idf_name);
        let root = match root {
            Some(r) if !r.as_os_str().is_empty() => r.to_path_buf(),
            _ => default_root(),
        };
        let stem = idf_name.split(".idf").next().unwrap_or(&idf_name).to_string();
        Self {
            dir: root.join(stem).join("EnergyPlus"),
            idf_name,
        }
    }

    /// Creates the folder (and its parents) if it does not exist
    pub fn create(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    /// The folder itself
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The name of the IDF file, including the extension
    pub fn idf_name(&self) -> &str {
        &self.idf_name
    }

    /// The name of the IDF file without the `.idf` extension
    pub fn base_name(&self) -> &str {
        self.idf_name
            .strip_suffix(".idf")
            .unwrap_or(&self.idf_name)
    }

    /// Where the IDF file goes
    pub fn idf_path(&self) -> PathBuf {
        self.dir.join(&self.idf_name)
    }

    /// The IDF path with another extension (e.g., `csv` or `err`)
    pub fn sibling(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.base_name(), extension))
    }

    /// The results file, if the simulation wrote it where expected.
    ///
    /// The conventional `eplusout.csv` within the folder is preferred
    /// over `<name>.csv` when it can be opened.
    pub fn result_file(&self) -> PathBuf {
        let eplusout = self.dir.join("eplusout.csv");
        match std::fs::File::open(&eplusout) {
            Ok(_) => eplusout,
            Err(_) => self.sibling("csv"),
        }
    }

    /// The error log written by the simulation
    pub fn error_file(&self) -> PathBuf {
        self.sibling("err")
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_idf_file_name() {
        assert_eq!(idf_file_name(Some("")), "unnamed.idf");
        assert_eq!(idf_file_name(Some("  house ")), "house.idf");
        assert_eq!(idf_file_name(Some("my.idf")), "my.idf");
    }

    #[test]
    fn test_convention() {
        let wd = WorkingDirectory::new(Some(Path::new("/data/runs")), Some("office"));
        assert_eq!(wd.dir(), Path::new("/data/runs/office/EnergyPlus"));
        assert_eq!(wd.idf_path(), Path::new("/data/runs/office/EnergyPlus/office.idf"));
        assert_eq!(wd.base_name(), "office");
        assert_eq!(wd.error_file(), Path::new("/data/runs/office/EnergyPlus/office.err"));

        let wd = WorkingDirectory::new(None, None);
        assert_eq!(wd.dir(), default_root().join("unnamed").join("EnergyPlus"));
    }

    #[test]
    fn test_result_file() -> Result<(), String> {
        let root = tempfile::tempdir().map_err(|e| e.to_string())?;
        let wd = WorkingDirectory::new(Some(root.path()), Some("office.idf"));
        wd.create().map_err(|e| e.to_string())?;
        assert_eq!(wd.result_file(), wd.dir().join("office.csv"));

        std::fs::write(wd.dir().join("eplusout.csv"), "Date/Time,\n").map_err(|e| e.to_string())?;
        assert_eq!(wd.result_file(), wd.dir().join("eplusout.csv"));
        Ok(())
    }
}
