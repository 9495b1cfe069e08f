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

use crate::working_dir::WorkingDirectory;
use idf::Report;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where EnergyPlus is usually installed
pub fn default_energyplus_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\EnergyPlusV8-1-0")
    } else {
        PathBuf::from("/usr/local/EnergyPlus-8-1-0")
    }
}

/// The kind of script used to call EnergyPlus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFlavor {
    /// A Windows batch file calling `Epl-run`
    Batch,
    /// A POSIX shell script calling `runenergyplus`
    Shell,
}

impl ScriptFlavor {
    /// The flavor of the current platform
    pub fn host() -> Self {
        if cfg!(windows) {
            ScriptFlavor::Batch
        } else {
            ScriptFlavor::Shell
        }
    }

    /// The extension of the script file
    pub fn extension(&self) -> &'static str {
        match self {
            ScriptFlavor::Batch => "bat",
            ScriptFlavor::Shell => "sh",
        }
    }
}

/// Builds the text of a Windows batch file that moves into the working
/// directory and runs `Epl-run` on the IDF file.
///
/// ```
/// use idf_writer::batch_script;
///
/// let script = batch_script("c:\\ladybug\\office\\EnergyPlus", "office.idf", "c:\\weather\\wellington.epw", "C:\\EnergyPlusV8-1-0");
/// let expected = "c:\ncd\\ladybug\\office\\EnergyPlus\\\nC:\\EnergyPlusV8-1-0\\Epl-run c:\\ladybug\\office\\EnergyPlus\\office c:\\ladybug\\office\\EnergyPlus\\office idf \"c:\\weather\\wellington.epw\" EP N nolimit N N 0 Y";
/// assert_eq!(script, expected);
/// ```
pub fn batch_script(working_dir: &str, idf_name: &str, weather_file: &str, eplus_dir: &str) -> String {
    let base_name = idf_name.strip_suffix(".idf").unwrap_or(idf_name);
    let mut working_dir = working_dir.to_string();
    if !working_dir.ends_with('\\') {
        working_dir.push('\\');
    }
    let drive: String = working_dir.chars().take(2).collect();
    let folder = working_dir.replacen(&format!("{}\\", drive), "", 1);
    let full_path = format!("{}{}", working_dir, base_name);

    format!(
        "{}\ncd\\{}\n{}\\Epl-run {} {} idf \"{}\" EP N nolimit N N 0 Y",
        drive, folder, eplus_dir, full_path, full_path, weather_file
    )
}

/// Builds the text of a shell script that moves into the working
/// directory and runs `runenergyplus` on the IDF file
pub fn shell_script(working_dir: &str, idf_name: &str, weather_file: &str, eplus_dir: &str) -> String {
    let eplus_dir = eplus_dir.trim_end_matches('/');
    format!(
        "#!/bin/sh\ncd \"{}\"\n\"{}/runenergyplus\" \"{}\" \"{}\"\n",
        working_dir, eplus_dir, idf_name, weather_file
    )
}

/// What a finished process left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedProcess {
    /// The exit code. `None` if the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Whatever was written to the standard output
    pub stdout: String,
    /// Whatever was written to the standard error
    pub stderr: String,
}

impl CompletedProcess {
    /// Checks whether the process exited with code 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a command until it finishes, capturing its outputs
pub fn run_subprocess(cmd: &mut Command) -> std::io::Result<CompletedProcess> {
    let output = cmd.output()?;
    Ok(CompletedProcess {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Copies the lines of the error log of a simulation into the report.
/// A missing file is not a problem; it just means there is nothing to read.
pub fn read_error_file<P: AsRef<Path>>(path: P, report: &mut Report) -> usize {
    let content = match std::fs::read_to_string(path.as_ref()) {
        Ok(c) => c,
        Err(_) => return 0,
    };
    let mut n = 0;
    for line in content.lines() {
        report.info(line);
        n += 1;
    }
    n
}

/// Calls EnergyPlus on IDF files
#[derive(Debug, Clone)]
pub struct EnergyPlusRunner {
    /// The EnergyPlus installation folder
    pub eplus_dir: PathBuf,

    /// The kind of script to write
    pub flavor: ScriptFlavor,
}

impl std::default::Default for EnergyPlusRunner {
    fn default() -> Self {
        Self {
            eplus_dir: default_energyplus_dir(),
            flavor: ScriptFlavor::host(),
        }
    }
}

impl EnergyPlusRunner {
    /// Creates a runner for the EnergyPlus installed at `eplus_dir`
    pub fn new<P: AsRef<Path>>(eplus_dir: P) -> Self {
        Self {
            eplus_dir: eplus_dir.as_ref().to_path_buf(),
            flavor: ScriptFlavor::host(),
        }
    }

    /// The text of the script that runs the IDF file in `working_dir`
    pub fn script(&self, working_dir: &WorkingDirectory, weather_file: &Path) -> String {
        let dir = working_dir.dir().to_string_lossy();
        let weather = weather_file.to_string_lossy();
        let eplus = self.eplus_dir.to_string_lossy();
        match self.flavor {
            ScriptFlavor::Batch => batch_script(&dir, working_dir.idf_name(), &weather, &eplus),
            ScriptFlavor::Shell => shell_script(&dir, working_dir.idf_name(), &weather, &eplus),
        }
    }

    /// Writes the script next to the IDF file and runs it. This does not
    /// check whether the simulation went well... that is up to the caller.
    pub fn run(
        &self,
        working_dir: &WorkingDirectory,
        weather_file: &Path,
    ) -> std::io::Result<CompletedProcess> {
        let script_file = working_dir.sibling(self.flavor.extension());
        std::fs::write(&script_file, self.script(working_dir, weather_file))?;
        tracing::info!("Running '{}'", script_file.display());

        let mut cmd = match self.flavor {
            ScriptFlavor::Batch => {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(&script_file);
                c
            }
            ScriptFlavor::Shell => {
                let mut c = Command::new("sh");
                c.arg(&script_file);
                c
            }
        };
        cmd.current_dir(working_dir.dir());
        run_subprocess(&mut cmd)
    }
}

/***********/
/* TESTING */
/***********/
