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

use idf_writer::{simulate, IdfError, SimOptions};
use std::path::Path;

fn options(root: &Path) -> SimOptions {
    SimOptions {
        input_file: "./tests/office/office.json5".to_string(),
        weather_file: "./tests/office/wellington.epw".to_string(),
        library: vec!["./tests/office/library.idf".to_string()],
        root_dir: Some(root.to_string_lossy().to_string()),
        file_name: Some("office".to_string()),
        ..SimOptions::default()
    }
}

#[test]
fn write_only() -> Result<(), String> {
    let root = tempfile::tempdir().map_err(|e| e.to_string())?;
    let output = simulate(&options(root.path())).map_err(|e| e.to_string())?;

    let idf_file = output.idf_file.ok_or("no IDF file")?;
    assert_eq!(idf_file, root.path().join("office/EnergyPlus/office.idf"));
    assert!(output.result_file.is_none());
    assert!(output.report.warnings().is_empty(), "{:?}", output.report.warnings());

    let idf = std::fs::read_to_string(&idf_file).map_err(|e| e.to_string())?;
    assert!(idf.starts_with("\nVersion,\n\t8.1;"));
    assert!(idf.contains("\tWellington\tNZL,\t!- Name\n"));
    assert!(idf.contains("\toffice.idf,\t!- Name\n"));
    assert_eq!(idf.matches("\nBuildingSurface:Detailed,\n").count(), 1);
    // Millimeters became meters
    assert!(!idf.contains("4000"));
    // One group, one zone: records go to the zone
    assert!(idf.contains("\tOfficeOfficePeople,\t!- Name\n"));
    assert_eq!(idf.matches("\tOFFICE OCC,\t!- Name\n").count(), 1);
    assert_eq!(idf.matches("\nOutput:Variable,\n").count(), 4);

    // No script was written
    let files = std::fs::read_dir(root.path().join("office/EnergyPlus"))
        .map_err(|e| e.to_string())?
        .count();
    assert_eq!(files, 1);
    Ok(())
}

#[test]
fn imperial_units_write_nothing() -> Result<(), String> {
    let root = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = root.path().join("feet.json5");
    let src = std::fs::read_to_string("./tests/office/office.json5").map_err(|e| e.to_string())?;
    std::fs::write(&model, src.replace("Millimeters", "Feet")).map_err(|e| e.to_string())?;

    let mut o = options(root.path());
    o.input_file = model.to_string_lossy().to_string();
    match simulate(&o) {
        Err(IdfError::NonMetricUnits(u)) => assert_eq!(u, "Feet"),
        other => return Err(format!("expecting a units error, found {:?}", other)),
    }
    assert!(!root.path().join("office").exists());
    Ok(())
}

#[test]
fn illegal_weather_path() -> Result<(), String> {
    let root = tempfile::tempdir().map_err(|e| e.to_string())?;
    let mut o = options(root.path());
    o.weather_file = "./tests/office/wellington=2.epw".to_string();
    assert!(matches!(simulate(&o), Err(IdfError::WeatherFile(_))));
    assert!(!root.path().join("office").exists());
    Ok(())
}

#[cfg(unix)]
fn fake_energyplus(dir: &Path, body: &str) -> Result<(), String> {
    use std::os::unix::fs::PermissionsExt;
    let exe = dir.join("runenergyplus");
    std::fs::write(&exe, format!("#!/bin/sh\n{}\n", body)).map_err(|e| e.to_string())?;
    let mut permissions = std::fs::metadata(&exe).map_err(|e| e.to_string())?.permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&exe, permissions).map_err(|e| e.to_string())
}

#[cfg(unix)]
#[test]
fn write_and_run() -> Result<(), String> {
    let root = tempfile::tempdir().map_err(|e| e.to_string())?;
    let eplus = tempfile::tempdir().map_err(|e| e.to_string())?;
    fake_energyplus(
        eplus.path(),
        "echo 'Date/Time,Power' > eplusout.csv\necho '   ** Warning ** Something odd' > office.err",
    )?;

    let mut o = options(root.path());
    o.run = true;
    o.eplus_dir = Some(eplus.path().to_string_lossy().to_string());
    let output = simulate(&o).map_err(|e| e.to_string())?;

    let wd = root.path().join("office/EnergyPlus");
    assert_eq!(output.result_file, Some(wd.join("eplusout.csv")));
    assert!(wd.join("office.sh").exists());
    assert!(output.report.warnings().is_empty(), "{:?}", output.report.warnings());
    assert!(output
        .report
        .messages()
        .iter()
        .any(|m| m.contains("Something odd")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn failed_run_is_a_warning() -> Result<(), String> {
    let root = tempfile::tempdir().map_err(|e| e.to_string())?;
    let eplus = tempfile::tempdir().map_err(|e| e.to_string())?;
    fake_energyplus(eplus.path(), "exit 2")?;

    let mut o = options(root.path());
    o.run = true;
    o.eplus_dir = Some(eplus.path().to_string_lossy().to_string());
    let output = simulate(&o).map_err(|e| e.to_string())?;

    // The predicted path is kept
    let wd = root.path().join("office/EnergyPlus");
    assert_eq!(output.result_file, Some(wd.join("office.csv")));
    assert_eq!(output.report.count_warnings("exited with code Some(2)"), 1);
    Ok(())
}
