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

use crate::runner::{read_error_file, EnergyPlusRunner};
use crate::working_dir::{idf_file_name, WorkingDirectory};
use calendar::AnalysisPeriod;
use clap::Parser;
use idf::{IdfError, IdfWriter, Report, SimulationParameters, WriteRequest};
use model::{Model, North, ResourceLibrary};
use std::path::{Path, PathBuf};
use weather::Location;

/// The options we can pass to the simulation
#[derive(Parser, Default, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct SimOptions {
    /// The model, as a JSON or JSON5 file
    #[clap(short = 'i')]
    pub input_file: String,

    /// The EPW weather file
    #[clap(short = 'w')]
    pub weather_file: String,

    /// Resource libraries (IDF, JSON or JSON5) with constructions,
    /// materials and schedules. Later ones override earlier ones.
    #[clap(short = 'l')]
    pub library: Vec<String>,

    /// Simulation parameters, as a JSON or JSON5 file
    #[clap(short = 'p')]
    pub parameters: Option<String>,

    /// The analysis period, as "month,day,hour,month,day,hour"
    #[clap(short = 'a')]
    pub analysis_period: Option<String>,

    /// The angle between north and the Y axis, in degrees
    #[clap(short = 'n', allow_hyphen_values = true)]
    pub north: Option<f64>,

    /// A vector pointing north, as "x,y". Overrides the north angle
    #[clap(long, allow_hyphen_values = true)]
    pub north_vector: Option<String>,

    /// The folder in which working directories are created
    #[clap(short = 'd')]
    pub root_dir: Option<String>,

    /// The name of the IDF file
    #[clap(short = 'f')]
    pub file_name: Option<String>,

    /// A text file with output requests, written into the
    /// IDF file as they are
    #[clap(short = 'o')]
    pub outputs: Option<String>,

    /// Run EnergyPlus after writing the IDF file
    #[clap(long)]
    pub run: bool,

    /// The EnergyPlus installation folder
    #[clap(long)]
    pub eplus_dir: Option<String>,

    /// Do not write the IDF file (e.g., to run an existing one)
    #[clap(long)]
    pub no_write: bool,
}

/// What a call to [`simulate`] produced
#[derive(Debug, Default)]
pub struct SimulationOutput {
    /// The IDF file, if it was written or run
    pub idf_file: Option<PathBuf>,

    /// Where EnergyPlus should have written its results, if it was run
    pub result_file: Option<PathBuf>,

    /// What happened
    pub report: Report,
}

fn invalid<E: std::fmt::Display>(e: E) -> IdfError {
    IdfError::InvalidInput(e.to_string())
}

/// Parses a vector given as "x,y"
fn parse_north_vector(s: &str) -> Result<North, IdfError> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<model::Float>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(format!("north vector '{}': {}", s, e)))?;
    match values.as_slice() {
        [x, y] => Ok(North::Vector { x: *x, y: *y }),
        _ => Err(invalid(format!(
            "north vector '{}' should have two components",
            s
        ))),
    }
}

/// Gets the north angle, in degrees
pub fn north_angle(options: &SimOptions) -> Result<idf::Float, IdfError> {
    let north = match (&options.north_vector, options.north) {
        (Some(v), _) => parse_north_vector(v)?,
        (None, Some(angle)) => North::Degrees {
            angle: angle as model::Float,
        },
        (None, None) => North::default(),
    };
    let angle = north.degrees().map_err(invalid)?;
    Ok(angle as idf::Float)
}

/// Loads the built-in library followed by every library in the options
pub fn load_library(options: &SimOptions) -> Result<ResourceLibrary, IdfError> {
    let mut library = ResourceLibrary::builtin();
    for file in &options.library {
        library.extend(ResourceLibrary::from_file(file).map_err(invalid)?);
    }
    Ok(library)
}

/// Reads the output requests, one per non-empty line
fn load_outputs(path: &str) -> Result<Vec<String>, IdfError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| invalid(format!("could not read outputs file '{}': {}", path, e)))?;
    Ok(content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Builds everything the writer needs to know besides the model
pub fn write_request(options: &SimOptions, location: Location) -> Result<WriteRequest, IdfError> {
    let mut request = WriteRequest::new(idf_file_name(options.file_name.as_deref()), location);
    request.north = north_angle(options)?;
    if let Some(p) = &options.analysis_period {
        request.analysis_period = p.parse::<AnalysisPeriod>().map_err(invalid)?;
    }
    if let Some(file) = &options.parameters {
        let parameters = SimulationParameters::from_file(file).map_err(invalid)?;
        parameters.validate().map_err(invalid)?;
        request.parameters = parameters;
    }
    if let Some(file) = &options.outputs {
        request.outputs = Some(load_outputs(file)?);
    }
    Ok(request)
}

/// The weather file as seen from the working directory, where EnergyPlus runs
fn absolute_weather_path(weather_file: &str) -> Result<PathBuf, IdfError> {
    let path = Path::new(weather_file);
    if path.is_relative() {
        Ok(std::env::current_dir()?.join(path))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Checks the weather file and reads its location
fn load_location<P: AsRef<Path>>(weather_file: P) -> Result<Location, IdfError> {
    weather::check_weather_path(&weather_file).map_err(IdfError::WeatherFile)?;
    Location::from_epw_file(&weather_file).map_err(IdfError::WeatherFile)
}

/// Writes (and optionally runs) the IDF file of a model.
///
/// Everything that would stop the IDF file from being written (an
/// incompatible model, non-metric units, a missing or illegal weather
/// file, unreadable inputs) is checked before anything is created on disk.
/// Once the file is written, problems running EnergyPlus are reported as
/// warnings.
pub fn simulate(options: &SimOptions) -> Result<SimulationOutput, IdfError> {
    let mut output = SimulationOutput::default();

    let weather_file = absolute_weather_path(&options.weather_file)?;
    let location = load_location(&weather_file)?;
    let model = Model::from_json_file(&options.input_file).map_err(invalid)?;
    idf::check_model(&model)?;
    let library = load_library(options)?;
    let request = write_request(options, location)?;

    let root = options.root_dir.as_deref().map(Path::new);
    let working_dir = WorkingDirectory::new(root, options.file_name.as_deref());
    let idf_file = working_dir.idf_path();

    if !options.no_write {
        working_dir.create()?;
        let writer = IdfWriter::new(&model, &library, working_dir.dir());
        writer.write_to_file(&idf_file, &request, &mut output.report)?;
        output.idf_file = Some(idf_file.clone());
    }

    if !options.run {
        output.report.info("Set 'run' to simulate the IDF file");
        return Ok(output);
    }

    let runner = match &options.eplus_dir {
        Some(d) => EnergyPlusRunner::new(d),
        None => EnergyPlusRunner::default(),
    };
    output.report.info("Analysis is running!...");
    match runner.run(&working_dir, &weather_file) {
        Ok(done) => {
            if !done.success() {
                output.report.warn(format!(
                    "EnergyPlus exited with code {:?}: {}",
                    done.exit_code,
                    done.stderr.trim()
                ));
            }
        }
        Err(e) => output
            .report
            .warn(format!("Could not run EnergyPlus: {}", e)),
    }
    output.idf_file = Some(idf_file);
    output.result_file = Some(working_dir.result_file());
    read_error_file(working_dir.error_file(), &mut output.report);
    Ok(output)
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn options() -> SimOptions {
        SimOptions {
            input_file: "model.json".to_string(),
            weather_file: "weather.epw".to_string(),
            ..SimOptions::default()
        }
    }

    #[test]
    fn test_parse_options() -> Result<(), String> {
        let o = SimOptions::try_parse_from([
            "sidf", "-i", "house.json5", "-w", "santiago.epw", "-l", "a.idf", "-l", "b.json",
            "-n", "-30", "--run",
        ])
        .map_err(|e| e.to_string())?;
        assert_eq!(o.input_file, "house.json5");
        assert_eq!(o.library, vec!["a.idf".to_string(), "b.json".to_string()]);
        assert_eq!(o.north, Some(-30.));
        assert!(o.run);
        assert!(!o.no_write);
        Ok(())
    }

    #[test]
    fn test_north_angle() -> Result<(), String> {
        let mut o = options();
        assert!(north_angle(&o).map_err(|e| e.to_string())?.abs() < 1e-6);

        o.north = Some(20.);
        assert!((north_angle(&o).map_err(|e| e.to_string())? - 20.).abs() < 1e-6);

        o.north_vector = Some("-1, 0".to_string());
        assert!((north_angle(&o).map_err(|e| e.to_string())? - 270.).abs() < 1e-4);

        o.north_vector = Some("0,0".to_string());
        assert!(north_angle(&o).is_err());

        o.north_vector = Some("1".to_string());
        assert!(north_angle(&o).is_err());
        Ok(())
    }

    #[test]
    fn test_write_request() -> Result<(), String> {
        let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
        let outputs = dir.path().join("outputs.txt");
        std::fs::write(&outputs, "Output:Variable,*,Zone Mean Air Temperature,Hourly;\n\n")
            .map_err(|e| e.to_string())?;

        let mut o = options();
        o.file_name = Some("house".to_string());
        o.analysis_period = Some("2,1,1,2,28,24".to_string());
        o.outputs = Some(outputs.to_string_lossy().to_string());

        let location = Location::from_epw_header(
            "LOCATION,SANTIAGO,-,CHL,IWEC Data,855740,-33.38,-70.78,-4.0,476.0",
        )?;
        let request = write_request(&o, location).map_err(|e| e.to_string())?;
        assert_eq!(request.building_name, "house.idf");
        assert_eq!(request.analysis_period.start.month, 2);
        assert_eq!(
            request.outputs,
            Some(vec!["Output:Variable,*,Zone Mean Air Temperature,Hourly;".to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_absolute_weather_path() -> Result<(), String> {
        let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
        let path = absolute_weather_path("weather.epw").map_err(|e| e.to_string())?;
        assert!(path.is_absolute());
        assert_eq!(path, cwd.join("weather.epw"));

        let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
        let absolute = dir.path().join("weather.epw");
        let path = absolute_weather_path(&absolute.to_string_lossy())
            .map_err(|e| e.to_string())?;
        assert_eq!(path, absolute);
        Ok(())
    }

    #[test]
    fn test_illegal_weather_folder_is_fatal() -> Result<(), String> {
        let root = tempfile::tempdir().map_err(|e| e.to_string())?;
        let folder = root.path().join("R&D");
        std::fs::create_dir(&folder).map_err(|e| e.to_string())?;
        let weather = folder.join("weather.epw");
        std::fs::write(
            &weather,
            "LOCATION,SANTIAGO,-,CHL,IWEC Data,855740,-33.38,-70.78,-4.0,476.0\n",
        )
        .map_err(|e| e.to_string())?;

        let mut o = options();
        o.root_dir = Some(root.path().join("out").to_string_lossy().to_string());
        o.weather_file = weather.to_string_lossy().to_string();
        match simulate(&o) {
            Err(IdfError::WeatherFile(e)) => assert!(e.contains("'&'"), "{}", e),
            other => return Err(format!("expecting a weather file error, found {:?}", other)),
        }
        assert!(!root.path().join("out").exists());
        Ok(())
    }

    #[test]
    fn test_missing_weather_is_fatal() -> Result<(), String> {
        let root = tempfile::tempdir().map_err(|e| e.to_string())?;
        let mut o = options();
        o.root_dir = Some(root.path().to_string_lossy().to_string());
        o.weather_file = root.path().join("nowhere.epw").to_string_lossy().to_string();
        match simulate(&o) {
            Err(IdfError::WeatherFile(_)) => {}
            other => return Err(format!("expecting a weather file error, found {:?}", other)),
        }
        // Nothing was created
        assert_eq!(std::fs::read_dir(root.path()).map_err(|e| e.to_string())?.count(), 0);
        Ok(())
    }
}
