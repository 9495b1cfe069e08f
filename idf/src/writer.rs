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

use crate::dedup::{DeduplicationContext, OrderedNameSet, ZoneGrouping};
use crate::params::SimulationParameters;
use crate::records::{self, Record};
use crate::schedule_resolver::{
    file_schedule_name, is_file_schedule, Resolution, ScheduleResolver,
};
use crate::{Float, IdfError, Report};
use calendar::AnalysisPeriod;
use model::{Model, NaturalVentilation, ResourceLibrary, Surface, Zone, ALWAYS_ON};
use std::io::Write;
use std::path::{Path, PathBuf};
use weather::Location;

/// The version of EnergyPlus for which files are written
pub const ENERGYPLUS_VERSION: &str = "8.1";

/// The oldest model version that can be written
pub const MIN_MODEL_VERSION: (usize, usize, usize) = (0, 5, 0);

/// The first model version that cannot be written
pub const MAX_MODEL_VERSION: (usize, usize, usize) = (1, 0, 0);

fn version_string(v: (usize, usize, usize)) -> String {
    format!("{}.{}.{}", v.0, v.1, v.2)
}

/// Checks that a model can be written: its version must be supported
/// and its units must be metric.
pub fn check_model(model: &Model) -> Result<(), IdfError> {
    let version = model.version.as_deref().ok_or(IdfError::MissingVersion)?;
    let incompatible = || IdfError::IncompatibleVersion {
        found: version.to_string(),
        min: version_string(MIN_MODEL_VERSION),
        max: version_string(MAX_MODEL_VERSION),
    };
    let parsed = model::parse_version(version).map_err(|_| incompatible())?;
    if parsed < MIN_MODEL_VERSION || parsed >= MAX_MODEL_VERSION {
        return Err(incompatible());
    }
    if !model.units.is_metric() {
        return Err(IdfError::NonMetricUnits(model.units.to_string()));
    }
    Ok(())
}

/// Everything needed to write an IDF file, other than the model
/// and the library
#[derive(Debug, Clone)]
pub struct WriteRequest {
    /// The name of the building (usually the name of the IDF file)
    pub building_name: String,

    /// The angle between true north and the Y axis, in degrees
    pub north: Float,

    /// Where the building is
    pub location: Location,

    /// The period to simulate
    pub analysis_period: AnalysisPeriod,

    /// The parameters in the header of the file
    pub parameters: SimulationParameters,

    /// Output requests written as they are. If `None` (or empty), some
    /// default monthly outputs are requested
    pub outputs: Option<Vec<String>>,
}

impl WriteRequest {
    /// A request for a full year, with default parameters and outputs
    pub fn new<S: Into<String>>(building_name: S, location: Location) -> Self {
        Self {
            building_name: building_name.into(),
            north: 0.,
            location,
            analysis_period: AnalysisPeriod::default(),
            parameters: SimulationParameters::default(),
            outputs: None,
        }
    }
}

/// Writes a [`Model`] as an IDF file, looking up constructions, materials
/// and schedules in a [`ResourceLibrary`].
///
/// CSV schedules are copied into the working directory.
pub struct IdfWriter<'a> {
    model: &'a Model,
    library: &'a ResourceLibrary,
    working_dir: PathBuf,
}

/// The state of a single write
struct Pipeline<'a, 'w, W: Write> {
    out: &'w mut W,
    report: &'w mut Report,
    library: &'a ResourceLibrary,
    resolver: ScheduleResolver<'a>,
    dedup: DeduplicationContext,
    emitted_schedules: OrderedNameSet,
    tolerance: Float,
}

impl<'a, 'w, W: Write> Pipeline<'a, 'w, W> {
    fn emit(&mut self, record: &Record) -> Result<(), IdfError> {
        write!(self.out, "{}", record)?;
        Ok(())
    }

    fn emit_all(&mut self, records: &[Record]) -> Result<(), IdfError> {
        for r in records {
            self.emit(r)?;
        }
        Ok(())
    }

    fn schedule_name(&self, reference: &str) -> String {
        self.resolver.reference_name(reference)
    }

    fn emit_schedule(&mut self, reference: &str) -> Result<(), IdfError> {
        if !self.emitted_schedules.insert(reference) {
            return Ok(());
        }
        match self.resolver.resolve(reference)? {
            Resolution::Records(records) => {
                if is_file_schedule(reference) {
                    let name = self.resolver.reference_name(reference);
                    if name != file_schedule_name(reference) {
                        self.report.warn(format!(
                            "Schedule file '{}' has the same name as another one... it was written as '{}'",
                            reference, name
                        ));
                    }
                }
                self.emit_all(&records)
            }
            Resolution::AlreadyEmitted => Ok(()),
            Resolution::NotFound => {
                self.report
                    .warn(format!("Schedule '{}' was not found in the library", reference));
                Ok(())
            }
        }
    }

    fn register_construction(&mut self, name: &str) {
        if !self.dedup.register_construction(name) {
            return;
        }
        let library = self.library;
        match library.construction_layers(name) {
            Some(layers) => {
                for layer in layers {
                    self.dedup.register_material(layer);
                }
            }
            None => self
                .report
                .warn(format!("Construction '{}' was not found in the library", name)),
        }
    }

    fn header(&mut self, request: &WriteRequest) -> Result<(), IdfError> {
        self.report.info("[1 of 7] Writing simulation parameters...");
        let p = &request.parameters;
        let header = [
            records::version(ENERGYPLUS_VERSION),
            records::timestep(p.timestep),
            records::shadow_calculation(&p.shadow_calculation),
            records::program_control(p.threads),
            records::building(&request.building_name, request.north, p),
            records::heat_balance_algorithm("ConductionTransferFunction"),
            records::inside_convection_algorithm("TARP"),
            records::outside_convection_algorithm("DOE-2"),
            records::site_location(&request.location),
            records::sizing_period("Extreme Winter", "WinterExtreme"),
            records::sizing_period("Extreme Summer", "SummerExtreme"),
            records::simulation_control(&p.simulation_control),
            records::run_period("customRun", &request.analysis_period),
        ];
        self.emit_all(&header)?;

        let library = self.library;
        for limits in library.schedule_type_limits() {
            self.emit(&records::library_object(limits))?;
        }
        self.emit(&records::global_geometry_rules())
    }

    fn shading(&mut self, model: &Model) -> Result<(), IdfError> {
        if model.shading.is_empty() {
            self.report.info("[2 of 7] No context surfaces...");
            return Ok(());
        }
        self.report.info("[2 of 7] Writing context surfaces...");
        for s in &model.shading {
            let schedule = match &s.transmittance_schedule {
                Some(reference) => {
                    self.dedup.register_schedule(reference);
                    self.emit_schedule(reference)?;
                    self.schedule_name(reference)
                }
                None => String::new(),
            };
            for (i, vertices) in s.loops.iter().enumerate() {
                if vertices.len() < 3 {
                    self.report.warn(format!(
                        "Loop {} of shading surface '{}' has less than 3 vertices and was removed",
                        i, s.name
                    ));
                    continue;
                }
                self.emit(&records::shading_surface(&s.name, i, &schedule, vertices))?;
            }
        }
        Ok(())
    }

    fn fenestrations(&mut self, surface: &Surface) -> Result<(), IdfError> {
        for fen in &surface.fenestrations {
            self.register_construction(fen.effective_construction(&surface.boundary));
            if let Some(shading) = &fen.shading {
                writeln!(self.out, "\n{}", shading.records)?;
                if let Some(s) = shading.controlling_schedule() {
                    self.dedup.register_schedule(s);
                }
            }
        }
        for fen in &surface.fenestrations {
            let construction = fen.effective_construction(&surface.boundary);
            match records::fenestration_surface(fen, surface, construction, self.tolerance) {
                Ok(r) => self.emit(&r)?,
                Err(e) => self.report.warn(format!(
                    "Failed to write '{}' to the IDF file: {}",
                    fen.name, e
                )),
            }
        }
        Ok(())
    }

    fn geometry<'m>(&mut self, model: &'m Model) -> Result<ZoneGrouping<'m>, IdfError> {
        self.report.info("[3 of 7] Writing geometry...");
        let mut grouping = ZoneGrouping::new();
        let mut zone_names = OrderedNameSet::new();
        for zone in &model.zones {
            if !zone_names.insert(&zone.name) {
                self.report
                    .warn(format!("There is more than one zone called '{}'", zone.name));
            }
            self.emit(&records::zone(zone))?;
            grouping.add(zone);
            self.dedup.register_zone_schedules(zone);

            for surface in &zone.surfaces {
                let construction = surface.effective_construction();
                self.register_construction(construction);
                match records::building_surface(surface, &zone.name, construction, self.tolerance)
                {
                    Ok(r) => self.emit(&r)?,
                    Err(e) => {
                        self.report.warn(e);
                        writeln!(self.out)?;
                    }
                }
                if !surface.fenestrations.is_empty() {
                    self.fenestrations(surface)?;
                }
            }

            for mass in &zone.internal_masses {
                self.register_construction(&mass.construction);
                self.emit(&records::internal_mass(mass, &zone.name))?;
            }
        }
        Ok(grouping)
    }

    fn constructions(&mut self) -> Result<(), IdfError> {
        self.report
            .info("[4 of 7] Writing materials and constructions...");
        let library = self.library;
        let mut emitted_materials = OrderedNameSet::new();
        for name in self.dedup.constructions().to_vec() {
            // Missing constructions were reported when registered
            let (construction, layers) =
                match (library.construction(&name), library.construction_layers(&name)) {
                    (Some(c), Some(l)) => (c, l),
                    _ => continue,
                };
            self.emit(&records::library_object(construction))?;
            for layer in layers {
                if !emitted_materials.insert(layer) {
                    continue;
                }
                match library.material(layer) {
                    Some(m) => self.emit(&records::library_object(m))?,
                    None => self.report.warn(format!(
                        "Material '{}' of construction '{}' was not found in the library",
                        layer, name
                    )),
                }
            }
        }
        Ok(())
    }

    fn schedules(&mut self) -> Result<(), IdfError> {
        self.report.info("[5 of 7] Writing schedules...");
        self.dedup.close_schedules(self.library);
        for name in self.dedup.schedules().to_vec() {
            self.emit_schedule(&name)?;
        }
        Ok(())
    }

    fn zone_airflows(&mut self, zone: &Zone) -> Result<(), IdfError> {
        for (i, mixing) in zone.air_mixing.iter().enumerate() {
            let schedule = self.schedule_name(mixing.schedule.as_deref().unwrap_or(ALWAYS_ON));
            self.emit(&records::zone_mixing(&zone.name, i, mixing, &schedule))?;
        }
        for (i, ventilation) in zone.natural_ventilation.iter().enumerate() {
            let schedule = self.schedule_name(ventilation.schedule().unwrap_or(ALWAYS_ON));
            let r = match ventilation {
                NaturalVentilation::WindowOpening(o) | NaturalVentilation::CustomStack(o) => {
                    records::wind_and_stack_ventilation(&zone.name, i, o, &schedule)
                }
                NaturalVentilation::Fan(f) => {
                    records::fan_ventilation(&zone.name, i, f, &schedule)
                }
            };
            self.emit(&r)?;
        }
        Ok(())
    }

    fn loads(&mut self, grouping: &ZoneGrouping) -> Result<(), IdfError> {
        self.report
            .info("[6 of 7] Writing loads and ideal air system...");
        for (i, group) in grouping.groups().iter().enumerate() {
            let first = match group.zones.first() {
                Some(z) => *z,
                None => continue,
            };
            let target = if group.zones.len() > 1 {
                let name = format!("ZoneGroup_{}", i + 1);
                let zones: Vec<&str> = group.zones.iter().map(|z| z.name.as_str()).collect();
                self.emit(&records::zone_list(&name, &zones))?;
                name
            } else {
                first.name.clone()
            };

            let schedules = &first.schedules;
            let loads = &first.loads;
            if let Some(s) = &schedules.equipment {
                let s = self.schedule_name(s);
                self.emit(&records::electric_equipment(&target, &s, loads.equipment_per_area))?;
            }
            if let Some(s) = &schedules.occupancy {
                let s = self.schedule_name(s);
                let activity = schedules
                    .occupancy_activity
                    .as_deref()
                    .map(|a| self.schedule_name(a));
                self.emit(&records::people(
                    &target,
                    &s,
                    loads.people_per_area,
                    activity.as_deref(),
                ))?;
            }
            if let Some(s) = &schedules.lighting {
                let s = self.schedule_name(s);
                self.emit(&records::lights(&target, &s, loads.lighting_per_area))?;
            }
            if let Some(s) = &schedules.infiltration {
                let s = self.schedule_name(s);
                self.emit(&records::infiltration(&target, &s, loads.infiltration_per_area))?;
            }

            for zone in &group.zones {
                if !zone.hvac.is_ideal_loads() {
                    self.report.warn_once(
                        "hvac",
                        "Only ideal loads air systems are supported... other HVAC systems will be replaced",
                    );
                }
                if zone.conditioned {
                    let heating = zone.schedules.heating_setpoint.as_deref().map(|s| self.schedule_name(s));
                    let cooling = zone.schedules.cooling_setpoint.as_deref().map(|s| self.schedule_name(s));
                    let availability = zone.schedules.hvac_availability.as_deref().map(|s| self.schedule_name(s));
                    self.emit(&records::thermostat(&zone.name, heating.as_deref(), cooling.as_deref()))?;
                    self.emit(&records::ideal_loads_air_system(zone, availability.as_deref()))?;
                    self.emit(&records::design_specification_outdoor_air(zone))?;
                }
                self.zone_airflows(zone)?;
            }
        }
        Ok(())
    }

    fn outputs(&mut self, outputs: &Option<Vec<String>>) -> Result<(), IdfError> {
        self.emit(&records::output_surfaces_list())?;
        self.emit(&records::output_variable_dictionary())?;
        match outputs {
            Some(lines) if !lines.is_empty() => {
                self.report.info("[7 of 7] Writing outputs...");
                writeln!(self.out)?;
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
                Ok(())
            }
            _ => {
                self.report.info("[7 of 7] Writing default outputs...");
                self.emit_all(&records::default_outputs())
            }
        }
    }
}

impl<'a> IdfWriter<'a> {
    /// Creates a new writer. CSV schedules will be copied into `working_dir`
    pub fn new<P: AsRef<Path>>(model: &'a Model, library: &'a ResourceLibrary, working_dir: P) -> Self {
        Self {
            model,
            library,
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Writes the IDF file into `out`.
    ///
    /// Returns the constructions, materials and schedules that the
    /// model references. Fails before writing anything if the model
    /// cannot be written (see [`check_model`]).
    pub fn write<W: Write>(
        &self,
        out: &mut W,
        request: &WriteRequest,
        report: &mut Report,
    ) -> Result<DeduplicationContext, IdfError> {
        check_model(self.model)?;
        let model = self
            .model
            .in_meters()
            .map_err(|_| IdfError::NonMetricUnits(self.model.units.to_string()))?;

        let mut pipeline = Pipeline {
            out,
            report,
            library: self.library,
            resolver: ScheduleResolver::new(self.library, &self.working_dir),
            dedup: DeduplicationContext::new(),
            emitted_schedules: OrderedNameSet::new(),
            tolerance: model.tolerance,
        };

        pipeline.header(request)?;
        pipeline.shading(&model)?;
        let grouping = pipeline.geometry(&model)?;
        pipeline.constructions()?;
        pipeline.schedules()?;
        pipeline.loads(&grouping)?;
        pipeline.outputs(&request.outputs)?;
        pipeline.out.flush()?;

        Ok(pipeline.dedup)
    }

    /// Writes the IDF file at `path`, creating its directory if needed
    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        request: &WriteRequest,
        report: &mut Report,
    ) -> Result<DeduplicationContext, IdfError> {
        check_model(self.model)?;
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = std::fs::File::create(path)?;
        let mut out = std::io::BufWriter::new(file);
        let dedup = self.write(&mut out, request, report)?;
        report.info(format!("IDF file written to '{}'", path.display()));
        Ok(dedup)
    }
}

/***********/
/* TESTING */
/***********/
