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

//! One function per kind of IDF object. Each of them builds a [`Record`],
//! whose text is obtained through its [`std::fmt::Display`] implementation.
//!
//! Records have a fixed number of fields: optional values that are not
//! given are written as blank fields, never omitted.

use crate::params::{ShadowCalculation, SimulationControl, SimulationParameters};
use crate::Float;
use calendar::AnalysisPeriod;
use geometry::Loop3D;
use model::{
    AirMixing, FanVentilation, Fenestration, InternalMass, LibraryObject, OpeningVentilation,
    Surface, Zone, ZoneKind,
};
use weather::Location;

/// Renders a number the way it is written in IDF files (e.g., `1.0`, `-0.25`)
pub fn num(x: Float) -> String {
    format!("{:?}", x)
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    value: String,
    comment: Option<String>,
}

/// An object in an IDF file: a keyword followed by positional fields.
///
/// ```
/// use idf::records::Record;
///
/// let r = Record::new("Timestep").field(6, "Number of Timesteps per Hour");
/// assert_eq!(r.to_string(), "\nTimestep,\n\t6;\t!- Number of Timesteps per Hour\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    keyword: String,
    fields: Vec<Field>,
}

impl Record {
    /// Creates a record with no fields
    pub fn new<S: Into<String>>(keyword: S) -> Self {
        Self {
            keyword: keyword.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field with a description
    pub fn field<V: ToString>(mut self, value: V, comment: &str) -> Self {
        self.fields.push(Field {
            value: value.to_string(),
            comment: Some(comment.to_string()),
        });
        self
    }

    /// Adds a field without description
    pub fn value<V: ToString>(mut self, value: V) -> Self {
        self.fields.push(Field {
            value: value.to_string(),
            comment: None,
        });
        self
    }

    /// Adds an empty field
    pub fn blank(self, comment: &str) -> Self {
        self.field("", comment)
    }

    /// Adds a field that may be empty
    pub fn optional<V: ToString>(self, value: Option<V>, comment: &str) -> Self {
        match value {
            Some(v) => self.field(v, comment),
            None => self.blank(comment),
        }
    }

    /// Adds the number of vertices followed by the X, Y and Z
    /// coordinates of each of them
    pub fn vertices(mut self, vertices: &Loop3D) -> Self {
        self = self.field(vertices.len(), "Number of Vertices");
        for p in vertices.iter() {
            self = self.value(num(p.x)).value(num(p.y)).value(num(p.z));
        }
        self
    }

    /// The keyword (i.e., the class) of the record
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The number of fields in the record
    pub fn n_fields(&self) -> usize {
        self.fields.len()
    }

    /// The value of the `i`th field
    pub fn get(&self, i: usize) -> Option<&str> {
        self.fields.get(i).map(|f| f.value.as_str())
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n{},\n", self.keyword)?;
        let n = self.fields.len();
        for (i, field) in self.fields.iter().enumerate() {
            let sep = if i + 1 == n { ';' } else { ',' };
            write!(f, "\t{}{}", field.value, sep)?;
            match &field.comment {
                Some(c) => writeln!(f, "\t!- {}", c)?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}

/* HEADER */

/// The version of the simulation engine the file is written for
pub fn version(v: &str) -> Record {
    Record::new("Version").field(v, "Version Identifier")
}

/// Number of timesteps per hour
pub fn timestep(n: usize) -> Record {
    Record::new("Timestep").field(n, "Number of Timesteps per Hour")
}

/// How shadows are calculated
pub fn shadow_calculation(s: &ShadowCalculation) -> Record {
    Record::new("ShadowCalculation")
        .field(&s.method, "Calculation Method")
        .field(s.frequency, "Calculation Frequency")
        .field(s.max_figures, "Maximum Figures in Shadow Overlap Calculation")
}

/// Number of threads the engine may use
pub fn program_control(threads: usize) -> Record {
    Record::new("ProgramControl").field(threads, "Number of Threads Allowed")
}

/// The `Building` object, named after the IDF file
pub fn building(name: &str, north: Float, p: &SimulationParameters) -> Record {
    Record::new("Building")
        .field(name, "Name")
        .field(num(north), "North Axis {deg}")
        .field(p.terrain.idf_name(), "Terrain")
        .field(num(p.loads_convergence_tolerance), "Loads Convergence Tolerance Value")
        .field(
            num(p.temperature_convergence_tolerance),
            "Temperature Convergence Tolerance Value {deltaC}",
        )
        .field(p.solar_distribution.idf_name(), "Solar Distribution")
        .field(p.max_warmup_days, "Maximum Number of Warmup Days")
        .field(p.min_warmup_days, "Minimum Number of Warmup Days")
}

/// The algorithm used for the heat balance
pub fn heat_balance_algorithm(algorithm: &str) -> Record {
    Record::new("HeatBalanceAlgorithm").field(algorithm, "Algorithm")
}

/// Convection model for interior faces
pub fn inside_convection_algorithm(algorithm: &str) -> Record {
    Record::new("SurfaceConvectionAlgorithm:Inside").field(algorithm, "Algorithm")
}

/// Convection model for exterior faces
pub fn outside_convection_algorithm(algorithm: &str) -> Record {
    Record::new("SurfaceConvectionAlgorithm:Outside").field(algorithm, "Algorithm")
}

/// The location of the site, as read from the weather file
pub fn site_location(location: &Location) -> Record {
    Record::new("Site:Location")
        .field(location.name(), "Name")
        .field(num(location.latitude), "Latitude {deg}")
        .field(num(location.longitude), "Longitude {deg}")
        .field(num(location.timezone), "Time Zone {hr}")
        .field(num(location.elevation), "Elevation {m}")
}

/// A sizing period based on the extreme days of the weather file
/// (`period` is `WinterExtreme` or `SummerExtreme`)
pub fn sizing_period(name: &str, period: &str) -> Record {
    Record::new("SizingPeriod:WeatherFileConditionType")
        .field(name, "Name")
        .field(period, "Period Selection")
        .field("Monday", "Day of Week for Start Day")
        .field("Yes", "Use Weather File Daylight Saving Period")
        .field("Yes", "Use Weather File Rain and Snow Indicators")
}

/// Which calculations are performed
pub fn simulation_control(c: &SimulationControl) -> Record {
    Record::new("SimulationControl")
        .field(c.zone_sizing.as_str(), "Do Zone Sizing Calculation")
        .field(c.system_sizing.as_str(), "Do System Sizing Calculation")
        .field(c.plant_sizing.as_str(), "Do Plant Sizing Calculation")
        .field(c.run_for_sizing_periods.as_str(), "Run Simulation for Sizing Periods")
        .field(
            c.run_for_weather_file.as_str(),
            "Run Simulation for Weather File Run Periods",
        )
}

/// The period to simulate
pub fn run_period(name: &str, period: &AnalysisPeriod) -> Record {
    Record::new("RunPeriod")
        .field(name, "Name")
        .field(period.start.month, "Begin Month")
        .field(period.start.day, "Begin Day of Month")
        .field(period.end.month, "End Month")
        .field(period.end.day, "End Day of Month")
        .field("UseWeatherFile", "Day of Week for Start Day")
        .field("Yes", "Use Weather File Holidays and Special Days")
        .field("Yes", "Use Weather File Daylight Saving Period")
        .field("No", "Apply Weekend Holiday Rule")
        .field("Yes", "Use Weather File Rain Indicators")
        .field("Yes", "Use Weather File Snow Indicators")
}

/// How vertices are to be interpreted
pub fn global_geometry_rules() -> Record {
    Record::new("GlobalGeometryRules")
        .field("LowerLeftCorner", "Starting Vertex Position")
        .field("CounterClockWise", "Vertex Entry Direction")
        .field("Absolute", "Coordinate System")
}

/// Writes an object from the library as it is
pub fn library_object(object: &LibraryObject) -> Record {
    let mut r = Record::new(&object.class).field(&object.name, "Name");
    for f in &object.fields {
        r = if f.comment.is_empty() {
            r.value(&f.value)
        } else {
            r.field(&f.value, &f.comment)
        };
    }
    r
}

/* SCHEDULES */

/// Limits read from the header of a CSV schedule
pub fn schedule_type_limits(name: &str, limits: &[String; 4]) -> Record {
    Record::new("ScheduleTypeLimits")
        .field(name, "Name")
        .field(&limits[0], "Lower Limit Value")
        .field(&limits[1], "Upper Limit Value")
        .field(&limits[2], "Numeric Type")
        .field(&limits[3], "Unit Type")
}

/// A schedule whose values are read from the 5th column of a CSV file
pub fn schedule_file(name: &str, type_limits: &str, file: &str, hours: usize) -> Record {
    Record::new("Schedule:File")
        .field(name, "Name")
        .field(type_limits, "Schedule Type Limits Name")
        .field(file, "File Name")
        .field(5, "Column Number")
        .field(4, "Rows to Skip at Top")
        .field(hours, "Number of Hours of Data")
        .field("Comma", "Column Separator")
}

/* GEOMETRY */

/// One of the loops of a shading surface
pub fn shading_surface(name: &str, index: usize, schedule: &str, vertices: &Loop3D) -> Record {
    Record::new("Shading:Building:Detailed")
        .field(format!("{}_{}", name, index), "Name")
        .field(schedule, "Transmittance Schedule Name")
        .vertices(vertices)
}

/// The `Zone` object. Plenums have extra fields, so that they are
/// not counted as part of the floor area of the building.
pub fn zone(zone: &Zone) -> Record {
    let r = Record::new("Zone")
        .field(&zone.name, "Name")
        .field(num(zone.north), "Direction of Relative North {deg}")
        .field(num(zone.origin.x), "X Origin {m}")
        .field(num(zone.origin.y), "Y Origin {m}")
        .field(num(zone.origin.z), "Z Origin {m}")
        .field(1, "Type");
    match zone.kind {
        ZoneKind::Normal => r,
        ZoneKind::Plenum => r
            .blank("Multiplier")
            .blank("Ceiling Height {m}")
            .blank("Volume {m3}")
            .blank("Floor Area {m2}")
            .blank("Zone Inside Convection Algorithm")
            .blank("Zone Outside Convection Algorithm")
            .field("No", "Part of Total Floor Area"),
    }
}

/// A surface of a zone. Vertices closer than twice the `tolerance` are
/// merged; fails if fewer than three remain.
pub fn building_surface(
    surface: &Surface,
    zone_name: &str,
    construction: &str,
    tolerance: Float,
) -> Result<Record, String> {
    let vertices = surface.vertices.clean(tolerance).ok_or_else(|| {
        format!(
            "Surface '{}' has less than 3 distinct vertices and was removed",
            surface.name
        )
    })?;
    let sun = if surface.is_sun_exposed() {
        "SunExposed"
    } else {
        "NoSun"
    };
    let wind = if surface.is_wind_exposed() {
        "WindExposed"
    } else {
        "NoWind"
    };
    let view_factor = match surface.ground_view_factor {
        Some(v) => num(v),
        None => "autocalculate".to_string(),
    };
    Ok(Record::new("BuildingSurface:Detailed")
        .field(&surface.name, "Name")
        .field(surface.surface_type.idf_name(), "Surface Type")
        .field(construction, "Construction Name")
        .field(zone_name, "Zone Name")
        .field(surface.boundary.condition(), "Outside Boundary Condition")
        .field(surface.boundary.object(), "Outside Boundary Condition Object")
        .field(sun, "Sun Exposure")
        .field(wind, "Wind Exposure")
        .field(view_factor, "View Factor to Ground")
        .vertices(&vertices))
}

/// A window or door within `parent`
pub fn fenestration_surface(
    fen: &Fenestration,
    parent: &Surface,
    construction: &str,
    tolerance: Float,
) -> Result<Record, String> {
    let vertices = fen.vertices.clean(tolerance).ok_or_else(|| {
        format!(
            "Fenestration '{}' has less than 3 distinct vertices or invalid coordinates",
            fen.name
        )
    })?;
    if fen.multiplier == 0 {
        return Err(format!("Fenestration '{}' has a multiplier of 0", fen.name));
    }
    let view_factor = match fen.ground_view_factor {
        Some(v) => num(v),
        None => "autocalculate".to_string(),
    };
    Ok(Record::new("FenestrationSurface:Detailed")
        .field(&fen.name, "Name")
        .field(fen.fenestration_type.idf_name(), "Surface Type")
        .field(construction, "Construction Name")
        .field(&parent.name, "Building Surface Name")
        .optional(fen.boundary_object.as_ref(), "Outside Boundary Condition Object")
        .field(view_factor, "View Factor to Ground")
        .optional(fen.shading_control.as_ref(), "Shading Control Name")
        .optional(fen.frame_and_divider.as_ref(), "Frame and Divider Name")
        .field(fen.multiplier, "Multiplier")
        .vertices(&vertices))
}

/// Thermal mass inside a zone
pub fn internal_mass(mass: &InternalMass, zone_name: &str) -> Record {
    Record::new("InternalMass")
        .field(&mass.name, "Name")
        .field(&mass.construction, "Construction Name")
        .field(zone_name, "Zone Name")
        .field(num(mass.area), "Surface Area {m2}")
}

/* LOADS */

/// A list of zones that share their loads
pub fn zone_list(name: &str, zones: &[&str]) -> Record {
    zones
        .iter()
        .fold(Record::new("ZoneList").field(name, "Name"), |r, z| {
            r.value(z)
        })
}

/// The thermostat used by the ideal loads system of a zone
pub fn thermostat(zone_name: &str, heating: Option<&str>, cooling: Option<&str>) -> Record {
    Record::new("HVACTemplate:Thermostat")
        .field(format!("{} Thermostat", zone_name), "Name")
        .optional(heating, "Heating Setpoint Schedule Name")
        .blank("Constant Heating Setpoint {C}")
        .optional(cooling, "Cooling Setpoint Schedule Name")
        .blank("Constant Cooling Setpoint {C}")
}

/// The ideal loads system of a zone, with its outdoor air given by
/// [`design_specification_outdoor_air`]
pub fn ideal_loads_air_system(zone: &Zone, availability: Option<&str>) -> Record {
    let settings = &zone.ideal_loads;
    let (heating_limit, heating_capacity) = settings.heating_limit();
    let (cooling_limit, cooling_capacity) = settings.cooling_limit();
    Record::new("HVACTemplate:Zone:IdealLoadsAirSystem")
        .field(&zone.name, "Zone Name")
        .field(format!("{} Thermostat", zone.name), "Template Thermostat Name")
        .optional(availability, "System Availability Schedule Name")
        .field(
            settings.heating_supply_temperature(),
            "Maximum Heating Supply Air Temperature {C}",
        )
        .field(
            settings.cooling_supply_temperature(),
            "Minimum Cooling Supply Air Temperature {C}",
        )
        .blank("Maximum Heating Supply Air Humidity Ratio {kgWater/kgDryAir}")
        .blank("Minimum Cooling Supply Air Humidity Ratio {kgWater/kgDryAir}")
        .field(heating_limit, "Heating Limit")
        .blank("Maximum Heating Air Flow Rate {m3/s}")
        .field(heating_capacity, "Maximum Sensible Heating Capacity {W}")
        .field(cooling_limit, "Cooling Limit")
        .blank("Maximum Cooling Air Flow Rate {m3/s}")
        .field(cooling_capacity, "Maximum Total Cooling Capacity {W}")
        .blank("Heating Availability Schedule Name")
        .blank("Cooling Availability Schedule Name")
        .field("ConstantSensibleHeatRatio", "Dehumidification Control Type")
        .blank("Cooling Sensible Heat Ratio")
        .blank("Dehumidification Setpoint {percent}")
        .field("None", "Humidification Control Type")
        .blank("Humidification Setpoint {percent}")
        .field("DetailedSpecification", "Outdoor Air Method")
        .blank("Outdoor Air Flow Rate per Person {m3/s}")
        .blank("Outdoor Air Flow Rate per Zone Floor Area {m3/s-m2}")
        .blank("Outdoor Air Flow Rate per Zone {m3/s}")
        .field(
            format!("DSOA{}", zone.name),
            "Design Specification Outdoor Air Object Name",
        )
}

/// The outdoor air requirements of a conditioned zone
pub fn design_specification_outdoor_air(zone: &Zone) -> Record {
    Record::new("DesignSpecification:OutdoorAir")
        .field(format!("DSOA{}", zone.name), "Name")
        .field("sum", "Outdoor Air Method")
        .field(
            num(zone.loads.ventilation_per_person),
            "Outdoor Air Flow per Person {m3/s-person}",
        )
        .field(
            num(zone.loads.ventilation_per_area),
            "Outdoor Air Flow per Zone Floor Area {m3/s-m2}",
        )
        .field("0.0", "Outdoor Air Flow per Zone {m3/s}")
}

/// Electric equipment of a zone or a list of zones (`target`)
pub fn electric_equipment(target: &str, schedule: &str, watts_per_area: Float) -> Record {
    Record::new("ElectricEquipment")
        .field(format!("{}ElectricEquipment", target), "Name")
        .field(target, "Zone or ZoneList Name")
        .field(schedule, "Schedule Name")
        .field("Watts/Area", "Design Level Calculation Method")
        .blank("Design Level {W}")
        .field(num(watts_per_area), "Watts per Zone Floor Area {W/m2}")
        .blank("Watts per Person {W/person}")
        .blank("Fraction Latent")
        .blank("Fraction Radiant")
        .blank("Fraction Lost")
        .field("ElectricEquipment", "End-Use Subcategory")
}

/// Lights of a zone or a list of zones (`target`)
pub fn lights(target: &str, schedule: &str, watts_per_area: Float) -> Record {
    Record::new("Lights")
        .field(format!("{}OfficeLights", target), "Name")
        .field(target, "Zone or ZoneList Name")
        .field(schedule, "Schedule Name")
        .field("Watts/Area", "Design Level Calculation Method")
        .blank("Lighting Level {W}")
        .field(num(watts_per_area), "Watts per Zone Floor Area {W/m2}")
        .blank("Watts per Person {W/person}")
        .blank("Return Air Fraction")
        .blank("Fraction Radiant")
        .blank("Fraction Visible")
}

/// People in a zone or a list of zones (`target`)
pub fn people(
    target: &str,
    schedule: &str,
    people_per_area: Float,
    activity_schedule: Option<&str>,
) -> Record {
    Record::new("People")
        .field(format!("{}OfficePeople", target), "Name")
        .field(target, "Zone or ZoneList Name")
        .field(schedule, "Number of People Schedule Name")
        .field("People/Area", "Number of People Calculation Method")
        .blank("Number of People")
        .field(num(people_per_area), "People per Zone Floor Area {person/m2}")
        .blank("Zone Floor Area per Person {m2/person}")
        .field("0.3", "Fraction Radiant")
        .field("autocalculate", "Sensible Heat Fraction")
        .optional(activity_schedule, "Activity Level Schedule Name")
}

/// Infiltration in a zone or a list of zones (`target`)
pub fn infiltration(target: &str, schedule: &str, flow_per_area: Float) -> Record {
    Record::new("ZoneInfiltration:DesignFlowRate")
        .field(format!("{}_Infiltration", target), "Name")
        .field(target, "Zone or ZoneList Name")
        .field(schedule, "Schedule Name")
        .field("Flow/Area", "Design Flow Rate Calculation Method")
        .blank("Design Flow Rate {m3/s}")
        .field(num(flow_per_area), "Flow per Zone Floor Area {m3/s-m2}")
        .blank("Flow per Exterior Surface Area {m3/s-m2}")
        .blank("Air Changes per Hour")
        .blank("Constant Term Coefficient")
        .blank("Temperature Term Coefficient")
        .blank("Velocity Term Coefficient")
        .blank("Velocity Squared Term Coefficient")
}

/* AIRFLOWS */

/// Air flowing into `zone_name` from another zone
pub fn zone_mixing(zone_name: &str, index: usize, mixing: &AirMixing, schedule: &str) -> Record {
    Record::new("ZoneMixing")
        .field(
            format!("{}{}AirMix{}", zone_name, mixing.source_zone, index),
            "Name",
        )
        .field(zone_name, "Zone Name")
        .field(schedule, "Schedule Name")
        .field("Flow/Zone", "Design Flow Rate Calculation Method")
        .field(num(mixing.flow_rate), "Design Flow Rate {m3/s}")
        .blank("Flow Rate per Zone Floor Area {m3/s-m2}")
        .blank("Flow Rate per Person {m3/s-person}")
        .blank("Air Changes per Hour")
        .field(&mixing.source_zone, "Source Zone Name")
        .field("0", "Delta Temperature {deltaC}")
        .blank("Delta Temperature Schedule Name")
        .blank("Minimum Zone Temperature Schedule Name")
        .blank("Maximum Zone Temperature Schedule Name")
        .blank("Minimum Source Zone Temperature Schedule Name")
        .blank("Maximum Source Zone Temperature Schedule Name")
        .blank("Minimum Outdoor Temperature Schedule Name")
        .blank("Maximum Outdoor Temperature Schedule Name")
}

/// Natural ventilation through an opening, driven by wind and stack effect
pub fn wind_and_stack_ventilation(
    zone_name: &str,
    index: usize,
    opening: &OpeningVentilation,
    schedule: &str,
) -> Record {
    let or_auto = |v: Option<Float>| match v {
        Some(v) => num(v),
        None => "autocalculate".to_string(),
    };
    let limits = &opening.limits;
    Record::new("ZoneVentilation:WindandStackOpenArea")
        .field(format!("{}NatVent{}", zone_name, index), "Name")
        .field(zone_name, "Zone Name")
        .field(num(opening.opening_area), "Opening Area {m2}")
        .field(schedule, "Opening Area Fraction Schedule Name")
        .field(or_auto(opening.opening_effectiveness), "Opening Effectiveness")
        .field(num(opening.effective_angle), "Effective Angle {deg}")
        .field(num(opening.height_difference), "Height Difference {m}")
        .field(
            or_auto(opening.discharge_coefficient),
            "Discharge Coefficient for Opening",
        )
        .field(num(limits.min_indoor_temperature), "Minimum Indoor Temperature {C}")
        .blank("Minimum Indoor Temperature Schedule Name")
        .field(num(limits.max_indoor_temperature), "Maximum Indoor Temperature {C}")
        .blank("Maximum Indoor Temperature Schedule Name")
        .field("-100", "Delta Temperature {deltaC}")
        .blank("Delta Temperature Schedule Name")
        .field(num(limits.min_outdoor_temperature), "Minimum Outdoor Temperature {C}")
        .blank("Minimum Outdoor Temperature Schedule Name")
        .field(num(limits.max_outdoor_temperature), "Maximum Outdoor Temperature {C}")
        .blank("Maximum Outdoor Temperature Schedule Name")
        .field("40", "Maximum Wind Speed {m/s}")
}

/// Ventilation driven by a fan
pub fn fan_ventilation(
    zone_name: &str,
    index: usize,
    fan: &FanVentilation,
    schedule: &str,
) -> Record {
    let limits = &fan.limits;
    Record::new("ZoneVentilation:DesignFlowRate")
        .field(format!("{}NatVent{}", zone_name, index), "Name")
        .field(zone_name, "Zone or ZoneList Name")
        .field(schedule, "Schedule Name")
        .field("Flow/Zone", "Design Flow Rate Calculation Method")
        .field(num(fan.flow_rate), "Design Flow Rate {m3/s}")
        .blank("Flow Rate per Zone Floor Area {m3/s-m2}")
        .blank("Flow Rate per Person {m3/s-person}")
        .blank("Air Changes per Hour")
        .field("Intake", "Ventilation Type")
        .field(num(fan.fan_pressure_rise), "Fan Pressure Rise {Pa}")
        .field(num(fan.fan_efficiency), "Fan Total Efficiency")
        .field("1", "Constant Term Coefficient")
        .field("0", "Temperature Term Coefficient")
        .field("0", "Velocity Term Coefficient")
        .field("0", "Velocity Squared Term Coefficient")
        .field(num(limits.min_indoor_temperature), "Minimum Indoor Temperature {C}")
        .blank("Minimum Indoor Temperature Schedule Name")
        .field(num(limits.max_indoor_temperature), "Maximum Indoor Temperature {C}")
        .blank("Maximum Indoor Temperature Schedule Name")
        .field("-100", "Delta Temperature {deltaC}")
        .blank("Delta Temperature Schedule Name")
        .field(num(limits.min_outdoor_temperature), "Minimum Outdoor Temperature {C}")
        .blank("Minimum Outdoor Temperature Schedule Name")
        .field(num(limits.max_outdoor_temperature), "Maximum Outdoor Temperature {C}")
        .blank("Maximum Outdoor Temperature Schedule Name")
        .field("40", "Maximum Wind Speed {m/s}")
}

/* OUTPUTS */

/// Requests the list of surfaces in the `.eio` file
pub fn output_surfaces_list() -> Record {
    Record::new("Output:Surfaces:List").field("Details", "Report Type")
}

/// Requests the list of available output variables
pub fn output_variable_dictionary() -> Record {
    Record::new("Output:VariableDictionary").field("IDF", "Key Field")
}

/// The outputs requested when none are given: monthly heating,
/// cooling, lighting and equipment energy, written as CSV tables
pub fn default_outputs() -> Vec<Record> {
    let monthly = |variable: &str| {
        Record::new("Output:Variable")
            .field("*", "Key Value")
            .field(variable, "Variable Name")
            .field("Monthly", "Reporting Frequency")
    };
    vec![
        monthly("Zone Ideal Loads Supply Air Total Cooling Energy"),
        monthly("Zone Ideal Loads Supply Air Total Heating Energy"),
        monthly("Zone Lights Electric Energy"),
        monthly("Zone Electric Equipment Electric Energy"),
        Record::new("OutputControl:Table:Style").field("Comma", "Column Separator"),
    ]
}

/***********/
/* TESTING */
/***********/
