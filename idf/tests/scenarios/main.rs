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

use geometry::{Float, Loop3D, Point3D};
use idf::{DeduplicationContext, IdfWriter, Report, WriteRequest};
use model::{Model, ResourceLibrary, ALWAYS_ON};
use weather::Location;

const WELLINGTON: &str = "LOCATION,Wellington,-,NZL,IWEC Data,934360,-41.33,174.80,12.0,6.0";

fn library() -> Result<ResourceLibrary, String> {
    let mut lib = ResourceLibrary::builtin();
    lib.extend(ResourceLibrary::from_file("./tests/scenarios/library.idf")?);
    Ok(lib)
}

/// Writes the model and returns the IDF text, the report and the
/// referenced objects
fn write(
    model: &Model,
    working_dir: &std::path::Path,
) -> Result<(String, Report, DeduplicationContext), String> {
    let lib = library()?;
    let location = Location::from_epw_header(WELLINGTON)?;
    let writer = IdfWriter::new(model, &lib, working_dir);
    let mut out: Vec<u8> = Vec::new();
    let mut report = Report::new();
    let dedup = writer
        .write(&mut out, &WriteRequest::new("office.idf", location), &mut report)
        .map_err(|e| e.to_string())?;
    let idf = String::from_utf8(out).map_err(|e| e.to_string())?;
    Ok((idf, report, dedup))
}

fn count(idf: &str, keyword: &str) -> usize {
    idf.matches(&format!("\n{},\n", keyword)).count()
}

fn office_with_wall(construction: &str) -> Result<Model, String> {
    Model::from_json5(&format!(
        "{{
        version: '0.5.0',
        zones: [{{
            name: 'Office',
            surfaces: [{{
                name: 'Office_Wall',
                surface_type: 'Wall',
                construction: '{}',
                vertices: [0,0,0, 4,0,0, 4,0,3, 0,0,3],
            }}]
        }}]
    }}",
        construction
    ))
}

#[test]
fn single_office() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = office_with_wall("BRICK-WALL")?;
    let (idf, report, _) = write(&model, dir.path())?;

    for keyword in [
        "Version",
        "Timestep",
        "ShadowCalculation",
        "Building",
        "HeatBalanceAlgorithm",
        "SurfaceConvectionAlgorithm:Inside",
        "SurfaceConvectionAlgorithm:Outside",
        "Site:Location",
        "SimulationControl",
        "RunPeriod",
        "GlobalGeometryRules",
        "Zone",
        "BuildingSurface:Detailed",
        "Construction",
    ] {
        assert_eq!(count(&idf, keyword), 1, "{}", keyword);
    }
    assert_eq!(count(&idf, "SizingPeriod:WeatherFileConditionType"), 2);
    assert_eq!(count(&idf, "Material"), 2);
    assert_eq!(count(&idf, "Output:Variable"), 4);
    assert_eq!(count(&idf, "OutputControl:Table:Style"), 1);
    assert!(idf.contains("\tBRICK-WALL,\t!- Construction Name\n"));
    assert!(report.warnings().is_empty(), "{:?}", report.warnings());

    // Nothing is copied or run
    assert_eq!(std::fs::read_dir(dir.path()).map_err(|e| e.to_string())?.count(), 0);
    Ok(())
}

#[test]
fn missing_construction() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = office_with_wall("Glass Brick Wall")?;
    let (idf, report, dedup) = write(&model, dir.path())?;

    assert_eq!(count(&idf, "BuildingSurface:Detailed"), 1);
    assert!(idf.contains("\tGlass Brick Wall,\t!- Construction Name\n"));
    assert_eq!(count(&idf, "Construction"), 0);
    assert_eq!(count(&idf, "Material"), 0);
    assert_eq!(report.warnings().len(), 1);
    assert_eq!(report.count_warnings("'Glass Brick Wall'"), 1);
    assert_eq!(dedup.constructions(), &["Glass Brick Wall".to_string()]);
    Ok(())
}

#[test]
fn air_wall_and_unscheduled_ventilation() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = Model::from_json5(
        "{
        version: '0.5.0',
        zones: [
            {
                name: 'Kitchen',
                surfaces: [{
                    name: 'Kitchen_Living',
                    surface_type: 'AirWall',
                    boundary: {type: 'Surface', surface: 'Living_Kitchen'},
                    vertices: [4,0,0, 4,4,0, 4,4,3, 4,0,3],
                }],
                natural_ventilation: [
                    {type: 'CustomStack', opening_area: 1.2, height_difference: 2},
                ],
            },
            {
                name: 'Living',
                surfaces: [{
                    name: 'Living_Kitchen',
                    surface_type: 'AirWall',
                    boundary: {type: 'Surface', surface: 'Kitchen_Living'},
                    vertices: [4,0,0, 4,0,3, 4,4,3, 4,4,0],
                }],
                air_mixing: [
                    {source_zone: 'Kitchen', flow_rate: 0.05},
                ],
            },
        ],
    }",
    )?;
    let (idf, _report, dedup) = write(&model, dir.path())?;

    let always_on = dedup
        .schedules()
        .iter()
        .filter(|s| s.eq_ignore_ascii_case(ALWAYS_ON))
        .count();
    assert_eq!(always_on, 1);
    assert_eq!(idf.matches("\tALWAYS ON,\t!- Name\n").count(), 1);

    // Air walls are walls, with the air wall construction
    assert_eq!(idf.matches("\tWall,\t!- Surface Type\n").count(), 2);
    assert_eq!(idf.matches("\tAir Wall,\t!- Construction Name\n").count(), 2);
    assert_eq!(count(&idf, "ZoneVentilation:WindandStackOpenArea"), 1);
    assert_eq!(count(&idf, "ZoneMixing"), 1);
    assert!(idf.contains("\tALWAYS ON,\t!- Opening Area Fraction Schedule Name\n"));
    Ok(())
}

#[test]
fn shared_construction_is_written_once() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let mut model = office_with_wall("BRICK-WALL")?;
    for (i, construction) in ["brick-wall", "Brick-Wall", "Insulated Wall"].iter().enumerate() {
        let mut zone = model.zones[0].clone();
        zone.name = format!("Office_{}", i);
        zone.surfaces[0].name = format!("Office_{}_Wall", i);
        zone.surfaces[0].construction = Some(construction.to_string());
        model.zones.push(zone);
    }
    let (idf, report, dedup) = write(&model, dir.path())?;

    assert_eq!(count(&idf, "BuildingSurface:Detailed"), 4);
    assert_eq!(idf.matches("\nConstruction,\n\tBRICK-WALL,").count(), 1);
    assert_eq!(idf.matches("\nConstruction,\n\tInsulated Wall,").count(), 1);
    assert_eq!(idf.matches("\nMaterial,\n\tBrick,").count(), 1);
    assert_eq!(idf.matches("\nMaterial,\n\tPlaster,").count(), 1);
    assert_eq!(idf.matches("\nMaterial:NoMass,\n\tInsulation,").count(), 1);
    assert_eq!(dedup.constructions().len(), 2);
    assert_eq!(dedup.materials().len(), 3);
    assert!(report.warnings().is_empty());
    Ok(())
}

#[test]
fn broken_window_does_not_stop_the_others() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let mut model = Model::from_json5(
        "{
        version: '0.5.0',
        zones: [{
            name: 'Office',
            surfaces: [{
                name: 'Office_Wall',
                surface_type: 'Wall',
                construction: 'BRICK-WALL',
                vertices: [0,0,0, 4,0,0, 4,0,3, 0,0,3],
                fenestrations: [
                    {name: 'Window_1', vertices: [0.5,0,1, 1,0,1, 1,0,2, 0.5,0,2]},
                    {name: 'Window_2', vertices: [1.5,0,1, 2,0,1, 2,0,2, 1.5,0,2]},
                    {name: 'Window_3', vertices: [2.5,0,1, 3,0,1, 3,0,2, 2.5,0,2]},
                ]
            }]
        }]
    }",
    )?;
    model.zones[0].surfaces[0].fenestrations[1].vertices = Loop3D::from(vec![
        Point3D::new(1.5, 0., 1.),
        Point3D::new(Float::NAN, 0., 1.),
        Point3D::new(2., 0., 2.),
        Point3D::new(1.5, 0., 2.),
    ]);
    let (idf, report, _) = write(&model, dir.path())?;

    assert_eq!(count(&idf, "FenestrationSurface:Detailed"), 2);
    assert!(idf.contains("\nFenestrationSurface:Detailed,\n\tWindow_1,"));
    assert!(idf.contains("\nFenestrationSurface:Detailed,\n\tWindow_3,"));
    assert!(!idf.contains("Window_2"));
    assert_eq!(report.warnings().len(), 1);
    assert_eq!(report.count_warnings("'Window_2'"), 1);

    // The window construction is still written
    assert_eq!(idf.matches("\nConstruction,\n\tExterior Window,").count(), 1);
    assert_eq!(idf.matches("\nWindowMaterial:SimpleGlazingSystem,\n\tClear Glass,").count(), 1);
    Ok(())
}

#[test]
fn degenerate_surface_is_removed() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let mut model = office_with_wall("BRICK-WALL")?;
    model.zones[0].surfaces[0].vertices = Loop3D::from(vec![
        Point3D::new(0., 0., 0.),
        Point3D::new(0.001, 0., 0.),
        Point3D::new(4., 0., 0.),
        Point3D::new(4., 0.005, 0.),
    ]);
    let (idf, report, _) = write(&model, dir.path())?;
    assert_eq!(count(&idf, "BuildingSurface:Detailed"), 0);
    assert_eq!(report.count_warnings("'Office_Wall'"), 1);
    // The construction was registered anyway
    assert_eq!(count(&idf, "Construction"), 1);
    Ok(())
}

#[test]
fn ground_floor_construction_has_no_layers() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = office_with_wall("Slab On Grade")?;
    let (idf, report, dedup) = write(&model, dir.path())?;

    assert!(report.warnings().is_empty(), "{:?}", report.warnings());
    assert!(dedup.materials().is_empty());
    assert_eq!(count(&idf, "Construction:FfactorGroundFloor"), 1);
    assert_eq!(count(&idf, "Material"), 0);
    Ok(())
}

#[test]
fn other_hvac_systems_are_replaced_by_ideal_loads() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = Model::from_json5(
        "{
        version: '0.5.0',
        zones: [
            {name: 'North', hvac: {type: 'Other', name: 'VAV'}},
            {name: 'South', hvac: {type: 'Other', name: 'Fan Coil'}},
        ]
    }",
    )?;
    let (idf, report, _) = write(&model, dir.path())?;

    assert_eq!(report.warnings().len(), 1, "{:?}", report.warnings());
    assert_eq!(report.count_warnings("ideal loads"), 1);

    assert_eq!(count(&idf, "HVACTemplate:Thermostat"), 2);
    assert_eq!(count(&idf, "HVACTemplate:Zone:IdealLoadsAirSystem"), 2);
    assert_eq!(count(&idf, "DesignSpecification:OutdoorAir"), 2);
    for zone in ["North", "South"] {
        assert!(idf.contains(&format!("\t{} Thermostat,\t!- Name\n", zone)));
        assert!(idf.contains(&format!(
            "\nHVACTemplate:Zone:IdealLoadsAirSystem,\n\t{0},\t!- Zone Name\n\t{0} Thermostat,",
            zone
        )));
        assert!(idf.contains(&format!("\tDSOA{},\t!- Name\n", zone)));
    }
    Ok(())
}

#[test]
fn zones_with_the_same_loads_share_records() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = Model::from_json5(
        "{
        version: '0.5.0',
        zones: [
            {name: 'A', schedules: {occupancy: 'OFFICE OCC', heating_setpoint: 'HEATING SP'}, loads: {people_per_area: 0.1}},
            {name: 'B', schedules: {occupancy: 'OFFICE OCC', heating_setpoint: 'HEATING SP'}, loads: {people_per_area: 0.1}},
            {name: 'C', schedules: {occupancy: 'OFFICE OCC', heating_setpoint: 'HEATING SP'}, loads: {people_per_area: 0.2}},
            {name: 'D', conditioned: false, hvac: {type: 'Other', name: 'VAV'}},
            {name: 'E', hvac: {type: 'Other', name: 'VAV'}},
        ]
    }",
    )?;
    let (idf, report, _) = write(&model, dir.path())?;

    // A and B share loads... and so do D and E
    assert_eq!(count(&idf, "ZoneList"), 2);
    assert!(idf.contains("\nZoneList,\n\tZoneGroup_1,\t!- Name\n\tA,\n\tB;\n"));
    assert!(idf.contains("\nZoneList,\n\tZoneGroup_3,\t!- Name\n\tD,\n\tE;\n"));
    assert_eq!(count(&idf, "People"), 2);
    assert!(idf.contains("\tZoneGroup_1OfficePeople,\t!- Name\n"));
    assert!(idf.contains("\tCOfficePeople,\t!- Name\n"));
    assert_eq!(count(&idf, "Lights"), 0);

    // HVAC is per zone... and only for conditioned zones
    assert_eq!(count(&idf, "HVACTemplate:Thermostat"), 4);
    assert_eq!(count(&idf, "HVACTemplate:Zone:IdealLoadsAirSystem"), 4);
    assert_eq!(count(&idf, "DesignSpecification:OutdoorAir"), 4);
    assert!(!idf.contains("\tD Thermostat,"));

    assert_eq!(report.count_warnings("ideal loads"), 1);

    // Schedules are written once
    assert_eq!(idf.matches("\tOFFICE OCC,\t!- Name\n").count(), 1);
    assert_eq!(idf.matches("\tHEATING SP,\t!- Name\n").count(), 1);
    Ok(())
}

#[test]
fn schedule_closure() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = Model::from_json5(
        "{
        version: '0.5.0',
        zones: [
            {name: 'A', schedules: {lighting: 'OFFICE LIGHTS', equipment: 'NOT THERE'}, loads: {lighting_per_area: 9}},
            {name: 'B', schedules: {lighting: 'office lights', equipment: 'not there'}, loads: {lighting_per_area: 9}},
        ]
    }",
    )?;
    let (idf, report, dedup) = write(&model, dir.path())?;

    assert_eq!(count(&idf, "Schedule:Year"), 1);
    assert_eq!(count(&idf, "Schedule:Week:Compact"), 1);
    assert_eq!(count(&idf, "Schedule:Day:Interval"), 2);
    let position = |name: &str| idf.find(&format!("\t{},\t!- Name\n", name));
    assert!(position("OFFICE LIGHTS") < position("Office Week"));
    assert!(position("Office Week") < position("Office Day"));
    assert!(position("Office Day") < position("Off Day"));
    assert_eq!(
        dedup.schedules(),
        &["OFFICE LIGHTS", "NOT THERE", "Office Week", "Office Day", "Off Day"]
    );
    assert_eq!(report.count_warnings("'NOT THERE'"), 1);
    assert_eq!(report.warnings().len(), 1);
    Ok(())
}

#[test]
fn csv_schedules() -> Result<(), String> {
    let source_dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let working_dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let csv = source_dir.path().join("Occ.Sched.csv");
    std::fs::write(
        &csv,
        "Honeybee,0,1,Continuous,Dimensionless\nDate,Hour,Value\n1,,\n0.5\n",
    )
    .map_err(|e| e.to_string())?;
    let csv = csv.to_string_lossy().replace('\\', "/");

    let model = Model::from_json5(&format!(
        "{{
        version: '0.5.0',
        zones: [
            {{name: 'A', schedules: {{occupancy: '{0}'}}, loads: {{people_per_area: 0.1}}}},
            {{name: 'B', schedules: {{occupancy: '{0}'}}, loads: {{people_per_area: 0.2}}}},
        ],
        shading: [{{
            name: 'Tree',
            transmittance_schedule: '{0}',
            loops: [[0,-2,0, 2,-2,0, 2,-2,4], [4,-2,0, 6,-2,0, 6,-2,4]]
        }}]
    }}",
        csv
    ))?;
    let (idf, report, _) = write(&model, working_dir.path())?;

    assert!(report.warnings().is_empty(), "{:?}", report.warnings());
    assert_eq!(count(&idf, "Schedule:File"), 1);
    assert_eq!(idf.matches("\toccschedTypeLimit,\t!- Name\n").count(), 1);
    assert_eq!(idf.matches("\tOcc_Sched,\t!- Number of People Schedule Name\n").count(), 2);
    assert_eq!(count(&idf, "Shading:Building:Detailed"), 2);
    assert!(idf.contains("\tTree_1,\t!- Name\n\tOcc_Sched,\t!- Transmittance Schedule Name\n"));
    assert!(working_dir.path().join("Occ.Sched.csv").exists());

    // The file schedule goes before the shading that uses it
    assert!(idf.find("\nSchedule:File,\n") < idf.find("\nShading:Building:Detailed,\n"));
    Ok(())
}

#[test]
fn csv_schedules_with_the_same_file_name() -> Result<(), String> {
    let first_dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let second_dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let working_dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let header = "Honeybee,0,1,Continuous,Dimensionless\nDate,Hour,Value\n1,,\n";
    let first = first_dir.path().join("occ.csv");
    let second = second_dir.path().join("occ.csv");
    std::fs::write(&first, format!("{}1\n", header)).map_err(|e| e.to_string())?;
    std::fs::write(&second, format!("{}0\n", header)).map_err(|e| e.to_string())?;
    let first = first.to_string_lossy().replace('\\', "/");
    let second = second.to_string_lossy().replace('\\', "/");

    let model = Model::from_json5(&format!(
        "{{
        version: '0.5.0',
        zones: [
            {{name: 'A', schedules: {{occupancy: '{}'}}, loads: {{people_per_area: 0.1}}}},
            {{name: 'B', schedules: {{occupancy: '{}'}}, loads: {{people_per_area: 0.1}}}},
        ]
    }}",
        first, second
    ))?;
    let (idf, report, _) = write(&model, working_dir.path())?;

    // Two objects, two files
    assert_eq!(count(&idf, "Schedule:File"), 2);
    assert!(idf.contains("\nSchedule:File,\n\tocc,\t!- Name\n\toccTypeLimit,"));
    assert!(idf.contains("\nSchedule:File,\n\tocc_2,\t!- Name\n\tocc_2TypeLimit,"));
    let read = |name: &str| {
        std::fs::read_to_string(working_dir.path().join(name)).map_err(|e| e.to_string())
    };
    assert!(read("occ.csv")?.ends_with("1\n"));
    assert!(read("occ_2.csv")?.ends_with("0\n"));

    // Each zone keeps its own schedule
    assert_eq!(count(&idf, "ZoneList"), 0);
    assert_eq!(idf.matches("\tocc,\t!- Number of People Schedule Name\n").count(), 1);
    assert_eq!(idf.matches("\tocc_2,\t!- Number of People Schedule Name\n").count(), 1);

    assert_eq!(report.warnings().len(), 1, "{:?}", report.warnings());
    assert_eq!(report.count_warnings("'occ_2'"), 1);
    Ok(())
}

#[test]
fn missing_csv_schedule_is_fatal() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let missing = dir.path().join("missing.csv").to_string_lossy().replace('\\', "/");
    let model = Model::from_json5(&format!(
        "{{ version: '0.5.0', zones: [{{name: 'A', schedules: {{occupancy: '{}'}}}}] }}",
        missing
    ))?;
    let lib = library()?;
    let location = Location::from_epw_header(WELLINGTON)?;
    let writer = IdfWriter::new(&model, &lib, dir.path());
    let mut out: Vec<u8> = Vec::new();
    let mut report = Report::new();
    let result = writer.write(&mut out, &WriteRequest::new("a.idf", location), &mut report);
    assert!(matches!(result, Err(idf::IdfError::ScheduleCopy { .. })));
    Ok(())
}

#[test]
fn window_shading_and_outputs() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
    let model = Model::from_json5(
        "{
        version: '0.5.0',
        zones: [{
            name: 'Office',
            surfaces: [{
                name: 'Office_Wall',
                surface_type: 'Wall',
                construction: 'BRICK-WALL',
                vertices: [0,0,0, 4,0,0, 4,0,3, 0,0,3],
                fenestrations: [
                    {
                        name: 'Window_1',
                        shading_control: 'Blinds Control',
                        vertices: [0.5,0,1, 1,0,1, 1,0,2, 0.5,0,2],
                        shading: {records: 'WindowMaterial:Blind,\\n\\tMy Blind;', schedule: 'OFFICE OCC'},
                    },
                    {
                        name: 'Window_2',
                        vertices: [1.5,0,1, 2,0,1, 2,0,2, 1.5,0,2],
                        shading: {records: 'WindowMaterial:Blind,\\n\\tOther Blind;', schedule: 'AlwaysOn'},
                    },
                ]
            }]
        }]
    }",
    )?;
    let lib = library()?;
    let location = Location::from_epw_header(WELLINGTON)?;
    let writer = IdfWriter::new(&model, &lib, dir.path());
    let mut out: Vec<u8> = Vec::new();
    let mut report = Report::new();
    let mut request = WriteRequest::new("office.idf", location);
    request.outputs = Some(vec![
        "Output:Variable,*,Zone Mean Air Temperature,Hourly;".to_string(),
    ]);
    let dedup = writer
        .write(&mut out, &request, &mut report)
        .map_err(|e| e.to_string())?;
    let idf = String::from_utf8(out).map_err(|e| e.to_string())?;

    assert!(idf.contains("\nWindowMaterial:Blind,\n\tMy Blind;\n"));
    assert!(idf.contains("\tBlinds Control,\t!- Shading Control Name\n"));
    assert_eq!(dedup.schedules(), &["OFFICE OCC"]);
    assert!(idf.ends_with("\nOutput:Variable,*,Zone Mean Air Temperature,Hourly;\n"));
    assert_eq!(count(&idf, "OutputControl:Table:Style"), 0);
    Ok(())
}

