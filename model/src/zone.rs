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

use crate::{AirMixing, Float, HVACSystem, IdealLoadsSettings, NaturalVentilation, Point3D, Surface};
use serde::{Deserialize, Serialize};

/// The kind of zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    /// A normal zone
    #[default]
    Normal,

    /// The space between a ceiling and the floor above it, which
    /// is not part of the floor area of the building
    Plenum,
}

/// The names of the schedules that drive the loads and the HVAC
/// system of a zone. Each of them can be the name of a schedule in the
/// [`crate::ResourceLibrary`] or the path to a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneSchedules {
    /// Fraction of the people that are in the zone
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<String>,

    /// The activity level of the people in the zone
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_activity: Option<String>,

    /// Fraction of the lights that are on
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,

    /// Fraction of the equipment that is on
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,

    /// Fraction of the infiltration
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infiltration: Option<String>,

    /// Heating setpoint
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_setpoint: Option<String>,

    /// Cooling setpoint
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling_setpoint: Option<String>,

    /// When is the HVAC available
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvac_availability: Option<String>,
}

impl ZoneSchedules {
    /// All the schedules, always in the same order, whether
    /// they are set or not
    pub fn current(&self) -> [Option<&str>; 8] {
        [
            self.occupancy.as_deref(),
            self.occupancy_activity.as_deref(),
            self.lighting.as_deref(),
            self.equipment.as_deref(),
            self.infiltration.as_deref(),
            self.heating_setpoint.as_deref(),
            self.cooling_setpoint.as_deref(),
            self.hvac_availability.as_deref(),
        ]
    }
}

/// The loads of a zone, per unit of floor area (or per person)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneLoads {
    /// Electric equipment, in W/m2
    #[serde(default)]
    pub equipment_per_area: Float,

    /// Infiltration, in m3/s-m2
    #[serde(default)]
    pub infiltration_per_area: Float,

    /// Lighting, in W/m2
    #[serde(default)]
    pub lighting_per_area: Float,

    /// Number of people per m2
    #[serde(default)]
    pub people_per_area: Float,

    /// Outdoor air per person, in m3/s-person
    #[serde(default)]
    pub ventilation_per_person: Float,

    /// Outdoor air per m2 of floor, in m3/s-m2
    #[serde(default)]
    pub ventilation_per_area: Float,
}

impl ZoneLoads {
    /// All the loads, always in the same order
    pub fn current(&self) -> [Float; 6] {
        [
            self.equipment_per_area,
            self.infiltration_per_area,
            self.lighting_per_area,
            self.people_per_area,
            self.ventilation_per_person,
            self.ventilation_per_area,
        ]
    }
}

/// A mass within a zone that stores heat but does not enclose it
/// (e.g., furniture or interior partitions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InternalMass {
    /// The name of the mass
    pub name: String,

    /// The area of the mass exposed to the zone, in m2
    pub area: Float,

    /// The construction of the mass
    pub construction: String,
}

fn default_true() -> bool {
    true
}

/// Represents a thermal zone; that is to say, an air volume
/// with homogeneous temperature, enclosed by [`Surface`]s.
///
/// ```
/// use model::{Zone, ZoneKind};
///
/// let zone : Zone = json5::from_str("{
///     name: 'Attic',
///     kind: 'Plenum',
///     conditioned: false,
/// }").unwrap();
///
/// assert_eq!(zone.kind, ZoneKind::Plenum);
/// assert!(zone.surfaces.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Zone {
    /// The name of the zone
    pub name: String,

    /// The origin of the zone
    #[serde(default)]
    pub origin: Point3D,

    /// The direction of relative north, in degrees
    #[serde(default)]
    pub north: Float,

    /// Normal zone or plenum
    #[serde(default)]
    pub kind: ZoneKind,

    /// Is the zone heated and cooled?
    #[serde(default = "default_true")]
    pub conditioned: bool,

    /// The surfaces that enclose the zone
    #[serde(default)]
    pub surfaces: Vec<Surface>,

    /// The schedules of loads and HVAC
    #[serde(default)]
    pub schedules: ZoneSchedules,

    /// The loads of the zone
    #[serde(default)]
    pub loads: ZoneLoads,

    /// The heating and cooling system
    #[serde(default)]
    pub hvac: HVACSystem,

    /// The settings of the ideal loads system
    #[serde(default)]
    pub ideal_loads: IdealLoadsSettings,

    /// Ways in which the zone is naturally ventilated
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub natural_ventilation: Vec<NaturalVentilation>,

    /// Air that comes from other zones
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub air_mixing: Vec<AirMixing>,

    /// Thermal mass within the zone
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub internal_masses: Vec<InternalMass>,
}

impl Zone {
    /// Creates a new conditioned zone, with no surfaces
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            origin: Point3D::default(),
            north: 0.,
            kind: ZoneKind::Normal,
            conditioned: true,
            surfaces: Vec::new(),
            schedules: ZoneSchedules::default(),
            loads: ZoneLoads::default(),
            hvac: HVACSystem::default(),
            ideal_loads: IdealLoadsSettings::default(),
            natural_ventilation: Vec::new(),
            air_mixing: Vec::new(),
            internal_masses: Vec::new(),
        }
    }

    /// Checks whether a ventilation or air-mixing entry of the zone
    /// has no schedule (i.e., it is always on)
    pub fn has_unscheduled_airflow(&self) -> bool {
        self.natural_ventilation.iter().any(|v| v.schedule().is_none())
            || self.air_mixing.iter().any(|m| m.schedule.is_none())
    }

    /// Multiplies every length in the zone by a factor
    pub fn scale(&mut self, factor: Float) {
        let area_factor = factor * factor;
        self.origin = self.origin * factor;
        for s in self.surfaces.iter_mut() {
            s.vertices = s.vertices.scale(factor);
            for f in s.fenestrations.iter_mut() {
                f.vertices = f.vertices.scale(factor);
            }
        }
        for m in self.internal_masses.iter_mut() {
            m.area *= area_factor;
        }
        for v in self.natural_ventilation.iter_mut() {
            match v {
                NaturalVentilation::WindowOpening(o) | NaturalVentilation::CustomStack(o) => {
                    o.opening_area *= area_factor;
                    o.height_difference *= factor;
                }
                NaturalVentilation::Fan(_) => {}
            }
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{Loop3D, SurfaceType};

    #[test]
    fn test_defaults() -> Result<(), String> {
        let zone: Zone = json5::from_str("{name: 'Office'}").map_err(|e| e.to_string())?;
        assert_eq!(zone.kind, ZoneKind::Normal);
        assert!(zone.conditioned);
        assert!(zone.hvac.is_ideal_loads());
        assert_eq!(zone.schedules.current(), [None; 8]);
        assert_eq!(zone.loads.current(), [0.; 6]);
        assert!(!zone.has_unscheduled_airflow());
        assert_eq!(zone, Zone::new("Office"));
        Ok(())
    }

    #[test]
    fn test_full_zone() -> Result<(), String> {
        let zone: Zone = json5::from_str(
            "{
            name: 'Office',
            origin: {x: 1, y: 2, z: 0},
            schedules: {
                occupancy: 'OFFICE OCC',
                lighting: 'c:/schedules/lights.csv',
            },
            loads: {
                lighting_per_area: 8.5,
                people_per_area: 0.1,
            },
            hvac: {type: 'Other', name: 'Packaged'},
            natural_ventilation: [{type: 'WindowOpening', opening_area: 2}],
            air_mixing: [{source_zone: 'Hall', flow_rate: 0.3, schedule: 'MIX'}],
            internal_masses: [{name: 'Furniture', area: 12, construction: 'Wood'}],
        }",
        )
        .map_err(|e| e.to_string())?;
        let current = zone.schedules.current();
        assert_eq!(current[0], Some("OFFICE OCC"));
        assert_eq!(current[2], Some("c:/schedules/lights.csv"));
        assert!((zone.loads.current()[2] - 8.5).abs() < 1e-9);
        assert!(!zone.hvac.is_ideal_loads());
        assert!(zone.has_unscheduled_airflow());
        assert_eq!(zone.internal_masses[0].construction, "Wood");
        Ok(())
    }

    #[test]
    fn test_scale() {
        let mut zone = Zone::new("Office");
        let mut vertices = Loop3D::new();
        vertices.push(Point3D::new(0., 0., 0.));
        vertices.push(Point3D::new(100., 0., 0.));
        vertices.push(Point3D::new(100., 0., 100.));
        zone.surfaces
            .push(Surface::new("wall", SurfaceType::Wall, vertices));
        zone.internal_masses.push(InternalMass {
            name: "mass".into(),
            area: 10000.,
            construction: "Wood".into(),
        });
        zone.origin = Point3D::new(100., 100., 0.);

        zone.scale(0.01);
        assert!((zone.surfaces[0].vertices[1].x - 1.).abs() < 1e-9);
        assert!((zone.internal_masses[0].area - 1.).abs() < 1e-9);
        assert!((zone.origin.y - 1.).abs() < 1e-9);
    }
}
