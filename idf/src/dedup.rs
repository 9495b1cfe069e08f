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

use model::{LibraryObject, NaturalVentilation, ResourceLibrary, Zone, ALWAYS_ON};
use std::collections::{HashSet, VecDeque};

/// A list of names with no repetitions, in the order in which they were
/// first inserted. Names are compared ignoring case, but they are kept as
/// they were first inserted.
#[derive(Debug, Clone, Default)]
pub struct OrderedNameSet {
    names: Vec<String>,
    keys: HashSet<String>,
}

impl OrderedNameSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name. Returns `true` if it was not there already
    pub fn insert(&mut self, name: &str) -> bool {
        if self.keys.insert(name.to_uppercase()) {
            self.names.push(name.to_string());
            true
        } else {
            false
        }
    }

    /// Checks whether a name is in the set
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&name.to_uppercase())
    }

    /// The names, in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The number of names in the set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The constructions, materials and schedules referenced by a model,
/// each of them registered once.
#[derive(Debug, Clone, Default)]
pub struct DeduplicationContext {
    constructions: OrderedNameSet,
    materials: OrderedNameSet,
    schedules: OrderedNameSet,
}

impl DeduplicationContext {
    /// Creates an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a construction; returns `true` if it was new
    pub fn register_construction(&mut self, name: &str) -> bool {
        self.constructions.insert(name)
    }

    /// Registers a material; returns `true` if it was new
    pub fn register_material(&mut self, name: &str) -> bool {
        self.materials.insert(name)
    }

    /// Registers a schedule; returns `true` if it was new
    pub fn register_schedule(&mut self, name: &str) -> bool {
        self.schedules.insert(name)
    }

    /// Registers every schedule used by the loads, HVAC, natural
    /// ventilation and air mixing of a zone. If any of the airflows
    /// has no schedule, [`ALWAYS_ON`] is registered.
    pub fn register_zone_schedules(&mut self, zone: &Zone) {
        for s in zone.schedules.current().into_iter().flatten() {
            self.register_schedule(s);
        }
        for s in zone.natural_ventilation.iter().filter_map(NaturalVentilation::schedule) {
            self.register_schedule(s);
        }
        for s in zone.air_mixing.iter().filter_map(|m| m.schedule.as_deref()) {
            self.register_schedule(s);
        }
        if zone.has_unscheduled_airflow() {
            self.register_schedule(ALWAYS_ON);
        }
    }

    /// The constructions registered so far
    pub fn constructions(&self) -> &[String] {
        self.constructions.names()
    }

    /// The materials registered so far
    pub fn materials(&self) -> &[String] {
        self.materials.names()
    }

    /// The schedules registered so far
    pub fn schedules(&self) -> &[String] {
        self.schedules.names()
    }

    /// Adds to the registered schedules all those referenced (directly
    /// or indirectly) by them: the week schedules of a `Schedule:Year`
    /// and the day schedules of the `Schedule:Week` objects.
    ///
    /// New names are appended in the order in which they are found.
    pub fn close_schedules(&mut self, library: &ResourceLibrary) {
        let mut queue: VecDeque<String> = self.schedules.names().iter().cloned().collect();
        while let Some(name) = queue.pop_front() {
            let object = match library.schedule(&name) {
                Some(o) => o,
                None => continue,
            };
            for r in schedule_references(object) {
                if self.register_schedule(r) {
                    queue.push_back(r.to_string());
                }
            }
        }
    }
}

/// The names of the schedules referenced by a schedule
pub fn schedule_references(object: &LibraryObject) -> Vec<&str> {
    let fields: Vec<&str> = object.values().collect();
    let class = object.class.to_ascii_lowercase();
    let refs: Vec<&str> = match class.as_str() {
        // Type limits, then (week, start month, start day, end month, end day)...
        "schedule:year" => fields.iter().skip(1).step_by(5).copied().collect(),
        // One day schedule per day type
        "schedule:week:daily" => fields,
        // ("For: ...", day schedule)...
        "schedule:week:compact" => fields.iter().skip(1).step_by(2).copied().collect(),
        _ => Vec::new(),
    };
    refs.into_iter().filter(|r| !r.is_empty()).collect()
}

/// The text that identifies zones that share their loads and schedules:
/// all the schedule names followed by all the load values.
pub fn zone_group_key(zone: &Zone) -> String {
    let schedules = zone.schedules.current().map(|s| s.unwrap_or("").to_string());
    let loads = zone.loads.current().map(|v| format!("{:?}", v));
    schedules
        .into_iter()
        .chain(loads)
        .collect::<Vec<String>>()
        .join(",")
}

/// A group of zones with the same loads and schedules
#[derive(Debug, Clone)]
pub struct ZoneGroup<'a> {
    /// The key shared by all the zones in the group
    pub key: String,

    /// The zones, in the order in which they were added
    pub zones: Vec<&'a Zone>,
}

/// Zones classified by their loads and schedules. Groups are kept in the
/// order in which they were first found.
#[derive(Debug, Clone, Default)]
pub struct ZoneGrouping<'a> {
    groups: Vec<ZoneGroup<'a>>,
}

impl<'a> ZoneGrouping<'a> {
    /// Creates an empty grouping
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Adds a zone to the group it belongs to (creating it if needed)
    /// and returns the index of such group
    pub fn add(&mut self, zone: &'a Zone) -> usize {
        let key = zone_group_key(zone);
        match self.groups.iter().position(|g| g.key == key) {
            Some(i) => {
                self.groups[i].zones.push(zone);
                i
            }
            None => {
                self.groups.push(ZoneGroup {
                    key,
                    zones: vec![zone],
                });
                self.groups.len() - 1
            }
        }
    }

    /// The groups
    pub fn groups(&self) -> &[ZoneGroup<'a>] {
        &self.groups
    }
}

/***********/
/* TESTING */
/***********/
