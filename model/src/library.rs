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

use crate::scanner::IdfScanner;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The name of the schedule used by airflows that have no schedule
pub const ALWAYS_ON: &str = "ALWAYS ON";

/// A field of a [`LibraryObject`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryField {
    /// The value, as written in the IDF file
    pub value: String,

    /// A description of the field (e.g., `Thickness {m}`)
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A named object in the [`ResourceLibrary`] (e.g., a `Material`, a
/// `Construction` or a `Schedule:Compact`), stored as the EnergyPlus
/// class name, the name of the object and the rest of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryObject {
    /// The EnergyPlus class of the object (e.g., `Material:NoMass`)
    pub class: String,

    /// The name of the object
    pub name: String,

    /// The fields after the name
    #[serde(default)]
    pub fields: Vec<LibraryField>,
}

impl LibraryObject {
    /// Creates a new object with no fields
    pub fn new<S: Into<String>, T: Into<String>>(class: S, name: T) -> Self {
        Self {
            class: class.into(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field at the end of the object
    pub fn push_field<S: Into<String>, T: Into<String>>(&mut self, value: S, comment: T) {
        self.fields.push(LibraryField {
            value: value.into(),
            comment: comment.into(),
        })
    }

    /// Iterates over the values of the fields
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.value.as_str())
    }

    /// Checks whether the object is of a certain class, ignoring case
    pub fn is_class(&self, class: &str) -> bool {
        self.class.eq_ignore_ascii_case(class)
    }

    /// Checks whether the object is named `name`, ignoring case
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Numeric fields between the name and the first layer of a
/// `Construction:InternalSource` (source layer, temperature layer,
/// CTF dimensions, tube spacing)
const INTERNAL_SOURCE_PARAMETERS: usize = 4;

/// Where does an object go within the [`ResourceLibrary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Material,
    WindowMaterial,
    Construction,
    Schedule,
    ScheduleTypeLimits,
}

impl Category {
    fn from_class(class: &str) -> Option<Self> {
        let class = class.to_ascii_lowercase();
        if class.starts_with("windowmaterial") {
            Some(Category::WindowMaterial)
        } else if class.starts_with("material") {
            Some(Category::Material)
        } else if class == "construction" || class.starts_with("construction:") {
            Some(Category::Construction)
        } else if class == "scheduletypelimits" {
            Some(Category::ScheduleTypeLimits)
        } else if class.starts_with("schedule:") {
            Some(Category::Schedule)
        } else {
            None
        }
    }
}

/// The file format of a library
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LibraryFile {
    #[serde(default)]
    materials: Vec<LibraryObject>,
    #[serde(default)]
    window_materials: Vec<LibraryObject>,
    #[serde(default)]
    constructions: Vec<LibraryObject>,
    #[serde(default)]
    schedules: Vec<LibraryObject>,
    #[serde(default)]
    schedule_type_limits: Vec<LibraryObject>,
}

impl From<LibraryFile> for ResourceLibrary {
    fn from(file: LibraryFile) -> Self {
        let mut ret = ResourceLibrary::default();
        for o in file.materials {
            ret.insert(Category::Material, o);
        }
        for o in file.window_materials {
            ret.insert(Category::WindowMaterial, o);
        }
        for o in file.constructions {
            ret.insert(Category::Construction, o);
        }
        for o in file.schedules {
            ret.insert(Category::Schedule, o);
        }
        for o in file.schedule_type_limits {
            ret.insert(Category::ScheduleTypeLimits, o);
        }
        ret
    }
}

/// A read-only collection of the named objects that zones and surfaces
/// reference: materials, window materials, constructions, schedules and
/// schedule type limits.
///
/// Names are matched ignoring case. Adding an object with the name of an
/// existing one (within the same category) replaces the existing one.
///
/// ```
/// use model::ResourceLibrary;
///
/// let lib = ResourceLibrary::from_idf_str("
///     Construction,
///         Brick Wall,   !- Name
///         Brick,        !- Outside Layer
///         Plaster;      !- Layer 2
/// ").unwrap();
///
/// let layers = lib.construction_layers("BRICK WALL").unwrap();
/// assert_eq!(layers, vec!["Brick", "Plaster"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "LibraryFile")]
pub struct ResourceLibrary {
    materials: Vec<LibraryObject>,
    window_materials: Vec<LibraryObject>,
    constructions: Vec<LibraryObject>,
    schedules: Vec<LibraryObject>,
    schedule_type_limits: Vec<LibraryObject>,
}

fn find<'a>(list: &'a [LibraryObject], name: &str) -> Option<&'a LibraryObject> {
    list.iter().find(|o| o.is_named(name))
}

impl ResourceLibrary {
    fn list_mut(&mut self, category: Category) -> &mut Vec<LibraryObject> {
        match category {
            Category::Material => &mut self.materials,
            Category::WindowMaterial => &mut self.window_materials,
            Category::Construction => &mut self.constructions,
            Category::Schedule => &mut self.schedules,
            Category::ScheduleTypeLimits => &mut self.schedule_type_limits,
        }
    }

    fn insert(&mut self, category: Category, object: LibraryObject) {
        let list = self.list_mut(category);
        match list.iter_mut().find(|o| o.is_named(&object.name)) {
            Some(existing) => *existing = object,
            None => list.push(object),
        }
    }

    /// Creates a library containing the schedule type limits that
    /// are commonly referenced (`Fraction`, `On/Off`, `Temperature`,
    /// `Any Number` and `Control Type`) and the [`ALWAYS_ON`] schedule.
    pub fn builtin() -> Self {
        let mut ret = Self::default();

        let limits = [
            ("Fraction", vec!["0", "1", "Continuous"]),
            ("On/Off", vec!["0", "1", "Discrete"]),
            ("Temperature", vec!["-60", "200", "Continuous", "Temperature"]),
            ("Any Number", vec![]),
            ("Control Type", vec!["0", "4", "Discrete"]),
        ];
        let comments = ["Lower Limit Value", "Upper Limit Value", "Numeric Type", "Unit Type"];
        for (name, values) in limits {
            let mut o = LibraryObject::new("ScheduleTypeLimits", name);
            for (v, c) in values.iter().zip(comments.iter()) {
                o.push_field(*v, *c);
            }
            ret.insert(Category::ScheduleTypeLimits, o);
        }

        let mut always_on = LibraryObject::new("Schedule:Compact", ALWAYS_ON);
        always_on.push_field("Fraction", "Schedule Type Limits Name");
        always_on.push_field("Through: 12/31", "Field 1");
        always_on.push_field("For: AllDays", "Field 2");
        always_on.push_field("Until: 24:00", "Field 3");
        always_on.push_field("1", "Field 4");
        ret.insert(Category::Schedule, always_on);

        ret
    }

    /// Adds an object to the library, deciding where it goes based on
    /// its class. Returns `false` (and ignores the object) if the
    /// class is not one of those stored in a library.
    pub fn add(&mut self, object: LibraryObject) -> bool {
        match Category::from_class(&object.class) {
            Some(c) => {
                self.insert(c, object);
                true
            }
            None => false,
        }
    }

    /// Adds all the objects in `other` to this library. Objects in `other`
    /// replace those with the same name in this one.
    pub fn extend(&mut self, other: ResourceLibrary) {
        let categories = [
            (Category::Material, other.materials),
            (Category::WindowMaterial, other.window_materials),
            (Category::Construction, other.constructions),
            (Category::Schedule, other.schedules),
            (Category::ScheduleTypeLimits, other.schedule_type_limits),
        ];
        for (category, list) in categories {
            for o in list {
                self.insert(category, o);
            }
        }
    }

    /// Parses a library from IDF text. Objects that do not belong
    /// in a library (e.g., `Zone`) are ignored.
    pub fn from_idf_str(idf: &str) -> Result<Self, String> {
        let mut scanner = IdfScanner::new(idf.as_bytes(), 1);
        let mut ret = Self::default();
        for o in scanner.parse_objects()? {
            ret.add(o);
        }
        Ok(ret)
    }

    /// Parses a library from JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Parses a library from JSON5
    pub fn from_json5(json: &str) -> Result<Self, String> {
        json5::from_str(json).map_err(|e| e.to_string())
    }

    /// Reads a library from a file. The format is chosen based
    /// on the extension: `.idf`, `.json5` or JSON otherwise.
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let path = filename.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| format!("Could not read library file '{}': {}", path.display(), e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let parsed = match extension.as_deref() {
            Some("idf") => Self::from_idf_str(&src),
            Some("json5") => Self::from_json5(&src),
            _ => Self::from_json(&src),
        };
        parsed.map_err(|e| format!("Could not parse library file '{}': {}", path.display(), e))
    }

    /// Finds a material. Window materials are searched first.
    pub fn material(&self, name: &str) -> Option<&LibraryObject> {
        find(&self.window_materials, name).or_else(|| find(&self.materials, name))
    }

    /// Finds a construction
    pub fn construction(&self, name: &str) -> Option<&LibraryObject> {
        find(&self.constructions, name)
    }

    /// The names of the layers of a construction, from the
    /// outside to the inside.
    ///
    /// Only `Construction` and `Construction:InternalSource` are made
    /// of layers; other classes (e.g., `Construction:FfactorGroundFloor`)
    /// have none.
    pub fn construction_layers(&self, name: &str) -> Option<Vec<&str>> {
        self.construction(name).map(|c| {
            let skip = if c.is_class("Construction") {
                0
            } else if c.is_class("Construction:InternalSource") {
                INTERNAL_SOURCE_PARAMETERS
            } else {
                return Vec::new();
            };
            c.values().skip(skip).filter(|v| !v.is_empty()).collect()
        })
    }

    /// Finds a schedule. Schedule type limits are also searched.
    pub fn schedule(&self, name: &str) -> Option<&LibraryObject> {
        find(&self.schedules, name).or_else(|| find(&self.schedule_type_limits, name))
    }

    /// All the schedule type limits in the library
    pub fn schedule_type_limits(&self) -> &[LibraryObject] {
        &self.schedule_type_limits
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_builtin() {
        let lib = ResourceLibrary::builtin();
        assert_eq!(lib.schedule_type_limits().len(), 5);
        let always_on = lib.schedule("always on").unwrap();
        assert!(always_on.is_class("SCHEDULE:COMPACT"));
        assert_eq!(always_on.fields.len(), 5);
        // Type limits are also schedules
        assert!(lib.schedule("fraction").is_some());
        assert!(lib.construction("Exterior Wall").is_none());
    }

    #[test]
    fn test_from_json() -> Result<(), String> {
        let lib = ResourceLibrary::from_json5(
            "{
            materials: [
                {class: 'Material:NoMass', name: 'Insulation', fields: [{value: 'Rough'}, {value: '2.5', comment: 'Thermal Resistance'}]},
                {class: 'Material:NoMass', name: 'INSULATION', fields: [{value: 'Smooth'}]},
            ],
            window_materials: [
                {class: 'WindowMaterial:SimpleGlazingSystem', name: 'Glass', fields: [{value: '2.7'}, {value: '0.6'}]},
            ],
        }",
        )?;
        // Replaced
        let ins = lib.material("Insulation").ok_or("no insulation")?;
        assert_eq!(ins.name, "INSULATION");
        assert_eq!(ins.fields.len(), 1);
        assert!(lib.material("glass").is_some());
        assert!(lib.material("brick").is_none());

        assert!(ResourceLibrary::from_json5("{bricks: []}").is_err());
        Ok(())
    }

    #[test]
    fn test_from_idf_and_extend() -> Result<(), String> {
        let mut lib = ResourceLibrary::builtin();
        let other = ResourceLibrary::from_idf_str(
            "
            Zone, Ignored, 0, 0, 0, 0, 1;
            Material, Brick, Rough, 0.1, 0.9, 1920, 790;
            Construction, Brick Wall, Brick;
            Schedule:Compact, ALWAYS ON, Fraction, Through: 12/31, For: AllDays, Until: 24:00, 0.5;
            ScheduleTypeLimits, Fraction, 0, 1, Continuous;
        ",
        )?;
        lib.extend(other);
        assert_eq!(lib.construction_layers("brick wall"), Some(vec!["Brick"]));
        assert_eq!(lib.material("BRICK").map(|m| m.fields.len()), Some(5));
        let always_on = lib.schedule(ALWAYS_ON).ok_or("no always on")?;
        assert_eq!(always_on.fields[4].value, "0.5");
        assert_eq!(lib.schedule_type_limits().len(), 5);
        assert!(lib.schedule("Ignored").is_none());
        Ok(())
    }

    #[test]
    fn test_construction_layers() -> Result<(), String> {
        let lib = ResourceLibrary::from_idf_str(
            "Construction, Brick Wall, Brick, Plaster;
            Construction:FfactorGroundFloor, Slab, 1.26, 10.0, 5.0, 12.0;
            Construction:CfactorUndergroundWall, Basement, 0.5, 2.0;
            Construction:InternalSource, Radiant Floor, 2, 2, 1, 0.15, Concrete, Screed, Tiles;",
        )?;
        assert_eq!(lib.construction_layers("brick wall"), Some(vec!["Brick", "Plaster"]));
        assert_eq!(lib.construction_layers("Slab"), Some(vec![]));
        assert_eq!(lib.construction_layers("Basement"), Some(vec![]));
        assert_eq!(
            lib.construction_layers("Radiant Floor"),
            Some(vec!["Concrete", "Screed", "Tiles"])
        );
        assert_eq!(lib.construction_layers("Nowhere"), None);
        Ok(())
    }

    #[test]
    fn test_from_file() -> Result<(), String> {
        let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
        let path = dir.path().join("lib.idf");
        std::fs::write(&path, "Construction, Wall, Brick, Plaster;").map_err(|e| e.to_string())?;
        let lib = ResourceLibrary::from_file(&path)?;
        assert!(lib.construction("wall").is_some());

        let path = dir.path().join("lib.json");
        std::fs::write(&path, r#"{"constructions": [{"class": "Construction", "name": "Roof", "fields": []}]}"#)
            .map_err(|e| e.to_string())?;
        let lib = ResourceLibrary::from_file(&path)?;
        assert!(lib.construction("ROOF").is_some());

        assert!(ResourceLibrary::from_file(dir.path().join("nope.idf")).is_err());
        Ok(())
    }
}
