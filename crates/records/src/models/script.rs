use super::FormKey;
use serde::{Deserialize, Serialize};

/// A script attached to a record, along with the values its properties are
/// filled in with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ScriptProperty>,
}
impl ScriptEntry {
    /// Properties with the given name, in record order.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ScriptProperty> + 'a {
        self.properties.iter().filter(move |p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptProperty {
    pub name: String,
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// The typed value of a script property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Reference to any record; which kind is only known once resolved.
    Object { object: FormKey },
    Int { value: i32 },
    Float { value: f32 },
    Bool { value: bool },
    String { value: String },
    ObjectList { objects: Vec<FormKey> },
    /// Property types this tool never reads (structs, arrays of primitives).
    #[serde(other)]
    Unknown,
}
impl PropertyValue {
    pub fn as_object(&self) -> Option<&FormKey> {
        match self {
            Self::Object { object } => Some(object),
            _ => None,
        }
    }
}
