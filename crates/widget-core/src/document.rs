//! The configuration document a widget instance resolves

use crate::{Error, Result};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Configuration keys recognized by the engine.
///
/// Any other key passes through untouched.
pub mod keys {
    /// Reference to an external configuration file
    pub const CONFIG_FILE_URI: &str = "conf_uri";
    /// Identity of the input element, `<TypeName>:<FieldName>`
    pub const NAME: &str = "name";
    /// Two-letter content locale
    pub const LOCALE: &str = "locale";
    /// File reference inside a template object
    pub const TEMPLATE_URI: &str = "uri";
}

/// An ordered JSON object holding a widget's configuration.
///
/// Keys keep their insertion order and overwriting a key keeps its
/// position, so the serialized output follows the order the author wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    entries: Map<String, Value>,
}

impl ConfigDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text. The root must be a JSON object.
    pub fn parse(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(Error::ConfigParse {
                message: format!("expected an object, found {}", type_name(&other)),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The value under `key` if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite a key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Compact JSON text, as handed to client-side code.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

impl FromStr for ConfigDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Map<String, Value>> for ConfigDocument {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<ConfigDocument> for Value {
    fn from(doc: ConfigDocument) -> Self {
        Value::Object(doc.entries)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
