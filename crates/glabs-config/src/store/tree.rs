//! In-memory store backed by a JSON value tree
//!
//! TOML, YAML and JSON documents are all parsed into the same
//! `serde_json::Value` representation so lookups behave identically no matter
//! which format the course file was written in.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{Format, HierarchicalStore};
use crate::{Error, Result};

/// A [`HierarchicalStore`] over an in-memory table tree.
///
/// Path segments are matched ASCII case-insensitively, so `containerRegistry`
/// and `containerregistry` name the same key. Map keys handed back by the
/// `get_string_map_*` getters keep the spelling used in the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeStore {
    root: Map<String, Value>,
}

impl TreeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already parsed document. The top level must be a table.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            // An empty YAML document parses to null
            Value::Null => Ok(Self::new()),
            other => Err(Error::StoreParse {
                format: "document".into(),
                message: format!("top level must be a table, found {}", type_name(&other)),
            }),
        }
    }

    /// Parse a configuration document in the given format.
    ///
    /// # Example
    ///
    /// ```
    /// use glabs_config::store::{Format, HierarchicalStore, TreeStore};
    ///
    /// let store = TreeStore::parse("cs1:\n  coursepath: repo\n", Format::Yaml).unwrap();
    /// assert_eq!(store.get_string("cs1.coursepath"), "repo");
    /// ```
    pub fn parse(content: &str, format: Format) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let parse_error = |message: String| Error::StoreParse {
            format: format.to_string(),
            message,
        };

        let value: Value = match format {
            Format::Toml => {
                let mut value: Value =
                    toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
                flatten_toml_datetimes(&mut value);
                value
            }
            Format::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            Format::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        Self::from_value(value).map_err(|e| match e {
            Error::StoreParse { message, .. } => parse_error(message),
            other => other,
        })
    }

    /// Insert `value` at a dotted `path`, creating intermediate tables.
    ///
    /// A scalar sitting where a table is needed is replaced by an empty table.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let value = value.into();
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut table = &mut self.root;
        for segment in parents {
            let key = existing_key(table, segment);
            let entry = table
                .entry(key)
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(next) = entry else {
                return;
            };
            table = next;
        }

        let key = existing_key(table, last);
        table.insert(key, value);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = find_key(&self.root, segments.next()?)?;
        for segment in segments {
            current = find_key(current.as_object()?, segment)?;
        }
        (!current.is_null()).then_some(current)
    }
}

impl HierarchicalStore for TreeStore {
    fn is_set(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn get_string(&self, path: &str) -> String {
        self.lookup(path)
            .and_then(scalar_to_string)
            .unwrap_or_default()
    }

    fn get_bool(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(to_bool)
    }

    fn get_string_slice(&self, path: &str) -> Vec<String> {
        self.lookup(path).map(to_string_slice).unwrap_or_default()
    }

    fn get_string_map_string(&self, path: &str) -> BTreeMap<String, String> {
        let Some(Value::Object(table)) = self.lookup(path) else {
            return BTreeMap::new();
        };
        table
            .iter()
            .map(|(key, value)| (key.clone(), scalar_to_string(value).unwrap_or_default()))
            .collect()
    }

    fn get_string_map_string_slice(&self, path: &str) -> BTreeMap<String, Vec<String>> {
        let Some(Value::Object(table)) = self.lookup(path) else {
            return BTreeMap::new();
        };
        table
            .iter()
            .map(|(key, value)| {
                let items = match value {
                    Value::Array(_) => to_string_slice(value),
                    scalar => scalar_to_string(scalar).into_iter().collect(),
                };
                (key.clone(), items)
            })
            .collect()
    }
}

/// Key under which the `toml` crate hands datetimes to foreign deserializers.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Replace every `{ "$__toml_private_datetime": "..." }` table with its string.
fn flatten_toml_datetimes(value: &mut Value) {
    let datetime = match &*value {
        Value::Object(table) if table.len() == 1 => table
            .get(TOML_DATETIME_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    };
    if let Some(datetime) = datetime {
        *value = Value::String(datetime);
        return;
    }

    match value {
        Value::Object(table) => table.values_mut().for_each(flatten_toml_datetimes),
        Value::Array(items) => items.iter_mut().for_each(flatten_toml_datetimes),
        _ => {}
    }
}

fn find_key<'a>(table: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    table.get(key).or_else(|| {
        table
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

/// The spelling already used in `table` for `key`, or `key` itself.
fn existing_key(table: &Map<String, Value>, key: &str) -> String {
    table
        .keys()
        .find(|candidate| candidate.eq_ignore_ascii_case(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.as_str(), "1" | "t" | "T" | "TRUE" | "true" | "True"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

fn to_string_slice(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::String(s) => s.split_whitespace().map(str::to_owned).collect(),
        _ => Vec::new(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
