//! Data-attribute options
//!
//! Components read their options from `data-*` attributes. Attribute names
//! are camel-cased into data keys (`data-carousel-interval` becomes
//! `carouselInterval`), values are coerced the way scripts expect, and every
//! key carrying a component prefix is moved into that component's options.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Result;

/// Data store of one element: data key to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementData {
    entries: BTreeMap<String, Value>,
}

impl ElementData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store from raw `(name, value)` attribute pairs; names that
    /// are not `data-*` attributes are skipped
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = attributes
            .into_iter()
            .filter_map(|(name, raw)| data_key(name).map(|key| (key, parse_data_value(raw))))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Data key for a `data-*` attribute name, `None` for other attributes
pub fn data_key(attribute: &str) -> Option<String> {
    let rest = attribute.strip_prefix("data-")?;
    if rest.is_empty() {
        return None;
    }

    let mut key = String::with_capacity(rest.len());
    let mut upper = false;
    for c in rest.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            key.extend(c.to_uppercase());
            upper = false;
        } else {
            key.push(c.to_ascii_lowercase());
        }
    }
    Some(key)
}

/// Coerce a raw attribute value: booleans, `null`, numbers and JSON
/// objects/arrays are parsed, everything else stays a string
pub fn parse_data_value(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    // Only numbers that survive a round trip, so "007" stays a string
    if let Ok(number) = raw.parse::<f64>() {
        if number.is_finite() && number.to_string() == raw {
            if let Some(number) = serde_json::Number::from_f64(number) {
                return match raw.parse::<i64>() {
                    Ok(int) => Value::from(int),
                    Err(_) => Value::Number(number),
                };
            }
        }
    }

    if raw.starts_with('{') || raw.starts_with('[') {
        if let Ok(value) = serde_json::from_str(raw) {
            return value;
        }
    }

    Value::String(raw.to_string())
}

/// Move every `prefixXxx` entry of `data` into `options` as `xxx`
///
/// The resulting options are also stored back on the element under
/// `namespace.prefixOptions` (or `prefixOptions` without a namespace).
pub fn build_data_options<'o>(
    data: &mut ElementData,
    options: &'o mut Map<String, Value>,
    prefix: &str,
    namespace: Option<&str>,
) -> &'o mut Map<String, Value> {
    let matching: Vec<String> = data
        .keys()
        .filter(|key| key.len() > prefix.len() && key.starts_with(prefix))
        .map(str::to_string)
        .collect();

    for key in matching {
        let rest = &key[prefix.len()..];
        let mut chars = rest.chars();
        let option_key = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
            None => continue,
        };

        if let Some(value) = data.remove(&key) {
            options.insert(option_key, value);
        }
    }

    let store_key = match namespace.filter(|ns| !ns.is_empty()) {
        Some(ns) => format!("{ns}.{prefix}Options"),
        None => format!("{prefix}Options"),
    };
    data.insert(store_key, Value::Object(options.clone()));

    options
}

/// Build the options for `prefix` and deserialize them into `T`
///
/// Fields missing from the data attributes fall back to `defaults`.
pub fn build_typed_options<T>(
    data: &mut ElementData,
    defaults: &T,
    prefix: &str,
    namespace: Option<&str>,
) -> Result<T>
where
    T: serde::Serialize + DeserializeOwned,
{
    let mut options = match serde_json::to_value(defaults)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    build_data_options(data, &mut options, prefix, namespace);
    Ok(serde_json::from_value(Value::Object(options))?)
}
