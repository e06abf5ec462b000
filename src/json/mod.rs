//! JSON serializer configuration
//!
//! `JsonOptions` is constructed explicitly and handed to a [`crate::JsonClient`];
//! there is no process-wide default serializer. The same options drive both
//! directions: [`JsonOptions::to_value`] writes a payload and
//! [`JsonOptions::from_slice`] reads it back into an equal value.
//!
//! Policies apply to struct (and struct-variant) field names only. Map keys,
//! map values and sequence elements are written and read untouched, as are
//! members of a `#[serde(flatten)]` struct, since serde hands those over as map
//! entries.

mod read;
mod write;

use crate::error::{ClientError, Result};
use read::ValueReader;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use write::ValueWriter;

/// Naming applied to struct field names of a serialized payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Field names are written exactly as serde declares them
    #[default]
    AsIs,
    /// `max_tokens` is written as `maxTokens`
    CamelCase,
    /// `maxTokens` is written as `max_tokens`
    SnakeCase,
}

/// Which struct fields are omitted from a serialized payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreCondition {
    /// Write every field
    Never,
    /// Omit fields whose value is `null`
    #[default]
    WhenNull,
    /// Omit `null`, `false` and numeric zero fields.
    ///
    /// `Some(false)` and `Some(0)` are kept: the default of an optional field
    /// is `None`. When reading, a missing field decodes as its zero value.
    WhenDefault,
}

/// Serializer configuration for request bodies and typed responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOptions {
    #[serde(default)]
    pub naming: NamingPolicy,
    #[serde(default)]
    pub ignore: IgnoreCondition,
}

impl JsonOptions {
    pub fn new(naming: NamingPolicy, ignore: IgnoreCondition) -> Self {
        Self { naming, ignore }
    }

    /// Options that drop default-valued fields (`null`, `false`, `0`).
    pub fn ignore_defaults() -> Self {
        Self {
            naming: NamingPolicy::AsIs,
            ignore: IgnoreCondition::WhenDefault,
        }
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreCondition) -> Self {
        self.ignore = ignore;
        self
    }

    /// Serialize `value` into a JSON tree with the configured policies applied.
    ///
    /// A `serde_json::Value` argument is a map as far as serde is concerned and
    /// is therefore written verbatim.
    pub fn to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
        value
            .serialize(ValueWriter::new(self))
            .map_err(ClientError::Serialize)
    }

    /// Serialize `value` to UTF-8 JSON bytes.
    pub fn to_vec<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let value = self.to_value(value)?;
        serde_json::to_vec(&value).map_err(ClientError::Serialize)
    }

    /// Decode a JSON tree written with these options.
    pub fn from_value<T: DeserializeOwned>(&self, value: Value) -> serde_json::Result<T> {
        T::deserialize(ValueReader::new(value, self))
    }

    /// Decode JSON bytes written with these options.
    ///
    /// Fails on malformed or empty input, like `serde_json::from_slice`.
    pub fn from_slice<T: DeserializeOwned>(&self, bytes: &[u8]) -> serde_json::Result<T> {
        self.from_value(serde_json::from_slice(bytes)?)
    }

    fn omits(&self, value: &Value, optional: bool) -> bool {
        match self.ignore {
            IgnoreCondition::Never => false,
            IgnoreCondition::WhenNull => value.is_null(),
            IgnoreCondition::WhenDefault => match value {
                Value::Null => true,
                _ if optional => false,
                Value::Bool(b) => !b,
                Value::Number(n) => n.as_f64() == Some(0.0),
                _ => false,
            },
        }
    }

    fn rename(&self, field: &str) -> String {
        match self.naming {
            NamingPolicy::AsIs => field.to_string(),
            NamingPolicy::CamelCase => to_camel_case(field),
            NamingPolicy::SnakeCase => to_snake_case(field),
        }
    }
}

fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' && i > 0 {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else if i == 0 {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
