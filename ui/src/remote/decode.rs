//! Structural validation of fetched JSON.
//!
//! Each item shape implements [`Decode`] by hand over a `serde_json::Value`.
//! Unknown fields are ignored. Arrays decode all-or-nothing: one bad element
//! rejects the whole payload, and the error lists every offending field.

use serde_json::{Map, Value};

use crate::error::DecodeError;

pub trait Decode: Sized {
    fn decode(value: &Value, path: &str) -> Result<Self, DecodeError>;
}

pub fn decode_array<T: Decode>(value: &Value) -> Result<Vec<T>, DecodeError> {
    let Some(items) = value.as_array() else {
        return Err(DecodeError::single("", "array", describe(value)));
    };

    let mut out = Vec::with_capacity(items.len());
    let mut failed: Option<DecodeError> = None;

    for (i, item) in items.iter().enumerate() {
        match T::decode(item, &format!("[{i}]")) {
            Ok(v) => out.push(v),
            Err(e) => match failed.as_mut() {
                Some(acc) => acc.merge(e),
                None => failed = Some(e),
            },
        }
    }

    match failed {
        Some(e) => Err(e),
        None => Ok(out),
    }
}

/// Field access on one JSON object, collecting issues instead of stopping at the first.
pub struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: &'a str,
    issues: Option<DecodeError>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value, path: &'a str) -> Result<Self, DecodeError> {
        match value.as_object() {
            Some(fields) => Ok(Self {
                fields,
                path,
                issues: None,
            }),
            None => Err(DecodeError::single(path, "object", describe(value))),
        }
    }

    pub fn string(&mut self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            other => {
                self.fail(key, "string", other);
                String::new()
            }
        }
    }

    pub fn optional_string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            other => {
                self.fail(key, "string | undefined", other);
                None
            }
        }
    }

    /// Hands back `value` only if every field read so far matched.
    pub fn finish<T>(self, value: T) -> Result<T, DecodeError> {
        match self.issues {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }

    fn fail(&mut self, key: &str, expected: &'static str, found: Option<&Value>) {
        let err = DecodeError::single(
            format!("{}.{key}", self.path),
            expected,
            found.map_or_else(|| "undefined".to_owned(), describe),
        );
        match self.issues.as_mut() {
            Some(acc) => acc.merge(err),
            None => self.issues = Some(err),
        }
    }
}

fn describe(value: &Value) -> String {
    value.to_string()
}
