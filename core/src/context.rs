// ramus/src/context.rs

//! The run-scoped parameter snapshot conditions are evaluated against.
//!
//! The snapshot is populated by the surrounding execution runtime before a
//! resolution is invoked and is read-only for the lifetime of that call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One parameter value in the run snapshot.
///
/// Deserializes untagged, so a runtime's prepared-parameter JSON maps
/// directly: `true` → `Bool`, `42` → `Integer`, `0.5` → `Float`, anything
/// quoted → `String`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
  Bool(bool),
  Integer(i64),
  Float(f64),
  String(String),
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamValue::Bool(v) => write!(f, "{}", v),
      ParamValue::Integer(v) => write!(f, "{}", v),
      ParamValue::Float(v) => write!(f, "{}", v),
      ParamValue::String(v) => write!(f, "{}", v),
    }
  }
}

impl From<bool> for ParamValue {
  fn from(v: bool) -> Self {
    ParamValue::Bool(v)
  }
}

impl From<i64> for ParamValue {
  fn from(v: i64) -> Self {
    ParamValue::Integer(v)
  }
}

impl From<f64> for ParamValue {
  fn from(v: f64) -> Self {
    ParamValue::Float(v)
  }
}

impl From<&str> for ParamValue {
  fn from(v: &str) -> Self {
    ParamValue::String(v.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(v: String) -> Self {
    ParamValue::String(v)
  }
}

/// Immutable name→value snapshot, valid for the lifetime of one resolution
/// call.
///
/// Owned and supplied by the caller; the resolver never mutates it. The
/// snapshot is exclusively owned by the single task execution that supplied
/// it, so no locking is required around reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterContext {
  params: HashMap<String, ParamValue>,
}

impl ParameterContext {
  /// A snapshot with no parameters.
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<&ParamValue> {
    self.params.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.params.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.params.len()
  }

  pub fn is_empty(&self) -> bool {
    self.params.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
    self.params.iter().map(|(name, value)| (name.as_str(), value))
  }
}

impl<N, V> FromIterator<(N, V)> for ParameterContext
where
  N: Into<String>,
  V: Into<ParamValue>,
{
  fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
    ParameterContext {
      params: iter
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect(),
    }
  }
}

impl From<HashMap<String, ParamValue>> for ParameterContext {
  fn from(params: HashMap<String, ParamValue>) -> Self {
    ParameterContext { params }
  }
}
