//! Body Measurements
//!
//! Caller-owned set of body dimensions in centimeters. A set may be partial;
//! the engine only ever reads from it.
//!
//! Values are stored as supplied. Validation happens on read: `get` only
//! returns finite, strictly positive numbers, so a bad value behaves exactly
//! like a missing one and never affects the other keys.

use crate::types::MeasurementKey;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Measurements {
    values: FxHashMap<MeasurementKey, f64>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used while assembling a set
    pub fn with(mut self, key: MeasurementKey, value: f64) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MeasurementKey, f64)>,
    {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    /// Build from a JSON object such as `{"chest": 100, "waist": "85"}`.
    ///
    /// Numbers and numeric strings are accepted. Unknown keys are skipped and
    /// non-numeric values are dropped with a warning. Anything that is not an
    /// object yields an empty set.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::warn!("Measurement payload is not an object; treating as empty");
            return Self::default();
        };

        let mut values = FxHashMap::default();
        for (name, raw) in object {
            let Some(key) = MeasurementKey::parse(name) else {
                tracing::debug!("Ignoring unknown measurement key '{}'", name);
                continue;
            };

            let parsed = match raw {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };

            match parsed {
                Some(v) => {
                    values.insert(key, v);
                }
                None => {
                    tracing::warn!("Ignoring non-numeric value for measurement '{}': {}", key, raw);
                }
            }
        }

        Self { values }
    }

    /// Valid value for `key`: present, finite and > 0
    pub fn get(&self, key: MeasurementKey) -> Option<f64> {
        self.values
            .get(&key)
            .copied()
            .filter(|v| is_valid_measurement(*v))
    }

    /// Value as supplied, valid or not
    pub fn raw(&self, key: MeasurementKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Whether `key` was supplied but rejected by validation
    pub fn is_invalid(&self, key: MeasurementKey) -> bool {
        matches!(self.raw(key), Some(v) if !is_valid_measurement(v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

fn is_valid_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Format a centimeter value for display exactly as supplied; whole numbers
/// print without a decimal point.
pub fn format_cm(value: f64) -> String {
    format!("{}", value)
}
