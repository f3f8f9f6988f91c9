//! Data point model.
//!
//! A [`DataPoint`] is one recorded observation: a name, a kind tag, the
//! recorded value rendered to text, and the timestamp taken while the
//! recording call was executing. Data points are immutable once built;
//! they are owned by the collector's queue until handed to an emitter.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind tag carried by every data point.
///
/// `Increment` and `Event` points have an empty value; the value kinds
/// carry the textual rendering of what was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A text value.
    String,
    /// An integer value, rendered as canonical decimal.
    Integer,
    /// A floating-point value, rendered as shortest round-trip decimal.
    Float,
    /// A counter increment (no value).
    Increment,
    /// A point-in-time event (no value).
    Event,
}

impl Kind {
    /// Canonical text tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Increment => "increment",
            Kind::Event => "event",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recordable value: one closed variant type instead of one entry point
/// per payload type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text payload. Must be non-empty when recorded.
    Text(String),
    /// Integer payload.
    Integer(i64),
    /// Floating-point payload.
    Float(f64),
}

impl Value {
    /// Kind tag for this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
        }
    }

    /// Render the value to its canonical text form.
    ///
    /// Integers render as plain decimal. Floats use Rust's `Display`,
    /// which produces the shortest decimal string that round-trips to the
    /// same value (`3.5` renders as `"3.5"`, never `"3.50000..."`). This
    /// is the one rendering rule for all emitters.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

/// One recorded observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    name: String,
    value: String,
    kind: Kind,
    recorded_at: DateTime<Utc>,
}

impl DataPoint {
    /// Build a data point, stamping it with the current time.
    ///
    /// Callers validate `name` before constructing; this is the one place
    /// a timestamp is assigned.
    pub(crate) fn record(name: &str, value: String, kind: Kind) -> Self {
        Self {
            name: name.to_string(),
            value,
            kind,
            recorded_at: Utc::now(),
        }
    }

    /// Data point name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered value. Empty for `increment` and `event` points.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Kind tag.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Timestamp assigned when the point was recorded.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags() {
        assert_eq!(Kind::String.as_str(), "string");
        assert_eq!(Kind::Integer.as_str(), "integer");
        assert_eq!(Kind::Float.as_str(), "float");
        assert_eq!(Kind::Increment.as_str(), "increment");
        assert_eq!(Kind::Event.as_str(), "event");
    }

    #[test]
    fn value_rendering() {
        assert_eq!(Value::from(42).render(), "42");
        assert_eq!(Value::from(-7i64).render(), "-7");
        assert_eq!(Value::from(3.5f32).render(), "3.5");
        assert_eq!(Value::from(3.5f64).render(), "3.5");
        assert_eq!(Value::from("hello").render(), "hello");
    }

    #[test]
    fn value_kinds() {
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(1).kind(), Kind::Integer);
        assert_eq!(Value::from(1.0).kind(), Kind::Float);
    }

    #[test]
    fn data_point_timestamp_in_call_window() {
        let before = Utc::now();
        let point = DataPoint::record("latency", "42".to_string(), Kind::Integer);
        let after = Utc::now();

        assert!(point.recorded_at() >= before);
        assert!(point.recorded_at() <= after);
    }

    #[test]
    fn data_point_serializes_kind_tag() {
        let point = DataPoint::record("latency", "42".to_string(), Kind::Integer);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["name"], "latency");
        assert_eq!(json["value"], "42");
        assert_eq!(json["kind"], "integer");
    }
}
