use std::{fmt::Display, time::SystemTime};

use jiff::{
    Span, Timestamp, Zoned,
    civil::{Date, DateTime, Time},
};
use juniper::{InputValue, ScalarValue};

use crate::kind::{Kind, Temporal};

/// A value of any of the temporal kinds.
#[derive(Clone, Debug)]
pub enum TemporalValue {
    Duration(Span),
    Instant(Timestamp),
    PlainDate(Date),
    PlainTime(Time),
    PlainDateTime(DateTime),
    ZonedDateTime(Zoned),
}

impl TemporalValue {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Duration(_) => Kind::Duration,
            Self::Instant(_) => Kind::Instant,
            Self::PlainDate(_) => Kind::PlainDate,
            Self::PlainTime(_) => Kind::PlainTime,
            Self::PlainDateTime(_) => Kind::PlainDateTime,
            Self::ZonedDateTime(_) => Kind::ZonedDateTime,
        }
    }
}

/// Formats the canonical string of the contained value.
impl Display for TemporalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duration(span) => write!(f, "{span}"),
            Self::Instant(timestamp) => write!(f, "{timestamp}"),
            Self::PlainDate(date) => write!(f, "{date}"),
            Self::PlainTime(time) => write!(f, "{time}"),
            Self::PlainDateTime(datetime) => write!(f, "{datetime}"),
            Self::ZonedDateTime(zoned) => write!(f, "{zoned}"),
        }
    }
}

/// A value arriving at the schema boundary whose kind has not been checked yet.
#[derive(Clone, Debug)]
pub enum BoundaryValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    /// An unresolved variable reference.
    Variable(String),
    List(Vec<BoundaryValue>),
    Object(Vec<(String, BoundaryValue)>),
    /// A host scalar with no portable representation, in display form.
    Other(String),
    Temporal(TemporalValue),
    /// A point in time from outside the temporal family.
    SystemTime(SystemTime),
}

impl BoundaryValue {
    /// Short name of the value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Enum(_) => "enum",
            Self::Variable(_) => "variable",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Other(_) => "scalar",
            Self::Temporal(value) => value.kind().name(),
            Self::SystemTime(_) => "SystemTime",
        }
    }

    fn from_scalar<S: ScalarValue>(scalar: &S) -> Self {
        if let Some(string) = scalar.as_str() {
            Self::String(string.to_owned())
        } else if let Some(int) = scalar.as_int() {
            Self::Int(int.into())
        } else if let Some(boolean) = scalar.as_bool() {
            Self::Boolean(boolean)
        } else if let Some(float) = scalar.as_float() {
            Self::Float(float)
        } else {
            Self::Other(scalar.to_string())
        }
    }
}

impl<S: ScalarValue> From<&InputValue<S>> for BoundaryValue {
    fn from(input: &InputValue<S>) -> Self {
        match input {
            InputValue::Null => Self::Null,
            InputValue::Scalar(scalar) => Self::from_scalar(scalar),
            InputValue::Enum(name) => Self::Enum(name.clone()),
            InputValue::Variable(name) => Self::Variable(name.clone()),
            InputValue::List(items) => {
                Self::List(items.iter().map(|item| Self::from(&item.item)).collect())
            }
            InputValue::Object(fields) => Self::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.item.clone(), Self::from(&value.item)))
                    .collect(),
            ),
        }
    }
}

/// Shape of a host input node, for diagnostics.
pub(crate) fn input_shape<S: ScalarValue>(input: &InputValue<S>) -> &'static str {
    match input {
        InputValue::Null => "null",
        InputValue::Scalar(scalar) => BoundaryValue::from_scalar(scalar).shape(),
        InputValue::Enum(_) => "enum",
        InputValue::Variable(_) => "variable",
        InputValue::List(_) => "list",
        InputValue::Object(_) => "object",
    }
}

impl From<TemporalValue> for BoundaryValue {
    fn from(value: TemporalValue) -> Self {
        Self::Temporal(value)
    }
}

impl From<&str> for BoundaryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for BoundaryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for BoundaryValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for BoundaryValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for BoundaryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for BoundaryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<SystemTime> for BoundaryValue {
    fn from(value: SystemTime) -> Self {
        Self::SystemTime(value)
    }
}

macro_rules! from_temporal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TemporalValue {
                fn from(value: $ty) -> Self {
                    value.into_temporal_value()
                }
            }

            impl From<$ty> for BoundaryValue {
                fn from(value: $ty) -> Self {
                    Self::Temporal(value.into_temporal_value())
                }
            }
        )*
    };
}

from_temporal!(Span, Timestamp, Date, Time, DateTime, Zoned);
