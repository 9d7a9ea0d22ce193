use super::Adapter;
use crate::{
    stmt::{Point, Type, Value},
    Error, Result,
};

use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolAdapter;

impl Adapter for BoolAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Bool(_) => Ok(value),
            ref v => match v.as_i64() {
                Some(0) => Ok(Value::Bool(false)),
                Some(1) => Ok(Value::Bool(true)),
                _ => Err(Error::type_conversion(value, "bool")),
            },
        }
    }
}

/// Integer adapter for one width.
///
/// Stores often return a wider integer than the field holds (SQLite always
/// returns 64-bit integers); decoding narrows with a range check.
#[derive(Debug, Clone, Copy)]
pub struct IntAdapter {
    ty: Type,
}

impl IntAdapter {
    pub fn new(ty: Type) -> Self {
        assert!(ty.is_integer(), "not an integer type: {ty:?}");
        Self { ty }
    }
}

impl Adapter for IntAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        let Some(wide) = value.as_i64() else {
            return Err(Error::type_conversion(value, int_name(self.ty)));
        };

        let narrowed = match self.ty {
            Type::I16 => i16::try_from(wide).ok().map(Value::I16),
            Type::I32 => i32::try_from(wide).ok().map(Value::I32),
            _ => Some(Value::I64(wide)),
        };

        narrowed.ok_or_else(|| Error::type_conversion(value, int_name(self.ty)))
    }
}

fn int_name(ty: Type) -> &'static str {
    match ty {
        Type::I16 => "i16",
        Type::I32 => "i32",
        _ => "i64",
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatAdapter;

impl Adapter for FloatAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::F64(_) => Ok(value),
            ref v => match v.as_i64() {
                Some(int) => Ok(Value::F64(int as f64)),
                None => Err(Error::type_conversion(value, "f64")),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextAdapter;

impl Adapter for TextAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::String(_) => Ok(value),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BytesAdapter;

impl Adapter for BytesAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Bytes(_) => Ok(value),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

/// Accepts native identifiers, their hyphenated text form, or 16-byte blobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAdapter;

impl Adapter for UuidAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Uuid(_) => Ok(value),
            Value::String(ref text) => Ok(Value::Uuid(text.parse::<Uuid>()?)),
            Value::Bytes(ref bytes) if bytes.len() == 16 => {
                Ok(Value::Uuid(Uuid::from_slice(bytes)?))
            }
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

/// Accepts native timestamps or text.
///
/// Text is read as RFC 3339 first, then as `YYYY-MM-DD HH:MM:SS[.f]` in UTC,
/// the form SQLite's date functions produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampAdapter;

impl Adapter for TimestampAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Timestamp(_) => Ok(value),
            Value::String(ref text) => {
                if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
                    return Ok(Value::Timestamp(ts.with_timezone(&Utc)));
                }
                let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")?;
                Ok(Value::Timestamp(naive.and_utc()))
            }
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

/// Geometry point adapter.
///
/// Native points pass through unchanged. Text must parse as `(x,y)`; any other
/// value is reported as a conversion error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointAdapter;

impl Adapter for PointAdapter {
    fn encode(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Point(_) => Ok(value),
            Value::String(ref text) => match text.parse::<Point>() {
                Ok(point) => Ok(Value::Point(point)),
                Err(_) => Err(Error::type_conversion(value, "Point")),
            },
            value => Err(Error::type_conversion(value, "Point")),
        }
    }
}
