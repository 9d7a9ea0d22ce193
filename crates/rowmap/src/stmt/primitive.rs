use crate::{Error, Result};

use rowmap_core::stmt::{Point, Type, Value};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A Rust type that can be stored in a single column.
pub trait Primitive: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_integer {
    ( $( $t:ty => $variant:ident ),+ $(,)? ) => {
        $(
            impl Primitive for $t {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => value
                            .as_i64()
                            .and_then(|v| <$t>::try_from(v).ok())
                            .ok_or_else(|| Error::type_conversion(value, stringify!($t))),
                    }
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }
        )+
    };
}

impl_integer!(i16 => I16, i32 => I32, i64 => I64);

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for f64 {
    const TYPE: Type = Type::F64;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn load(value: Value) -> Result<Self> {
        value.to_string()
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn load(value: Value) -> Result<Self> {
        value.to_bytes()
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Primitive for Uuid {
    const TYPE: Type = Type::Uuid;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl Primitive for DateTime<Utc> {
    const TYPE: Type = Type::Timestamp;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl Primitive for Point {
    const TYPE: Type = Type::Point;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Point(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Point")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Point(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if matches!(value, Value::Null) {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
