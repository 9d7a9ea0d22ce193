/// Value kinds understood by the adapter registry and the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// The type of `Value::Null`
    Null,

    Bool,
    I16,
    I32,
    I64,
    F64,
    String,
    Bytes,

    /// Unique identifier
    Uuid,

    /// Date/time, always UTC
    Timestamp,

    /// Two-dimensional geometry point
    Point,
}

impl Type {
    pub const fn is_integer(self) -> bool {
        matches!(self, Type::I16 | Type::I32 | Type::I64)
    }

    /// Every type a built-in adapter exists for.
    pub const ALL: [Type; 10] = [
        Type::Bool,
        Type::I16,
        Type::I32,
        Type::I64,
        Type::F64,
        Type::String,
        Type::Bytes,
        Type::Uuid,
        Type::Timestamp,
        Type::Point,
    ];
}
