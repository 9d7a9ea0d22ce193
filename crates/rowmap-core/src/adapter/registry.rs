use super::{
    Adapter, BoolAdapter, BytesAdapter, FloatAdapter, IntAdapter, Optional, PointAdapter,
    TextAdapter, TimestampAdapter, UuidAdapter,
};
use crate::{
    schema::RecordSchema,
    stmt::{Params, Row, Type, Value},
    Error, Result,
};

use std::collections::HashMap;

/// The set of adapters a `Db` converts values with.
///
/// Built once, then shared read-only by every operation. Each registered
/// adapter is wrapped in [`Optional`], so `NULL` passes through every kind.
#[derive(Debug, Default)]
pub struct Registry {
    adapters: HashMap<Type, Box<dyn Adapter>>,
}

impl Registry {
    /// A registry with no adapters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with the built-in adapter for every value kind.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry
            .register(Type::Bool, BoolAdapter)
            .register(Type::I16, IntAdapter::new(Type::I16))
            .register(Type::I32, IntAdapter::new(Type::I32))
            .register(Type::I64, IntAdapter::new(Type::I64))
            .register(Type::F64, FloatAdapter)
            .register(Type::String, TextAdapter)
            .register(Type::Bytes, BytesAdapter)
            .register(Type::Uuid, UuidAdapter)
            .register(Type::Timestamp, TimestampAdapter)
            .register(Type::Point, PointAdapter);
        registry
    }

    /// Registers `adapter` for `ty`, replacing any previous one.
    pub fn register(&mut self, ty: Type, adapter: impl Adapter) -> &mut Self {
        self.adapters.insert(ty, Box::new(Optional(adapter)));
        self
    }

    fn adapter(&self, ty: Type) -> Result<&dyn Adapter> {
        self.adapters
            .get(&ty)
            .map(|adapter| &**adapter)
            .ok_or_else(|| Error::unsupported_type(ty))
    }

    /// Encodes a parameter value with the adapter for its own type.
    pub fn encode(&self, value: Value) -> Result<Value> {
        match value.ty() {
            Type::Null => Ok(value),
            ty => self.adapter(ty)?.encode(value),
        }
    }

    /// Decodes a stored value into `ty`.
    pub fn decode(&self, ty: Type, value: Value) -> Result<Value> {
        match ty {
            Type::Null => Ok(value),
            ty => self.adapter(ty)?.decode(value),
        }
    }

    pub fn encode_params(&self, params: &mut Params) -> Result<()> {
        for (_, value) in params.iter_mut() {
            *value = self.encode(std::mem::take(value))?;
        }
        Ok(())
    }

    /// Decodes every column of `row` that maps to a field of `schema`.
    ///
    /// Columns with no matching field are left as the store returned them.
    pub fn decode_row(&self, schema: &RecordSchema, row: &mut Row) -> Result<()> {
        for (column, value) in row.iter_mut() {
            if let Some(field) = schema.field_for_column(column) {
                *value = self.decode(field.ty, std::mem::take(value))?;
            }
        }
        Ok(())
    }
}
