use super::Adapter;
use crate::{stmt::Value, Result};

/// Maps absent values to `NULL` and back, delegating present values to `A`.
#[derive(Debug, Clone)]
pub struct Optional<A>(pub A);

impl<A: Adapter> Adapter for Optional<A> {
    fn encode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            value => self.0.encode(value),
        }
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            value => self.0.decode(value),
        }
    }
}
