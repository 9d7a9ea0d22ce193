//! Conversion between record values and what a store hands back.
//!
//! Adapters sit on both sides of a driver call: parameters are encoded before
//! they are bound, and every column of a returned row is decoded against the
//! type of the record field it belongs to. Stores without a native type for a
//! value kind (SQLite has no timestamp, uuid or geometry types) return text or
//! blobs, which the built-in adapters turn back into typed values.

mod builtin;
pub use builtin::{
    BoolAdapter, BytesAdapter, FloatAdapter, IntAdapter, PointAdapter, TextAdapter,
    TimestampAdapter, UuidAdapter,
};

mod optional;
pub use optional::Optional;

mod registry;
pub use registry::Registry;

use crate::{stmt::Value, Result};

use std::fmt::Debug;

/// A bidirectional converter for one value kind.
pub trait Adapter: Debug + Send + Sync + 'static {
    /// Converts a value before it is bound as a statement parameter.
    fn encode(&self, value: Value) -> Result<Value>;

    /// Converts a value read from the store into the field's value kind.
    fn decode(&self, value: Value) -> Result<Value>;
}
