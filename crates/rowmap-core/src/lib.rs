pub mod adapter;

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError, WriteOp};

pub mod schema;
pub use schema::{FieldDescriptor, RecordSchema};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
