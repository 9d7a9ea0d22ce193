use crate::{stmt::Row, Params, RecordSchema, Result};

/// A struct that maps to one table row.
///
/// Implemented with `#[derive(Record)]`.
pub trait Record: Sized + Send + Sync + 'static {
    /// Field names, types and nullability, in declaration order.
    fn schema() -> &'static RecordSchema;

    /// Every field name paired with the field's current value.
    fn params(&self) -> Params;

    /// Builds a record from a result row.
    ///
    /// Each field reads the column named after it; extra columns are ignored.
    fn load(row: Row) -> Result<Self>;
}
