#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod params;
pub use params::{Params, Placeholder};
use params::Param;

// Fragment serializers
mod raw;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The SQL dialect decides how placeholders are written.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to record parameter names, in placeholder order
    params: &'a mut T,
}

impl Serializer {
    /// Serializes `stmt`, pushing the name of every placeholder onto `params`.
    ///
    /// Table and column names are written as given; only values are
    /// parameterized.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
