//! Common imports for test files: `use tests::prelude::*;`

pub use crate::{assert_err, assert_none, assert_ok, tests, DbTest};

pub use rowmap::{params, Db, Params, Point, Record, Value};
