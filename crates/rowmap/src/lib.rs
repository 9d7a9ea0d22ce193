pub mod commands;
pub use commands::{delete_command, insert_command, select_command, update_command};

pub mod db;
pub use db::Db;

mod record;
pub use record::Record;

pub mod stmt;
pub use stmt::{Params, Point, Primitive, Value};

mod table;
pub use table::Table;

pub use rowmap_core::{
    adapter::{self, Adapter, Registry},
    bail, err, params,
    schema::{to_snake_case, FieldDescriptor, RecordSchema},
    Error, Result, WriteOp,
};

pub use rowmap_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Primitive, Record, Result};
    pub use rowmap_core::{
        schema::{FieldDescriptor, RecordSchema},
        stmt::{Params, Row},
    };
}
