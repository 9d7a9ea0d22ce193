mod primitive;
pub use primitive::Primitive;

pub use rowmap_core::stmt::{Params, Point, Row, Statement, Type, Value};
