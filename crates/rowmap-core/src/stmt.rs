mod params;
pub use params::Params;

mod point;
pub use point::Point;

mod row;
pub use row::Row;

mod statement;
pub use statement::{Assignment, Delete, Filter, Insert, Raw, Select, Statement, Update};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
