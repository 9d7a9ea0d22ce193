mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod field_attr;
pub(crate) use field_attr::FieldAttr;

mod name;
pub(crate) use name::Name;

mod record;
pub(crate) use record::Record;
