mod name;
pub use name::to_snake_case;

mod record;
pub use record::{FieldDescriptor, RecordSchema};
