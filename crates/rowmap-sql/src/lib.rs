pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt {
    pub use rowmap_core::stmt::*;
}
pub use stmt::Statement;
