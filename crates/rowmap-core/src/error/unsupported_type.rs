use super::Error;
use crate::stmt::Type;

/// No adapter is registered for a value type.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    ty: Type,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no adapter registered for type {:?}", self.ty)
    }
}

impl Error {
    pub fn unsupported_type(ty: Type) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType { ty }))
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
