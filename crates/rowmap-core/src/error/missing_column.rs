use super::Error;

/// Error when a returned row lacks the column a record field maps to.
#[derive(Debug)]
pub(super) struct MissingColumn {
    column: Box<str>,
}

impl std::error::Error for MissingColumn {}

impl core::fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column `{}` not present in result row", self.column)
    }
}

impl Error {
    pub fn missing_column(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumn(MissingColumn {
            column: column.into().into(),
        }))
    }

    pub fn is_missing_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingColumn(_))
    }
}
