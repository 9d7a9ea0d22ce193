use super::Error;

/// Error when a single-row query returns more than one row.
#[derive(Debug)]
pub(super) struct TooManyRecords {
    context: Option<Box<str>>,
}

impl std::error::Error for TooManyRecords {}

impl core::fmt::Display for TooManyRecords {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("too many records")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a too many records error.
    ///
    /// The context parameter provides information about the query.
    pub fn too_many_records(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecords {
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if this error is a too many records error.
    pub fn is_too_many_records(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRecords(_))
    }
}
