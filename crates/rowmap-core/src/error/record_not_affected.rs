use super::Error;

/// The write operation that reported zero affected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl core::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            WriteOp::Create => "creation error",
            WriteOp::Update => "update error",
            WriteOp::Delete => "deletion error",
        })
    }
}

/// Error when a create, update or delete reports zero affected rows.
///
/// The cause (missing key, constraint silently doing nothing) is not
/// distinguished.
#[derive(Debug)]
pub(super) struct RecordNotAffected {
    op: WriteOp,
    context: Option<Box<str>>,
}

impl std::error::Error for RecordNotAffected {}

impl core::fmt::Display for RecordNotAffected {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: no rows affected", self.op)?;
        if let Some(ref ctx) = self.context {
            write!(f, "; {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a write that affected no rows.
    pub fn record_not_affected(op: WriteOp, context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RecordNotAffected(RecordNotAffected {
            op,
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if this error is a zero-rows-affected error.
    pub fn is_record_not_affected(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotAffected(_))
    }

    /// Returns the failed write operation, if this is a zero-rows-affected error.
    pub fn write_op(&self) -> Option<WriteOp> {
        match self.kind() {
            super::ErrorKind::RecordNotAffected(err) => Some(err.op),
            _ => None,
        }
    }
}
