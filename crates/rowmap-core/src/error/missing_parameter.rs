use super::Error;

/// Error when a statement placeholder has no bound value.
#[derive(Debug)]
pub(super) struct MissingParameter {
    name: Box<str>,
}

impl std::error::Error for MissingParameter {}

impl core::fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing parameter `@{}`", self.name)
    }
}

impl Error {
    /// Creates a missing parameter error for the placeholder `@name`.
    pub fn missing_parameter(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingParameter(MissingParameter {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing parameter error.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingParameter(_))
    }
}
