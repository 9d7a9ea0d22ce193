use crate::Error;

/// A required environment variable is not set.
#[derive(Debug)]
pub(super) struct MissingConfiguration {
    pub(super) variable: &'static str,
}

impl Error {
    pub fn missing_configuration(variable: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingConfiguration(
            MissingConfiguration { variable },
        ))
    }

    pub fn is_missing_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingConfiguration(_))
    }
}

impl std::fmt::Display for MissingConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "environment variable `{}` is not set", self.variable)
    }
}
