use super::Value;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Named statement parameters, keyed by field name without the `@` prefix.
///
/// Insertion order is preserved.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a named value, replacing any previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values for `names`, in that order.
    ///
    /// Drivers call this with the placeholder names collected while
    /// serializing a statement.
    pub fn bind(&self, names: &[String]) -> Result<Vec<Value>> {
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| Error::missing_parameter(name.as_str()))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.values
            .iter_mut()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}


/// Builds [`Params`] from `name => value` pairs.
///
/// ```
/// let params = rowmap_core::params! { "Id" => 7_i64, "UserName" => "ada" };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::stmt::Params::new()
    };
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {
        $crate::stmt::Params::new() $( .with($name, $value) )+
    };
}
