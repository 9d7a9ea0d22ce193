use super::Value;
use crate::{Error, Result};

/// A row returned by a driver: column names with their values.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        assert_eq!(
            columns.len(),
            values.len(),
            "row must have one value per column"
        );
        Self { columns, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.position(column).map(|index| &self.values[index])
    }

    /// Moves the value out of `column`, leaving `Null` in its place.
    pub fn take(&mut self, column: &str) -> Result<Value> {
        let index = self
            .position(column)
            .ok_or_else(|| Error::missing_column(column))?;
        Ok(std::mem::take(&mut self.values[index]))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter_mut())
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }
}
