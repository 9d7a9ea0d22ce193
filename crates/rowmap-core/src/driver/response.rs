use crate::{stmt::Row, Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows affected by the operation
    Count(u64),

    /// Rows returned by a query
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn rows(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(Error::from_args(format_args!(
                "expected an affected-row count, got rows"
            ))),
        }
    }

    pub fn into_rows(self) -> Result<Vec<Row>> {
        match self.rows {
            Rows::Values(rows) => Ok(rows),
            Rows::Count(_) => Err(Error::from_args(format_args!(
                "expected rows, got an affected-row count"
            ))),
        }
    }
}
