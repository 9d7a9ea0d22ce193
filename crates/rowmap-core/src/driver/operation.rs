use crate::stmt::{Params, Statement};

/// Work handed to a [`Connection`](super::Connection).
#[derive(Debug, Clone)]
pub enum Operation {
    /// Run a statement and report the affected-row count.
    Execute(Sql),

    /// Run a statement and return its rows.
    Query(Sql),
}

/// A statement with its named parameters.
#[derive(Debug, Clone)]
pub struct Sql {
    pub stmt: Statement,
    pub params: Params,
}

impl Operation {
    pub fn execute(stmt: Statement, params: Params) -> Self {
        Operation::Execute(Sql { stmt, params })
    }

    pub fn query(stmt: Statement, params: Params) -> Self {
        Operation::Query(Sql { stmt, params })
    }
}
