use crate::schema::{to_snake_case, RecordSchema};

/// A CRUD statement, or raw command text, ready to be serialized for a
/// specific SQL dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Select(Select),
    Update(Update),
    Delete(Delete),
    Raw(Raw),
}

/// `column = @field`, in a SET list or a VALUES pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub field: String,
}

/// `WHERE column = @field` on the key field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column and placeholder for each field; serialized as the column list
    /// and the VALUES list, position by position.
    pub columns: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Filter,
}

/// Caller-supplied command text using `@Name` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub sql: String,
}

impl Statement {
    /// `INSERT INTO {table} (...) VALUES (...)` over every field of `schema`.
    pub fn insert(table: &str, schema: &RecordSchema) -> Self {
        Statement::Insert(Insert {
            table: table.to_string(),
            columns: Assignment::all(schema),
        })
    }

    /// `SELECT * FROM {table} WHERE {key column} = @{key}`
    pub fn select(table: &str, key: &str) -> Self {
        Statement::Select(Select {
            table: table.to_string(),
            filter: Filter::key(key),
        })
    }

    /// `UPDATE {table} SET ... WHERE {key column} = @{key}` over every field of
    /// `schema`.
    pub fn update(table: &str, key: &str, schema: &RecordSchema) -> Self {
        Statement::Update(Update {
            table: table.to_string(),
            assignments: Assignment::all(schema),
            filter: Filter::key(key),
        })
    }

    /// `DELETE FROM {table} WHERE {key column} = @{key}`
    pub fn delete(table: &str, key: &str) -> Self {
        Statement::Delete(Delete {
            table: table.to_string(),
            filter: Filter::key(key),
        })
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Statement::Raw(Raw { sql: sql.into() })
    }

    /// The table a generated statement targets. `None` for raw text.
    pub fn table(&self) -> Option<&str> {
        match self {
            Statement::Insert(stmt) => Some(&stmt.table),
            Statement::Select(stmt) => Some(&stmt.table),
            Statement::Update(stmt) => Some(&stmt.table),
            Statement::Delete(stmt) => Some(&stmt.table),
            Statement::Raw(_) => None,
        }
    }
}

impl Assignment {
    fn all(schema: &RecordSchema) -> Vec<Assignment> {
        schema
            .columns()
            .into_iter()
            .map(|(column, field)| Assignment {
                column,
                field: field.to_string(),
            })
            .collect()
    }
}

impl Filter {
    pub fn key(field: &str) -> Self {
        Filter {
            column: to_snake_case(field),
            field: field.to_string(),
        }
    }
}

impl From<Raw> for Statement {
    fn from(value: Raw) -> Self {
        Statement::Raw(value)
    }
}
