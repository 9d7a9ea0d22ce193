//! Builds the SQL text of the four record commands.
//!
//! Placeholders are rendered as `@FieldName`. Drivers render the same
//! statements with their own positional placeholders when executing them.

use crate::Record;

use rowmap_core::stmt::Statement;
use rowmap_sql::Serializer;

fn render(stmt: &Statement) -> String {
    let mut params = Vec::<String>::new();
    Serializer::named().serialize(stmt, &mut params)
}

/// `INSERT INTO {table} (columns) VALUES (@Fields)`, columns and placeholders
/// both in field-name order.
pub fn insert_command<T: Record>(table: &str) -> String {
    render(&Statement::insert(table, T::schema()))
}

/// `SELECT * FROM {table} WHERE {key column} = @{key}`.
pub fn select_command(table: &str, key: &str) -> String {
    render(&Statement::select(table, key))
}

/// `UPDATE {table} SET column = @Field, ... WHERE {key column} = @{key}`.
///
/// Every field is assigned, the key field included.
pub fn update_command<T: Record>(table: &str, key: &str) -> String {
    render(&Statement::update(table, key, T::schema()))
}

/// `DELETE FROM {table} WHERE {key column} = @{key}`.
pub fn delete_command(table: &str, key: &str) -> String {
    render(&Statement::delete(table, key))
}
