use super::to_snake_case;
use crate::stmt::Type;

/// Compile-time description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Upper-camel-case field name, also the placeholder name (`@Name`)
    pub name: &'static str,

    /// Value type stored in the column
    pub ty: Type,

    /// True for `Option<T>` fields
    pub nullable: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, ty: Type, nullable: bool) -> Self {
        Self { name, ty, nullable }
    }

    pub fn column_name(&self) -> String {
        to_snake_case(self.name)
    }
}

/// Field layout of a record type, emitted by `#[derive(Record)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// Rust type name, for diagnostics
    pub name: &'static str,

    /// Fields in declaration order
    pub fields: &'static [FieldDescriptor],
}

impl RecordSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { name, fields }
    }

    /// Field names, sorted ascending (case-sensitive).
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.fields.iter().map(|field| field.name).collect();
        names.sort_unstable();
        names
    }

    /// Column names, sorted ascending.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.fields.iter().map(FieldDescriptor::column_name).collect();
        names.sort_unstable();
        names
    }

    /// `(column, field)` pairs in sorted field-name order.
    ///
    /// Both halves of each pair come from the same field, so statements built
    /// from this list bind every value to its own column.
    pub fn columns(&self) -> Vec<(String, &'static str)> {
        self.field_names()
            .into_iter()
            .map(|name| (to_snake_case(name), name))
            .collect()
    }

    /// Looks up the field stored in `column`.
    pub fn field_for_column(&self, column: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.column_name() == column)
    }
}
