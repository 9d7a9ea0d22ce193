use heck::ToUpperCamelCase;
use proc_macro2::Span;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Name {
    /// Field name as seen by SQL: the `@Name` placeholder
    pub(crate) field: String,

    /// Column the field maps to
    pub(crate) column: String,

    /// Span used for diagnostics
    pub(crate) span: Span,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        let field = ident.unraw().to_string().to_upper_camel_case();
        Self::from_str(&field, ident.span())
    }

    pub(crate) fn from_str(field: &str, span: Span) -> Self {
        Self {
            field: field.to_string(),
            column: rowmap_core::schema::to_snake_case(field),
            span,
        }
    }

    pub(crate) fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();

        chars
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }
}
