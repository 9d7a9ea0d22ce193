use super::{ErrorSet, Field};

use std::collections::HashSet;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        if node.named.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "record must have at least one field",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        // Field names double as placeholder names, so they must be unique.
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.field.as_str()) {
                errs.push(syn::Error::new(
                    field.name.span,
                    format!("duplicate field name `{}`", field.name.field),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
