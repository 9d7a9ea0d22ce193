use super::{ErrorSet, FieldAttr, Name};

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the struct field
    pub(crate) ident: syn::Ident,

    /// Field and column names
    pub(crate) name: Name,

    /// Field type
    pub(crate) ty: syn::Type,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("field") {
                if let Err(err) = attrs.populate_from_ast(attr) {
                    errs.push(err);
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = match &attrs.name {
            Some(lit) => {
                let value = lit.value();
                if !Name::is_valid(&value) {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "field name must start with a letter or `_` and contain only letters, digits, and `_`",
                    ));
                }
                Name::from_str(&value, lit.span())
            }
            None => Name::from_ident(ident),
        };

        Ok(Self {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
        })
    }
}
