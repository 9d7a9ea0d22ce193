#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Explicit field name: `#[field(name = "...")]`
    pub(crate) name: Option<syn::LitStr>,
}

impl FieldAttr {
    pub(super) fn populate_from_ast(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                if self.name.is_some() {
                    return Err(meta.error("duplicate field name argument"));
                }
                self.name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `name`"))
            }
        })
    }
}
