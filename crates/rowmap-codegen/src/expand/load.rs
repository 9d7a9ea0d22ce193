use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Reads each field from its column. Columns the record does not declare
    /// are left in the row and ignored.
    pub(super) fn expand_load_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let fields = self.record.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let column = &field.name.column;

            quote! {
                #ident: <#ty as #rowmap::Primitive>::load(row.take(#column)?)?,
            }
        });

        quote! {
            Ok(Self {
                #( #fields )*
            })
        }
    }
}
