use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_params_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let with = self.record.fields.iter().map(|field| {
            let name = &field.name.field;
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                .with(#name, <#ty as #rowmap::Primitive>::to_value(&self.#ident))
            }
        });

        quote! {
            #rowmap::Params::new() #( #with )*
        }
    }
}
