use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_schema_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let type_name = self.record.ident.to_string();

        let fields = self.record.fields.iter().map(|field| {
            let name = &field.name.field;
            let ty = &field.ty;

            quote! {
                #rowmap::FieldDescriptor::new(
                    #name,
                    <#ty as #rowmap::Primitive>::TYPE,
                    <#ty as #rowmap::Primitive>::NULLABLE,
                )
            }
        });

        quote! {
            const FIELDS: &[#rowmap::FieldDescriptor] = &[ #( #fields, )* ];
            static SCHEMA: #rowmap::RecordSchema = #rowmap::RecordSchema::new(#type_name, FIELDS);
            &SCHEMA
        }
    }
}
