mod load;
mod params;
mod schema;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let schema_body = self.expand_schema_body();
        let params_body = self.expand_params_body();
        let load_body = self.expand_load_body();

        wrap_in_const(quote! {
            impl #rowmap::Record for #ident {
                fn schema() -> &'static #rowmap::RecordSchema {
                    #schema_body
                }

                fn params(&self) -> #rowmap::Params {
                    #params_body
                }

                fn load(mut row: #rowmap::Row) -> #rowmap::Result<Self> {
                    #load_body
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
