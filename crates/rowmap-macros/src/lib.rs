extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowmap::Record` for a struct with named fields.
///
/// Each field maps to a column named after the snake-case form of its field
/// name. Field names default to the upper-camel-case form of the Rust
/// identifier and can be set with `#[field(name = "...")]`.
#[proc_macro_derive(Record, attributes(field))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
