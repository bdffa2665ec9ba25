#![forbid(unsafe_code)]

extern crate proc_macro;

mod derive_animal;

mod attr {
    pub mod attr_util;
    pub mod extends;
}

use proc_macro::TokenStream;

/// Derive `cage::Animal`, plus `cage::Subtype<P>` for every ancestor named in
/// `#[animal(extends(P1, P2, ..))]`.
///
/// Structs must carry a `name: String` field. Enums must wrap exactly one
/// animal per variant, and each variant is named after the type it wraps.
#[proc_macro_derive(Animal, attributes(animal))]
pub fn derive_animal(input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as derive_animal::AnimalItem);

    let tokens = derive_animal::gen_animal(item);

    TokenStream::from(tokens)
}
