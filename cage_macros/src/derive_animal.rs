use quote::quote;
use syn::parse::ParseStream;
use syn::spanned::Spanned;

use crate::attr::attr_util;
use crate::attr::extends::Extends;

pub struct AnimalItem {
    pub ident: syn::Ident,
    pub shape: Shape,
    pub extends: Extends,
}

pub enum Shape {
    /// A leaf: a struct carrying its own `name` field.
    Leaf,
    /// An abstract level: an enum where every variant wraps one animal.
    Abstract(Vec<syn::Ident>),
}

impl syn::parse::Parse for AnimalItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let input: syn::DeriveInput = input.parse()?;
        let extends = Extends::from_attrs(&input.attrs)?;

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "Generic animals are not supported",
            ));
        }

        let shape = match input.data {
            syn::Data::Struct(data) => {
                let has_name = match &data.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .any(|field| field.ident.as_ref().map_or(false, |ident| ident == "name")),
                    _ => false,
                };
                if !has_name {
                    return Err(syn::Error::new(
                        data.fields.span(),
                        "Expected a named field `name`",
                    ));
                }
                Shape::Leaf
            }
            syn::Data::Enum(data) => {
                if data.variants.is_empty() {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "Expected at least one variant",
                    ));
                }
                let mut variants = Vec::with_capacity(data.variants.len());
                for variant in data.variants {
                    match &variant.fields {
                        syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {}
                        _ => {
                            return Err(syn::Error::new(
                                variant.span(),
                                "Expected exactly one unnamed field",
                            ))
                        }
                    }
                    variants.push(variant.ident);
                }
                Shape::Abstract(variants)
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "Unions cannot be animals",
                ))
            }
        };

        Ok(Self {
            ident: input.ident,
            shape,
            extends,
        })
    }
}

pub fn gen_animal(item: AnimalItem) -> proc_macro2::TokenStream {
    let ident = &item.ident;
    let ident_str = syn::LitStr::new(&ident.to_string(), ident.span());

    let animal_methods = match &item.shape {
        Shape::Leaf => quote! {
            fn name(&self) -> &str {
                &self.name
            }

            fn kind(&self) -> &'static str {
                #ident_str
            }
        },
        Shape::Abstract(variants) => quote! {
            fn name(&self) -> &str {
                match self {
                    #(Self::#variants(inner) => ::cage::Animal::name(inner),)*
                }
            }

            fn kind(&self) -> &'static str {
                match self {
                    #(Self::#variants(inner) => ::cage::Animal::kind(inner),)*
                }
            }
        },
    };

    let subtype_impls = (0..item.extends.ancestors.len()).map(|depth| {
        gen_subtype(ident, &ident_str, &item.extends.ancestors[..=depth])
            .unwrap_or_else(|err| err.to_compile_error())
    });

    quote! {
        impl ::cage::Animal for #ident {
            #animal_methods
        }

        #(#subtype_impls)*
    }
}

/// `Subtype<Top>` for the last of `chain`, walking down through each level.
fn gen_subtype(
    ident: &syn::Ident,
    ident_str: &syn::LitStr,
    chain: &[syn::Path],
) -> syn::Result<proc_macro2::TokenStream> {
    let top = chain.last().unwrap();

    let mut upcast = quote! { self };
    let mut downcast = quote! { value };
    let mut child = ident;

    for (level, ancestor) in chain.iter().enumerate() {
        upcast = quote! { #ancestor::#child(#upcast) };

        let hit = if level == 0 {
            quote! { Ok(value) }
        } else {
            downcast
        };

        downcast = quote! {
            match value {
                #ancestor::#child(value) => #hit,
                other => Err(::cage::CageError::ClassCast {
                    target: #ident_str,
                    actual: ::cage::Animal::kind(&other),
                }),
            }
        };

        child = attr_util::last_ident(ancestor)?;
    }

    Ok(quote! {
        impl ::cage::Subtype<#top> for #ident {
            fn upcast(self) -> #top {
                #upcast
            }

            #[allow(unreachable_patterns)]
            fn downcast(value: #top) -> ::cage::CageResult<Self> {
                #downcast
            }
        }
    })
}
