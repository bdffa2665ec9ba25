use syn::parse::ParseStream;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;

use crate::attr::attr_util;

/// `#[animal(extends(Parent, Grandparent, ..))]`
///
/// Ancestors are listed nearest first. Every ancestor is an enum
/// that wraps the previous level in a variant named after it.
pub struct Extends {
    pub ancestors: Vec<syn::Path>,
}

impl Extends {
    pub fn none() -> Self {
        Self { ancestors: vec![] }
    }

    pub fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut found: Option<Self> = None;

        for attr in attrs {
            if !attr_util::attr_has_simple_ident(attr, "animal") {
                continue;
            }

            if found.is_some() {
                return Err(syn::Error::new(
                    attr.span(),
                    "Only one #[animal(..)] attribute is allowed",
                ));
            }

            found = Some(attr.parse_args()?);
        }

        Ok(found.unwrap_or_else(Self::none))
    }
}

impl syn::parse::Parse for Extends {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let keyword: syn::Ident = input.parse()?;
        if keyword != "extends" {
            return Err(syn::Error::new(keyword.span(), "Expected `extends(..)`"));
        }

        let content;
        let paren_token = syn::parenthesized!(content in input);

        let ancestors: Punctuated<syn::Path, syn::token::Comma> =
            content.parse_terminated(syn::Path::parse_mod_style)?;

        if ancestors.is_empty() {
            return Err(syn::Error::new(
                paren_token.span,
                "Must name at least one ancestor",
            ));
        }

        Ok(Self {
            ancestors: ancestors.into_iter().collect(),
        })
    }
}
