pub fn attr_has_simple_ident(attr: &syn::Attribute, name: &str) -> bool {
    let path = &attr.path;
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return false;
    }

    let segment = path.segments.last().unwrap();

    segment.ident == name
}

/// Last identifier of a path, i.e. `AnyAnimal` in `crate::fixture::AnyAnimal`.
pub fn last_ident(path: &syn::Path) -> syn::Result<&syn::Ident> {
    path.segments
        .last()
        .map(|segment| &segment.ident)
        .ok_or_else(|| syn::Error::new_spanned(path, "Expected a type path"))
}
