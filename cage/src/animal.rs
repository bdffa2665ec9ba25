//!
//! The subtyping relation between element types.
//!

use crate::CageResult;

/// Anything that may live in an animal cage.
pub trait Animal {
    fn name(&self) -> &str;

    /// Name of the concrete (leaf) type, known only at runtime for
    /// abstract levels of the hierarchy.
    fn kind(&self) -> &'static str;
}

///
/// `Self` is a subtype of `Super`.
///
/// Rust has no subtyping between nominal types, so the relation is declared
/// explicitly: every value of `Self` can be viewed as a `Super` (`upcast`),
/// while going back down (`downcast`) is checked at runtime.
///
/// The relation is reflexive: every `T` is a `Subtype<T>`. It is not derived
/// transitively; a hierarchy implements it for every proper ancestor, which
/// `#[derive(Animal)]` does.
///
pub trait Subtype<Super>: Sized {
    fn upcast(self) -> Super;

    fn downcast(value: Super) -> CageResult<Self>;
}

impl<T> Subtype<T> for T {
    fn upcast(self) -> T {
        self
    }

    fn downcast(value: T) -> CageResult<T> {
        Ok(value)
    }
}
