//!
//! Runtime type checks driven by an explicit type token.
//!
//! A generic function cannot ask what its type parameter is at runtime unless
//! the caller hands over a descriptor for it. `TypeToken<T>` is that
//! descriptor: zero-sized, and only constructible for the type it names.
//!

use std::any::Any;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;

pub struct TypeToken<T>(PhantomData<fn() -> T>);

impl<T> TypeToken<T> {
    pub const fn of() -> Self {
        Self(PhantomData)
    }

    pub fn name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T: Any> TypeToken<T> {
    pub fn is_instance(&self, value: &dyn Any) -> bool {
        value.is::<T>()
    }
}

impl<T> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeToken<T> {}

impl<T> std::fmt::Debug for TypeToken<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeToken<{}>", self.name())
    }
}

/// `"i32: 3"`, `"&str: ABC"`
pub fn describe<T: Display>(value: &T, token: TypeToken<T>) -> String {
    format!("{}: {}", token.name(), value)
}

pub fn has_any_instance_of<T: Any>(items: &[Box<dyn Any>], token: TypeToken<T>) -> bool {
    items.iter().any(|item| token.is_instance(item.as_ref()))
}

pub fn filter_is_instance<T: Any>(items: &[Box<dyn Any>], _token: TypeToken<T>) -> Vec<&T> {
    items
        .iter()
        .filter_map(|item| item.downcast_ref::<T>())
        .collect()
}

/// Whether `lhs` and `rhs` share at least one element.
pub fn has_intersection<T: Eq + Hash>(lhs: &[T], rhs: &[T]) -> bool {
    let lhs: HashSet<&T> = lhs.iter().collect();
    rhs.iter().any(|item| lhs.contains(item))
}
