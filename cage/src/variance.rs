//!
//! Use-site variance: read-only and write-only views of a container.
//!
//! A parameter typed `&impl Produce<T>` (or `&dyn Produce<T>`) accepts any
//! container whose elements are *some* subtype of `T`. Nothing can be put
//! into it, since the exact element type is unknown.
//!
//! A parameter typed `&mut impl Consume<T>` accepts any container whose
//! elements are *some* supertype of `T`. Nothing typed `T` can be taken out
//! of it, for the same reason.
//!

use std::marker::PhantomData;

use crate::CageResult;

/// `T` only ever comes out.
pub type PhantomCovariant<T> = PhantomData<fn() -> T>;

/// `T` only ever goes in.
pub type PhantomContravariant<T> = PhantomData<fn(T)>;

/// `T` goes both ways.
pub type PhantomInvariant<T> = PhantomData<fn(T) -> T>;

/// A container read as `Container<out T>`.
///
/// A producer offers no way to insert:
///
/// ```compile_fail
/// use cage::fixture::{Carp, Fish};
/// use cage::{Consume, Produce, Subtype};
///
/// fn sneak_in<P: Produce<Fish>>(source: &mut P) {
///     source.put(Carp::new("잉어").upcast());
/// }
/// ```
pub trait Produce<T> {
    fn get_first(&self) -> CageResult<T>;

    fn get_all(&self) -> Vec<T>;
}

/// A container read as `Container<in T>`.
///
/// A consumer offers no way to take a `T` out:
///
/// ```compile_fail
/// use cage::fixture::GoldFish;
/// use cage::{Consume, Produce};
///
/// fn peek(destination: &dyn Consume<GoldFish>) -> GoldFish {
///     destination.get_first().unwrap()
/// }
/// ```
pub trait Consume<T> {
    fn put(&mut self, element: T);

    fn put_all(&mut self, elements: Vec<T>) {
        for element in elements {
            self.put(element);
        }
    }
}
