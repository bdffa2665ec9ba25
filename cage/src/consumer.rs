//!
//! The contravariant, consumer-only cage.
//!

use crate::animal::Subtype;
use crate::variance::{Consume, PhantomContravariant};

///
/// A cage that only ever takes elements in, which makes it contravariant:
/// a `Consumer<Fish>` may be used wherever a `Consumer<GoldFish>` is expected.
///
/// `T` is the element type accepted from the outside, `S` is the element type
/// actually stored. Narrowing a consumer only changes `T`, so whatever was put
/// before and after ends up in the same storage.
///
/// `into_storage` hands the storage back to whoever created the consumer, typed
/// by `S`. It is not a read: once narrowed, `T` and `S` differ and no `T` can
/// be recovered from the consumer.
///
/// ```compile_fail
/// use cage::fixture::{Fish, GoldFish};
/// use cage::Consumer;
///
/// let gold_fish = Consumer::<Fish>::new().narrow::<GoldFish>();
/// let stored: Vec<GoldFish> = gold_fish.into_storage();
/// ```
///
/// Nothing typed `T` ever comes back out:
///
/// ```compile_fail
/// use cage::fixture::Fish;
/// use cage::Consumer;
///
/// let fish = Consumer::<Fish>::new();
/// let first: Fish = fish.get_first().unwrap();
/// ```
///
/// Narrowing only goes down the hierarchy:
///
/// ```compile_fail
/// use cage::fixture::{AnyAnimal, Fish};
/// use cage::Consumer;
///
/// let animals = Consumer::<Fish>::new().narrow::<AnyAnimal>();
/// ```
///
/// Rust's own subtyping agrees. A consumer of shorter-lived references is a
/// consumer of longer-lived ones:
///
/// ```
/// use cage::Consumer;
///
/// fn lengthen<'a>(names: Consumer<&'a str, String>) -> Consumer<&'static str, String> {
///     names
/// }
/// ```
///
#[derive(Clone, Debug)]
pub struct Consumer<T, S = T> {
    animals: Vec<S>,
    variance: PhantomContravariant<T>,
}

impl<T> Consumer<T> {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            variance: std::marker::PhantomData,
        }
    }
}

impl<T, S> Consumer<T, S> {
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Turn this consumer into a consumer of the subtype `U`.
    pub fn narrow<U>(self) -> Consumer<U, S>
    where
        U: Subtype<T> + Subtype<S>,
    {
        tracing::trace!(stored = self.animals.len(), "narrow");
        Consumer {
            animals: self.animals,
            variance: std::marker::PhantomData,
        }
    }

    /// Release the backing storage.
    ///
    /// The elements come back typed by the storage parameter `S`, chosen by
    /// whoever created the consumer, not by the accepted type `T`.
    pub fn into_storage(self) -> Vec<S> {
        self.animals
    }
}

impl<T, S> Consumer<T, S>
where
    T: Subtype<S>,
{
    pub fn put(&mut self, animal: T) {
        self.animals.push(<T as Subtype<S>>::upcast(animal));
    }

    pub fn put_all(&mut self, animals: Vec<T>) {
        self.animals
            .extend(animals.into_iter().map(<T as Subtype<S>>::upcast));
    }
}

impl<T> Default for Consumer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `Consumer<T>` written as `Cage<in U>` for every subtype `U` of `T`.
impl<T, S, U> Consume<U> for Consumer<T, S>
where
    U: Subtype<T> + Subtype<S>,
{
    fn put(&mut self, element: U) {
        self.animals.push(<U as Subtype<S>>::upcast(element));
    }
}
