//!
//! The invariant cage.
//!

use crate::animal::Subtype;
use crate::variance::{Consume, PhantomInvariant, Produce};
use crate::{CageError, CageResult};

///
/// A cage holding elements of exactly one type `T`.
///
/// `Cage<A>` and `Cage<B>` are unrelated unless `A` and `B` are the same type,
/// no matter how `A` and `B` relate:
///
/// ```compile_fail
/// use cage::fixture::{Fish, GoldFish};
/// use cage::Cage;
///
/// let fish_cage: Cage<Fish> = Cage::<GoldFish>::new();
/// ```
///
/// The same holds for Rust's own subtyping of lifetimes:
///
/// ```compile_fail
/// use cage::Cage;
///
/// fn shorten<'a>(cage: Cage<&'static str>) -> Cage<&'a str> {
///     cage
/// }
/// ```
///
#[derive(Clone, Debug)]
pub struct Cage<T> {
    animals: Vec<T>,
    variance: PhantomInvariant<T>,
}

impl<T> Cage<T> {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            variance: std::marker::PhantomData,
        }
    }

    pub fn put(&mut self, animal: T) {
        self.animals.push(animal);
    }

    pub fn get_first(&self) -> CageResult<&T> {
        self.animals.first().ok_or(CageError::EmptyContainer)
    }

    pub fn get_all(&self) -> &[T] {
        &self.animals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.animals.iter()
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

impl<T: Clone> Cage<T> {
    /// Append every element of a cage of the very same type.
    ///
    /// A cage of a subtype is rejected:
    ///
    /// ```compile_fail
    /// use cage::fixture::{Fish, GoldFish};
    /// use cage::Cage;
    ///
    /// let gold_fish_cage = Cage::<GoldFish>::new();
    /// let mut fish_cage = Cage::<Fish>::new();
    /// fish_cage.move_from(&gold_fish_cage);
    /// ```
    pub fn move_from(&mut self, source: &Cage<T>) {
        self.animals.extend_from_slice(&source.animals);
        tracing::trace!(moved = source.len(), total = self.len(), "move_from");
    }

    /// Append every element of this cage to a cage of the very same type.
    ///
    /// ```compile_fail
    /// use cage::fixture::{Fish, GoldFish};
    /// use cage::Cage;
    ///
    /// let gold_fish_cage = Cage::<GoldFish>::new();
    /// let mut fish_cage = Cage::<Fish>::new();
    /// gold_fish_cage.move_to(&mut fish_cage);
    /// ```
    pub fn move_to(&self, destination: &mut Cage<T>) {
        destination.animals.extend_from_slice(&self.animals);
        tracing::trace!(moved = self.len(), total = destination.len(), "move_to");
    }

    /// Append every element of a source producing *some* subtype of `T`.
    ///
    /// This is `moveFrom(source: Cage<out T>)`: only the source's read
    /// operations are reachable here.
    pub fn move_from_producer<P>(&mut self, source: &P)
    where
        P: Produce<T> + ?Sized,
    {
        let moved = source.get_all();
        let count = moved.len();
        self.animals.extend(moved);
        tracing::trace!(moved = count, total = self.len(), "move_from_producer");
    }

    /// Append every element of this cage to a destination consuming *some*
    /// supertype of `T`.
    ///
    /// This is `moveTo(destination: Cage<in T>)`: only the destination's write
    /// operations are reachable here.
    pub fn move_to_consumer<C>(&self, destination: &mut C)
    where
        C: Consume<T> + ?Sized,
    {
        destination.put_all(self.animals.clone());
        tracing::trace!(moved = self.len(), "move_to_consumer");
    }
}

impl<T> Default for Cage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::iter::FromIterator<T> for Cage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            animals: iter.into_iter().collect(),
            variance: std::marker::PhantomData,
        }
    }
}

impl<T> Extend<T> for Cage<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.animals.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Cage<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.animals.iter()
    }
}

/// `Cage<S>` read as `Cage<out T>` for every supertype `T` of `S`.
impl<S, T> Produce<T> for Cage<S>
where
    S: Subtype<T> + Clone,
{
    fn get_first(&self) -> CageResult<T> {
        self.animals
            .first()
            .cloned()
            .map(<S as Subtype<T>>::upcast)
            .ok_or(CageError::EmptyContainer)
    }

    fn get_all(&self) -> Vec<T> {
        self.animals
            .iter()
            .cloned()
            .map(<S as Subtype<T>>::upcast)
            .collect()
    }
}

/// `Cage<S>` written as `Cage<in T>` for every subtype `T` of `S`.
impl<S, T> Consume<T> for Cage<S>
where
    T: Subtype<S>,
{
    fn put(&mut self, element: T) {
        self.animals.push(<T as Subtype<S>>::upcast(element));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{AnyAnimal, Carp, Fish, GoldFish};

    fn gold_fish() -> GoldFish {
        GoldFish::new("금붕어")
    }

    #[test]
    fn get_first_on_empty_cage_fails() {
        let cage = Cage::<Carp>::new();

        assert_eq!(cage.get_first(), Err(CageError::EmptyContainer));
    }

    #[test]
    fn get_first_returns_the_put_element() {
        let mut cage = Cage::new();
        cage.put(Carp::new("잉어"));

        assert_eq!(cage.get_first(), Ok(&Carp::new("잉어")));
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut cage = Cage::new();
        cage.put(Carp::new("a"));
        cage.put(Carp::new("b"));
        cage.put(Carp::new("a"));

        let carps: Vec<_> = cage.iter().cloned().collect();
        assert_eq!(
            carps,
            vec![Carp::new("a"), Carp::new("b"), Carp::new("a")]
        );
    }

    #[test]
    fn move_from_same_type() {
        let mut source = Cage::new();
        source.put(gold_fish());

        let mut destination = Cage::new();
        destination.put(GoldFish::new("first"));
        destination.move_from(&source);

        assert_eq!(destination.get_all(), &[GoldFish::new("first"), gold_fish()]);
        assert_eq!(source.get_all(), &[gold_fish()]);
    }

    #[test]
    fn move_to_same_type() {
        let source: Cage<_> = vec![gold_fish(), GoldFish::new("second")]
            .into_iter()
            .collect();
        let mut destination = Cage::new();

        source.move_to(&mut destination);

        assert_eq!(destination.get_all(), source.get_all());
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn move_from_producer_of_subtype() {
        let mut gold_fish_cage = Cage::new();
        gold_fish_cage.put(gold_fish());

        let mut fish_cage = Cage::<Fish>::new();
        fish_cage.put(Fish::Carp(Carp::new("잉어")));
        fish_cage.move_from_producer(&gold_fish_cage);

        assert_eq!(
            fish_cage.get_all(),
            &[Fish::Carp(Carp::new("잉어")), Fish::GoldFish(gold_fish())]
        );
        assert_eq!(gold_fish_cage.get_all(), &[gold_fish()]);
    }

    #[test]
    fn move_to_consumer_of_supertype() {
        let mut gold_fish_cage = Cage::new();
        gold_fish_cage.put(gold_fish());

        let mut animal_cage = Cage::<AnyAnimal>::new();
        gold_fish_cage.move_to_consumer(&mut animal_cage);

        assert_eq!(
            animal_cage.get_all(),
            &[AnyAnimal::Fish(Fish::GoldFish(gold_fish()))]
        );
        assert_eq!(gold_fish_cage.len(), 1);
    }

    #[test]
    fn produce_view_upcasts_on_the_way_out() {
        let mut gold_fish_cage = Cage::new();
        gold_fish_cage.put(gold_fish());

        let view: &dyn Produce<Fish> = &gold_fish_cage;

        assert_eq!(view.get_first(), Ok(Fish::GoldFish(gold_fish())));
        assert_eq!(view.get_all(), vec![Fish::GoldFish(gold_fish())]);
    }

    #[test]
    fn produce_view_of_empty_cage_fails() {
        let gold_fish_cage = Cage::<GoldFish>::new();
        let view: &dyn Produce<AnyAnimal> = &gold_fish_cage;

        assert_eq!(view.get_first(), Err(CageError::EmptyContainer));
    }
}
