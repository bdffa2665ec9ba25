//!
//! The covariant, producer-only cage.
//!

use crate::animal::Subtype;
use crate::variance::{PhantomCovariant, Produce};
use crate::{CageError, CageResult};

///
/// A cage that only ever hands elements out, which makes it covariant:
/// a `Producer<GoldFish>` may be used wherever a `Producer<Fish>` is expected.
///
/// There is no way to put anything into a producer after construction:
///
/// ```compile_fail
/// use cage::fixture::Fish;
/// use cage::Producer;
///
/// let mut fish = Producer::<Fish>::default();
/// fish.put(fish.get_first().unwrap());
/// ```
///
/// Widening only goes up the hierarchy:
///
/// ```compile_fail
/// use cage::fixture::{AnyAnimal, Fish};
/// use cage::Producer;
///
/// let fish: Producer<Fish> = Producer::<AnyAnimal>::default().widen();
/// ```
///
/// Rust's own subtyping agrees. A producer of longer-lived references is a
/// producer of shorter-lived ones:
///
/// ```
/// use cage::Producer;
///
/// fn shorten<'a>(names: Producer<&'static str>) -> Producer<&'a str> {
///     names
/// }
/// ```
///
#[derive(Clone, Debug)]
pub struct Producer<T> {
    animals: Vec<T>,
    variance: PhantomCovariant<T>,
}

impl<T> Producer<T> {
    pub fn new(animals: Vec<T>) -> Self {
        Self {
            animals,
            variance: std::marker::PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Turn this producer into a producer of the supertype `U`.
    pub fn widen<U>(self) -> Producer<U>
    where
        T: Subtype<U>,
    {
        Producer::new(
            self.animals
                .into_iter()
                .map(<T as Subtype<U>>::upcast)
                .collect(),
        )
    }
}

impl<T: Clone> Producer<T> {
    pub fn get_first(&self) -> CageResult<T> {
        self.animals
            .first()
            .cloned()
            .ok_or(CageError::EmptyContainer)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.animals.clone()
    }
}

impl<T> Default for Producer<T> {
    fn default() -> Self {
        Self {
            animals: Vec::new(),
            variance: std::marker::PhantomData,
        }
    }
}

impl<T> From<Vec<T>> for Producer<T> {
    fn from(animals: Vec<T>) -> Self {
        Self::new(animals)
    }
}

impl<T> std::iter::FromIterator<T> for Producer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `Producer<T>` read as `Cage<out U>` for every supertype `U` of `T`.
impl<T, U> Produce<U> for Producer<T>
where
    T: Subtype<U> + Clone,
{
    fn get_first(&self) -> CageResult<U> {
        self.animals
            .first()
            .cloned()
            .map(<T as Subtype<U>>::upcast)
            .ok_or(CageError::EmptyContainer)
    }

    fn get_all(&self) -> Vec<U> {
        self.animals
            .iter()
            .cloned()
            .map(<T as Subtype<U>>::upcast)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{AnyAnimal, Carp, Fish, GoldFish};
    use crate::Cage;

    #[test]
    fn empty_producer_has_no_first() {
        let fish = Producer::<Fish>::default();

        assert!(fish.is_empty());
        assert_eq!(fish.get_first(), Err(CageError::EmptyContainer));
    }

    #[test]
    fn widen_keeps_order() {
        let gold_fish = Producer::new(vec![GoldFish::new("a"), GoldFish::new("b")]);

        let fish: Producer<Fish> = gold_fish.widen();

        assert_eq!(
            fish.get_all(),
            vec![
                Fish::GoldFish(GoldFish::new("a")),
                Fish::GoldFish(GoldFish::new("b")),
            ]
        );
        assert_eq!(fish.get_first(), Ok(Fish::GoldFish(GoldFish::new("a"))));
    }

    #[test]
    fn widen_twice() {
        let carps: Producer<Carp> = vec![Carp::new("잉어")].into();

        let animals: Producer<AnyAnimal> = carps.widen::<Fish>().widen();

        assert_eq!(animals.len(), 1);
        assert_eq!(
            animals.get_first(),
            Ok(AnyAnimal::Fish(Fish::Carp(Carp::new("잉어"))))
        );
    }

    #[test]
    fn producer_is_a_produce_view_of_its_supertypes() {
        let fish: Producer<Fish> = vec![Fish::Carp(Carp::new("잉어"))].into();
        let view: &dyn Produce<AnyAnimal> = &fish;

        let mut animals = Cage::<AnyAnimal>::new();
        animals.move_from_producer(view);

        assert_eq!(
            animals.get_all(),
            &[AnyAnimal::Fish(Fish::Carp(Carp::new("잉어")))]
        );
        assert_eq!(fish.len(), 1);
    }
}
