//!
//! A cage without a type parameter.
//!
//! Everything goes in as an `AnyAnimal`, so getting a specific animal back out
//! takes a cast that is only checked at runtime. The generic cages make that
//! cast unnecessary.
//!

use crate::animal::Subtype;
use crate::fixture::AnyAnimal;
use crate::{CageError, CageResult};

#[derive(Clone, Debug, Default)]
pub struct RawCage {
    animals: Vec<AnyAnimal>,
}

impl RawCage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<A: Subtype<AnyAnimal>>(&mut self, animal: A) {
        self.animals.push(<A as Subtype<AnyAnimal>>::upcast(animal));
    }

    pub fn get_first(&self) -> CageResult<&AnyAnimal> {
        self.animals.first().ok_or(CageError::EmptyContainer)
    }

    /// Take the first animal back out as an `A`, failing with
    /// `CageError::ClassCast` if it is some other kind of animal.
    pub fn get_first_as<A: Subtype<AnyAnimal>>(&self) -> CageResult<A> {
        let first = self.get_first()?.clone();

        <A as Subtype<AnyAnimal>>::downcast(first).map_err(|err| {
            tracing::debug!(%err, "unchecked cast failed");
            err
        })
    }

    pub fn move_from(&mut self, source: &RawCage) {
        self.animals.extend_from_slice(&source.animals);
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}
