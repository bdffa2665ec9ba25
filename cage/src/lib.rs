//!
//! Containers whose type parameter carries a declared variance.
//!
//! Given `GoldFish <: Fish <: AnyAnimal`, the containers relate like this:
//!
//! ```text
//!  Cage<T>          Producer<T>        Consumer<T>
//!  (invariant)      (out T)            (in T)
//!
//!  Cage<AnyAnimal>  Producer<AnyAnimal>  Consumer<GoldFish>
//!        x                ^                    ^
//!  Cage<Fish>       Producer<Fish>       Consumer<Fish>
//!        x                ^                    ^
//!  Cage<GoldFish>   Producer<GoldFish>   Consumer<AnyAnimal>
//! ```
//!
//! `^` reads "may be used as". The invariant `Cage` relates to nothing but
//! itself, yet a single call may still ask for a read-only (`Produce<T>`)
//! or write-only (`Consume<T>`) view of it.
//!

extern crate self as cage;

pub use cage_macros::*;

pub mod animal;
pub mod bounded;
pub mod consumer;
pub mod fixture;
pub mod invariant;
pub mod producer;
pub mod raw;
#[cfg(feature = "reify")]
pub mod reify;
pub mod variance;

pub use crate::animal::{Animal, Subtype};
pub use crate::bounded::{AnimalCage, BoundedCage};
pub use crate::consumer::Consumer;
pub use crate::invariant::Cage;
pub use crate::producer::Producer;
pub use crate::raw::RawCage;
pub use crate::variance::{Consume, Produce};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CageError {
    #[error("Container is empty")]
    EmptyContainer,

    #[error("Cannot cast {actual} to {target}")]
    ClassCast {
        target: &'static str,
        actual: &'static str,
    },
}

pub type CageResult<T> = Result<T, CageError>;
