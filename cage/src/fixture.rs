//!
//! A fixed animal hierarchy to put in cages.
//!
//! ```text
//!            AnyAnimal
//!           /         \
//!       Fish           Bird
//!      /    \         /    \
//!   Carp  GoldFish Sparrow  Eagle
//! ```
//!
//! A leaf animal needs a `name` to derive `Animal`:
//!
//! ```compile_fail
//! #[derive(cage::Animal)]
//! struct Nameless {
//!     size: u32,
//! }
//! ```
//!

use std::cmp::Ordering;

use crate::Animal;

#[derive(Animal, Clone, Debug, PartialEq, Eq)]
#[animal(extends(Fish, AnyAnimal))]
pub struct Carp {
    name: String,
}

impl Carp {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Animal, Clone, Debug, PartialEq, Eq)]
#[animal(extends(Fish, AnyAnimal))]
pub struct GoldFish {
    name: String,
}

impl GoldFish {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Birds are ordered by size first, then by name, then by kind.
#[derive(Animal, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[animal(extends(Bird, AnyAnimal))]
pub struct Sparrow {
    size: u32,
    name: String,
}

impl Sparrow {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            size,
            name: name.into(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for Sparrow {
    fn default() -> Self {
        Self::new("참새", 100)
    }
}

#[derive(Animal, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[animal(extends(Bird, AnyAnimal))]
pub struct Eagle {
    size: u32,
    name: String,
}

impl Eagle {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            size,
            name: name.into(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for Eagle {
    fn default() -> Self {
        Self::new("독수리", 500)
    }
}

#[derive(Animal, Clone, Debug, PartialEq, Eq)]
#[animal(extends(AnyAnimal))]
pub enum Fish {
    Carp(Carp),
    GoldFish(GoldFish),
}

#[derive(Animal, Clone, Debug)]
#[animal(extends(AnyAnimal))]
pub enum Bird {
    Sparrow(Sparrow),
    Eagle(Eagle),
}

impl Bird {
    pub fn size(&self) -> u32 {
        match self {
            Self::Sparrow(sparrow) => sparrow.size(),
            Self::Eagle(eagle) => eagle.size(),
        }
    }

    fn key(&self) -> (u32, &str, &'static str) {
        (self.size(), self.name(), self.kind())
    }
}

impl PartialEq for Bird {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Bird {}

impl PartialOrd for Bird {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bird {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[derive(Animal, Clone, Debug, PartialEq, Eq)]
pub enum AnyAnimal {
    Fish(Fish),
    Bird(Bird),
}
