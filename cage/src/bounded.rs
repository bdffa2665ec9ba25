//!
//! Cages that constrain their element type.
//!

use std::io::Write;

use crate::{Animal, CageError, CageResult};

///
/// A cage for animals only.
///
/// ```compile_fail
/// use cage::AnimalCage;
///
/// let words = AnimalCage::<String>::new();
/// ```
///
#[derive(Clone, Debug)]
pub struct AnimalCage<T>
where
    T: Animal,
{
    animals: Vec<T>,
}

impl<T> AnimalCage<T>
where
    T: Animal,
{
    pub fn new() -> Self {
        Self { animals: vec![] }
    }

    pub fn put(&mut self, animal: T) {
        self.animals.push(animal);
    }

    pub fn get_first(&self) -> CageResult<&T> {
        self.animals.first().ok_or(CageError::EmptyContainer)
    }

    pub fn names(&self) -> Vec<&str> {
        self.animals.iter().map(Animal::name).collect()
    }
}

impl<T> AnimalCage<T>
where
    T: Animal + Clone,
{
    pub fn move_from(&mut self, source: &AnimalCage<T>) {
        self.animals.extend_from_slice(&source.animals);
        tracing::trace!(
            moved = source.animals.len(),
            total = self.animals.len(),
            "move_from"
        );
    }
}

impl<T> Default for AnimalCage<T>
where
    T: Animal,
{
    fn default() -> Self {
        Self::new()
    }
}

///
/// A cage for animals that can be ranked against each other.
///
/// Both bounds are checked wherever the type is named. Fish have no ordering:
///
/// ```compile_fail
/// use cage::fixture::Fish;
/// use cage::BoundedCage;
///
/// let fish = BoundedCage::<Fish>::new(vec![]);
/// ```
///
/// Neither does the whole hierarchy, even though every bird has one:
///
/// ```compile_fail
/// use cage::fixture::AnyAnimal;
/// use cage::BoundedCage;
///
/// fn print(animals: &BoundedCage<AnyAnimal>) {
///     animals.print_sorted();
/// }
/// ```
///
#[derive(Clone, Debug)]
pub struct BoundedCage<T>
where
    T: Animal + Ord,
{
    animals: Vec<T>,
}

impl<T> BoundedCage<T>
where
    T: Animal + Ord,
{
    pub fn new(animals: Vec<T>) -> Self {
        Self { animals }
    }

    pub fn put(&mut self, animal: T) {
        self.animals.push(animal);
    }

    pub fn get_first(&self) -> CageResult<&T> {
        self.animals.first().ok_or(CageError::EmptyContainer)
    }

    /// Names in the ascending order given by `T: Ord`. For birds, ties in size
    /// are broken by name.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut sorted: Vec<&T> = self.animals.iter().collect();
        sorted.sort();
        sorted.into_iter().map(Animal::name).collect()
    }

    /// Write the sorted names as one line, e.g. `["참새", "독수리"]`.
    pub fn print_sorted_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{:?}", self.sorted_names())
    }

    pub fn print_sorted(&self) {
        println!("{:?}", self.sorted_names());
    }
}
