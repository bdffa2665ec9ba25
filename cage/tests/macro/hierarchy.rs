use cage::{Animal, CageError, Subtype};

#[derive(Animal, Clone, Debug, PartialEq)]
#[animal(extends(Reptile, Creature))]
pub struct Gecko {
    name: String,
}

#[derive(Animal, Clone, Debug, PartialEq)]
#[animal(extends(Creature))]
pub enum Reptile {
    Gecko(Gecko),
}

#[derive(Animal, Clone, Debug, PartialEq)]
#[animal(extends(Creature))]
pub struct Snail {
    name: String,
    shell: bool,
}

#[derive(Animal, Clone, Debug, PartialEq)]
pub enum Creature {
    Reptile(Reptile),
    Snail(Snail),
}

fn main() {
    let gecko = Gecko {
        name: "gecko".to_string(),
    };

    let creature: Creature = gecko.clone().upcast();
    assert_eq!(creature.name(), "gecko");
    assert_eq!(creature.kind(), "Gecko");
    assert_eq!(Gecko::downcast(creature), Ok(gecko));

    let snail: Creature = Snail {
        name: "snail".to_string(),
        shell: true,
    }
    .upcast();
    assert_eq!(
        Reptile::downcast(snail),
        Err(CageError::ClassCast {
            target: "Reptile",
            actual: "Snail",
        })
    );
}
