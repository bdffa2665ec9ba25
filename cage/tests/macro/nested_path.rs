mod zoo {
    use cage::Animal;

    #[derive(Animal, Clone)]
    pub enum Pond {
        Frog(super::Frog),
    }
}

#[derive(cage::Animal, Clone)]
#[animal(extends(zoo::Pond))]
pub struct Frog {
    name: String,
}

fn main() {
    use cage::{Animal, Cage, Produce};

    let mut frogs = Cage::new();
    frogs.put(Frog {
        name: "frog".to_string(),
    });

    let mut pond = Cage::<zoo::Pond>::new();
    pond.move_from_producer(&frogs);

    assert_eq!(pond.get_first().unwrap().name(), "frog");
    let _: &dyn Produce<zoo::Pond> = &frogs;
}
