use cage::fixture::{AnyAnimal, Bird, Carp, Eagle, Fish, GoldFish, Sparrow};
use cage::*;
use rstest::rstest;

fn gold_fish() -> GoldFish {
    GoldFish::new("금붕어")
}

fn fish_of(gold_fish: GoldFish) -> Fish {
    gold_fish.upcast()
}

#[test]
fn generic_cage_needs_no_cast() -> CageResult<()> {
    let mut carps = Cage::new();
    carps.put(Carp::new("잉어"));

    let carp: &Carp = carps.get_first()?;
    assert_eq!(carp.name(), "잉어");
    Ok(())
}

#[test]
fn subtype_elements_go_into_a_supertype_cage() {
    let mut fish = Cage::<Fish>::new();
    fish.put(gold_fish().upcast());

    assert_eq!(fish.get_all(), &[fish_of(gold_fish())]);
}

#[test]
fn move_from_producer_appends_in_order() {
    let mut gold_fish_cage = Cage::new();
    gold_fish_cage.put(GoldFish::new("a"));
    gold_fish_cage.put(GoldFish::new("b"));

    let mut fish_cage = Cage::<Fish>::new();
    fish_cage.put(Carp::new("잉어").upcast());
    fish_cage.move_from_producer(&gold_fish_cage);

    assert_eq!(
        fish_cage.get_all(),
        &[
            Carp::new("잉어").upcast(),
            fish_of(GoldFish::new("a")),
            fish_of(GoldFish::new("b")),
        ]
    );
    assert_eq!(
        gold_fish_cage.get_all(),
        &[GoldFish::new("a"), GoldFish::new("b")]
    );
}

#[test]
fn move_to_consumer_appends_in_order() {
    let mut gold_fish_cage = Cage::new();
    gold_fish_cage.put(gold_fish());

    let mut fish_cage = Cage::<Fish>::new();
    fish_cage.put(Carp::new("잉어").upcast());
    gold_fish_cage.move_to_consumer(&mut fish_cage);

    assert_eq!(
        fish_cage.get_all(),
        &[Carp::new("잉어").upcast(), fish_of(gold_fish())]
    );
    assert_eq!(gold_fish_cage.get_all(), &[gold_fish()]);
}

#[test]
fn use_site_bindings() {
    let mut gold_fish_cage = Cage::<GoldFish>::new();
    gold_fish_cage.put(gold_fish());
    let mut fish_cage = Cage::<Fish>::new();

    // Cage<out Fish> = Cage<GoldFish>
    let out_fish: &dyn Produce<Fish> = &gold_fish_cage;
    assert_eq!(out_fish.get_all(), vec![fish_of(gold_fish())]);

    // Cage<in GoldFish> = Cage<Fish>
    let in_gold_fish: &mut dyn Consume<GoldFish> = &mut fish_cage;
    in_gold_fish.put(gold_fish());
    assert_eq!(fish_cage.get_all(), &[fish_of(gold_fish())]);
}

#[test]
fn move_between_producer_and_consumer_views() {
    let gold_fish_cage: Cage<GoldFish> = vec![gold_fish()].into_iter().collect();
    let mut animal_cage = Cage::<AnyAnimal>::new();

    let source: &dyn Produce<AnyAnimal> = &gold_fish_cage;
    animal_cage.move_from_producer(source);

    let mut fish_cage = Cage::<Fish>::new();
    let destination: &mut dyn Consume<GoldFish> = &mut fish_cage;
    gold_fish_cage.move_to_consumer(destination);

    assert_eq!(animal_cage.len(), 1);
    assert_eq!(fish_cage.len(), 1);
}

#[test]
fn producer_is_covariant() {
    let gold_fish = Producer::new(vec![gold_fish()]);

    let fish: Producer<Fish> = gold_fish.clone().widen();
    let animals: Producer<AnyAnimal> = fish.widen();

    assert_eq!(
        animals.get_all(),
        vec![AnyAnimal::Fish(fish_of(gold_fish.get_first().unwrap()))]
    );
}

#[test]
fn consumer_is_contravariant() {
    let animals = Consumer::<AnyAnimal>::new();

    let mut fish = animals.narrow::<Fish>();
    fish.put(Carp::new("잉어").upcast());

    let mut gold_fish = fish.narrow::<GoldFish>();
    gold_fish.put_all(vec![GoldFish::new("a"), GoldFish::new("b")]);

    assert_eq!(gold_fish.len(), 3);
    assert_eq!(
        gold_fish
            .into_storage()
            .iter()
            .map(|animal| animal.name().to_string())
            .collect::<Vec<_>>(),
        vec!["잉어", "a", "b"]
    );
}

#[test]
fn empty_cage_fails_until_something_is_put() {
    let mut cage = Cage::<Sparrow>::new();
    assert_eq!(cage.get_first(), Err(CageError::EmptyContainer));

    cage.put(Sparrow::default());
    assert_eq!(cage.get_first(), Ok(&Sparrow::default()));
}

#[test]
fn bounded_cage_prints_sorted_names() -> std::io::Result<()> {
    let birds = BoundedCage::<Bird>::new(vec![
        Eagle::default().upcast(),
        Sparrow::default().upcast(),
    ]);

    let mut out = vec![];
    birds.print_sorted_to(&mut out)?;

    assert_eq!(birds.sorted_names(), vec!["참새", "독수리"]);
    assert_eq!(String::from_utf8_lossy(&out), "[\"참새\", \"독수리\"]\n");
    Ok(())
}

#[rstest]
#[case(vec![500, 100], vec!["100", "500"])]
#[case(vec![100, 500], vec!["100", "500"])]
#[case(vec![3, 1, 2], vec!["1", "2", "3"])]
#[case(vec![], vec![])]
fn bounded_cage_sorts_by_size(#[case] sizes: Vec<u32>, #[case] expected: Vec<&str>) {
    let birds = BoundedCage::new(
        sizes
            .into_iter()
            .map(|size| Eagle::new(size.to_string(), size))
            .collect(),
    );

    assert_eq!(birds.sorted_names(), expected);
}

#[test]
fn raw_cage_fails_at_runtime() {
    let mut cage = RawCage::new();
    cage.put(gold_fish());

    assert_eq!(
        cage.get_first_as::<Carp>(),
        Err(CageError::ClassCast {
            target: "Carp",
            actual: "GoldFish",
        })
    );
    assert_eq!(cage.get_first_as::<GoldFish>(), Ok(gold_fish()));
}
