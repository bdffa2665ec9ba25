//! Walk through the variance scenarios, one cage at a time.
//!
//! Usage:
//!   cages [--scenario <scenario>] [-v...]
//!
//! Log output is filtered by `RUST_LOG` when set; every `-v` raises the
//! default level by one step.

use cage::fixture::{AnyAnimal, Bird, Carp, Eagle, Fish, GoldFish, Sparrow};
use cage::*;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "cages", version, about = "Variance rules, demonstrated with cages")]
struct Args {
    /// Which scenario to run
    #[arg(long, short, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Scenario {
    All,
    Raw,
    Invariant,
    UseSite,
    Declaration,
    Bounded,
    Reify,
}

fn main() -> CageResult<()> {
    let args = Args::parse();
    configure_tracing(args.verbose);
    tracing::info!(scenario = ?args.scenario, "running");

    let run = |scenario: Scenario| args.scenario == Scenario::All || args.scenario == scenario;

    if run(Scenario::Raw) {
        raw()?;
    }
    if run(Scenario::Invariant) {
        invariant()?;
    }
    if run(Scenario::UseSite) {
        use_site()?;
    }
    if run(Scenario::Declaration) {
        declaration()?;
    }
    if run(Scenario::Bounded) {
        bounded();
    }
    if run(Scenario::Reify) {
        reify();
    }

    Ok(())
}

fn configure_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();
}

fn heading(title: &str) {
    println!();
    println!("== {} ==", title);
}

fn raw() -> CageResult<()> {
    heading("raw cage: casts are checked at runtime");

    let mut cage = RawCage::new();
    cage.put(Carp::new("잉어"));
    let carp: Carp = cage.get_first_as()?;
    println!("cast to Carp: {}", carp.name());

    let mut mixed = RawCage::new();
    mixed.put(GoldFish::new("금붕어"));
    match mixed.get_first_as::<Carp>() {
        Ok(carp) => println!("unexpectedly got {}", carp.name()),
        Err(err) => println!("cast to Carp: {}", err),
    }

    Ok(())
}

fn invariant() -> CageResult<()> {
    heading("invariant cage");

    let mut carps = Cage::new();
    carps.put(Carp::new("잉어"));
    let carp: &Carp = carps.get_first()?;
    println!("Cage<Carp>::get_first: {}", carp.name());

    let gold_fish_cage: Cage<GoldFish> = std::iter::once(GoldFish::new("금붕어")).collect();
    let mut more_gold_fish = Cage::new();
    more_gold_fish.move_from(&gold_fish_cage);
    println!(
        "Cage<GoldFish>::move_from(&Cage<GoldFish>): {} animal(s)",
        more_gold_fish.len()
    );

    println!("Cage<Fish>::move_from(&Cage<GoldFish>): does not compile (mismatched types)");
    println!("Cage<Fish> = Cage<GoldFish>: does not compile (mismatched types)");

    match Cage::<Eagle>::new().get_first() {
        Ok(eagle) => println!("unexpectedly got {}", eagle.name()),
        Err(err) => println!("empty Cage<Eagle>::get_first: {}", err),
    }

    Ok(())
}

fn use_site() -> CageResult<()> {
    heading("use-site variance");

    let mut gold_fish_cage = Cage::<GoldFish>::new();
    gold_fish_cage.put(GoldFish::new("금붕어"));

    let mut fish_cage = Cage::<Fish>::new();
    fish_cage.put(GoldFish::new("금붕어").upcast());
    fish_cage.move_from_producer(&gold_fish_cage);
    println!(
        "Cage<Fish>::move_from_producer(&Cage<GoldFish>): {} animal(s)",
        fish_cage.len()
    );

    let mut other_fish_cage = Cage::<Fish>::new();
    gold_fish_cage.move_to_consumer(&mut other_fish_cage);
    println!(
        "Cage<GoldFish>::move_to_consumer(&mut Cage<Fish>): {} animal(s)",
        other_fish_cage.len()
    );

    let out_fish: &dyn Produce<Fish> = &gold_fish_cage;
    println!(
        "Cage<out Fish> = Cage<GoldFish>: first is {}",
        out_fish.get_first()?.name()
    );

    let in_gold_fish: &mut dyn Consume<GoldFish> = &mut fish_cage;
    in_gold_fish.put(GoldFish::new("금붕어"));
    println!("Cage<in GoldFish> = Cage<Fish>: put accepted");

    println!("Produce<Fish>::put: does not compile (no method `put`)");
    println!("Consume<GoldFish>::get_first: does not compile (no method `get_first`)");

    Ok(())
}

fn declaration() -> CageResult<()> {
    heading("declaration-site variance");

    let fish: Producer<Fish> = vec![Fish::Carp(Carp::new("잉어"))].into();
    let animals: Producer<AnyAnimal> = fish.widen();
    println!(
        "Producer<AnyAnimal> = Producer<Fish>: first is {}",
        animals.get_first()?.name()
    );

    let mut gold_fish = Consumer::<AnyAnimal>::new().narrow::<GoldFish>();
    gold_fish.put(GoldFish::new("금붕어"));
    println!(
        "Consumer<GoldFish> = Consumer<AnyAnimal>: {} animal(s) stored",
        gold_fish.len()
    );

    println!("Producer<Fish> = Producer<AnyAnimal>: does not compile (no upcast to Fish)");
    println!("Consumer<AnyAnimal> = Consumer<Fish>: does not compile (no upcast to Fish)");

    Ok(())
}

fn bounded() {
    heading("bounded cage");

    let birds = BoundedCage::<Bird>::new(vec![
        Eagle::default().upcast(),
        Sparrow::default().upcast(),
    ]);
    birds.print_sorted();

    println!("BoundedCage<Fish>: does not compile (Fish: Ord not satisfied)");
}

fn reify() {
    use cage::reify::{describe, filter_is_instance, has_any_instance_of, TypeToken};
    use std::any::Any;

    heading("type tokens");

    println!("{}", describe(&3, TypeToken::<i32>::of()));
    println!("{}", describe(&"ABC", TypeToken::<&str>::of()));

    let numbers: Vec<Box<dyn Any>> = vec![Box::new(1i32), Box::new(2f32), Box::new(3f64)];
    println!(
        "any f32: {}, f64 instances: {:?}",
        has_any_instance_of(&numbers, TypeToken::<f32>::of()),
        filter_is_instance(&numbers, TypeToken::<f64>::of())
    );
}
