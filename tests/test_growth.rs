use walker_tree::{GridPoint, GrowthConfig, PixelState, Simulation, StrategyKind, WalkOutcome};

fn pt(x : i64, y : i64) -> GridPoint {
    GridPoint { x, y }
}

fn scenario(strategy : StrategyKind, seed : u64) -> GrowthConfig {
    GrowthConfig {
        iterations : 500,
        strategy,
        rng_seed : Some(seed),
        seeds : vec![pt(25, 49), pt(25, 48)],
        ..GrowthConfig::init(50, 50)
    }
}

fn snapshot(sim : &Simulation) -> Vec<GridPoint> {
    sim.grid().filled_points().collect()
}

#[test]
fn test_end_to_end_scenario() {
    for &strategy in &[StrategyKind::Biased, StrategyKind::Occupancy] {
        let mut sim = Simulation::init(scenario(strategy, 42)).unwrap();
        let stats = sim.run().unwrap();
        let filled = sim.grid().filled_count();

        assert_eq!(stats.iterations, 500);
        assert!((50..=502).contains(&filled), "{:?} grew {} pixels", strategy, filled);
        for p in sim.grid().filled_points() {
            assert!(sim.bounds().contains(p), "{:?} outside {:?}", p, sim.bounds());
        }
    }
}

#[test]
fn test_growth_is_monotonic() {
    let mut sim = Simulation::init(scenario(StrategyKind::Biased, 3)).unwrap();
    let mut previous = snapshot(&sim);
    let mut previous_bounds = *sim.bounds();

    while !sim.is_finished() {
        sim.step().unwrap();
        let current = snapshot(&sim);
        assert!(current.len() >= previous.len());
        for p in &previous {
            assert_eq!(sim.grid().get(*p), PixelState::Filled, "{:?} was emptied", p);
        }
        let bounds = *sim.bounds();
        assert!(bounds.contains(previous_bounds.min()) && bounds.contains(previous_bounds.max()));
        previous = current;
        previous_bounds = bounds;
    }
}

#[test]
fn test_spawns_land_on_the_tree() {
    for &strategy in &[StrategyKind::Biased, StrategyKind::Occupancy] {
        let mut sim = Simulation::init(scenario(strategy, 17)).unwrap();
        while !sim.is_finished() {
            assert!(sim.grid().is_filled(sim.spawn_point()));
            sim.step().unwrap();
        }
        for _ in 0..200 {
            let spawn = sim.reseed();
            assert!(sim.grid().is_filled(spawn));
            assert!(sim.bounds().contains(spawn));
        }
    }
}

#[test]
fn test_stuck_pixels_touch_existing_tree() {
    for &strategy in &[StrategyKind::Biased, StrategyKind::Occupancy] {
        let mut sim = Simulation::init(scenario(strategy, 5)).unwrap();
        while !sim.is_finished() {
            let before = snapshot(&sim);
            if let WalkOutcome::Stuck { at } = sim.step().unwrap() {
                assert!(!before.contains(&at));
                let neighbours = [pt(at.x, at.y - 1), pt(at.x, at.y + 1), pt(at.x + 1, at.y), pt(at.x - 1, at.y)];
                assert!(
                    neighbours.iter().any(|n| before.contains(n)),
                    "{:?} stuck away from the tree",
                    at
                );
            }
        }
    }
}

#[test]
fn test_fixed_seed_is_deterministic() {
    for &strategy in &[StrategyKind::Biased, StrategyKind::Occupancy] {
        let mut a = Simulation::init(scenario(strategy, 1234)).unwrap();
        let mut b = Simulation::init(scenario(strategy, 1234)).unwrap();
        assert_eq!(a.run().unwrap(), b.run().unwrap());
        assert_eq!(snapshot(&a), snapshot(&b));
        assert_eq!(a.bounds(), b.bounds());
    }
}

#[test]
fn test_step_cap_discards_without_aborting() {
    let config = GrowthConfig { max_walker_steps : 1, ..scenario(StrategyKind::Biased, 8) };
    let mut sim = Simulation::init(config).unwrap();
    let stats = sim.run().unwrap();
    assert_eq!(stats.iterations, 500);
    assert_eq!(stats.stuck + stats.left_grid + stats.step_capped, 500);
    assert_eq!(sim.grid().filled_count(), 2 + stats.stuck as usize);
}

#[test]
fn test_single_pixel_grid() {
    let config = GrowthConfig {
        iterations : 20,
        rng_seed : Some(1),
        ..GrowthConfig::init(1, 1)
    };
    let mut sim = Simulation::init(config).unwrap();
    let stats = sim.run().unwrap();
    assert_eq!(stats.left_grid, 20);
    assert_eq!(sim.grid().filled_count(), 1);
}
