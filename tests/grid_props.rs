use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    randomize_fleet, CellState, FleetSpec, Grid, Orientation, ShotOutcome, BOARD_SIZE,
};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    randomize_fleet(&mut grid, &FleetSpec::standard(), &mut rng).unwrap();
    grid
}

fn touching(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn can_place_implies_place(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
        length in 1..=4usize,
        horizontal in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new();
        for _ in 0..rng.random_range(0..6) {
            let (px, py) = (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
            let _ = grid.place(px, py, rng.random_range(1..=4), Orientation::from(rng.random::<bool>()));
        }
        let before = grid.occupied().count_ones();
        let orientation = Orientation::from(horizontal);
        if grid.can_place(x, y, length, orientation) {
            prop_assert!(grid.place(x, y, length, orientation).is_ok());
            prop_assert_eq!(grid.occupied().count_ones(), before + length);
        } else {
            let copy = grid.clone();
            prop_assert!(grid.place(x, y, length, orientation).is_err());
            prop_assert_eq!(grid, copy);
        }
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let ships = grid.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(!touching(ca, cb), "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn repeat_shot_is_idempotent(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut grid = random_grid(seed);
        let first = grid.shoot(x, y).unwrap();
        prop_assert_ne!(first, ShotOutcome::Repeat);
        let after = grid.clone();
        prop_assert_eq!(grid.shoot(x, y).unwrap(), ShotOutcome::Repeat);
        prop_assert_eq!(grid, after);
    }

    #[test]
    fn sinking_marks_ship_and_perimeter(seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let mut grid = random_grid(seed);
        let ship = grid.ships()[pick.index(grid.ships().len())];
        let mut last = ShotOutcome::Repeat;
        for (x, y) in ship.cells() {
            last = grid.shoot(x, y).unwrap();
        }
        prop_assert_eq!(last, ShotOutcome::Sunk(ship));

        let snapshot = grid.snapshot(true);
        prop_assert_eq!(snapshot.count(CellState::SunkPart), ship.length());
        prop_assert_eq!(snapshot.count(CellState::Miss), ship.mask().halo().count_ones());
        for (x, y) in ship.mask().halo().iter_set_bits() {
            prop_assert_eq!(grid.cell(x, y), Some(CellState::Miss));
        }
    }

    #[test]
    fn all_sunk_iff_every_ship_cell_sunk(seed in any::<u64>(), order in any::<u64>()) {
        let mut grid = random_grid(seed);
        let mut rng = SmallRng::seed_from_u64(order);
        let mut cells: Vec<(usize, usize)> = grid.occupied().iter_set_bits().collect();
        let skip = rng.random_range(0..cells.len());
        let spared = cells.swap_remove(skip);

        for (x, y) in cells {
            grid.shoot(x, y).unwrap();
        }
        prop_assert!(!grid.all_ships_sunk());
        grid.shoot(spared.0, spared.1).unwrap();
        prop_assert!(grid.all_ships_sunk());
        prop_assert_eq!(grid.snapshot(true).count(CellState::SunkPart), 20);
    }
}
