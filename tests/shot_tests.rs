use seabattle::{BoardError, CellState, Grid, Orientation, ShotOutcome, BOARD_SIZE};

#[test]
fn test_miss_then_repeat() {
    let mut grid = Grid::new();
    grid.place(0, 0, 2, Orientation::Horizontal).unwrap();

    assert_eq!(grid.shoot(5, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(grid.cell(5, 5), Some(CellState::Miss));
    let before = grid.clone();
    assert_eq!(grid.shoot(5, 5).unwrap(), ShotOutcome::Repeat);
    assert_eq!(grid, before);
}

#[test]
fn test_hit_then_sink_marks_perimeter() {
    let mut grid = Grid::new();
    grid.place(0, 0, 2, Orientation::Horizontal).unwrap();

    assert_eq!(grid.shoot(0, 0).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.cell(0, 0), Some(CellState::Hit));
    assert_eq!(grid.shoot(0, 0).unwrap(), ShotOutcome::Repeat);

    let ship = *grid.ship_at(1, 0).unwrap();
    assert_eq!(grid.shoot(1, 0).unwrap(), ShotOutcome::Sunk(ship));
    assert_eq!(grid.cell(0, 0), Some(CellState::SunkPart));
    assert_eq!(grid.cell(1, 0), Some(CellState::SunkPart));

    for (x, y) in [(0, 1), (1, 1), (2, 1), (2, 0)] {
        assert_eq!(grid.cell(x, y), Some(CellState::Miss), "({}, {})", x, y);
    }
    let snapshot = grid.snapshot(true);
    assert_eq!(snapshot.count(CellState::Miss), 4);
    assert_eq!(snapshot.count(CellState::SunkPart), 2);
    assert_eq!(grid.shoot(2, 0).unwrap(), ShotOutcome::Repeat);
    assert!(grid.all_ships_sunk());
}

#[test]
fn test_perimeter_keeps_earlier_shots() {
    let mut grid = Grid::new();
    grid.place(4, 4, 1, Orientation::Vertical).unwrap();
    grid.place(4, 7, 2, Orientation::Horizontal).unwrap();

    grid.shoot(3, 3).unwrap();
    assert!(matches!(grid.shoot(4, 4).unwrap(), ShotOutcome::Sunk(_)));

    let snapshot = grid.snapshot(true);
    // eight neighbours of a single cell, one of them already a miss
    assert_eq!(snapshot.count(CellState::Miss), 8);
    assert_eq!(grid.cell(4, 7), Some(CellState::ShipPart));
    assert_eq!(grid.cell(4, 6), Some(CellState::Empty));
    assert!(!grid.all_ships_sunk());
}

#[test]
fn test_all_ships_sunk_requires_every_ship() {
    let mut grid = Grid::new();
    grid.place(0, 0, 1, Orientation::Horizontal).unwrap();
    grid.place(9, 9, 1, Orientation::Horizontal).unwrap();

    grid.shoot(0, 0).unwrap();
    assert!(!grid.all_ships_sunk());
    grid.shoot(9, 9).unwrap();
    assert!(grid.all_ships_sunk());
}

#[test]
fn test_out_of_bounds_shot() {
    let mut grid = Grid::new();
    assert_eq!(
        grid.shoot(BOARD_SIZE, 0).unwrap_err(),
        BoardError::OutOfBounds { x: BOARD_SIZE, y: 0 }
    );
    assert_eq!(grid.unresolved_count(), BOARD_SIZE * BOARD_SIZE);
}
