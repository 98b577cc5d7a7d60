use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    choose_target, CellState, FleetSpec, GameOutcome, Phase, Session, ShotOutcome, Side,
    BOARD_SIZE,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A seeded game with the heuristic on both sides always ends with
    /// exactly one fleet fully sunk, and every reply chain follows the
    /// hand-off rule.
    #[test]
    fn seeded_game_runs_to_completion(seed in any::<u64>()) {
        let mut session = Session::with_seed(FleetSpec::standard(), seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        session.randomize(Side::Player).unwrap();
        session.start_battle().unwrap();

        let mut player_shots = 0;
        while session.phase() == Phase::Battle {
            prop_assert_eq!(session.turn(), Side::Player);
            let view = session.snapshot(Side::Opponent, false);
            let (x, y) = choose_target(&view, &mut rng).unwrap();
            let turn = session.player_shot(x, y).unwrap();
            player_shots += 1;
            prop_assert!(player_shots <= BOARD_SIZE * BOARD_SIZE);
            prop_assert_ne!(turn.shot.outcome, ShotOutcome::Repeat);

            if turn.shot.outcome.is_hit() {
                prop_assert!(turn.replies.is_empty());
            } else if let Some((last, chain)) = turn.replies.split_last() {
                prop_assert!(chain.iter().all(|r| r.outcome.is_hit()));
                prop_assert!(last.outcome == ShotOutcome::Miss || last.phase == Phase::Ended);
            }
        }

        let loser = match session.outcome().unwrap() {
            GameOutcome::PlayerWon => Side::Opponent,
            GameOutcome::OpponentWon => Side::Player,
        };
        prop_assert!(session.grid(loser).all_ships_sunk());
        prop_assert!(!session.grid(loser.other()).all_ships_sunk());
        prop_assert_eq!(session.snapshot(loser, true).count(CellState::SunkPart), 20);
    }
}
