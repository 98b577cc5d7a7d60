#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    choose_target, init_logging, randomize_fleet, FleetSpec, GameOutcome, Grid, Phase, Session,
    Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Headless two-board naval combat engine", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play seeded games with the heuristic on both sides and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Print a randomly generated standard fleet.
    Fleet {
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Play one game to the end. The player side picks targets from the
/// concealed opponent grid with the same heuristic the opponent uses.
/// Returns the winner and the number of shots each side fired.
#[cfg(feature = "std")]
fn play_game(seed: u64) -> anyhow::Result<(GameOutcome, usize, usize)> {
    let mut session = Session::with_seed(FleetSpec::standard(), seed);
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    session.randomize(Side::Player)?;
    session.start_battle()?;

    let (mut player_shots, mut opponent_shots) = (0, 0);
    while session.phase() == Phase::Battle {
        let view = session.snapshot(Side::Opponent, false);
        let (x, y) = choose_target(&view, &mut rng)
            .ok_or_else(|| anyhow::anyhow!("no target left while battle is running"))?;
        let turn = session.player_shot(x, y)?;
        player_shots += 1;
        opponent_shots += turn.replies.len();
        if let Some(err) = turn.reply_error {
            anyhow::bail!("opponent reply failed: {}", err);
        }
    }
    let outcome = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("battle ended without an outcome"))?;
    Ok((outcome, player_shots, opponent_shots))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed, games } => {
            let seed = seed_or_random(seed);
            log::info!("simulating {} games from seed {}", games, seed);
            let (mut player_wins, mut opponent_wins, mut shots) = (0u32, 0u32, 0usize);
            for g in 0..games {
                let (outcome, p, o) = play_game(seed.wrapping_add(u64::from(g) * 2))?;
                match outcome {
                    GameOutcome::PlayerWon => player_wins += 1,
                    GameOutcome::OpponentWon => opponent_wins += 1,
                }
                shots += p + o;
            }
            let winner = match player_wins.cmp(&opponent_wins) {
                std::cmp::Ordering::Greater => Some("player"),
                std::cmp::Ordering::Less => Some("opponent"),
                std::cmp::Ordering::Equal => None,
            };
            let result = json!({
                "seed": seed,
                "games": games,
                "player_wins": player_wins,
                "opponent_wins": opponent_wins,
                "shots": shots,
                "winner": winner,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Fleet { seed } => {
            let mut rng = SmallRng::seed_from_u64(seed_or_random(seed));
            let mut grid = Grid::new();
            randomize_fleet(&mut grid, &FleetSpec::standard(), &mut rng)?;
            println!("{}", grid.snapshot(true));
        }
    }
    Ok(())
}
