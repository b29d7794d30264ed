//! Command-line front end for the needlewheel puzzle.
//!
//! Generates a puzzle for the given bomb readings and prints its wheels.
//! With `--solve`, also prints the forced-solve plan, applies it, and submits.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin needlewheel -- --serial AB1CD2 --batteries 2 --lit-indicators 1
//! ```
//!
//! Reproduce a puzzle from its seed and solve it:
//!
//! ```sh
//! cargo run --bin needlewheel -- --seed <HEX64> --solve
//! ```
//!
//! Set `RUST_LOG=info` to see the session log.

use std::process;

use clap::{Parser, ValueEnum};
use needlewheel_game::{BombState, BonusPolicy, PuzzleSession, SessionId, SubmitOutcome};
use needlewheel_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Snapshot,
    Live,
}

impl From<PolicyArg> for BonusPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Snapshot => Self::Snapshot,
            PolicyArg::Live => Self::Live,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle seed as 64 hex digits. A fresh seed is drawn if omitted.
    #[arg(long, value_name = "HEX64")]
    seed: Option<PuzzleSeed>,

    /// Bomb serial number.
    #[arg(long, default_value = "AB1CD2")]
    serial: String,

    /// Number of batteries on the bomb.
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    batteries: usize,

    /// Number of lit indicators on the bomb.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    lit_indicators: usize,

    /// Strikes recorded so far.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    strikes: usize,

    /// Modules already solved.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    solved: usize,

    /// When the bonus wheel is resolved from the bomb state.
    #[arg(long, value_name = "POLICY", default_value = "snapshot")]
    bonus_policy: PolicyArg,

    /// Maximum pattern draws before generation gives up.
    #[arg(long, value_name = "COUNT", default_value_t = needlewheel_generator::DEFAULT_MAX_DRAWS)]
    max_draws: usize,

    /// Session identifier shown in log output.
    #[arg(long, value_name = "ID", default_value_t = 1)]
    session_id: u64,

    /// Print and apply the forced-solve plan, then submit.
    #[arg(long)]
    solve: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.max_draws == 0 {
        eprintln!("--max-draws must be at least 1.");
        process::exit(2);
    }

    let bomb = BombState {
        serial: args.serial.clone(),
        battery_count: args.batteries,
        lit_indicator_count: args.lit_indicators,
        strikes: args.strikes,
        solved_count: args.solved,
    };
    let generator = PuzzleGenerator::with_standard_pool().max_draws(args.max_draws);
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);

    let mut session = match PuzzleSession::generate_with_seed(
        SessionId(args.session_id),
        &generator,
        seed,
        &bomb,
        args.bonus_policy.into(),
    ) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Failed to generate puzzle: {err}");
            process::exit(1);
        }
    };

    print_session(&session, &bomb);

    if !args.solve {
        return;
    }

    session.activate();
    let plan = match session.forced_solve_plan(&bomb, &mut rand::rng()) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("Forced solve failed: {err}");
            process::exit(1);
        }
    };

    println!("Plan:");
    for (i, rotation) in plan.iter().enumerate() {
        println!("  wheel {i}: {:?} x{}", rotation.direction, rotation.steps);
    }
    println!();

    let outcome = session
        .apply_rotations(&plan)
        .and_then(|()| session.submit(&bomb));
    match outcome {
        Ok(SubmitOutcome::Solved(report)) => {
            let slots = report
                .circle_slots()
                .map(|slot| slot.to_string())
                .collect::<Vec<_>>();
            println!("Solved (circle row at slot {}).", slots.join(", "));
            println!("Labels: {}", session.labels().iter().collect::<String>());
        }
        Ok(SubmitOutcome::Strike(_)) => {
            println!("Strike.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Submission failed: {err}");
            process::exit(1);
        }
    }
}

fn print_session(session: &PuzzleSession, bomb: &BombState) {
    println!("Seed:");
    println!("  {}", session.seed());
    println!();

    println!("Wheels:");
    for (i, wheel) in session.wheels().iter().enumerate() {
        println!("  {i}: {wheel}");
    }
    match session.bonus_wheel(bomb) {
        Ok(bonus) => println!("  bonus: {bonus}"),
        Err(err) => println!("  bonus: {err}"),
    }
    println!();

    println!("Labels:");
    println!("  {}", session.labels().iter().collect::<String>());
    println!();
}
