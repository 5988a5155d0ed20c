//! Hand Juggle headless demo
//!
//! Plays rounds with the autopilot standing in for the camera and logs the
//! results.
//!
//! Usage: `hand-juggle [CONFIG] [--rounds N] [--seed N] [--realtime]`
//!
//! Without `--realtime` the clock is advanced one 60 Hz frame per loop
//! iteration, so a run finishes as fast as the CPU allows.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hand_juggle::platform::{Clock, ManualClock, MonotonicClock, ScriptedDetector};
use hand_juggle::sim::{Autopilot, RoundPhase};
use hand_juggle::{Command, Driver, GameConfig};

const FRAME: Duration = Duration::from_micros(16_667);
/// Rounds longer than this are stopped so the demo always finishes
const MAX_ROUND: Duration = Duration::from_secs(120);

/// Headless Hand Juggle rounds driven by a synthetic hand source
#[derive(Debug, Parser)]
#[command(name = "hand-juggle", version, about)]
struct Args {
    /// JSON config file; every field is optional
    config: Option<PathBuf>,

    /// Number of rounds to play
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Pace frames against the real clock instead of advancing a manual one
    #[arg(long)]
    realtime: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    log::info!("Hand Juggle starting ({} rounds, seed {})", args.rounds, args.seed);

    let finished = if args.realtime {
        let driver = Driver::new(config, MonotonicClock::new(), ScriptedDetector::ready());
        play(driver, &args, || std::thread::sleep(FRAME))
    } else {
        let clock = ManualClock::new();
        let driver = Driver::new(config, clock.clone(), ScriptedDetector::ready());
        play(driver, &args, move || clock.advance(FRAME))
    };

    if finished {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run the requested number of rounds, calling `wait` between frames.
/// Returns false if a round could not be played to the end.
fn play<C: Clock>(
    mut driver: Driver<C, ScriptedDetector>,
    args: &Args,
    mut wait: impl FnMut(),
) -> bool {
    let sender = driver.sender();
    let mut pilot = Autopilot::new(args.seed, 2, 12.0);
    log::info!(
        "Countdown policy: {}",
        driver.round().config().countdown_policy.as_str()
    );

    let mut best = 0;
    for round in 1..=args.rounds {
        log::info!("Round {round}: Get Ready!");
        if let Err(err) = sender.send(Command::Start) {
            log::error!("Round {round}: could not start: {err}");
            return false;
        }
        let mut play_time = Duration::ZERO;

        loop {
            let report = driver.frame();
            if let Some(summary) = report.finished {
                log::info!("Round {round}: {}", summary.message());
                best = best.max(summary.score);
                break;
            }
            if report.phase == RoundPhase::Idle {
                let state = driver.round().state();
                let reason = state.message.as_deref().unwrap_or("no reason given");
                log::error!("Round {round}: back to {} ({reason})", report.phase.as_str());
                return false;
            }

            if report.phase == RoundPhase::Playing {
                play_time += FRAME;
                if play_time >= MAX_ROUND {
                    if let Err(err) = sender.send(Command::Stop) {
                        log::error!("Round {round}: could not stop: {err}");
                        return false;
                    }
                }
            }

            let hands = pilot.hands_for(driver.round().state(), driver.field());
            if let Err(err) = sender.send(Command::Hands(hands)) {
                log::error!("Round {round}: hand update dropped: {err}");
                return false;
            }
            wait();
        }
    }

    log::info!("Done: {} rounds, best {best}s", args.rounds);
    true
}
