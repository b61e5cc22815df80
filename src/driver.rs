//! Headless round driver
//!
//! Runs one round on two tokio timers (frame and round clock) on a single
//! task, with the autoplayer feeding taps through the loop's tap queue.

use std::future::Future;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::game::bot::{choose_tap, AutoplayPersonality};
use crate::game::game_loop::{GameLoop, GameLoopConfig, GameLoopEvent};
use crate::game::round::RoundPhase;
use crate::game::snapshot;
use crate::game::state::Millis;

/// Status log cadence, in round-clock seconds
const STATUS_LOG_EVERY_SECS: u64 = 10;

/// How a driven round ended up
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub phase: RoundPhase,
    pub score: i32,
    pub time_left: u32,
    pub frames: u64,
    pub birds_spawned: u32,
    pub birds_hit: u32,
    pub birds_expired: u32,
}

/// Drive a single round until it is cleared, runs out of time, or
/// `shutdown` resolves.
pub async fn run_round<F>(config: &GameConfig, shutdown: F) -> RoundSummary
where
    F: Future<Output = ()>,
{
    let mut game = GameLoop::new(GameLoopConfig::from(config), config.rng_seed);
    let personality = AutoplayPersonality::new(config.autoplay_tap_chance);
    let mut bot_rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    let taps = game.tap_sender();

    let mut frame_ticker = interval(Duration::from_millis(config.frame_interval_ms));
    frame_ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut second_ticker = interval(Duration::from_millis(config.second_interval_ms));
    second_ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick of an interval fires immediately; the round clock starts a full second in
    second_ticker.tick().await;

    let mut summary = RoundSummary {
        phase: RoundPhase::Playing,
        score: 0,
        time_left: game.round().time_left,
        frames: 0,
        birds_spawned: 0,
        birds_hit: 0,
        birds_expired: 0,
    };
    let mut seconds: u64 = 0;

    info!(
        "Round started: {}s on the clock, clear at {}, canvas {}x{}",
        config.round_seconds, config.clear_score, config.canvas.width, config.canvas.height
    );

    let start = Instant::now();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = frame_ticker.tick() => {
                let now = start.elapsed().as_millis() as Millis;

                if let Some(tap) = choose_tap(game.birds(), &game.config().spawn.kinds, &personality, &mut bot_rng) {
                    if taps.try_submit(tap).is_err() {
                        warn!("Tap queue full, dropping tap");
                    }
                }

                for event in game.frame(config.canvas, now) {
                    tally(&mut summary, &event);
                }
            }
            _ = second_ticker.tick() => {
                let now = start.elapsed().as_millis() as Millis;
                seconds += 1;

                let events = game.second(now);
                for event in &events {
                    tally(&mut summary, event);
                }

                let snap = game.snapshot();
                if seconds % STATUS_LOG_EVERY_SECS == 0 {
                    info!("{} | {} birds", snap.status_line(), snap.glyphs.len());
                }
                match snapshot::encode(&snap) {
                    Ok(bytes) => debug!("Snapshot frame {}: {} bytes", snap.frame, bytes.len()),
                    Err(e) => warn!("Failed to encode snapshot: {}", e),
                }

                if !game.round().is_playing() {
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    let round = game.round();
    summary.phase = round.phase;
    summary.score = round.score;
    summary.time_left = round.time_left;
    summary.frames = game.frame_count();
    summary
}

fn tally(summary: &mut RoundSummary, event: &GameLoopEvent) {
    match event {
        GameLoopEvent::BirdSpawned { .. } => summary.birds_spawned += 1,
        GameLoopEvent::BirdHit { id, kind, score_delta } => {
            summary.birds_hit += 1;
            debug!("Tapped {:?} #{} ({:+})", kind, id, score_delta);
        }
        GameLoopEvent::BirdsExpired { ids } => summary.birds_expired += ids.len() as u32,
        GameLoopEvent::RoundCleared { score } => info!("Stage clear! Final score {}", score),
        GameLoopEvent::RoundOver { score } => info!("Time up. Final score {}", score),
    }
}
