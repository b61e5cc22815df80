//! Game loop
//!
//! Owns the current bird snapshot and round state and sequences the two
//! cooperative ticks:
//! - `frame`: taps, spawn, advance (~60 Hz)
//! - `second`: round clock, clear/over checks, expiry (1 Hz)
//!
//! Engine functions never mutate in place; each tick swaps in the snapshot
//! they return.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{GameConfig, SpawnConfig};
use crate::game::input_buffer::{Tap, TapBuffer, TapSender};
use crate::game::round::{RoundEndReason, RoundState};
use crate::game::snapshot::FrameSnapshot;
use crate::game::state::{topmost_at, Bird, BirdId, BirdKind, Canvas, Millis};
use crate::game::systems::{expiry, motion, spawn};
use crate::util::vec2::Vec2;

/// Loop parameters
#[derive(Debug, Clone)]
pub struct GameLoopConfig {
    pub spawn: SpawnConfig,
    pub max_age_ms: Millis,
    pub round_seconds: u32,
    pub clear_score: i32,
    pub tap_queue_capacity: usize,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for GameLoopConfig {
    fn from(config: &GameConfig) -> Self {
        Self {
            spawn: config.spawn.clone(),
            max_age_ms: config.max_age_ms,
            round_seconds: config.round_seconds,
            clear_score: config.clear_score,
            tap_queue_capacity: config.tap_queue_capacity,
        }
    }
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopEvent {
    BirdSpawned { id: BirdId, kind: BirdKind },
    BirdHit { id: BirdId, kind: BirdKind, score_delta: i32 },
    BirdsExpired { ids: Vec<BirdId> },
    RoundCleared { score: i32 },
    RoundOver { score: i32 },
}

pub struct GameLoop {
    config: GameLoopConfig,
    birds: Vec<Bird>,
    round: RoundState,
    taps: TapBuffer,
    rng: StdRng,
    next_bird_id: BirdId,
    frame: u64,
}

impl GameLoop {
    /// New loop. A seed makes spawning reproducible.
    pub fn new(config: GameLoopConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let round = RoundState::new(config.round_seconds, config.clear_score);
        let taps = TapBuffer::new(config.tap_queue_capacity);

        Self {
            config,
            birds: Vec::new(),
            round,
            taps,
            rng,
            next_bird_id: 1,
            frame: 0,
        }
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn config(&self) -> &GameLoopConfig {
        &self.config
    }

    /// Frames run since start (or restart)
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Handle for producers on other threads
    pub fn tap_sender(&self) -> TapSender {
        self.taps.sender()
    }

    /// Queue a tap for the next frame. False if the queue is full.
    pub fn queue_tap(&self, tap: Tap) -> bool {
        self.taps.try_submit(tap)
    }

    /// Render view of the current state
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.frame, &self.round, &self.birds)
    }

    /// One motion frame: apply queued taps, maybe spawn, advance.
    pub fn frame(&mut self, canvas: Canvas, now: Millis) -> Vec<GameLoopEvent> {
        let taps = self.taps.drain();
        if !self.round.is_playing() {
            return Vec::new();
        }

        let mut events = Vec::new();

        for tap in taps {
            if let Some(event) = self.apply_tap(tap.point) {
                events.push(event);
            }
        }

        let slot = spawn::SpawnSlot {
            id: self.next_bird_id,
            now,
        };
        if let Some(bird) = spawn::spawn_candidate(&self.birds, &self.config.spawn, canvas, slot, &mut self.rng) {
            debug!("Spawned {:?} #{} at ({:.1}, {:.1})", bird.kind, bird.id, bird.position.x, bird.position.y);
            events.push(GameLoopEvent::BirdSpawned {
                id: bird.id,
                kind: bird.kind,
            });
            self.next_bird_id += 1;
            self.birds.push(bird);
        }

        self.birds = motion::advance(&self.birds, canvas);
        self.frame += 1;

        events
    }

    /// One second of round clock. Expiry runs only while the round goes on.
    pub fn second(&mut self, now: Millis) -> Vec<GameLoopEvent> {
        match self.round.tick_second() {
            Some(RoundEndReason::ScoreReached) => {
                info!("Round cleared with score {}", self.round.score);
                vec![GameLoopEvent::RoundCleared {
                    score: self.round.score,
                }]
            }
            Some(RoundEndReason::TimeUp) => {
                info!("Round over with score {}", self.round.score);
                vec![GameLoopEvent::RoundOver {
                    score: self.round.score,
                }]
            }
            None if self.round.is_playing() => {
                let survivors = expiry::expire(&self.birds, now, self.config.max_age_ms);
                if survivors.len() == self.birds.len() {
                    return Vec::new();
                }
                let ids: Vec<BirdId> = self
                    .birds
                    .iter()
                    .filter(|b| b.age(now) >= self.config.max_age_ms)
                    .map(|b| b.id)
                    .collect();
                debug!("Expired {} birds", ids.len());
                self.birds = survivors;
                vec![GameLoopEvent::BirdsExpired { ids }]
            }
            None => Vec::new(),
        }
    }

    /// Start a fresh round: score, clock and birds reset, queued taps dropped
    pub fn restart(&mut self) {
        self.round.restart();
        self.birds.clear();
        self.taps.drain();
        self.frame = 0;
        info!("Round restarted");
    }

    /// Remove the bird under `point` and score it
    fn apply_tap(&mut self, point: Vec2) -> Option<GameLoopEvent> {
        let (id, kind) = topmost_at(&self.birds, point).map(|b| (b.id, b.kind))?;
        let score_delta = self.config.spawn.kinds.spec(kind).score;

        self.birds.retain(|b| b.id != id);
        self.round.apply_score(score_delta);
        debug!("Hit {:?} #{} ({:+}), score {}", kind, id, score_delta, self.round.score);

        Some(GameLoopEvent::BirdHit { id, kind, score_delta })
    }

    #[cfg(test)]
    fn insert_bird(&mut self, bird: Bird) {
        self.birds.push(bird);
    }
}
