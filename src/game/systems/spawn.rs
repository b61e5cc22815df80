//! Bird spawning system
//! Adds at most one bird per frame, throttled by a fixed probability and by
//! the per-kind and global population caps

use rand::Rng;
use smallvec::SmallVec;

use crate::config::SpawnConfig;
use crate::game::state::{count_by_kind, Bird, BirdId, BirdKind, Canvas, Millis, KIND_COUNT};
use crate::util::vec2::Vec2;

/// Identity and birth time handed to a freshly spawned bird
#[derive(Debug, Clone, Copy)]
pub struct SpawnSlot {
    pub id: BirdId,
    pub now: Millis,
}

/// Kinds that still have headroom under their own cap
pub fn kinds_with_headroom(birds: &[Bird], config: &SpawnConfig) -> SmallVec<[BirdKind; KIND_COUNT]> {
    let counts = count_by_kind(birds);
    BirdKind::ALL
        .iter()
        .copied()
        .filter(|kind| counts[kind.index()] < config.kinds.spec(*kind).max_count)
        .collect()
}

/// Roll for a spawn and build the new bird if one is due.
///
/// Returns `None` when the canvas is degenerate, the global cap is reached,
/// the roll fails, or every kind is at its cap.
pub fn spawn_candidate<R: Rng + ?Sized>(
    birds: &[Bird],
    config: &SpawnConfig,
    canvas: Canvas,
    slot: SpawnSlot,
    rng: &mut R,
) -> Option<Bird> {
    if canvas.is_degenerate() || birds.len() >= config.max_total {
        return None;
    }

    if rng.gen::<f32>() >= config.probability {
        return None;
    }

    let available = kinds_with_headroom(birds, config);
    if available.is_empty() {
        return None;
    }
    let kind = available[rng.gen_range(0..available.len())];

    let size = config.kinds.size_of(kind, config.base_size);
    let radius = size * 0.5;
    let position = Vec2::new(
        random_centre(rng, canvas.width, radius),
        random_centre(rng, canvas.height, radius),
    );
    let velocity = Vec2::new(random_speed(rng, config), random_speed(rng, config));

    Some(Bird::new(slot.id, kind, position, velocity, size, slot.now))
}

/// Snapshot form of [`spawn_candidate`]: the birds plus the new one, if any
pub fn maybe_spawn<R: Rng + ?Sized>(
    birds: &[Bird],
    config: &SpawnConfig,
    canvas: Canvas,
    slot: SpawnSlot,
    rng: &mut R,
) -> Vec<Bird> {
    let mut next = birds.to_vec();
    if let Some(bird) = spawn_candidate(birds, config, canvas, slot, rng) {
        next.push(bird);
    }
    next
}

/// Uniform centre coordinate in `[radius, extent - radius]`
fn random_centre<R: Rng + ?Sized>(rng: &mut R, extent: f32, radius: f32) -> f32 {
    let span = extent - 2.0 * radius;
    if span <= 0.0 {
        return extent * 0.5;
    }
    radius + rng.gen::<f32>() * span
}

/// Random magnitude in the configured range with a random sign
fn random_speed<R: Rng + ?Sized>(rng: &mut R, config: &SpawnConfig) -> f32 {
    let magnitude = if config.speed_max > config.speed_min {
        rng.gen_range(config.speed_min..config.speed_max)
    } else {
        config.speed_min
    };
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
