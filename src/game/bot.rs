use rand::Rng;

use crate::game::input_buffer::Tap;
use crate::game::state::{Bird, KindTable};
use crate::util::vec2::Vec2;

/// Autoplayer traits
#[derive(Debug, Clone)]
pub struct AutoplayPersonality {
    /// Chance per frame of tapping at all
    pub tap_chance: f32,
    /// Fraction of the glyph radius the tap may land off-centre (0 = perfect)
    pub jitter: f32,
}

impl AutoplayPersonality {
    pub fn new(tap_chance: f32) -> Self {
        Self {
            tap_chance,
            jitter: 0.5,
        }
    }
}

/// Pick a tap for this frame, if any.
///
/// Goes for the best-scoring bird on screen and never taps a bird whose
/// score would be negative.
pub fn choose_tap<R: Rng + ?Sized>(
    birds: &[Bird],
    kinds: &KindTable,
    personality: &AutoplayPersonality,
    rng: &mut R,
) -> Option<Tap> {
    if rng.gen::<f32>() >= personality.tap_chance {
        return None;
    }

    let target = birds
        .iter()
        .filter(|b| kinds.spec(b.kind).score > 0)
        .max_by_key(|b| kinds.spec(b.kind).score)?;

    let reach = target.radius() * personality.jitter.clamp(0.0, 1.0);
    let offset = if reach > 0.0 {
        Vec2::new(rng.gen_range(-reach..=reach), rng.gen_range(-reach..=reach))
    } else {
        Vec2::ZERO
    };

    Some(Tap {
        point: target.position + offset,
    })
}
