use crate::game::state::{Bird, Canvas};
use crate::util::vec2::Vec2;

/// Advance every bird one frame, reflecting off the canvas edges.
///
/// Reflection only forces the sign of the crossing velocity component; the
/// magnitude is kept. Position is clamped into `[radius, extent - radius]`
/// after the sign fix so a large step cannot leave the canvas.
/// A degenerate canvas (zero extent before layout) returns the birds as-is.
pub fn advance(birds: &[Bird], canvas: Canvas) -> Vec<Bird> {
    if canvas.is_degenerate() {
        return birds.to_vec();
    }

    birds
        .iter()
        .map(|bird| {
            let radius = bird.radius();
            let moved = bird.position + bird.velocity;

            let (x, vx) = reflect_axis(moved.x, bird.velocity.x, radius, canvas.width);
            let (y, vy) = reflect_axis(moved.y, bird.velocity.y, radius, canvas.height);

            Bird {
                position: Vec2::new(x, y),
                velocity: Vec2::new(vx, vy),
                ..bird.clone()
            }
        })
        .collect()
}

/// Bounce one axis. Returns (clamped position, velocity component).
fn reflect_axis(position: f32, velocity: f32, radius: f32, extent: f32) -> (f32, f32) {
    let near = radius;
    let far = extent - radius;

    // Axis narrower than the glyph: no valid interval, pin to the middle
    if near > far {
        return (extent * 0.5, velocity);
    }

    let velocity = if position < near {
        velocity.abs()
    } else if position > far {
        -velocity.abs()
    } else {
        velocity
    };

    (position.clamp(near, far), velocity)
}
