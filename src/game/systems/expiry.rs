use crate::game::state::{Bird, Millis};

/// Drop birds whose age has reached `max_age`. Survivors keep their order
/// and every field.
pub fn expire(birds: &[Bird], now: Millis, max_age: Millis) -> Vec<Bird> {
    birds.iter().filter(|b| b.age(now) < max_age).cloned().collect()
}
