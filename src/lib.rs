//! Bird Hunt engine library
//!
//! Headless core of a bird-hunting arcade round: birds fly around a bounded
//! canvas, bounce off its edges, spawn under per-kind and total caps, expire
//! after a few seconds, and score when tapped.
//!
//! - [`game::systems`] - the motion/spawn/expiry engine (pure snapshot functions)
//! - [`game::game_loop`] - frame and round-clock sequencing
//! - [`driver`] - tokio timers driving one round headlessly

pub mod config;
pub mod driver;
pub mod game;
pub mod util;
