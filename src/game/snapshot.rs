//! Render snapshot of one frame
//!
//! What a renderer needs and nothing more: one glyph rectangle per bird plus
//! the round status line. Encoded with bincode for hand-off across a process
//! or thread boundary.

use serde::{Deserialize, Serialize};

use crate::game::round::{RoundPhase, RoundState};
use crate::game::state::{Bird, BirdId, BirdKind};
use crate::util::vec2::Vec2;

/// A bird as drawn: top-left corner and square size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub id: BirdId,
    pub kind: BirdKind,
    pub origin: Vec2,
    pub size: f32,
}

impl From<&Bird> for Glyph {
    fn from(bird: &Bird) -> Self {
        Self {
            id: bird.id,
            kind: bird.kind,
            origin: bird.glyph_origin(),
            size: bird.size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub phase: RoundPhase,
    pub score: i32,
    pub clear_score: i32,
    pub time_left: u32,
    /// In draw order (last on top)
    pub glyphs: Vec<Glyph>,
}

impl FrameSnapshot {
    pub fn capture(frame: u64, round: &RoundState, birds: &[Bird]) -> Self {
        Self {
            frame,
            phase: round.phase,
            score: round.score,
            clear_score: round.clear_score,
            time_left: round.time_left,
            glyphs: birds.iter().map(Glyph::from).collect(),
        }
    }

    /// Status line as shown above the canvas
    pub fn status_line(&self) -> String {
        format!(
            "Score: {} / {}  Time: {}s",
            self.score, self.clear_score, self.time_left
        )
    }
}

/// Encode a snapshot using bincode
pub fn encode(snapshot: &FrameSnapshot) -> Result<Vec<u8>, EncodeError> {
    bincode::serde::encode_to_vec(snapshot, bincode::config::standard())
        .map_err(|e| EncodeError(e.to_string()))
}

/// Decode a snapshot using bincode
pub fn decode(data: &[u8]) -> Result<FrameSnapshot, DecodeError> {
    bincode::serde::decode_from_slice(data, bincode::config::standard())
        .map(|(snapshot, _)| snapshot)
        .map_err(|e| DecodeError(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
#[error("Encode error: {0}")]
pub struct EncodeError(String);

#[derive(Debug, thiserror::Error)]
#[error("Decode error: {0}")]
pub struct DecodeError(String);
