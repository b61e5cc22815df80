//! Bird data model
//!
//! Birds, the per-kind data table, and the canvas they fly on.
//! Kinds carry no behavior of their own: everything that varies per kind
//! (score, size, population cap) is a row in [`KindTable`].

use serde::{Deserialize, Serialize};

use crate::util::vec2::Vec2;

/// Caller-assigned bird identifier
pub type BirdId = u64;

/// Milliseconds on the loop clock
pub type Millis = u64;

/// Number of bird kinds (rows in the kind table)
pub const KIND_COUNT: usize = 3;

/// Bird categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BirdKind {
    /// Main target
    Sparrow,
    /// Penalty bird
    Bunting,
    /// Small penalty, larger glyph
    Magpie,
}

impl BirdKind {
    pub const ALL: [BirdKind; KIND_COUNT] = [BirdKind::Sparrow, BirdKind::Bunting, BirdKind::Magpie];

    /// Row index into the kind table
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One row of the kind table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    pub description: &'static str,
    /// Score applied when a bird of this kind is tapped
    pub score: i32,
    /// Multiplier on the base glyph size
    pub size_factor: f32,
    /// Maximum simultaneous birds of this kind
    pub max_count: usize,
}

/// Per-kind data table indexed by [`BirdKind`]
#[derive(Debug, Clone, PartialEq)]
pub struct KindTable {
    specs: [KindSpec; KIND_COUNT],
}

impl Default for KindTable {
    fn default() -> Self {
        Self {
            specs: [
                KindSpec {
                    description: "Sparrow (+5)",
                    score: 5,
                    size_factor: 1.0,
                    max_count: 4,
                },
                KindSpec {
                    description: "Bunting (-5)",
                    score: -5,
                    size_factor: 1.0,
                    max_count: 2,
                },
                KindSpec {
                    description: "Magpie (-2)",
                    score: -2,
                    size_factor: 1.4,
                    max_count: 3,
                },
            ],
        }
    }
}

impl KindTable {
    pub fn new(specs: [KindSpec; KIND_COUNT]) -> Self {
        Self { specs }
    }

    #[inline]
    pub fn spec(&self, kind: BirdKind) -> &KindSpec {
        &self.specs[kind.index()]
    }

    /// Replace one kind's population cap
    pub fn with_cap(mut self, kind: BirdKind, max_count: usize) -> Self {
        self.specs[kind.index()].max_count = max_count;
        self
    }

    /// Glyph diameter for a kind
    pub fn size_of(&self, kind: BirdKind, base_size: f32) -> f32 {
        base_size * self.spec(kind).size_factor
    }

    /// Sum of all per-kind caps
    pub fn total_cap(&self) -> usize {
        self.specs.iter().map(|s| s.max_count).sum()
    }
}

/// A bird on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub id: BirdId,
    pub kind: BirdKind,
    /// Glyph centre in canvas units
    pub position: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Glyph diameter
    pub size: f32,
    pub created_at: Millis,
}

impl Bird {
    pub fn new(
        id: BirdId,
        kind: BirdKind,
        position: Vec2,
        velocity: Vec2,
        size: f32,
        created_at: Millis,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            velocity,
            size,
            created_at,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    /// Age on the loop clock (zero if `now` is before creation)
    #[inline]
    pub fn age(&self, now: Millis) -> Millis {
        now.saturating_sub(self.created_at)
    }

    /// Top-left corner of the glyph rectangle
    pub fn glyph_origin(&self) -> Vec2 {
        let r = self.radius();
        Vec2::new(self.position.x - r, self.position.y - r)
    }

    /// Whether a point falls inside the glyph rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let r = self.radius();
        (point.x - self.position.x).abs() <= r && (point.y - self.position.y).abs() <= r
    }
}

/// Canvas bounds, re-supplied every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True before layout completes (zero extent) or on garbage input
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Count birds per kind, indexed by [`BirdKind::index`]
pub fn count_by_kind(birds: &[Bird]) -> [usize; KIND_COUNT] {
    let mut counts = [0; KIND_COUNT];
    for bird in birds {
        counts[bird.kind.index()] += 1;
    }
    counts
}

/// The bird a tap at `point` lands on. Later birds are drawn on top, so the
/// last matching bird wins.
pub fn topmost_at(birds: &[Bird], point: Vec2) -> Option<&Bird> {
    birds.iter().rev().find(|b| b.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(id: BirdId, kind: BirdKind, x: f32, y: f32) -> Bird {
        Bird::new(id, kind, Vec2::new(x, y), Vec2::ZERO, 60.0, 0)
    }

    #[test]
    fn test_default_table_matches_round_rules() {
        let table = KindTable::default();
        assert_eq!(table.spec(BirdKind::Sparrow).score, 5);
        assert_eq!(table.spec(BirdKind::Bunting).score, -5);
        assert_eq!(table.spec(BirdKind::Magpie).score, -2);
        assert_eq!(table.total_cap(), 9);
    }

    #[test]
    fn test_kind_index_matches_table_order() {
        for (i, kind) in BirdKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_magpie_is_larger() {
        let table = KindTable::default();
        let sparrow = table.size_of(BirdKind::Sparrow, 60.0);
        let magpie = table.size_of(BirdKind::Magpie, 60.0);
        assert!((sparrow - 60.0).abs() < 0.001);
        assert!((magpie - 84.0).abs() < 0.001);
    }

    #[test]
    fn test_with_cap() {
        let table = KindTable::default().with_cap(BirdKind::Magpie, 0);
        assert_eq!(table.spec(BirdKind::Magpie).max_count, 0);
        assert_eq!(table.total_cap(), 6);
    }

    #[test]
    fn test_bird_radius_and_origin() {
        let bird = bird_at(1, BirdKind::Sparrow, 100.0, 50.0);
        assert!((bird.radius() - 30.0).abs() < 0.001);
        assert_eq!(bird.glyph_origin(), Vec2::new(70.0, 20.0));
    }

    #[test]
    fn test_bird_age_saturates() {
        let mut bird = bird_at(1, BirdKind::Sparrow, 0.0, 0.0);
        bird.created_at = 500;
        assert_eq!(bird.age(1500), 1000);
        assert_eq!(bird.age(100), 0);
    }

    #[test]
    fn test_contains_edges_inclusive() {
        let bird = bird_at(1, BirdKind::Sparrow, 100.0, 100.0);
        assert!(bird.contains(Vec2::new(100.0, 100.0)));
        assert!(bird.contains(Vec2::new(130.0, 70.0)));
        assert!(!bird.contains(Vec2::new(130.5, 100.0)));
    }

    #[test]
    fn test_canvas_degenerate() {
        assert!(Canvas::new(0.0, 100.0).is_degenerate());
        assert!(Canvas::new(100.0, 0.0).is_degenerate());
        assert!(Canvas::new(-1.0, 100.0).is_degenerate());
        assert!(Canvas::new(f32::NAN, 100.0).is_degenerate());
        assert!(!Canvas::new(300.0, 200.0).is_degenerate());
    }

    #[test]
    fn test_count_by_kind() {
        let birds = vec![
            bird_at(1, BirdKind::Sparrow, 0.0, 0.0),
            bird_at(2, BirdKind::Sparrow, 0.0, 0.0),
            bird_at(3, BirdKind::Magpie, 0.0, 0.0),
        ];
        assert_eq!(count_by_kind(&birds), [2, 0, 1]);
    }

    #[test]
    fn test_topmost_at_prefers_last_drawn() {
        let birds = vec![
            bird_at(1, BirdKind::Sparrow, 100.0, 100.0),
            bird_at(2, BirdKind::Bunting, 110.0, 100.0),
        ];
        let hit = topmost_at(&birds, Vec2::new(105.0, 100.0)).map(|b| b.id);
        assert_eq!(hit, Some(2));

        let hit = topmost_at(&birds, Vec2::new(75.0, 100.0)).map(|b| b.id);
        assert_eq!(hit, Some(1));

        assert!(topmost_at(&birds, Vec2::new(300.0, 300.0)).is_none());
    }
}
