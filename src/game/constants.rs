/// Timing constants for the two cooperative tick loops
pub mod timing {
    /// Frame tick interval in milliseconds (~60 FPS motion loop)
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Round clock interval in milliseconds (score/timer/expiry loop)
    pub const SECOND_INTERVAL_MS: u64 = 1000;
}

/// Bird glyph and motion constants
pub mod bird {
    /// Base glyph size (diameter) before the kind's size factor is applied
    pub const BASE_SIZE: f32 = 60.0;
    /// Minimum per-axis speed of a freshly spawned bird (units per frame)
    pub const SPEED_MIN: f32 = 1.0;
    /// Maximum per-axis speed of a freshly spawned bird (exclusive)
    pub const SPEED_MAX: f32 = 3.0;
    /// Birds older than this are removed on the next round clock tick
    pub const MAX_AGE_MS: u64 = 3000;
}

/// Spawn throttling constants
pub mod spawn {
    /// Chance per frame that a spawn is attempted
    pub const PROBABILITY: f32 = 0.1;
    /// Global population cap (sparrow 4 + bunting 2 + magpie 3)
    pub const MAX_TOTAL_BIRDS: usize = 9;
}

/// Round rules
pub mod round {
    /// Seconds on the clock when a round starts
    pub const DURATION_SECS: u32 = 60;
    /// Score at which the round is cleared
    pub const CLEAR_SCORE: i32 = 100;
}

/// Headless driver defaults
pub mod driver {
    /// Canvas width used when none is configured
    pub const CANVAS_WIDTH: f32 = 360.0;
    /// Canvas height used when none is configured
    pub const CANVAS_HEIGHT: f32 = 640.0;
    /// Chance per frame that the autoplayer taps a bird
    pub const AUTOPLAY_TAP_CHANCE: f32 = 0.02;
    /// Capacity of the tap queue between the UI side and the loop
    pub const TAP_QUEUE_CAPACITY: usize = 64;
}
