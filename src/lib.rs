//! Star Raid - a top-down arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, collisions, enemy AI)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio and input devices live outside this crate: the sim is
//! driven by normalized [`sim::TickInput`] intent and read back through the
//! [`sim::draw`] pass.

pub mod sim;
pub mod tuning;

pub use tuning::Tunables;

/// Game configuration constants
pub mod consts {
    /// Pool capacities, fixed for the lifetime of a session
    pub const MAX_PLAYER_SHOTS: usize = 80;
    pub const MAX_ENEMY_SHOTS: usize = 70;
    pub const MAX_ENEMIES: usize = 50;
    pub const MAX_HIT_EFFECTS: usize = 30;
    pub const MAX_EXPLOSIONS: usize = 30;

    /// Enemies seeded into the opening wave
    pub const WAVE_ENEMY_COUNT: usize = 30;

    /// Default screen layout; the UI bar sits below the field
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;
    pub const UI_BAR_HEIGHT: f32 = 120.0;

    /// Entity bounding boxes (pixels)
    pub const PLAYER_SIZE: f32 = 16.0;
    pub const ENEMY_SIZE: f32 = 16.0;
    pub const SHOT_SIZE: f32 = 8.0;
    pub const EFFECT_SIZE: f32 = 16.0;

    /// Effect lifetimes in ticks
    pub const HIT_EFFECT_TICKS: u32 = 8;
    pub const EXPLOSION_TICKS: u32 = 16;

    /// Animation cells in the effect sprite strips
    pub const HIT_EFFECT_FRAMES: u32 = 4;
    pub const EXPLOSION_FRAMES: u32 = 8;

    /// Discrete sprite facings
    pub const SPRITE_DIRECTIONS: u32 = 8;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Map a heading to one of `buckets` discrete sprite facings.
///
/// Bucket 0 faces +x; buckets advance with increasing angle. The boundary
/// between buckets falls halfway between facing angles.
#[inline]
pub fn direction_index(heading: f32, buckets: u32) -> u32 {
    use std::f32::consts::TAU;
    let step = TAU / buckets as f32;
    ((normalize_angle(heading) + TAU + step / 2.0) / step) as u32 % buckets
}

/// Snap a heading to the exact angle of its sprite facing bucket.
#[inline]
pub fn snap_heading(heading: f32, buckets: u32) -> f32 {
    let step = std::f32::consts::TAU / buckets as f32;
    normalize_angle(direction_index(heading, buckets) as f32 * step)
}
