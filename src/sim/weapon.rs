//! Weapon strategies
//!
//! A weapon populates a shot pool through the allocate contract. Against a
//! full pool the volley is dropped shot by shot, never erroring.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::Pool;
use super::state::Shot;

/// Twin-barrel lateral offset in pixels
const TWIN_OFFSET: f32 = 5.0;
/// Spread fan half-angle in radians
const SPREAD_ANGLE: f32 = 0.26;

/// Selectable player weapon strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerWeapon {
    /// One straight shot per trigger pull
    #[default]
    Single,
    /// Two parallel shots offset across the firing line
    Twin,
    /// Three-shot fan
    Spread,
}

impl PlayerWeapon {
    /// Fire one volley from `pos` along `heading`.
    pub fn fire(&self, pos: Vec2, heading: f32, speed: f32, shots: &mut Pool<Shot>) {
        match self {
            PlayerWeapon::Single => {
                fire_one(pos, heading, speed, shots);
            }
            PlayerWeapon::Twin => {
                let side = Vec2::new(-heading.sin(), heading.cos()) * TWIN_OFFSET;
                fire_one(pos + side, heading, speed, shots);
                fire_one(pos - side, heading, speed, shots);
            }
            PlayerWeapon::Spread => {
                fire_one(pos, heading, speed, shots);
                fire_one(pos, heading - SPREAD_ANGLE, speed, shots);
                fire_one(pos, heading + SPREAD_ANGLE, speed, shots);
            }
        }
    }
}

/// Straight shot aimed from an enemy at its pursuit target.
pub fn enemy_attack(from: Vec2, target: Vec2, speed: f32, shots: &mut Pool<Shot>) {
    let heading = (target.y - from.y).atan2(target.x - from.x);
    fire_one(from, heading, speed, shots);
}

fn fire_one(pos: Vec2, heading: f32, speed: f32, shots: &mut Pool<Shot>) {
    if let Some(shot) = shots.allocate() {
        shot.spawn(pos, heading, speed);
    }
}
