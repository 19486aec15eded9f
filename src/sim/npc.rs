//! Wandering enemy controller
//!
//! Enemies travel in a straight line toward a randomly chosen destination
//! inside the field, pick a fresh destination on arrival, and with a small
//! per-tick chance snap their facing toward a pursuit target. The glance
//! never alters velocity: facing and trajectory are decoupled, so an enemy
//! keeps wandering while visually tracking the player.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Body, Field};

/// Navigation state owned by each wandering entity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NavState {
    /// Current wander destination; always inside the field
    pub destination: Vec2,
    /// Travel speed, per tick
    pub speed: f32,
}

impl NavState {
    pub fn new(speed: f32) -> Self {
        Self {
            destination: Vec2::ZERO,
            speed,
        }
    }
}

/// Pick the first destination. Called once at spawn so the entity never
/// idles at zero velocity.
pub fn enter_field(body: &mut Body, nav: &mut NavState, field: &Field, rng: &mut Pcg32) {
    retarget(body, nav, field, rng);
}

/// One controller step: integrate motion, re-target on arrival, roll the
/// pursuit glance.
pub fn update(
    body: &mut Body,
    nav: &mut NavState,
    field: &Field,
    target: Vec2,
    glance_chance: f32,
    rng: &mut Pcg32,
) {
    body.advance();

    if arrived(body, nav) {
        retarget(body, nav, field, rng);
    }

    if rng.random::<f32>() < glance_chance {
        body.heading = (target.y - body.pos.y).atan2(target.x - body.pos.x);
    }
}

/// Arrival tolerance equals the entity's own bounding size, strictly.
pub fn arrived(body: &Body, nav: &NavState) -> bool {
    (body.pos.y - nav.destination.y).abs() < body.size.y
        && (body.pos.x - nav.destination.x).abs() < body.size.x
}

fn retarget(body: &mut Body, nav: &mut NavState, field: &Field, rng: &mut Pcg32) {
    let dest = field.random_point(rng);
    nav.destination = dest;
    let course = (dest.y - body.pos.y).atan2(dest.x - body.pos.x);
    // Constant-speed straight-line travel; facing is left to the glance
    body.vel = Vec2::new(course.cos(), course.sin()) * nav.speed;
}
