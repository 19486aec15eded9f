//! Pairwise collision resolution between entity pools
//!
//! Bounding boxes are axis-aligned and centered on `Body::pos`. Any positive
//! overlap counts as a hit; boxes that merely touch do not collide. Both
//! resolution passes consume the pools as they stood at the end of the
//! previous tick (the loop runs them before anything moves).

use glam::Vec2;

use super::pool::{Pool, Slot};
use super::state::{Body, Effect, GameState};
use crate::consts::{EXPLOSION_TICKS, HIT_EFFECT_TICKS};

/// Strict AABB overlap on centers and half-extents.
pub fn overlap(a: &Body, b: &Body) -> bool {
    let gap = (a.pos - b.pos).abs();
    let reach = a.half_extents() + b.half_extents();
    gap.x < reach.x && gap.y < reach.y
}

/// Run both resolution passes for one tick.
///
/// O(shots x enemies); the fixed pool capacities keep the worst case small
/// enough that no spatial partitioning is needed.
pub(crate) fn resolve(state: &mut GameState) {
    let GameState {
        player,
        player_shots,
        enemy_shots,
        enemies,
        hit_effects,
        explosions,
        ..
    } = state;

    // Player shots vs. enemies. A shot spends itself on its first hit.
    for shot in player_shots.slots_mut() {
        if !shot.is_active() {
            continue;
        }
        for enemy in enemies.slots_mut() {
            if !enemy.is_active() {
                continue;
            }
            if !overlap(&shot.body, &enemy.body) {
                continue;
            }
            enemy.add_damage(1);
            shot.deactivate();
            spawn_effect(hit_effects, shot.body.pos, HIT_EFFECT_TICKS);
            if enemy.is_dead() {
                enemy.deactivate();
                spawn_effect(explosions, enemy.body.pos, EXPLOSION_TICKS);
            }
            break;
        }
    }

    // Enemy shots vs. the player, only while the player is alive. Aliveness
    // is re-checked per shot, so the lethal hit ends the pass and exactly one
    // explosion spawns.
    for shot in enemy_shots.slots_mut() {
        if player.is_dead() {
            break;
        }
        if !shot.is_active() {
            continue;
        }
        if !overlap(&shot.body, &player.body) {
            continue;
        }
        player.add_damage(1);
        shot.deactivate();
        spawn_effect(hit_effects, player.body.pos, HIT_EFFECT_TICKS);
        if player.is_dead() {
            spawn_effect(explosions, player.body.pos, EXPLOSION_TICKS);
        }
    }
}

/// Best-effort effect spawn; dropped silently when the pool is exhausted.
fn spawn_effect(pool: &mut Pool<Effect>, pos: Vec2, lifetime: u32) {
    if let Some(effect) = pool.allocate() {
        effect.start(pos, lifetime);
    }
}
