//! Per-tick simulation step
//!
//! The stage order inside [`tick`] is load-bearing: collision resolves
//! first, against entity positions as of the end of the previous tick,
//! before anything moves. Later stages see the side effects of earlier ones
//! (deactivations, effect spawns) within the same tick.

use rand::Rng;

use super::collision;
use super::npc;
use super::pool::{Pool, Slot};
use super::state::{Field, GamePhase, GameState, Shot};
use super::weapon;

/// Normalized input intent for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// Vertical axis in [-1, 1]
    pub vertical: f32,
    pub fire: bool,
}

/// Advance the session by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // Collisions against last tick's positions
    collision::resolve(state);

    // Player intent. Death stops player updates; the loop otherwise continues.
    if !state.player.is_dead() {
        state
            .player
            .steer(input.horizontal, input.vertical, state.tunables.player_speed);
        state.player.body.advance();
        state.player.body.pos = state.field.clamp(state.player.body.pos);
        if input.fire {
            let pos = state.player.body.pos;
            let heading = state.player.normalized_heading();
            state.player.weapon.fire(
                pos,
                heading,
                state.tunables.player_shot_speed,
                &mut state.player_shots,
            );
        }
    }

    // Shots fly straight and expire once they leave the field
    advance_shots(&mut state.player_shots, &state.field);
    advance_shots(&mut state.enemy_shots, &state.field);

    // Enemies wander, glance at the player, and attack on cooldown
    let GameState {
        enemies,
        enemy_shots,
        rng,
        field,
        player,
        tunables,
        ..
    } = state;
    let target = player.body.pos;
    for enemy in enemies.iter_active_mut() {
        npc::update(
            &mut enemy.body,
            &mut enemy.nav,
            field,
            target,
            tunables.glance_chance,
            rng,
        );
        if enemy.attack_cooldown > 0 {
            enemy.attack_cooldown -= 1;
        } else {
            weapon::enemy_attack(enemy.body.pos, target, tunables.enemy_shot_speed, enemy_shots);
            enemy.attack_cooldown = rng.random_range(tunables.attack_cooldown());
        }
    }

    // Transient effects count themselves down
    for effect in state.hit_effects.iter_active_mut() {
        effect.update();
    }
    for effect in state.explosions.iter_active_mut() {
        effect.update();
    }
}

fn advance_shots(shots: &mut Pool<Shot>, field: &Field) {
    for shot in shots.iter_active_mut() {
        shot.body.advance();
        if !field.contains(shot.body.pos) {
            shot.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Body, SessionOptions};
    use crate::tuning::Tunables;
    use glam::Vec2;

    fn frozen_options(seed: u64) -> SessionOptions {
        // Zero speeds keep spawn positions observable across ticks
        SessionOptions {
            seed,
            tunables: Tunables {
                player_shot_speed: 0.0,
                enemy_speed: 0.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn quiet_state(options: SessionOptions) -> GameState {
        let mut state = GameState::new(options);
        for enemy in state.enemies.iter_active_mut() {
            enemy.deactivate();
        }
        state
    }

    #[test]
    fn test_firing_twice_spawns_two_shots_at_player_position() {
        let mut state = quiet_state(frozen_options(1));
        state.player.body.pos = Vec2::new(50.0, 50.0);

        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player_shots.active_count(), 1);
        tick(&mut state, &input);
        assert_eq!(state.player_shots.active_count(), 2);

        for shot in state.player_shots.iter_active() {
            assert_eq!(shot.body.pos, Vec2::new(50.0, 50.0));
        }
    }

    #[test]
    fn test_collision_resolves_against_previous_tick_positions() {
        let mut state = quiet_state(frozen_options(2));
        let enemy = state.enemies.allocate().unwrap();
        enemy.damage = 0;
        enemy.max_damage = 3;
        enemy.body = Body::inactive(16.0);
        enemy.body.pos = Vec2::new(100.0, 100.0);
        enemy.body.active = true;
        // Overlapping shot that would fly apart this tick
        state
            .player_shots
            .allocate()
            .unwrap()
            .spawn(Vec2::new(100.0, 100.0), 0.0, 50.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.enemies.iter_active().next().unwrap().damage, 1);
        assert_eq!(state.player_shots.active_count(), 0);
    }

    #[test]
    fn test_shots_expire_at_the_field_edge() {
        let mut state = quiet_state(SessionOptions {
            seed: 3,
            ..Default::default()
        });
        state
            .player_shots
            .allocate()
            .unwrap()
            .spawn(Vec2::new(state.field.right - 1.0, 100.0), 0.0, 10.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player_shots.active_count(), 0);
    }

    #[test]
    fn test_effects_deactivate_themselves_on_expiry() {
        let mut state = quiet_state(frozen_options(4));
        state
            .hit_effects
            .allocate()
            .unwrap()
            .start(Vec2::new(60.0, 60.0), HIT_EFFECT_TICKS);

        for _ in 0..HIT_EFFECT_TICKS {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.hit_effects.active_count(), 0);
    }

    #[test]
    fn test_dead_player_neither_moves_nor_fires() {
        let mut state = quiet_state(frozen_options(5));
        state.player.damage = state.player.max_damage;
        let pos_before = state.player.body.pos;

        let input = TickInput {
            horizontal: 1.0,
            vertical: -1.0,
            fire: true,
        };
        tick(&mut state, &input);

        assert_eq!(state.player.body.pos, pos_before);
        assert_eq!(state.player_shots.active_count(), 0);
    }

    #[test]
    fn test_player_is_clamped_to_the_field() {
        let mut state = quiet_state(SessionOptions {
            seed: 6,
            ..Default::default()
        });
        state.player.body.pos = Vec2::new(state.field.left + 1.0, 100.0);

        let input = TickInput {
            horizontal: -1.0,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.body.pos.x, state.field.left);
    }

    #[test]
    fn test_enemies_attack_on_cooldown() {
        let mut state = GameState::new(SessionOptions {
            seed: 7,
            ..Default::default()
        });
        let mut saw_enemy_shot = false;
        for _ in 0..300 {
            tick(&mut state, &TickInput::default());
            if state.enemy_shots.active_count() > 0 {
                saw_enemy_shot = true;
                break;
            }
        }
        assert!(saw_enemy_shot);
    }

    #[test]
    fn test_same_seed_and_inputs_are_deterministic() {
        let mut a = GameState::new(SessionOptions {
            seed: 99,
            ..Default::default()
        });
        let mut b = GameState::new(SessionOptions {
            seed: 99,
            ..Default::default()
        });

        for step in 0u64..240 {
            let input = TickInput {
                horizontal: (step as f32 / 30.0).cos(),
                vertical: (step as f32 / 45.0).sin(),
                fire: step % 7 == 0,
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_serialized_session_resumes_identically() {
        let mut live = GameState::new(SessionOptions {
            seed: 11,
            ..Default::default()
        });
        for _ in 0..60 {
            tick(&mut live, &TickInput::default());
        }

        let snapshot = serde_json::to_string(&live).unwrap();
        let mut resumed: GameState = serde_json::from_str(&snapshot).unwrap();

        for _ in 0..60 {
            tick(&mut live, &TickInput::default());
            tick(&mut resumed, &TickInput::default());
        }
        assert_eq!(
            serde_json::to_string(&live).unwrap(),
            serde_json::to_string(&resumed).unwrap()
        );
    }
}
