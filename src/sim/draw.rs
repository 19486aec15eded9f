//! Read-only draw pass
//!
//! Walks a session in a fixed z-order and emits draw commands to a
//! [`RenderTarget`] implemented by the presentation layer. Never mutates
//! simulation state; sprite facing is derived from each body's heading here,
//! at the last moment before display.

use glam::Vec2;

use super::state::{Body, GameState};
use crate::consts::{EXPLOSION_FRAMES, HIT_EFFECT_FRAMES, SPRITE_DIRECTIONS};

/// Sprite sheets known to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Enemy,
    PlayerShot,
    EnemyShot,
    Hit,
    Explosion,
}

/// Flat chrome colors (RGBA)
const BACKGROUND_COLOR: [u8; 4] = [0x10, 0x10, 0x30, 0xff];
const FIELD_COLOR: [u8; 4] = [0x18, 0x18, 0x40, 0xff];
const UI_BACKGROUND_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// Receives draw commands from the draw pass.
pub trait RenderTarget {
    fn clear(&mut self, color: [u8; 4]);
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: [u8; 4]);
    /// `direction` is a discrete facing bucket, `frame` an animation cell.
    fn draw_sprite(&mut self, sprite: SpriteKind, pos: Vec2, direction: u32, frame: u32);
}

/// Emit one frame. Z-order is fixed: background, field, player shots, enemy
/// shots, enemies, player (if alive), explosions, hit effects, UI bar.
pub fn draw(state: &GameState, target: &mut impl RenderTarget) {
    target.clear(BACKGROUND_COLOR);

    let field = &state.field;
    target.fill_rect(
        Vec2::new(field.left, field.top),
        Vec2::new(field.right, field.bottom),
        FIELD_COLOR,
    );

    for shot in state.player_shots.iter_active() {
        target.draw_sprite(SpriteKind::PlayerShot, shot.body.pos, facing(&shot.body), 0);
    }
    for shot in state.enemy_shots.iter_active() {
        target.draw_sprite(SpriteKind::EnemyShot, shot.body.pos, facing(&shot.body), 0);
    }
    for enemy in state.enemies.iter_active() {
        target.draw_sprite(SpriteKind::Enemy, enemy.body.pos, facing(&enemy.body), 0);
    }
    if !state.player.is_dead() {
        target.draw_sprite(
            SpriteKind::Player,
            state.player.body.pos,
            facing(&state.player.body),
            0,
        );
    }
    for explosion in state.explosions.iter_active() {
        target.draw_sprite(
            SpriteKind::Explosion,
            explosion.body.pos,
            0,
            explosion.frame(EXPLOSION_FRAMES),
        );
    }
    for hit in state.hit_effects.iter_active() {
        target.draw_sprite(SpriteKind::Hit, hit.body.pos, 0, hit.frame(HIT_EFFECT_FRAMES));
    }

    // UI bar below the field
    target.fill_rect(
        Vec2::new(0.0, field.bottom),
        Vec2::new(state.screen_width, state.screen_height),
        UI_BACKGROUND_COLOR,
    );
}

fn facing(body: &Body) -> u32 {
    crate::direction_index(body.heading, SPRITE_DIRECTIONS)
}
