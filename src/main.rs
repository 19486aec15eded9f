//! Star Raid demo driver
//!
//! Runs a short headless session with scripted input and logs what the
//! simulation produced. Pass a seed as the first argument to vary the run.

use glam::Vec2;

use star_raid::sim::{GameState, RenderTarget, SessionOptions, SpriteKind, TickInput, draw, tick};

/// Render target that tallies draw calls instead of drawing.
#[derive(Default)]
struct CountingTarget {
    sprites: usize,
    rects: usize,
}

impl RenderTarget for CountingTarget {
    fn clear(&mut self, _color: [u8; 4]) {}
    fn fill_rect(&mut self, _min: Vec2, _max: Vec2, _color: [u8; 4]) {
        self.rects += 1;
    }
    fn draw_sprite(&mut self, _sprite: SpriteKind, _pos: Vec2, _direction: u32, _frame: u32) {
        self.sprites += 1;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);
    let mut state = GameState::new(SessionOptions {
        seed,
        ..Default::default()
    });

    for step in 0u64..1800 {
        // Sweep the stick in a slow circle and fire in bursts
        let angle = step as f32 / 120.0;
        let input = TickInput {
            horizontal: angle.cos(),
            vertical: angle.sin() * 0.5,
            fire: step % 12 < 4,
        };
        tick(&mut state, &input);

        if step % 600 == 599 {
            log::info!(
                "tick {}: {} enemies, {} player shots, {} enemy shots, player damage {}/{}",
                state.time_ticks,
                state.enemies.active_count(),
                state.player_shots.active_count(),
                state.enemy_shots.active_count(),
                state.player.damage,
                state.player.max_damage,
            );
        }
    }

    let mut target = CountingTarget::default();
    draw(&state, &mut target);
    log::info!(
        "final frame: {} sprites, {} rects, player {}",
        target.sprites,
        target.rects,
        if state.player.is_dead() { "down" } else { "alive" },
    );
}
