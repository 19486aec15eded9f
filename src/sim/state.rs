//! Entity state and the simulation context
//!
//! Everything one game session owns lives in [`GameState`]: the player, the
//! five entity pools, the field, the balance knobs, and the RNG stream. The
//! whole session is serializable, RNG included, so a captured state resumes
//! with its randomness intact.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::npc::{self, NavState};
use super::pool::{Pool, Slot};
use super::weapon::PlayerWeapon;
use crate::consts::*;
use crate::tuning::Tunables;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Synchronous construction in progress
    Loading,
    /// Steady state; the only phase in which update and draw run
    Playing,
}

/// Playable area bounds. All wandering and boundary checks are scoped to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Field {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    /// Uniform random point inside the bounds.
    pub fn random_point(&self, rng: &mut Pcg32) -> Vec2 {
        Vec2::new(
            self.left + self.width() * rng.random::<f32>(),
            self.top + self.height() * rng.random::<f32>(),
        )
    }

    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(self.left, self.right),
            pos.y.clamp(self.top, self.bottom),
        )
    }
}

/// Shared movable-entity state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// World position (center of the bounding box)
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    /// Bounding box for collision and arrival checks
    pub size: Vec2,
    /// Facing in radians; rendered as one of the discrete sprite directions
    pub heading: f32,
    pub active: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self::inactive(0.0)
    }
}

impl Body {
    pub fn inactive(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(size),
            heading: 0.0,
            active: false,
        }
    }

    /// Movement integration: `position += velocity`, once per tick.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Face `heading` and travel along it at `speed` per tick.
    pub fn set_course(&mut self, heading: f32, speed: f32) {
        self.heading = heading;
        self.vel = Vec2::new(heading.cos(), heading.sin()) * speed;
    }
}

/// The player ship. Not pooled; death is a terminal lifecycle state consumed
/// by the loop, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub damage: u32,
    pub max_damage: u32,
    pub weapon: PlayerWeapon,
}

impl Player {
    fn new(field: &Field, tunables: &Tunables) -> Self {
        let mut body = Body::inactive(PLAYER_SIZE);
        body.active = true;
        body.pos = Vec2::new(field.center().x, field.bottom - field.height() / 4.0);
        body.heading = -std::f32::consts::FRAC_PI_2;
        Self {
            body,
            damage: 0,
            max_damage: tunables.player_max_damage,
            weapon: PlayerWeapon::Single,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.damage >= self.max_damage
    }

    pub fn add_damage(&mut self, amount: u32) {
        self.damage += amount;
    }

    /// Derive this tick's velocity from normalized input axes. Facing follows
    /// the stick whenever it is deflected.
    pub fn steer(&mut self, horizontal: f32, vertical: f32, speed: f32) {
        self.body.vel = Vec2::new(horizontal, vertical) * speed;
        if horizontal != 0.0 || vertical != 0.0 {
            self.body.heading = vertical.atan2(horizontal);
        }
    }

    /// Firing heading, snapped to the nearest discrete sprite facing.
    pub fn normalized_heading(&self) -> f32 {
        crate::snap_heading(self.body.heading, SPRITE_DIRECTIONS)
    }
}

/// Enemy archetypes. Parameters are fixed per kind at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Ball,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    pub damage: u32,
    pub max_damage: u32,
    pub nav: NavState,
    /// Ticks until the next aimed volley
    pub attack_cooldown: u32,
}

impl Slot for Enemy {
    fn is_active(&self) -> bool {
        self.body.active
    }
    fn deactivate(&mut self) {
        self.body.active = false;
    }
}

impl Enemy {
    pub fn is_dead(&self) -> bool {
        self.damage >= self.max_damage
    }

    pub fn add_damage(&mut self, amount: u32) {
        self.damage += amount;
    }
}

/// A projectile. Trajectory is fixed at spawn; one struct serves both the
/// player-shot and enemy-shot pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shot {
    pub body: Body,
}

impl Slot for Shot {
    fn is_active(&self) -> bool {
        self.body.active
    }
    fn deactivate(&mut self) {
        self.body.active = false;
    }
}

impl Shot {
    /// Reinitialize this slot in place as a live shot.
    pub fn spawn(&mut self, pos: Vec2, heading: f32, speed: f32) {
        self.body = Body::inactive(SHOT_SIZE);
        self.body.pos = pos;
        self.body.set_course(heading, speed);
        self.body.active = true;
    }
}

/// A transient visual effect. Counts itself down and deactivates on expiry;
/// the loop only calls [`Effect::update`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effect {
    pub body: Body,
    pub age: u32,
    pub lifetime: u32,
}

impl Slot for Effect {
    fn is_active(&self) -> bool {
        self.body.active
    }
    fn deactivate(&mut self) {
        self.body.active = false;
    }
}

impl Effect {
    pub fn start(&mut self, pos: Vec2, lifetime: u32) {
        self.body = Body::inactive(EFFECT_SIZE);
        self.body.pos = pos;
        self.body.active = true;
        self.age = 0;
        self.lifetime = lifetime;
    }

    pub fn update(&mut self) {
        self.age += 1;
        if self.age >= self.lifetime {
            self.body.active = false;
        }
    }

    /// Animation cell for a sprite strip of `frames` cells.
    pub fn frame(&self, frames: u32) -> u32 {
        if self.lifetime == 0 {
            return 0;
        }
        (self.age * frames / self.lifetime).min(frames - 1)
    }
}

/// Options for constructing a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Screen dimensions; these size the UI bar, not gameplay
    pub screen_width: f32,
    pub screen_height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    pub tunables: Tunables,
    /// Playable bounds; derived from the screen minus the UI bar when unset
    pub field: Option<Field>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: 0,
            tunables: Tunables::default(),
            field: None,
        }
    }
}

/// Complete session state (deterministic, serializable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub field: Field,
    /// Screen dimensions, kept for UI bar sizing in the draw pass
    pub screen_width: f32,
    pub screen_height: f32,
    pub player: Player,
    pub player_shots: Pool<Shot>,
    pub enemy_shots: Pool<Shot>,
    pub enemies: Pool<Enemy>,
    pub hit_effects: Pool<Effect>,
    pub explosions: Pool<Effect>,
    pub tunables: Tunables,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a session and seed the opening wave. Construction is synchronous
    /// and infallible; the returned state is already [`GamePhase::Playing`].
    pub fn new(options: SessionOptions) -> Self {
        let field = options.field.unwrap_or(Field::new(
            0.0,
            0.0,
            options.screen_width,
            options.screen_height - UI_BAR_HEIGHT,
        ));

        let mut state = Self {
            seed: options.seed,
            time_ticks: 0,
            phase: GamePhase::Loading,
            field,
            screen_width: options.screen_width,
            screen_height: options.screen_height,
            player: Player::new(&field, &options.tunables),
            player_shots: Pool::new(MAX_PLAYER_SHOTS),
            enemy_shots: Pool::new(MAX_ENEMY_SHOTS),
            enemies: Pool::new(MAX_ENEMIES),
            hit_effects: Pool::new(MAX_HIT_EFFECTS),
            explosions: Pool::new(MAX_EXPLOSIONS),
            rng: Pcg32::seed_from_u64(options.seed),
            tunables: options.tunables,
        };

        for _ in 0..WAVE_ENEMY_COUNT {
            state.spawn_enemy(EnemyKind::Ball);
        }
        log::info!(
            "session ready: seed {}, {} enemies, field {}x{}",
            state.seed,
            state.enemies.active_count(),
            state.field.width(),
            state.field.height()
        );

        state.phase = GamePhase::Playing;
        state
    }

    /// Spawn one enemy at a random field position. Returns false when the
    /// pool is full and the request was dropped.
    pub fn spawn_enemy(&mut self, kind: EnemyKind) -> bool {
        let Self {
            enemies,
            field,
            rng,
            tunables,
            ..
        } = self;
        let Some(enemy) = enemies.allocate() else {
            return false;
        };

        enemy.kind = kind;
        enemy.damage = 0;
        enemy.max_damage = tunables.enemy_max_damage;
        enemy.body = Body::inactive(ENEMY_SIZE);
        enemy.body.pos = field.random_point(rng);
        enemy.body.active = true;
        enemy.nav = NavState::new(tunables.enemy_speed);
        enemy.attack_cooldown = rng.random_range(tunables.attack_cooldown());
        // First destination immediately, so the enemy never idles
        npc::enter_field(&mut enemy.body, &mut enemy.nav, field, rng);
        true
    }
}
