//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only (velocities are per-tick displacements)
//! - Seeded RNG only, owned by the session state
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod npc;
pub mod pool;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::overlap;
pub use draw::{RenderTarget, SpriteKind, draw};
pub use npc::NavState;
pub use pool::{Pool, Slot};
pub use state::{
    Body, Effect, Enemy, EnemyKind, Field, GamePhase, GameState, Player, SessionOptions, Shot,
};
pub use tick::{TickInput, tick};
pub use weapon::PlayerWeapon;
