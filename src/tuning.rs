//! Data-driven game balance
//!
//! Every feel constant the sim consumes at runtime lives here, so a balance
//! pass is a JSON edit rather than a recompile. Defaults match the shipped
//! game.

use serde::{Deserialize, Serialize};

/// Balance knobs consumed by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Per-tick chance an enemy snaps its facing toward the player
    pub glance_chance: f32,

    // === Per-tick displacements ===
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub player_shot_speed: f32,
    pub enemy_shot_speed: f32,

    // === Hits before death ===
    pub player_max_damage: u32,
    pub enemy_max_damage: u32,

    /// Ticks between enemy volleys, re-rolled in this range after each shot
    pub attack_cooldown_min: u32,
    pub attack_cooldown_max: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            glance_chance: 0.05,

            player_speed: 4.0,
            enemy_speed: 1.5,
            player_shot_speed: 8.0,
            enemy_shot_speed: 3.0,

            player_max_damage: 10,
            enemy_max_damage: 3,

            attack_cooldown_min: 45,
            attack_cooldown_max: 150,
        }
    }
}

impl Tunables {
    /// Parse a possibly-partial JSON balance sheet; absent fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Enemy volley cooldown as a sampling range.
    pub fn attack_cooldown(&self) -> std::ops::RangeInclusive<u32> {
        self.attack_cooldown_min..=self.attack_cooldown_max
    }
}
