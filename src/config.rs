//! Gameplay tunables.
//!
//! Every number the simulation depends on lives here so a JSON file can
//! override it.  `GameConfig::default()` is the classic arcade layout.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Tier;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Enemy grid layout ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub origin_x: f32,
    pub origin_y: f32,
    pub spacing: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 11,
            origin_x: 50.0,
            origin_y: 50.0,
            spacing: 60.0,
        }
    }
}

impl GridLayout {
    /// Centre of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.spacing,
            self.origin_y + row as f32 * self.spacing,
        )
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

// ── Master config ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,

    pub player_spawn: (f32, f32),
    pub player_half_size: (f32, f32),
    /// Units per frame for each held direction.
    pub player_speed: f32,

    pub enemy_half_size: (f32, f32),
    pub grid: GridLayout,
    /// Enemies kept alive while playing.
    pub target_population: usize,

    pub projectile_size: (f32, f32),
    pub projectile_speed: f32,
    /// Vertical distance between a shooter's centre and its new projectile.
    pub muzzle_offset: f32,
    /// Per-frame probability that one enemy fires.
    pub enemy_fire_chance: f64,

    pub starting_lives: u32,
    pub win_score: u32,
    /// Points per tier, tier 1 first.
    pub tier_points: [u32; 5],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            player_spawn: (400.0, 550.0),
            player_half_size: (25.0, 25.0),
            player_speed: 5.0,
            enemy_half_size: (20.0, 20.0),
            grid: GridLayout::default(),
            target_population: 55,
            projectile_size: (6.0, 16.0),
            projectile_speed: 5.0,
            muzzle_offset: 20.0,
            enemy_fire_chance: 0.01,
            starting_lives: 3,
            win_score: 50_000,
            tier_points: [10, 50, 100, 250, 400],
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file.  Absent fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts the simulation cannot honour: one tier per grid row,
    /// a grid to respawn into, and a fire chance that is a probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_rows = usize::from(Tier::MAX);
        if !(1..=max_rows).contains(&self.grid.rows) {
            return Err(ConfigError::Invalid(format!(
                "grid.rows must be in 1..={max_rows}, got {}",
                self.grid.rows
            )));
        }
        if self.grid.cols == 0 && self.target_population > 0 {
            return Err(ConfigError::Invalid(format!(
                "grid.cols is 0 but target_population is {}",
                self.target_population
            )));
        }
        if !(0.0..=1.0).contains(&self.enemy_fire_chance) {
            return Err(ConfigError::Invalid(format!(
                "enemy_fire_chance must be in [0, 1], got {}",
                self.enemy_fire_chance
            )));
        }
        Ok(())
    }
}
