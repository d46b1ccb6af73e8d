//! Star Defender: a single-screen arcade shooter.
//!
//! Core modules:
//! - `entities`: pure data records (player, enemies, projectiles, game state)
//! - `collision`: axis-aligned bounding-box overlap
//! - `spawner`: initial enemy grid and respawn policy
//! - `ledger`: score, lives and best score
//! - `compute`: session transitions and the per-frame simulation step
//! - `input`: held-key tracking with key-down edges
//! - `session`: boundary facade owning the state, store and RNG
//! - `store`: key-value persistence for the best score
//! - `config`: tunables

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod ledger;
pub mod session;
pub mod spawner;
pub mod store;

pub use config::GameConfig;
pub use entities::{GameState, GameStatus, InputSnapshot, ShipAppearance};
pub use session::Session;
