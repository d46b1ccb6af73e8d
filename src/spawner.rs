//! Enemy population: the opening grid and the respawn policy that keeps
//! the population at its target while a session is playing.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, Tier};

fn enemy_at(config: &GameConfig, row: usize, col: usize) -> Enemy {
    let (x, y) = config.grid.cell(row, col);
    let (half_w, half_h) = config.enemy_half_size;
    Enemy::new(x, y, half_w, half_h, Tier::from_row(row))
}

/// The opening formation: one tier per row, row-major order.
pub fn initial_grid(config: &GameConfig) -> Vec<Enemy> {
    let grid = &config.grid;
    let mut enemies = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            enemies.push(enemy_at(config, row, col));
        }
    }
    enemies
}

/// Top the population back up to `config.target_population`.
///
/// Each new enemy takes a random grid cell without checking whether the
/// cell is already occupied, so respawned enemies may overlap live ones.
/// Returns how many enemies were added.
pub fn respawn(enemies: &mut Vec<Enemy>, config: &GameConfig, rng: &mut impl Rng) -> usize {
    let grid = &config.grid;
    if grid.rows == 0 || grid.cols == 0 {
        return 0;
    }
    let mut added = 0;
    while enemies.len() < config.target_population {
        let row = rng.gen_range(0..grid.rows);
        let col = rng.gen_range(0..grid.cols);
        enemies.push(enemy_at(config, row, col));
        added += 1;
    }
    added
}
