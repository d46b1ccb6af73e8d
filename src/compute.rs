//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.

use log::{debug, info};
use rand::Rng;

use crate::collision::overlaps;
use crate::config::GameConfig;
use crate::entities::{
    GameState, GameStatus, InputSnapshot, Player, Projectile, ShipAppearance, Tier,
};
use crate::ledger::Ledger;
use crate::spawner;

/// Score awarded per enemy destroyed.
pub fn points_for(tier: Tier, config: &GameConfig) -> u32 {
    config.tier_points[(tier.get() - Tier::MIN) as usize]
}

// ── Session transitions ──────────────────────────────────────────────────────

/// Pre-game state: menu, no entities, best score carried in.
pub fn new_state(config: GameConfig, high_score: u32) -> GameState {
    GameState {
        player: None,
        enemies: Vec::new(),
        player_projectiles: Vec::new(),
        enemy_projectiles: Vec::new(),
        ledger: Ledger::new(high_score),
        status: GameStatus::Menu,
        frame: 0,
        config,
    }
}

/// menu → playing.  Fresh counters, fresh player, opening enemy grid.
/// Ignored outside the menu.
pub fn start_game(state: &GameState, appearance: ShipAppearance) -> GameState {
    if state.status != GameStatus::Menu {
        return state.clone();
    }
    let config = &state.config;
    let mut ledger = state.ledger.clone();
    ledger.reset(config.starting_lives);
    info!("session started as {}", appearance.label());
    GameState {
        player: Some(Player::spawn(config, appearance)),
        enemies: spawner::initial_grid(config),
        player_projectiles: Vec::new(),
        enemy_projectiles: Vec::new(),
        ledger,
        status: GameStatus::Playing,
        frame: 0,
        config: config.clone(),
    }
}

/// game-over | win → menu.  Clears every entity collection.
/// Ignored unless the session has ended.
pub fn restart(state: &GameState) -> GameState {
    if !state.status.is_terminal() {
        return state.clone();
    }
    new_state(state.config.clone(), state.ledger.high_score)
}

fn end_session(state: &mut GameState, status: GameStatus) {
    state.status = status;
    state.player = None;
    let improved = state.ledger.commit_high_score();
    info!(
        "session ended ({:?}) with score {}{}",
        status,
        state.ledger.score,
        if improved { ", new best" } else { "" }
    );
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire a shot from the player's nose.  No-op when nobody is playing.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.status != GameStatus::Playing {
        return next;
    }
    if let Some(player) = &state.player {
        let y = player.y - state.config.muzzle_offset;
        next.player_projectiles.push(Projectile::new(player.x, y, &state.config));
    }
    next
}

fn move_player(player: &mut Player, input: &InputSnapshot, config: &GameConfig) {
    let speed = config.player_speed;
    if input.left {
        player.x -= speed;
    }
    if input.right {
        player.x += speed;
    }
    if input.up {
        player.y -= speed;
    }
    if input.down {
        player.y += speed;
    }
    // f32::clamp panics when the arena is narrower than the ship
    player.x = player.x.max(player.half_w).min(config.arena_width - player.half_w);
    player.y = player.y.max(player.half_h).min(config.arena_height - player.half_h);
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Outside `Playing` this returns the state unchanged.
pub fn tick(state: &GameState, input: &InputSnapshot, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    if state.status != GameStatus::Playing {
        return next;
    }
    next.frame += 1;
    let config = state.config.clone();

    // ── 1. Player movement ───────────────────────────────────────────────────
    if let Some(player) = next.player.as_mut() {
        move_player(player, input, &config);
    }

    // ── 2. Player shots travel up, gone once above the top edge ──────────────
    for shot in &mut next.player_projectiles {
        shot.y -= config.projectile_speed;
    }
    next.player_projectiles.retain(|p| p.y >= 0.0);

    // ── 3. Enemy shots travel down; each one touching the player costs a life
    for shot in &mut next.enemy_projectiles {
        shot.y += config.projectile_speed;
    }
    next.enemy_projectiles.retain(|p| p.y <= config.arena_height);
    if let Some(player) = &next.player {
        let player_box = player.bounds();
        let before = next.enemy_projectiles.len();
        next.enemy_projectiles.retain(|p| !overlaps(&p.bounds(), &player_box));
        for _ in next.enemy_projectiles.len()..before {
            next.ledger.lose_life();
        }
    }

    // ── 4. Collision: player shots ↔ enemies ─────────────────────────────────
    // Newest shot first, newest enemy first; one enemy per shot.  Removals
    // are applied after the scan.
    let mut spent = vec![false; next.player_projectiles.len()];
    let mut killed = vec![false; next.enemies.len()];
    for (pi, shot) in next.player_projectiles.iter().enumerate().rev() {
        let shot_box = shot.bounds();
        for (ei, enemy) in next.enemies.iter().enumerate().rev() {
            if killed[ei] || !overlaps(&shot_box, &enemy.bounds()) {
                continue;
            }
            spent[pi] = true;
            killed[ei] = true;
            next.ledger.award(points_for(enemy.tier(), &config));
            break;
        }
    }
    let mut spent_iter = spent.into_iter();
    next.player_projectiles.retain(|_| !spent_iter.next().unwrap_or(false));
    let mut killed_iter = killed.into_iter();
    next.enemies.retain(|_| !killed_iter.next().unwrap_or(false));

    // ── 5. Respawn ───────────────────────────────────────────────────────────
    let added = spawner::respawn(&mut next.enemies, &config, rng);
    if added > 0 {
        debug!("frame {}: respawned {} enemies", next.frame, added);
    }

    // ── 6. Terminal checks ───────────────────────────────────────────────────
    if next.ledger.is_depleted() {
        end_session(&mut next, GameStatus::GameOver);
    } else if next.ledger.score >= config.win_score {
        end_session(&mut next, GameStatus::Win);
    }

    // ── 7. Enemy fire ────────────────────────────────────────────────────────
    if next.status == GameStatus::Playing {
        enemy_fire(&mut next, rng);
    }

    next
}

/// With `enemy_fire_chance` per frame, one random enemy fires downward.
fn enemy_fire(state: &mut GameState, rng: &mut impl Rng) {
    if !rng.gen_bool(state.config.enemy_fire_chance) {
        return;
    }
    if state.enemies.is_empty() {
        return;
    }
    let shooter = &state.enemies[rng.gen_range(0..state.enemies.len())];
    let shot = Projectile::new(
        shooter.x,
        shooter.y + state.config.muzzle_offset,
        &state.config,
    );
    debug!("frame {}: enemy fired from ({}, {})", state.frame, shot.x, shot.y);
    state.enemy_projectiles.push(shot);
}
