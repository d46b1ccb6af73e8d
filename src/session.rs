//! Boundary facade: owns the game state, the injected high-score store and
//! the injected RNG, and exposes the calls a driver makes each frame.

use rand::Rng;

use crate::compute;
use crate::config::GameConfig;
use crate::entities::{Enemy, GameState, GameStatus, InputSnapshot, Projectile, ShipAppearance};
use crate::store::{self, KeyValueStore};

/// Read-only view handed to the presentation layer after each step.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub status: GameStatus,
    /// Player centre and look, absent outside `Playing`.
    pub player: Option<(f32, f32, ShipAppearance)>,
    pub enemies: &'a [Enemy],
    pub player_projectiles: &'a [Projectile],
    pub enemy_projectiles: &'a [Projectile],
    pub score: u32,
    pub lives: u32,
    pub high_score: u32,
    /// The session that just ended raised the best score.
    pub new_best: bool,
}

pub struct Session<S, R> {
    state: GameState,
    store: S,
    rng: R,
    new_best: bool,
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Build a session in the menu, reading the best score from `store`.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let high_score = store::load_high_score(&store);
        Self {
            state: compute::new_state(config, high_score),
            store,
            rng,
            new_best: false,
        }
    }

    pub fn start(&mut self, appearance: ShipAppearance) {
        self.state = compute::start_game(&self.state, appearance);
        self.new_best = false;
    }

    pub fn restart(&mut self) {
        self.state = compute::restart(&self.state);
        self.new_best = false;
    }

    /// Fire on a key-down edge.
    pub fn fire(&mut self) {
        self.state = compute::player_shoot(&self.state);
    }

    /// Advance one frame.  Persists the best score on the frame the session
    /// ends; does nothing once it has ended.
    pub fn step(&mut self, input: &InputSnapshot) -> GameStatus {
        if self.state.status != GameStatus::Playing {
            return self.state.status;
        }
        let best_before = self.state.ledger.high_score;
        self.state = compute::tick(&self.state, input, &mut self.rng);
        if self.state.status.is_terminal() {
            self.new_best = self.state.ledger.high_score > best_before;
            store::save_high_score(&mut self.store, self.state.ledger.score);
        }
        self.state.status
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn high_score(&self) -> u32 {
        self.state.ledger.high_score
    }

    /// Whether the last ended session beat the previous best.
    pub fn new_best(&self) -> bool {
        self.new_best
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let s = &self.state;
        Snapshot {
            status: s.status,
            player: s.player.as_ref().map(|p| (p.x, p.y, p.appearance)),
            enemies: &s.enemies,
            player_projectiles: &s.player_projectiles,
            enemy_projectiles: &s.enemy_projectiles,
            score: s.ledger.score,
            lives: s.ledger.lives,
            high_score: s.ledger.high_score,
            new_best: self.new_best,
        }
    }

    /// Direct access for arranging scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
