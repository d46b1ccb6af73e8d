//! All game entity types — pure data, no logic beyond exposing bounds.

use crate::collision::Rect;
use crate::config::GameConfig;
use crate::ledger::Ledger;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
    Win,
}

impl GameStatus {
    /// Game over or win: the session has ended and stepping is frozen.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Win)
    }
}

/// Selectable look of the player's craft.  Cosmetic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShipAppearance {
    #[default]
    Interceptor,
    Striker,
    Phantom,
}

impl ShipAppearance {
    pub const ALL: [ShipAppearance; 3] = [
        ShipAppearance::Interceptor,
        ShipAppearance::Striker,
        ShipAppearance::Phantom,
    ];

    fn index(self) -> usize {
        match self {
            ShipAppearance::Interceptor => 0,
            ShipAppearance::Striker => 1,
            ShipAppearance::Phantom => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ShipAppearance::Interceptor => "Interceptor",
            ShipAppearance::Striker => "Striker",
            ShipAppearance::Phantom => "Phantom",
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Directions held during the current frame.  Built by the driver from raw
/// key events; the core only ever reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
    pub appearance: ShipAppearance,
}

impl Player {
    pub fn spawn(config: &GameConfig, appearance: ShipAppearance) -> Self {
        Self {
            x: config.player_spawn.0,
            y: config.player_spawn.1,
            half_w: config.player_half_size.0,
            half_h: config.player_half_size.1,
            appearance,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, self.half_w, self.half_h)
    }
}

/// Enemy category 1..=5.  Decides the score value and the grid row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Tier(n))
    }

    /// Tier for a zero-based grid row; rows past the last tier clamp to it.
    pub fn from_row(row: usize) -> Self {
        Tier((row.min((Self::MAX - 1) as usize) as u8) + 1)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
    tier: Tier,
}

impl Enemy {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32, tier: Tier) -> Self {
        Self {
            x,
            y,
            half_w,
            half_h,
            tier,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, self.half_w, self.half_h)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A shot.  Player and enemy shots live in separate collections and travel
/// in opposite directions, so the record itself carries no owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Projectile {
    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        Self {
            x,
            y,
            w: config.projectile_size.0,
            h: config.projectile_size.1,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, self.w / 2.0, self.h / 2.0)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Present exactly while `status == Playing`.
    pub player: Option<Player>,
    pub enemies: Vec<Enemy>,
    /// Player shots, travelling up.
    pub player_projectiles: Vec<Projectile>,
    /// Enemy shots, travelling down.
    pub enemy_projectiles: Vec<Projectile>,
    pub ledger: Ledger,
    pub status: GameStatus,
    pub frame: u64,
    pub config: GameConfig,
}
