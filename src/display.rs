//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and a read-only snapshot of the
//! session.  No game logic is performed; this module only translates arena
//! coordinates into terminal cells and queues crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use star_defender::entities::{Enemy, GameStatus, Projectile, ShipAppearance};
use star_defender::session::Snapshot;
use star_defender::GameConfig;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

fn tier_color(tier: u8) -> Color {
    match tier {
        1 => Color::Green,
        2 => Color::Cyan,
        3 => Color::Blue,
        4 => Color::Magenta,
        _ => Color::Red,
    }
}

fn tier_sprite(tier: u8) -> &'static str {
    match tier {
        1 => "«▼»",
        2 => "(◎)",
        3 => "/Ö\\",
        4 => "{#}",
        _ => "<@>",
    }
}

fn ship_sprite(appearance: ShipAppearance) -> (&'static str, Color) {
    match appearance {
        ShipAppearance::Interceptor => ("/█\\", Color::White),
        ShipAppearance::Striker => ("<█>", Color::Yellow),
        ShipAppearance::Phantom => ("[▓]", Color::Cyan),
    }
}

// ── Arena → terminal mapping ──────────────────────────────────────────────────

/// Maps arena units onto the cells inside the border (rows 2..h-2).
struct Viewport {
    width: u16,
    height: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(config: &GameConfig) -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        let cols = width.saturating_sub(3).max(1) as f32;
        let rows = height.saturating_sub(5).max(1) as f32;
        Ok(Self {
            width,
            height,
            sx: cols / config.arena_width,
            sy: rows / config.arena_height,
        })
    }

    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = 1.0 + (x * self.sx).round();
        let row = 2.0 + (y * self.sy).round();
        (
            (col.max(1.0) as u16).min(self.width.saturating_sub(2)),
            (row.max(2.0) as u16).min(self.height.saturating_sub(3)),
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snap: &Snapshot<'_>,
    config: &GameConfig,
) -> std::io::Result<()> {
    let view = Viewport::new(config)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, snap, &view)?;

    for enemy in snap.enemies {
        draw_enemy(out, enemy, &view)?;
    }
    for shot in snap.player_projectiles {
        draw_projectile(out, shot, &view, "║", C_BULLET_PLAYER)?;
    }
    for shot in snap.enemy_projectiles {
        draw_projectile(out, shot, &view, "↓", C_BULLET_ENEMY)?;
    }

    if let Some((x, y, appearance)) = snap.player {
        draw_player(out, &view, x, y, appearance)?;
    }
    draw_controls_hint(out, &view)?;

    match snap.status {
        GameStatus::GameOver => draw_end_overlay(out, snap, &view, "GAME  OVER", Color::Red)?,
        GameStatus::Win => draw_end_overlay(out, snap, &view, " YOU  WIN ", Color::Green)?,
        _ => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot<'_>, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>6}  Hi:{:>6}",
        snap.score, snap.high_score
    )))?;

    let hearts: String = "♥".repeat(snap.lives as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = view
        .width
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    appearance: ShipAppearance,
) -> std::io::Result<()> {
    // Two rows: tip above, hull below
    let (hull, color) = ship_sprite(appearance);
    let (col, row) = view.cell(x, y);
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(col, row.saturating_sub(1).max(2)))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print(hull))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: &Viewport) -> std::io::Result<()> {
    let tier = enemy.tier().get();
    let (col, row) = view.cell(enemy.x, enemy.y);
    out.queue(style::SetForegroundColor(tier_color(tier)))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print(tier_sprite(tier)))?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    shot: &Projectile,
    view: &Viewport,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let (col, row) = view.cell(shot.x, shot.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑→↓ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over / win overlay ───────────────────────────────────────────────────

fn draw_end_overlay<W: Write>(
    out: &mut W,
    snap: &Snapshot<'_>,
    view: &Viewport,
    title: &str,
    title_color: Color,
) -> std::io::Result<()> {
    let banner = format!("║    {}      ║", title);
    let score_line = format!("Final Score: {:>6}", snap.score);
    let best_line = if snap.new_best {
        format!("★ NEW BEST: {:>6} ★", snap.high_score)
    } else {
        format!("Best Score:  {:>6}", snap.high_score)
    };
    let best_color = if snap.new_best {
        Color::Yellow
    } else {
        Color::DarkGrey
    };

    let lines: [(&str, Color); 6] = [
        ("╔════════════════════╗", title_color),
        (banner.as_str(), title_color),
        ("╚════════════════════╝", title_color),
        (score_line.as_str(), Color::Yellow),
        (best_line.as_str(), best_color),
        ("R - Menu  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
