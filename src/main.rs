mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use star_defender::input::KeyHold;
use star_defender::store::{JsonFileStore, KeyValueStore};
use star_defender::{GameConfig, GameStatus, InputSnapshot, Session, ShipAppearance};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Optional JSON file overriding gameplay tunables.
const CONFIG_ENV: &str = "STAR_DEFENDER_CONFIG";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const UP_KEYS: [KeyCode; 3] = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN_KEYS: [KeyCode; 3] = [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];

fn input_snapshot(keys: &KeyHold<KeyCode>, frame: u64) -> InputSnapshot {
    InputSnapshot {
        left: keys.any_held(&LEFT_KEYS, frame),
        right: keys.any_held(&RIGHT_KEYS, frame),
        up: keys.any_held(&UP_KEYS, frame),
        down: keys.any_held(&DOWN_KEYS, frame),
    }
}

/// Route log output to a file beside the score file.  Logging to stderr
/// would draw over the alternate screen; if the file cannot be opened the
/// program runs without a logger.
fn init_logging() {
    let path = JsonFileStore::default_path().with_extension("log");
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn load_config() -> GameConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => GameConfig::from_json_file(&path).unwrap_or_else(|e| {
            warn!("using default config, {path}: {e}");
            GameConfig::default()
        }),
        Err(_) => GameConfig::default(),
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(ShipAppearance),
    Quit,
}

fn draw_menu<W: Write>(
    out: &mut W,
    high_score: u32,
    selected: ShipAppearance,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  STAR  DEFENDER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if high_score > 0 {
        let hs_str = format!("Best Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Choose your craft:"))?;

    for (i, ship) in ShipAppearance::ALL.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        let marker = if *ship == selected { "▶ " } else { "  " };
        let color = if *ship == selected {
            Color::Yellow
        } else {
            Color::DarkGrey
        };
        out.queue(cursor::MoveTo(cx.saturating_sub(10), row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!("{}{}", marker, ship.label())))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("↑ ↓ : Choose   ENTER : Start   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: u32,
    mut selected: ShipAppearance,
) -> std::io::Result<MenuResult> {
    loop {
        draw_menu(out, high_score, selected)?;
        // Block until the user makes a choice
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Up | KeyCode::Left => selected = selected.prev(),
                KeyCode::Down | KeyCode::Right => selected = selected.next(),
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start(selected)),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: a `KeyHold` records the frame of the last press or repeat
/// of every key; each frame the still-fresh keys become an `InputSnapshot`.
/// Fire is edge-triggered: a Space press while Space is already held is
/// auto-repeat and does not fire again.
fn game_loop<W: Write, S: KeyValueStore>(
    out: &mut W,
    session: &mut Session<S, StdRng>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut keys = KeyHold::new(HOLD_WINDOW);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    let fresh = keys.press(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char(' ') if fresh => session.fire(),
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if session.status().is_terminal() =>
                        {
                            session.restart();
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => keys.repeat(code, frame),
                KeyEventKind::Release => keys.release(&code),
            }
        }

        if session.status() == GameStatus::Playing {
            let input = input_snapshot(&keys, frame);
            session.step(&input);
        }

        let config = session.state().config.clone();
        display::render(out, &session.snapshot(), &config)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let store = JsonFileStore::new(JsonFileStore::default_path());
    info!("high score file: {}", store.path().display());
    let mut session = Session::new(load_config(), store, StdRng::from_entropy());
    let mut selected = ShipAppearance::default();

    loop {
        match show_menu(out, rx, session.high_score(), selected)? {
            MenuResult::Quit => break,
            MenuResult::Start(ship) => {
                selected = ship;
                session.start(ship);
                if game_loop(out, &mut session, rx)? {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
