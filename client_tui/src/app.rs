use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, queue, style, terminal};
use game_core::{Config, Game, NullSurface};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::{Cli, Mode};
use crate::clock::Ticker;
use crate::input::{is_quit, KeyTranslator};
use crate::logging::{self, LogTarget};
use crate::surface::{to_u16, TerminalSurface};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let mode = cli.mode();
    let target = match (&cli.log_file, mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Headless { .. }) => LogTarget::Stderr,
        // Anything written to the terminal would tear the frame
        (None, Mode::Play) => LogTarget::Off,
    };
    logging::init(target)?;

    let config = Config::default();
    match mode {
        Mode::Play => play(config),
        Mode::Headless { ticks } => {
            headless(config, ticks);
            Ok(())
        }
    }
}

/// Per-run totals reported by headless mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub bounces: usize,
    pub ball_resets: usize,
    pub ai_skips: usize,
}

/// Simulate `ticks` ticks as fast as possible without drawing anything
pub fn headless(config: Config, ticks: u64) -> Summary {
    let mut game = Game::new(config);
    let mut summary = Summary::default();

    for _ in 0..ticks {
        game.tick(&mut NullSurface);
        summary.ticks += 1;
        summary.bounces += game.events.bounces.len();
        summary.ball_resets += usize::from(game.events.ball_reset.is_some());
        summary.ai_skips += usize::from(game.events.ai_skipped);
    }

    info!(
        ticks = summary.ticks,
        bounces = summary.bounces,
        ball_resets = summary.ball_resets,
        ai_skips = summary.ai_skips,
        ball = ?game.ball_rect().map(|r| r.pos),
        "headless run finished"
    );
    summary
}

/// Raw-mode alternate screen, restored on drop
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { enhanced: false };
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            guard.enhanced = true;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn play(config: Config) -> Result<(), AppError> {
    let mut out = io::stdout();
    let guard = TerminalGuard::enter(&mut out)?;
    info!(release_events = guard.enhanced, "terminal ready");

    let interval = config.tick_interval();
    let mut game = Game::new(config);
    let mut surface = TerminalSurface::new();
    let mut keys = KeyTranslator::new(guard.enhanced);
    let mut ticker = Ticker::new(interval, Instant::now());

    loop {
        // Input is handled between ticks, never during one
        while event::poll(ticker.remaining(Instant::now()))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if is_quit(&key) {
                info!(ticks = game.tick.0, "quit");
                return Ok(());
            }
            if let Some(input) = keys.translate(&key, Instant::now()) {
                debug!(?input, "key");
                game.handle_input(input);
            }
        }
        if let Some(input) = keys.expire(Instant::now()) {
            debug!(?input, "synthesised key release");
            game.handle_input(input);
        }

        game.tick(&mut surface);
        if let Some(side) = game.events.ball_reset {
            info!(?side, tick = game.tick.0, "ball reset");
        }
        surface.present(&mut out)?;
        draw_status(&mut out, surface.rows(), game.tick.0)?;

        ticker.advance(Instant::now());
    }
}

fn draw_status<W: Write>(out: &mut W, row: usize, tick: u64) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, to_u16(row)),
        style::Print(format!("↑/↓ move   q quit   tick {tick}"))
    )?;
    out.flush()
}
