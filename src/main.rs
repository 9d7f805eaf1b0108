mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hacker_runner::assets::Assets;
use hacker_runner::audio::{drain_cues, Silent, TerminalBell};
use hacker_runner::clock::FrameClock;
use hacker_runner::compute::{init_state, tick};
use hacker_runner::config::GameConfig;
use hacker_runner::input::{self, map_key, Action, Command};
use hacker_runner::score::{finish_session, JsonScoreStore, ScoreStore, SessionResult};

use display::View;

#[derive(Parser, Debug)]
#[command(name = "hacker_runner", about = "Endless terminal runner: dodge firewalls and drones")]
struct Args {
    /// TOML file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible spawn sequences.
    #[arg(long)]
    seed: Option<u64>,
    /// Where the best score is kept.
    #[arg(long)]
    score_file: Option<PathBuf>,
    /// Write logs here; the terminal itself is busy with the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Directory of optional text sprites.
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,
}

/// Everything that outlives a single session.
struct Context {
    cfg: GameConfig,
    rng: StdRng,
    store: JsonScoreStore,
    mute: bool,
    assets: Assets,
    best: u32,
}

enum MenuResult {
    Start,
    Quit,
}

enum LoopExit {
    Retry,
    Menu,
    Quit,
}

fn init_logging(path: Option<&Path>) -> hacker_runner::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    ctx: &Context,
) -> std::io::Result<MenuResult> {
    display::render_menu(out, ctx.best, ctx.cfg.score.packet_bonus)?;

    // Block until the user makes a choice
    loop {
        let Ok(ev) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        match ev {
            Event::Key(key) => match map_key(&key) {
                Some(Action::Command(Command::Start)) => return Ok(MenuResult::Start),
                Some(Action::Command(Command::Quit)) => return Ok(MenuResult::Quit),
                _ => {}
            },
            Event::Resize(..) => display::render_menu(out, ctx.best, ctx.cfg.score.packet_bonus)?,
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One session from start to the player's choice on the game-over screen.
///
/// Each frame drains pending input, advances the simulation by the clamped
/// real-time delta while the session runs, plays queued cues and renders.
/// Once the session ends the simulation stops; only the overlay is redrawn.
fn game_loop<W: Write>(
    out: &mut W,
    ctx: &mut Context,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<LoopExit> {
    let cfg = ctx.cfg.clone();
    let frame = Duration::from_millis(cfg.clock.frame_ms.max(1));

    let mut state = init_state(&cfg);
    let mut clock = FrameClock::new(cfg.clock.max_step);
    let mut gestures = input::gesture_tracker(&cfg);
    let mut result: Option<SessionResult> = None;

    clock.start(Instant::now());
    info!("session started");

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let action = match ev {
                Event::Key(key) => map_key(&key),
                Event::Mouse(mouse) => gestures.on_mouse(&mouse).map(Action::Intent),
                _ => None,
            };
            match action {
                Some(Action::Intent(intent)) => {
                    state = input::apply(&state, intent, &cfg.player);
                }
                Some(Action::Command(Command::Quit)) => return Ok(LoopExit::Quit),
                Some(Action::Command(Command::Retry)) if result.is_some() => {
                    return Ok(LoopExit::Retry);
                }
                Some(Action::Command(Command::Menu)) if result.is_some() => {
                    return Ok(LoopExit::Menu);
                }
                _ => {}
            }
        }

        // ── Step ──────────────────────────────────────────────────────────────
        let dt = clock.step(frame_start);
        if state.is_running() {
            state = tick(&state, dt, &cfg, &mut ctx.rng);
            if !state.is_running() {
                let finished = finish_session(&state, &mut ctx.store, &cfg);
                ctx.best = finished.best;
                result = Some(finished);
            }
        }
        // Bells share the frame buffer and go out with the next flush.
        if ctx.mute {
            drain_cues(&mut state.cues, &mut Silent);
        } else {
            drain_cues(&mut state.cues, &mut TerminalBell::new(&mut *out));
        }

        let view = View {
            assets: &ctx.assets,
            player_cfg: &cfg.player,
            best: ctx.best,
            result: result.as_ref(),
        };
        display::render(out, &state, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> hacker_runner::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let cfg = GameConfig::load_or_default(args.config.as_deref());
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = JsonScoreStore::new(
        args.score_file
            .clone()
            .unwrap_or_else(JsonScoreStore::default_path),
    );
    let assets = args
        .assets
        .as_deref()
        .map(Assets::load_dir)
        .unwrap_or_else(Assets::empty);
    let best = store.load();
    info!(seed = ?args.seed, best, score_file = %store.path().display(), "starting");

    let mut ctx = Context {
        cfg,
        rng,
        store,
        mute: args.mute,
        assets,
        best,
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    if out.execute(EnableMouseCapture).is_err() {
        warn!("mouse capture unavailable; keyboard only");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped, program exiting
            }
        }
    });

    let result = run(&mut out, &mut ctx, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        warn!("terminal error: {err}");
    }
    result.map_err(Into::into)
}

fn run<W: Write>(
    out: &mut W,
    ctx: &mut Context,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    'menu: loop {
        match show_menu(out, rx, ctx)? {
            MenuResult::Quit => break,
            MenuResult::Start => loop {
                match game_loop(out, ctx, rx)? {
                    LoopExit::Retry => continue,
                    LoopExit::Menu => continue 'menu,
                    LoopExit::Quit => break 'menu,
                }
            },
        }
    }
    Ok(())
}
