//! Top-Down Shooter entry point
//!
//! Sets up the terminal, then runs the frame loop: drain input, step the
//! simulation with the measured frame time, draw, and sleep to the target
//! frame rate.

use std::io::{self, BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal,
};

use topdown_shooter::Settings;
use topdown_shooter::consts::MAX_FRAME_DT;
use topdown_shooter::platform::KeyTracker;
use topdown_shooter::platform::terminal::TerminalSurface;
use topdown_shooter::renderer::{DrawList, draw_frame};
use topdown_shooter::sim::{Game, tick};

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Top-Down Shooter starting...");

    let settings = Settings::load();
    let seed = settings.resolve_seed();
    log::info!("Game initialized with seed: {}", seed);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Pushing the flags succeeds even where they are ignored; query support first
    let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::debug!("Key release events: {}", release_events);

    // Blocking reads live on their own thread
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &settings, seed);

    if release_events {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => log::info!("Top-Down Shooter exiting"),
        Err(e) => log::error!("Terminal error: {}", e),
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    seed: u64,
) -> io::Result<()> {
    let mut game = Game::new(settings.tuning.clone(), seed);
    let mut keys = KeyTracker::new(settings.hold_window_frames);

    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalSurface::new(cols, rows);
    let mut frame = DrawList::new();

    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(settings.target_fps.max(1)));
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        keys.begin_frame();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                other => keys.handle(&other),
            }
        }
        if keys.quit_requested() {
            return Ok(());
        }

        let dt = last.elapsed().as_secs_f32().min(MAX_FRAME_DT);
        last = Instant::now();

        let before = game.phase;
        tick(&mut game, &keys.controls(), dt);
        if game.phase != before {
            log::debug!("Phase {:?} -> {:?}", before, game.phase);
        }

        draw_frame(&game, &mut frame);
        surface.present(out, &frame)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}
