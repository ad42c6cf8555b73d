//! Terminal runner (default binary).
//!
//! Owns the only timer in the program: a fixed-rate loop that renders the
//! latest snapshot, polls the keyboard, and feeds the gravity clock. All game
//! changes go through the controller as intents.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{info, warn};

use blockfall::cli::{self, Config, USAGE};
use blockfall::core::Transition;
use blockfall::engine::{Controller, GravityClock};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Direction, Intent, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = cli::parse_args(&args)?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }
    cli::init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("terminal restore failed: {}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.resolve_seed();
    info!("seed {}", seed);

    let mut controller = Controller::new(seed);
    controller.subscribe(|snap, transition| {
        if let Transition::Locked(event) = transition {
            if event.game_over {
                info!("final score {} after {} lines", snap.score, snap.lines);
            }
        }
    });
    controller.dispatch(Intent::Start);

    let view = GameView::new(config.cell_width, 1);
    let mut gravity = GravityClock::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(controller.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        controller.dispatch(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let state = controller.state();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            if gravity.advance(elapsed_ms, state.is_running(), state.level()) {
                controller.dispatch(Intent::Move(Direction::Down));
            }
        }
    }
}
