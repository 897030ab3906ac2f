//! Interactive terminal front end.
//!
//! Everything the session reacts to arrives through one channel: key presses
//! from an input thread, ticks from a timer thread, and completions from the
//! worker threads that run git commands. The loop below drains that channel one
//! message at a time, so [`SessionState`] has a single writer and the screen
//! stays responsive while a slow fetch runs.

pub mod keymap;
pub mod view;

use crate::core::{error::Result, gateway::Gateway, state::Snapshot};
use crate::session::{dispatch, Command, Completion, Effect, Event, SessionState};
use crossterm::{
    event::{self, Event as TerminalEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub limit: Option<usize>,
    pub tick: Duration,
}

/// Input to the main loop
enum LoopEvent {
    Terminal(TerminalEvent),
    Tick,
    Completed(Completion),
}

/// Restores the terminal even when the loop bails out with an error
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub fn run(snapshot: Snapshot, gateway: Arc<dyn Gateway>, options: TuiOptions) -> Result<()> {
    let mut state = SessionState::new(snapshot, options.limit);

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;

    let (tx, rx) = mpsc::channel::<LoopEvent>();
    spawn_input_reader(tx.clone());
    spawn_ticker(tx.clone(), options.tick);

    log::debug!("Session started with {} branches", state.full().len());
    draw(&mut terminal, &state)?;

    while let Ok(message) = rx.recv() {
        let event = match message {
            LoopEvent::Terminal(TerminalEvent::Key(key)) => {
                match keymap::resolve(key, state.mode()) {
                    Some(event) => event,
                    None => continue,
                }
            }
            LoopEvent::Terminal(TerminalEvent::Resize(..)) => Event::Tick,
            LoopEvent::Terminal(_) => continue,
            LoopEvent::Tick => Event::Tick,
            LoopEvent::Completed(completion) => Event::Completed(completion),
        };

        match state.apply(event) {
            Effect::None => {}
            Effect::Dispatch(command) => spawn_worker(command, Arc::clone(&gateway), tx.clone()),
            Effect::Quit => break,
        }
        draw(&mut terminal, &state)?;
    }

    terminal.show_cursor()?;
    log::debug!("Session ended");
    Ok(())
}

fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, state: &SessionState) -> Result<()> {
    let now = chrono::Utc::now();
    terminal.draw(|frame| view::draw(frame, state, now))?;
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(terminal_event) => {
                if tx.send(LoopEvent::Terminal(terminal_event)).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::warn!("Terminal input failed: {e}");
                break;
            }
        }
    });
}

fn spawn_ticker(tx: mpsc::Sender<LoopEvent>, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(LoopEvent::Tick).is_err() {
            break;
        }
    });
}

fn spawn_worker(command: Command, gateway: Arc<dyn Gateway>, tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let completion = dispatch::execute(command, gateway.as_ref());
        // The loop may already be gone after quit
        let _ = tx.send(LoopEvent::Completed(completion));
    });
}
