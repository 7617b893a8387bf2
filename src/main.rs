//! Interactive piece-flow trainer (default binary).
//!
//! Strictly request/response: one key in, one state mutation plus a full
//! re-render out. Failed operations report a status line and the loop
//! continues.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pieceflow::core::{FlowEvent, Session};
use tui_pieceflow::input::{handle_key_event, should_quit};
use tui_pieceflow::term::{Screen, SessionView, Status};

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut session = Session::new(clock_seed());
    let view = SessionView;
    let mut status = Status::info("pick a command (1-5, 0 to quit)");

    loop {
        screen.draw(&view.render(&session, &status))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        status = match handle_key_event(key) {
            Some(action) => match session.apply(action) {
                Ok(event) => Status::success(describe(event)),
                Err(err) => Status::error(err.to_string()),
            },
            None => Status::error("invalid selection"),
        };
    }
}

fn describe(event: FlowEvent) -> String {
    match event {
        FlowEvent::Played(p) => format!("piece [{} {}] played", p.kind.as_char(), p.id),
        FlowEvent::Reserved(p) => {
            format!("piece [{} {}] moved to the reserve", p.kind.as_char(), p.id)
        }
        FlowEvent::Used(p) => {
            format!("piece [{} {}] used from the reserve", p.kind.as_char(), p.id)
        }
        FlowEvent::SwappedTop => "queue front and stack top swapped".to_string(),
        FlowEvent::SwappedRun(n) => {
            format!("swapped the first {n} queue pieces with the top {n} reserved")
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
