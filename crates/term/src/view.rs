//! SessionView: maps `core::Session` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;
use pieceflow_core::{KindSource, Session};
use pieceflow_types::{Piece, PieceKind, SWAP_RUN_LEN};

/// Styling for a run of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

/// A styled run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::default())
    }
}

/// One row of the rendered screen.
pub type Line = Vec<Span>;

/// Collapse a line to its unstyled text (for tests and logs).
pub fn line_to_string(line: &Line) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}

/// Severity of the status line shown under the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// Outcome of the previous command, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }
}

/// Renders the session state, menu and status into lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionView;

impl SessionView {
    pub fn render<S: KindSource>(&self, session: &Session<S>, status: &Status) -> Vec<Line> {
        let label = SpanStyle::default().bold();
        let mut lines = Vec::new();

        lines.push(vec![Span::new("PIECE FLOW TRAINER", label)]);
        lines.push(Vec::new());

        let mut queue_line = vec![Span::new("NEXT QUEUE (head -> tail): ", label)];
        push_pieces(&mut queue_line, session.queue().iter());
        lines.push(queue_line);

        let mut stack_line = vec![Span::new("RESERVE    (top -> base):  ", label)];
        push_pieces(&mut stack_line, session.stack().iter());
        lines.push(stack_line);

        lines.push(Vec::new());
        for entry in menu_entries() {
            lines.push(vec![Span::plain(format!("  {entry}"))]);
        }
        lines.push(Vec::new());

        lines.push(vec![Span::new(&status.text, tone_style(status.tone))]);
        lines
    }
}

fn menu_entries() -> [String; 6] {
    [
        "[1] play the piece at the front of the queue".to_string(),
        "[2] reserve the front piece onto the stack".to_string(),
        "[3] use the reserved piece on top of the stack".to_string(),
        "[4] swap the queue front with the stack top".to_string(),
        format!("[5] swap the first {SWAP_RUN_LEN} queue pieces with the top {SWAP_RUN_LEN} reserved"),
        "[0] quit".to_string(),
    ]
}

fn push_pieces<'a>(line: &mut Line, pieces: impl Iterator<Item = &'a Piece>) {
    let mut any = false;
    for piece in pieces {
        line.push(Span::new(
            format!("[{} {}] ", piece.kind.as_char(), piece.id),
            piece_style(piece.kind),
        ));
        any = true;
    }
    if !any {
        line.push(Span::new("(empty)", SpanStyle::default().dim()));
    }
}

fn piece_style(kind: PieceKind) -> SpanStyle {
    let fg = match kind {
        PieceKind::I => Color::Rgb {
            r: 80,
            g: 220,
            b: 220,
        },
        PieceKind::O => Color::Rgb {
            r: 240,
            g: 220,
            b: 80,
        },
        PieceKind::T => Color::Rgb {
            r: 200,
            g: 120,
            b: 220,
        },
        PieceKind::L => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    };
    SpanStyle::fg(fg).bold()
}

fn tone_style(tone: Tone) -> SpanStyle {
    match tone {
        Tone::Info => SpanStyle::default().dim(),
        Tone::Success => SpanStyle::fg(Color::Green),
        Tone::Error => SpanStyle::fg(Color::Red).bold(),
    }
}
