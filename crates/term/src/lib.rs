//! Terminal front end: pure view rendering plus a thin screen driver.

pub mod screen;
pub mod view;

pub use screen::Screen;
pub use view::{line_to_string, Line, SessionView, Span, SpanStyle, Status, Tone};
