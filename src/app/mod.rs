// Presentation layer: keypad state and the terminal front end driving it.

pub mod commands;
pub mod display;
pub mod repl;
pub mod session;

pub use repl::Repl;
pub use session::{Key, Outcome, Session};
