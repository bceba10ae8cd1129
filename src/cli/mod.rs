pub mod commands;
pub mod handlers;

pub use commands::{CardCommand, Cli, Commands, NoteCommand, SetCommand};
