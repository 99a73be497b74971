//! API layer - the terminal front end.

pub mod command;
pub mod console;
pub mod render;

pub use command::{Command, CommandError};
pub use console::{Console, Flow};
