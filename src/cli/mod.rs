//! Interactive console boundary
//!
//! This module validates raw input, handles prompting, and runs the menu loop
//! that drives the roster.

pub mod menu;
pub mod prompt;
pub mod validate;

pub use menu::{MenuChoice, Session};
pub use prompt::Console;
