//! # feedgraph-cli
//!
//! Text front end for the feedgraph engine: parses setup and action
//! commands, renders feeds and the trending list, and runs the numbered menu
//! that the `feedgraph` binary exposes on stdin/stdout.

#![deny(unsafe_code)]

pub mod commands;
pub mod render;
pub mod session;

pub use commands::{Action, CommandError, Setup, handle_action, handle_setup};
pub use render::{render_activities, render_trending};
pub use session::{MenuChoice, Session};
