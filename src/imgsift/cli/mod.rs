//! # CLI Layer
//!
//! One client of the imgsift library, and the **only** place that:
//! - Parses arguments (clap, in `setup`)
//! - Installs the `tracing` subscriber
//! - Writes to stdout/stderr (in `print`)
//!
//! Handlers in `commands` build an [`imgsift::api::SiftApi`], call it, and hand
//! the returned `CmdResult` to a printer. No view logic lives here.

mod commands;
mod print;
mod setup;

pub use commands::run;
