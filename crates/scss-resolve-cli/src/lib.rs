//! scss-resolve CLI
//!
//! Thin command-line front end over the `scss-resolve` library:
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - config merging, resolution and output
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod logger;
