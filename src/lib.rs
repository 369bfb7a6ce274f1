//! portfolio-term library crate.
//!
//! An MS-DOS style terminal for browsing a portfolio's file tree served by a
//! remote backend. Exposes the components for the binary and for
//! integration testing.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod client;
pub mod config;
pub mod event_loop;
pub mod fs;
pub mod input;
pub mod logging;
pub mod shell;
pub mod tasks;
pub mod terminal;
