//! taskdeck library
//!
//! This module exports the task store, calendar projection, and export
//! components for the CLI binary and integration tests.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod export;
pub mod types;
