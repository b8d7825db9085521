//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built on Ratatui.
//! Tokens drop into columns of a configurable grid until one player lines up
//! four-in-a-row or the board fills.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identity, move application
//! - [`ui`] — Terminal UI: game view and input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
