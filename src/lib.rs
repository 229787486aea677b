//! Skyward — a terminal Flappy-Bird arcade game.
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod game;
pub mod geometry;
pub mod input;
pub mod save_manager;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
