//! Swellscore Library
//!
//! Swell quality scoring for surf breaks. The scoring core (`compass`,
//! `daylight`, `tide_phase`, `quality`, `window`, `outlook`) is pure and works
//! on in-memory forecast and tide data; `data`, `config` and `cli` read that
//! data from files and arguments.

pub mod cli;
pub mod compass;
pub mod config;
pub mod data;
pub mod daylight;
pub mod outlook;
pub mod quality;
pub mod tide_phase;
pub mod window;
