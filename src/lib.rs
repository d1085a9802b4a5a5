//! Snake3D - Snake in a 49x49x49 cube
//!
//! This library provides:
//! - Core game logic: direction algebra, orientation, movement and the turn queue (game module)
//! - Terminal rendering of the cube as two projections (render module)
//! - Keyboard mapping (input module)
//! - Interactive and scripted runners (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
