//! Core simulation for a snake flying through a 3D grid
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front-end and the headless runner both drive it through
//! [`Simulation`].

pub mod action;
pub mod config;
pub mod direction;
pub mod engine;
pub mod orientation;
pub mod scheduler;
pub mod simulation;
pub mod state;

// Re-export commonly used types
pub use action::TurnRequest;
pub use config::GameConfig;
pub use direction::{resolve_rotation, Axis, Direction, Rotation};
pub use engine::{GameEngine, StepResult};
pub use orientation::Orientation;
pub use scheduler::TurnScheduler;
pub use simulation::{CellKind, Simulation, Snapshot, TickStatus};
pub use state::{CollisionType, GameState, GridCell, Snake};
