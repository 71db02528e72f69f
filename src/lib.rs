//! Terminal maze game.
//!
//! A maze is carved with a randomized depth-first walk, the shortest route from the start to the
//! goal is found with A*, and the player then walks the maze with the keyboard while the route is
//! drawn as a hint.
//!
//! The algorithmic core lives in [`grid`], [`maze`] and [`pathfinding`]; [`session`] holds the game
//! rules and [`App`] drives the terminal frame loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod config;
mod events;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod pathfinding;
pub mod session;
pub mod types;
mod ui;

pub use app::App;
