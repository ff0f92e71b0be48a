//! Single-player minesweeper: the board engine plus a line-oriented session
//! that drives it over any reader/writer pair.

pub mod config;
pub mod data;
pub mod logic;
pub mod render;
pub mod session;

pub use data::Board;
pub use minesweeper_common::{
    BoardError,
    models::{Cell, GameParams, Pos},
    protocol::RevealOutcome,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
