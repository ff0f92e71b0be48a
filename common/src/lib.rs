//! Types shared between the minesweeper board engine and whatever drives it.

pub mod error;
pub mod models;
pub mod protocol;

pub use error::BoardError;
