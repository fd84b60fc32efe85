//! Pokebot - Common Types & Logic
//!
//! Everything here is pure: the screen codec, the game-state decoders and the chat reply types.

pub mod chat;
pub mod error;
pub mod game;
pub mod screen;

pub use error::{BridgeError, BridgeResult};
