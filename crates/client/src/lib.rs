//! Terminal frontend for the duel.
//!
//! The frontend is a pure presentation layer over `game-core`: it turns key
//! presses into hero actions, hands them to the engine one turn at a time,
//! and renders the returned turn reports as status text, a battle log and
//! cosmetic cues. Input is locked once the battle is over.

mod app;
pub mod config;
mod input;
pub mod logging;
mod message;
pub mod presentation;
mod state;

pub use app::DuelApp;
pub use config::ClientConfig;
pub use input::{InputHandler, KeyAction};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use state::AppState;
