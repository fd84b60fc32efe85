//! Structured game state served by the control server, and its text rendering.
//!
//! Parsing is permissive about unknown fields but strict about the ones we render.

mod balls;
pub use balls::{parse_balls, render_balls, Pokeball, PokeballInventory};

mod party;
pub use party::{parse_party, render_party, PartyMember, PartyRoster};

mod trainer;
pub use trainer::{badge_count, parse_trainer, render_trainer, TrainerProfile};

/// Title plus multi-line body, ready to be placed in an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub body: String,
}

/// The structured resources the control server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Trainer,
    Party,
    Balls,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Trainer => "trainer",
            Resource::Party => "party",
            Resource::Balls => "balls",
        }
    }
}
