//! Game session: participants, phases and the delayed draw.

pub mod game;
pub mod participant;
pub mod phase;
pub mod snapshot;

pub use game::{GameSession, Selection};
pub use participant::parse_participant_name;
pub use phase::{EpisodeId, Phase};
pub use snapshot::SessionSnapshot;
