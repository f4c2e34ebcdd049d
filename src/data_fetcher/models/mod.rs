//! Records decoded from the upstream API and the projections served to clients.

pub mod players;
pub mod roster;
pub mod series;
pub mod teams;

/// Identifier assigned by the upstream API. Never generated locally.
pub type EntityId = u64;

pub use players::Player;
pub use roster::{LineUp, PlayerRef, Roster, TeamRef};
pub use series::{Participant, RosterRef, Series, SeriesDetails};
pub use teams::Team;
