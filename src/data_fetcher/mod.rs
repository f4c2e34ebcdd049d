//! Everything between the aggregation layer and the network: request
//! context, transport chain, typed client and the upstream records.

pub mod api;
pub mod context;
pub mod models;
pub mod transport;

pub use api::{AbiosClient, HttpAbiosClient};
pub use context::RequestContext;
pub use models::{EntityId, Player, Roster, Series, SeriesDetails, Team};
