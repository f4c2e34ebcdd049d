//! Joins upstream resources into the views served to clients.

pub mod id_sets;
pub mod live;

pub use live::{AbiosLiveService, LiveService};
