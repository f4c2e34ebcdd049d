use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: EntityId,
    pub name: String,
}
