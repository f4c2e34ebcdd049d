use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: EntityId,
    #[serde(rename = "nick_name")]
    pub nickname: String,
}
