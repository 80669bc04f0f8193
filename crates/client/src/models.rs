//! Wire types exchanged with the trails API.

use serde::{Deserialize, Serialize};
use trails_core::types::{DbId, Timestamp};

/// A trail as returned by the server, modules included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub order_num: i32,
    pub trail_id: DbId,
}

/// Body sent on create and replace. The module order is the array order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailPayload {
    pub name: String,
    pub description: Option<String>,
    pub modules: Vec<ModulePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePayload {
    pub title: String,
    pub content: Option<String>,
}

/// `{ "message": ... }` confirmation returned by deletes.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
