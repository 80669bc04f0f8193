//! Trail and module entity models and DTOs.
//!
//! A trail owns an ordered list of modules. Modules are never addressed on
//! their own: they are created, replaced and deleted through their trail.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trails_core::error::CoreError;
use trails_core::trail::{module_title_or_default, normalize_optional_text, validate_trail_name};
use trails_core::types::{DbId, Timestamp};

/// A trail row from the `trails` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A module row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    /// 1-based position within the parent trail.
    pub order_num: i32,
    pub trail_id: DbId,
}

/// A trail enriched with its modules, ordered by `order_num`.
#[derive(Debug, Clone, Serialize)]
pub struct TrailWithModules {
    #[serde(flatten)]
    pub trail: Trail,
    pub modules: Vec<Module>,
}

/// Request body for both creating and replacing a trail.
///
/// Every field is optional at the wire level so that a missing name is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrailInput {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Full module set, in display order. `None` and `[]` both mean "no modules".
    pub modules: Option<Vec<ModuleInput>>,
}

/// One submitted module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A validated trail ready to be written.
#[derive(Debug, Clone)]
pub struct NewTrail {
    pub name: String,
    pub description: Option<String>,
    pub modules: Vec<NewModule>,
}

/// A validated module ready to be written. Its position in
/// [`NewTrail::modules`] determines its `order_num`.
#[derive(Debug, Clone)]
pub struct NewModule {
    pub title: String,
    pub content: Option<String>,
}

impl TrailInput {
    /// Apply presence checks and normalization.
    ///
    /// Fails only when the name is missing or blank. Blank descriptions and
    /// contents become `None`; untitled modules get the default title.
    pub fn validate(&self) -> Result<NewTrail, CoreError> {
        let name = validate_trail_name(self.name.as_deref())?;
        let modules = self
            .modules
            .iter()
            .flatten()
            .map(|m| NewModule {
                title: module_title_or_default(m.title.as_deref()),
                content: normalize_optional_text(m.content.as_deref()),
            })
            .collect();

        Ok(NewTrail {
            name,
            description: normalize_optional_text(self.description.as_deref()),
            modules,
        })
    }
}
