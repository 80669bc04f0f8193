//! Presence and normalization rules for trails and their modules.
//!
//! The store accepts loosely-shaped input: only the trail name is required.
//! Everything else is normalized here so that absent and empty values are
//! stored the same way (as NULL), and untitled modules receive a placeholder.

use crate::error::CoreError;

/// Title stored for a module submitted without one.
pub const DEFAULT_MODULE_TITLE: &str = "Módulo sem título";

/// Message returned when a trail is submitted without a name.
pub const TRAIL_NAME_REQUIRED: &str = "Nome da trilha é obrigatório";

/// Entity label used in not-found errors.
pub const TRAIL_ENTITY: &str = "Trilha";

/// Validate that a trail name is present and not blank.
///
/// Returns the name trimmed of surrounding whitespace.
pub fn validate_trail_name(name: Option<&str>) -> Result<String, CoreError> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(CoreError::Validation(TRAIL_NAME_REQUIRED.to_string())),
    }
}

/// Collapse an optional text field so that empty or whitespace-only strings
/// become `None`. Other values are kept as submitted.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Resolve the stored title for a submitted module.
pub fn module_title_or_default(title: Option<&str>) -> String {
    normalize_optional_text(title).unwrap_or_else(|| DEFAULT_MODULE_TITLE.to_string())
}

/// 1-based `order_num` for the module at `index` in a submitted sequence.
pub fn order_num_for_position(index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MAX, |i| i.saturating_add(1))
}
