//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching the database rows
//! - `Deserialize` input DTOs as they arrive over the wire
//! - Validated insert structs handed to the repositories

pub mod trail;
