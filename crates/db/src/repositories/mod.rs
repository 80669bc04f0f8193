//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or an open transaction) as the first argument.

pub mod module_repo;
pub mod trail_repo;

pub use module_repo::ModuleRepo;
pub use trail_repo::TrailRepo;
