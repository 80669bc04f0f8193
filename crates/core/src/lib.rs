//! Shared domain building blocks for the learning trails service.
//!
//! Holds the primitive type aliases, the domain error enum, and the
//! presence/normalization rules applied to trails and modules before they
//! reach the store.

pub mod error;
pub mod trail;
pub mod types;
