//! Client-side state sync for learning trails.
//!
//! Provides the HTTP client for the trails API ([`api`]), the editable
//! in-memory draft of one trail ([`draft`]) and the editing session state
//! machine that ties them together ([`editor`]). Rendering is left to the
//! caller through the [`ui::UserInterface`] seam.

pub mod api;
pub mod config;
pub mod draft;
pub mod editor;
pub mod models;
pub mod ui;
