//! Linkshelf - personal bookmark manager backend
//!
//! Serves a JSON link repository whose rows live in a spreadsheet worksheet,
//! plus the built web UI.

pub mod api;
pub mod config;
pub mod store;
