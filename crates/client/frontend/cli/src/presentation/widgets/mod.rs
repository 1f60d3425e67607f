//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads view models and renders to a terminal frame.
//! Widgets follow these principles:
//! - Read-only access to view models (immutable)
//! - No side effects or state mutations
//! - Framework-specific (Ratatui) but styled through PresentationMapper where applicable

pub mod board;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod messages;
pub mod token;
