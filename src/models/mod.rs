//! Data models for components, panel zones, and levels.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and
//! business logic.

pub mod component;
pub mod level;
pub mod zone;

// Re-export all model types
pub use component::{ComponentInfo, ComponentKind};
pub use level::{requirements_for, Level, Requirements};
pub use zone::ZoneId;
