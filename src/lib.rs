//! Panelwise Library
//!
//! This library provides core functionality for the Panelwise trainer,
//! including the electrical panel placement simulator, the learning
//! modules with their quizzes, and progress persistence.

// Module declarations
pub mod config;
pub mod constants;
pub mod learning;
pub mod models;
pub mod progress;
pub mod simulator;
pub mod tui;
