//! Learning modules: sectioned content with a short quiz per module.
//!
//! Four modules cover the training material. Each has four content
//! sections navigated one at a time and a three-question quiz at the
//! end; finishing the quiz marks the module complete in the progress
//! store.

pub mod content;
pub mod quiz;

// Re-export commonly used types
pub use content::{LearningModule, ModuleId, Section};
pub use quiz::{AnswerFeedback, QuizQuestion, QuizState};
