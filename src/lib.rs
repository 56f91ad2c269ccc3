//! quizmaker - quiz generation front end.
//!
//! ## Architecture
//!
//! - **Catalog**: static domain → main → sub → detail criteria table
//! - **Selection**: cascading controller that keeps a criteria path consistent
//!   with the catalog, clearing descendants on every change
//! - **Client**: HTTP client for the external question-generation service
//! - **Submission**: one request at a time from the caller's view, with a
//!   simulated progress value published on a watch channel
//!
//! The generation service is an external collaborator; this crate only
//! builds its request payload and renders its response.

pub mod catalog;
pub mod client;
pub mod models;
pub mod render;
pub mod selection;
pub mod submission;

// Re-exports for convenience
pub use catalog::CriteriaCatalog;
pub use client::{GeneratorClient, QuestionService};
pub use models::{Config, GenerationSettings, Question, QuizmakerError, Result};
pub use selection::{Level, OptionLists, SelectionController, SelectionState};
pub use submission::{Board, Phase, ProgressPolicy, Submitter};
