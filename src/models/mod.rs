//! Core data models for quizmaker.

mod config;
mod error;
mod question;
mod settings;

pub use config::*;
pub use error::*;
pub use question::*;
pub use settings::*;
