//! The seam between the submission cycle and whatever generates questions.

use crate::models::{GenerationSettings, Question, Result};
use std::future::Future;
use std::sync::Arc;

/// Something that turns generation settings into quiz items.
///
/// [`GeneratorClient`](crate::client::GeneratorClient) is the HTTP
/// implementation; the submission cycle only depends on this trait.
pub trait QuestionService: Send + Sync {
    /// Generate questions for `settings`.
    fn generate(
        &self,
        settings: &GenerationSettings,
    ) -> impl Future<Output = Result<Vec<Question>>> + Send;

    /// Generate questions for `settings` as a CSV file.
    fn export_csv(
        &self,
        settings: &GenerationSettings,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

impl<S: QuestionService> QuestionService for Arc<S> {
    fn generate(
        &self,
        settings: &GenerationSettings,
    ) -> impl Future<Output = Result<Vec<Question>>> + Send {
        S::generate(self, settings)
    }

    fn export_csv(
        &self,
        settings: &GenerationSettings,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send {
        S::export_csv(self, settings)
    }
}
