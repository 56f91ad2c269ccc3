//! HTTP client for the question-generation service.
//!
//! One request per submission, no retries. Every failure (status, timeout,
//! transport, undecodable body) surfaces as a generation failure.

use crate::client::QuestionService;
use crate::models::{
    ConfigError, GenerateResponse, GenerationSettings, Question, QuizmakerError, Result,
    ServiceConfig, ServiceError,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Error body some service deployments send alongside a failure status.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

/// Client for the generation service.
pub struct GeneratorClient {
    client: reqwest::Client,
    generate_url: String,
    csv_url: String,
    timeout: Duration,
}

impl GeneratorClient {
    /// Create a client for the configured service.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(ConfigError::Invalid("service.timeout_secs must be positive".into()).into());
        }
        if config.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("service.base_url must not be empty".into()).into());
        }
        let timeout = Duration::from_secs(config.timeout_secs);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(QuizmakerError::Network)?;

        Ok(Self {
            client,
            generate_url: config.generate_url(),
            csv_url: config.csv_url(),
            timeout,
        })
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    pub fn csv_url(&self) -> &str {
        &self.csv_url
    }

    fn headers(accept: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers
    }

    /// POST the settings and return the successful response.
    async fn post(
        &self,
        url: &str,
        accept: &'static str,
        settings: &GenerationSettings,
    ) -> Result<reqwest::Response> {
        debug!(
            url = url,
            domain = %settings.domain,
            question_type = %settings.question_type,
            num_questions = settings.num_questions.get(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(url)
            .headers(Self::headers(accept))
            .json(settings)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QuizmakerError::Timeout(self.timeout)
                } else {
                    QuizmakerError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }
        Ok(response)
    }

    /// Request questions as JSON.
    pub async fn generate(&self, settings: &GenerationSettings) -> Result<Vec<Question>> {
        let start = Instant::now();
        let response = self
            .post(&self.generate_url, "application/json", settings)
            .await?;

        let body = response.text().await.map_err(QuizmakerError::Network)?;
        let questions = parse_questions(&body)?;

        info!(
            count = questions.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Questions generated"
        );
        Ok(questions)
    }

    /// Request questions as a CSV file and return its raw bytes.
    pub async fn export_csv(&self, settings: &GenerationSettings) -> Result<Vec<u8>> {
        let start = Instant::now();
        let response = self.post(&self.csv_url, "text/csv", settings).await?;
        let bytes = response.bytes().await.map_err(QuizmakerError::Network)?;

        info!(
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "CSV export received"
        );
        Ok(bytes.to_vec())
    }
}

impl QuestionService for GeneratorClient {
    async fn generate(&self, settings: &GenerationSettings) -> Result<Vec<Question>> {
        GeneratorClient::generate(self, settings).await
    }

    async fn export_csv(&self, settings: &GenerationSettings) -> Result<Vec<u8>> {
        GeneratorClient::export_csv(self, settings).await
    }
}

/// Decode the success body of the generation endpoint.
pub fn parse_questions(body: &str) -> Result<Vec<Question>> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| QuizmakerError::Parse(format!("Failed to parse response: {e}")))?;
    Ok(response.questions)
}

/// Map a failure status and its body to an error.
fn status_error(status: u16, body: &str) -> QuizmakerError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_string());
    QuizmakerError::Service(ServiceError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_config() {
        let config = ServiceConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            ..ServiceConfig::default()
        };
        let client = GeneratorClient::new(&config).unwrap();
        assert_eq!(client.generate_url(), "http://127.0.0.1:9000/generate");
        assert_eq!(client.csv_url(), "http://127.0.0.1:9000/generate/csv");
    }

    #[test]
    fn test_parse_questions() {
        let questions =
            parse_questions(r#"{"questions":[{"question":"Q1","answer":"A1"},{"question":"Q2"}]}"#)
                .unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], Question::new("Q1", Some("A1".to_string())));
        assert_eq!(questions[1].answer, None);
    }

    #[test]
    fn test_parse_questions_rejects_garbage() {
        let err = parse_questions("<html>oops</html>").unwrap_err();
        assert!(matches!(err, QuizmakerError::Parse(_)));
        assert!(err.is_generation_failure());
    }

    #[test]
    fn test_status_error_prefers_error_field() {
        match status_error(500, r#"{"error": "model overloaded"}"#) {
            QuizmakerError::Service(ServiceError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match status_error(502, " Bad Gateway \n") {
            QuizmakerError::Service(ServiceError::Status { message, .. }) => {
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_service_config_rejected() {
        for config in [
            ServiceConfig {
                timeout_secs: 0,
                ..ServiceConfig::default()
            },
            ServiceConfig {
                base_url: "  ".to_string(),
                ..ServiceConfig::default()
            },
        ] {
            let err = GeneratorClient::new(&config).err().unwrap();
            assert!(matches!(err, QuizmakerError::Config(ConfigError::Invalid(_))));
            assert!(!err.is_generation_failure());
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_generation_failure() {
        // Reserve a free port, then release it so connections are refused.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ServiceConfig {
            base_url: format!("http://127.0.0.1:{port}"),
            timeout_secs: 2,
            ..ServiceConfig::default()
        };
        let client = GeneratorClient::new(&config).unwrap();
        let err = client
            .generate(&GenerationSettings::default())
            .await
            .unwrap_err();
        assert!(err.is_generation_failure());
    }
}
