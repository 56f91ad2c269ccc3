//! Submission cycle: one request, a progress ticker, and the display board.
//!
//! Two event sources feed the board while a request is pending: the ticker
//! raises the progress value on a fixed interval, and the request completion
//! overwrites progress and questions. Both run inside the submitting task via
//! `tokio::select!`, so they never race each other within one submission.
//!
//! Several submissions may be in flight at once. By default they all write
//! their completion to the board in arrival order (last writer wins). With
//! stale-dedupe enabled, only the most recent submission may touch the board.
//! Either way there is one running ticker: only the most recent submission
//! advances progress, and only while the board is loading.

use crate::client::QuestionService;
use crate::models::{GeneratedQuiz, GenerationSettings, Question, Result};
use crate::submission::ProgressPolicy;
use chrono::{DateTime, Utc};
use std::future::Future;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Whether a request is outstanding on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Everything the rendering layer shows about submissions.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub phase: Phase,
    /// Simulated progress percentage
    pub progress: u8,
    /// Questions of the last successful submission
    pub questions: Vec<Question>,
    /// Most recently submitted request
    pub latest_request: Option<Uuid>,
    /// When the shown questions arrived
    pub received_at: Option<DateTime<Utc>>,
}

/// Drives submissions against a [`QuestionService`] and publishes a [`Board`].
pub struct Submitter<S> {
    service: S,
    policy: ProgressPolicy,
    dedupe_stale: bool,
    board: watch::Sender<Board>,
}

impl<S: QuestionService> Submitter<S> {
    pub fn new(service: S, policy: ProgressPolicy) -> Self {
        let (board, _) = watch::channel(Board::default());
        Self {
            service,
            policy,
            dedupe_stale: false,
            board,
        }
    }

    /// Only let the latest submission write to the board.
    pub fn with_dedupe_stale(mut self, dedupe_stale: bool) -> Self {
        self.dedupe_stale = dedupe_stale;
        self
    }

    /// Watch every board change.
    pub fn subscribe(&self) -> watch::Receiver<Board> {
        self.board.subscribe()
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        self.board.borrow().clone()
    }

    /// Submit `settings` for question generation.
    ///
    /// On success the board shows the returned questions at full progress;
    /// on failure the error is returned once and the board keeps no result
    /// from this request. Either way the board returns to idle after the
    /// policy's reset delay, so another submission can follow.
    pub async fn submit(&self, settings: &GenerationSettings) -> Result<GeneratedQuiz> {
        let request_id = self.begin();

        match self.drive(request_id, self.service.generate(settings)).await {
            Ok(questions) => {
                let received_at = Utc::now();
                if self.is_current(request_id) {
                    let complete = self.policy.complete;
                    let shown = questions.clone();
                    self.board.send_modify(|b| {
                        b.questions = shown;
                        b.progress = complete;
                        b.received_at = Some(received_at);
                    });
                } else {
                    warn!(request_id = %request_id, "Dropping stale completion");
                }
                info!(
                    request_id = %request_id,
                    count = questions.len(),
                    "Submission completed"
                );
                self.finish(request_id).await;
                Ok(GeneratedQuiz {
                    request_id,
                    questions,
                    received_at,
                })
            }
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Submission failed");
                self.finish(request_id).await;
                Err(e)
            }
        }
    }

    /// Submit `settings` to the CSV export endpoint and return the file bytes.
    ///
    /// Progress behaves as in [`submit`](Self::submit); the board's question
    /// list is not touched.
    pub async fn submit_csv(&self, settings: &GenerationSettings) -> Result<Vec<u8>> {
        let request_id = self.begin();
        let result = self
            .drive(request_id, self.service.export_csv(settings))
            .await;

        match &result {
            Ok(bytes) => {
                if self.is_current(request_id) {
                    let complete = self.policy.complete;
                    self.board.send_modify(|b| b.progress = complete);
                }
                info!(request_id = %request_id, bytes = bytes.len(), "CSV export completed");
            }
            Err(e) => warn!(request_id = %request_id, error = %e, "CSV export failed"),
        }

        self.finish(request_id).await;
        result
    }

    fn begin(&self) -> Uuid {
        let request_id = Uuid::new_v4();
        self.board.send_modify(|b| {
            b.phase = Phase::Loading;
            b.progress = 0;
            b.latest_request = Some(request_id);
        });
        debug!(request_id = %request_id, "Submission started");
        request_id
    }

    fn is_current(&self, request_id: Uuid) -> bool {
        !self.dedupe_stale || self.board.borrow().latest_request == Some(request_id)
    }

    /// Whether `request_id` drives the progress value.
    fn owns_ticker(&self, request_id: Uuid) -> bool {
        let board = self.board.borrow();
        board.phase == Phase::Loading && board.latest_request == Some(request_id)
    }

    /// Await `request`, raising the progress value every tick until it resolves.
    async fn drive<T>(
        &self,
        request_id: Uuid,
        request: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::pin!(request);

        let tick = self.policy.tick;
        let mut ticker = tokio::time::interval_at(Instant::now() + tick, tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                result = &mut request => return result,
                _ = ticker.tick() => {
                    if self.owns_ticker(request_id) {
                        let policy = self.policy;
                        self.board.send_modify(|b| b.progress = policy.advance(b.progress));
                    }
                }
            }
        }
    }

    /// Hold the final progress briefly, then go idle.
    async fn finish(&self, request_id: Uuid) {
        tokio::time::sleep(self.policy.reset_delay).await;
        if self.is_current(request_id) {
            self.board.send_modify(|b| {
                b.phase = Phase::Idle;
                b.progress = 0;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionCount, QuizmakerError, ServiceError};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Scripted service: each call pops the next (delay, outcome).
    struct ScriptedService {
        script: Mutex<VecDeque<(Duration, Option<Vec<Question>>)>>,
    }

    impl ScriptedService {
        fn new(script: Vec<(u64, Option<Vec<Question>>)>) -> Self {
            Self {
                script: Mutex::new(
                    script
                        .into_iter()
                        .map(|(ms, outcome)| (Duration::from_millis(ms), outcome))
                        .collect(),
                ),
            }
        }

        fn next(&self) -> (Duration, Option<Vec<Question>>) {
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted")
        }
    }

    impl QuestionService for ScriptedService {
        async fn generate(&self, _settings: &GenerationSettings) -> Result<Vec<Question>> {
            let (delay, outcome) = self.next();
            tokio::time::sleep(delay).await;
            outcome.ok_or_else(|| {
                QuizmakerError::Service(ServiceError::Status {
                    status: 500,
                    message: "internal error".to_string(),
                })
            })
        }

        async fn export_csv(&self, _settings: &GenerationSettings) -> Result<Vec<u8>> {
            let (delay, outcome) = self.next();
            tokio::time::sleep(delay).await;
            match outcome {
                Some(_) => Ok(b"question,answer\nQ1,A1\n".to_vec()),
                None => Err(QuizmakerError::Parse("no body".to_string())),
            }
        }
    }

    fn numbered(prefix: &str, n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| Question::new(format!("{prefix}{i}"), Some(format!("A{i}"))))
            .collect()
    }

    fn settings(count: u8) -> GenerationSettings {
        GenerationSettings {
            num_questions: QuestionCount::new(count).unwrap(),
            ..GenerationSettings::default()
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_climbs_then_completes_then_idles() {
        let service = ScriptedService::new(vec![(2600, Some(numbered("Q", 5)))]);
        let submitter = Arc::new(Submitter::new(service, ProgressPolicy::default()));

        let task = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(5)).await })
        };

        sleep_ms(1250).await;
        let board = submitter.board();
        assert_eq!(board.phase, Phase::Loading);
        assert_eq!(board.progress, 20);
        assert!(board.questions.is_empty());

        sleep_ms(1450).await; // t = 2700
        let board = submitter.board();
        assert_eq!(board.phase, Phase::Loading);
        assert_eq!(board.progress, 100);
        assert_eq!(board.questions.len(), 5);
        assert!(board.received_at.is_some());

        let quiz = task.await.unwrap().unwrap();
        assert_eq!(quiz.questions.len(), 5);
        assert_eq!(submitter.board().latest_request, Some(quiz.request_id));

        let board = submitter.board();
        assert_eq!(board.phase, Phase::Idle);
        assert_eq!(board.progress, 0);
        assert_eq!(board.questions.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_never_passes_cap_while_pending() {
        let service = ScriptedService::new(vec![(20_000, Some(numbered("Q", 1)))]);
        let submitter = Arc::new(Submitter::new(service, ProgressPolicy::default()));

        let task = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };

        sleep_ms(10_000).await;
        assert_eq!(submitter.board().progress, 90);
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_resets_and_allows_resubmission() {
        let service = ScriptedService::new(vec![(800, None), (300, Some(numbered("Q", 2)))]);
        let submitter = Submitter::new(service, ProgressPolicy::default());

        let err = submitter.submit(&settings(2)).await.unwrap_err();
        assert!(err.is_generation_failure());

        let board = submitter.board();
        assert_eq!(board.phase, Phase::Idle);
        assert_eq!(board.progress, 0);
        assert!(board.questions.is_empty());

        let quiz = submitter.submit(&settings(2)).await.unwrap();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(submitter.board().questions.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submissions_last_writer_wins() {
        let service = ScriptedService::new(vec![
            (3000, Some(numbered("slow", 1))),
            (1000, Some(numbered("fast", 1))),
        ]);
        let submitter = Arc::new(Submitter::new(service, ProgressPolicy::default()));

        let first = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };
        sleep_ms(100).await;
        let second = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();
        assert_eq!(submitter.board().questions[0].question, "slow1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_share_one_ticker() {
        let service = ScriptedService::new(vec![
            (10_000, Some(numbered("a", 1))),
            (10_000, Some(numbered("b", 1))),
        ]);
        let submitter = Arc::new(Submitter::new(service, ProgressPolicy::default()));

        let tasks: Vec<_> = (0..2)
            .map(|_| {
                let submitter = Arc::clone(&submitter);
                tokio::spawn(async move { submitter.submit(&settings(1)).await })
            })
            .collect();

        sleep_ms(1250).await;
        assert_eq!(submitter.board().progress, 20);

        for task in tasks {
            task.await.unwrap().unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_board_stops_older_ticker() {
        let service = ScriptedService::new(vec![
            (5000, Some(numbered("slow", 1))),
            (300, Some(numbered("fast", 1))),
        ]);
        let submitter = Arc::new(Submitter::new(service, ProgressPolicy::default()));

        let first = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };
        sleep_ms(10).await;
        let second = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };

        // The newer request completed at 310ms and went idle at 1810ms.
        sleep_ms(2990).await;
        let board = submitter.board();
        assert_eq!(board.phase, Phase::Idle);
        assert_eq!(board.progress, 0);
        assert_eq!(board.questions[0].question, "fast1");

        second.await.unwrap().unwrap();
        first.await.unwrap().unwrap();
        assert_eq!(submitter.board().questions[0].question, "slow1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dedupe_drops_stale_completion() {
        let service = ScriptedService::new(vec![
            (3000, Some(numbered("slow", 1))),
            (1000, Some(numbered("fast", 1))),
        ]);
        let submitter = Arc::new(
            Submitter::new(service, ProgressPolicy::default()).with_dedupe_stale(true),
        );

        let first = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };
        sleep_ms(100).await;
        let second = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&settings(1)).await })
        };

        // The stale request still reports its own result to its caller.
        let stale = first.await.unwrap().unwrap();
        assert_eq!(stale.questions[0].question, "slow1");
        second.await.unwrap().unwrap();

        let board = submitter.board();
        assert_eq!(board.questions[0].question, "fast1");
        assert_eq!(board.phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_csv_export_leaves_questions_alone() {
        let service = ScriptedService::new(vec![(400, Some(Vec::new())), (400, None)]);
        let submitter = Submitter::new(service, ProgressPolicy::default());

        let bytes = submitter.submit_csv(&settings(1)).await.unwrap();
        assert!(bytes.starts_with(b"question,answer"));
        assert!(submitter.board().questions.is_empty());

        let err = submitter.submit_csv(&settings(1)).await.unwrap_err();
        assert!(err.is_generation_failure());
        assert_eq!(submitter.board().phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_loading_and_idle() {
        let service = ScriptedService::new(vec![(100, Some(numbered("Q", 1)))]);
        let submitter = Submitter::new(service, ProgressPolicy::default());
        let mut rx = submitter.subscribe();

        submitter.submit(&settings(1)).await.unwrap();
        assert!(rx.has_changed().unwrap());
        let board = rx.borrow_and_update().clone();
        assert_eq!(board.phase, Phase::Idle);
        assert_eq!(board.questions.len(), 1);
    }
}
