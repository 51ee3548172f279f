//! Candidate fallback invoker.
//!
//! Tries an ordered list of candidate models one at a time and accepts the
//! first response that is both transport-successful and carries usable
//! content. A transport-successful but content-empty response (e.g. the
//! service filtered the reply) falls through to the next candidate exactly
//! like a connection error: semantic validation happens inside the loop,
//! not after it.
//!
//! Attempts are strictly sequential. Running candidates concurrently would
//! break priority ordering and spend quota on lower-priority models whose
//! results get discarded. No candidate is retried; "retry" exists only at
//! the list level.

use std::sync::Arc;
use std::time::Duration;

use fortune_domain::{GenerationRequest, Model};
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::ports::progress::{AttemptObserver, NoProgress};
use crate::ports::text_generator::{GatewayError, TextGenerator};

/// Why a single attempt did not produce content
#[derive(Error, Debug)]
pub enum AttemptFailure {
    #[error("{model}: {error}")]
    Transport {
        model: Model,
        #[source]
        error: GatewayError,
    },

    #[error("{model} returned no usable content ({reason})")]
    Empty { model: Model, reason: String },

    #[error("invocation deadline elapsed while waiting on {model}")]
    DeadlineElapsed { model: Model },
}

/// Terminal failure of a whole invocation
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("no candidate models were supplied")]
    NoCandidates,

    #[error("all candidates exhausted after {attempts} attempt(s), last failure: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: AttemptFailure,
    },
}

/// Accepted content plus its attribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub content: String,
    /// The candidate that produced the content
    pub model: Model,
    /// How many candidates were tried, including the accepted one
    pub attempts: usize,
}

/// Sequential try-next-on-failure invoker over an ordered candidate list.
///
/// Stateless across invocations: no shared cache, counters, or rate-limit
/// bookkeeping. Two concurrent invocations run fully independent loops.
pub struct FallbackInvoker<G> {
    gateway: Arc<G>,
    deadline: Option<Duration>,
}

impl<G: TextGenerator> FallbackInvoker<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            deadline: None,
        }
    }

    /// Bound the whole invocation. When the deadline elapses the in-flight
    /// attempt is abandoned and the invocation fails immediately instead of
    /// advancing to the next candidate.
    ///
    /// Without a deadline, worst-case latency is the per-attempt timeout
    /// (enforced by the gateway adapter) times the number of candidates.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Try each candidate in list order, returning the first accepted content.
    pub async fn invoke(
        &self,
        candidates: &[Model],
        request: &GenerationRequest,
    ) -> Result<Generated, InvokeError> {
        self.invoke_with_progress(candidates, request, &NoProgress)
            .await
    }

    /// [`invoke`](Self::invoke) with per-attempt progress callbacks.
    pub async fn invoke_with_progress(
        &self,
        candidates: &[Model],
        request: &GenerationRequest,
        progress: &dyn AttemptObserver,
    ) -> Result<Generated, InvokeError> {
        if candidates.is_empty() {
            return Err(InvokeError::NoCandidates);
        }

        let started = Instant::now();
        let total = candidates.len();
        let mut last: Option<AttemptFailure> = None;

        for (index, model) in candidates.iter().enumerate() {
            if let Some(failure) = self.deadline_elapsed(started, model) {
                // Deadline spent before this attempt was issued: report the
                // previous failure if one exists, it is the better diagnostic.
                warn!(model = %model, "invocation deadline elapsed, giving up");
                return Err(InvokeError::Exhausted {
                    attempts: index,
                    last: last.unwrap_or(failure),
                });
            }

            debug!(model = %model, attempt = index + 1, total, "trying candidate");
            progress.on_attempt_start(model, index, total);

            let result = match self.remaining_budget(started) {
                Some(budget) => {
                    match tokio::time::timeout(budget, self.gateway.generate(model, request)).await
                    {
                        Ok(result) => result,
                        Err(_) => {
                            warn!(model = %model, "invocation deadline elapsed mid-attempt");
                            progress.on_attempt_failed(model, "invocation deadline elapsed");
                            return Err(InvokeError::Exhausted {
                                attempts: index + 1,
                                last: AttemptFailure::DeadlineElapsed {
                                    model: model.clone(),
                                },
                            });
                        }
                    }
                }
                None => self.gateway.generate(model, request).await,
            };

            match result {
                Ok(response) => {
                    if let Some(content) = response.first_content() {
                        info!(model = %model, attempts = index + 1, "candidate accepted");
                        progress.on_accepted(model, index + 1);
                        return Ok(Generated {
                            content: content.to_string(),
                            model: model.clone(),
                            attempts: index + 1,
                        });
                    }
                    let reason = response.rejection_reason();
                    warn!(model = %model, %reason, "no usable content, trying next candidate");
                    progress.on_attempt_failed(model, &reason);
                    last = Some(AttemptFailure::Empty {
                        model: model.clone(),
                        reason,
                    });
                }
                Err(error) => {
                    warn!(model = %model, %error, "transport failure, trying next candidate");
                    progress.on_attempt_failed(model, &error.to_string());
                    last = Some(AttemptFailure::Transport {
                        model: model.clone(),
                        error,
                    });
                }
            }
        }

        match last {
            Some(last) => Err(InvokeError::Exhausted {
                attempts: total,
                last,
            }),
            // Unreachable: the empty list returned before the loop
            None => Err(InvokeError::NoCandidates),
        }
    }

    /// Budget left under the deadline, or `None` when no deadline is set
    fn remaining_budget(&self, started: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_sub(started.elapsed()))
    }

    fn deadline_elapsed(&self, started: Instant, model: &Model) -> Option<AttemptFailure> {
        match self.remaining_budget(started) {
            Some(budget) if budget.is_zero() => Some(AttemptFailure::DeadlineElapsed {
                model: model.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fortune_domain::{GeneratedCandidate, GenerationParams, GenerationResponse};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Gateway that replays scripted outcomes and records every call
    struct ScriptedGenerator {
        outcomes: Mutex<VecDeque<Result<GenerationResponse, GatewayError>>>,
        calls: Mutex<Vec<(Model, GenerationRequest)>>,
    }

    impl ScriptedGenerator {
        fn new(outcomes: Vec<Result<GenerationResponse, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(VecDeque::from(outcomes)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(Model, GenerationRequest)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            model: &Model,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.clone(), request.clone()));
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("gateway called more times than scripted"))
        }
    }

    /// Gateway that never answers; used for deadline tests
    struct StalledGenerator;

    #[async_trait]
    impl TextGenerator for StalledGenerator {
        async fn generate(
            &self,
            _model: &Model,
            _request: &GenerationRequest,
        ) -> Result<GenerationResponse, GatewayError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(GenerationResponse::default())
        }
    }

    // ==================== Helpers ====================

    fn models(names: &[&str]) -> Vec<Model> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("tell a fortune", GenerationParams::default())
    }

    fn content_response(text: &str) -> Result<GenerationResponse, GatewayError> {
        Ok(GenerationResponse {
            candidates: vec![GeneratedCandidate {
                content: Some(text.to_string()),
                finish_reason: Some("STOP".to_string()),
            }],
            block_reason: None,
        })
    }

    fn filtered_response(reason: &str) -> Result<GenerationResponse, GatewayError> {
        Ok(GenerationResponse {
            candidates: vec![],
            block_reason: Some(reason.to_string()),
        })
    }

    fn status_error(status: u16) -> Result<GenerationResponse, GatewayError> {
        Err(GatewayError::Status {
            status,
            message: "upstream error".to_string(),
        })
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_first_candidate_success_makes_exactly_one_attempt() {
        let gateway = ScriptedGenerator::new(vec![content_response("lucky day")]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));

        let generated = invoker
            .invoke(&models(&["m1", "m2", "m3"]), &request())
            .await
            .unwrap();

        assert_eq!(generated.content, "lucky day");
        assert_eq!(generated.model.as_str(), "m1");
        assert_eq!(generated.attempts, 1);
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_and_filter_failures_fall_through_to_third() {
        // m1: HTTP 429, m2: 200 but filtered empty, m3: content
        let gateway = ScriptedGenerator::new(vec![
            status_error(429),
            filtered_response("SAFETY"),
            content_response("hello"),
        ]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));

        let generated = invoker
            .invoke(&models(&["m1", "m2", "m3"]), &request())
            .await
            .unwrap();

        assert_eq!(generated.content, "hello");
        assert_eq!(generated.model.as_str(), "m3");
        assert_eq!(generated.attempts, 3);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0.as_str(), "m1");
        assert_eq!(calls[1].0.as_str(), "m2");
        assert_eq!(calls[2].0.as_str(), "m3");
    }

    #[tokio::test]
    async fn test_all_candidates_failing_is_exhausted_with_last_cause() {
        let gateway = ScriptedGenerator::new(vec![
            status_error(503),
            status_error(503),
            status_error(503),
        ]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));

        let err = invoker
            .invoke(&models(&["m1", "m2", "m3"]), &request())
            .await
            .unwrap_err();

        match err {
            InvokeError::Exhausted { attempts, last } => {
                assert_eq!(attempts, 3);
                match last {
                    AttemptFailure::Transport { model, error } => {
                        assert_eq!(model.as_str(), "m3");
                        assert!(matches!(error, GatewayError::Status { status: 503, .. }));
                    }
                    other => panic!("expected transport failure, got {other}"),
                }
            }
            other => panic!("expected Exhausted, got {other}"),
        }
        assert_eq!(gateway.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_semantically_empty_response_is_never_accepted() {
        let gateway = ScriptedGenerator::new(vec![filtered_response("PROHIBITED_CONTENT")]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));

        let err = invoker.invoke(&models(&["m1"]), &request()).await.unwrap_err();

        match err {
            InvokeError::Exhausted { attempts: 1, last } => {
                assert!(matches!(last, AttemptFailure::Empty { .. }));
                assert!(last.to_string().contains("PROHIBITED_CONTENT"));
            }
            other => panic!("expected Exhausted after one attempt, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidate_list_fails_fast_without_attempts() {
        let gateway = ScriptedGenerator::new(vec![]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));

        let err = invoker.invoke(&[], &request()).await.unwrap_err();

        assert!(matches!(err, InvokeError::NoCandidates));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_candidates_are_each_attempted() {
        let gateway =
            ScriptedGenerator::new(vec![status_error(500), content_response("second try")]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));

        let generated = invoker
            .invoke(&models(&["m1", "m1"]), &request())
            .await
            .unwrap();

        assert_eq!(generated.attempts, 2);
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_payload_reaches_every_attempt_unchanged() {
        let gateway = ScriptedGenerator::new(vec![
            status_error(502),
            filtered_response("SAFETY"),
            content_response("done"),
        ]);
        let invoker = FallbackInvoker::new(Arc::clone(&gateway));
        let req = request();

        invoker
            .invoke(&models(&["m1", "m2", "m3"]), &req)
            .await
            .unwrap();

        for (_, seen) in gateway.calls() {
            assert_eq!(seen, req);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_aborts_in_flight_attempt() {
        let invoker =
            FallbackInvoker::new(Arc::new(StalledGenerator)).with_deadline(Duration::from_secs(5));

        let err = invoker
            .invoke(&models(&["m1", "m2"]), &request())
            .await
            .unwrap_err();

        // The stalled first attempt is aborted and the invocation ends
        // immediately; the second candidate is never tried.
        match err {
            InvokeError::Exhausted { attempts, last } => {
                assert_eq!(attempts, 1);
                assert!(matches!(last, AttemptFailure::DeadlineElapsed { .. }));
            }
            other => panic!("expected Exhausted, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_observer_sees_each_attempt() {
        struct CountingObserver {
            started: Mutex<Vec<String>>,
            failed: Mutex<Vec<String>>,
            accepted: Mutex<Option<(String, usize)>>,
        }

        impl AttemptObserver for CountingObserver {
            fn on_attempt_start(&self, model: &Model, _index: usize, _total: usize) {
                self.started.lock().unwrap().push(model.to_string());
            }
            fn on_attempt_failed(&self, model: &Model, _reason: &str) {
                self.failed.lock().unwrap().push(model.to_string());
            }
            fn on_accepted(&self, model: &Model, attempts: usize) {
                *self.accepted.lock().unwrap() = Some((model.to_string(), attempts));
            }
        }

        let observer = CountingObserver {
            started: Mutex::new(Vec::new()),
            failed: Mutex::new(Vec::new()),
            accepted: Mutex::new(None),
        };

        let gateway = ScriptedGenerator::new(vec![status_error(429), content_response("ok")]);
        let invoker = FallbackInvoker::new(gateway);

        invoker
            .invoke_with_progress(&models(&["m1", "m2"]), &request(), &observer)
            .await
            .unwrap();

        assert_eq!(*observer.started.lock().unwrap(), vec!["m1", "m2"]);
        assert_eq!(*observer.failed.lock().unwrap(), vec!["m1"]);
        assert_eq!(
            *observer.accepted.lock().unwrap(),
            Some(("m2".to_string(), 2))
        );
    }
}
