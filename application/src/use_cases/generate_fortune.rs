//! Generate Fortune use case.
//!
//! Orchestrates one daily fortune: derive the seed, pick the lucky tile and
//! yaku, build the prompt, run the candidate fallback, and parse the reply.
//!
//! A malformed reply from an accepted candidate is a caller-facing error,
//! not a fallback trigger: by the time parsing runs, a candidate has
//! already been accepted and the invocation is over.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use fortune_domain::{
    DateSeed, Fortune, GenerationParams, GenerationRequest, LuckyPick, Model, ParseError,
    PromptTemplate, parse_fortune_reply,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::ports::progress::{AttemptObserver, NoProgress};
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::fallback::{FallbackInvoker, InvokeError};

/// Errors that can occur while generating a fortune
#[derive(Error, Debug)]
pub enum GenerateFortuneError {
    #[error(transparent)]
    Invocation(#[from] InvokeError),

    #[error("accepted reply could not be parsed: {0}")]
    MalformedReply(#[from] ParseError),
}

/// Input for the [`GenerateFortuneUseCase`]
#[derive(Debug, Clone)]
pub struct GenerateFortuneInput {
    /// The day the fortune is for
    pub date: NaiveDate,
    /// Optional caller identity mixed into the seed
    pub identity: Option<String>,
    /// Candidate models, highest priority first
    pub candidates: Vec<Model>,
    /// Sampling parameters forwarded to every attempt
    pub params: GenerationParams,
}

impl GenerateFortuneInput {
    pub fn new(date: NaiveDate, candidates: Vec<Model>) -> Self {
        Self {
            date,
            identity: None,
            candidates,
            params: GenerationParams::default(),
        }
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for producing one daily fortune
pub struct GenerateFortuneUseCase<G> {
    invoker: FallbackInvoker<G>,
}

impl<G: TextGenerator> GenerateFortuneUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            invoker: FallbackInvoker::new(gateway),
        }
    }

    /// Bound the whole model invocation, see [`FallbackInvoker::with_deadline`]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.invoker = self.invoker.with_deadline(deadline);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateFortuneInput,
    ) -> Result<Fortune, GenerateFortuneError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with per-attempt progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateFortuneInput,
        progress: &dyn AttemptObserver,
    ) -> Result<Fortune, GenerateFortuneError> {
        let seed = match &input.identity {
            Some(identity) => DateSeed::for_date_and_identity(input.date, identity),
            None => DateSeed::for_date(input.date),
        };
        let pick = LuckyPick::from_seed(&seed);

        info!(
            date = seed.date_string(),
            tile = pick.tile,
            yaku = pick.yaku,
            candidates = input.candidates.len(),
            "generating fortune"
        );

        let prompt = PromptTemplate::fortune(seed.date_string(), &pick);
        let request = GenerationRequest::new(prompt, input.params);

        let generated = self
            .invoker
            .invoke_with_progress(&input.candidates, &request, progress)
            .await?;

        debug!(
            model = %generated.model,
            bytes = generated.content.len(),
            "parsing accepted reply"
        );
        let text = parse_fortune_reply(&generated.content)?;

        Ok(Fortune::new(
            seed.date_string(),
            text,
            pick.tile,
            pick.yaku,
            generated.model.to_string(),
        ))
    }
}
