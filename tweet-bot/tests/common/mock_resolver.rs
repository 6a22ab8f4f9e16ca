//! Mock [`TweetResolver`] returning a canned outcome and counting calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tweet_resolver::{ResolveError, ResolverResponse, TweetResolver};

pub enum Outcome {
    Respond(ResolverResponse),
    /// Builds a fresh error per call (ResolveError is not Clone).
    Fail(fn() -> ResolveError),
    /// Never answers.
    Hang,
}

pub struct MockResolver {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl MockResolver {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn responding(response: ResolverResponse) -> Arc<Self> {
        Self::new(Outcome::Respond(response))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TweetResolver for MockResolver {
    async fn resolve(&self, _text: &str) -> Result<ResolverResponse, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Respond(response) => Ok(response.clone()),
            Outcome::Fail(make_err) => Err(make_err()),
            Outcome::Hang => std::future::pending().await,
        }
    }
}
