//! Batch orchestrator: N pair resolvers in flight at once.
//!
//! Every resolver runs as its own task with no admission limit. A finished
//! pair is handed to the sink by the task that produced it, so early
//! completions are visible before the batch ends. Failures stay local to
//! their resolver: they are logged and counted, siblings keep running, and
//! the batch always reaches a terminal state.
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinSet;

use crate::delivery::Deliver;
use crate::error::QuoteImageError;
use crate::resolver::PairResolver;
use crate::result::Result;

/// Outcome of one batch.
#[derive(Debug)]
pub struct BatchSummary {
    /// Number of pairs requested.
    pub requested: usize,
    /// Number of pairs handed to the sink.
    pub delivered: usize,
    /// One error per failed resolver, in completion order.
    pub failures: Vec<QuoteImageError>,
}

impl BatchSummary {
    /// Empty summary for a batch of `requested` pairs.
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// Number of failed resolvers.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Runs batches of resolvers and streams their results into one sink.
pub struct BatchOrchestrator {
    resolver: PairResolver,
    sink: Arc<dyn Deliver>,
}

impl BatchOrchestrator {
    /// Register `sink` as the delivery hook for every batch run by this orchestrator.
    pub fn new(resolver: PairResolver, sink: Arc<dyn Deliver>) -> Self {
        Self { resolver, sink }
    }

    /// Resolve `amount` pairs concurrently, delivering each as soon as it is ready.
    ///
    /// Returns once all resolvers are done. Only `amount == 0` is an error; a
    /// batch where resolvers fail still returns `Ok` with fewer deliveries.
    pub async fn fetch_batch(&self, amount: usize) -> Result<BatchSummary> {
        if amount == 0 {
            return Err(QuoteImageError::InvalidAmount(amount));
        }
        info!(
            "Fetching {} quote images ({} strategy)",
            amount,
            self.resolver.strategy()
        );

        let mut resolvers: JoinSet<(usize, Result<()>)> = JoinSet::new();
        for index in 0..amount {
            let resolver = self.resolver.clone();
            let sink = Arc::clone(&self.sink);
            resolvers.spawn(async move {
                let outcome = resolver.resolve().await.map(|item| {
                    debug!("Resolver {} finished: {}", index, item.quote().text);
                    sink.deliver(item);
                });
                (index, outcome)
            });
        }

        let mut summary = BatchSummary::new(amount);
        while let Some(joined) = resolvers.join_next().await {
            match joined {
                Ok((_, Ok(()))) => summary.delivered += 1,
                Ok((index, Err(e))) => {
                    warn!("Resolver {} failed: {}", index, e);
                    summary.failures.push(e);
                }
                Err(e) => {
                    warn!("Resolver task failed: {}", e);
                    summary.failures.push(QuoteImageError::from(e));
                }
            }
        }

        info!(
            "Batch finished: {}/{} delivered, {} failed",
            summary.delivered,
            summary.requested,
            summary.failed()
        );
        self.sink.batch_finished(&summary);
        Ok(summary)
    }
}
