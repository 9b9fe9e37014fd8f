//! Delivery of finished pairs to a consumer.
//!
//! The orchestrator calls [`Deliver::deliver`] once per resolved pair, from
//! whichever task finished it, so sinks must accept concurrent callers. The
//! consumer owns its own thread and decides when to drain.
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, warn};

use crate::batch::BatchSummary;
use crate::quote::QuoteImage;

/// Delivery hook registered with the orchestrator at construction.
pub trait Deliver: Send + Sync {
    /// Hand over one completed pair. Called exactly once per pair.
    fn deliver(&self, item: QuoteImage);

    /// Called once after every resolver of a batch reached a terminal state.
    fn batch_finished(&self, _summary: &BatchSummary) {}
}

/// Events observed by a channel consumer.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A freshly resolved pair.
    Item(QuoteImage),
    /// A batch is done; counts mirror its `BatchSummary`.
    BatchFinished {
        /// Pairs requested.
        requested: usize,
        /// Pairs delivered.
        delivered: usize,
        /// Resolvers that failed.
        failed: usize,
    },
}

/// Posts pairs into a single-consumer queue.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<FeedEvent>,
}

/// Create a channel sink together with the receiving end for the consumer.
pub fn channel() -> (ChannelSink, Receiver<FeedEvent>) {
    let (tx, rx) = unbounded::<FeedEvent>();
    (ChannelSink { tx }, rx)
}

impl Deliver for ChannelSink {
    fn deliver(&self, item: QuoteImage) {
        debug!("Posting quote image to feed: {}", item.quote().text);
        if let Err(e) = self.tx.send(FeedEvent::Item(item)) {
            warn!("Feed consumer disconnected, dropping quote image: {}", e);
        }
    }

    fn batch_finished(&self, summary: &BatchSummary) {
        let event = FeedEvent::BatchFinished {
            requested: summary.requested,
            delivered: summary.delivered,
            failed: summary.failed(),
        };
        if self.tx.send(event).is_err() {
            warn!("Feed consumer disconnected before batch end");
        }
    }
}

/// Wraps any thread-safe closure as a delivery hook.
pub struct CallbackSink<F> {
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: Fn(QuoteImage) + Send + Sync,
{
    /// Wrap `callback`.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Deliver for CallbackSink<F>
where
    F: Fn(QuoteImage) + Send + Sync,
{
    fn deliver(&self, item: QuoteImage) {
        (self.callback)(item);
    }
}
