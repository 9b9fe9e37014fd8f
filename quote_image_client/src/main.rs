//! Quote Image Client: fetches random images and random quotes concurrently,
//! pairs them, and prints each pair to stdout as soon as it is ready.
//!
//! Each batch launches `--amount` pair resolvers at once. Every resolver joins
//! one image fetch and one quote fetch using the selected `--strategy`, and a
//! finished pair is pushed to the feed consumer without waiting for the rest of
//! the batch. Failed pairs are logged and skipped. `--reloads` fetches further
//! batches into the same feed.
//!
//! Usage example (CLI):
//! ```bash
//! quote_image_client --amount 5 --strategy paired --reloads 1
//! ```
#![warn(missing_docs)]
mod args;
mod feed;

use crate::args::Args;
use crate::feed::Feed;
use clap::Parser;
use log::{error, info};
use quote_image_common::delivery;
use quote_image_common::{BatchOrchestrator, HttpFetcher, PairResolver, QuoteImageError};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), QuoteImageError> {
    init_logger();
    let args = Args::parse();

    let (sink, rx) = delivery::channel();
    let consumer = tokio::task::spawn_blocking(move || Feed::new().run(rx));

    let fetcher = HttpFetcher::new(args.endpoints())?;
    let orchestrator = BatchOrchestrator::new(
        PairResolver::with_http(fetcher, args.strategy),
        Arc::new(sink),
    );

    for round in 0..=args.reloads {
        if round > 0 {
            info!("Reloading ({} of {})", round, args.reloads);
        }
        let summary = orchestrator.fetch_batch(args.amount).await?;
        for failure in &summary.failures {
            error!("Error loading data: {}", failure);
        }
    }

    // Dropping the orchestrator releases the last sender and ends the feed loop.
    drop(orchestrator);
    let feed = consumer.await?;
    info!("Feed closed with {} items", feed.len());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
