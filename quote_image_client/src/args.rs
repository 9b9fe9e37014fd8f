//! Command-line arguments for the quote image client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_image_common::net::{IMAGE_URL, QUOTE_URL, REQUEST_TIMEOUT_SECS};
use quote_image_common::{Endpoints, ResolveStrategy};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of quote images fetched concurrently per batch.
    #[clap(long, default_value_t = 5)]
    pub amount: usize,

    /// How the image and quote fetch of one pair are joined.
    #[clap(long, value_enum, default_value_t = ResolveStrategy::Group)]
    pub strategy: ResolveStrategy,

    /// Image endpoint; a fresh `uuid` query parameter is appended per request.
    #[clap(long, default_value = IMAGE_URL)]
    pub image_url: String,

    /// Quote endpoint returning a JSON array of `{"q": ...}` records.
    #[clap(long, default_value = QUOTE_URL)]
    pub quote_url: String,

    /// Per-request transport timeout in seconds.
    #[clap(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Extra batches to fetch after the first one, appended to the same feed.
    #[clap(long, default_value_t = 0)]
    pub reloads: u32,
}

impl Args {
    /// Endpoint configuration described by the arguments.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            image_url: self.image_url.trim().replace('"', ""),
            quote_url: self.quote_url.trim().replace('"', ""),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_endpoints() {
        let args = Args::parse_from(["quote_image_client"]);
        assert_eq!(args.amount, 5);
        assert_eq!(args.strategy, ResolveStrategy::Group);
        assert_eq!(args.reloads, 0);

        let endpoints = args.endpoints();
        assert_eq!(endpoints.image_url, IMAGE_URL);
        assert_eq!(endpoints.quote_url, QUOTE_URL);
        assert_eq!(endpoints.timeout, Duration::from_secs(REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn overrides_are_applied() {
        let args = Args::parse_from([
            "quote_image_client",
            "--amount",
            "12",
            "--strategy",
            "paired",
            "--image-url",
            "\"http://localhost:8080/img\"",
            "--timeout-secs",
            "3",
            "--reloads",
            "2",
        ]);
        assert_eq!(args.amount, 12);
        assert_eq!(args.strategy, ResolveStrategy::Paired);
        assert_eq!(args.reloads, 2);

        let endpoints = args.endpoints();
        assert_eq!(endpoints.image_url, "http://localhost:8080/img");
        assert_eq!(endpoints.timeout, Duration::from_secs(3));
    }
}
