//! Terminal feed: the single-threaded consumer of delivered pairs.
//!
//! The feed owns its list and is the only code that mutates it. It drains the
//! delivery channel on its own thread, appends each pair in arrival order and
//! prints the new row, so the fetch tasks never touch presentation state.
use crossbeam_channel::Receiver;
use log::{debug, info};
use quote_image_common::{FeedEvent, QuoteImage};

/// Pairs received so far, in arrival order.
#[derive(Debug, Default)]
pub struct Feed {
    items: Vec<QuoteImage>,
}

impl Feed {
    /// Creates an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocking loop that drains `rx` until every sender is dropped.
    pub fn run(mut self, rx: Receiver<FeedEvent>) -> Self {
        info!("Feed consumer running");
        for event in rx.iter() {
            if let Some(line) = self.handle(event) {
                println!("{}", line);
            }
        }
        info!("Feed consumer stopping...");
        self
    }

    /// Apply one event and return the line to print for it.
    pub fn handle(&mut self, event: FeedEvent) -> Option<String> {
        match event {
            FeedEvent::Item(item) => {
                self.items.push(item);
                let index = self.items.len() - 1;
                debug!("Feed now holds {} items", self.items.len());
                self.items.last().map(|item| render_row(index, item))
            }
            FeedEvent::BatchFinished {
                requested,
                delivered,
                failed,
            } => Some(format!(
                "-- batch done: {}/{} delivered, {} failed",
                delivered, requested, failed
            )),
        }
    }

    /// Number of rows in the feed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Rows in arrival order.
    pub fn items(&self) -> &[QuoteImage] {
        &self.items
    }
}

fn render_row(index: usize, item: &QuoteImage) -> String {
    let quote = item.quote();
    match &quote.author {
        Some(author) => format!(
            "{:>3}. \"{}\" ({}) [{} image bytes]",
            index + 1,
            quote.text,
            author,
            item.image().len()
        ),
        None => format!(
            "{:>3}. \"{}\" [{} image bytes]",
            index + 1,
            quote.text,
            item.image().len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use quote_image_common::{ImageBytes, Quote};
    use std::thread;

    fn pair(text: &str, author: Option<&str>, size: usize) -> QuoteImage {
        let quote = Quote {
            text: String::from(text),
            author: author.map(String::from),
        };
        QuoteImage::new(quote, ImageBytes::from(vec![0; size]))
    }

    #[test]
    fn rows_are_numbered_in_arrival_order() {
        let mut feed = Feed::new();
        let first = feed.handle(FeedEvent::Item(pair("Be brief.", Some("Anon"), 42)));
        let second = feed.handle(FeedEvent::Item(pair("Ship it.", None, 7)));

        assert_eq!(first.as_deref(), Some("  1. \"Be brief.\" (Anon) [42 image bytes]"));
        assert_eq!(second.as_deref(), Some("  2. \"Ship it.\" [7 image bytes]"));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn batch_end_does_not_add_rows() {
        let mut feed = Feed::new();
        let line = feed.handle(FeedEvent::BatchFinished {
            requested: 5,
            delivered: 4,
            failed: 1,
        });
        assert_eq!(line.as_deref(), Some("-- batch done: 4/5 delivered, 1 failed"));
        assert_eq!(feed.len(), 0);
    }

    #[test]
    fn run_drains_until_senders_are_gone() {
        let (tx, rx) = unbounded();
        let producers: Vec<_> = (0..3)
            .map(|i| {
                let tx = tx.clone();
                thread::spawn(move || {
                    tx.send(FeedEvent::Item(pair(&format!("quote {}", i), None, i)))
                        .unwrap();
                })
            })
            .collect();
        drop(tx);
        for producer in producers {
            producer.join().unwrap();
        }

        let feed = Feed::new().run(rx);
        assert_eq!(feed.len(), 3);
        assert!(feed.items().iter().all(|item| item.quote().text.starts_with("quote ")));
    }
}
