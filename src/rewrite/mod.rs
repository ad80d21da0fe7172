// src/rewrite/mod.rs
pub mod client;
pub mod prompt;

pub use client::{ChatBackend, ChatClient};

use anyhow::Result;
use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::dedupe::HoursGroups;
use prompt::build_rewrite_prompt;

/// Rewrites each unique raw hours string through the chat backend, one
/// request per string, never batched. Results come back index-aligned with
/// the group keys regardless of per-request latency, and any failed request
/// aborts the whole rewrite: a partial, misaligned result must never reach
/// reconciliation.
pub struct Rewriter<'a, B> {
    backend: &'a B,
    concurrency: usize,
}

impl<'a, B: ChatBackend> Rewriter<'a, B> {
    /// `concurrency` is the number of requests in flight at once. 1 matches
    /// the reference one-at-a-time behavior; higher values only change
    /// latency, not result order.
    pub fn new(backend: &'a B, concurrency: usize) -> Self {
        Rewriter {
            backend,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn rewrite_groups(
        &self,
        groups: &HoursGroups,
        glossary: &str,
    ) -> Result<Vec<String>> {
        info!(
            unique = groups.len(),
            in_flight = self.concurrency,
            "rewriting opening-hours strings"
        );

        let backend = self.backend;
        let rewritten: Vec<String> = stream::iter((0..groups.len()).map(|idx| {
            let raw = &groups.keys()[idx];
            let prompt = build_rewrite_prompt(raw, groups.members(idx), glossary);
            async move {
                debug!(idx, raw = %raw, "dispatching rewrite request");
                backend.complete(&prompt).await
            }
        }))
        .buffered(self.concurrency)
        .try_collect()
        .await?;

        Ok(rewritten)
    }
}
