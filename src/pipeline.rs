// src/pipeline.rs
use anyhow::{Context, Result};
use tracing::info;

use crate::dedupe::group_by_hours;
use crate::reconcile::apply_rewrites;
use crate::rewrite::{ChatBackend, Rewriter};
use crate::table::{parse_rows, serialize_quoted};

/// Run one full deduplicate → rewrite → reconcile pass over a delimited-text
/// payload and return the quoted output payload.
///
/// The run fails as a whole: any stage error aborts before output exists, so
/// callers never see a truncated or partially rewritten artifact. When no row
/// qualifies for grouping, the rewrite stage is skipped entirely and the
/// input rows are serialized as-is.
pub async fn run_pipeline<B: ChatBackend>(
    input: &str,
    glossary: &str,
    backend: &B,
    concurrency: usize,
) -> Result<String> {
    let mut rows = parse_rows(input.as_bytes()).context("parsing input table")?;
    info!(rows = rows.len(), "parsed input table");

    let groups = group_by_hours(&rows);
    info!(unique = groups.len(), "grouped raw opening-hours values");

    if !groups.is_empty() {
        let rewritten = Rewriter::new(backend, concurrency)
            .rewrite_groups(&groups, glossary)
            .await
            .context("rewriting opening hours")?;
        apply_rewrites(&mut rows, &groups, &rewritten)
            .context("reconciling rewritten hours")?;
    }

    Ok(serialize_quoted(&rows))
}
