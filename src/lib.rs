//! Deduplicate, rewrite, and reconcile free-text opening-hours columns in
//! venue CSVs via a chat-completions endpoint.

pub mod dedupe;
pub mod pipeline;
pub mod reconcile;
pub mod rewrite;
pub mod table;
