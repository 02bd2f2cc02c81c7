mod cards;
pub use cards::SourceCards;

mod detail;
pub use detail::DetailModal;

mod status;
pub use status::{StatusCard, StatusNotice};

mod utils;
pub(crate) use utils::*;

use dioxus::logger::tracing::{info, warn};
use futures::future::join_all;

use crate::core::config;
use crate::ingest::{self, IngestError, RawRecord};
use crate::metrics::{self, SourceSummary};

/// The dashboard's whole state for one load cycle: summaries ranked
/// descending by recognized total, plus the status notice shown when there
/// is nothing to rank. Rebuilt in full on every load; never updated
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub summaries: Vec<SourceSummary>,
    pub status: Option<StatusNotice>,
}

impl DashboardState {
    /// Read every configured source concurrently and build the ranked state.
    ///
    /// `join_all` is the barrier: aggregation runs exactly once, after all
    /// sources have completed, whatever their individual outcomes. A failed
    /// or empty source is logged and excluded; it never blocks the rest.
    pub async fn load() -> Self {
        let outcomes = join_all(config::SOURCE_NAMES.iter().map(|name| async move {
            (*name, ingest::ingest(name).await)
        }))
        .await;

        Self::from_outcomes(outcomes)
    }

    fn from_outcomes(outcomes: Vec<(&str, Result<Vec<RawRecord>, IngestError>)>) -> Self {
        let mut summaries = Vec::new();
        let mut last_failed: Option<String> = None;

        for (name, outcome) in outcomes {
            match outcome {
                Ok(rows) if rows.is_empty() => {
                    info!(source = name, "source produced no usable rows");
                }
                Ok(rows) => summaries.push(metrics::compute_summary(name, rows)),
                Err(err) => {
                    warn!(source = name, error = %err, "source read failed");
                    last_failed = Some(name.to_string());
                }
            }
        }

        let mut state = Self::aggregate(summaries);
        if state.summaries.is_empty() {
            state.status = Some(match last_failed {
                Some(name) => StatusNotice::read_failure(&name),
                None => StatusNotice::no_data(),
            });
        }
        state
    }

    /// Rank summaries descending by recognized total. The sort is stable
    /// (`slice::sort_by`), so exact ties keep the configured source order —
    /// that stability decides the winner on a tie and is pinned by tests.
    pub fn aggregate(mut summaries: Vec<SourceSummary>) -> Self {
        summaries.sort_by(|a, b| {
            b.total_recognized
                .partial_cmp(&a.total_recognized)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            summaries,
            status: None,
        }
    }

    /// The top-ranked source, if any. Rank 0 wears the trophy.
    pub fn winner(&self) -> Option<&SourceSummary> {
        self.summaries.first()
    }

    /// Detail lookup by source name. An unknown or stale name is `None`,
    /// which callers treat as a no-op.
    pub fn summary_for(&self, name: &str) -> Option<&SourceSummary> {
        self.summaries
            .iter()
            .find(|summary| summary.source_name == name)
    }
}
