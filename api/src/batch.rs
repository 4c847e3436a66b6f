//! Bounded-concurrency fan-out with per-item bookkeeping.
//!
//! Bulk flows (bulk attendance marking, bulk delete) issue one request per
//! employee. Instead of joining on all of them and losing track of which ones
//! landed, each item gets its own outcome and the report states partial
//! success explicitly.

use crate::Error;
use futures::stream::{self, StreamExt};

/// How many requests are in flight at once unless the caller says otherwise.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Per-item outcomes of one bulk operation, both sides sorted by id.
#[derive(Debug)]
pub struct BatchReport<T> {
    pub succeeded: Vec<(i64, T)>,
    pub failed: Vec<(i64, Error)>,
}

impl<T> BatchReport<T> {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn succeeded_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.succeeded.iter().map(|(id, _)| *id)
    }

    /// One line per failure, for the partial-success banner.
    pub fn describe_failures(&self) -> String {
        self.failed
            .iter()
            .map(|(id, err)| format!("#{id}: {err}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Run `op` once per id, at most `limit` in flight, and collect every outcome.
///
/// An empty id list produces an empty report without invoking `op`. Nothing is
/// rolled back on failure; items that succeeded stay succeeded.
pub async fn run<T, F, Fut>(ids: &[i64], limit: usize, op: F) -> BatchReport<T>
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let op = &op;
    let outcomes: Vec<(i64, Result<T, Error>)> = stream::iter(ids.iter().copied())
        .map(|id| async move { (id, op(id).await) })
        .buffer_unordered(limit.max(1))
        .collect()
        .await;

    let mut report = BatchReport {
        succeeded: Vec::new(),
        failed: Vec::new(),
    };
    for (id, outcome) in outcomes {
        match outcome {
            Ok(value) => report.succeeded.push((id, value)),
            Err(err) => report.failed.push((id, err)),
        }
    }
    report.succeeded.sort_by_key(|(id, _)| *id);
    report.failed.sort_by_key(|(id, _)| *id);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn empty_input_issues_no_calls() {
        let calls = Cell::new(0usize);
        let report: BatchReport<()> = block_on(run(&[], DEFAULT_CONCURRENCY, |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));
        assert_eq!(calls.get(), 0);
        assert_eq!(report.total(), 0);
        assert!(report.all_succeeded());
    }

    #[test]
    fn partitions_outcomes_per_item() {
        let report = block_on(run(&[4, 1, 3, 2], 2, |id| async move {
            if id % 2 == 0 {
                Ok(id * 10)
            } else {
                Err(Error::Api {
                    status: 500,
                    message: format!("boom {id}"),
                })
            }
        }));

        assert_eq!(report.total(), 4);
        assert!(!report.all_succeeded());
        assert_eq!(report.succeeded, vec![(2, 20), (4, 40)]);
        assert_eq!(report.succeeded_ids().collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.describe_failures(), "#1: boom 1; #3: boom 3");
    }

    #[test]
    fn zero_limit_still_makes_progress() {
        let report = block_on(run(&[1, 2], 0, |id| async move { Ok::<_, Error>(id) }));
        assert_eq!(report.succeeded.len(), 2);
    }
}
