//! Status poller
//!
//! Polls every configured builder once per cycle and maintains the
//! aggregate status board. Cycles never overlap: all fetches of a cycle
//! settle before the board is recomputed and the next delay is chosen.

use std::sync::Arc;

use tokio::time::{self, Duration};
use tracing::{debug, info, warn};

use buildwatch_client::{BuildbotClient, ClientError};
use buildwatch_core::domain::{BuilderName, StatusBoard};

use crate::config::Config;
use crate::render::StatusSink;

/// Result of one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Builders the cycle attempted to fetch
    pub attempted: usize,
    /// Fetches that resolved to a pass/fail state
    pub resolved: usize,
    /// Fetches that rejected (transport, non-200, bad payload)
    pub rejected: usize,
}

impl CycleOutcome {
    /// True when the cycle attempted fetches and every one rejected
    pub fn failed_outright(&self) -> bool {
        self.attempted > 0 && self.resolved == 0
    }
}

/// Poller that repeatedly fetches builder status and publishes the board
///
/// The board is owned here and only touched between awaits on the
/// polling task, so no locking is needed.
pub struct StatusPoller {
    config: Config,
    client: Arc<BuildbotClient>,
    board: StatusBoard,
    sinks: Vec<Box<dyn StatusSink>>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(config: Config, client: Arc<BuildbotClient>, sinks: Vec<Box<dyn StatusSink>>) -> Self {
        Self {
            config,
            client,
            board: StatusBoard::new(),
            sinks,
        }
    }

    /// Starts the polling loop
    ///
    /// Loops forever: fetch, aggregate, publish, wait. There is no
    /// terminal state; a cycle where everything rejected only stretches
    /// the delay before the next attempt.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller ({} builders, interval: {:?})",
            self.config.builders.len(),
            self.config.poll_interval
        );

        loop {
            let outcome = self.run_cycle().await;
            let delay = self.next_delay(&outcome);

            debug!("Cycle settled, next cycle in {:?}", delay);
            time::sleep(delay).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// Fetches run concurrently, one task per builder; the cycle waits
    /// for all of them to settle before folding results into the board
    /// and publishing the new snapshot.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let attempted = self.config.builders.len();
        debug!("Polling {} builders", attempted);

        let mut handles = Vec::with_capacity(attempted);

        for builder in &self.config.builders {
            let client = Arc::clone(&self.client);
            let name = builder.clone();

            handles.push(tokio::spawn(async move {
                let result = client.fetch_builder_status(&name).await;
                (name, result)
            }));
        }

        let mut results = Vec::with_capacity(attempted);
        for handle in handles {
            match handle.await {
                Ok(settled) => results.push(settled),
                Err(e) => warn!("Fetch task panicked: {}", e),
            }
        }

        let outcome = apply_results(&mut self.board, attempted, results);

        info!(
            "Cycle complete: {}/{} builders resolved ({} rejected), all green: {}",
            outcome.resolved,
            outcome.attempted,
            outcome.rejected,
            self.board.all_green()
        );

        self.publish();
        outcome
    }

    /// Delay before the next cycle
    pub fn next_delay(&self, outcome: &CycleOutcome) -> Duration {
        if outcome.failed_outright() {
            warn!(
                "All {} fetches rejected, backing off {:?}",
                outcome.attempted, self.config.failure_backoff
            );
            self.config.failure_backoff
        } else {
            self.config.poll_interval
        }
    }

    /// Pushes the current board to every sink
    fn publish(&self) {
        for sink in &self.sinks {
            sink.publish(&self.config.builders, &self.board);
        }
    }
}

/// Folds settled per-builder results into the board
///
/// A resolved fetch overwrites that builder's entry; a rejected fetch is
/// logged and leaves the prior entry (if any) in place.
fn apply_results(
    board: &mut StatusBoard,
    attempted: usize,
    results: Vec<(BuilderName, Result<bool, ClientError>)>,
) -> CycleOutcome {
    let mut resolved = 0;
    let mut rejected = 0;

    for (name, result) in results {
        match result {
            Ok(succeeded) => {
                resolved += 1;
                if !succeeded {
                    warn!("Builder '{}' latest build failed", name);
                }
                board.record(name, succeeded);
            }
            Err(e) => {
                rejected += 1;
                warn!("Builder '{}' status unknown this cycle: {}", name, e);
            }
        }
    }

    CycleOutcome {
        attempted,
        resolved,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_builders;

    fn settled(
        entries: Vec<(&str, Result<bool, ClientError>)>,
    ) -> Vec<(BuilderName, Result<bool, ClientError>)> {
        entries.into_iter()
            .map(|(name, result)| (BuilderName::new(name), result))
            .collect()
    }

    fn poller_with(builders: &str) -> StatusPoller {
        let config = Config::new("http://localhost:8010".to_string(), parse_builders(builders));
        let client = Arc::new(BuildbotClient::new(config.base_url.clone()));
        StatusPoller::new(config, client, Vec::new())
    }

    #[test]
    fn test_resolved_true_stays_until_overwritten() {
        let mut board = StatusBoard::new();
        let linux = BuilderName::new("Linux");

        apply_results(&mut board, 1, settled(vec![("Linux", Ok(true))]));
        assert_eq!(board.get(&linux), Some(true));

        // A later rejected fetch keeps the stale entry
        apply_results(
            &mut board,
            1,
            settled(vec![("Linux", Err(ClientError::api_error(503, "url")))]),
        );
        assert_eq!(board.get(&linux), Some(true));

        apply_results(&mut board, 1, settled(vec![("Linux", Ok(false))]));
        assert_eq!(board.get(&linux), Some(false));
    }

    #[test]
    fn test_all_rejected_leaves_board_unchanged() {
        let mut board = StatusBoard::new();
        board.record(BuilderName::new("Mac"), true);

        let outcome = apply_results(
            &mut board,
            2,
            settled(vec![
                ("Mac", Err(ClientError::api_error(404, "url"))),
                ("Linux", Err(ClientError::NoBuilds("Linux".into()))),
            ]),
        );

        assert!(outcome.failed_outright());
        assert_eq!(outcome.rejected, 2);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(&BuilderName::new("Mac")), Some(true));
    }

    #[test]
    fn test_partial_failure_is_not_outright() {
        let mut board = StatusBoard::new();

        let outcome = apply_results(
            &mut board,
            2,
            settled(vec![
                ("Mac", Ok(true)),
                ("Linux", Err(ClientError::api_error(500, "url"))),
            ]),
        );

        assert!(!outcome.failed_outright());
        assert_eq!(outcome.resolved, 1);
        assert_eq!(outcome.rejected, 1);
    }

    #[test]
    fn test_next_delay_backs_off_on_outright_failure() {
        let poller = poller_with("Linux,Mac");

        let failed = CycleOutcome {
            attempted: 2,
            resolved: 0,
            rejected: 2,
        };
        assert_eq!(poller.next_delay(&failed), poller.config.failure_backoff);

        let partial = CycleOutcome {
            attempted: 2,
            resolved: 1,
            rejected: 1,
        };
        assert_eq!(poller.next_delay(&partial), poller.config.poll_interval);
    }

    #[test]
    fn test_never_fetched_builders_are_vacuously_green() {
        let mut board = StatusBoard::new();

        let outcome = apply_results(
            &mut board,
            2,
            settled(vec![
                ("Mac", Ok(true)),
                ("Linux", Err(ClientError::api_error(500, "url"))),
            ]),
        );

        // Linux has never resolved, so only Mac participates in the AND
        assert!(!outcome.failed_outright());
        assert!(board.all_green());
        assert_eq!(board.get(&BuilderName::new("Linux")), None);
    }
}
