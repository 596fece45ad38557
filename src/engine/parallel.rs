// src/engine/parallel.rs
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, debug, warn};

use crate::target::Target;
use super::detector;
use super::outcome::ProbeOutcome;
use super::prober::{Prober, Transport};

/// Runs one probe per target concurrently and gathers every outcome
#[derive(Clone)]
pub struct Engine {
    prober: Prober,
    semaphore: Option<Arc<Semaphore>>,
}

impl Engine {
    /// Create an engine with unbounded fan-out
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            prober: Prober::new(transport),
            semaphore: None,
        }
    }

    /// Cap the number of probes in flight. Zero keeps the fan-out unbounded.
    pub fn with_max_concurrency(mut self, max_concurrent_probes: usize) -> Self {
        self.semaphore = match max_concurrent_probes {
            0 => None,
            limit => Some(Arc::new(Semaphore::new(limit.min(Semaphore::MAX_PERMITS)))),
        };
        self
    }

    /// Probe every target for `username` and wait for all of them.
    ///
    /// The returned outcomes are in completion order and hold exactly one entry per target.
    pub async fn run(&self, username: &str, targets: Arc<[Target]>) -> Vec<ProbeOutcome> {
        if targets.is_empty() {
            info!("No targets to probe");
            return Vec::new();
        }

        info!("Probing {} targets for '{}'", targets.len(), username);
        let start_time = Instant::now();

        // one slot per target, so no sender ever waits on the receiver
        let (tx, mut rx) = mpsc::channel(targets.len());
        let mut handles = Vec::with_capacity(targets.len());

        for index in 0..targets.len() {
            let targets = Arc::clone(&targets);
            let tx = tx.clone();
            let prober = self.prober.clone();
            let semaphore = self.semaphore.clone();
            let username = username.to_string();

            let handle = tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                let outcome = Self::check_target(&prober, &targets[index], &username).await;
                let _ = tx.send(outcome).await;
            });

            handles.push((index, handle));
        }
        drop(tx);

        let mut aborted = Vec::new();
        for (index, handle) in handles {
            if let Err(e) = handle.await {
                let name = &targets[index].name;
                warn!("Probe for {} did not complete: {}", name, e);
                aborted.push(ProbeOutcome::failed(name.clone(), format!("probe aborted: {}", e)));
            }
        }

        let mut outcomes = Vec::with_capacity(targets.len());
        while let Some(outcome) = rx.recv().await {
            outcomes.push(outcome);
        }
        outcomes.extend(aborted);

        info!("Completed {} probes in {:?}", outcomes.len(), start_time.elapsed());
        outcomes
    }

    /// Gate, probe and classify a single target
    async fn check_target(prober: &Prober, target: &Target, username: &str) -> ProbeOutcome {
        if target.rejects(username) {
            debug!("{} rejects usernames containing a period", target.name);
            return ProbeOutcome::rejected(target.name.clone());
        }

        let response = match prober.probe(target, username).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Probe for {} failed: {}", target.name, e);
                return ProbeOutcome::failed(target.name.clone(), e.to_string());
            }
        };

        if detector::is_absent(target, &response) {
            debug!("{}: not found (status {})", target.name, response.status);
            ProbeOutcome::not_found(target.name.clone(), target.resolve_url(username))
        } else {
            debug!("{}: found at {}", target.name, response.final_url);
            ProbeOutcome::found(target.name.clone(), response.final_url)
        }
    }
}
