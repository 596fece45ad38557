use std::sync::Arc;
use chrono::Utc;
use tracing::{info, debug};

use crate::config::Config;
use crate::engine::{Engine, ProbeOutcome};
use crate::error::{HuntResult, HuntError};
use crate::reporting::{ConsoleReporter, JsonReportGenerator, Report};
use crate::target::{self, Target};
use crate::utils::{normalize_username, HttpClient};

use super::commands::CheckArgs;
use super::interactive::prompt_username;

/// The main application struct
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load every target from the configured file, optionally narrowed to `sites`
    pub fn load_targets(&self, sites: &[String]) -> HuntResult<Vec<Target>> {
        let targets = target::load_targets(&self.config.global.targets_file)?;
        target::select_targets(targets, sites)
    }

    /// Build an engine on a pooled HTTP client from the current settings
    pub fn build_engine(&self) -> HuntResult<Engine> {
        let global = &self.config.global;
        let client = HttpClient::new(Some(global.user_agent.clone()), Some(global.timeout_seconds))
            .map_err(|e| HuntError::NetworkError(e.to_string()))?;

        Ok(Engine::new(Arc::new(client)).with_max_concurrency(global.max_concurrent_probes))
    }

    /// Probe every target for one username and summarize the run
    pub async fn check(
        &self,
        engine: &Engine,
        raw_username: &str,
        targets: Vec<Target>,
    ) -> HuntResult<(Vec<ProbeOutcome>, Report)> {
        let username = normalize_username(raw_username);
        if username.is_empty() {
            return Err(HuntError::InvalidInput("Username must not be empty".to_string()));
        }

        debug!("Checking '{}' against {} targets", username, targets.len());
        let start_time = Utc::now();
        let outcomes = engine.run(&username, targets.into()).await;
        let report = Report::new(&username, outcomes.clone(), start_time, Utc::now());

        info!("Found '{}' on {} sites", username, report.found().count());
        Ok((outcomes, report))
    }

    /// Full username check: resolve the username, probe, print, write the report
    pub async fn run_check(&self, args: &CheckArgs) -> HuntResult<Report> {
        let targets = self.load_targets(&args.sites)?;
        let engine = self.build_engine()?;

        let raw_username = match args.username.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => prompt_username()?,
        };

        let (outcomes, report) = self.check(&engine, &raw_username, targets).await?;

        ConsoleReporter::new(args.found_only).print(&outcomes, &report);

        if let Some(path) = &args.json {
            JsonReportGenerator::new().generate(&report, path).await?;
        }

        Ok(report)
    }
}
