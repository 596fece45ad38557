use dialoguer::console::style;

use crate::engine::{ProbeOutcome, ProbeStatus};
use super::model::Report;

/// Renders outcomes as colored terminal lines
pub struct ConsoleReporter {
    found_only: bool,
}

impl ConsoleReporter {
    pub fn new(found_only: bool) -> Self {
        Self { found_only }
    }

    /// Format one outcome, or nothing if it is filtered out
    pub fn render_outcome(&self, outcome: &ProbeOutcome) -> Option<String> {
        match outcome.status {
            ProbeStatus::Found => Some(success_line(
                &outcome.target_name,
                &format!("Found ({})", outcome.detail),
            )),
            _ if self.found_only => None,
            ProbeStatus::NotFound => Some(error_line(
                &outcome.target_name,
                &format!("Not Found ({})", outcome.detail),
            )),
            ProbeStatus::Rejected | ProbeStatus::Failed => {
                Some(error_line(&outcome.target_name, &outcome.detail))
            }
        }
    }

    pub fn render_summary(&self, report: &Report) -> String {
        format!(
            "{} {} found, {} not found, {} rejected, {} failed ({}s)",
            style(format!("[{}]", report.username)).white().bold(),
            style(report.count(ProbeStatus::Found)).green().bold(),
            report.count(ProbeStatus::NotFound),
            report.count(ProbeStatus::Rejected),
            report.count(ProbeStatus::Failed),
            report.summary.duration_seconds,
        )
    }

    /// Print outcomes in the order they were given, then the summary
    pub fn print(&self, outcomes: &[ProbeOutcome], report: &Report) {
        for outcome in outcomes {
            if let Some(line) = self.render_outcome(outcome) {
                println!("{}", line);
            }
        }
        println!("{}", self.render_summary(report));
    }
}

fn success_line(name: &str, message: &str) -> String {
    format!(
        "{}{}{} {} {}",
        style("[").white().bold(),
        style("+").green().bold(),
        style("]").white().bold(),
        style(format!("{}:", name)).green().bold(),
        message
    )
}

fn error_line(name: &str, message: &str) -> String {
    format!(
        "{}{}{} {} {}",
        style("[").white().bold(),
        style("-").red().bold(),
        style("]").white().bold(),
        style(format!("{}:", name)).green().bold(),
        style(message).yellow().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialoguer::console;

    fn plain(line: Option<String>) -> Option<String> {
        line.map(|l| console::strip_ansi_codes(&l).into_owned())
    }

    #[test]
    fn test_render_outcomes() {
        let reporter = ConsoleReporter::new(false);

        assert_eq!(
            plain(reporter.render_outcome(&ProbeOutcome::found("GitHub", "https://github.com/alice"))),
            Some("[+] GitHub: Found (https://github.com/alice)".to_string())
        );
        assert_eq!(
            plain(reporter.render_outcome(&ProbeOutcome::not_found("GitLab", "https://gitlab.com/alice"))),
            Some("[-] GitLab: Not Found (https://gitlab.com/alice)".to_string())
        );
        assert_eq!(
            plain(reporter.render_outcome(&ProbeOutcome::rejected("NoDots"))),
            Some("[-] NoDots: User Name Not Allowed!".to_string())
        );
        assert_eq!(
            plain(reporter.render_outcome(&ProbeOutcome::failed("Down", "request failed: timeout"))),
            Some("[-] Down: request failed: timeout".to_string())
        );
    }

    #[test]
    fn test_found_only_hides_everything_else() {
        let reporter = ConsoleReporter::new(true);

        assert!(reporter.render_outcome(&ProbeOutcome::found("GitHub", "https://github.com/alice")).is_some());
        assert!(reporter.render_outcome(&ProbeOutcome::not_found("GitLab", "https://gitlab.com/alice")).is_none());
        assert!(reporter.render_outcome(&ProbeOutcome::failed("Down", "request failed")).is_none());
    }
}
