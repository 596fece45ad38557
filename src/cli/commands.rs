use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "userhunt")]
#[command(about = "Check which web services have an account for a username")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub check: CheckArgs,

    #[arg(long, global = true, help = "Log probe details to stderr")]
    pub verbose: bool,

    #[arg(long, short, global = true, help = "Path to a configuration file")]
    pub config: Option<PathBuf>,
}

/// Options of a username check, the default action
#[derive(clap::Args, Debug, Default, Clone)]
pub struct CheckArgs {
    #[arg(short, long, help = "Username to check; prompted for when omitted")]
    pub username: Option<String>,

    #[arg(long = "site", help = "Only check this site (repeatable)")]
    pub sites: Vec<String>,

    #[arg(long, help = "Path to the JSON target file")]
    pub targets: Option<PathBuf>,

    #[arg(long, help = "Per-probe timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Maximum probes in flight (0 = unbounded)")]
    pub max_concurrency: Option<usize>,

    #[arg(long, help = "Write a JSON report to this path")]
    pub json: Option<PathBuf>,

    #[arg(long, help = "Only print sites where the account exists")]
    pub found_only: bool,
}

impl Args {
    /// Target file chosen on the command line; `sites --targets` wins over the top-level flag
    pub fn targets_override(&self) -> Option<&Path> {
        match &self.command {
            Some(Commands::Sites { targets: Some(path) }) => Some(path.as_path()),
            _ => self.check.targets.as_deref(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(short, long, help = "Force overwrite existing configuration")]
        force: bool,
    },

    /// List the sites in the target file
    Sites {
        #[arg(long, help = "Path to the JSON target file")]
        targets: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_flags() {
        let args = Args::try_parse_from([
            "userhunt", "-u", "alice", "--site", "GitHub", "--site", "GitLab",
            "--timeout", "10", "--found-only", "--json", "out.json",
        ])
        .unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.check.username.as_deref(), Some("alice"));
        assert_eq!(args.check.sites, vec!["GitHub", "GitLab"]);
        assert_eq!(args.check.timeout, Some(10));
        assert!(args.check.found_only);
        assert_eq!(args.check.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_parse_subcommands() {
        let args = Args::try_parse_from(["userhunt", "init", "--force"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Init { force: true })));

        let args = Args::try_parse_from(["userhunt", "--verbose", "sites"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Some(Commands::Sites { targets: None })));
    }

    #[test]
    fn test_sites_uses_top_level_targets() {
        let args = Args::try_parse_from(["userhunt", "--targets", "x.json", "sites"]).unwrap();
        assert_eq!(args.targets_override(), Some(Path::new("x.json")));

        let args = Args::try_parse_from([
            "userhunt", "--targets", "x.json", "sites", "--targets", "y.json",
        ])
        .unwrap();
        assert_eq!(args.targets_override(), Some(Path::new("y.json")));

        let args = Args::try_parse_from(["userhunt", "sites"]).unwrap();
        assert_eq!(args.targets_override(), None);
    }
}
