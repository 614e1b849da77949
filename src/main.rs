//! `u-league`: plans a double round-robin season.
//!
//! Without a configuration file the built-in seven-club league is planned.
//! Exit code 0 when a schedule is found, 2 when the trial cap runs out,
//! 1 on argument or configuration errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_league::config::LeagueConfig;
use u_league::report::{ReportFormat, ScheduleReport};
use u_league::scheduler::LeagueScheduler;

#[derive(Parser, Debug)]
#[command(name = "u-league")]
#[command(about = "Double round-robin fixture scheduler", long_about = None)]
struct Args {
    /// League configuration (TOML); the reference league when omitted
    config: Option<PathBuf>,

    /// Random seed, overrides the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// Trial cap, overrides the configuration
    #[arg(long)]
    trials: Option<usize>,

    /// Output format: text, json or dot
    #[arg(long, default_value = "text")]
    format: ReportFormat,

    /// Break legal-round ties by home-clash count
    #[arg(long)]
    prioritize_clashes: bool,
}

impl Args {
    fn league(&self) -> Result<LeagueConfig, u_league::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => LeagueConfig::load(path)?,
            None => LeagueConfig::reference(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(trials) = self.trials {
            config = config.with_max_trials(trials);
        }
        config.prioritize_clashes |= self.prioritize_clashes;
        Ok(config)
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_league=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging();

    let config = match args.league() {
        Ok(config) => config,
        Err(e) => {
            error!(path = ?args.config, "{e}");
            return ExitCode::from(1);
        }
    };

    info!(
        participants = config.participants.len(),
        rounds = config.rounds,
        max_trials = config.max_trials,
        seed = ?config.random_seed,
        "Planning league"
    );

    let request = config.request();
    let outcome = LeagueScheduler::new()
        .with_rule_engine(config.rule_engine())
        .schedule(&request, &mut config.rng());

    match ScheduleReport::new(&outcome, &config.participants).render(args.format) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            error!("failed to render report: {e}");
            return ExitCode::from(1);
        }
    }

    if outcome.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["u-league"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(args.trials.is_none());
        assert_eq!(args.format, ReportFormat::Text);
        assert!(!args.prioritize_clashes);
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "u-league",
            "league.toml",
            "--seed",
            "42",
            "--trials",
            "1000",
            "--format",
            "dot",
            "--prioritize-clashes",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("league.toml")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.trials, Some(1000));
        assert_eq!(args.format, ReportFormat::Dot);
        assert!(args.prioritize_clashes);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Args::try_parse_from(["u-league", "--seed"]).is_err());
        assert!(Args::try_parse_from(["u-league", "--seed", "x"]).is_err());
        assert!(Args::try_parse_from(["u-league", "--format", "svg"]).is_err());
        assert!(Args::try_parse_from(["u-league", "--verbose"]).is_err());
        assert!(Args::try_parse_from(["u-league", "a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_reference_league() {
        let args = Args::try_parse_from([
            "u-league",
            "--seed",
            "7",
            "--trials",
            "20",
            "--prioritize-clashes",
        ])
        .unwrap();
        let config = args.league().unwrap();
        assert_eq!(config.participants.len(), 7);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.max_trials, 20);
        assert!(config.prioritize_clashes);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["u-league", "/nonexistent/league.toml"]).unwrap();
        assert!(args.league().is_err());
    }

    #[test]
    fn test_help_is_not_an_error_stream() {
        let err = Args::try_parse_from(["u-league", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
