/// Command-line arguments for the poolscope binary
///
/// Debug flags follow the `--debug-<tag>` convention of the logger; they are
/// declared here so clap accepts them and forwarded as a `LoggerConfig`.
use std::path::PathBuf;

use clap::Parser;

use crate::logger::LoggerConfig;
use crate::pools::{ SortKey, ValidationMode, WhereClause };

#[derive(Debug, Parser)]
#[command(name = "poolscope", version, about = "Sorted, paginated staking pool metrics")]
pub struct Arguments {
    /// JSON file with pool rows (array or {"data":{"stakingPools":[...]}})
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Sort key: totalUsers, amount, weekPerformance, monthPerformance, commissionPercentage
    #[arg(short, long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Zero-based page number
    #[arg(short, long, default_value_t = 0)]
    pub page: usize,

    /// Only pools run by this manager (case-insensitive)
    #[arg(long, value_name = "ADDRESS")]
    pub manager: Option<String>,

    /// Only the pool with this address (case-insensitive)
    #[arg(long, value_name = "ADDRESS")]
    pub id: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print the indexer query variables for this request and exit
    #[arg(long)]
    pub print_query: bool,

    /// Skip invalid pool rows instead of failing
    #[arg(long)]
    pub lenient: bool,

    #[arg(long)]
    pub verbose: bool,

    #[arg(long)]
    pub quiet: bool,

    /// Plain log lines without ANSI colors
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log lines without the time prefix
    #[arg(long = "no-time")]
    pub no_time: bool,

    /// Debug output for the engine
    #[arg(long = "debug-pools")]
    pub debug_pools: bool,

    /// Debug output for record loading
    #[arg(long = "debug-input")]
    pub debug_input: bool,

    /// Debug output for configuration loading
    #[arg(long = "debug-config")]
    pub debug_config: bool,

    /// Debug output for every tag
    #[arg(long = "debug-all")]
    pub debug_all: bool,
}

impl Arguments {
    pub fn filter(&self) -> WhereClause {
        WhereClause::new(self.manager.clone(), self.id.clone())
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.lenient { ValidationMode::Lenient } else { ValidationMode::Strict }
    }

    /// Logger settings equivalent to the flags given
    pub fn logger_config(&self) -> LoggerConfig {
        let flags = [
            (self.verbose, "--verbose"),
            (self.quiet, "--quiet"),
            (self.no_color, "--no-color"),
            (self.no_time, "--no-time"),
            (self.debug_pools, "--debug-pools"),
            (self.debug_input, "--debug-input"),
            (self.debug_config, "--debug-config"),
            (self.debug_all, "--debug-all"),
        ];
        let enabled: Vec<&str> = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, flag)| *flag)
            .collect();
        LoggerConfig::from_args(&enabled)
    }
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    value.parse::<SortKey>().map_err(|e| e.to_string())
}
