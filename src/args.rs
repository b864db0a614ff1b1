//! Command line and environment configuration.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Default location of the sales data, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "plan/data.csv";

/// sales_chart: Show monthly sales and expenses from a CSV file as a bar chart.
///
/// The CSV file must start with a header line followed by `month,sales,expenses` lines.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// Path to the CSV file to display.
    #[arg(env = "SALES_CHART_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Args {
    pub fn data(&self) -> &PathBuf {
        &self.data
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sales_chart"]).unwrap();
        // The env var may be set in a developer shell; only the level is fixed.
        if std::env::var_os("SALES_CHART_DATA").is_none() {
            assert_eq!(args.data(), &PathBuf::from(DEFAULT_DATA_PATH));
        }
        assert_eq!(args.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_explicit_values() {
        let args =
            Args::try_parse_from(["sales_chart", "q3.csv", "--log-level", "debug"]).unwrap();
        assert_eq!(args.data(), &PathBuf::from("q3.csv"));
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_bad_log_level() {
        assert!(Args::try_parse_from(["sales_chart", "--log-level", "loud"]).is_err());
    }
}
