use std::{path::PathBuf, time::Duration};

/// the settings of a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// how long to sample for.
    ///
    /// the run ends after the first tick that finishes at least this long after the run began.
    pub timeout: Duration,
    /// how long to sleep after each sample.
    pub interval: Duration,
    /// how long cpu time is measured for, in each sample.
    pub window: Duration,
    /// where the performance log is appended to.
    pub log_file: PathBuf,
    /// where the chart is written to, or `None` if no chart should be rendered.
    pub chart_dir: Option<PathBuf>,
}

// === impl Config ===

impl Config {
    pub const LOG_FILE: &str = "server_performance.log";
    pub const INTERVAL: Duration = Duration::from_secs(1);
    pub const WINDOW: Duration = Duration::from_secs(1);

    /// returns the default configuration for a run of the given length.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

/// a single tick, logged to `server_performance.log` and charted into the working
/// directory.
impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::ZERO,
            interval: Self::INTERVAL,
            window: Self::WINDOW,
            log_file: PathBuf::from(Self::LOG_FILE),
            chart_dir: Some(PathBuf::from(".")),
        }
    }
}
