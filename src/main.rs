//! a lightweight host performance sampler.

use {
    clap::Parser,
    perfgraph::{App, Config},
    std::{path::PathBuf, process::ExitCode, time::Duration},
    tracing::debug,
    tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

/// samples cpu and memory utilization, then charts it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// how long to sample for, in seconds.
    ///
    /// a negative timeout takes a single sample.
    #[arg(allow_negative_numbers = true)]
    timeout: i64,

    /// the performance log to append to.
    #[arg(long, default_value = Config::LOG_FILE, env = "PERFGRAPH_LOG_FILE")]
    log_file: PathBuf,

    /// the directory to write the chart to.
    #[arg(long, default_value = ".", env = "PERFGRAPH_CHART_DIR")]
    chart_dir: PathBuf,

    /// do not render a chart.
    #[arg(long)]
    no_chart: bool,

    /// how long to sleep after each sample, in seconds.
    #[arg(long, default_value_t = 1)]
    interval: u64,

    /// how long to measure cpu time for in each sample, in seconds.
    #[arg(long, default_value_t = 1)]
    window: u64,
}

fn main() -> ExitCode {
    // diagnostics go to stderr, so that stdout mirrors the performance log exactly.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Opts::parse());
    debug!(?config, "starting");

    match App::new(&config).run() {
        Ok(report) => {
            debug!(ticks = report.ticks, chart = ?report.chart, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(?err, "run failed");
            eprintln!("perfgraph: {err}");
            ExitCode::FAILURE
        }
    }
}

// === impl Opts ===

impl From<Opts> for Config {
    fn from(
        Opts {
            timeout,
            log_file,
            chart_dir,
            no_chart,
            interval,
            window,
        }: Opts,
    ) -> Self {
        Self {
            timeout: Duration::from_secs(u64::try_from(timeout).unwrap_or_default()),
            interval: Duration::from_secs(interval),
            window: Duration::from_secs(window),
            log_file,
            chart_dir: (!no_chart).then_some(chart_dir),
        }
    }
}
