use {
    crate::{
        aggregate::{Aggregator, RunningExtremes, Summary},
        chart::{PngChart, Renderer},
        config::Config,
        error::Error,
        log::PerfLog,
        report,
        sample::Sampler,
        source::{Clock, ProcFs, StatsSource, SystemClock},
    },
    chrono::{DateTime, Local},
    std::{
        io::{Stdout, Write},
        path::PathBuf,
        time::Duration,
    },
    tracing::{debug, info, warn},
};


/// samples the host until the configured timeout has elapsed.
pub struct App<C = SystemClock, S = ProcFs, W = Stdout, R = PngChart> {
    /// takes each sample.
    sampler: Sampler<C, S>,
    /// accumulates statistics over the samples.
    aggregator: Aggregator,
    /// where each sample, and the summary, are logged.
    log: PerfLog<W>,
    /// draws the chart at the end of a run, if any.
    renderer: Option<R>,
    /// how long to run for.
    timeout: Duration,
    /// how long to sleep after each sample.
    interval: Duration,
}

/// the state of a run.
#[derive(Clone, Copy, Debug)]
enum State {
    /// sampling, since the given time.
    Running { start: DateTime<Local> },
    /// the timeout has elapsed.
    Stopped,
}

/// the outcome of a completed run.
#[derive(Clone, Debug)]
pub struct Report {
    /// the number of samples taken.
    pub ticks: usize,
    /// statistics over every sample.
    pub summary: Summary,
    /// the running extremes as they stood at the end of the run.
    pub extremes: RunningExtremes,
    /// the chart that was rendered, if any.
    pub chart: Option<PathBuf>,
}

// === impl App ===

impl App {
    /// initializes a new application, sampling this host.
    pub fn new(config: &Config) -> Self {
        let Config {
            window,
            log_file,
            chart_dir,
            ..
        } = config;

        Self::with(
            config,
            Sampler::<SystemClock, ProcFs>::new(*window),
            PerfLog::new(log_file),
            chart_dir.as_ref().map(PngChart::new),
        )
    }
}

impl<C, S, W, R> App<C, S, W, R>
where
    C: Clock,
    S: StatsSource,
    W: Write,
    R: Renderer,
{
    /// initializes a new application from its parts.
    pub fn with(
        config: &Config,
        sampler: Sampler<C, S>,
        log: PerfLog<W>,
        renderer: Option<R>,
    ) -> Self {
        Self {
            sampler,
            aggregator: Aggregator::new(),
            log,
            renderer,
            timeout: config.timeout,
            interval: config.interval,
        }
    }

    /// runs the application.
    ///
    /// at least one sample is always taken. an error taking a sample, or writing to the log,
    /// ends the run immediately.
    pub fn run(mut self) -> Result<Report, Error> {
        let start = self.clock().now();
        info!(timeout = ?self.timeout, log = %self.log.path().display(), "sampling");

        let mut state = State::Running { start };
        while let State::Running { start } = state {
            self.tick()?;
            state = self.next_state(start);
        }

        self.finish()
    }

    /// takes, records, and logs a single sample.
    fn tick(&mut self) -> Result<(), Error> {
        let Self {
            sampler,
            aggregator,
            log,
            interval,
            ..
        } = self;

        let sample = sampler.sample()?;
        debug!(cpu = sample.cpu, memory = sample.memory, "sampled");

        let line = report::sample_line(&sample);
        aggregator.record(sample);
        log.line(&line)?;

        sampler.clock().sleep(*interval);
        Ok(())
    }

    /// checks whether the timeout has elapsed.
    fn next_state(&self, start: DateTime<Local>) -> State {
        // a clock that went backwards counts as no time elapsed.
        let elapsed = (self.clock().now() - start).to_std().unwrap_or_default();

        if elapsed >= self.timeout {
            State::Stopped
        } else {
            State::Running { start }
        }
    }

    /// logs the summary, and renders the chart.
    fn finish(mut self) -> Result<Report, Error> {
        let summary = self.aggregator.summarize();
        for line in report::summary_lines(&summary) {
            self.log.line(&line)?;
        }

        let chart = self.render()?;
        let ticks = self.aggregator.len();
        info!(ticks, "finished sampling");

        Ok(Report {
            ticks,
            summary,
            extremes: self.aggregator.extremes(),
            chart,
        })
    }

    fn render(&self) -> Result<Option<PathBuf>, Error> {
        let Some(renderer) = &self.renderer else {
            debug!("chart rendering is disabled");
            return Ok(None);
        };

        if self.aggregator.is_empty() {
            warn!("no samples were taken, skipping the chart");
            return Ok(None);
        }

        let series = self.aggregator.series();
        let path = renderer.render(&series, self.clock().now())?;
        info!(chart = %path.display(), "rendered chart");

        Ok(Some(path))
    }

    fn clock(&self) -> &C {
        self.sampler.clock()
    }
}
