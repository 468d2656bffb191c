use {
    crate::{
        error::MetricsError,
        meminfo::VirtualMemory,
        source::{Clock, ProcFs, StatsSource, SystemClock},
        stat::{Measurement, Snapshot, StatReadError},
    },
    chrono::{DateTime, Local},
    std::time::Duration,
};


/// the number of bytes in a mebibyte.
const MB: u64 = 1024 * 1024;

/// a single reading of the host's cpu and memory utilization.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// when the reading began.
    pub time: DateTime<Local>,
    /// the percentage of cpu time spent busy over the measurement window.
    pub cpu: f64,
    /// the percentage of memory that is not available.
    pub memory: f64,
    /// total physical memory, in bytes.
    pub total: u64,
    /// memory in use, in bytes.
    pub used: u64,
    /// memory available to new processes, in bytes.
    pub available: u64,
}

/// samples cpu and memory utilization.
pub struct Sampler<C = SystemClock, S = ProcFs> {
    /// the clock being used to measure time.
    clock: C,
    /// the underlying source of kernel statistics.
    source: S,
    /// how long cpu time is measured for.
    window: Duration,
}

// === impl Sample ===

impl Sample {
    /// total memory, in whole megabytes.
    pub fn total_mb(&self) -> u64 {
        self.total / MB
    }

    /// used memory, in whole megabytes.
    pub fn used_mb(&self) -> u64 {
        self.used / MB
    }

    /// available memory, in whole megabytes.
    pub fn free_mb(&self) -> u64 {
        self.available / MB
    }
}

// === impl Sampler ===

impl<C: Default, S: Default> Sampler<C, S> {
    /// creates a new [`Sampler`], measuring cpu time over the given window.
    pub fn new(window: Duration) -> Self {
        Self::with(C::default(), S::default(), window)
    }
}

impl<C, S> Sampler<C, S> {
    /// creates a new [`Sampler`] from a clock and a source of statistics.
    pub fn with(clock: C, source: S, window: Duration) -> Self {
        Self {
            clock,
            source,
            window,
        }
    }

    /// returns the clock this sampler measures time with.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C, S> Sampler<C, S>
where
    C: Clock,
    S: StatsSource,
{
    /// takes a [`Sample`].
    ///
    /// NB: this blocks for the length of the measurement window.
    pub fn sample(&self) -> Result<Sample, MetricsError> {
        let Self { clock, source, .. } = self;

        let time = clock.now();
        let cpu = self.cpu_percent()?;
        let VirtualMemory {
            total,
            available,
            used,
            percent: memory,
        } = VirtualMemory::read(source)?;

        Ok(Sample {
            time,
            cpu,
            memory,
            total,
            used,
            available,
        })
    }

    /// measures the percentage of busy cpu time across the measurement window.
    fn cpu_percent(&self) -> Result<f64, StatReadError> {
        let Self {
            clock,
            source,
            window,
        } = self;

        let Snapshot { system: a } = Snapshot::read(source)?;
        clock.sleep(*window);
        let Snapshot { system: b } = Snapshot::read(source)?;

        Ok(Measurement::new(a, b).percentage())
    }
}
