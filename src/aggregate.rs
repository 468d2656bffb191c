//! running and end-of-run statistics.
//!
//! an [`Aggregator`] maintains two views of the samples it records. the
//! [`RunningExtremes`] are kept up to date as each sample arrives, and skip percentages
//! of exactly 0 or 100, which are treated as sensor artifacts. the [`Summary`] is computed
//! once, at the end of a run, over every sample that was recorded, artifacts included.
//!
//! the two views disagree whenever an artifact was recorded. both are kept as-is so that
//! reports stay comparable with logs written by earlier runs.

use crate::{round::round, sample::Sample};


/// records samples, tracking their extremes.
#[derive(Debug, Default)]
pub struct Aggregator {
    /// the extremes observed so far.
    extremes: RunningExtremes,
    /// every sample recorded, in arrival order.
    history: Vec<Sample>,
}

/// the running minimum and maximum of a metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extremes<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

/// the running extremes of each tracked metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningExtremes {
    /// cpu utilization, in percent. excludes 0% and 100%.
    pub cpu: Extremes<f64>,
    /// memory utilization, in percent. excludes 0% and 100%.
    pub memory: Extremes<f64>,
    /// memory used, in megabytes.
    pub used: Extremes<u64>,
    /// memory free, in megabytes.
    pub free: Extremes<u64>,
}

/// the minimum, maximum, and mean of a metric.
///
/// each value is `None` if no samples were recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    /// the arithmetic mean, rounded to two decimal places.
    pub avg: Option<f64>,
}

/// end-of-run statistics over every recorded sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub cpu: Stats<f64>,
    pub memory: Stats<f64>,
    pub used: Stats<u64>,
    pub free: Stats<u64>,
}

/// each metric as a time series, for plotting.
///
/// points are `(elapsed seconds, value)` pairs, measured from the first sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub cpu: Vec<(f64, f64)>,
    pub memory: Vec<(f64, f64)>,
    pub used: Vec<(f64, f64)>,
    pub free: Vec<(f64, f64)>,
}

// === impl Aggregator ===

impl Aggregator {
    /// creates a new, empty [`Aggregator`].
    pub fn new() -> Self {
        Self::default()
    }

    /// records a sample.
    pub fn record(&mut self, sample: Sample) {
        let Self {
            extremes:
                RunningExtremes {
                    cpu,
                    memory,
                    used,
                    free,
                },
            history,
        } = self;

        if Self::qualifies(sample.cpu) {
            cpu.update(sample.cpu);
        }
        if Self::qualifies(sample.memory) {
            memory.update(sample.memory);
        }
        used.update(sample.used_mb());
        free.update(sample.free_mb());

        history.push(sample);
    }

    /// returns the running extremes of each metric.
    pub fn extremes(&self) -> RunningExtremes {
        self.extremes
    }

    /// returns every recorded sample, in arrival order.
    pub fn history(&self) -> &[Sample] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// forgets every recorded sample, in preparation for a new run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// computes the minimum, maximum, and mean of each metric over the full history.
    pub fn summarize(&self) -> Summary {
        let Self { history, .. } = self;

        let metric = |f: fn(&Sample) -> f64| history.iter().map(f).collect::<Vec<_>>();
        let megabytes = |f: fn(&Sample) -> u64| history.iter().map(f).collect::<Vec<_>>();

        Summary {
            cpu: Stats::over(&metric(|s| s.cpu), |v| v),
            memory: Stats::over(&metric(|s| s.memory), |v| v),
            used: Stats::over(&megabytes(Sample::used_mb), |v| v as f64),
            free: Stats::over(&megabytes(Sample::free_mb), |v| v as f64),
        }
    }

    /// returns each metric as a series of points, for plotting.
    pub fn series(&self) -> Series {
        let Self { history, .. } = self;

        let Some(first) = history.first() else {
            return Series::default();
        };

        let points = |f: fn(&Sample) -> f64| {
            history
                .iter()
                .map(|sample| {
                    let elapsed = (sample.time - first.time).num_milliseconds() as f64 / 1000.0;
                    (elapsed, f(sample))
                })
                .collect::<Vec<_>>()
        };

        Series {
            cpu: points(|s| s.cpu),
            memory: points(|s| s.memory),
            used: points(|s| s.used_mb() as f64),
            free: points(|s| s.free_mb() as f64),
        }
    }

    /// whether a percentage counts towards the running extremes.
    fn qualifies(percent: f64) -> bool {
        0.0 < percent && percent < 100.0
    }
}

// === impl Extremes ===

impl<T: Copy + PartialOrd> Extremes<T> {
    /// accounts for a new value.
    ///
    /// the first value becomes both the minimum and the maximum. later values only replace
    /// an extreme they strictly exceed.
    pub fn update(&mut self, value: T) {
        let Self { min, max } = self;

        if (*min).is_none_or(|min| value < min) {
            *min = Some(value);
        }
        if (*max).is_none_or(|max| value > max) {
            *max = Some(value);
        }
    }
}

// === impl Stats ===

impl<T: Copy + PartialOrd> Stats<T> {
    /// computes statistics over a slice of values.
    fn over(values: &[T], to_f64: impl Fn(T) -> f64) -> Self {
        let Some((&first, rest)) = values.split_first() else {
            return Self {
                min: None,
                max: None,
                avg: None,
            };
        };

        let (min, max) = rest.iter().fold((first, first), |(min, max), &value| {
            let min = if value < min { value } else { min };
            let max = if value > max { value } else { max };
            (min, max)
        });

        let sum = values.iter().copied().map(to_f64).sum::<f64>();
        let avg = round(sum / values.len() as f64, 2);

        Self {
            min: Some(min),
            max: Some(max),
            avg: Some(avg),
        }
    }
}
