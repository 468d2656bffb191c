//! formatting for the performance log.

use {
    crate::{
        aggregate::{Stats, Summary},
        sample::Sample,
    },
    std::fmt::{self, Display},
};

#[cfg(test)]
mod tests;

/// the header that precedes the summary at the end of a run.
pub const SUMMARY_HEADER: &str = "Aggregate Statistics:";

/// a decimal number, formatted in its shortest round-trip form with at least one decimal
/// place. `50.0` is written as `50.0`, not `50`.
#[derive(Clone, Copy, Debug)]
pub struct Decimal(pub f64);

/// an optional value, written as `None` when it is absent.
struct Maybe<T>(Option<T>);

// === impl Decimal ===

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value) = *self;

        if value.is_finite() && value.fract() == 0.0 {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}

// === impl Maybe ===

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("None"),
        }
    }
}

/// formats the log line for a single sample.
pub fn sample_line(sample: &Sample) -> String {
    format!(
        "{} - CPU Usage: {}% - Memory Usage: {}% (Total: {}MB, Used: {}MB, Free: {}MB)",
        sample.time.format("%Y-%m-%d %H:%M:%S"),
        Decimal(sample.cpu),
        Decimal(sample.memory),
        sample.total_mb(),
        sample.used_mb(),
        sample.free_mb(),
    )
}

/// formats the summary written at the end of a run, one entry per line.
///
/// the summary opens with a blank line, separating it from the samples above.
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    let Summary {
        cpu,
        memory,
        used,
        free,
    } = summary;

    vec![
        String::new(),
        SUMMARY_HEADER.to_owned(),
        stats_line("CPU Usage", "%", cpu.map(Decimal)),
        stats_line("Memory Usage", "%", memory.map(Decimal)),
        stats_line("Memory Used", "MB", *used),
        stats_line("Memory Free", "MB", *free),
    ]
}

fn stats_line<T: Display>(name: &str, unit: &str, Stats { min, max, avg }: Stats<T>) -> String {
    let (min, max, avg) = (Maybe(min), Maybe(max), Maybe(avg.map(Decimal)));
    format!("Min {name}: {min}{unit}\tMax {name}: {max}{unit}\tAvg {name}: {avg}{unit}")
}

// === impl Stats ===

impl<T> Stats<T> {
    /// maps the minimum and maximum to another type.
    fn map<U>(self, f: impl Fn(T) -> U) -> Stats<U> {
        let Self { min, max, avg } = self;
        Stats {
            min: min.map(&f),
            max: max.map(&f),
            avg,
        }
    }
}
