//! a lightweight host performance sampler.
//!
//! samples cpu and memory utilization at a fixed cadence for a bounded duration. each
//! sample is appended to a performance log, and mirrored to the console. at the end of a
//! run, a summary of the samples is logged, and a chart of them is rendered.

pub use self::{
    aggregate::{Aggregator, Extremes, RunningExtremes, Series, Stats, Summary},
    app::{App, Report},
    chart::{PngChart, Renderer},
    config::Config,
    error::{Error, MetricsError},
    log::PerfLog,
    meminfo::{MemInfoError, VirtualMemory},
    sample::{Sample, Sampler},
    source::{Clock, ProcFs, StatsSource, SystemClock},
    stat::{EntryParseError, StatReadError},
};

mod aggregate;
mod app;
mod chart;
mod config;
mod error;
mod log;
mod report;
mod round;
mod sample;
mod source;

/// memory statistics.
///
/// this file provides tools to interact with `/proc/meminfo`.
mod meminfo;

/// kernel statistics facilities.
///
/// this file provides tools to interact with `/proc/stat`.
mod stat;
