use {
    crate::{meminfo::MemInfoError, stat::StatReadError},
    std::{io, path::PathBuf},
    thiserror::Error,
};

/// an error that ends a run.
#[derive(Debug, Error)]
pub enum Error {
    /// the operating system's metrics could not be read.
    #[error("metrics unavailable: {0}")]
    MetricsUnavailable(#[from] MetricsError),
    /// the performance log could not be appended to.
    #[error("could not append to {}: {source}", .path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// the performance log could not be mirrored to the console.
    #[error("could not write to the console: {0}")]
    Console(#[source] io::Error),
    /// the chart could not be drawn or saved.
    #[error("could not render {}: {message}", .path.display())]
    Chart { path: PathBuf, message: String },
}

/// a failure to read one of the kernel's statistics tables.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Cpu(#[from] StatReadError),
    #[error(transparent)]
    Memory(#[from] MemInfoError),
}
