use {
    crate::error::Error,
    crossterm::{QueueableCommand, style::Print},
    std::{
        fs::OpenOptions,
        io::{self, Stdout, Write},
        path::{Path, PathBuf},
    },
};


/// the performance log.
///
/// each line is appended to a log file, and mirrored to the console.
pub struct PerfLog<W = Stdout> {
    /// the path of the log file.
    path: PathBuf,
    /// where lines are mirrored to.
    console: W,
}

// === impl PerfLog ===

impl PerfLog<Stdout> {
    /// creates a log that appends to the file at `path`, mirrored to stdout.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_console(path, io::stdout())
    }
}

impl<W: Write> PerfLog<W> {
    /// creates a log that appends to the file at `path`, mirrored to `console`.
    pub fn with_console(path: impl Into<PathBuf>, console: W) -> Self {
        Self {
            path: path.into(),
            console,
        }
    }

    /// returns the path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// returns the console that lines are mirrored to.
    #[cfg(test)]
    pub fn console(&self) -> &W {
        &self.console
    }

    /// writes a line to the log file and the console.
    pub fn line(&mut self, line: &str) -> Result<(), Error> {
        self.append(line).map_err(|source| Error::LogWrite {
            path: self.path.clone(),
            source,
        })?;
        self.mirror(line).map_err(Error::Console)
    }

    /// appends a line to the log file.
    ///
    /// the file is opened for each line, and closed again before returning.
    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn mirror(&mut self, line: &str) -> io::Result<()> {
        self.console
            .queue(Print(line))?
            .queue(Print('\n'))?
            .flush()
    }
}
