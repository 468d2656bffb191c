use {
    crate::{round::round, source::StatsSource},
    std::{
        io::{self, BufRead, BufReader},
        num::ParseIntError,
    },
    thiserror::Error,
};

#[cfg(test)]
mod tests;

/// a snapshot of the system's virtual memory, in bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualMemory {
    /// total physical memory.
    pub total: u64,
    /// memory that can be handed to new processes without swapping.
    pub available: u64,
    /// memory in use, excluding buffers and page cache.
    pub used: u64,
    /// the percentage of memory that is not available, to one decimal place.
    pub percent: f64,
}

#[derive(Debug, Error)]
pub enum MemInfoError {
    #[error("could not read /proc/meminfo: {0}")]
    Io(#[from] io::Error),
    #[error("malformed /proc/meminfo line: {line:?}")]
    Malformed { line: String },
    #[error("invalid /proc/meminfo value for {key}: {source}")]
    Value {
        key: String,
        #[source]
        source: ParseIntError,
    },
    #[error("/proc/meminfo has no {0} entry")]
    Missing(&'static str),
    #[error("/proc/meminfo reports no total memory")]
    ZeroTotal,
}

/// the `/proc/meminfo` fields that memory usage is derived from.
#[derive(Debug, Default)]
struct Fields {
    total: Option<u64>,
    free: Option<u64>,
    available: Option<u64>,
    buffers: Option<u64>,
    cached: Option<u64>,
    reclaimable: Option<u64>,
}

// === impl VirtualMemory ===

impl VirtualMemory {
    /// uses the given source to read a snapshot of memory usage.
    pub(crate) fn read(source: &impl StatsSource) -> Result<Self, MemInfoError> {
        let reader = source.meminfo()?;

        let mut fields = Fields::default();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            fields.parse_line(&line)?;
        }

        Self::try_from(fields)
    }
}

impl TryFrom<Fields> for VirtualMemory {
    type Error = MemInfoError;
    fn try_from(
        Fields {
            total,
            free,
            available,
            buffers,
            cached,
            reclaimable,
        }: Fields,
    ) -> Result<Self, Self::Error> {
        let total = total.ok_or(MemInfoError::Missing("MemTotal"))?;
        let free = free.ok_or(MemInfoError::Missing("MemFree"))?;
        if total == 0 {
            return Err(MemInfoError::ZeroTotal);
        }

        let buffers = buffers.unwrap_or_default();
        let cached = cached.unwrap_or_default() + reclaimable.unwrap_or_default();

        // kernels older than 3.14 do not report available memory, so estimate it.
        let available = available.unwrap_or(free + buffers + cached);

        // on some virtualized hosts the cache is larger than what is left of memory.
        let used = total
            .checked_sub(free + buffers + cached)
            .unwrap_or(total.saturating_sub(free));

        let percent = total.saturating_sub(available) as f64 / total as f64 * 100.0;
        let percent = round(percent, 1);

        Ok(Self {
            total,
            available,
            used,
            percent,
        })
    }
}

// === impl Fields ===

impl Fields {
    /// the number of bytes in a kibibyte, the unit `/proc/meminfo` reports in.
    const KB: u64 = 1024;

    /// parses a `Key:   value kB` line, recording it if it is a field of interest.
    fn parse_line(&mut self, line: &str) -> Result<(), MemInfoError> {
        let Some((key, rest)) = line.split_once(':') else {
            return Err(MemInfoError::Malformed {
                line: line.to_owned(),
            });
        };

        let slot = match key {
            "MemTotal" => &mut self.total,
            "MemFree" => &mut self.free,
            "MemAvailable" => &mut self.available,
            "Buffers" => &mut self.buffers,
            "Cached" => &mut self.cached,
            "SReclaimable" => &mut self.reclaimable,
            _ => return Ok(()),
        };

        let mut tokens = rest.split_whitespace();
        let (Some(value), unit, None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(MemInfoError::Malformed {
                line: line.to_owned(),
            });
        };

        let value = value.parse::<u64>().map_err(|source| MemInfoError::Value {
            key: key.to_owned(),
            source,
        })?;

        *slot = Some(match unit {
            Some("kB") => value * Self::KB,
            _ => value,
        });

        Ok(())
    }
}
