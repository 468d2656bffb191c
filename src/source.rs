use {
    chrono::{DateTime, Local},
    std::{
        fs::File,
        io::{self, BufReader, Read},
        time::Duration,
    },
};

#[cfg(test)]
use std::{cell::RefCell, collections::VecDeque, io::Cursor};

pub use self::{clock::*, stats::*};

mod clock {
    use super::*;

    /// a source of wall-clock time.
    pub trait Clock {
        /// returns the current time.
        fn now(&self) -> DateTime<Local>;
        /// blocks the current thread for the given duration.
        fn sleep(&self, duration: Duration);
    }

    #[derive(Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Local> {
            Local::now()
        }

        fn sleep(&self, duration: Duration) {
            std::thread::sleep(duration);
        }
    }

    /// a mock clock.
    ///
    /// sleeping does not block, it advances the clock instead.
    #[cfg(test)]
    pub struct MockClock {
        now: RefCell<DateTime<Local>>,
        slept: RefCell<Vec<Duration>>,
    }

    #[cfg(test)]
    impl MockClock {
        pub fn starting_at(now: DateTime<Local>) -> Self {
            Self {
                now: RefCell::new(now),
                slept: RefCell::default(),
            }
        }

        /// returns each duration this clock was asked to sleep for, in order.
        pub fn slept(&self) -> Vec<Duration> {
            self.slept.borrow().clone()
        }
    }

    #[cfg(test)]
    impl Clock for MockClock {
        fn now(&self) -> DateTime<Local> {
            *self.now.borrow()
        }

        fn sleep(&self, duration: Duration) {
            let Self { now, slept } = self;

            let delta = chrono::TimeDelta::from_std(duration).expect("sleep should be in range");
            *now.borrow_mut() += delta;
            slept.borrow_mut().push(duration);
        }
    }
}

/// abstracts over providers of statistics.
mod stats {
    use super::*;

    /// a source of kernel statistics.
    pub trait StatsSource {
        /// returns a reader over the cpu statistics table, see `proc_stat(5)`.
        fn stat(&self) -> io::Result<impl Read>;
        /// returns a reader over the memory usage table, see `proc_meminfo(5)`.
        fn meminfo(&self) -> io::Result<impl Read>;
    }

    /// stats backed by the `/proc` filesystem.
    #[derive(Default)]
    pub struct ProcFs;

    /// a mock stat source.
    ///
    /// each read pops the next queued table. reading from an empty queue fails as if the
    /// file did not exist.
    #[cfg(test)]
    #[derive(Default)]
    pub struct MockSource {
        stats: RefCell<VecDeque<String>>,
        meminfos: RefCell<VecDeque<String>>,
    }

    // === impl ProcFs ===

    impl StatsSource for ProcFs {
        fn stat(&self) -> io::Result<impl Read> {
            File::open(Self::STAT).map(BufReader::new)
        }

        fn meminfo(&self) -> io::Result<impl Read> {
            File::open(Self::MEMINFO).map(BufReader::new)
        }
    }

    impl ProcFs {
        const STAT: &str = "/proc/stat";
        const MEMINFO: &str = "/proc/meminfo";
    }

    // === impl MockSource ===

    #[cfg(test)]
    impl MockSource {
        pub fn push_stat(&self, stat: impl Into<String>) {
            self.stats.borrow_mut().push_back(stat.into());
        }

        pub fn push_meminfo(&self, meminfo: impl Into<String>) {
            self.meminfos.borrow_mut().push_back(meminfo.into());
        }

        fn pop(queue: &RefCell<VecDeque<String>>) -> io::Result<Cursor<String>> {
            queue
                .borrow_mut()
                .pop_front()
                .map(Cursor::new)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "mock source is empty"))
        }
    }

    #[cfg(test)]
    impl StatsSource for MockSource {
        fn stat(&self) -> io::Result<impl Read> {
            Self::pop(&self.stats)
        }

        fn meminfo(&self) -> io::Result<impl Read> {
            Self::pop(&self.meminfos)
        }
    }
}
