use {super::*, crate::round::round};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CpuTime {
    /// time spent in user mode.
    user: UserHz,
    /// time spent in user mode with low priority (nice).
    nice: UserHz,
    /// time spent in system mode.
    system: UserHz,
    /// time spent in the idle task.
    ///
    /// this value should be USER_HZ times the second entry in the /proc/uptime pseudo-file.
    idle: UserHz,
    /// time waiting for i/o to complete.
    ///
    /// this value is not reliable, for the following reasons:
    ///   *  the cpu will not wait for i/o to complete; iowait is the time that a task is waiting
    ///      for i/o to complete. when a cpu goes into idle state for outstanding task i/o,
    ///      another task will be scheduled on this cpu.
    ///   *  on a multi-core cpu, the task waiting for i/o to complete is not running on any cpu,
    ///      so the iowait of each cpu is difficult to calculate.
    ///   *  the value in this field may decrease in certain conditions.
    iowait: UserHz,
    /// time servicing interrupts.
    irq: UserHz,
    /// time servicing softirqs.
    softirq: UserHz,
    /// stolen time, which is the time spent in other operating systems when running in a
    /// virtualized environment.
    steal: UserHz,
    /// time spent running a virtual cpu for guest operating systems under the control of the linux
    /// kernel.
    guest: UserHz,
    /// time spent running a niced guest (virtual cpu for guest operating systems under the
    /// control of the linux kernel).
    guest_nice: UserHz,
}

/// the cpu time spent between two [`CpuTime`] readings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Measurement(CpuTime);

// === impl Measurement ===

impl Measurement {
    /// measures the time spent between an earlier reading `a`, and a later reading `b`.
    ///
    /// counters that went backwards, as iowait may, are measured as zero.
    pub fn new(a: CpuTime, b: CpuTime) -> Self {
        let a: [UserHz; CpuTime::FIELDS] = a.into();
        let b: [UserHz; CpuTime::FIELDS] = b.into();

        let delta: [UserHz; CpuTime::FIELDS] = std::array::from_fn(|i| b[i] - a[i]);

        Self(CpuTime::from(delta))
    }

    /// returns the percentage of busy cpu time, to one decimal place.
    ///
    /// returns zero if no time elapsed between the two readings.
    pub fn percentage(&self) -> f64 {
        let busy = self.busy();
        let total = self.total();

        if total == UserHz::ZERO {
            return 0.0;
        }

        // calculate a percentage.
        let percent = (busy / total) * 100.0;

        // round to the nearest tenth of a percentage point.
        let rounded = round(percent, 1);
        rounded.clamp(0.0, 100.0)
    }

    /// time the cpu spent doing anything other than idling or waiting for i/o.
    pub fn busy(&self) -> UserHz {
        let Self(CpuTime { idle, iowait, .. }) = *self;

        self.total() - idle - iowait
    }

    /// time the cpu spent in any state.
    pub fn total(&self) -> UserHz {
        let Self(CpuTime {
            user,
            nice,
            system,
            idle,
            iowait,
            irq,
            softirq,
            steal,
            // guest time is already counted in `user` and `nice`.
            guest: _,
            guest_nice: _,
        }) = *self;

        user + nice + system + idle + iowait + irq + softirq + steal
    }
}

// === impl CpuTime ===

impl CpuTime {
    /// the number of fields in a `/proc/stat` cpu entry.
    pub const FIELDS: usize = 10;
}

impl TryFrom<Vec<UserHz>> for CpuTime {
    type Error = EntryParseError;
    fn try_from(times: Vec<UserHz>) -> Result<Self, Self::Error> {
        let found = times.len();
        <_ as TryInto<[_; Self::FIELDS]>>::try_into(times)
            .map(Self::from)
            .map_err(|_| EntryParseError::CpuTime { found })
    }
}

impl From<[UserHz; CpuTime::FIELDS]> for CpuTime {
    fn from(
        [
            user,
            nice,
            system,
            idle,
            iowait,
            irq,
            softirq,
            steal,
            guest,
            guest_nice,
        ]: [UserHz; CpuTime::FIELDS],
    ) -> Self {
        Self {
            user,
            nice,
            system,
            idle,
            iowait,
            irq,
            softirq,
            steal,
            guest,
            guest_nice,
        }
    }
}

impl From<CpuTime> for [UserHz; CpuTime::FIELDS] {
    fn from(
        CpuTime {
            user,
            nice,
            system,
            idle,
            iowait,
            irq,
            softirq,
            steal,
            guest,
            guest_nice,
        }: CpuTime,
    ) -> Self {
        [
            user, nice, system, idle, iowait, irq, softirq, steal, guest, guest_nice,
        ]
    }
}
