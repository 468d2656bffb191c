use {
    super::*,
    crate::{aggregate::Aggregator, source::fixtures},
};

const MB: u64 = 1024 * 1024;

#[test]
fn decimals() {
    assert_eq!(Decimal(12.5).to_string(), "12.5");
    assert_eq!(Decimal(50.0).to_string(), "50.0");
    assert_eq!(Decimal(0.0).to_string(), "0.0");
    assert_eq!(Decimal(100.0).to_string(), "100.0");
    assert_eq!(Decimal(21.11).to_string(), "21.11");
    assert_eq!(Decimal(2001.33).to_string(), "2001.33");
}

#[test]
fn sample() {
    let sample = Sample {
        time: fixtures::new_year(),
        cpu: 12.5,
        memory: 67.8,
        total: 16000 * MB,
        used: 10000 * MB,
        available: 5000 * MB,
    };
    assert_eq!(
        sample_line(&sample),
        "2024-01-01 00:00:00 - CPU Usage: 12.5% - Memory Usage: 67.8% \
         (Total: 16000MB, Used: 10000MB, Free: 5000MB)"
    );
}

#[test]
fn whole_percentages_keep_their_decimal() {
    let sample = Sample {
        time: fixtures::new_year(),
        cpu: 3.0,
        memory: 40.0,
        total: 16000 * MB + 1,
        used: 10000 * MB + MB / 2,
        available: 5000 * MB - 1,
    };
    assert_eq!(
        sample_line(&sample),
        "2024-01-01 00:00:00 - CPU Usage: 3.0% - Memory Usage: 40.0% \
         (Total: 16000MB, Used: 10000MB, Free: 4999MB)"
    );
}

#[test]
fn summary() {
    let mut aggregator = Aggregator::new();
    for (cpu, used, free) in [(0.0, 2000, 6000), (50.0, 2001, 5999), (100.0, 2003, 5998)] {
        aggregator.record(Sample {
            time: fixtures::new_year(),
            cpu,
            memory: 50.0,
            total: 8000 * MB,
            used: used * MB,
            available: free * MB,
        });
    }

    assert_eq!(
        summary_lines(&aggregator.summarize()),
        vec![
            "",
            "Aggregate Statistics:",
            "Min CPU Usage: 0.0%\tMax CPU Usage: 100.0%\tAvg CPU Usage: 50.0%",
            "Min Memory Usage: 50.0%\tMax Memory Usage: 50.0%\tAvg Memory Usage: 50.0%",
            "Min Memory Used: 2000MB\tMax Memory Used: 2003MB\tAvg Memory Used: 2001.33MB",
            "Min Memory Free: 5998MB\tMax Memory Free: 6000MB\tAvg Memory Free: 5999.0MB",
        ]
    );
}

#[test]
fn empty_summary() {
    assert_eq!(
        summary_lines(&Aggregator::new().summarize()),
        vec![
            "",
            "Aggregate Statistics:",
            "Min CPU Usage: None%\tMax CPU Usage: None%\tAvg CPU Usage: None%",
            "Min Memory Usage: None%\tMax Memory Usage: None%\tAvg Memory Usage: None%",
            "Min Memory Used: NoneMB\tMax Memory Used: NoneMB\tAvg Memory Used: NoneMB",
            "Min Memory Free: NoneMB\tMax Memory Free: NoneMB\tAvg Memory Free: NoneMB",
        ]
    );
}
