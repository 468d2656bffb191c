use {
    super::*,
    crate::source::{MockSource, fixtures},
};

const MIB: u64 = 1024 * 1024;

fn read(meminfo: &str) -> Result<VirtualMemory, MemInfoError> {
    let source = MockSource::default();
    source.push_meminfo(meminfo);
    VirtualMemory::read(&source)
}

#[test]
fn typical_host() {
    let memory = read(&fixtures::meminfo(12000, 4000, 6000, 1000, 5000)).unwrap();
    assert_eq!(
        memory,
        VirtualMemory {
            total: 12000 * MIB,
            available: 6000 * MIB,
            used: 2000 * MIB,
            percent: 50.0,
        }
    );
}

#[test]
fn reclaimable_slab_counts_as_cache() {
    let memory = read(
        "MemTotal: 1000 kB\n\
         MemFree: 100 kB\n\
         MemAvailable: 600 kB\n\
         Buffers: 100 kB\n\
         Cached: 200 kB\n\
         SReclaimable: 100 kB\n",
    )
    .unwrap();
    assert_eq!(memory.used, 500 * 1024);
    assert_eq!(memory.percent, 40.0);
}

#[test]
fn estimates_available_memory_on_old_kernels() {
    let memory = read(
        "MemTotal: 1000 kB\n\
         MemFree: 100 kB\n\
         Buffers: 100 kB\n\
         Cached: 300 kB\n",
    )
    .unwrap();
    assert_eq!(memory.available, 500 * 1024);
    assert_eq!(memory.percent, 50.0);
}

#[test]
fn oversized_cache_falls_back_to_free_memory() {
    let memory = read(
        "MemTotal: 1000 kB\n\
         MemFree: 300 kB\n\
         MemAvailable: 900 kB\n\
         Buffers: 100 kB\n\
         Cached: 700 kB\n",
    )
    .unwrap();
    assert_eq!(memory.used, 700 * 1024);
}

#[test]
fn rounds_to_one_decimal() {
    let memory = read("MemTotal: 3 kB\nMemFree: 1 kB\nMemAvailable: 2 kB\n").unwrap();
    assert_eq!(memory.percent, 33.3);
}

#[test]
fn percentage_ties_round_to_even() {
    let memory = read("MemTotal: 400 kB\nMemFree: 1 kB\nMemAvailable: 399 kB\n").unwrap();
    assert_eq!(memory.percent, 0.2);
}

#[test]
fn values_without_a_unit() {
    let mut fields = Fields::default();
    fields.parse_line("MemTotal:       42").unwrap();
    assert_eq!(fields.total, Some(42));
}

#[test]
fn ignores_other_fields() {
    let mut fields = Fields::default();
    fields.parse_line("HugePages_Total:       0").unwrap();
    fields.parse_line("Hugepagesize:       2048 kB").unwrap();
    assert!(fields.total.is_none());
}

#[test]
fn missing_total() {
    let err = read("MemFree: 1 kB\n").unwrap_err();
    assert!(matches!(err, MemInfoError::Missing("MemTotal")));
}

#[test]
fn missing_free() {
    let err = read("MemTotal: 1 kB\n").unwrap_err();
    assert!(matches!(err, MemInfoError::Missing("MemFree")));
}

#[test]
fn zero_total() {
    let err = read("MemTotal: 0 kB\nMemFree: 0 kB\n").unwrap_err();
    assert!(matches!(err, MemInfoError::ZeroTotal));
}

#[test]
fn invalid_value() {
    let err = read("MemTotal: lots kB\n").unwrap_err();
    match err {
        MemInfoError::Value { key, .. } if key == "MemTotal" => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_line() {
    let err = read("MemTotal 1 kB\n").unwrap_err();
    assert!(matches!(err, MemInfoError::Malformed { .. }));
}

#[test]
fn unavailable() {
    let source = MockSource::default();
    let err = VirtualMemory::read(&source).unwrap_err();
    assert!(matches!(err, MemInfoError::Io(_)));
}
