use {super::*, crate::source::fixtures, std::fs};

fn series() -> Series {
    Series {
        cpu: vec![(0.0, 12.5), (2.0, 50.0), (4.0, 7.5)],
        memory: vec![(0.0, 50.0), (2.0, 50.0), (4.0, 50.0)],
        used: vec![(0.0, 2000.0), (2.0, 2100.0), (4.0, 2050.0)],
        free: vec![(0.0, 6000.0), (2.0, 5900.0), (4.0, 5950.0)],
    }
}

#[test]
fn file_name() {
    assert_eq!(
        PngChart::file_name(fixtures::new_year()),
        "metrics_2024-01-01_00-00-00.png"
    );
}

#[test]
fn renders_a_png() {
    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    let dir = tempfile::tempdir().unwrap();
    let path = PngChart::new(dir.path())
        .render(&series(), fixtures::new_year())
        .unwrap();

    assert_eq!(path, dir.path().join("metrics_2024-01-01_00-00-00.png"));
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
}

#[test]
fn bundled_font_loads() {
    load_font().unwrap();
    // registering again is a no-op.
    load_font().unwrap();
}

#[test]
fn renders_a_single_point() {
    let dir = tempfile::tempdir().unwrap();
    let series = Series {
        cpu: vec![(0.0, 0.0)],
        memory: vec![(0.0, 100.0)],
        used: vec![(0.0, 0.0)],
        free: vec![(0.0, 0.0)],
    };
    let path = PngChart::new(dir.path())
        .render(&series, fixtures::new_year())
        .unwrap();
    assert!(path.exists());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = PngChart::new(&missing)
        .render(&series(), fixtures::new_year())
        .unwrap_err();
    assert!(matches!(err, Error::Chart { .. }));
}

mod bounds_tests {
    use super::*;

    #[test]
    fn pads_the_range() {
        assert_eq!(bounds([0.0, 100.0].into_iter()), -5.0..105.0);
    }

    #[test]
    fn flat_line() {
        assert_eq!(bounds([50.0, 50.0].into_iter()), 49.0..51.0);
    }

    #[test]
    fn empty() {
        assert_eq!(bounds(std::iter::empty()), 0.0..1.0);
    }
}
