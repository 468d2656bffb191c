use {
    crate::{aggregate::Series, error::Error},
    chrono::{DateTime, Local},
    plotters::{coord::Shift, prelude::*, style::register_font},
    std::{
        ops::Range,
        path::{Path, PathBuf},
        sync::OnceLock,
    },
};

#[cfg(test)]
mod tests;

/// draws a chart of a run.
pub trait Renderer {
    /// renders the series, returning the path of the chart that was written.
    ///
    /// `at` is the time the chart was rendered.
    fn render(&self, series: &Series, at: DateTime<Local>) -> Result<PathBuf, Error>;
}

/// renders a grid of line charts to a png image.
pub struct PngChart {
    /// the directory charts are written to.
    dir: PathBuf,
    /// the size of the image, in pixels.
    size: (u32, u32),
}

/// one of the four plots in a chart.
struct Panel<'a> {
    title: &'a str,
    label: &'a str,
    color: RGBColor,
    points: &'a [(f64, f64)],
}

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

type DrawResult = Result<(), Box<dyn std::error::Error>>;

/// the typeface that chart text is set in.
const FONT: &str = "sans-serif";

/// DejaVu Sans, see `assets/DejaVuSans.LICENSE`.
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

// === impl PngChart ===

impl PngChart {
    const SIZE: (u32, u32) = (1400, 800);

    /// creates a renderer that writes charts into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            size: Self::SIZE,
        }
    }

    /// returns the file name of a chart rendered at the given time.
    pub fn file_name(at: DateTime<Local>) -> String {
        format!("metrics_{}.png", at.format("%Y-%m-%d_%H-%M-%S"))
    }

    fn draw(&self, path: &Path, panels: [Panel<'_>; 4]) -> DrawResult {
        load_font()?;

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        for (area, panel) in root.split_evenly((2, 2)).iter().zip(panels) {
            Self::plot(area, panel)?;
        }

        root.present()?;
        Ok(())
    }

    fn plot(area: &Area<'_>, panel: Panel<'_>) -> DrawResult {
        let Panel {
            title,
            label,
            color,
            points,
        } = panel;

        let elapsed = bounds(points.iter().map(|&(t, _)| t));
        let values = bounds(points.iter().map(|&(_, v)| v));

        let mut chart = ChartBuilder::on(area)
            .caption(title, (FONT, 20))
            .margin(16)
            .x_label_area_size(36)
            .y_label_area_size(64)
            .build_cartesian_2d(elapsed, values)?;

        chart
            .configure_mesh()
            .x_desc("Time (seconds)")
            .y_desc(label)
            .label_style((FONT, 12))
            .draw()?;

        let key = move |(x, y): (i32, i32)| PathElement::new(vec![(x, y), (x + 20, y)], color);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(label)
            .legend(key);

        chart
            .configure_series_labels()
            .label_font((FONT, 12))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}

impl Renderer for PngChart {
    fn render(&self, series: &Series, at: DateTime<Local>) -> Result<PathBuf, Error> {
        let Series {
            cpu,
            memory,
            used,
            free,
        } = series;

        let path = self.dir.join(Self::file_name(at));
        let panels = [
            Panel {
                title: "CPU Usage Over Time",
                label: "CPU Usage (%)",
                color: RED,
                points: cpu,
            },
            Panel {
                title: "Memory Usage Over Time",
                label: "Memory Usage (%)",
                color: BLUE,
                points: memory,
            },
            Panel {
                title: "Memory Used Over Time",
                label: "Memory Used (MB)",
                color: GREEN,
                points: used,
            },
            Panel {
                title: "Memory Free Over Time",
                label: "Memory Free (MB)",
                color: MAGENTA,
                points: free,
            },
        ];

        self.draw(&path, panels).map_err(|error| Error::Chart {
            path: path.clone(),
            message: error.to_string(),
        })?;

        Ok(path)
    }
}

/// registers the bundled typeface with the renderer, once per process.
fn load_font() -> DrawResult {
    static LOADED: OnceLock<bool> = OnceLock::new();

    let register = || register_font(FONT, FontStyle::Normal, FONT_DATA).is_ok();
    if !*LOADED.get_or_init(register) {
        return Err("the bundled font could not be loaded".into());
    }

    Ok(())
}

/// the range spanned by a set of values, widened so that a flat line sits mid-plot.
fn bounds(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if lo > hi {
        return 0.0..1.0;
    }

    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}
