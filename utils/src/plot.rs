//! Line charts of some measure against k-mer size
//!
//! Both plotting tools describe their output as a [`KmerChart`] (one line
//! series per sketch size plus an optional horizontal reference line) which is
//! then rendered to a bitmap with [`plotters`].

use std::{fmt, ops::Range, path::Path};

use plotters::{
    coord::{
        ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter},
        types::RangedCoordf64,
    },
    prelude::*,
};

/// k values that get a tick (and grid line) on the x axis of every chart
pub const K_TICKS: [i64; 5] = [21, 31, 41, 51, 61];

/// Series colours, cycled in series order (matplotlib's tab10)
pub const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub const REFERENCE_COLOR: RGBColor = RGBColor(128, 0, 128);

const FONT: &str = "sans-serif";

pub fn series_color(ix: usize) -> RGBColor {
    SERIES_COLORS[ix % SERIES_COLORS.len()]
}

/// Range covering all finite values with a 5% margin either side.
/// Returns None if there are no finite values.
pub fn padded_range<I: IntoIterator<Item = f64>>(values: I) -> Option<Range<f64>> {
    let (lo, hi) = values
        .into_iter()
        .filter(|x| x.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })?;
    let margin = if hi > lo {
        (hi - lo) * 0.05
    } else if lo != 0.0 {
        lo.abs() * 0.05
    } else {
        0.5
    };
    Some((lo - margin)..(hi + margin))
}

/// x range that covers the data and all of the fixed k ticks
pub fn k_axis_range<I: IntoIterator<Item = f64>>(ks: I) -> Range<f64> {
    let ticks = K_TICKS.iter().map(|&k| k as f64);
    // Never None as the tick list is not empty
    padded_range(ticks.chain(ks)).unwrap_or(0.0..1.0)
}

/// Continuous k axis with grid lines and labels at [`K_TICKS`] only
#[derive(Clone)]
pub struct KAxis {
    inner: RangedCoordf64,
}

impl KAxis {
    pub fn new(range: Range<f64>) -> Self {
        Self {
            inner: range.into(),
        }
    }
}

impl Ranged for KAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        let r = self.inner.range();
        K_TICKS
            .iter()
            .map(|&k| k as f64)
            .filter(|k| r.contains(k))
            .collect()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for KAxis {
    fn format(value: &f64) -> String {
        format!("{:.0}", value)
    }
}

/// Map a drawing error onto an anyhow error noting what we were doing
pub fn drawing_error<E: fmt::Display>(step: &'static str) -> impl FnOnce(E) -> anyhow::Error {
    move |e| anyhow!("Error {}: {}", step, e)
}

/// One line of a chart, points are drawn in the order given
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Horizontal line across the whole chart
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KmerChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
    pub series: Vec<Series>,
    pub reference: Option<ReferenceLine>,
}

impl KmerChart {
    pub fn new(
        title: impl Into<String>,
        x_desc: impl Into<String>,
        y_desc: impl Into<String>,
        size: (u32, u32),
    ) -> Self {
        Self {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            size,
            series: Vec::new(),
            reference: None,
        }
    }

    pub fn add_series<S: Into<String>>(&mut self, label: S, points: Vec<(f64, f64)>) {
        self.series.push(Series {
            label: label.into(),
            points,
        })
    }

    pub fn set_reference<S: Into<String>>(&mut self, label: S, y: f64) {
        self.reference = Some(ReferenceLine {
            label: label.into(),
            y,
        })
    }

    pub fn x_range(&self) -> Range<f64> {
        k_axis_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
    }

    pub fn y_range(&self) -> Range<f64> {
        let ys = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1));
        padded_range(ys.chain(self.reference.as_ref().map(|r| r.y))).unwrap_or(0.0..1.0)
    }

    /// Render chart to an image file.  The image format is taken from the
    /// file extension.  The drawing surface is released before returning.
    pub fn render(&self, path: &Path) -> anyhow::Result<()> {
        let x_range = self.x_range();
        let y_range = self.y_range();
        trace!(
            "Rendering {} with x range {:?} and y range {:?}",
            path.display(),
            x_range,
            y_range
        );

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(drawing_error("filling drawing area"))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title.as_str(), (FONT, 24))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(65)
            .build_cartesian_2d(KAxis::new(x_range.clone()), y_range)
            .map_err(drawing_error("configuring chart"))?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .axis_desc_style((FONT, 18))
            .label_style((FONT, 14))
            .draw()
            .map_err(drawing_error("drawing chart mesh"))?;

        for (ix, s) in self.series.iter().enumerate() {
            let style = series_color(ix).stroke_width(2);
            chart
                .draw_series(
                    LineSeries::new(
                        s.points.iter().copied().filter(|p| p.1.is_finite()),
                        style,
                    )
                    .point_size(4),
                )
                .map_err(drawing_error("drawing series"))?
                .label(s.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        if let Some(r) = self.reference.as_ref() {
            let style = REFERENCE_COLOR.stroke_width(2);
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_range.start, r.y), (x_range.end, r.y)],
                    10,
                    6,
                    style,
                ))
                .map_err(drawing_error("drawing reference line"))?
                .label(r.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        if !self.series.is_empty() || self.reference.is_some() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK.mix(0.3))
                .label_font((FONT, 14))
                .position(SeriesLabelPosition::UpperRight)
                .draw()
                .map_err(drawing_error("drawing legend"))?;
        }

        root.present()
            .map_err(drawing_error("writing image"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::coord::ranged1d::BoldPoints;
    use tempfile::TempDir;

    #[test]
    fn padded_range_adds_margin() {
        let r = padded_range([0.0, 10.0]).unwrap();
        assert!((r.start + 0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn padded_range_single_value() {
        let r = padded_range([2.0]).unwrap();
        assert!(r.start < 2.0 && r.end > 2.0);
        let r = padded_range([0.0]).unwrap();
        assert_eq!(r, -0.5..0.5);
    }

    #[test]
    fn padded_range_ignores_non_finite() {
        assert_eq!(padded_range([f64::NAN]), None);
        assert_eq!(padded_range(Vec::new()), None);
        assert_eq!(
            padded_range([1.0, f64::INFINITY, 3.0]),
            padded_range([1.0, 3.0])
        );
    }

    #[test]
    fn k_range_always_covers_ticks() {
        let r = k_axis_range(Vec::new());
        assert!(r.start < 21.0 && r.end > 61.0);
        let r = k_axis_range([15.0, 31.0]);
        assert!(r.start < 15.0 && r.end > 61.0);
        let r = k_axis_range([99.0]);
        assert!(r.start < 21.0 && r.end > 99.0);
    }

    #[test]
    fn y_range_includes_reference() {
        let mut chart = KmerChart::new("t", "x", "y", (100, 100));
        chart.add_series("a", vec![(21.0, 0.1), (31.0, 0.2)]);
        chart.set_reference("ref", 0.95);
        let r = chart.y_range();
        assert!(r.start < 0.1 && r.end > 0.95);
    }

    #[test]
    fn colors_cycle() {
        assert_eq!(
            series_color(0).rgb(),
            series_color(SERIES_COLORS.len()).rgb()
        );
        assert_ne!(series_color(0).rgb(), series_color(1).rgb());
    }

    #[test]
    fn k_axis_keys_are_fixed_ticks() {
        let expected: Vec<f64> = K_TICKS.iter().map(|&k| k as f64).collect();
        let axis = KAxis::new(k_axis_range([15.0, 99.0]));
        assert_eq!(axis.key_points(BoldPoints(10)), expected);
        let axis = KAxis::new(k_axis_range([31.0]));
        assert_eq!(axis.key_points(BoldPoints(2)), expected);
        assert_eq!(<KAxis as ValueFormatter<f64>>::format(&31.0), "31");
    }

    #[test]
    fn chart_rendered_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chart.png");
        let mut chart = KmerChart::new("Title", "k", "value", (300, 200));
        chart.add_series("N = 1", vec![(21.0, 0.5), (31.0, 0.4), (41.0, 0.2)]);
        chart.add_series("N = 2", vec![(21.0, f64::NAN), (31.0, 0.3)]);
        chart.set_reference("ref", 0.9);
        chart.render(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
