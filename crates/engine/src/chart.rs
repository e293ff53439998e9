use crate::error::{EngineError, Result};
use keyword_histogram_core::TotalCount;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use std::str::FromStr;

const FONT: &str = "sans-serif";
const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);

/// Tick-label rotation, in quarter turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelRotation {
    None,
    #[default]
    Deg90,
    Deg180,
    Deg270,
}

impl LabelRotation {
    /// Accepts any multiple of 90, negative values included.
    ///
    /// # Errors
    ///
    /// Returns a message for angles that are not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> std::result::Result<Self, String> {
        if degrees % 90 != 0 {
            return Err(format!(
                "rotation must be a multiple of 90 (plotters only rotates text by quarter turns), got {degrees}"
            ));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::None,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    const fn is_vertical(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}

impl FromStr for LabelRotation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let degrees: i32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid rotation: {s}"))?;
        Self::from_degrees(degrees)
    }
}

impl From<LabelRotation> for FontTransform {
    fn from(rotation: LabelRotation) -> Self {
        match rotation {
            LabelRotation::None => Self::None,
            LabelRotation::Deg90 => Self::Rotate90,
            LabelRotation::Deg180 => Self::Rotate180,
            LabelRotation::Deg270 => Self::Rotate270,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub caption: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub rotation: LabelRotation,
    pub size: (u32, u32),
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            caption: None,
            x_label: "Keywords".into(),
            y_label: "Occurrences".into(),
            rotation: LabelRotation::default(),
            size: (1024, 768),
        }
    }
}

/// Bar chart of keyword totals: one bar per label, its count printed on top.
///
/// Every render draws on a new backend, so one `BarChart` can be reused for
/// any number of charts.
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    options: ChartOptions,
}

impl BarChart {
    #[must_use]
    pub const fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Renders the chart as an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Chart`] if drawing or writing fails.
    pub fn render_svg(&self, totals: &TotalCount, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, self.options.size).into_drawing_area();
        self.draw(&root, totals)
    }

    /// Renders the chart into an SVG document held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Chart`] if drawing fails.
    pub fn render_svg_string(&self, totals: &TotalCount) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.options.size).into_drawing_area();
            self.draw(&root, totals)?;
        }
        Ok(svg)
    }

    fn x_label_area(&self, totals: &TotalCount) -> u32 {
        if !self.options.rotation.is_vertical() {
            return 40;
        }
        let longest = totals.labels().map(|l| l.chars().count()).max().unwrap_or(0);
        u32::try_from(longest * 8 + 20).unwrap_or(u32::MAX).clamp(40, 300)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, totals: &TotalCount) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;

        let labels: Vec<&str> = totals.labels().collect();
        let bars = labels.len().max(1);
        let peak = totals.max();
        let top = peak + peak / 10 + 1;

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(20)
            .x_label_area_size(self.x_label_area(totals))
            .y_label_area_size(60);
        if let Some(caption) = &self.options.caption {
            builder.caption(caption, (FONT, 24));
        }
        let mut chart = builder
            .build_cartesian_2d((0..bars).into_segmented(), 0u64..top)
            .map_err(chart_error)?;

        let label_of = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|l| (*l).to_owned()).unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(self.options.x_label.as_str())
            .y_desc(self.options.y_label.as_str())
            .x_labels(bars)
            .x_label_formatter(&label_of)
            .x_label_style((FONT, 14).into_font().transform(self.options.rotation.into()))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(totals.iter().enumerate().map(|(i, (_, count))| {
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), count)],
                    BAR_COLOR.filled(),
                );
                bar.set_margin(0, 0, 6, 6);
                bar
            }))
            .map_err(chart_error)?;

        let value_style = TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(totals.iter().enumerate().map(|(i, (_, count))| {
                Text::new(count.to_string(), (SegmentValue::CenterOf(i), count), value_style.clone())
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)
    }
}

fn chart_error<E: std::fmt::Display>(e: E) -> EngineError {
    EngineError::Chart(e.to_string())
}
