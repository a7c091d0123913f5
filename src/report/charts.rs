// * Chart Renderer
// * (a) horizontal bar chart of the top N repositories by stars
// * (b) pie chart of language frequency with rare languages folded into "Other"

use crate::config::constants::{BAR_CHART_SIZE, OTHER_LABEL, PIE_CHART_SIZE};
use crate::refinery::Dataset;
use crate::report::{ensure_parent, ReportError, ReportSink};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{info, warn};

const FONT_FAMILY: &str = "sans-serif";

// * Well-known TrueType locations, probed in order
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// * Registered at most once per process; false means charts are drawn without text
static FONT_AVAILABLE: LazyLock<bool> = LazyLock::new(register_system_font);

fn register_system_font() -> bool {
    for candidate in FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(candidate) else {
            continue;
        };
        // * The font registry keeps a 'static reference for the process lifetime
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_ok() {
            info!(font = candidate, "Chart font registered");
            return true;
        }
    }
    warn!("No TrueType font found; charts will be rendered without text");
    false
}

fn chart_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

// * Anchor points of the viridis colormap, low to high
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Colour `index` of `count` evenly spaced samples along viridis
fn viridis(index: usize, count: usize) -> RGBColor {
    if count <= 1 {
        let (r, g, b) = VIRIDIS[0];
        return RGBColor(r, g, b);
    }
    let t = index as f64 / (count - 1) as f64 * (VIRIDIS.len() - 1) as f64;
    let lo = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = t - lo as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[lo + 1]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

// * 20-colour categorical palette (tab20)
const TAB20: [RGBColor; 20] = [
    RGBColor(31, 119, 180),
    RGBColor(174, 199, 232),
    RGBColor(255, 127, 14),
    RGBColor(255, 187, 120),
    RGBColor(44, 160, 44),
    RGBColor(152, 223, 138),
    RGBColor(214, 39, 40),
    RGBColor(255, 152, 150),
    RGBColor(148, 103, 189),
    RGBColor(197, 176, 213),
    RGBColor(140, 86, 75),
    RGBColor(196, 156, 148),
    RGBColor(227, 119, 194),
    RGBColor(247, 182, 210),
    RGBColor(127, 127, 127),
    RGBColor(199, 199, 199),
    RGBColor(188, 189, 34),
    RGBColor(219, 219, 141),
    RGBColor(23, 190, 207),
    RGBColor(158, 218, 229),
];

/// Language frequencies for the pie chart.
///
/// Sorted by count, descending, ties in first-seen order. Languages seen fewer
/// than `threshold` times are summed into a trailing `"Other"` entry, which is
/// present only when that sum is non-zero.
pub fn language_distribution(dataset: &Dataset, threshold: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in dataset {
        match index.get(record.category.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.category.as_str(), counts.len());
                counts.push((record.category.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let other: usize = counts
        .iter()
        .filter(|(_, count)| *count < threshold)
        .map(|(_, count)| count)
        .sum();
    counts.retain(|(_, count)| *count >= threshold);

    if other > 0 {
        counts.push((OTHER_LABEL.to_string(), other));
    }
    counts
}

// * Value axis end: 5% headroom past the longest bar. Computed in f64 so
// * counters near u64::MAX cannot overflow.
fn axis_extent(max_stars: u64) -> f64 {
    let max = max_stars.max(1) as f64;
    max + max / 20.0 + 1.0
}

/// Horizontal bar chart of the top N records by stars
pub struct StarsBarChart {
    path: PathBuf,
    top_n: usize,
}

impl StarsBarChart {
    pub fn new(path: impl Into<PathBuf>, top_n: usize) -> Self {
        Self {
            path: path.into(),
            top_n,
        }
    }

    pub fn title(&self) -> String {
        format!("Top {} GitHub Trending Repositories by Stars", self.top_n)
    }

    fn render(&self, dataset: &Dataset) -> Result<(), ReportError> {
        let top = dataset.head(self.top_n);
        let rows = top.len().max(1);
        let max_stars = top.iter().map(|r| r.stars).max().unwrap_or(0);
        let x_max = axis_extent(max_stars);
        let with_text = *FONT_AVAILABLE;

        let root = BitMapBackend::new(&self.path, BAR_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(60);
        if with_text {
            builder
                .caption(self.title(), (FONT_FAMILY, 72))
                .x_label_area_size(140)
                .y_label_area_size(760);
        }
        let mut chart = builder
            .build_cartesian_2d(0f64..x_max, (0..rows).into_segmented())
            .map_err(chart_error)?;

        if with_text {
            // * Row 0 is the bottom of the plot; rank 0 sits at the top
            let label = |v: &SegmentValue<usize>| match v {
                SegmentValue::CenterOf(row) | SegmentValue::Exact(row) if *row < top.len() => {
                    top[top.len() - 1 - row].name.clone()
                }
                _ => String::new(),
            };
            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(rows)
                .y_label_formatter(&label)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .x_desc("Stars Count")
                .y_desc("Repository")
                .label_style((FONT_FAMILY, 32))
                .axis_desc_style((FONT_FAMILY, 40))
                .draw()
                .map_err(chart_error)?;
        }

        chart
            .draw_series(top.iter().enumerate().map(|(rank, record)| {
                let row = top.len() - 1 - rank;
                let mut bar = Rectangle::new(
                    [
                        (0.0, SegmentValue::Exact(row)),
                        (record.stars as f64, SegmentValue::Exact(row + 1)),
                    ],
                    viridis(rank, top.len()).filled(),
                );
                bar.set_margin(10, 10, 0, 0);
                bar
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

impl ReportSink for StarsBarChart {
    fn name(&self) -> &str {
        "bar_chart"
    }

    fn emit(&self, dataset: &Dataset) -> Result<PathBuf, ReportError> {
        ensure_parent(&self.path)?;
        self.render(dataset)?;
        info!(
            path = %self.path.display(),
            bars = dataset.head(self.top_n).len(),
            "Bar chart rendered"
        );
        Ok(self.path.clone())
    }
}

/// Pie chart of language frequency
pub struct LanguagePieChart {
    path: PathBuf,
    threshold: usize,
}

impl LanguagePieChart {
    // * Slice offset from the centre, as a fraction of the radius
    const EXPLODE: f64 = 0.05;
    const SHADOW_OFFSET: i32 = 12;

    pub fn new(path: impl Into<PathBuf>, threshold: usize) -> Self {
        Self {
            path: path.into(),
            threshold,
        }
    }

    pub fn title(&self) -> &'static str {
        "Distribution of Programming Languages in Trending Repositories"
    }

    fn render(&self, dataset: &Dataset) -> Result<(), ReportError> {
        let slices = language_distribution(dataset, self.threshold);
        let total: usize = slices.iter().map(|(_, count)| count).sum();
        let with_text = *FONT_AVAILABLE;

        let root = BitMapBackend::new(&self.path, PIE_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        let area = if with_text {
            root.titled(self.title(), (FONT_FAMILY, 72)).map_err(chart_error)?
        } else {
            root.clone()
        };

        let (width, height) = area.dim_in_pixel();
        let center = (width as f64 / 2.0, height as f64 / 2.0);
        let radius = width.min(height) as f64 * 0.36;

        // * Matplotlib convention: first slice starts at 12 o'clock, counter-clockwise
        let mut start = PI / 2.0;
        let mut wedges = Vec::with_capacity(slices.len());
        for (i, (label, count)) in slices.iter().enumerate() {
            if total == 0 {
                break;
            }
            let share = *count as f64 / total as f64;
            let sweep = share * 2.0 * PI;
            let mid = start + sweep / 2.0;
            let offset = (
                center.0 + Self::EXPLODE * radius * mid.cos(),
                center.1 - Self::EXPLODE * radius * mid.sin(),
            );
            wedges.push(Wedge {
                label: label.as_str(),
                share,
                start,
                sweep,
                mid,
                origin: offset,
                color: TAB20[i % TAB20.len()],
            });
            start += sweep;
        }

        for wedge in &wedges {
            let shadow: Vec<(i32, i32)> = wedge
                .outline(radius)
                .into_iter()
                .map(|(x, y)| (x + Self::SHADOW_OFFSET, y + Self::SHADOW_OFFSET))
                .collect();
            area.draw(&Polygon::new(shadow, RGBColor(200, 200, 200).filled()))
                .map_err(chart_error)?;
        }
        for wedge in &wedges {
            area.draw(&Polygon::new(wedge.outline(radius), wedge.color.filled()))
                .map_err(chart_error)?;
        }

        if with_text {
            let centered = Pos::new(HPos::Center, VPos::Center);
            let label_style = TextStyle::from((FONT_FAMILY, 44).into_font()).pos(centered);
            let pct_style = TextStyle::from((FONT_FAMILY, 38).into_font()).pos(centered);
            for wedge in &wedges {
                area.draw(&Text::new(
                    wedge.label.to_string(),
                    wedge.point_at(radius * 1.1),
                    label_style.clone(),
                ))
                .map_err(chart_error)?;
                area.draw(&Text::new(
                    format!("{:.1}%", wedge.share * 100.0),
                    wedge.point_at(radius * 0.6),
                    pct_style.clone(),
                ))
                .map_err(chart_error)?;
            }
        }

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

impl ReportSink for LanguagePieChart {
    fn name(&self) -> &str {
        "pie_chart"
    }

    fn emit(&self, dataset: &Dataset) -> Result<PathBuf, ReportError> {
        ensure_parent(&self.path)?;
        self.render(dataset)?;
        info!(path = %self.path.display(), "Pie chart rendered");
        Ok(self.path.clone())
    }
}

// * One pie slice in pixel space; angles in radians, y axis pointing down
struct Wedge<'a> {
    label: &'a str,
    share: f64,
    start: f64,
    sweep: f64,
    mid: f64,
    origin: (f64, f64),
    color: RGBColor,
}

impl Wedge<'_> {
    fn outline(&self, radius: f64) -> Vec<(i32, i32)> {
        let steps = ((self.sweep.to_degrees()).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(steps + 2);
        points.push((self.origin.0.round() as i32, self.origin.1.round() as i32));
        for step in 0..=steps {
            let angle = self.start + self.sweep * step as f64 / steps as f64;
            points.push(self.polar(angle, radius));
        }
        points
    }

    fn point_at(&self, distance: f64) -> (i32, i32) {
        self.polar(self.mid, distance)
    }

    fn polar(&self, angle: f64, distance: f64) -> (i32, i32) {
        (
            (self.origin.0 + distance * angle.cos()).round() as i32,
            (self.origin.1 - distance * angle.sin()).round() as i32,
        )
    }
}
