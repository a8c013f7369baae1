//! Static Chart Renderer
//! Draws the report's bar and scatter charts as PNG images via plotters.

use anyhow::{Context, Result};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use std::path::PathBuf;

use crate::charts::palette::PALETTE;

const CANVAS: (u32, u32) = (1024, 640);
const MAX_LABEL_CHARS: usize = 42;
const MAX_LEGEND_ENTRIES: usize = 12;

/// Renders fixed-styling charts into an output directory.
pub struct ChartRenderer {
    out_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Horizontal bar chart, highest-ranked entry at the top.
    ///
    /// `colors` cycles over the bars in rank order; a single-element
    /// slice paints every bar the same color.
    pub fn horizontal_bar(
        &self,
        file_name: &str,
        title: &str,
        x_desc: &str,
        y_desc: &str,
        entries: &[(String, f64)],
        colors: &[RGBColor],
    ) -> Result<PathBuf> {
        let path = self.out_dir.join(file_name);
        let root = BitMapBackend::new(&path, CANVAS).into_drawing_area();
        root.fill(&WHITE)?;

        if entries.is_empty() {
            root.present()
                .with_context(|| format!("writing {}", path.display()))?;
            return Ok(path.clone());
        }

        let n = entries.len() as i32;
        let max_value = entries.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let x_max = if max_value > 0.0 { max_value * 1.05 } else { 1.0 };

        // Rank 0 occupies the topmost segment, so labels index bottom-up.
        let labels: Vec<String> = entries
            .iter()
            .rev()
            .map(|(label, _)| Self::shorten(label))
            .collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 26))
            .margin(12)
            .x_label_area_size(46)
            .y_label_area_size(280)
            .build_cartesian_2d(0.0..x_max, (0..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .y_label_formatter(&|seg| match seg {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                    labels.get(*i as usize).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .label_style(("sans-serif", 13))
            .draw()?;

        chart.draw_series(entries.iter().enumerate().map(|(rank, (_, value))| {
            let slot = n - 1 - rank as i32;
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(slot)),
                    (*value, SegmentValue::Exact(slot + 1)),
                ],
                colors[rank % colors.len()].filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))?;

        root.present()
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path.clone())
    }

    /// Scatter plot of (x, y) points, one color per group.
    ///
    /// The legend is drawn only while it stays readable; past
    /// `MAX_LEGEND_ENTRIES` groups the colors speak for themselves.
    pub fn scatter(
        &self,
        file_name: &str,
        title: &str,
        x_desc: &str,
        y_desc: &str,
        groups: &[(String, Vec<(f64, f64)>)],
    ) -> Result<PathBuf> {
        let path = self.out_dir.join(file_name);
        let root = BitMapBackend::new(&path, CANVAS).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_max, y_max) = Self::axis_bounds(groups);

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 26))
            .margin(12)
            .x_label_area_size(46)
            .y_label_area_size(56)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .label_style(("sans-serif", 13))
            .draw()?;

        let with_legend = groups.len() <= MAX_LEGEND_ENTRIES;

        for (idx, (group, points)) in groups.iter().enumerate() {
            let color = PALETTE[idx % PALETTE.len()];
            let series = chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )?;
            if with_legend {
                series
                    .label(Self::shorten(group))
                    .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
            }
        }

        if with_legend && !groups.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .background_style(&WHITE.mix(0.85))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path.clone())
    }

    fn axis_bounds(groups: &[(String, Vec<(f64, f64)>)]) -> (f64, f64) {
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (_, points) in groups {
            for &(x, y) in points {
                if x.is_finite() {
                    x_max = x_max.max(x);
                }
                if y.is_finite() {
                    y_max = y_max.max(y);
                }
            }
        }

        let x_max = if x_max.is_finite() && x_max > 0.0 {
            x_max * 1.05
        } else {
            1.0
        };
        let y_max = if y_max.is_finite() && y_max > 0.0 {
            y_max * 1.05
        } else {
            1.0
        };
        (x_max, y_max)
    }

    fn shorten(label: &str) -> String {
        if label.chars().count() <= MAX_LABEL_CHARS {
            label.to_string()
        } else {
            let mut short: String = label.chars().take(MAX_LABEL_CHARS - 3).collect();
            short.push_str("...");
            short
        }
    }
}
