use serde::{Deserialize, Serialize};

use crate::core::CoverageTrendPointDto;

/// Drawing box of the percentage trend chart.
///
/// The box is `width` x `height`. X runs from `left` to `width - left`; Y
/// runs from `bottom` (0%) up to `top` (100%), both inside `0..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendLayout {
    pub width: f64,
    pub left: f64,
    pub height: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for TrendLayout {
    fn default() -> Self {
        Self {
            width: 600.0,
            left: 50.0,
            height: 250.0,
            top: 30.0,
            bottom: 220.0,
        }
    }
}

impl TrendLayout {
    /// SVG `viewBox` of the whole drawing box.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.left
    }

    fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.plot_width() / 2.0;
        }
        self.left + (index as f64 / (count - 1) as f64) * self.plot_width()
    }

    fn y_for(&self, percentage: f64) -> f64 {
        let clamped = percentage.clamp(0.0, 100.0);
        self.bottom - (clamped / 100.0) * (self.bottom - self.top)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSample {
    pub label: String,
    pub value: f64,
}

impl From<&CoverageTrendPointDto> for TrendSample {
    fn from(dto: &CoverageTrendPointDto) -> Self {
        Self {
            label: dto.date.clone(),
            value: dto.coverage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendLine {
    pub points: Vec<TrendPoint>,
    /// SVG `points` attribute, `"x1,y1 x2,y2 ..."`. Empty for no samples.
    pub polyline: String,
    /// `"0 0 width height"`, sizing the canvas the polyline is drawn on.
    pub view_box: String,
}

/// Maps ordered percentage samples into the drawing box.
///
/// A single sample sits at the horizontal midpoint. Values outside
/// `0..=100` are pinned to the box edges.
pub fn build_trend(samples: &[TrendSample], layout: &TrendLayout) -> TrendLine {
    let points: Vec<TrendPoint> = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| TrendPoint {
            label: sample.label.clone(),
            value: sample.value,
            x: layout.x_for(index, samples.len()),
            y: layout.y_for(sample.value),
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    TrendLine {
        points,
        polyline,
        view_box: layout.view_box(),
    }
}
