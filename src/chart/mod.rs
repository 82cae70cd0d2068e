//! Chart geometry for fixed-size SVG drawing surfaces.
//!
//! Each builder maps a derived series to coordinates and never fails: empty
//! or all-zero inputs resolve to a defined fallback shape.

pub mod bar;
pub mod donut;
pub mod trend;

pub use bar::{build_bars, BarLayout, BarPoint};
pub use donut::{build_donut, DonutChart, DonutLayout, DonutSegment, IssueCounts};
pub use trend::{build_trend, TrendLayout, TrendLine, TrendPoint, TrendSample};

use serde::{Deserialize, Serialize};

/// Layout of every chart on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub bar: BarLayout,
    pub donut: DonutLayout,
    pub trend: TrendLayout,
}
