//! Configuration validation.
//!
//! Every check runs and all failures are reported together, so a user fixing
//! a config file sees every problem in one pass.

use crate::chart::ChartLayout;
use crate::core::{Error, Result};

use super::display::DisplayConfig;
use super::ScanlensConfig;

pub fn validate_config(config: &ScanlensConfig) -> Result<()> {
    let mut errors = Vec::new();
    if let Some(display) = &config.display {
        errors.extend(display_errors(display));
    }
    if let Some(chart) = &config.chart {
        errors.extend(chart_errors(chart));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(errors.join("; ")))
    }
}

fn display_errors(display: &DisplayConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if display.page_size == 0 {
        errors.push("display.page_size must be at least 1".to_string());
    }
    if display.top_modules == 0 {
        errors.push("display.top_modules must be at least 1".to_string());
    }
    errors
}

fn chart_errors(chart: &ChartLayout) -> Vec<String> {
    let mut errors = Vec::new();
    let mut positive = |field: &str, value: f64| {
        if !(value.is_finite() && value > 0.0) {
            errors.push(format!("{field} must be a positive number (got {value})"));
        }
    };
    positive("chart.bar.height", chart.bar.height);
    positive("chart.donut.radius", chart.donut.radius);
    positive("chart.trend.width", chart.trend.width);
    positive("chart.trend.height", chart.trend.height);

    if !(chart.bar.min_height.is_finite() && chart.bar.min_height >= 0.0) {
        errors.push(format!(
            "chart.bar.min_height must not be negative (got {})",
            chart.bar.min_height
        ));
    }
    let trend = &chart.trend;
    if trend.bottom <= trend.top {
        errors.push(format!(
            "chart.trend.bottom ({}) must be below chart.trend.top ({})",
            trend.bottom, trend.top
        ));
    }
    if trend.bottom > trend.height {
        errors.push(format!(
            "chart.trend.bottom ({}) must lie within chart.trend.height ({})",
            trend.bottom, trend.height
        ));
    }
    if trend.width <= 2.0 * trend.left {
        errors.push(format!(
            "chart.trend.width ({}) must exceed twice chart.trend.left ({})",
            trend.width, trend.left
        ));
    }
    errors
}
