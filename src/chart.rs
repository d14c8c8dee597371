//! Declarative chart configuration for the landing page.
//!
//! The server owns the chart as data: a fixed, compile-time-known
//! configuration serialized to JSON and handed to the charting library in
//! the browser. Rendering internals are the library's concern; the contract
//! here is configuration equivalence, not pixels.

use serde::{Deserialize, Serialize};

/// A labeled multi-series chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart type understood by the client-side library ("line").
    pub chart_type: String,
    /// Chart title.
    pub title: String,
    /// Horizontal axis.
    pub x_axis: AxisConfig,
    /// Vertical axis.
    pub y_axis: AxisConfig,
    /// Data series, drawn in order.
    pub series: Vec<ChartSeries>,
}

/// Axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Axis title, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Category labels along the axis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

/// One named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Metric name shown in the legend.
    pub name: String,
    /// One value per x-axis category.
    pub data: Vec<f64>,
    /// Line color (CSS hex).
    pub color: String,
}

impl ChartSeries {
    fn new(name: &str, data: [f64; 3], color: &str) -> Self {
        Self {
            name: name.to_string(),
            data: data.to_vec(),
            color: color.to_string(),
        }
    }
}

/// The model-evolution chart shown on the landing page.
///
/// Three fixed categories, three fixed series. Pure and deterministic:
/// every call returns an identical configuration.
#[must_use]
pub fn model_evolution() -> ChartConfig {
    ChartConfig {
        chart_type: "line".to_string(),
        title: "Omega Model Evolution".to_string(),
        x_axis: AxisConfig {
            title: None,
            categories: vec![
                "Omega 1B".to_string(),
                "Omega 2B".to_string(),
                "Omega 3B".to_string(),
            ],
        },
        y_axis: AxisConfig {
            title: Some("Accuracy (%)".to_string()),
            categories: Vec::new(),
        },
        series: vec![
            ChartSeries::new("Logical Reasoning", [45.0, 68.0, 89.0], "#8B5CF6"),
            ChartSeries::new("Context Comprehension", [30.0, 75.0, 92.0], "#D946EF"),
            ChartSeries::new("Problem Solving", [38.0, 72.0, 88.0], "#EC4899"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_evolution_is_idempotent() {
        let first = model_evolution();
        let second = model_evolution();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_model_evolution_shape() {
        let config = model_evolution();

        assert_eq!(config.chart_type, "line");
        assert_eq!(config.x_axis.categories.len(), 3);
        assert_eq!(config.series.len(), 3);
        for series in &config.series {
            assert_eq!(series.data.len(), config.x_axis.categories.len());
        }
        assert_eq!(config.y_axis.title.as_deref(), Some("Accuracy (%)"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = model_evolution();
        let json = serde_json::to_string(&config).unwrap();
        let back: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
