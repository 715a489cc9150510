use crate::reading::Reading;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One year of the predicted-versus-official comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonRow {
    pub year: i32,
    /// Predicted temperature (°C)
    pub predicted: f64,
    /// Official temperature (°C), or "N/A" when no reading exists
    #[schema(value_type = Object)]
    pub official: Reading,
}

/// One year of the historical official series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoricalRow {
    pub year: i32,
    /// Official temperature (°C), or "N/A" when no reading exists
    #[schema(value_type = Object)]
    pub official: Reading,
}

/// Everything shown for one country: the comparison over the predicted
/// years and the official series over the fixed historical range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureReport {
    /// Country name as it was queried
    pub country_name: String,
    /// Ordered by year ascending; empty for countries without predictions
    pub comparison: Vec<ComparisonRow>,
    /// One row per year of the historical range, in order
    pub history: Vec<HistoricalRow>,
}

/// Series consumed by the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub predicted: Vec<f64>,
    pub official: Vec<Reading>,
    pub years: Vec<i32>,
}

/// Series consumed by the historical chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryChart {
    pub official: Vec<Reading>,
    pub years: Vec<i32>,
}

impl TemperatureReport {
    pub fn comparison_chart(&self) -> ComparisonChart {
        ComparisonChart {
            predicted: self.comparison.iter().map(|row| row.predicted).collect(),
            official: self.comparison.iter().map(|row| row.official).collect(),
            years: self.comparison.iter().map(|row| row.year).collect(),
        }
    }

    pub fn history_chart(&self) -> HistoryChart {
        HistoryChart {
            official: self.history.iter().map(|row| row.official).collect(),
            years: self.history.iter().map(|row| row.year).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> TemperatureReport {
        TemperatureReport {
            country_name: "Germany".to_string(),
            comparison: vec![
                ComparisonRow { year: 2015, predicted: 1.1, official: Reading::Recorded(0.9) },
                ComparisonRow { year: 2016, predicted: 1.3, official: Reading::Missing },
            ],
            history: vec![
                HistoricalRow { year: 1950, official: Reading::Missing },
                HistoricalRow { year: 1951, official: Reading::Recorded(16.4) },
            ],
        }
    }

    #[test]
    fn test_comparison_chart_keeps_row_order() {
        let chart = sample_report().comparison_chart();
        assert_eq!(chart.predicted, vec![1.1, 1.3]);
        assert_eq!(chart.official, vec![Reading::Recorded(0.9), Reading::Missing]);
        assert_eq!(chart.years, vec![2015, 2016]);
    }

    #[test]
    fn test_history_chart() {
        let chart = sample_report().history_chart();
        assert_eq!(chart.years, vec![1950, 1951]);
        assert_eq!(
            serde_json::to_string(&chart.official).unwrap(),
            r#"["N/A",16.4]"#
        );
    }

    #[test]
    fn test_empty_report_has_empty_series() {
        let report = TemperatureReport {
            country_name: "Atlantis".to_string(),
            comparison: vec![],
            history: vec![],
        };
        let chart = report.comparison_chart();
        assert!(chart.predicted.is_empty());
        assert!(chart.official.is_empty());
        assert!(chart.years.is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["country_name"], "Germany");
        assert_eq!(json["comparison"][1]["official"], "N/A");
        assert_eq!(json["history"][1]["official"], 16.4);
    }
}
