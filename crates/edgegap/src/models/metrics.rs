//! Deployment metrics models.

use chrono::{DateTime, Utc};
use edgegap_core::query::QueryParams;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Unit of the sampling step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MetricsStep {
    /// Seconds.
    #[default]
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
}

impl MetricsStep {
    /// Unit suffix used in queries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
        }
    }
}

/// Time range and sampling for
/// [`get_deployment_metrics`](crate::EdgegapClient::get_deployment_metrics).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsFilter {
    /// Range start (UTC).
    pub start_time: Option<DateTime<Utc>>,
    /// Range end (UTC).
    pub end_time: Option<DateTime<Utc>>,
    /// Sampling step value; ignored when unset.
    pub step: Option<u32>,
    /// Sampling step unit; seconds when unset.
    pub step_unit: Option<MetricsStep>,
    /// Return raw samples.
    pub raw: Option<bool>,
}

impl MetricsFilter {
    /// Filter on a time range.
    #[must_use]
    pub fn between(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
            ..Self::default()
        }
    }

    /// Set the sampling step.
    #[must_use]
    pub fn with_step(mut self, step: u32, unit: MetricsStep) -> Self {
        self.step = Some(step);
        self.step_unit = Some(unit);
        self
    }

    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt_with("start_time", self.start_time, |t| {
            t.format(TIMESTAMP_FORMAT).to_string()
        });
        params.push_opt_with("end_time", self.end_time, |t| {
            t.format(TIMESTAMP_FORMAT).to_string()
        });
        params.push_opt_with("step", self.step, |step| {
            format!("{step}{}", self.step_unit.unwrap_or_default().as_str())
        });
        params.push_opt("raw", self.raw);
        params.into_pairs()
    }
}

/// One chart: labels, datasets and matching timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsSeries {
    /// Series labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Datasets, as sent by the API.
    #[serde(default)]
    pub datasets: Vec<serde_json::Value>,
    /// Sample timestamps.
    #[serde(default)]
    pub timestamps: Vec<String>,
}

/// Cumulative network and disk counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsTotals {
    /// Bytes received.
    #[serde(default)]
    pub receive_total: MetricsSeries,
    /// Bytes sent.
    #[serde(default)]
    pub transmit_total: MetricsSeries,
    /// Bytes read from disk.
    #[serde(default)]
    pub disk_read_total: MetricsSeries,
    /// Bytes written to disk.
    #[serde(default)]
    pub disk_write_total: MetricsSeries,
}

/// Network throughput.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsNetwork {
    /// Receive rate.
    #[serde(default)]
    pub receive: MetricsSeries,
    /// Transmit rate.
    #[serde(default)]
    pub transmit: MetricsSeries,
}

/// Metrics of a deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    /// Cumulative counters.
    #[serde(default)]
    pub total: MetricsTotals,
    /// CPU usage.
    #[serde(default)]
    pub cpu: MetricsSeries,
    /// Memory usage.
    #[serde(default, rename = "mem")]
    pub memory: MetricsSeries,
    /// Network throughput.
    #[serde(default)]
    pub network: MetricsNetwork,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn filter_formats_timestamps_and_step() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 13, 30, 5).unwrap();
        let filter = MetricsFilter::between(start, end).with_step(5, MetricsStep::Minutes);

        assert_eq!(
            filter.to_pairs(),
            vec![
                ("start_time", "2024-03-01 12:00:00.000000".to_string()),
                ("end_time", "2024-03-01 13:30:05.000000".to_string()),
                ("step", "5m".to_string()),
            ]
        );
    }

    #[test]
    fn step_unit_defaults_to_seconds() {
        let filter = MetricsFilter {
            step: Some(30),
            raw: Some(true),
            ..MetricsFilter::default()
        };
        assert_eq!(
            filter.to_pairs(),
            vec![("step", "30s".to_string()), ("raw", "true".to_string())]
        );
    }

    #[test]
    fn unit_without_step_is_ignored() {
        let filter = MetricsFilter {
            step_unit: Some(MetricsStep::Hours),
            ..MetricsFilter::default()
        };
        assert!(filter.to_pairs().is_empty());
    }

    #[test]
    fn metrics_reads_mem_key() {
        let metrics: Metrics = serde_json::from_value(json!({
            "cpu": {"labels": ["cpu"], "datasets": [[0.1, 0.2]], "timestamps": ["t0", "t1"]},
            "mem": {"labels": ["mem"], "datasets": [], "timestamps": []}
        }))
        .unwrap();
        assert_eq!(metrics.cpu.timestamps.len(), 2);
        assert_eq!(metrics.memory.labels, vec!["mem".to_string()]);
    }
}
