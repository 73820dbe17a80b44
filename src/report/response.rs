use crate::report::model::{Dimension, Metric};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Deserialize)]
struct RowWrapper {
    row: ReportRow,
}

/// One data element of a generated report. The first and last response
/// elements are header/footer objects and do not deserialize into this.
#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub dimension_values: HashMap<Dimension, DimensionValue>,
    #[serde(default)]
    pub metric_values: HashMap<Metric, MetricValue>,
}

#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionValue {
    pub value: Option<String>,
    pub display_label: Option<String>,
}

/// Exactly one field is set, depending on the metric type. Monetary
/// amounts arrive as micros, an int64-as-string scaled by 10^6.
#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub integer_value: Option<String>,
    pub micros_value: Option<String>,
    pub double_value: Option<f64>,
}

impl MetricValue {
    pub fn micros(&self) -> Result<i64> {
        let micros = self
            .micros_value
            .as_deref()
            .ok_or(Error::AdMobApi("Not a micros value".into()))?;
        micros.parse().map_err(Into::into)
    }
}

/// Reads the earnings figure from the response element at index 1, the
/// first data row of a header-plus-rows response. A response without a
/// second element is an error.
pub fn estimated_earnings_micros(response: &[Value]) -> Result<i64> {
    let line = response
        .get(1)
        .ok_or(Error::AdMobApi("Response has no data rows".into()))?;
    let line: RowWrapper = serde_json::from_value(line.clone())?;
    let earnings = line
        .row
        .metric_values
        .get(&Metric::EstimatedEarnings)
        .ok_or_else(|| Error::AdMobApi(format!("{} metric is missing", Metric::EstimatedEarnings)))?;
    earnings.micros()
}
