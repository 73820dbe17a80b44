use serde::{Deserialize, Serialize};
use strum::Display;
use time::Date;

/// REST body of `accounts.networkReport:generate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_spec: ReportSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSpec {
    pub date_range: DateRange,
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    pub sort_conditions: Vec<SortCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filters: Option<Vec<DimensionFilter>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: ReportDate,
    pub end_date: ReportDate,
}

impl DateRange {
    pub fn single_day(date: Date) -> Self {
        Self {
            start_date: date.into(),
            end_date: date.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl From<Date> for ReportDate {
    fn from(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month().into(),
            day: date.day(),
        }
    }
}

/// Categorical axes the service can group report rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Date,
    Month,
    Week,
    AdUnit,
    App,
    Country,
    Format,
    Platform,
}

/// Numeric measurements attached to each report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    AdRequests,
    Clicks,
    EstimatedEarnings,
    Impressions,
    ImpressionCtr,
    ImpressionRpm,
    MatchedRequests,
    MatchRate,
    ShowRate,
}

/// Sorts on either a dimension or a metric, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    pub order: SortOrder,
}

impl SortCondition {
    pub fn by_dimension(dimension: Dimension, order: SortOrder) -> Self {
        Self {
            dimension: Some(dimension),
            metric: None,
            order,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Restricts the report to rows whose dimension value is in the list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionFilter {
    pub dimension: Dimension,
    pub matches_any: StringList,
}

impl DimensionFilter {
    pub fn matching_any(dimension: Dimension, values: &[impl AsRef<str>]) -> Self {
        Self {
            dimension,
            matches_any: StringList {
                values: values.iter().map(|it| it.as_ref().to_owned()).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StringList {
    pub values: Vec<String>,
}
