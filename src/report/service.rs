use crate::admob::ReportService;
use crate::conf::Conf;
use crate::report::model::{
    DateRange, Dimension, DimensionFilter, Metric, ReportRequest, ReportSpec, SortCondition,
    SortOrder,
};
use crate::report::response;
use crate::Result;
use serde_json::Value;
use time::{Date, Duration, OffsetDateTime};
use tracing::info;

pub async fn run(service: &impl ReportService, conf: &Conf) -> Result<()> {
    let today = OffsetDateTime::now_utc().date();
    let request = ReportRequest {
        report_spec: report_spec_for(today, &conf.filter_countries),
    };
    let response = service
        .generate_network_report(&conf.publisher_id, &request)
        .await?;
    info!(lines = response.len(), "Generated network report");
    for line in &response {
        println!("{line}");
    }
    println!();
    println!("{}", earnings_line(&response)?);
    Ok(())
}

/// The canned report: yesterday only, grouped by date and app, most recent
/// date first. Network reports only support the account default timezone
/// and America/Los_Angeles, so the date range is interpreted there.
pub fn report_spec_for(today: Date, filter_countries: &[String]) -> ReportSpec {
    let yesterday = today - Duration::days(1);
    ReportSpec {
        date_range: DateRange::single_day(yesterday),
        dimensions: vec![Dimension::Date, Dimension::App],
        metrics: vec![
            Metric::EstimatedEarnings,
            Metric::AdRequests,
            Metric::MatchedRequests,
        ],
        sort_conditions: vec![SortCondition::by_dimension(
            Dimension::Date,
            SortOrder::Descending,
        )],
        dimension_filters: if filter_countries.is_empty() {
            None
        } else {
            Some(vec![DimensionFilter::matching_any(
                Dimension::Country,
                filter_countries,
            )])
        },
    }
}

pub fn earnings_line(response: &[Value]) -> Result<String> {
    let micros = response::estimated_earnings_micros(response)?;
    Ok(format!("{}$", micros as f64 / 1_000_000.0))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::report::model::ReportDate;
    use crate::{Error, Result};
    use serde_json::json;
    use time::macros::date;

    fn mock_response() -> Vec<Value> {
        vec![
            json!({"header": {
                "dateRange": {
                    "startDate": {"year": 2024, "month": 2, "day": 20},
                    "endDate": {"year": 2024, "month": 2, "day": 20}
                },
                "localizationSettings": {"currencyCode": "USD", "languageCode": "en-US"}
            }}),
            json!({"row": {
                "dimensionValues": {
                    "DATE": {"value": "20240220"},
                    "APP": {
                        "value": "ca-app-pub-2122146556116316~8497268021",
                        "displayLabel": "ez빠른키보드 - 한글 키보드"
                    }
                },
                "metricValues": {
                    "ESTIMATED_EARNINGS": {"microsValue": "13032842"},
                    "AD_REQUESTS": {"integerValue": "100013"},
                    "MATCHED_REQUESTS": {"integerValue": "28208"}
                }
            }}),
            json!({"footer": {"matchingRowCount": "1"}}),
        ]
    }

    fn mock_conf() -> Conf {
        Conf {
            publisher_id: "pub-9876543210987654".into(),
            access_token: "token".into(),
            filter_countries: vec![],
        }
    }

    #[test]
    fn report_spec_covers_yesterday() {
        let spec = report_spec_for(date!(2024 - 02 - 21), &[]);
        let yesterday = ReportDate {
            year: 2024,
            month: 2,
            day: 20,
        };
        assert_eq!(yesterday, spec.date_range.start_date);
        assert_eq!(yesterday, spec.date_range.end_date);
    }

    #[test]
    fn report_spec_handles_month_boundary() {
        let spec = report_spec_for(date!(2024 - 03 - 01), &[]);
        assert_eq!(
            ReportDate {
                year: 2024,
                month: 2,
                day: 29
            },
            spec.date_range.start_date
        );
    }

    #[test]
    fn report_spec_handles_year_boundary() {
        let spec = report_spec_for(date!(2024 - 01 - 01), &[]);
        assert_eq!(
            ReportDate {
                year: 2023,
                month: 12,
                day: 31
            },
            spec.date_range.start_date
        );
    }

    #[test]
    fn report_spec_default_selection() {
        let spec = report_spec_for(date!(2024 - 02 - 21), &[]);
        assert_eq!(vec![Dimension::Date, Dimension::App], spec.dimensions);
        assert_eq!(
            vec![
                Metric::EstimatedEarnings,
                Metric::AdRequests,
                Metric::MatchedRequests
            ],
            spec.metrics
        );
        assert_eq!(1, spec.sort_conditions.len());
        assert_eq!(Some(Dimension::Date), spec.sort_conditions[0].dimension);
        assert_eq!(None, spec.sort_conditions[0].metric);
        assert_eq!(SortOrder::Descending, spec.sort_conditions[0].order);
        assert!(spec.dimension_filters.is_none());
    }

    #[test]
    fn report_spec_with_country_filter() {
        let countries = vec!["US".to_string(), "CA".to_string()];
        let spec = report_spec_for(date!(2024 - 02 - 21), &countries);
        let filters = spec.dimension_filters.unwrap();
        assert_eq!(1, filters.len());
        assert_eq!(Dimension::Country, filters[0].dimension);
        assert_eq!(vec!["US", "CA"], filters[0].matches_any.values);
    }

    #[test]
    fn earnings_line_from_micros() -> Result<()> {
        assert_eq!("13.032842$", earnings_line(&mock_response())?);
        Ok(())
    }

    #[test]
    fn earnings_line_requires_data_row() {
        let response = mock_response();
        assert!(earnings_line(&response[..1]).is_err());
    }

    struct CannedService(Vec<Value>);

    impl ReportService for CannedService {
        async fn generate_network_report(
            &self,
            _publisher_id: &str,
            _request: &ReportRequest,
        ) -> Result<Vec<Value>> {
            Ok(self.0.clone())
        }
    }

    struct FailingService;

    impl ReportService for FailingService {
        async fn generate_network_report(
            &self,
            _publisher_id: &str,
            _request: &ReportRequest,
        ) -> Result<Vec<Value>> {
            Err(Error::AdMobApi("quota exceeded".into()))
        }
    }

    #[tokio::test]
    async fn run_prints_report() -> Result<()> {
        run(&CannedService(mock_response()), &mock_conf()).await
    }

    #[tokio::test]
    async fn run_fails_on_short_response() {
        let header_only = CannedService(mock_response()[..1].to_vec());
        assert!(run(&header_only, &mock_conf()).await.is_err());
    }

    #[tokio::test]
    async fn run_propagates_service_errors() {
        let res = run(&FailingService, &mock_conf()).await;
        assert_eq!("quota exceeded", res.unwrap_err().to_string());
    }
}
