use crate::report::model::ReportRequest;
use crate::{Error, Result};
use serde_json::Value;
use tracing::info;

static API_URL: &str = "https://admob.googleapis.com/v1";

/// Anything able to execute a report-generation call scoped to an account.
/// The production implementation talks to the AdMob API; tests substitute
/// canned doubles.
pub trait ReportService {
    async fn generate_network_report(
        &self,
        publisher_id: &str,
        request: &ReportRequest,
    ) -> Result<Vec<Value>>;
}

pub struct AdMobClient {
    http: reqwest::Client,
    access_token: String,
}

impl AdMobClient {
    pub fn new(access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.into(),
        }
    }
}

impl ReportService for AdMobClient {
    async fn generate_network_report(
        &self,
        publisher_id: &str,
        request: &ReportRequest,
    ) -> Result<Vec<Value>> {
        let url = format!("{API_URL}/accounts/{publisher_id}/networkReport:generate");
        info!(url, "Generating network report");
        let res = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(request)
            .send()
            .await?;
        info!(response_status = ?res.status(), "Got AdMob API response");
        parse_response(res).await
    }
}

async fn parse_response(res: reqwest::Response) -> Result<Vec<Value>> {
    if !res.status().is_success() {
        let status = res.status();
        let error_text = res.text().await.unwrap_or_else(|_| "Unknown error".into());
        Err(Error::AdMobApi(format!(
            "Unexpected response status: {status}, body: {error_text}"
        )))?
    }
    res.json::<Vec<Value>>().await.map_err(Into::into)
}
