//! Plan fetch client for the hosted billing widget.
//!
//! The widget itself (sign-up form, checkout, waitlist) is an external
//! service; this client only pulls its read-only plan listing. Callers
//! must treat failures as a display concern, not an error: the pricing
//! page falls back to the static catalog in [`crate::plans`].

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::BillingConfig;
use crate::plans::PlanDescriptor;
use crate::Result;

#[derive(Debug, Deserialize)]
struct PlansResponse {
    data: Vec<PlanDescriptor>,
}

/// HTTP client for the billing widget's plan listing.
pub struct PlanFetcher {
    client: reqwest::Client,
    plans_url: Url,
    publishable_key: String,
}

impl PlanFetcher {
    /// Build a fetcher from config. Fails fast on a missing publishable
    /// key or an invalid endpoint URL; the pricing view must not render
    /// without the billing capability.
    pub fn new(config: &BillingConfig) -> Result<Self> {
        let publishable_key = config.resolve_publishable_key()?;
        let plans_url = Url::parse(&config.plans_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            plans_url,
            publishable_key,
        })
    }

    /// Fetch the plan list. Errors are expected to be masked by the
    /// caller with the fallback catalog.
    pub async fn fetch_plans(&self) -> Result<Vec<PlanDescriptor>> {
        debug!(url = %self.plans_url, "fetching plans");

        let response = self
            .client
            .get(self.plans_url.clone())
            .bearer_auth(&self.publishable_key)
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| warn!("plan fetch failed: {e}"))?;

        let body: PlansResponse = response.json().await?;
        debug!(count = body.data.len(), "plans fetched");
        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> BillingConfig {
        BillingConfig {
            publishable_key: Some("pk_test_123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_fetcher_requires_key() {
        if std::env::var("PROXLOCK_PUBLISHABLE_KEY").is_err() {
            let config = BillingConfig::default();
            assert!(PlanFetcher::new(&config).is_err());
        }
    }

    #[test]
    fn test_fetcher_rejects_bad_url() {
        let config = BillingConfig {
            plans_url: "not a url".to_string(),
            ..config_with_key()
        };
        assert!(matches!(
            PlanFetcher::new(&config),
            Err(crate::Error::UrlParse(_))
        ));
    }

    #[test]
    fn test_plans_response_shape() {
        let json = r#"{
            "data": [{
                "id": "10k_requests",
                "slug": "plus",
                "name": "Plus",
                "description": "More requests",
                "fee": { "amountFormatted": "9.99" },
                "freeTrialDays": 30,
                "features": [
                    { "slug": "monthly_requests_10_000", "name": "10,000 Monthly Requests" }
                ]
            }]
        }"#;
        let parsed: PlansResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 1);
        let plan = &parsed.data[0];
        assert_eq!(plan.fee.as_ref().unwrap().amount_formatted, "9.99");
        assert_eq!(plan.free_trial_days, Some(30));
        assert_eq!(plan.features.len(), 1);
    }
}
