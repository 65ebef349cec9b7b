#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GenerateRequest;
use crate::domain::models::GroceryRequest;
use crate::domain::models::Planner;

pub struct PlannerApi {
    url: String,
}

impl Default for PlannerApi {
    fn default() -> PlannerApi {
        return PlannerApi {
            url: Config::get(ConfigKey::PlannerURL),
        };
    }
}

#[async_trait]
impl Planner for PlannerApi {
    #[allow(clippy::implicit_return)]
    async fn generate(&self, payload: GenerateRequest) -> Result<GroceryRequest> {
        let res = reqwest::Client::new()
            .post(format!("{url}/generate/", url = self.url))
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            tracing::error!(status, "Generate request to the planner failed");

            // Prefer the service's own error message, then the raw JSON
            // body, then the bare status code.
            let mut detail = format!("Error: {status}");
            if let Ok(body) = res.json::<serde_json::Value>().await {
                detail = match body.get("error").and_then(|err| return err.as_str()) {
                    Some(message) if !message.is_empty() => message.to_string(),
                    _ => body.to_string(),
                };
            }

            bail!(detail);
        }

        let result = res.json::<GroceryRequest>().await?;
        tracing::debug!(id = result.id, "Generated plan");

        return Ok(result);
    }

    #[allow(clippy::implicit_return)]
    async fn list_history(&self) -> Result<Vec<GroceryRequest>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/history/", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            tracing::error!(status, "History fetch from the planner failed");
            bail!("History fetch failed with status {status}");
        }

        return Ok(res.json::<Vec<GroceryRequest>>().await?);
    }
}
