use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, instrument, warn};
use utoipa::ToSchema;

use crate::config::AdvisorConfig;
use crate::errors::ServiceError;

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskAdvisorInput {
    pub question: String,
    /// Optional village for locally relevant advice.
    pub village: Option<String>,
    /// Optional district for locally relevant advice.
    pub district: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorReply {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Dairy advisory chat backed by the Anthropic Messages API. The API key is
/// read from configuration at startup; without one the service stays up and
/// reports the advisory as unavailable.
#[derive(Clone)]
pub struct AdvisorService {
    client: reqwest::Client,
    config: AdvisorConfig,
}

impl AdvisorService {
    pub fn new(config: AdvisorConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Internal(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, config })
    }

    fn system_prompt(village: Option<&str>, district: Option<&str>) -> String {
        let mut prompt = String::from(
            "You are an expert dairy farming advisor specializing in buffalo \
             dairy farming in India. You help farmers with buffalo breeds, \
             milk production, breeding cycles, nutrition, disease prevention, \
             veterinary care, and farm economics. Give practical, actionable \
             advice suited to small and medium farms. Keep answers concise \
             and specific.",
        );
        match (village, district) {
            (Some(v), Some(d)) => {
                prompt.push_str(&format!(" The farmer is located in {v} village, {d} district."));
            }
            (None, Some(d)) => prompt.push_str(&format!(" The farmer is located in {d} district.")),
            (Some(v), None) => prompt.push_str(&format!(" The farmer is located in {v} village.")),
            (None, None) => {}
        }
        prompt
    }

    /// One-shot question and answer, no conversation state.
    #[instrument(skip(self, input))]
    pub async fn ask(&self, input: AskAdvisorInput) -> Result<AdvisorReply, ServiceError> {
        let question = input.question.trim();
        if question.is_empty() {
            return Err(ServiceError::Validation("question is required".to_string()));
        }

        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                warn!("advisory requested but no API key is configured");
                return Err(ServiceError::AdvisoryUnavailable(
                    "advisory service is not configured".to_string(),
                ));
            }
        };

        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": Self::system_prompt(input.village.as_deref(), input.district.as_deref()),
            "messages": [{ "role": "user", "content": question }],
        });

        let response = self
            .client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "advisory request failed");
                ServiceError::AdvisoryUnavailable("advisory service is unreachable".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(%status, "advisory request rejected");
            return Err(ServiceError::AdvisoryUnavailable(format!(
                "advisory service returned {status}"
            )));
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            error!(error = %e, "advisory response could not be parsed");
            ServiceError::AdvisoryUnavailable("advisory response was malformed".to_string())
        })?;

        let answer = parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .unwrap_or_default();
        if answer.is_empty() {
            return Err(ServiceError::AdvisoryUnavailable(
                "advisory response was empty".to_string(),
            ));
        }

        Ok(AdvisorReply { answer })
    }
}
