use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::ImpactSummary;

/// Environment variable for the chat-completions base URL.
const EXPLAIN_BASE_URL_ENV: &str = "EXPLAIN_BASE_URL";

/// Environment variable for the model name.
const EXPLAIN_MODEL_ENV: &str = "EXPLAIN_MODEL";

/// Environment variable for the API key (optional for local servers).
const EXPLAIN_API_KEY_ENV: &str = "EXPLAIN_API_KEY";

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Upstream request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible text-generation endpoint that turns an
/// impact summary into a short human-readable explanation.
///
/// Entirely optional: when `EXPLAIN_BASE_URL` is unset the endpoint is
/// disabled and nothing in the core depends on it.
pub struct ExplanationClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl ExplanationClient {
    /// Build a client from the environment, or `None` when no base URL is
    /// configured.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var(EXPLAIN_BASE_URL_ENV).ok()?;
        let model = env::var(EXPLAIN_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = env::var(EXPLAIN_API_KEY_ENV).ok().filter(|k| !k.is_empty());

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            client,
            base_url,
            model,
            api_key,
        })
    }

    /// Ask the upstream model for a plain-language explanation of a summary.
    pub async fn explain(&self, summary: &ImpactSummary) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(summary),
            }],
            max_tokens: Some(300),
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(model = %self.model, "requesting impact explanation");

        let mut req = self.client.post(&url).json(&request);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response: ChatResponse = req.send().await?.error_for_status()?.json().await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        Ok(content)
    }
}

fn build_prompt(summary: &ImpactSummary) -> String {
    let mut lines = Vec::with_capacity(summary.items.len() + 3);
    lines.push(format!(
        "A meal scores {} out of 10 on an environmental impact scale where 1 is best. \
         Totals: {} kg CO2, {} L freshwater, {} m2 land.",
        summary.impact_score_1_to_10,
        summary.total_co2_kg,
        summary.total_freshwater_l,
        summary.total_land_m2,
    ));
    for item in &summary.items {
        lines.push(format!(
            "- {} ({} g): {} kg CO2, {} L water, {} m2 land",
            item.name, item.quantity_g, item.co2_kg, item.freshwater_l, item.land_m2,
        ));
    }
    lines.push(
        "Explain this footprint to a non-expert in two or three sentences and suggest \
         one swap that would lower it."
            .to_string(),
    );
    lines.join("\n")
}
