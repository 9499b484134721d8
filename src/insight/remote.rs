use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::InsightProvider;
use crate::error::InsightError;
use crate::models::Category;

const REQUEST_TIMEOUT_SECS: u64 = 30;

const SYSTEM_PROMPT: &str = "You are a friendly personal finance assistant. \
Given a list of budget categories with their budget and amount spent, reply with \
two or three short sentences: the overall budget utilization, the category with \
the highest spending, and one practical suggestion. Reply in plain text only.";

/// Insight provider backed by an OpenAI-compatible chat-completions endpoint.
pub(crate) struct RemoteInsight {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl RemoteInsight {
    pub(crate) fn new(base_url: String, model: String, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url,
            model,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// One line per category, e.g. `- Food: spent $85.50 of $400.00`.
pub(crate) fn build_user_prompt(categories: &[Category]) -> String {
    let lines: Vec<String> = categories
        .iter()
        .map(|c| format!("- {}: spent ${:.2} of ${:.2}", c.name, c.spent, c.budget))
        .collect();
    format!("My budget categories this period:\n{}", lines.join("\n"))
}

impl InsightProvider for RemoteInsight {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn generate(&self, categories: &[Category]) -> Result<String, InsightError> {
        if categories.is_empty() {
            return Err(InsightError::Service("No budget categories to analyze".into()));
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: build_user_prompt(categories),
                },
            ],
            temperature: 0.4,
        };

        debug!(model = %self.model, categories = categories.len(), "Sending insight request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(InsightError::Service(format!(
                "API returned {status}: {}",
                api_error_message(&body)
            )));
        }

        parse_chat_response(&body)
    }
}

/// Pull the reply text out of a chat-completions body.
pub(crate) fn parse_chat_response(body: &str) -> Result<String, InsightError> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(InsightError::EmptyResponse)
}

/// `error.message` from an OpenAI-style error body, or the raw body.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
