use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ClassifierError, IntentClassifier};
use crate::entity::{ClassificationResult, LabelScore};

/// Zero-shot classification through the Hugging Face inference API.
pub struct HuggingFaceClassifier {
    client: Client,
    endpoint: String,
    api_token: String,
}

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

// The API has answered in both shapes depending on the deployment
#[derive(Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Columns { labels: Vec<String>, scores: Vec<f64> },
    Rows(Vec<LabelScore>),
}

impl HuggingFaceClassifier {
    pub fn new(
        base_url: &str,
        model: &str,
        api_token: &str,
        timeout: Duration,
    ) -> Result<Self, ClassifierError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
            api_token: api_token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IntentClassifier for HuggingFaceClassifier {
    async fn classify(
        &self,
        text: &str,
        labels: &[&str],
    ) -> Result<ClassificationResult, ClassifierError> {
        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Classifier response: {}", body);
        parse_response(&body)
    }
}

/// Decode either response shape into a ranked result.
pub fn parse_response(body: &str) -> Result<ClassificationResult, ClassifierError> {
    let response: ZeroShotResponse =
        serde_json::from_str(body).map_err(|e| ClassifierError::Decode(e.to_string()))?;

    let scores = match response {
        ZeroShotResponse::Columns { labels, scores } => {
            if labels.len() != scores.len() {
                return Err(ClassifierError::Decode(format!(
                    "{} labels but {} scores",
                    labels.len(),
                    scores.len()
                )));
            }
            labels
                .into_iter()
                .zip(scores)
                .map(|(label, score)| LabelScore { label, score })
                .collect()
        }
        ZeroShotResponse::Rows(rows) => rows,
    };

    Ok(ClassificationResult::new(scores)?)
}
