use crate::core::{build_prompt, ResultExtractor};
use crate::models::{AnalysisFailure, AnalysisOutcome, ColorAnalysis};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when asking the vision model for a classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("OpenAI API 키가 설정되지 않았습니다")]
    MissingApiKey,

    #[error("API 호출 실패: {}", .status.as_u16())]
    Upstream { status: StatusCode, body: String },

    #[error("분석 중 오류: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("분석 중 오류: {0}")]
    InvalidResponse(String),
}

impl ClassifierError {
    /// The error as the 200-wrapped result returned to callers
    pub fn to_failure(&self) -> AnalysisFailure {
        let details = match self {
            ClassifierError::Upstream { body, .. } => Some(body.clone()),
            _ => None,
        };

        AnalysisFailure {
            error: self.to_string(),
            details,
        }
    }
}

/// Vision model settings used to build a [`VisionClassifier`]
#[derive(Debug, Clone)]
pub struct ClassifierOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

/// Personal color classifier backed by an OpenAI-compatible vision model
///
/// Holds no mutable state; one instance is shared by all request handlers.
/// The prompt is built once at construction.
pub struct VisionClassifier {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    prompt: String,
    extractor: ResultExtractor,
    client: Client,
}

impl VisionClassifier {
    /// Create a new classifier
    ///
    /// A blank API key is treated as absent.
    pub fn new(options: ClassifierOptions, extractor: ResultExtractor) -> Result<Self, ClassifierError> {
        let client = Client::builder().timeout(options.timeout).build()?;

        let api_key = options
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            endpoint: options.endpoint,
            api_key,
            model: options.model,
            max_tokens: options.max_tokens,
            prompt: build_prompt(extractor.language()),
            extractor,
            client,
        })
    }

    /// Whether a credential is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify the image, folding errors into the wrapped result
    pub async fn analyze(&self, image_url: &str) -> AnalysisOutcome {
        match self.classify(image_url).await {
            Ok(analysis) => AnalysisOutcome::Analysis(analysis),
            Err(e) => {
                tracing::error!("Color analysis failed: {}", e);
                AnalysisOutcome::Failure(e.to_failure())
            }
        }
    }

    /// Ask the model to classify the image at `image_url`
    pub async fn classify(&self, image_url: &str) -> Result<ColorAnalysis, ClassifierError> {
        let api_key = self.api_key.as_deref().ok_or(ClassifierError::MissingApiKey)?;

        let reply = self.request_reply(api_key, image_url).await?;

        let (analysis, path) = self.extractor.extract_with_path(&reply);
        tracing::debug!("Extracted {} via {:?}", analysis.personal_color, path);

        Ok(analysis)
    }

    fn build_request<'a>(&'a self, image_url: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text: &self.prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: image_url },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
        }
    }

    /// Send the completion request and return the model's reply text
    async fn request_reply(&self, api_key: &str, image_url: &str) -> Result<String, ClassifierError> {
        tracing::debug!("Requesting classification from {} ({})", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&self.build_request(image_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::warn!("Vision API returned {}: {}", status, body);
            return Err(ClassifierError::Upstream { status, body });
        }

        let json: Value = response.json().await?;

        json.get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(str::to_string)
            .ok_or_else(|| ClassifierError::InvalidResponse("Missing choices[0].message.content".into()))
    }
}
