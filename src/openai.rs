//! OpenAI Chat Completions client backing the `correct` command.
//!
//! # Example
//! ```no_run
//! use recast::openai::{self, Client};
//!
//! let client = Client::new("YOUR_API_KEY");
//!
//! let gpt_3_5_turbo = client.completion_model(openai::GPT_35_TURBO);
//! ```

use crate::completion::{self, CompletionError};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

// ================================================================
// Main OpenAI Client
// ================================================================
const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Instruction prefixed to every prompt before transmission. Deliberately
/// fixed and non-localized, independent of the active display locale.
pub const REWRITE_PREFIX: &str = "Перепеши текст : ";

pub struct ClientBuilder<'a> {
    api_key: &'a str,
    base_url: &'a str,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl<'a> ClientBuilder<'a> {
    pub fn new(api_key: &'a str) -> Self {
        Self {
            api_key,
            base_url: OPENAI_API_BASE_URL,
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    pub fn base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = base_url;
        self
    }

    /// Bound on the whole request/response cycle. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured reqwest client; `timeout` is ignored in that case.
    pub fn custom_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<Client, reqwest::Error> {
        let http_client = if let Some(http_client) = self.http_client {
            http_client
        } else {
            reqwest::Client::builder().timeout(self.timeout).build()?
        };

        Ok(Client {
            base_url: self.base_url.to_string(),
            api_key: self.api_key.to_string(),
            http_client,
        })
    }
}

#[derive(Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("http_client", &self.http_client)
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

impl Client {
    /// Create a new OpenAI client builder.
    ///
    /// # Example
    /// ```
    /// use recast::openai::Client;
    ///
    /// let openai = Client::builder("your-openai-api-key")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder(api_key: &str) -> ClientBuilder<'_> {
        ClientBuilder::new(api_key)
    }

    /// Create a new OpenAI client. For more control, use the `builder` method.
    ///
    /// # Panics
    /// - If the reqwest client cannot be built (if the TLS backend cannot be initialized).
    pub fn new(api_key: &str) -> Self {
        Self::builder(api_key)
            .build()
            .expect("OpenAI client should build")
    }

    /// Create a new OpenAI client from the `OPENAI_API_KEY` environment variable.
    /// Panics if the environment variable is not set.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");
        Self::new(&api_key)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        self.http_client.post(url).bearer_auth(&self.api_key)
    }

    /// Create a completion model with the given name.
    pub fn completion_model(&self, model: &str) -> CompletionModel {
        CompletionModel::new(self.clone(), model)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse<T> {
    Ok(T),
    Err(ApiErrorResponse),
}

// ================================================================
// OpenAI Completion API
// ================================================================
pub const GPT_35_TURBO: &str = "gpt-3.5-turbo";

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: String,
}

#[derive(Clone)]
pub struct CompletionModel {
    client: Client,
    pub model: String,
}

impl CompletionModel {
    pub fn new(client: Client, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

impl completion::CompletionModel for CompletionModel {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": format!("{REWRITE_PREFIX}{prompt}"),
            }],
        });

        let response = self
            .client
            .post("/chat/completions")
            .json(&request)
            .send()
            .await?;

        // The API reports failures as an `error` object in the body, on any
        // status code, so the body is decoded before the status is consulted.
        let text = response.text().await?;
        tracing::debug!(target: "recast", "OpenAI completion response: {text}");

        match serde_json::from_str::<ApiResponse<CompletionResponse>>(&text)? {
            ApiResponse::Ok(completion) => completion
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| {
                    CompletionError::ResponseError(
                        "response contained no completion choices".to_string(),
                    )
                }),
            ApiResponse::Err(err) => Err(CompletionError::ProviderError(err.error.message)),
        }
    }
}
