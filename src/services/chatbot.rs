use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CHATBOT_URL: &str = "https://chatbot-ji1z.onrender.com/chatbot-ji1z";

const ENGLISH_INSTRUCTION: &str = "Please respond in English. ";
const ASSISTANT_GREETING: &str = "Hello! How can I help you today?";

const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
const REFERER_PAGE: &str = "https://seoschmiede.at/en/aitools/chatgpt-tool/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Failed. Status code: {0}")]
    StatusError(u16),
    #[error("JSON parsing failed: {0}")]
    ParseError(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatPayload {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
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

#[derive(Clone)]
pub struct ChatbotClient {
    client: Client,
    url: String,
}

impl ChatbotClient {
    pub fn new() -> Result<Self, ChatbotError> {
        Self::with_url(CHATBOT_URL)
    }

    /// Points the client at an alternate endpoint. Used by tests.
    pub fn with_url(url: &str) -> Result<Self, ChatbotError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Sends the question with the English-language instruction prepended and
    /// returns the assistant's reply.
    pub async fn ask(&self, question: &str) -> Result<String, ChatbotError> {
        let payload = ChatPayload {
            messages: vec![
                ChatMessage {
                    role: "assistant".to_string(),
                    content: ASSISTANT_GREETING.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("{}{}", ENGLISH_INSTRUCTION, question),
                },
            ],
        };

        let response = self
            .client
            .post(&self.url)
            .header("User-Agent", USER_AGENT)
            .header("Location", REFERER_PAGE)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ChatbotError::StatusError(response.status().as_u16()));
        }

        let body = response.text().await?;
        let completion: ChatCompletion =
            serde_json::from_str(&body).map_err(|e| ChatbotError::ParseError(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| ChatbotError::InvalidResponse("No choices in response".to_string()))
    }
}
