use async_trait::async_trait;
use core_config::{ConfigError, FromEnv};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::LlmProvider;
use crate::config::OpenAIConfig;
use crate::error::{LlmError, LlmResult};
use crate::models::{
    CHAT_FREQUENCY_PENALTY, CHAT_PRESENCE_PENALTY, CHAT_TEMPERATURE, ChatMessage, ChatModel,
    IMAGE_MODEL, IMAGE_SIZE,
};

/// OpenAI chat + image provider
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(OpenAIConfig::from_env()?))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> LlmResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider(describe_api_error(status, &error_text)));
        }

        Ok(response.json().await?)
    }
}

/// Builds the message surfaced for a non-2xx OpenAI response.
///
/// Prefers `error.message` from the OpenAI error body and falls back to the
/// raw body text.
pub fn describe_api_error(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiErrorBody {
        error: ApiErrorDetail,
    }

    #[derive(Deserialize)]
    struct ApiErrorDetail {
        message: String,
    }

    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    format!("OpenAI API error ({}): {}", status, detail)
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'static str,
    messages: &'a [ChatMessage],
    temperature: f32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    prompt: &'a str,
    model: &'static str,
    n: u8,
    size: &'static str,
    response_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(model: ChatModel, messages: &'a [ChatMessage]) -> Self {
        Self {
            model: model.model_name(),
            messages,
            temperature: CHAT_TEMPERATURE,
            presence_penalty: CHAT_PRESENCE_PENALTY,
            frequency_penalty: CHAT_FREQUENCY_PENALTY,
        }
    }
}

impl<'a> ImageGenerationRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            model: IMAGE_MODEL,
            n: 1,
            size: IMAGE_SIZE,
            response_format: "b64_json",
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    async fn complete_chat(
        &self,
        model: ChatModel,
        messages: Vec<ChatMessage>,
    ) -> LlmResult<ChatMessage> {
        let request = ChatCompletionRequest::new(model, &messages);
        let response: ChatCompletionResponse =
            self.post_json("/chat/completions", &request).await?;

        first_choice(response)
    }

    async fn generate_image(&self, prompt: &str) -> LlmResult<String> {
        let request = ImageGenerationRequest::new(prompt);
        let response: ImageGenerationResponse =
            self.post_json("/images/generations", &request).await?;

        first_image(response)
    }
}

fn first_choice(response: ChatCompletionResponse) -> LlmResult<ChatMessage> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| LlmError::Provider("Chat completion returned no choices".to_string()))
}

fn first_image(response: ImageGenerationResponse) -> LlmResult<String> {
    response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.b64_json)
        .ok_or_else(|| LlmError::Provider("Image generation returned no image data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_uses_fixed_sampling() {
        let messages = vec![ChatMessage::user("hi")];
        let request = ChatCompletionRequest::new(ChatModel::Turbo, &messages);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["presence_penalty"], 0.0);
        assert_eq!(value["frequency_penalty"], 0.0);
        assert!((value["temperature"].as_f64().unwrap() - 1.1).abs() < 1e-6);
        assert_eq!(value["messages"], json!([{ "role": "user", "content": "hi" }]));
    }

    #[test]
    fn test_image_request_is_single_square_b64() {
        let value = serde_json::to_value(ImageGenerationRequest::new("a red fox")).unwrap();
        assert_eq!(
            value,
            json!({
                "prompt": "a red fox",
                "model": "dall-e-3",
                "n": 1,
                "size": "1024x1024",
                "response_format": "b64_json"
            })
        );
    }

    #[test]
    fn test_first_choice_returns_message() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Heat (1995)" } },
                { "index": 1, "message": { "role": "assistant", "content": "Ronin (1998)" } }
            ]
        }))
        .unwrap();

        let message = first_choice(response).unwrap();
        assert_eq!(message.content, "Heat (1995)");
    }

    #[test]
    fn test_first_choice_without_choices_is_error() {
        let response = ChatCompletionResponse { choices: vec![] };
        assert!(matches!(first_choice(response), Err(LlmError::Provider(_))));
    }

    #[test]
    fn test_first_image_requires_b64_payload() {
        let response: ImageGenerationResponse =
            serde_json::from_value(json!({ "data": [{ "url": "https://img" }] })).unwrap();
        assert!(first_image(response).is_err());

        let response: ImageGenerationResponse =
            serde_json::from_value(json!({ "data": [{ "b64_json": "iVBORw0" }] })).unwrap();
        assert_eq!(first_image(response).unwrap(), "iVBORw0");
    }

    #[test]
    fn test_describe_api_error_prefers_openai_message() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#;
        assert_eq!(
            describe_api_error(StatusCode::TOO_MANY_REQUESTS, body),
            "OpenAI API error (429 Too Many Requests): Rate limit reached"
        );
    }

    #[test]
    fn test_describe_api_error_falls_back_to_body() {
        assert_eq!(
            describe_api_error(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "OpenAI API error (502 Bad Gateway): upstream down"
        );
    }
}
