mod openai;
mod provider;

pub use openai::{OpenAIProvider, describe_api_error};
pub use provider::LlmProvider;

#[cfg(test)]
pub use provider::MockLlmProvider;
