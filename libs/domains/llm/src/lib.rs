//! LLM Domain Library
//!
//! Chat completion and image generation against an OpenAI-compatible API,
//! optionally reached through a gateway base URL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   LlmService    │  ← validation, multi-chat fan-out
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │   LlmProvider   │
//! │    (trait)      │
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ OpenAIProvider  │
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_llm::{ChatMessage, ChatModel, LlmService, OpenAIProvider};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAIProvider::from_env()?;
//! let service = LlmService::new(Arc::new(provider));
//!
//! let reply = service
//!     .chat(ChatModel::Standard, vec![ChatMessage::user("Suggest a film")])
//!     .await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use completion::{LlmProvider, OpenAIProvider, describe_api_error};
pub use config::OpenAIConfig;
pub use error::{LlmError, LlmResult};
pub use models::{ChatMessage, ChatModel};
pub use service::LlmService;
