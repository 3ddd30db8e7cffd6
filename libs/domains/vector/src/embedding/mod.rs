mod openai;
mod provider;

pub use openai::{EMBEDDING_MODEL, OpenAIEmbedder};
pub use provider::EmbeddingProvider;

#[cfg(test)]
pub use provider::MockEmbeddingProvider;
