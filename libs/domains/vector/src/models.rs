use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Table receiving embedded text chunks
pub const CHUNKS_TABLE: &str = "movies";
/// Table receiving embedded movie records
pub const MOVIES_TABLE: &str = "movie_details";

pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.5;
pub const DEFAULT_MATCH_COUNT: u32 = 4;

// ===== Pipeline inputs =====

/// Caller-supplied chunk; either field may carry the text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkInput {
    #[serde(default, rename = "pageContent")]
    pub page_content: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChunkInput {
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            page_content: None,
            content: Some(content.into()),
        }
    }

    pub fn from_page_content(page_content: impl Into<String>) -> Self {
        Self {
            page_content: Some(page_content.into()),
            content: None,
        }
    }

    /// `pageContent` wins; a blank field falls through to the next one.
    /// `None` when neither carries text.
    pub fn into_text_chunk(self) -> Option<TextChunk> {
        [self.page_content, self.content]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .map(|content| TextChunk { content })
    }
}

/// Unit of text to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub content: String,
}

/// Caller-supplied movie; `overview` is the embedded text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    #[serde(default)]
    pub title: String,
    #[serde(
        default,
        rename = "releaseYear",
        deserialize_with = "string_or_number"
    )]
    pub release_year: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "lenient_movie_db_id")]
    pub movie_db_id: Option<i64>,
}

impl MovieInput {
    pub fn has_overview(&self) -> bool {
        !self.overview.trim().is_empty()
    }
}

/// Years arrive as `1994` or `"1994"`; both are stored as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// TMDB ids arrive as `949` or `"949"`; anything else is treated as absent.
fn lenient_movie_db_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(parse_movie_db_id))
}

fn parse_movie_db_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// ===== Pipeline outputs (store rows) =====

/// Row of the `movies` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    pub content: String,
    pub embedding: Vec<f32>,
}

impl EmbeddedChunk {
    pub fn new(chunk: TextChunk, embedding: Vec<f32>) -> Self {
        Self {
            content: chunk.content,
            embedding,
        }
    }
}

/// Row of the `movie_details` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedMovie {
    pub title: String,
    pub release_year: Option<String>,
    pub content: String,
    pub movie_db_id: Option<i64>,
    pub embedding: Vec<f32>,
}

impl EmbeddedMovie {
    pub fn new(movie: MovieInput, embedding: Vec<f32>) -> Self {
        Self {
            title: movie.title,
            release_year: movie.release_year,
            content: movie.overview,
            movie_db_id: movie.movie_db_id,
            embedding,
        }
    }
}

// ===== Matching =====

/// Similarity RPC to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFunction {
    /// Chunk matches rendered as text
    Movies,
    /// Movie-detail matches rendered as objects
    MovieDetails,
}

impl MatchFunction {
    pub fn rpc_name(&self) -> &'static str {
        match self {
            MatchFunction::Movies => "match_movies",
            MatchFunction::MovieDetails => "match_movie_details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    pub threshold: f32,
    pub count: u32,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            count: DEFAULT_MATCH_COUNT,
        }
    }
}

/// Row returned by a similarity RPC, kept column for column as the store
/// sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRecord {
    pub columns: Map<String, Value>,
}

impl MatchRecord {
    /// `content` column when it holds text
    pub fn content(&self) -> Option<&str> {
        self.columns.get("content").and_then(Value::as_str)
    }

    /// `movie_db_id` column as a TMDB id, numeric or numeric text
    pub fn movie_db_id(&self) -> Option<i64> {
        self.columns.get("movie_db_id").and_then(parse_movie_db_id)
    }
}

impl From<Map<String, Value>> for MatchRecord {
    fn from(columns: Map<String, Value>) -> Self {
        Self { columns }
    }
}

/// Match row plus its poster; `posterUrl` is always serialized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedMatch {
    #[serde(flatten)]
    pub record: MatchRecord,
    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,
}

// ===== HTTP DTOs =====

/// `POST /handle-embedding` body
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedTextRequest {
    #[serde(default)]
    pub input: Option<String>,
}

/// `POST /handle-embedding` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleEmbedding {
    pub content: String,
    pub embedding: Vec<f32>,
}

/// `POST /embed-chunks` body
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedChunksRequest {
    #[serde(default)]
    pub chunks: Option<Vec<ChunkInput>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedChunksResponse {
    pub total_chunks: usize,
    pub embeddings_created: usize,
    #[serde(rename = "openAIRequests")]
    pub openai_requests: usize,
    pub supabase_inserted: usize,
    pub embeddings: Vec<EmbeddedChunk>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedMoviesResponse {
    pub total_movies: usize,
    pub embeddings_created: usize,
    #[serde(rename = "openAIRequests")]
    pub openai_requests: usize,
    pub supabase_inserted: usize,
    pub embeddings: Vec<EmbeddedMovie>,
}

/// `POST /handle-matching(-object)` body: `{ "prompt": { "embedding": [...] } }`.
///
/// The vector is kept as raw JSON so a malformed one is reported with a
/// validation message rather than a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub prompt: Option<MatchPrompt>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPrompt {
    #[serde(default)]
    pub embedding: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchTextResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchObjectResponse {
    pub result: Vec<EnrichedMatch>,
}
