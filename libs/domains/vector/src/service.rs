use std::num::NonZeroUsize;
use std::sync::Arc;

use domain_catalog::MovieCatalog;
use tracing::{info, instrument};

use crate::config::BatchConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::{VectorError, VectorResult};
use crate::matching;
use crate::models::{
    ChunkInput, EmbeddedChunk, EmbeddedMovie, EnrichedMatch, MatchFunction, MatchParams,
    MatchRecord, MovieInput, SingleEmbedding, TextChunk,
};
use crate::pipeline::{BatchPacer, BatchPipeline, BatchReport, FixedDelay};
use crate::store::VectorStore;

/// Counters and rows produced by one `/embed-*` request
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary<R> {
    /// Items that survived filtering
    pub total: usize,
    pub embeddings_created: usize,
    pub openai_requests: usize,
    /// Rows handed to a successful insert, 0 when nothing was inserted
    pub store_inserted: usize,
    pub embeddings: Vec<R>,
}

impl<R> PipelineSummary<R> {
    fn new(total: usize, report: BatchReport<R>, store_inserted: usize) -> Self {
        Self {
            total,
            embeddings_created: report.results.len(),
            openai_requests: report.request_count,
            store_inserted,
            embeddings: report.results,
        }
    }
}

/// Vector service providing high-level operations
///
/// Combines the embedding provider, the vector store and the movie catalog.
pub struct VectorService<S: VectorStore> {
    store: S,
    embedder: Arc<dyn EmbeddingProvider>,
    catalog: Arc<dyn MovieCatalog>,
    pacer: Arc<dyn BatchPacer>,
    batch_size: NonZeroUsize,
}

impl<S: VectorStore> VectorService<S> {
    pub fn new(
        store: S,
        embedder: Arc<dyn EmbeddingProvider>,
        catalog: Arc<dyn MovieCatalog>,
    ) -> Self {
        Self::with_batch_config(store, embedder, catalog, BatchConfig::default())
    }

    pub fn with_batch_config(
        store: S,
        embedder: Arc<dyn EmbeddingProvider>,
        catalog: Arc<dyn MovieCatalog>,
        config: BatchConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            catalog,
            pacer: Arc::new(FixedDelay(config.delay)),
            batch_size: config.batch_size,
        }
    }

    pub fn with_pacer(mut self, pacer: Arc<dyn BatchPacer>) -> Self {
        self.pacer = pacer;
        self
    }

    fn pipeline(&self) -> BatchPipeline {
        BatchPipeline::new(self.embedder.clone(), self.pacer.clone(), self.batch_size)
    }

    // ===== Embedding Operations =====

    #[instrument(skip_all)]
    pub async fn embed_text(&self, input: &str) -> VectorResult<SingleEmbedding> {
        if input.trim().is_empty() {
            return Err(VectorError::Validation(
                "input must be a non-empty string".to_string(),
            ));
        }

        let embedding = self.embedder.embed(input).await?;
        Ok(SingleEmbedding {
            content: input.to_string(),
            embedding,
        })
    }

    /// Embed text chunks in batches and store them in the chunks table
    #[instrument(skip_all, fields(received = inputs.len()))]
    pub async fn embed_chunks(
        &self,
        inputs: Vec<ChunkInput>,
    ) -> VectorResult<PipelineSummary<EmbeddedChunk>> {
        let chunks: Vec<TextChunk> = inputs
            .into_iter()
            .filter_map(ChunkInput::into_text_chunk)
            .collect();
        if chunks.is_empty() {
            return Err(VectorError::Validation(
                "No valid chunks to embed".to_string(),
            ));
        }

        let total = chunks.len();
        let report = self
            .pipeline()
            .embed_batches(chunks, |chunk| chunk.content.as_str(), EmbeddedChunk::new)
            .await;

        let inserted = if report.results.is_empty() {
            0
        } else {
            self.store
                .insert_chunks(&report.results)
                .await
                .map_err(|err| VectorError::pipeline(err, report.request_count))?
        };

        info!(total, inserted, "Chunks embedded");
        Ok(PipelineSummary::new(total, report, inserted))
    }

    /// Embed movie overviews in batches and store them in the movie details table
    #[instrument(skip_all, fields(received = movies.len()))]
    pub async fn embed_movies(
        &self,
        movies: Vec<MovieInput>,
    ) -> VectorResult<PipelineSummary<EmbeddedMovie>> {
        let movies: Vec<MovieInput> = movies.into_iter().filter(MovieInput::has_overview).collect();
        if movies.is_empty() {
            return Err(VectorError::Validation(
                "No valid movies to embed".to_string(),
            ));
        }

        let total = movies.len();
        let report = self
            .pipeline()
            .embed_batches(movies, |movie| movie.overview.as_str(), EmbeddedMovie::new)
            .await;

        let inserted = if report.results.is_empty() {
            0
        } else {
            self.store
                .insert_movies(&report.results)
                .await
                .map_err(|err| VectorError::pipeline(err, report.request_count))?
        };

        info!(total, inserted, "Movies embedded");
        Ok(PipelineSummary::new(total, report, inserted))
    }

    // ===== Matching Operations =====

    #[instrument(skip(self, query_embedding), fields(dimension = query_embedding.len()))]
    pub async fn find_matches(
        &self,
        function: MatchFunction,
        query_embedding: &[f32],
        params: MatchParams,
    ) -> VectorResult<Vec<MatchRecord>> {
        if query_embedding.is_empty() {
            return Err(VectorError::Validation(
                matching::INVALID_EMBEDDING.to_string(),
            ));
        }

        self.store
            .match_rows(function, query_embedding, params)
            .await
    }

    /// Matching chunk contents, one per line, or "No matches found"
    pub async fn match_text(&self, query_embedding: &[f32]) -> VectorResult<String> {
        let records = self
            .find_matches(MatchFunction::Movies, query_embedding, MatchParams::default())
            .await?;
        Ok(matching::render_text(&records))
    }

    /// Matching movie rows, each with its poster URL
    pub async fn match_objects(&self, query_embedding: &[f32]) -> VectorResult<Vec<EnrichedMatch>> {
        let records = self
            .find_matches(
                MatchFunction::MovieDetails,
                query_embedding,
                MatchParams::default(),
            )
            .await?;
        Ok(matching::enrich_with_posters(self.catalog.as_ref(), records).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbeddingProvider;
    use crate::pipeline::NoDelay;
    use crate::store::MockVectorStore;
    use crate::test_support::MockCatalog;
    use std::time::Duration;

    fn service(
        store: MockVectorStore,
        embedder: MockEmbeddingProvider,
        batch_size: usize,
    ) -> VectorService<MockVectorStore> {
        let config = BatchConfig {
            batch_size: NonZeroUsize::new(batch_size).unwrap(),
            delay: Duration::ZERO,
        };
        VectorService::with_batch_config(
            store,
            Arc::new(embedder),
            Arc::new(MockCatalog::new()),
            config,
        )
        .with_pacer(Arc::new(NoDelay))
    }

    fn echo_embedder() -> MockEmbeddingProvider {
        let mut embedder = MockEmbeddingProvider::new();
        embedder
            .expect_embed_batch()
            .returning(|texts| Ok(texts.iter().map(|t| vec![t.len() as f32]).collect()));
        embedder
    }

    #[tokio::test]
    async fn test_embed_chunks_filters_and_inserts() {
        let mut store = MockVectorStore::new();
        store
            .expect_insert_chunks()
            .withf(|rows| {
                rows.iter().map(|r| r.content.as_str()).collect::<Vec<_>>() == vec!["a", "b"]
            })
            .times(1)
            .returning(|rows| Ok(rows.len()));

        let summary = service(store, echo_embedder(), 50)
            .embed_chunks(vec![
                ChunkInput::from_content("a"),
                ChunkInput::from_content(""),
                ChunkInput::from_page_content("b"),
            ])
            .await
            .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.embeddings_created, 2);
        assert_eq!(summary.openai_requests, 1);
        assert_eq!(summary.store_inserted, 2);
        assert_eq!(summary.embeddings[1].embedding, vec![1.0]);
    }

    #[tokio::test]
    async fn test_embed_chunks_rejects_all_blank() {
        let mut store = MockVectorStore::new();
        store.expect_insert_chunks().never();
        let mut embedder = MockEmbeddingProvider::new();
        embedder.expect_embed_batch().never();

        let err = service(store, embedder, 50)
            .embed_chunks(vec![ChunkInput::from_content("  ")])
            .await
            .unwrap_err();

        assert!(matches!(err, VectorError::Validation(_)));
    }

    #[tokio::test]
    async fn test_no_results_skips_insert() {
        let mut store = MockVectorStore::new();
        store.expect_insert_chunks().never();
        let mut embedder = MockEmbeddingProvider::new();
        embedder
            .expect_embed_batch()
            .returning(|_| Err(VectorError::Embedding("OpenAI API error (500)".into())));

        let summary = service(store, embedder, 1)
            .embed_chunks(vec![
                ChunkInput::from_content("a"),
                ChunkInput::from_content("b"),
            ])
            .await
            .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.embeddings_created, 0);
        assert_eq!(summary.openai_requests, 2);
        assert_eq!(summary.store_inserted, 0);
    }

    #[tokio::test]
    async fn test_insert_failure_reports_request_count() {
        let mut store = MockVectorStore::new();
        store
            .expect_insert_movies()
            .returning(|_| Err(VectorError::Store("insert into movie_details failed (503)".into())));

        let movies = (0..5)
            .map(|i| MovieInput {
                title: format!("Movie {i}"),
                overview: format!("Overview {i}"),
                ..Default::default()
            })
            .collect();

        let err = service(store, echo_embedder(), 2)
            .embed_movies(movies)
            .await
            .unwrap_err();

        match err {
            VectorError::Pipeline {
                source,
                request_count,
            } => {
                assert_eq!(request_count, 3);
                assert!(matches!(*source, VectorError::Store(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_embed_movies_drops_missing_overview() {
        let mut store = MockVectorStore::new();
        store
            .expect_insert_movies()
            .withf(|rows| rows.len() == 1 && rows[0].title == "Heat")
            .returning(|rows| Ok(rows.len()));

        let summary = service(store, echo_embedder(), 50)
            .embed_movies(vec![
                MovieInput {
                    title: "Heat".to_string(),
                    overview: "Bank robbers.".to_string(),
                    movie_db_id: Some(949),
                    ..Default::default()
                },
                MovieInput {
                    title: "Blank".to_string(),
                    overview: " ".to_string(),
                    ..Default::default()
                },
            ])
            .await
            .unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(summary.embeddings[0].content, "Bank robbers.");
        assert_eq!(summary.embeddings[0].movie_db_id, Some(949));
    }

    #[tokio::test]
    async fn test_embed_text_returns_content_and_vector() {
        let mut embedder = MockEmbeddingProvider::new();
        embedder
            .expect_embed()
            .withf(|text| text == "space western")
            .returning(|_| Ok(vec![0.1, 0.2]));

        let result = service(MockVectorStore::new(), embedder, 50)
            .embed_text("space western")
            .await
            .unwrap();

        assert_eq!(result.content, "space western");
        assert_eq!(result.embedding, vec![0.1, 0.2]);
    }

    #[tokio::test]
    async fn test_match_text_uses_default_params() {
        let mut store = MockVectorStore::new();
        store
            .expect_match_rows()
            .withf(|function, query, params| {
                *function == MatchFunction::Movies
                    && query.to_vec() == vec![0.5]
                    && *params == MatchParams::default()
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let text = service(store, MockEmbeddingProvider::new(), 50)
            .match_text(&[0.5])
            .await
            .unwrap();

        assert_eq!(text, matching::NO_MATCHES);
    }

    #[tokio::test]
    async fn test_search_error_is_not_empty_result() {
        let mut store = MockVectorStore::new();
        store
            .expect_match_rows()
            .returning(|_, _, _| Err(VectorError::Search("match_movies (404)".into())));

        let err = service(store, MockEmbeddingProvider::new(), 50)
            .match_text(&[0.5])
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Similarity search failed"));
    }

    #[tokio::test]
    async fn test_find_matches_rejects_empty_query() {
        let mut store = MockVectorStore::new();
        store.expect_match_rows().never();

        let err = service(store, MockEmbeddingProvider::new(), 50)
            .find_matches(MatchFunction::Movies, &[], MatchParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, VectorError::Validation(_)));
    }

    #[tokio::test]
    async fn test_match_objects_empty() {
        let mut store = MockVectorStore::new();
        store
            .expect_match_rows()
            .withf(|function, _, _| *function == MatchFunction::MovieDetails)
            .returning(|_, _, _| Ok(vec![]));

        let matches = service(store, MockEmbeddingProvider::new(), 50)
            .match_objects(&[0.5])
            .await
            .unwrap();

        assert!(matches.is_empty());
    }
}
