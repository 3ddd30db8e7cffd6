//! Sequential batch embedding with per-batch failure isolation.

mod pacer;

pub use pacer::{BatchPacer, FixedDelay, NoDelay};

use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::embedding::EmbeddingProvider;

/// What happened to one slice of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Embedded { batch: usize, items: usize },
    Skipped { batch: usize, reason: String },
}

/// Accumulated output of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport<R> {
    /// Results of the successful batches, in input order
    pub results: Vec<R>,
    /// Provider calls attempted, successful or not
    pub request_count: usize,
    pub outcomes: Vec<BatchOutcome>,
}

impl<R> BatchReport<R> {
    fn with_capacity(batches: usize) -> Self {
        Self {
            results: Vec::new(),
            request_count: 0,
            outcomes: Vec::with_capacity(batches),
        }
    }

    pub fn failed_batches(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, BatchOutcome::Skipped { .. }))
            .count()
    }
}

/// Splits items into fixed-size slices and embeds one slice per provider call
#[derive(Clone)]
pub struct BatchPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    pacer: Arc<dyn BatchPacer>,
    batch_size: NonZeroUsize,
}

impl BatchPipeline {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        pacer: Arc<dyn BatchPacer>,
        batch_size: NonZeroUsize,
    ) -> Self {
        Self {
            embedder,
            pacer,
            batch_size,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Embed `items` slice by slice.
    ///
    /// `text_of` picks the text to embed and `build` pairs an item with its
    /// vector. A slice whose call fails, or whose vector count differs from
    /// its item count, contributes nothing and does not stop the run.
    #[instrument(skip_all, fields(items = items.len(), batch_size = self.batch_size.get()))]
    pub async fn embed_batches<T, R, F, B>(
        &self,
        items: Vec<T>,
        text_of: F,
        build: B,
    ) -> BatchReport<R>
    where
        T: Send,
        R: Send,
        F: Fn(&T) -> &str + Send + Sync,
        B: Fn(T, Vec<f32>) -> R + Send + Sync,
    {
        let size = self.batch_size.get();
        let total_batches = items.len().div_ceil(size);
        let mut report = BatchReport::with_capacity(total_batches);
        let mut remaining = items.into_iter();

        for batch in 0..total_batches {
            if batch > 0 {
                self.pacer.pause().await;
            }

            let slice: Vec<T> = remaining.by_ref().take(size).collect();
            let texts: Vec<String> = slice.iter().map(|item| text_of(item).to_string()).collect();

            report.request_count += 1;
            let outcome = match self.embedder.embed_batch(&texts).await {
                Ok(vectors) if vectors.len() == slice.len() => {
                    let items = slice.len();
                    report.results.extend(
                        slice
                            .into_iter()
                            .zip(vectors)
                            .map(|(item, vector)| build(item, vector)),
                    );
                    debug!(batch, total_batches, items, "Batch embedded");
                    BatchOutcome::Embedded { batch, items }
                }
                Ok(vectors) => BatchOutcome::Skipped {
                    batch,
                    reason: format!(
                        "provider returned {} embeddings for {} inputs",
                        vectors.len(),
                        slice.len()
                    ),
                },
                Err(err) => BatchOutcome::Skipped {
                    batch,
                    reason: err.to_string(),
                },
            };

            if let BatchOutcome::Skipped { batch, reason } = &outcome {
                error!(batch, total_batches, reason = %reason, "Embedding batch failed, skipping");
            }
            report.outcomes.push(outcome);
        }

        info!(
            embedded = report.results.len(),
            requests = report.request_count,
            failed_batches = report.failed_batches(),
            "Embedding pipeline finished"
        );
        report
    }
}
