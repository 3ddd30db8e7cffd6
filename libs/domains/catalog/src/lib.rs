//! Movie Catalog Domain Library
//!
//! Read-only access to the TMDB movie catalog: the paginated top-rated
//! listing and single-movie poster lookups.
//!
//! ```text
//! CatalogService ──► MovieCatalog (trait) ──► TmdbClient ──► api.themoviedb.org
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use client::{MovieCatalog, TmdbClient};
pub use config::TmdbConfig;
pub use error::{CatalogError, CatalogResult};
pub use models::{TmdbMovie, TopRatedMovie, TopRatedPage};
pub use service::CatalogService;
