mod catalog;
mod tmdb;

pub use catalog::MovieCatalog;
pub use tmdb::TmdbClient;

#[cfg(test)]
pub use catalog::MockMovieCatalog;
