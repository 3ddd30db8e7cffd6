use serde::{Deserialize, Serialize};

/// Default `page` when the caller sends none.
pub const DEFAULT_PAGE: &str = "1";

/// One movie as listed by TMDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// One page of the TMDB top-rated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRatedPage {
    pub page: u32,
    pub results: Vec<TmdbMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl TopRatedPage {
    /// One line per movie: `"{title} ({release_date}): {overview}"`
    pub fn flatten(&self) -> String {
        self.results
            .iter()
            .map(|movie| {
                format!(
                    "{} ({}): {}",
                    movie.title, movie.release_date, movie.overview
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn formatted(self) -> Vec<TopRatedMovie> {
        self.results.into_iter().map(TopRatedMovie::from).collect()
    }
}

/// Structured movie returned by `/top-rated-movies-formatted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRatedMovie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

impl From<TmdbMovie> for TopRatedMovie {
    fn from(movie: TmdbMovie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            release_date: movie.release_date,
            poster_path: movie.poster_path,
            vote_average: movie.vote_average,
        }
    }
}

/// Subset of `GET /movie/{id}` used for poster lookups
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// `?page=` query, forwarded raw. A repeated `page` keeps its first value
/// and unrelated parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct PageQuery {
    pub page: Option<String>,
}

impl From<Vec<(String, String)>> for PageQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Self { page }
    }
}

impl PageQuery {
    pub fn page_or_default(&self) -> &str {
        match self.page.as_deref() {
            Some(page) if !page.trim().is_empty() => page,
            _ => DEFAULT_PAGE,
        }
    }
}

/// Response of `/top-rated-movies`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenedMovies {
    pub movies: String,
}

/// Response of `/top-rated-movies-formatted`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedMovies {
    pub movies: Vec<TopRatedMovie>,
}
