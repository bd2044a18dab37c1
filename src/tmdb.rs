use crate::cache::ResponseCache;
use crate::config::Config;
use crate::models::{ApiResponse, Movie, MovieDetail};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("TMDB configuration error: {0}")]
    Config(String),
    #[error("Failed to fetch from TMDB: {status_text}")]
    Fetch { status: u16, status_text: String },
    #[error("Movie '{0}' not found on TMDB")]
    NotFound(String),
    #[error("Failed to fetch from TMDB: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to fetch from TMDB: invalid JSON from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TmdbError::NotFound(_))
    }
}

pub type TmdbResult<T> = std::result::Result<T, TmdbError>;

#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch_popular(&self) -> TmdbResult<ApiResponse<Movie>>;
    async fn fetch_now_playing(&self) -> TmdbResult<ApiResponse<Movie>>;
    async fn fetch_top_rated(&self) -> TmdbResult<ApiResponse<Movie>>;
    async fn fetch_movie_by_id(&self, id: &str) -> TmdbResult<MovieDetail>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    cache: ResponseCache,
}

impl TmdbClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        cache: ResponseCache,
    ) -> TmdbResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TmdbError::Config(
                "TMDB_API_KEY is not set in environment variables".to_string(),
            ));
        }
        let user_agent = format!("streamflix/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .map_err(|e| TmdbError::Config(format!("Failed to build TMDB HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            cache,
        })
    }

    pub fn from_config(config: &Config) -> TmdbResult<Self> {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            ResponseCache::in_memory(config.revalidate),
        )
    }

    /// GET `path` under the base URL with the credential attached. Fresh
    /// cached bodies short-circuit the request; only successful bodies that
    /// parse are stored.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TmdbResult<T> {
        if let Some(body) = self.cache.fresh(path).await {
            debug!(path, "TMDB cache hit");
            return parse_body(path, &body);
        }

        debug!(path, "TMDB request");
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| TmdbError::Transport(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string();
            warn!(path, status = status.as_u16(), "TMDB returned {}", status_text);
            return Err(TmdbError::Fetch {
                status: status.as_u16(),
                status_text,
            });
        }

        let text = res
            .text()
            .await
            .map_err(|e| TmdbError::Transport(e.without_url()))?;
        let parsed = parse_body(path, &text)?;
        self.cache.store(path, &text).await;
        Ok(parsed)
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch_popular(&self) -> TmdbResult<ApiResponse<Movie>> {
        self.get_json("/movie/popular").await
    }

    async fn fetch_now_playing(&self) -> TmdbResult<ApiResponse<Movie>> {
        self.get_json("/movie/now_playing").await
    }

    async fn fetch_top_rated(&self) -> TmdbResult<ApiResponse<Movie>> {
        self.get_json("/movie/top_rated").await
    }

    async fn fetch_movie_by_id(&self, id: &str) -> TmdbResult<MovieDetail> {
        let path = format!("/movie/{}", urlencoding::encode(id));
        match self.get_json(&path).await {
            Err(TmdbError::Fetch { status: 404, .. }) => Err(TmdbError::NotFound(id.to_string())),
            other => other,
        }
    }
}

fn parse_body<T: DeserializeOwned>(path: &str, body: &str) -> TmdbResult<T> {
    serde_json::from_str(body).map_err(|source| TmdbError::Parse {
        path: path.to_string(),
        source,
    })
}

/// The three category listings shown on the home page.
#[derive(Debug, Clone)]
pub struct HomeListings {
    pub popular: ApiResponse<Movie>,
    pub now_playing: ApiResponse<Movie>,
    pub top_rated: ApiResponse<Movie>,
}

/// Fetches all three listings concurrently. Any single failure fails the
/// whole call; no partial listings are returned.
pub async fn fetch_home_listings(api: &dyn TmdbApi) -> TmdbResult<HomeListings> {
    let (popular, now_playing, top_rated) = tokio::try_join!(
        api.fetch_popular(),
        api.fetch_now_playing(),
        api.fetch_top_rated(),
    )?;
    Ok(HomeListings {
        popular,
        now_playing,
        top_rated,
    })
}
