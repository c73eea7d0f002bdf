use std::time::Duration;

use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shelf_core::{MovieId, MovieRecord};
use shelf_logging::{shelf_debug, shelf_warn};
use url::Url;

use crate::{ClientError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The two calls the client makes against the library service.
#[async_trait::async_trait]
pub trait LibraryClient: Send + Sync {
    /// `GET /api/library`: every movie, in service order.
    async fn fetch_library(&self) -> Result<Vec<MovieRecord>, ClientError>;

    /// `POST /api/movies/{id}/refresh`: re-derive one movie's metadata and
    /// return the full replacement record.
    async fn refresh_movie(&self, movie_id: MovieId) -> Result<MovieRecord, ClientError>;
}

/// Error envelope the service sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ReqwestLibraryClient {
    settings: ClientSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestLibraryClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_slice(&body).map_err(|err| {
            ClientError::new(
                FailureKind::Decode,
                format!("malformed response body: {err}"),
            )
        })
    }
}

#[async_trait::async_trait]
impl LibraryClient for ReqwestLibraryClient {
    async fn fetch_library(&self) -> Result<Vec<MovieRecord>, ClientError> {
        let url = self.endpoint("api/library")?;
        shelf_debug!("GET {url}");
        let records: Vec<MovieRecord> = self.send_json(self.client.get(url)).await?;
        shelf_debug!("library returned {} movies", records.len());
        Ok(records)
    }

    async fn refresh_movie(&self, movie_id: MovieId) -> Result<MovieRecord, ClientError> {
        let url = self.endpoint(&format!("api/movies/{movie_id}/refresh"))?;
        shelf_debug!("POST {url}");
        let record: MovieRecord = self.send_json(self.client.post(url)).await?;
        if record.id != movie_id {
            shelf_warn!("refresh for movie {movie_id} returned record {}", record.id);
        }
        Ok(record)
    }
}

/// Parses the configured origin, making sure relative joins append to its
/// path instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut base =
        Url::parse(raw.trim()).map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(ClientError::new(
            FailureKind::InvalidUrl,
            format!("unsupported base url {raw}"),
        ));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn status_error(status: reqwest::StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|envelope| envelope.error.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| status.to_string());
    ClientError::new(FailureKind::HttpStatus(status.as_u16()), message)
}

fn too_large(max_bytes: u64, actual: u64) -> ClientError {
    ClientError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
