use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::clients::{
    entities::{Artist, ArtistId, Source, StatQuery},
    errors::{Error, Result},
};

pub const DEFAULT_API_URL: &str = "https://api.chartmetric.com/api";

// Shape of the JSON body Chartmetric returns alongside 4xx/5xx statuses
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: String,
}

/// Raw outcome of a stat request. Anything below 400 counts as accepted.
#[derive(Debug)]
pub enum StatResponse {
    Accepted { body: String },
    Rejected { status: StatusCode, body: String },
}

impl StatResponse {
    fn from_parts(status: StatusCode, body: String) -> Self {
        if status.as_u16() < 400 {
            StatResponse::Accepted { body }
        } else {
            StatResponse::Rejected { status, body }
        }
    }

    // Upstream error message, if the rejected body carries one
    pub fn api_error(&self) -> Option<String> {
        match self {
            StatResponse::Rejected { body, .. } => serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .map(|b| b.error),
            StatResponse::Accepted { .. } => None,
        }
    }
}

pub struct ChartmetricClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
    query: StatQuery,
}

impl ChartmetricClient {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        ChartmetricClient {
            http: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            query: StatQuery::default(),
        }
    }

    // Create a client for the given token, taking the API root from the environment if set
    pub fn try_default(token: impl Into<String>) -> Result<Self> {
        let base_url = match std::env::var("CHARTMETRIC_API_URL") {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_API_URL.to_string(),
            Err(err) => return Err(Error::from(err)),
        };
        // Fail early on a malformed root instead of on the first request
        Url::parse(&base_url)?;
        Ok(Self::new(token, base_url))
    }

    pub fn stat_url(&self, id: &ArtistId, source: Source) -> Result<Url> {
        let raw = format!("{}/artist/{id}/stat/{source}/", self.base_url);
        let url = Url::parse_with_params(&raw, self.query.pairs())?;
        Ok(url)
    }

    pub async fn get_artist_stat(&self, artist: &Artist, source: Source) -> Result<StatResponse> {
        let url = self.stat_url(&artist.id, source)?;
        debug!("GET {}", url.path());

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Chartmetric answered {status} with {} bytes", body.len());

        let stat = StatResponse::from_parts(status, body);
        if let Some(message) = stat.api_error() {
            warn!("Chartmetric rejected {source} request for {}: {message}", artist.id);
        }
        Ok(stat)
    }
}
