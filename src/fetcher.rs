use log::{debug, info};
use std::path::PathBuf;

use crate::clients::{
    ChartmetricClient, CsvStore,
    chartmetric::StatResponse,
    entities::{Artist, Source},
    errors::Result,
};

// Configuration for the Fetcher struct
pub struct Config {
    pub client: ChartmetricClient,
    pub store: CsvStore,
}

pub struct ConfigBuilder {
    token: String,
    api_url: Option<String>,
    data_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: None,  // CHARTMETRIC_API_URL or the public API
            data_dir: None, // ARTIST_DATA_DIR or the ATLSE layout
        }
    }

    #[must_use]
    pub fn api_url(mut self, url: Option<String>) -> Self {
        self.api_url = url;
        self
    }

    #[must_use]
    pub fn data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.data_dir = dir;
        self
    }

    pub fn build(self) -> Result<Config> {
        let client = match self.api_url {
            Some(url) => ChartmetricClient::new(self.token, url),
            None => ChartmetricClient::try_default(self.token)?,
        };
        let store = match self.data_dir {
            Some(dir) => CsvStore::new(dir),
            None => CsvStore::try_default()?,
        };
        Ok(Config { client, store })
    }
}

/// What a single fetch did.
#[derive(Debug)]
pub enum Outcome {
    Appended { path: PathBuf, fragments: usize },
    Rejected { source: Source, artist: Artist },
}

impl Outcome {
    // Line printed to stdout when the API turns a request down
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Outcome::Rejected { source, artist } => Some(format!(
                "[{source}] Error occurred with artist: {} (id: {})",
                artist.name, artist.id
            )),
            Outcome::Appended { .. } => None,
        }
    }
}

pub struct Fetcher {
    config: Config,
}

impl Fetcher {
    pub fn new(config: Config) -> Self {
        Fetcher { config }
    }

    pub async fn fetch(&self, artist: &Artist, source: Source) -> Result<Outcome> {
        info!("Fetching {source} stats for {} ({})", artist.name, artist.id);
        let response = self.config.client.get_artist_stat(artist, source).await?;

        match response {
            StatResponse::Accepted { body, .. } => {
                let fragments = self
                    .config
                    .store
                    .append_response(artist, source, &body)
                    .await?;
                let path = self.config.store.path_for(artist, source);
                info!("Appended {fragments} rows to {path:?}");
                Ok(Outcome::Appended { path, fragments })
            }
            StatResponse::Rejected { status, .. } => {
                debug!("Skipping write, Chartmetric answered {status}");
                Ok(Outcome::Rejected {
                    source,
                    artist: artist.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_diagnostic_names_source_artist_and_id() {
        let outcome = Outcome::Rejected {
            source: Source::YoutubeArtist,
            artist: Artist::new("3380", "Some Band"),
        };
        assert_eq!(
            outcome.diagnostic().as_deref(),
            Some("[youtube_artist] Error occurred with artist: Some Band (id: 3380)")
        );
    }

    #[test]
    fn appended_has_no_diagnostic() {
        let outcome = Outcome::Appended {
            path: PathBuf::from("x.csv"),
            fragments: 1,
        };
        assert!(outcome.diagnostic().is_none());
    }

    #[test]
    fn explicit_settings_skip_environment() {
        let config = ConfigBuilder::new("token")
            .api_url(Some("http://127.0.0.1:9/api".into()))
            .data_dir(Some(PathBuf::from("/srv/artists")))
            .build()
            .unwrap();
        let artist = Artist::new("1", "band");
        assert_eq!(
            config.store.path_for(&artist, Source::Tiktok),
            PathBuf::from("/srv/artists/band/tiktok.csv")
        );
        assert_eq!(
            config
                .client
                .stat_url(&artist.id, Source::Tiktok)
                .unwrap()
                .as_str(),
            "http://127.0.0.1:9/api/artist/1/stat/tiktok/?since=2017-01-01&interpolated=true"
        );
    }
}
