use std::fmt;

use clap::ValueEnum;

/// Chartmetric artist identifier, kept as the caller passed it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtistId(pub String);

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String, // used as a directory name under the data dir
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Artist {
            id: ArtistId(id.into()),
            name: name.into(),
        }
    }
}

/// Statistic streams exposed under `/artist/{id}/stat/{source}/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Source {
    Deezer,
    Instagram,
    Soundcloud,
    Spotify,
    Tiktok,
    Twitter,
    YoutubeChannel,
    #[default]
    YoutubeArtist,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Deezer => "deezer",
            Source::Instagram => "instagram",
            Source::Soundcloud => "soundcloud",
            Source::Spotify => "spotify",
            Source::Tiktok => "tiktok",
            Source::Twitter => "twitter",
            Source::YoutubeChannel => "youtube_channel",
            Source::YoutubeArtist => "youtube_artist",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query string sent with every stat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatQuery {
    pub since: &'static str,
    pub interpolated: bool,
}

impl Default for StatQuery {
    fn default() -> Self {
        StatQuery {
            since: "2017-01-01",
            interpolated: true,
        }
    }
}

impl StatQuery {
    pub fn pairs(&self) -> [(&'static str, &'static str); 2] {
        [
            ("since", self.since),
            ("interpolated", if self.interpolated { "true" } else { "false" }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_youtube_artist() {
        assert_eq!(Source::default(), Source::YoutubeArtist);
        assert_eq!(Source::default().to_string(), "youtube_artist");
    }

    #[test]
    fn cli_names_match_wire_labels() {
        for source in Source::value_variants() {
            let name = source.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(source.as_str()));
        }
    }

    #[test]
    fn default_query_pairs() {
        assert_eq!(
            StatQuery::default().pairs(),
            [("since", "2017-01-01"), ("interpolated", "true")]
        );
    }
}
