use log::debug;
use std::path::PathBuf;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::clients::{
    entities::{Artist, Source},
    errors::{Error, Result},
};

pub const DEFAULT_DATA_DIR: &str = "../../../dev/projects/ATLSE/artist_data/artists";

// Splits a raw response on ',' and terminates every fragment with ",\n"
pub fn fragments(body: &str) -> (String, usize) {
    let mut out = String::with_capacity(body.len() + body.len() / 4);
    let mut count = 0;
    for fragment in body.split(',') {
        out.push_str(fragment);
        out.push_str(",\n");
        count += 1;
    }
    (out, count)
}

/// Per-artist CSV files laid out as `{root}/{artist}/{source}.csv`.
///
/// Files are only ever appended to. Artist directories must already exist,
/// a missing one is reported as a storage error.
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CsvStore { root: root.into() }
    }

    pub fn try_default() -> Result<Self> {
        let root = match std::env::var("ARTIST_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(std::env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_DIR),
            Err(err) => return Err(Error::from(err)),
        };
        debug!("Using artist data directory {root:?}");
        Ok(CsvStore { root })
    }

    pub fn path_for(&self, artist: &Artist, source: Source) -> PathBuf {
        // A leading separator would make join() replace the root
        let name = artist.name.trim_start_matches(['/', '\\']);
        self.root
            .join(name)
            .join(format!("{}.csv", source.as_str()))
    }

    // Appends the split response and returns how many fragments were written
    pub async fn append_response(&self, artist: &Artist, source: Source, body: &str) -> Result<usize> {
        let path = self.path_for(artist, source);
        let storage_err = |err| Error::StorageError {
            path: path.clone(),
            source: err,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await
            .map_err(storage_err)?;

        let (rows, count) = fragments(body);
        file.write_all(rows.as_bytes()).await.map_err(storage_err)?;
        file.flush().await.map_err(storage_err)?;

        debug!("Appended {count} fragments to {path:?}");
        Ok(count)
    }
}
