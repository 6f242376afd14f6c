//! JSON persistence shared by stats and game trees

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or saving persisted state
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!("loaded {}", path.display());
    Ok(value)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let write_error = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(write_error)?;

    info!("saved {}", path.display());
    Ok(())
}
