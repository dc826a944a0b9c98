use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Dir(PathBuf),
    Zip(PathBuf),
}

/// Streams raw catalog records out of a data directory or a zipped bundle.
/// Rows that fail to deserialize are skipped, not fatal.
#[derive(Default)]
pub struct Source {
    config: Config,
    storage: StorageType,
}

impl Source {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_dir(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Dir(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    pub fn stream_buses<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, RawBus)),
    {
        self.stream::<RawBus, F>(&self.config.buses_path, true, f)
    }

    /// The locations file is optional: coordinates only feed display paths,
    /// so a catalog without them still loads.
    pub fn stream_locations<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, RawLocation)),
    {
        self.stream::<RawLocation, F>(&self.config.locations_path, false, f)
    }

    fn stream<T, F>(&self, file_name: &str, required: bool, f: F) -> Result<(), self::Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Dir(path) => {
                let file_path = path.join(file_name);
                if !file_path.exists() {
                    if required {
                        return Err(self::Error::FileNotFound(file_name.to_string()));
                    }
                    debug!("Skipping missing file {file_name}");
                    return Ok(());
                }
                stream_records(File::open(file_path)?, f)
            }
            StorageType::Zip(path) => {
                let zip_file = File::open(path)?;
                let mut archive = ZipArchive::new(zip_file)?;
                let Some(index) = archive.index_for_name(file_name) else {
                    if required {
                        return Err(self::Error::FileNotFound(file_name.to_string()));
                    }
                    debug!("Skipping missing file {file_name}");
                    return Ok(());
                };
                stream_records(archive.by_index(index)?, f)
            }
        }
    }
}

fn stream_records<R, T, F>(reader: R, f: F) -> Result<(), self::Error>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize()
        .filter_map(|record| record.ok())
        .enumerate()
        .for_each(f);
    Ok(())
}
