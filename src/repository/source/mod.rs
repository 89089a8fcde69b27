use std::{
    fs::File,
    io::{Read, Seek},
    path::Path,
};

use zip::ZipArchive;

use crate::{
    gtfs::{Config, Error, Gtfs},
    repository::Repository,
};

mod gtfs;

impl Repository {
    /// Loads a feed from a zip file on disk using lenient parsing.
    pub fn from_zip<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_zip_with_config(path, Config::default())
    }

    pub fn from_zip_with_config<P: AsRef<Path>>(
        path: P,
        config: Config,
    ) -> Result<Self, Error> {
        let mut gtfs: Gtfs<File> = Gtfs::open(path, config)?;
        Self::from_gtfs(&mut gtfs)
    }

    /// Loads a feed from an already opened archive using lenient parsing.
    pub fn from_archive<R: Read + Seek>(archive: ZipArchive<R>) -> Result<Self, Error> {
        Self::from_archive_with_config(archive, Config::default())
    }

    pub fn from_archive_with_config<R: Read + Seek>(
        archive: ZipArchive<R>,
        config: Config,
    ) -> Result<Self, Error> {
        let mut gtfs = Gtfs::from_archive(archive, config);
        Self::from_gtfs(&mut gtfs)
    }

    fn from_gtfs<R: Read + Seek>(gtfs: &mut Gtfs<R>) -> Result<Self, Error> {
        let mut repository = Self::new();
        repository.load(gtfs)?;
        Ok(repository)
    }
}
