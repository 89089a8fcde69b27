use std::{
    fs::File,
    io::{self, Read, Seek},
    path::Path,
};
use thiserror::Error;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod parse;
pub mod reader;
mod table;
pub use config::*;
pub use reader::{Row, read_rows};
pub use table::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Csv file is missing header")]
    MissingHeader,
    #[error("no {0} file found")]
    MissingFile(&'static str),
    #[error("either calendar.txt or calendar_dates.txt is required")]
    MissingCalendar,
    #[error("invalid field: {0}")]
    UnknownField(String),
    #[error("unexpected number of fields in row: {0}")]
    TooManyFields(usize),
    #[error("invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
    #[error("unknown {field}: {id}")]
    UnknownReference { field: &'static str, id: String },
    #[error("no agency_id specified, but there are {0} agencies")]
    AmbiguousAgency(usize),
    #[error("agency IDs must be specified when there is more than one agency")]
    AgencyIdRequired,
    #[error("stop {stop_id} has parent station {parent_id} but is not a stop")]
    InvalidParentStation { stop_id: String, parent_id: String },
    #[error("expected only one row, but there are {0} rows")]
    RowCount(usize),
    #[error("error parsing {file}: {source}")]
    Table {
        file: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn unknown(field: &'static str, id: &str) -> Self {
        Self::UnknownReference {
            field,
            id: id.to_string(),
        }
    }

    /// Returns the innermost error, skipping any table context.
    pub fn root(&self) -> &Error {
        match self {
            Self::Table { source, .. } => source.root(),
            other => other,
        }
    }
}

/// An opened feed archive together with the parsing policy used to read it.
pub struct Gtfs<R> {
    archive: ZipArchive<R>,
    config: Config,
}

impl Gtfs<File> {
    pub fn open<P: AsRef<Path>>(path: P, config: Config) -> Result<Self, self::Error> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;
        Ok(Self::from_archive(archive, config))
    }
}

impl<R: Read + Seek> Gtfs<R> {
    pub fn from_archive(archive: ZipArchive<R>, config: Config) -> Self {
        Self { archive, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn contains(&self, table: Table) -> bool {
        self.archive.index_for_name(table.file_name()).is_some()
    }

    /// Reads every row of `table`. The archive member is released before returning.
    pub fn read_table(&mut self, table: Table) -> Result<Vec<Row>, self::Error> {
        let strict = self.config.strict;
        let file = get_file(&mut self.archive, table.file_name())?;
        read_rows(file, table.fields(), strict)
    }
}

fn get_file<'a, R: Read + Seek>(
    archive: &'a mut ZipArchive<R>,
    name: &'static str,
) -> Result<ZipFile<'a, R>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::MissingFile(name))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
