use crate::gtfs::{self, Field};
use csv::{ReaderBuilder, StringRecord};
use std::{collections::HashMap, io::Read};
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One data row of a table, keyed by recognized field name.
///
/// Columns missing from the header, ignored by the header, or cut off by a short
/// row are absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(HashMap<&'static str, String>);

impl Row {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// The raw value of `field`, or an empty string when it is absent.
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&'static str, &str); N]> for Row {
    fn from(value: [(&'static str, &str); N]) -> Self {
        Self(
            value
                .into_iter()
                .map(|(field, value)| (field, value.to_string()))
                .collect(),
        )
    }
}

/// Reads a header row followed by data rows, keeping only the columns named in `fields`.
///
/// In strict mode an unrecognized header column or a row longer than the header
/// is an error. In lenient mode such values are dropped. Whether a field is
/// required is not checked here.
pub fn read_rows<R: Read>(
    reader: R,
    fields: &'static [Field],
    strict: bool,
) -> Result<Vec<Row>, gtfs::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(header) => header?,
        None => return Err(gtfs::Error::MissingHeader),
    };
    let columns = columns(&header, fields, strict)?;

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.len() > columns.len() {
            if strict {
                return Err(gtfs::Error::TooManyFields(columns.len() + 1));
            }
            debug!(
                "Dropping {} trailing values in row {}",
                record.len() - columns.len(),
                rows.len() + 1
            );
        }

        let row: HashMap<&'static str, String> = columns
            .iter()
            .zip(record.iter())
            .filter_map(|(column, value)| column.map(|name| (name, value.to_string())))
            .collect();
        rows.push(Row(row));
    }
    Ok(rows)
}

fn columns(
    header: &StringRecord,
    fields: &'static [Field],
    strict: bool,
) -> Result<Vec<Option<&'static str>>, gtfs::Error> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = if i == 0 {
                name.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                name
            };
            match fields.iter().find(|field| field.name == name) {
                Some(field) => Ok(Some(field.name)),
                None if strict => Err(gtfs::Error::UnknownField(name.to_string())),
                None => {
                    debug!("Ignoring unknown field {name}");
                    Ok(None)
                }
            }
        })
        .collect()
}
