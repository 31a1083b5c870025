//! Whole-file assembly: one header, then one typed record per data row.
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::slice;
use std::time::Instant;

use log::{debug, warn};
use serde::{Serialize, Serializer};

use crate::agency::Agency;
use crate::calendar::Calendar;
use crate::config::{LoadOptions, RowErrorPolicy};
use crate::error::{FeedError, RowError, TransitError};
use crate::record::GtfsRecord;
use crate::route::Route;
use crate::schema::{FieldClass, FieldSchema, Header};
use crate::shape::Shape;
use crate::stop::Stop;
use crate::stop_time::StopTime;
use crate::tokenizer::split_records;
use crate::trip::Trip;

const BOM: char = '\u{feff}';

/// The records of one feed file, in file order, with the header they were read with.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R: GtfsRecord> {
    header: Header<R::Field>,
    records: Vec<R>,
    skipped: usize,
}

pub type Agencies = Collection<Agency>;
pub type Routes = Collection<Route>;
pub type Trips = Collection<Trip>;
pub type Calendars = Collection<Calendar>;
pub type Shapes = Collection<Shape>;
pub type Stops = Collection<Stop>;
pub type StopTimes = Collection<StopTime>;

impl<R: GtfsRecord> Default for Collection<R> {
    fn default() -> Self {
        Collection {
            header: Header::default(),
            records: vec![],
            skipped: 0,
        }
    }
}

impl<R: GtfsRecord> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the whole text of a file.
    ///
    /// Text with fewer than two records (no data rows) gives an empty collection.
    pub fn parse(text: &str, options: &LoadOptions) -> Result<Self, RowError> {
        let text = if options.strip_bom {
            text.strip_prefix(BOM).unwrap_or(text)
        } else {
            text
        };
        let rows = split_records(text);
        if rows.len() < 2 {
            return Ok(Collection::new());
        }

        let header: Header<R::Field> = Header::read(rows[0]).map_err(|e| RowError::new(1, e))?;
        let missing = header.missing(FieldClass::Required);
        if !missing.is_empty() {
            let names = missing.into_iter().map(FieldSchema::label).collect();
            return Err(RowError::new(1, TransitError::MissingRequiredFields(names)));
        }
        let mut collection = Collection {
            header,
            records: Vec::with_capacity(rows.len() - 1),
            skipped: 0,
        };
        for (index, row) in rows.iter().enumerate().skip(1) {
            match build_record::<R>(row, &collection.header, options) {
                Ok(record) => collection.records.push(record),
                Err(source) => {
                    let error = RowError::new(index + 1, source);
                    match options.on_row_error {
                        RowErrorPolicy::Abort => return Err(error),
                        RowErrorPolicy::SkipAndLog => {
                            warn!("{}: skipping {}", R::FILE_NAME, error);
                            collection.skipped += 1;
                        }
                    }
                }
            }
        }
        Ok(collection)
    }

    /// Reads and parses one file.
    pub fn load<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let file_name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| FeedError::Io {
            file_name: file_name.clone(),
            source,
        })?;
        let now = Instant::now();
        let collection =
            Self::parse(&text, options).map_err(|source| FeedError::Row { file_name, source })?;
        debug!(
            "{} time: {} ({} records)",
            R::FILE_NAME,
            now.elapsed().as_millis(),
            collection.len()
        );
        Ok(collection)
    }

    pub fn header(&self) -> &Header<R::Field> {
        &self.header
    }

    /// Data rows dropped under [`RowErrorPolicy::SkipAndLog`].
    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.records.get_mut(index)
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record)
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

fn build_record<R: GtfsRecord>(
    row: &str,
    header: &Header<R::Field>,
    options: &LoadOptions,
) -> Result<R, TransitError> {
    let record = R::from_row(row, header)?;
    if options.check_conditionally_required {
        let missing = record.missing_conditionally_required();
        if !missing.is_empty() {
            return Err(TransitError::MissingRequiredFields(missing));
        }
    }
    Ok(record)
}

impl<R: GtfsRecord> Index<usize> for Collection<R> {
    type Output = R;

    fn index(&self, index: usize) -> &R {
        &self.records[index]
    }
}

impl<R: GtfsRecord> IndexMut<usize> for Collection<R> {
    fn index_mut(&mut self, index: usize) -> &mut R {
        &mut self.records[index]
    }
}

impl<'a, R: GtfsRecord> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<R: GtfsRecord> IntoIterator for Collection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Collects records under an empty header.
impl<R: GtfsRecord> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Collection {
            header: Header::default(),
            records: iter.into_iter().collect(),
            skipped: 0,
        }
    }
}

/// Serialized as the plain sequence of records.
impl<R: GtfsRecord + Serialize> Serialize for Collection<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.records)
    }
}
