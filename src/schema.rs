//! Field catalogs and header resolution.
//!
//! Every record kind has a closed enum of fields implementing [`FieldSchema`]. A file's
//! first record is resolved once into a [`Header`], and from then on data records are
//! matched to fields by position only.
use std::fmt;
use std::hash::Hash;

use log::trace;

use crate::error::TransitError;
use crate::tokenizer::read_record;

/// How a field of a record kind is classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldClass {
    Required,
    /// Required depending on other values, possibly in other records or files.
    ConditionallyRequired,
    Optional,
    /// A column whose name is not in the catalog.
    Nonstandard,
}

/// The catalog of fields of one record kind.
pub trait FieldSchema: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every field with a canonical name, in the order of the GTFS reference.
    const ALL: &'static [Self];
    /// Absorbs every column that is not in [`FieldSchema::ALL`].
    const NONSTANDARD: Self;

    /// The header text this field matches, `None` for the nonstandard field.
    fn name(self) -> Option<&'static str>;

    fn class(self) -> FieldClass;

    fn label(self) -> &'static str {
        self.name().unwrap_or("nonstandard")
    }

    fn is_nonstandard(self) -> bool {
        self == Self::NONSTANDARD
    }

    /// Resolves a column name. Unknown names never fail, they resolve to the nonstandard field.
    fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == Some(name))
            .unwrap_or(Self::NONSTANDARD)
    }

    fn with_class(class: FieldClass) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|f| f.class() == class)
            .collect()
    }
}

/// The fields of one file, in column order, with the column names they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<F> {
    fields: Vec<F>,
    columns: Vec<String>,
}

impl<F> Default for Header<F> {
    fn default() -> Self {
        Header {
            fields: vec![],
            columns: vec![],
        }
    }
}

impl<F: FieldSchema> Header<F> {
    pub fn from_names<I, S>(names: I) -> Header<F>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut header = Header::default();
        for name in names {
            let name = name.as_ref().trim();
            let field = F::from_name(name);
            if field.is_nonstandard() {
                trace!("nonstandard column '{}'", name);
            }
            header.fields.push(field);
            header.columns.push(name.to_owned());
        }
        header
    }

    /// Resolves the header record of a file.
    pub fn read(row: &str) -> Result<Header<F>, TransitError> {
        Ok(Header::from_names(read_record(row)?))
    }

    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The name of the column at `index` as written in the file.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Position of the first column resolved to `field`.
    pub fn position(&self, field: F) -> Option<usize> {
        self.fields.iter().position(|&f| f == field)
    }

    pub fn contains(&self, field: F) -> bool {
        self.position(field).is_some()
    }

    /// Fields of `class` that have no column in this header.
    pub fn missing(&self, class: FieldClass) -> Vec<F> {
        F::with_class(class)
            .into_iter()
            .filter(|&f| !self.contains(f))
            .collect()
    }

    /// Names of the columns that resolved to the nonstandard field.
    pub fn nonstandard_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields
            .iter()
            .zip(self.columns.iter())
            .filter(|(f, _)| f.is_nonstandard())
            .map(|(_, c)| c.as_str())
    }
}
