//! The generic per-row assembly step shared by every record kind.
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::coerce::is_blank;
use crate::error::TransitError;
use crate::schema::{FieldClass, FieldSchema, Header};
use crate::tokenizer::read_record;

/// Cells of nonstandard columns, keyed by column name.
pub type Extensions = BTreeMap<String, String>;

/// A record kind: its field catalog and how each field is written into the record.
pub trait GtfsRecord: Default + Sized {
    type Field: FieldSchema;

    /// The feed file holding records of this kind.
    const FILE_NAME: &'static str;

    /// Coerces `cell` and stores it in the attribute bound to `field`.
    ///
    /// Never called with the nonstandard field.
    fn assign(&mut self, field: Self::Field, cell: &str) -> Result<(), TransitError>;

    /// The catch-all attribute for nonstandard columns, if this kind keeps them.
    fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        None
    }

    /// Names of the conditionally required fields this record alone shows to be missing.
    fn missing_conditionally_required(&self) -> Vec<&'static str> {
        vec![]
    }

    fn has_conditionally_required_fields(&self) -> bool {
        self.missing_conditionally_required().is_empty()
    }

    /// Builds a record from already tokenized cells.
    fn from_cells<S: AsRef<str>>(
        cells: &[S],
        header: &Header<Self::Field>,
    ) -> Result<Self, TransitError> {
        if cells.len() != header.len() {
            return Err(TransitError::HeaderRecordMismatch {
                header: header.len(),
                record: cells.len(),
            });
        }

        let mut record = Self::default();
        for (index, (&field, cell)) in header.fields().iter().zip_eq(cells).enumerate() {
            let cell = cell.as_ref();
            if field.is_nonstandard() {
                if let (Some(extensions), Some(column)) =
                    (record.extensions_mut(), header.column_name(index))
                {
                    extensions.insert(column.to_owned(), cell.to_owned());
                }
                continue;
            }
            record.assign(field, cell)?;
        }

        // absent columns are a header problem, see `Header::missing`.
        // A field may own several columns; any blank one counts.
        let missing = Self::Field::with_class(FieldClass::Required)
            .into_iter()
            .filter(|&field| {
                header
                    .fields()
                    .iter()
                    .zip(cells)
                    .any(|(&f, cell)| f == field && is_blank(cell.as_ref()))
            })
            .map(FieldSchema::label)
            .collect::<Vec<&'static str>>();
        if !missing.is_empty() {
            return Err(TransitError::MissingRequiredFields(missing));
        }

        Ok(record)
    }

    /// Tokenizes one data record and builds it.
    fn from_row(row: &str, header: &Header<Self::Field>) -> Result<Self, TransitError> {
        Self::from_cells(&read_record(row)?, header)
    }
}
