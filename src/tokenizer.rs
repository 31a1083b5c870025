//! Splits the text of a feed file into records, and records into cells.
//!
//! Quoting follows RFC 4180: a cell starting with `"` runs until the matching
//! unescaped `"`, may contain commas and line breaks, and `""` stands for one `"`.
//! Nothing here keeps state between calls.
use std::borrow::Cow;

use itertools::Itertools;

use crate::error::TransitError;

#[derive(Clone, Copy, PartialEq)]
enum State {
    CellStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Splits `text` into logical records.
///
/// A record ends at `\n`, `\r\n` or `\r` unless the line break is inside a quoted cell.
/// Zero-length records (blank lines, the trailing newline) are dropped.
pub fn split_records(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut state = State::CellStart;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        state = match (state, b) {
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::CellStart, b'"') => State::Quoted,
            (_, b',') => State::CellStart,
            (_, b'\n') | (_, b'\r') => {
                if i > start {
                    records.push(&text[start..i]);
                }
                if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
                State::CellStart
            }
            _ => State::Unquoted,
        };
        i += 1;
    }
    if start < bytes.len() {
        records.push(&text[start..]);
    }
    records
}

/// Lazily yields the cells of one record.
///
/// Cells without escaped quotes are borrowed from the record text. After the first
/// error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    row: &'a str,
    pos: usize,
    done: bool,
}

/// Iterates over the cells of `row`. A zero-length row yields zero cells.
pub fn cells(row: &str) -> Cells<'_> {
    Cells {
        row,
        pos: 0,
        done: row.is_empty(),
    }
}

impl<'a> Cells<'a> {
    fn quoted(&mut self, start: usize) -> Result<Cow<'a, str>, TransitError> {
        let bytes = self.row.as_bytes();
        let mut unescaped: Option<String> = None;
        let mut segment = start + 1;
        let mut i = start + 1;

        let close = loop {
            match bytes.get(i) {
                None => {
                    self.done = true;
                    return Err(TransitError::QuoteExpected);
                }
                Some(b'"') if bytes.get(i + 1) == Some(&b'"') => {
                    // keep the first quote of the pair, skip the second
                    unescaped
                        .get_or_insert_with(String::new)
                        .push_str(&self.row[segment..=i]);
                    i += 2;
                    segment = i;
                }
                Some(b'"') => break i,
                Some(_) => i += 1,
            }
        };

        let cell = match unescaped {
            Some(mut owned) => {
                owned.push_str(&self.row[segment..close]);
                Cow::Owned(owned)
            }
            None => Cow::Borrowed(&self.row[start + 1..close]),
        };

        match bytes.get(close + 1) {
            None => self.done = true,
            Some(b',') => self.pos = close + 2,
            Some(_) => {
                self.done = true;
                return Err(TransitError::CommaExpected(close + 1));
            }
        }
        Ok(cell)
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = Result<Cow<'a, str>, TransitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.pos;
        if self.row.as_bytes().get(start) == Some(&b'"') {
            return Some(self.quoted(start));
        }
        let cell = match self.row[start..].find(',') {
            Some(offset) => {
                self.pos = start + offset + 1;
                &self.row[start..start + offset]
            }
            None => {
                self.done = true;
                &self.row[start..]
            }
        };
        Some(Ok(Cow::Borrowed(cell)))
    }
}

/// Reads every cell of `row`.
///
/// Unlike [`cells`], a zero-length row is an error: there is nothing to interpret as a record.
pub fn read_record(row: &str) -> Result<Vec<Cow<'_, str>>, TransitError> {
    if row.is_empty() {
        return Err(TransitError::EmptySubstring);
    }
    cells(row).collect()
}

/// Quotes `cell` if it would otherwise not survive [`read_record`] unchanged.
pub fn quote_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains(|c: char| matches!(c, ',' | '"' | '\r' | '\n')) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Writes one record, quoting the cells that need it.
pub fn write_record<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|cell| quote_cell(cell.as_ref()).into_owned())
        .join(",")
}
