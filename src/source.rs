//! Two-column CSV source reading
//!
//! A source is a UTF-8 comma-separated file whose first record is a header
//! naming a `key` and (optionally) a `value` column. Quoting follows the usual
//! CSV conventions and is enforced strictly: malformed quoting is an error,
//! never silently repaired.

use crate::error::{Error, ParseErrorKind, Result};
use std::fs;
use std::path::Path;

pub const KEY_COLUMN: &str = "key";
pub const VALUE_COLUMN: &str = "value";

const UTF8_BOM: char = '\u{feff}';

/// One data row as read from a source, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line where the record starts.
    pub line: usize,
    pub key: String,
    /// `None` when the row has no `value` cell at all.
    pub value: Option<String>,
}

/// Read every data row from `path`.
///
/// Returns `Ok(None)` when the file does not exist; absence is an expected
/// layering case, not a failure. Any other read failure is an [`Error::Io`].
pub fn read_source(path: &Path) -> Result<Option<Vec<RawRow>>> {
    if !path.exists() {
        tracing::debug!("Skipping missing source {}", path.display());
        return Ok(None);
    }
    let bytes =
        fs::read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        Error::parse(path, line, ParseErrorKind::InvalidUtf8)
    })?;

    let rows = parse_rows(&content, path)?;
    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(Some(rows))
}

/// Parse already-decoded source text. `path` is only used in error reports.
pub fn parse_rows(content: &str, path: &Path) -> Result<Vec<RawRow>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let records =
        split_records(content).map_err(|(line, kind)| Error::parse(path, line, kind))?;

    let mut records = records.into_iter();
    let Some(header) = records.next() else {
        return Ok(Vec::new());
    };

    let key_idx = header
        .fields
        .iter()
        .position(|h| h == KEY_COLUMN)
        .ok_or_else(|| Error::parse(path, header.line, ParseErrorKind::MissingKeyColumn))?;
    let value_idx = header.fields.iter().position(|h| h == VALUE_COLUMN);

    records
        .map(|mut record| {
            let key = record
                .fields
                .get_mut(key_idx)
                .filter(|k| !k.is_empty())
                .map(std::mem::take)
                .ok_or_else(|| Error::parse(path, record.line, ParseErrorKind::MissingKey))?;
            let value = value_idx.and_then(|i| record.fields.get_mut(i)).map(std::mem::take);
            Ok(RawRow { line: record.line, key, value })
        })
        .collect()
}

#[derive(Debug)]
struct Record {
    line: usize,
    fields: Vec<String>,
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

type Malformed = (usize, ParseErrorKind);

/// Split text into records of fields. Blank lines produce no record.
fn split_records(content: &str) -> std::result::Result<Vec<Record>, Malformed> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    loop {
        let c = chars.next();

        // CRLF collapses onto the LF that follows
        if c == Some('\r') && chars.peek() == Some(&'\n') && !matches!(state, State::Quoted) {
            continue;
        }

        match (state, c) {
            (State::FieldStart, None) => {
                if !fields.is_empty() {
                    fields.push(String::new());
                    records.push(Record { line: record_line, fields });
                }
                break;
            }
            (State::FieldStart, Some('\n')) => {
                if !fields.is_empty() {
                    fields.push(String::new());
                    records.push(Record { line: record_line, fields: std::mem::take(&mut fields) });
                }
                line += 1;
                record_line = line;
            }
            (State::FieldStart, Some(',')) => fields.push(String::new()),
            (State::FieldStart, Some('"')) => state = State::Quoted,
            (State::FieldStart, Some(ch)) => {
                field.push(ch);
                state = State::Unquoted;
            }

            (State::Unquoted | State::QuoteInQuoted, None) => {
                fields.push(std::mem::take(&mut field));
                records.push(Record { line: record_line, fields });
                break;
            }
            (State::Unquoted | State::QuoteInQuoted, Some(',')) => {
                fields.push(std::mem::take(&mut field));
                state = State::FieldStart;
            }
            (State::Unquoted | State::QuoteInQuoted, Some('\n')) => {
                fields.push(std::mem::take(&mut field));
                records.push(Record { line: record_line, fields: std::mem::take(&mut fields) });
                line += 1;
                record_line = line;
                state = State::FieldStart;
            }
            (State::Unquoted, Some('"')) => return Err((line, ParseErrorKind::StrayQuote)),
            (State::Unquoted, Some(ch)) => field.push(ch),

            (State::Quoted, None) => return Err((record_line, ParseErrorKind::UnclosedQuote)),
            (State::Quoted, Some('"')) => state = State::QuoteInQuoted,
            (State::Quoted, Some(ch)) => {
                if ch == '\n' {
                    line += 1;
                }
                field.push(ch);
            }

            (State::QuoteInQuoted, Some('"')) => {
                field.push('"');
                state = State::Quoted;
            }
            (State::QuoteInQuoted, Some(_)) => {
                return Err((line, ParseErrorKind::TrailingAfterQuote));
            }
        }
    }

    Ok(records)
}
