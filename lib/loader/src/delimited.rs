//! Delimited text tables (CSV, TSV, ...).
//!
//! The first line is the header: its first cell names the rater column and
//! the remaining cells are item labels. Every further non-blank line is one
//! rater: a label followed by one cell per item.

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use kalpha_core::{Error, Rating, RatingTable};
use tracing::debug;

pub fn parse_delimited(text: &str, config: &LoaderConfig) -> Result<RatingTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(LoadError::Parse {
        line: 1,
        message: "input is empty".to_string(),
    })?;
    let header = split_record(header, config.delimiter, header_line)?;
    let items: Vec<String> = header.into_iter().skip(1).collect();

    let mut raters = Vec::new();
    let mut cells = Vec::new();
    for (line, record) in lines {
        let mut fields = split_record(record, config.delimiter, line)?.into_iter();
        let label = fields.next().unwrap_or_default();
        let row: Vec<Option<Rating>> = fields
            .map(|cell| {
                if config.is_missing(&cell) {
                    None
                } else {
                    Some(Rating::parse(&cell))
                }
            })
            .collect();

        if row.len() != items.len() {
            return Err(Error::MalformedTable(format!(
                "line {}: expected {} cells, found {}",
                line,
                items.len(),
                row.len()
            ))
            .into());
        }
        raters.push(label);
        cells.push(row);
    }

    debug!(raters = raters.len(), items = items.len(), "parsed delimited table");
    Ok(RatingTable::new(raters, items, cells)?)
}

/// Split one record on `delimiter`, honouring double quotes.
///
/// Inside quotes the delimiter is literal and `""` is an escaped quote.
/// Unquoted fields are trimmed.
fn split_record(record: &str, delimiter: char, line: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
        } else if ch == delimiter {
            fields.push(finish_field(&mut field, quoted));
            quoted = false;
        } else if ch == '"' && field.trim().is_empty() {
            field.clear();
            quoted = true;
            in_quotes = true;
        } else {
            field.push(ch);
        }
    }

    if in_quotes {
        return Err(LoadError::Parse {
            line,
            message: "unterminated quoted field".to_string(),
        });
    }
    fields.push(finish_field(&mut field, quoted));
    Ok(fields)
}

fn finish_field(field: &mut String, quoted: bool) -> String {
    let value = std::mem::take(field);
    if quoted {
        value
    } else {
        value.trim().to_string()
    }
}
