//! Line-oriented CSV reader for project imports.
//!
//! Columns are positional: title, description, category, tech_stack,
//! live_link, github_link, images. `tech_stack` and `images` hold
//! `;`-separated lists.

use super::record::{split_list, ImportRecord};

const HEADER_MARKER: &str = "title";
const MIN_COLUMNS: usize = 2;

/// Splits one line into raw fields.
///
/// A field whose first non-blank character is `"` or `'` runs until the
/// matching quote; commas inside are literal and a doubled quote is an
/// escaped quote character. A quote that never closes is literal text and
/// the rest of the line splits on plain commas.
/// Fields are returned unquoted but otherwise untouched.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quote: Option<(char, usize)> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match quote {
            Some((q, _)) if c == q => {
                if chars.peek().map(|&(_, next)| next) == Some(q) {
                    current.push(q);
                    chars.next();
                } else {
                    quote = None;
                }
            }
            Some(_) => current.push(c),
            None => match c {
                ',' => fields.push(std::mem::take(&mut current)),
                '"' | '\'' if current.trim().is_empty() => {
                    current.clear();
                    quote = Some((c, index));
                }
                _ => current.push(c),
            },
        }
    }
    if let Some((_, start)) = quote {
        fields.extend(line[start..].split(',').map(str::to_string));
        return fields;
    }
    fields.push(current);
    fields
}

/// Trims a field and strips one pair of surrounding matching quotes.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    for q in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(q) && trimmed.ends_with(q) {
            return trimmed[1..trimmed.len() - 1].trim().to_string();
        }
    }
    trimmed.to_string()
}

fn is_header(line: &str) -> bool {
    line.to_lowercase().contains(HEADER_MARKER)
}

fn column(columns: &[String], index: usize) -> String {
    columns.get(index).cloned().unwrap_or_default()
}

fn optional_column(columns: &[String], index: usize) -> Option<String> {
    columns.get(index).filter(|value| !value.is_empty()).cloned()
}

fn row_to_record(columns: Vec<String>) -> ImportRecord {
    ImportRecord {
        title: column(&columns, 0),
        description: column(&columns, 1),
        category: column(&columns, 2),
        tech_stack: split_list(&column(&columns, 3), &[';']),
        live_link: optional_column(&columns, 4),
        github_link: optional_column(&columns, 5),
        images: split_list(&column(&columns, 6), &[';']),
    }
}

/// Parses a whole CSV document. Blank lines and short rows are skipped; the
/// first row is dropped when it looks like a header.
pub fn parse_csv(text: &str) -> Vec<ImportRecord> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let skip = match lines.first() {
        Some(first) if is_header(first) => 1,
        _ => 0,
    };

    lines
        .into_iter()
        .skip(skip)
        .filter_map(|line| {
            let columns: Vec<String> = split_csv_line(line)
                .iter()
                .map(|field| clean_field(field))
                .collect();
            if columns.len() < MIN_COLUMNS {
                log::warn!("Skipping CSV row with insufficient data: {}", line);
                return None;
            }
            Some(row_to_record(columns))
        })
        .collect()
}
