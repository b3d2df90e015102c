use serde::Serialize;

use crate::error::ScanError;
use crate::scanner::ScanOutput;
use crate::scanner::token::Token;

const HEADERS: [&str; 4] = ["LEXEME", "KIND", "LINE", "COLUMN"];

/// Render tokens as an aligned four-column table.
pub fn token_table(tokens: &[Token]) -> String {
    let rows: Vec<[String; 4]> = tokens
        .iter()
        .map(|t| {
            [
                printable(&t.lexeme),
                t.kind.to_string(),
                t.line.to_string(),
                t.column.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut buf = String::new();
    push_row(&mut buf, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut buf, row, &widths);
    }
    buf
}

fn push_row(buf: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    buf.push_str(line.trim_end());
    buf.push('\n');
}

/// Block comments and escaped strings may hold real line breaks; keep each
/// token on one row.
fn printable(lexeme: &str) -> String {
    lexeme.replace('\r', "\\r").replace('\n', "\\n")
}

pub fn error_list(errors: &[ScanError]) -> String {
    let mut buf = String::new();
    for e in errors {
        buf.push_str(&e.to_string());
        buf.push('\n');
    }
    buf
}

#[derive(Serialize)]
struct ErrorEntry {
    message: String,
    line: usize,
    column: usize,
}

#[derive(Serialize)]
struct Document<'a> {
    tokens: &'a [Token],
    errors: Vec<ErrorEntry>,
}

pub fn to_json(output: &ScanOutput) -> String {
    let document = Document {
        tokens: &output.tokens,
        errors: output
            .errors
            .iter()
            .map(|e| ErrorEntry {
                message: e.message(),
                line: e.line,
                column: e.column,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&document).expect("scan output should be serializable")
}
