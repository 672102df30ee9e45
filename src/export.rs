//! Tabular export of token lists.
//!
//! Two CSV layouts: one token per row with a blank row between documents
//! ("CoNLL style"), or one row per document with a column per token.

use std::io::{self, Write};

/// Quote a field when it contains a comma, a quote or a line break
pub fn csv_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write one token per row, documents separated by a blank row
pub fn write_conll<W: Write, D: AsRef<[String]>>(writer: &mut W, docs: &[D]) -> io::Result<()> {
    writeln!(writer, "token")?;
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        for token in doc.as_ref() {
            writeln!(writer, "{}", csv_field(token))?;
        }
    }
    Ok(())
}

/// Write one row per document with columns `Token_1..Token_n`
///
/// Shorter documents leave their trailing columns empty.
pub fn write_rows<W: Write, D: AsRef<[String]>>(writer: &mut W, docs: &[D]) -> io::Result<()> {
    let width = docs.iter().map(|d| d.as_ref().len()).max().unwrap_or(0);

    let header: Vec<String> = (1..=width).map(|i| format!("Token_{}", i)).collect();
    writeln!(writer, "{}", header.join(","))?;

    for doc in docs {
        let mut row: Vec<String> = doc.as_ref().iter().map(|t| csv_field(t)).collect();
        row.resize(width, String::new());
        writeln!(writer, "{}", row.join(","))?;
    }
    Ok(())
}
