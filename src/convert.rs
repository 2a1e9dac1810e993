//! Turn tab-separated word lists (as exported from spreadsheets) into the CSV
//! files the loader reads.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

/// Copy every TSV row to `output` as a CSV row, quoting where needed. Rows
/// may have differing lengths. Returns the number of rows written.
pub fn convert_tsv_to_csv<R: Read, W: Write>(input: R, output: W) -> Result<usize> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut writer = WriterBuilder::new().flexible(true).from_writer(output);

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read TSV row {}", rows + 1))?;
        writer
            .write_record(&record)
            .with_context(|| format!("failed to write CSV row {}", rows + 1))?;
        rows += 1;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(rows)
}

/// File-to-file wrapper around [`convert_tsv_to_csv`].
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let source = File::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let target = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let rows = convert_tsv_to_csv(source, target)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        rows,
        "converted TSV to CSV"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let rows = convert_tsv_to_csv(input.as_bytes(), &mut out).unwrap();
        (rows, String::from_utf8(out).unwrap())
    }

    #[test]
    fn rewrites_tabs_as_commas() {
        let (rows, csv) = convert("Word\tDefinition 1\nHaus\thouse\n");
        assert_eq!(rows, 2);
        assert_eq!(csv, "Word,Definition 1\nHaus,house\n");
    }

    #[test]
    fn quotes_fields_with_commas_and_quotes() {
        let (_, csv) = convert("sagen\tto say, to tell\nZitat\tthe \"quote\"\n");
        assert_eq!(csv, "sagen,\"to say, to tell\"\nZitat,\"the \"\"quote\"\"\"\n");
    }

    #[test]
    fn accepts_ragged_rows() {
        let (rows, csv) = convert("a\tb\tc\nd\n");
        assert_eq!(rows, 2);
        assert_eq!(csv, "a,b,c\nd\n");
    }

    #[test]
    fn converted_output_loads_as_vocab() {
        let (_, csv) = convert("Word\tDefinition 1\nBaum\ttree, plant\n");
        let deck = crate::loader::parse_vocab(&csv).unwrap();
        assert_eq!(deck.cards()[0].front, "tree, plant");
        assert_eq!(deck.cards()[0].back, "Baum");
    }
}
