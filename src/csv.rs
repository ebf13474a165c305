// src/csv.rs
use std::io;

use csv::{ReaderBuilder, WriterBuilder};

use crate::data::DataSet;

/* ---------------- Writing ---------------- */

/// Write headers (optionally) and rows to any writer. Quoting follows the
/// `csv` crate's defaults, so cells containing the delimiter, quotes or
/// newlines come out quoted.
pub fn write_table<W: io::Write>(
    w: W,
    data: &DataSet,
    include_headers: bool,
    delim: u8,
) -> Result<(), csv::Error> {
    let mut out = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(w);

    if include_headers {
        if let Some(h) = &data.headers {
            out.write_record(h)?;
        }
    }
    for row in &data.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Full export text for Copy / `--print`.
pub fn to_export_string(data: &DataSet, include_headers: bool, delim: u8) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, data, include_headers, delim)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Parsing ---------------- */

/// Read exported text back into rows. No header detection: every record is a row.
pub fn parse_rows(text: &str, delim: u8) -> Result<Vec<Vec<String>>, csv::Error> {
    ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .records()
        .map(|rec| rec.map(|r| r.iter().map(str::to_owned).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        DataSet {
            headers: Some(vec![s!("Player"), s!("Season"), s!("Yds")]),
            rows: vec![
                vec![s!("Doe, John"), s!("2022-23"), s!("1,204")],
                vec![s!("Doe, John"), s!("2023-24"), s!("0")],
            ],
        }
    }

    #[test]
    fn quotes_cells_with_delimiter() {
        let text = to_export_string(&sample(), true, b',').unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Player,Season,Yds"));
        assert_eq!(lines.next(), Some("\"Doe, John\",2022-23,\"1,204\""));
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let text = to_export_string(&sample(), false, b'\t').unwrap();
        assert_eq!(text.lines().next(), Some("Doe, John\t2022-23\t1,204"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn parse_reads_back_quoted_cells() {
        let text = to_export_string(&sample(), true, b',').unwrap();
        let rows = parse_rows(&text, b',').unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], "Doe, John");
        assert_eq!(rows[1][2], "1,204");
    }
}
