//! CSV export and re-import of sampled color grids.
//!
//! The layout mirrors a labeled data frame: the header row holds the sampled
//! x-offsets after one empty cell, each body row holds its y-offset followed
//! by the uppercase hex cells. Hex cells and numeric labels never contain
//! commas, so no quoting is needed.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::models::{Rgb, SampleGrid};

/// Render a sampled grid as a CSV document.
pub fn to_csv(grid: &SampleGrid) -> String {
    let mut out = String::new();
    for x in grid.col_offsets() {
        let _ = write!(out, ",{x}");
    }
    out.push('\n');
    for (y, cells) in grid.iter_rows() {
        let _ = write!(out, "{y}");
        for cell in cells {
            let _ = write!(out, ",{cell}");
        }
        out.push('\n');
    }
    out
}

/// Parse a CSV document produced by [`to_csv`] back into a grid.
///
/// Strict inverse: ragged rows, non-numeric labels and malformed hex cells
/// are rejected with the offending line number. Hex cells are normalized to
/// uppercase, so `parse_csv(to_csv(g)) == g` regardless of input casing.
pub fn parse_csv(input: &str) -> Result<SampleGrid> {
    let mut lines = input.lines().enumerate();

    let (_, header) = lines.next().ok_or(Error::CsvParse {
        line: 1,
        reason: "empty document".into(),
    })?;
    let mut header_fields = header.split(',');
    let corner = header_fields.next().unwrap_or_default();
    if !corner.trim().is_empty() {
        return Err(Error::CsvParse {
            line: 1,
            reason: format!("expected empty corner cell, got {corner:?}"),
        });
    }
    let cols = parse_offsets(header_fields, 1)?;
    if cols.is_empty() {
        return Err(Error::CsvParse {
            line: 1,
            reason: "no column offsets in header".into(),
        });
    }

    let mut rows = Vec::new();
    let mut cells = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let label = fields.next().unwrap_or_default();
        let y = parse_offset(label, line_no)?;
        if let Some(&prev) = rows.last() {
            if y <= prev {
                return Err(Error::CsvParse {
                    line: line_no,
                    reason: format!("row offset {y} not increasing after {prev}"),
                });
            }
        }
        rows.push(y);

        let mut row_cells = 0usize;
        for field in fields {
            let rgb = Rgb::parse_hex(field).map_err(|_| Error::CsvParse {
                line: line_no,
                reason: format!("malformed hex cell {field:?}"),
            })?;
            cells.push(rgb.hex_upper());
            row_cells += 1;
        }
        if row_cells != cols.len() {
            return Err(Error::CsvParse {
                line: line_no,
                reason: format!("expected {} cells, got {row_cells}", cols.len()),
            });
        }
    }

    if rows.is_empty() {
        return Err(Error::CsvParse {
            line: 2,
            reason: "no data rows".into(),
        });
    }

    Ok(SampleGrid::new(rows, cols, cells))
}

fn parse_offsets<'a>(fields: impl Iterator<Item = &'a str>, line: usize) -> Result<Vec<u32>> {
    let mut offsets = Vec::new();
    for field in fields {
        let value = parse_offset(field, line)?;
        if let Some(&prev) = offsets.last() {
            if value <= prev {
                return Err(Error::CsvParse {
                    line,
                    reason: format!("column offset {value} not increasing after {prev}"),
                });
            }
        }
        offsets.push(value);
    }
    Ok(offsets)
}

fn parse_offset(field: &str, line: usize) -> Result<u32> {
    field.trim().parse::<u32>().map_err(|_| Error::CsvParse {
        line,
        reason: format!("invalid pixel offset {field:?}"),
    })
}
