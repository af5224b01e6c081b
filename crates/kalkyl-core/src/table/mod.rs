//! Table reconstruction from `pdftotext -layout` output.
//!
//! The layout mode preserves column alignment using spaces, so a table
//! shows up as a run of lines whose fields are separated by multi-space
//! gaps at consistent character positions. Detection finds those runs;
//! column boundaries are the character intervals that are whitespace in
//! every line of the run.

pub mod clean;

use crate::extraction::PageContent;
use crate::model::{Cell, Table};

/// Minimum gap width (in spaces) treated as a column separator. A
/// single space is ordinary word spacing inside a cell.
const MIN_GAP: usize = 2;

/// Minimum number of consecutive tabular lines that form a region.
const MIN_REGION_LINES: usize = 2;

#[derive(Debug, Clone)]
pub struct TableRegion {
    pub page_number: usize,
    pub start_line: usize,
    pub end_line: usize,
}

/// Extract cleaned tables from layout pages, in (page order,
/// within-page detection order). That ordering drives sheet numbering
/// downstream and is the only ordering guarantee.
pub fn extract_tables_from_pages(pages: &[PageContent]) -> Vec<Table> {
    let mut tables = Vec::new();

    for region in find_table_regions(pages) {
        let Some(page) = pages.iter().find(|p| p.page_number == region.page_number) else {
            continue;
        };
        let lines = &page.lines[region.start_line..region.end_line];
        let grid = build_grid(lines);
        if let Some(table) = clean::clean_grid(grid, region.page_number) {
            tables.push(table);
        } else {
            log::debug!(
                "discarded table candidate on page {} (lines {}..{}): fewer than 2 columns after pruning",
                region.page_number,
                region.start_line,
                region.end_line
            );
        }
    }

    tables
}

/// Does this line look like a table row? True when it has at least two
/// fields separated by a multi-space gap.
fn is_tabular_line(line: &str) -> bool {
    field_count(line) >= 2
}

fn field_count(line: &str) -> usize {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let mut fields = 1;
    let mut gap = 0;
    for ch in trimmed.chars() {
        if ch == ' ' {
            gap += 1;
        } else {
            if gap >= MIN_GAP {
                fields += 1;
            }
            gap = 0;
        }
    }
    fields
}

/// Find the table region(s) within page content.
/// Returns ranges of line indices that appear to be table data.
pub fn find_table_regions(pages: &[PageContent]) -> Vec<TableRegion> {
    let mut regions = Vec::new();

    for page in pages {
        let mut region_start: Option<usize> = None;

        for (i, line) in page.lines.iter().enumerate() {
            if is_tabular_line(line) {
                if region_start.is_none() {
                    region_start = Some(i);
                }
                continue;
            }

            // Blank or non-tabular line ends the current region.
            if let Some(start) = region_start.take() {
                if i - start >= MIN_REGION_LINES {
                    regions.push(TableRegion {
                        page_number: page.page_number,
                        start_line: start,
                        end_line: i,
                    });
                }
            }
        }

        // Region running to the end of the page.
        if let Some(start) = region_start {
            if page.lines.len() - start >= MIN_REGION_LINES {
                regions.push(TableRegion {
                    page_number: page.page_number,
                    start_line: start,
                    end_line: page.lines.len(),
                });
            }
        }
    }

    regions
}

/// Build a raw cell grid from the lines of one region.
///
/// Column boundaries are inferred as the character intervals that are
/// whitespace in every line; gaps narrower than `MIN_GAP` merge into
/// the adjacent column.
pub fn build_grid(lines: &[String]) -> Vec<Vec<Cell>> {
    let rows: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if width == 0 {
        return Vec::new();
    }

    // Positions that hold whitespace in every row (short rows count as
    // whitespace past their end).
    let mut is_gap = vec![true; width];
    for row in &rows {
        for (i, ch) in row.iter().enumerate() {
            if !ch.is_whitespace() {
                is_gap[i] = false;
            }
        }
    }

    let columns = column_intervals(&is_gap);

    rows.iter()
        .map(|row| {
            columns
                .iter()
                .map(|&(start, end)| {
                    if start >= row.len() {
                        Cell::Empty
                    } else {
                        let slice: String = row[start..end.min(row.len())].iter().collect();
                        Cell::from_field(&slice)
                    }
                })
                .collect()
        })
        .collect()
}

/// Split the gap map into column (start, end) intervals, cutting only
/// at gap runs at least `MIN_GAP` wide.
fn column_intervals(is_gap: &[bool]) -> Vec<(usize, usize)> {
    let mut intervals = Vec::new();
    let mut col_start: Option<usize> = None;
    let mut gap_run = 0;
    let mut col_end = 0;

    for (i, &gap) in is_gap.iter().enumerate() {
        if gap {
            gap_run += 1;
            if gap_run == MIN_GAP {
                if let Some(start) = col_start.take() {
                    intervals.push((start, col_end));
                }
            }
        } else {
            if col_start.is_none() {
                col_start = Some(i);
            }
            gap_run = 0;
            col_end = i + 1;
        }
    }

    if let Some(start) = col_start {
        intervals.push((start, col_end));
    }

    intervals
}
