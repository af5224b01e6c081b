use crate::model::{Cell, Table};

/// Normalize a raw grid into a cleaned table.
///
/// Drops all-empty rows and columns, discards grids left with fewer
/// than 2 columns, promotes the first surviving row to headers and
/// collapses whitespace runs in text cells. Returns `None` for a
/// discarded grid; that is a silent filter, not an error.
pub fn clean_grid(grid: Vec<Vec<Cell>>, page_number: usize) -> Option<Table> {
    if grid.is_empty() {
        return None;
    }

    // Rectangularize: pad ragged rows to the widest row.
    let width = grid.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut rows: Vec<Vec<Cell>> = grid
        .into_iter()
        .map(|mut row| {
            row.resize(width, Cell::Empty);
            row
        })
        .collect();

    rows.retain(|row| !row.iter().all(Cell::is_empty));
    if rows.is_empty() {
        return None;
    }

    let keep: Vec<usize> = (0..width)
        .filter(|&c| rows.iter().any(|row| !row[c].is_empty()))
        .collect();
    if keep.len() < 2 {
        return None;
    }

    let mut pruned: Vec<Vec<Cell>> = rows
        .into_iter()
        .map(|row| {
            keep.iter()
                .map(|&c| collapse_cell(row[c].clone()))
                .collect()
        })
        .collect();

    let header_row = pruned.remove(0);
    let headers: Vec<String> = header_row.iter().map(Cell::as_text).collect();

    Some(Table {
        page_number,
        headers,
        rows: pruned,
    })
}

/// Collapse internal whitespace runs to single spaces in text cells;
/// numbers and empties pass through unchanged.
fn collapse_cell(cell: Cell) -> Cell {
    match cell {
        Cell::Text(s) => Cell::Text(collapse_ws(&s)),
        other => other,
    }
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
