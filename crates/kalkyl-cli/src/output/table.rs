use kalkyl_core::model::Table;

pub fn print(tables: &[Table]) {
    if tables.is_empty() {
        println!("No tables detected.");
        return;
    }

    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== Table_{} (page {}) ===\n", i + 1, table.page_number);

        let widths = column_widths(table);

        print_row(&table.headers, &widths);
        print_row(
            &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
            &widths,
        );

        for row in &table.rows {
            let rendered: Vec<String> = row.iter().map(|c| c.as_text()).collect();
            print_row(&rendered, &widths);
        }
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();

    for row in &table.rows {
        for (c, cell) in row.iter().enumerate() {
            let w = cell.as_text().chars().count();
            if c < widths.len() && w > widths[c] {
                widths[c] = w;
            }
        }
    }

    widths
}

fn print_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", line.trim_end());
}
